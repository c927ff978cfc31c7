//! Runs one sweep of random BST experiments and prints the samples, the
//! averages and the model curve as CSV, ready for a plotting tool.

use std::error::Error;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use random_bst::stats::{self, Metric, Series, Sweep};

/// Sweep random BST statistics and print them as CSV.
///
/// Sweep settings that aren't given default to the reference sweep for the
/// chosen metric.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// What to measure: `height`, `leaves`, `ss` (search hit) or `us` (search miss).
    #[arg(short, long, default_value = "height")]
    metric: Metric,

    /// Smallest number of random keys.
    #[arg(long)]
    start: Option<usize>,

    /// Largest number of random keys.
    #[arg(long)]
    end: Option<usize>,

    /// Gap between tree sizes.
    #[arg(long)]
    step: Option<usize>,

    /// Trees built per size.
    #[arg(short, long)]
    trials: Option<usize>,

    /// Gap between sizes on the model curve.
    #[arg(long)]
    model_step: Option<usize>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let reference = Sweep::reference(cli.metric);
    let sweep = Sweep {
        start: cli.start.unwrap_or(reference.start),
        end: cli.end.unwrap_or(reference.end),
        step: cli.step.unwrap_or(reference.step),
        trials: cli.trials.unwrap_or(reference.trials),
        model_step: cli.model_step.unwrap_or(reference.model_step),
    };
    log::info!("sweeping {} ({}) over {:?}", cli.metric, cli.metric.label(), sweep);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let series = stats::run(cli.metric, &sweep, &mut rng)?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_csv(&series, &mut out)?;
    out.flush()?;

    Ok(())
}

/// Writes a `series,n,value` header, then the averages, the samples and the
/// model curve, one point per row.
fn write_csv(series: &Series, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "series,n,value")?;
    for (name, points) in [
        ("average", &series.averages),
        ("sample", &series.samples),
        ("model", &series.model),
    ] {
        for point in points {
            writeln!(out, "{},{},{}", name, point.n, point.value)?;
        }
    }

    Ok(())
}
