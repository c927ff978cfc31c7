//! Runs a sweep of random BST experiments for one [`Metric`] and gathers the
//! raw samples, the per-size averages and the matching [`model`] curve.
//! Drawing those series is left to whatever consumes the [`Series`].
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use random_bst::stats::{self, Metric, Sweep};
//!
//! let sweep = Sweep {
//!     start: 10,
//!     end: 50,
//!     step: 10,
//!     trials: 4,
//!     model_step: 5,
//! };
//! let series = stats::run(Metric::Leaves, &sweep, &mut StdRng::seed_from_u64(3)).unwrap();
//!
//! assert_eq!(series.samples.len(), 5 * 4);
//! assert_eq!(series.averages.len(), 5);
//! assert_eq!(series.model.len(), 9);
//! ```

use std::fmt;
use std::mem;
use std::str::FromStr;

use rand::Rng;

use crate::error::{Error, Result};
use crate::model;
use crate::random::RandomBst;

/// A statistic read off every tree in a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// [`RandomBst::height`].
    Height,
    /// [`RandomBst::leaves`].
    Leaves,
    /// [`RandomBst::successful_search_cost`].
    SuccessfulSearch,
    /// [`RandomBst::unsuccessful_search_cost`].
    UnsuccessfulSearch,
}

impl Metric {
    /// Human readable name for an axis or a legend.
    pub fn label(self) -> &'static str {
        match self {
            Self::Height => "Height",
            Self::Leaves => "Leaves",
            Self::SuccessfulSearch => "Compares for successful search",
            Self::UnsuccessfulSearch => "Compares for unsuccessful search",
        }
    }

    /// Trees built per size in the reference sweep.
    pub fn reference_trials(self) -> usize {
        match self {
            Self::Height => 200,
            Self::Leaves => 300,
            Self::SuccessfulSearch | Self::UnsuccessfulSearch => 500,
        }
    }

    /// Reads this metric off `tree`.
    ///
    /// # Errors
    ///
    /// The search costs return [`Error::EmptyTree`] for an empty tree.
    pub fn measure(self, tree: &RandomBst) -> Result<f64> {
        match self {
            Self::Height => Ok(tree.height() as f64),
            Self::Leaves => Ok(tree.leaves() as f64),
            Self::SuccessfulSearch => tree.successful_search_cost(),
            Self::UnsuccessfulSearch => tree.unsuccessful_search_cost(),
        }
    }

    /// The predicted average of this metric for trees built from `n` draws.
    pub fn model(self, n: usize) -> f64 {
        match self {
            Self::Height => model::height(n),
            Self::Leaves => model::leaves(n),
            Self::SuccessfulSearch => model::successful_search(n),
            Self::UnsuccessfulSearch => model::unsuccessful_search(n),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Accepts `height`, `leaves`, `ss` and `us`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        [
            Self::Height,
            Self::Leaves,
            Self::SuccessfulSearch,
            Self::UnsuccessfulSearch,
        ]
        .into_iter()
        .find(|metric| metric.to_string().eq_ignore_ascii_case(s))
        .ok_or_else(|| Error::UnknownMetric(s.to_owned()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Height => "height",
            Self::Leaves => "leaves",
            Self::SuccessfulSearch => "ss",
            Self::UnsuccessfulSearch => "us",
        };
        f.write_str(name)
    }
}

/// Which tree sizes to try and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sweep {
    /// Smallest number of draws.
    pub start: usize,
    /// Largest number of draws, included if the step lands on it.
    pub end: usize,
    /// Gap between consecutive sizes.
    pub step: usize,
    /// Trees built per size.
    pub trials: usize,
    /// Gap between consecutive points of the model curve. Sizes where the
    /// model is undefined are left out of the curve.
    pub model_step: usize,
}

impl Sweep {
    /// The sweep the published plots use: sizes 100 to 10,000 in steps of
    /// 100 (200 for the search costs), with the model sampled every 10.
    pub fn reference(metric: Metric) -> Self {
        let step = match metric {
            Metric::Height | Metric::Leaves => 100,
            Metric::SuccessfulSearch | Metric::UnsuccessfulSearch => 200,
        };
        Self {
            start: 100,
            end: 10_000,
            step,
            trials: metric.reference_trials(),
            model_step: 10,
        }
    }

    /// The tree sizes this sweep visits, in increasing order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.start..=self.end).step_by(self.step.max(1))
    }

    fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(Error::InvalidSweep("sizes must start at 1 or more"));
        }
        if self.start > self.end {
            return Err(Error::InvalidSweep("start is past end"));
        }
        if self.step == 0 || self.model_step == 0 {
            return Err(Error::InvalidSweep("steps must be at least 1"));
        }
        if self.trials == 0 {
            return Err(Error::InvalidSweep("at least one trial per size"));
        }
        if i64::try_from(self.end).is_err() {
            return Err(Error::InvalidSweep("sizes are too large"));
        }

        // Every sample has to fit in one `Vec<Point>`.
        let max_samples = isize::MAX as usize / mem::size_of::<Point>();
        let sizes = (self.end - self.start) / self.step + 1;
        match sizes.checked_mul(self.trials) {
            Some(samples) if samples <= max_samples => Ok(()),
            _ => Err(Error::InvalidSweep("too many samples")),
        }
    }
}

/// One `(n, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Number of draws.
    pub n: usize,
    /// What was measured or predicted at `n`.
    pub value: f64,
}

/// Everything a sweep produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The metric that was measured.
    pub metric: Metric,
    /// One point per tree built.
    pub samples: Vec<Point>,
    /// The mean of the samples at each size.
    pub averages: Vec<Point>,
    /// The closed-form prediction across the sweep's range.
    pub model: Vec<Point>,
}

/// Builds `sweep.trials` trees at every size of `sweep`, drawing keys from
/// `rng`, and measures `metric` on each.
///
/// # Errors
///
/// Returns [`Error::InvalidSweep`] if the sweep is malformed or asks for more
/// samples than can be held.
pub fn run<R: Rng>(metric: Metric, sweep: &Sweep, rng: &mut R) -> Result<Series> {
    sweep.validate()?;

    let mut samples = Vec::new();
    let mut averages = Vec::new();

    for n in sweep.sizes() {
        let draws = i64::try_from(n).map_err(|_| Error::InvalidSweep("sizes are too large"))?;
        let mut total = 0.0;

        for _ in 0..sweep.trials {
            let tree = RandomBst::with_rng(draws, &mut *rng)?;
            let value = metric.measure(&tree)?;
            total += value;
            samples.push(Point { n, value });
        }

        let mean = total / sweep.trials as f64;
        log::info!(
            "{}: n = {}, mean of {} trials = {:.3}",
            metric,
            n,
            sweep.trials,
            mean
        );
        averages.push(Point { n, value: mean });
    }

    // The height model is infinite at n = 1.
    let model = (sweep.start..=sweep.end)
        .step_by(sweep.model_step)
        .map(|n| Point {
            n,
            value: metric.model(n),
        })
        .filter(|point| point.value.is_finite())
        .collect();

    Ok(Series {
        metric,
        samples,
        averages,
        model,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn small_sweep() -> Sweep {
        Sweep {
            start: 10,
            end: 50,
            step: 20,
            trials: 6,
            model_step: 10,
        }
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!("height".parse::<Metric>(), Ok(Metric::Height));
        assert_eq!("LEAVES".parse::<Metric>(), Ok(Metric::Leaves));
        assert_eq!("ss".parse::<Metric>(), Ok(Metric::SuccessfulSearch));
        assert_eq!("Us".parse::<Metric>(), Ok(Metric::UnsuccessfulSearch));
        assert_eq!(
            "depth".parse::<Metric>(),
            Err(Error::UnknownMetric("depth".to_owned()))
        );
    }

    #[test]
    fn test_reference_sweeps() {
        let height = Sweep::reference(Metric::Height);
        assert_eq!(height.trials, 200);
        assert_eq!(height.sizes().count(), 100);

        assert_eq!(Sweep::reference(Metric::Leaves).trials, 300);

        let ss = Sweep::reference(Metric::SuccessfulSearch);
        assert_eq!(ss.trials, 500);
        assert_eq!(ss.sizes().count(), 50);
        assert_eq!(ss.sizes().last(), Some(9_900));
    }

    #[test]
    fn test_invalid_sweeps() {
        let mut rng = StdRng::seed_from_u64(0);
        let broken = [
            Sweep {
                start: 0,
                ..small_sweep()
            },
            Sweep {
                start: 60,
                ..small_sweep()
            },
            Sweep {
                step: 0,
                ..small_sweep()
            },
            Sweep {
                model_step: 0,
                ..small_sweep()
            },
            Sweep {
                trials: 0,
                ..small_sweep()
            },
        ];

        for sweep in &broken {
            assert!(matches!(
                run(Metric::Height, sweep, &mut rng),
                Err(Error::InvalidSweep(_))
            ));
        }
    }

    #[test]
    fn test_too_many_samples() {
        let mut rng = StdRng::seed_from_u64(0);
        let one_size = Sweep {
            start: 1,
            end: 1,
            step: 1,
            trials: usize::MAX,
            model_step: 1,
        };
        // Three sizes times this many trials overflows `usize`.
        let overflowing = Sweep {
            trials: usize::MAX / 2,
            ..small_sweep()
        };

        for sweep in [one_size, overflowing] {
            assert_eq!(
                run(Metric::Height, &sweep, &mut rng),
                Err(Error::InvalidSweep("too many samples"))
            );
        }
    }

    #[test]
    fn test_model_skips_undefined_sizes() {
        let sweep = Sweep {
            start: 1,
            end: 3,
            step: 1,
            trials: 2,
            model_step: 1,
        };
        let series = run(Metric::Height, &sweep, &mut StdRng::seed_from_u64(4)).unwrap();

        assert!(model::height(1).is_infinite());
        let model_sizes: Vec<_> = series.model.iter().map(|p| p.n).collect();
        assert_eq!(model_sizes, [2, 3]);
        assert!(series.model.iter().all(|p| p.value.is_finite()));

        // Every other model is defined from the first size on.
        let leaves = run(Metric::Leaves, &sweep, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(leaves.model.len(), 3);
    }

    #[test]
    fn test_run_collects_every_trial() {
        let sweep = small_sweep();
        let series = run(Metric::Height, &sweep, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(series.metric, Metric::Height);
        assert_eq!(series.samples.len(), 3 * 6);

        let sizes: Vec<_> = series.averages.iter().map(|p| p.n).collect();
        assert_eq!(sizes, [10, 30, 50]);

        for average in &series.averages {
            let batch: Vec<_> = series
                .samples
                .iter()
                .filter(|p| p.n == average.n)
                .map(|p| p.value)
                .collect();
            assert_eq!(batch.len(), 6);
            let mean = batch.iter().sum::<f64>() / 6.0;
            assert!((mean - average.value).abs() < 1e-9);
        }

        let model_sizes: Vec<_> = series.model.iter().map(|p| p.n).collect();
        assert_eq!(model_sizes, [10, 20, 30, 40, 50]);
        assert_eq!(series.model[0].value, model::height(10));
    }

    #[test]
    fn test_search_costs_are_at_least_one() {
        let mut rng = StdRng::seed_from_u64(8);
        for metric in [Metric::SuccessfulSearch, Metric::UnsuccessfulSearch] {
            let series = run(metric, &small_sweep(), &mut rng).unwrap();
            assert!(series.samples.iter().all(|p| p.value >= 1.0));
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = run(Metric::Leaves, &small_sweep(), &mut StdRng::seed_from_u64(1)).unwrap();
        let b = run(Metric::Leaves, &small_sweep(), &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(a, b);
    }
}
