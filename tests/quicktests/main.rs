#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_bst::RandomBst;

mod properties;

/// Most draws a quicktest tree is built from.
const MAX_DRAWS: u16 = 5_000;

/// How to build one random tree in a quicktest: a number of draws in
/// `[0, MAX_DRAWS]` and the seed of the generator that makes them.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Trial {
    n: i64,
    seed: u64,
}

impl Trial {
    pub(crate) fn tree(&self) -> RandomBst {
        RandomBst::with_rng(self.n, StdRng::seed_from_u64(self.seed))
            .expect("quicktests only draw non-negative sizes")
    }
}

impl Arbitrary for Trial {
    /// Tells quickcheck how to pick a tree size and seed.
    fn arbitrary(g: &mut Gen) -> Self {
        Trial {
            n: i64::from(u16::arbitrary(g) % (MAX_DRAWS + 1)),
            seed: u64::arbitrary(g),
        }
    }

    /// Shrinks towards smaller trees from the same seed.
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let seed = self.seed;
        Box::new(
            self.n
                .shrink()
                .filter(|n| *n >= 0)
                .map(move |n| Trial { n, seed }),
        )
    }
}
