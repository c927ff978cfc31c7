//! Advisory consistency checks for a [`RandomBst`]. Nothing here changes the
//! tree or stops the caller; problems are logged and handed back.

use std::fmt;

use super::RandomBst;

/// Something that should be true of every [`RandomBst`] but isn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A node whose key falls outside the range its ancestors allow.
    NotSymmetric {
        /// The misplaced key.
        key: u64,
    },
    /// The height kept during construction disagrees with a fresh traversal.
    HeightMismatch {
        /// Height maintained while inserting.
        recorded: usize,
        /// Height found by walking the tree.
        traversed: usize,
    },
    /// The tree is shorter than `floor(lg size)`, which no binary tree can be.
    TooShort {
        /// Height of the tree.
        height: usize,
        /// Number of nodes.
        size: usize,
    },
    /// `external == internal + 2 * size` doesn't hold.
    PathLengths {
        /// Internal path length.
        internal: usize,
        /// External path length.
        external: usize,
        /// Number of nodes.
        size: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSymmetric { key } => write!(f, "key {} breaks symmetric order", key),
            Self::HeightMismatch {
                recorded,
                traversed,
            } => write!(
                f,
                "recorded height {} but traversal found {}",
                recorded, traversed
            ),
            Self::TooShort { height, size } => write!(
                f,
                "height {} is below floor(lg {}) for {} nodes",
                height, size, size
            ),
            Self::PathLengths {
                internal,
                external,
                size,
            } => write!(
                f,
                "external path length {} != {} + 2 * {}",
                external, internal, size
            ),
        }
    }
}

impl RandomBst {
    /// Checks symmetric order over the whole tree, the running height against
    /// a traversal, the `floor(lg size)` lower bound on height, and the path
    /// length identity. Every violation found is logged as a warning and
    /// returned; an empty `Vec` means the tree is sound.
    ///
    /// This is a diagnostic for testing the other measurements, not one of
    /// the statistics.
    pub fn verify(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        self.check_order(self.root(), None, None, &mut violations);

        let traversed = self.traversed_height(self.root());
        if traversed != self.height {
            violations.push(Violation::HeightMismatch {
                recorded: self.height,
                traversed,
            });
        }

        let size = self.size();
        if size > 0 && self.height < size.ilog2() as usize {
            violations.push(Violation::TooShort {
                height: self.height,
                size,
            });
        }

        let internal = self.internal_path_len();
        let external = self.external_path_len();
        if external != internal + 2 * size {
            violations.push(Violation::PathLengths {
                internal,
                external,
                size,
            });
        }

        for violation in &violations {
            log::warn!("{}", violation);
        }
        violations
    }

    /// Every key in a subtree must lie strictly between the bounds set by its
    /// ancestors, not just on the right side of its parent.
    fn check_order(
        &self,
        link: Option<usize>,
        low: Option<u64>,
        high: Option<u64>,
        violations: &mut Vec<Violation>,
    ) {
        let Some(node) = self.node(link) else {
            return;
        };

        let above_low = low.map_or(true, |low| node.key > low);
        let below_high = high.map_or(true, |high| node.key < high);
        if !(above_low && below_high) {
            violations.push(Violation::NotSymmetric { key: node.key });
        }

        self.check_order(node.left, low, Some(node.key), violations);
        self.check_order(node.right, Some(node.key), high, violations);
    }

    fn traversed_height(&self, link: Option<usize>) -> usize {
        match self.node(link) {
            None => 0,
            Some(node) => {
                1 + self
                    .traversed_height(node.left)
                    .max(self.traversed_height(node.right))
            }
        }
    }
}
