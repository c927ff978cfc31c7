//! A BST grown from uniformly random keys. The tree is never balanced: its
//! shape is whatever `n` random inserts happen to produce, which is exactly
//! what the average-case analyses of BST algorithms talk about.
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to their children by
//! index. The root, when there is one, is always the first slot.
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use random_bst::RandomBst;
//!
//! let tree = RandomBst::with_rng(1_000, StdRng::seed_from_u64(7)).unwrap();
//!
//! // Repeated keys bump a multiplicity instead of growing the tree.
//! assert!(tree.size() <= 1_000);
//!
//! // Classic identities hold for every tree.
//! assert_eq!(tree.external_node_count(), tree.size() + 1);
//! assert_eq!(
//!     tree.external_path_len(),
//!     tree.internal_path_len() + 2 * tree.size()
//! );
//! ```

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::util::Draw;

mod verify;

pub use verify::Violation;

/// Arena slot of the root of a non-empty tree.
const ROOT: usize = 0;

/// Most nodes reserved up front. Bigger trees grow the arena as they go.
const MAX_RESERVED_NODES: usize = 1 << 20;

/// A single key in a [`RandomBst`]. Keys are unique within a tree; drawing
/// the same key again only bumps [`count`][Node::count].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: u64,
    count: usize,

    /// Distance from the root. Fixed when the node is hung and never
    /// recomputed.
    depth: usize,

    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn new(key: u64, depth: usize) -> Self {
        Self {
            key,
            count: 1,
            depth,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// How many of the tree's draws produced this key.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether both child slots are empty. A node with one child is not a leaf.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Post-order summary of a subtree.
#[derive(Debug, Default, Clone, Copy)]
struct PathLengths {
    size: usize,
    internal: usize,
    external: usize,
}

/// A binary search tree built from `n` uniform draws over `[1, n]`. It is
/// built in one go and never changes afterwards; all the methods are
/// measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomBst {
    nodes: Vec<Node>,

    /// Number of draws, which is also the size of the key universe.
    n: usize,

    /// Largest `depth + 1` of any node, maintained while inserting.
    height: usize,
}

impl RandomBst {
    /// Builds a tree from `n` draws using a freshly seeded generator that
    /// belongs to this construction alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_bst::{Error, RandomBst};
    ///
    /// let tree = RandomBst::new(100).unwrap();
    /// assert_eq!(tree.n(), 100);
    ///
    /// assert_eq!(RandomBst::new(-1), Err(Error::InvalidArgument(-1)));
    /// ```
    pub fn new(n: i64) -> Result<Self> {
        Self::with_rng(n, StdRng::from_entropy())
    }

    /// Builds a tree from `n` draws taken from `rng`. Two trees built from
    /// generators in the same state are identical.
    ///
    /// The measurements recurse once per level, so their stack depth is the
    /// tree's height. A generator that isn't uniform (e.g. one that counts
    /// upwards) can build a chain `n` levels deep.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `n` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use random_bst::RandomBst;
    ///
    /// let a = RandomBst::with_rng(500, StdRng::seed_from_u64(1)).unwrap();
    /// let b = RandomBst::with_rng(500, StdRng::seed_from_u64(1)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn with_rng<R: Rng>(n: i64, mut rng: R) -> Result<Self> {
        let draws = usize::try_from(n).map_err(|_| Error::InvalidArgument(n))?;
        let universe = draws as u64;

        Ok(Self::from_draws(
            (0..draws).map(|_| rng.gen_range(1..=universe)),
        ))
    }

    /// Inserts every key of `draws` in order, counting each as one draw.
    fn from_draws(draws: impl IntoIterator<Item = u64>) -> Self {
        let draws = draws.into_iter();
        let mut tree = Self {
            nodes: Vec::with_capacity(draws.size_hint().0.min(MAX_RESERVED_NODES)),
            n: 0,
            height: 0,
        };

        for key in draws {
            tree.n += 1;
            if let Draw::Inserted(depth) = tree.insert(key) {
                tree.height = tree.height.max(depth + 1);
            }
        }

        log::debug!(
            "built random BST: {} draws, {} nodes, height {}",
            tree.n,
            tree.size(),
            tree.height
        );
        tree
    }

    /// Walks down from the root without recursing and either hangs a new node
    /// where the walk falls off the tree or bumps the count of the node that
    /// already holds `key`.
    fn insert(&mut self, key: u64) -> Draw {
        if self.nodes.is_empty() {
            self.nodes.push(Node::new(key, 0));
            return Draw::Inserted(0);
        }

        let slot = self.nodes.len();
        let mut current = ROOT;
        loop {
            let node = &mut self.nodes[current];
            let depth = node.depth + 1;
            let child = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    node.count += 1;
                    return Draw::Repeat;
                }
            };

            match *child {
                Some(next) => current = next,
                None => {
                    *child = Some(slot);
                    self.nodes.push(Node::new(key, depth));
                    return Draw::Inserted(depth);
                }
            }
        }
    }

    fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(ROOT)
        }
    }

    fn node(&self, link: Option<usize>) -> Option<&Node> {
        link.map(|index| &self.nodes[index])
    }

    /// Number of draws this tree was built from.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of nodes, i.e. distinct keys drawn. At most [`n`][Self::n].
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes, which only happens for `n = 0`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of levels in the tree: one more than the depth of the
    /// deepest node, or 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes with no children.
    pub fn leaves(&self) -> usize {
        self.leaves_below(self.root())
    }

    fn leaves_below(&self, link: Option<usize>) -> usize {
        match self.node(link) {
            None => 0,
            Some(node) if node.is_leaf() => 1,
            Some(node) => self.leaves_below(node.left) + self.leaves_below(node.right),
        }
    }

    /// Number of empty child slots. Always `size() + 1`.
    pub fn external_node_count(&self) -> usize {
        self.external_below(self.root())
    }

    fn external_below(&self, link: Option<usize>) -> usize {
        match self.node(link) {
            None => 1,
            Some(node) => self.external_below(node.left) + self.external_below(node.right),
        }
    }

    /// Sum of the depths of all nodes.
    pub fn internal_path_len(&self) -> usize {
        self.path_lengths(self.root()).internal
    }

    /// Sum of the depths of all empty child slots, where an empty slot sits
    /// one level below the node that owns it.
    pub fn external_path_len(&self) -> usize {
        self.path_lengths(self.root()).external
    }

    /// Every node of a subtree of `size` nodes lies one level deeper than the
    /// subtree's root, except the root itself (`size - 1` extra levels). The
    /// same subtree has `size + 1` empty slots that each gain a level.
    fn path_lengths(&self, link: Option<usize>) -> PathLengths {
        let Some(node) = self.node(link) else {
            return PathLengths::default();
        };

        let left = self.path_lengths(node.left);
        let right = self.path_lengths(node.right);
        let size = left.size + right.size + 1;

        PathLengths {
            size,
            internal: left.internal + right.internal + size - 1,
            external: left.external + right.external + size + 1,
        }
    }

    /// Expected number of compares to find a key that is in the tree, with
    /// every stored key equally likely: `internal_path_len / size + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn successful_search_cost(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }

        Ok(self.internal_path_len() as f64 / self.size() as f64 + 1.0)
    }

    /// Expected number of compares for a search that misses, with every
    /// empty slot equally likely: `external_path_len / (size + 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTree`] if the tree has no nodes.
    pub fn unsuccessful_search_cost(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }

        Ok(self.external_path_len() as f64 / (self.size() + 1) as f64)
    }

    /// The shape of the tree as nested parentheses. Each node is written in
    /// pre-order as `(`, its left subtree, its right subtree, then `)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_bst::RandomBst;
    ///
    /// let tree = RandomBst::new(1).unwrap();
    /// assert_eq!(tree.paren_systems(), "()");
    /// ```
    pub fn paren_systems(&self) -> String {
        let mut out = String::with_capacity(2 * self.size());
        self.write_parens(self.root(), &mut out);
        out
    }

    fn write_parens(&self, link: Option<usize>, out: &mut String) {
        if let Some(node) = self.node(link) {
            out.push('(');
            self.write_parens(node.left, out);
            self.write_parens(node.right, out);
            out.push(')');
        }
    }

    /// The shape of the tree as a gambler's ruin sequence: in pre-order, `+`
    /// for every node and `-` for every empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_bst::RandomBst;
    ///
    /// let tree = RandomBst::new(0).unwrap();
    /// assert_eq!(tree.gambler_ruin_seq(), "-");
    /// ```
    pub fn gambler_ruin_seq(&self) -> String {
        let mut out = String::with_capacity(2 * self.size() + 1);
        self.write_ruin(self.root(), &mut out);
        out
    }

    fn write_ruin(&self, link: Option<usize>, out: &mut String) {
        match self.node(link) {
            None => out.push('-'),
            Some(node) => {
                out.push('+');
                self.write_ruin(node.left, out);
                self.write_ruin(node.right, out);
            }
        }
    }

    /// All nodes in ascending key order.
    pub fn in_order(&self) -> Vec<&Node> {
        let mut out = Vec::with_capacity(self.size());
        self.collect_in_order(self.root(), &mut out);
        out
    }

    fn collect_in_order<'a>(&'a self, link: Option<usize>, out: &mut Vec<&'a Node>) {
        if let Some(node) = self.node(link) {
            self.collect_in_order(node.left, out);
            out.push(node);
            self.collect_in_order(node.right, out);
        }
    }
}
