/// What a single key draw did to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Draw {
    /// The key was new and a node was hung at this depth.
    Inserted(usize),
    /// The key was already present. Its node's multiplicity was bumped.
    Repeat,
}
