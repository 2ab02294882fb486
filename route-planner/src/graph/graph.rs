use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Iterator;

// ====== Basic traits =====

/// Requirements for a node identifier
pub trait Identifier: Eq + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

/// Defines data associated with each node.
pub trait GraphData: GraphBase {
  type Data;
  fn data(&self, node: Self::NodeId) -> &Self::Data;
}

// ====== Neighbors access =====

/// Trait for defining graph connectivity
/// 
/// `neighbors()` for node with id `u` must return all nodes `v` such that there is an edge from `u` to `v` in the graph.
/// Roads traveled in both directions are expected to be stored as two edges.
pub trait IntoNeighbors: GraphBase {
  type Neighbors: Iterator<Item = Self::NodeId>;
  fn neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}

// ====== Blanket implementations =====

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}
