use crate::graph::GraphBase;
use crate::spatial::Position;

/// Defines where a graph node is located in normalized map space
pub trait Positioned: GraphBase {
  fn position(&self, node: Self::NodeId) -> Position;
}

/// Defines a spatial index for graph nodes
///
/// `closest_node` must return some node for any position as long as the graph is
/// not empty. `None` is only allowed for an empty graph.
pub trait Spatial: GraphBase {
  fn closest_node(&self, position: &Position) -> Option<Self::NodeId>;
}

impl<'a, G: Positioned> Positioned for &'a G {
  fn position(&self, node: Self::NodeId) -> Position {
    (*self).position(node)
  }
}

impl<'a, G: Spatial> Spatial for &'a G {
  fn closest_node(&self, position: &Position) -> Option<Self::NodeId> {
    (*self).closest_node(position)
  }
}
