use crate::graph::{GraphBase, IntoNeighbors, Positioned, Spatial};
use crate::spatial::euclidean_distance;

/// Distance metric of a graph
/// 
/// `distance` is measured in normalized map units and must be symmetric. The default
/// is the straight-line distance between node positions, which keeps the planner's
/// heuristic admissible as long as edges are not shorter than their end points are apart.
/// `metric_scale` converts normalized units into real-world units(e.g. meters).
pub trait Metric: Positioned {
  fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> f32 {
    euclidean_distance(&self.position(from), &self.position(to))
  }

  fn metric_scale(&self) -> f32;
}

impl<'a, G: Metric> Metric for &'a G
{
  fn distance(&self, from: Self::NodeId, to: Self::NodeId) -> f32 {
    (*self).distance(from, to)
  }

  fn metric_scale(&self) -> f32 {
    (*self).metric_scale()
  }
}

/// Everything the planner needs from a graph.
pub trait RoutableGraph: Copy + GraphBase + IntoNeighbors + Metric + Spatial {}
impl<T> RoutableGraph for T where T: Copy + GraphBase + IntoNeighbors + Metric + Spatial {}
