//! Route results.

use crate::error::Result;
use crate::graph::*;
use crate::graph_impl::{Idx, RouteModel};
use crate::planner::{RoutePlanner, SearchOptions};
use crate::spatial::Position;
use serde::Serialize;

/// Copy of a graph node on a route.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PathNode<N: Identifier> {
  pub id: N,
  pub position: Position,
}

/// Route found by [`RoutePlanner::a_star_search`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route<N: Identifier> {
  /// Nodes from the start node to the end node, both included.
  pub nodes: Vec<PathNode<N>>,
  /// Total distance in real-world units.
  pub distance: f32,
  /// Number of distinct nodes pushed onto the open set.
  pub visited: usize,
  /// Number of nodes expanded.
  pub expanded: usize,
}

impl<N: Identifier> Route<N> {
  pub fn ids(&self) -> impl Iterator<Item = N> + '_ {
    self.nodes.iter().map(|node| node.id)
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}

/// Sums the real-world distance along a sequence of nodes.
pub fn calculate_distance<G: Copy + Metric, Ids: Iterator<Item = G::NodeId>>(
  graph: G,
  ids: Ids,
) -> f32 {
  let ids: Vec<_> = ids.collect();
  let length: f32 = ids
    .windows(2)
    .map(|pair| graph.distance(pair[0], pair[1]))
    .sum();
  length * graph.metric_scale()
}

/// Plans a route between two `0..=100` map coordinates and stores it as the model's path.
pub fn plan_route(
  model: &mut RouteModel,
  start: (f32, f32),
  end: (f32, f32),
  options: SearchOptions,
) -> Result<Route<Idx>> {
  let route = {
    let mut planner = RoutePlanner::with_options(&*model, start.0, start.1, end.0, end.1, options)?;
    planner.a_star_search()?
  };
  model.set_path(&route);
  Ok(route)
}

#[cfg(test)]
mod tests {
  use super::super::test_utils::*;
  use super::*;
  use crate::error::PlannerError;

  #[test]
  fn test_plan_route_sets_path() {
    let mut model = square_with_diagonal();

    let route = plan_route(&mut model, (0.0, 0.0), (100.0, 100.0), SearchOptions::default()).unwrap();

    assert_eq!(route.ids().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(model.path(), &route.nodes[..]);
    assert_eq!(model.path()[1].position, Position { x: 1.0, y: 1.0 });
  }

  #[test]
  fn test_plan_route_keeps_path_on_error() {
    let mut model = disconnected();

    plan_route(&mut model, (0.0, 0.0), (10.0, 0.0), SearchOptions::default()).unwrap();
    assert_eq!(model.path().len(), 2);

    let result = plan_route(&mut model, (0.0, 0.0), (100.0, 100.0), SearchOptions::default());
    assert_eq!(result.err(), Some(PlannerError::NoPath { explored: 2 }));
    assert_eq!(model.path().len(), 2);

    model.clear_path();
    assert!(model.path().is_empty());
  }

  #[test]
  fn test_calculate_distance() {
    let model = square_with_diagonal();

    assert!((calculate_distance(&model, vec![0, 1, 2].into_iter()) - 2.0).abs() < 1e-6);
    assert_eq!(calculate_distance(&model, vec![3].into_iter()), 0.0);
    assert_eq!(calculate_distance(&model, std::iter::empty()), 0.0);
  }
}
