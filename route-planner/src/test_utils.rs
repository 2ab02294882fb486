use crate::graph_impl::*;
use crate::spatial::*;

pub fn graph_from_data_and_edges<T>(data: Vec<T>, edges: Vec<(usize, usize)>) -> DynamicGraph<T> {
  let mut graph = DynamicGraph::new_with_data(data);
  for (from, to) in edges {
    graph.add_edge(from as u32, to as u32);
  }
  graph
}

/// Builds a model with two-way roads between `positions`.
pub fn model_from_roads(positions: Vec<Position>, roads: Vec<(Idx, Idx)>, metric_scale: f32) -> RouteModel {
  let mut model = RouteModel::new(metric_scale).unwrap();
  for position in positions {
    model.add_node(position).unwrap();
  }
  for (a, b) in roads {
    model.add_road(a, b).unwrap();
  }
  model
}

const CORNERS: [Position; 4] = [
  Position { x: 0.0, y: 0.0 },
  Position { x: 1.0, y: 0.0 },
  Position { x: 1.0, y: 1.0 },
  Position { x: 0.0, y: 1.0 },
];

/// Unit square 0-1-2-3 without diagonals.
pub fn square() -> RouteModel {
  model_from_roads(Vec::from(CORNERS), vec![(0, 1), (1, 2), (2, 3), (3, 0)], 1.0)
}

/// Unit square 0-1-2-3 plus the 0-2 diagonal.
pub fn square_with_diagonal() -> RouteModel {
  model_from_roads(
    Vec::from(CORNERS),
    vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
    1.0,
  )
}

/// `n` nodes evenly spaced on the bottom edge of the map, connected in order.
pub fn line(n: usize, metric_scale: f32) -> RouteModel {
  assert!(n >= 2, "a line needs at least two nodes, got {}", n);
  let positions = (0..n)
    .map(|i| Position {
      x: i as f32 / (n - 1) as f32,
      y: 0.0,
    })
    .collect();
  let roads = (1..n).map(|i| ((i - 1) as Idx, i as Idx)).collect();
  model_from_roads(positions, roads, metric_scale)
}

/// Two separate roads: 0-1 near the origin and 2-3 near the opposite corner.
pub fn disconnected() -> RouteModel {
  model_from_roads(
    vec![
      Position { x: 0.0, y: 0.0 },
      Position { x: 0.1, y: 0.0 },
      Position { x: 0.9, y: 1.0 },
      Position { x: 1.0, y: 1.0 },
    ],
    vec![(0, 1), (2, 3)],
    1.0,
  )
}

/// Start 0 at the origin, end 4 at (0, 1). Both 1 and 2 lead to 3 which connects to the end.
/// Node 1 looks better to the heuristic, but the route through 2 is shorter.
pub fn detour() -> RouteModel {
  model_from_roads(
    vec![
      Position { x: 0.0, y: 0.0 },
      Position { x: 0.0, y: 0.4 },
      Position { x: 0.45, y: 0.1 },
      Position { x: 0.5, y: 0.5 },
      Position { x: 0.0, y: 1.0 },
    ],
    vec![(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)],
    1.0,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::graph::*;

  #[test]
  fn test_line_spans_map_width() {
    let model = line(2, 1.0);
    assert_eq!(model.position(1), Position { x: 1.0, y: 0.0 });
  }

  #[test]
  #[should_panic(expected = "a line needs at least two nodes")]
  fn test_line_rejects_single_node() {
    line(1, 1.0);
  }
}
