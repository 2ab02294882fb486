use crate::error::ModelError;
use crate::graph::*;
use crate::route::{PathNode, Route};
use crate::spatial::{bounding_box, BoundingBox, Position};
use super::common::*;
use super::dynamic_graph::*;
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
struct Entry {
  id: Idx,
  point: [f32; 2],
}

impl Entry {
  fn new(id: Idx, position: &Position) -> Self {
    Self {
      id: id,
      point: [position.x, position.y],
    }
  }
}

impl RTreeObject for Entry {
  type Envelope = AABB<[f32; 2]>;
  fn envelope(&self) -> Self::Envelope {
    AABB::from_point(self.point)
  }
}

impl PointDistance for Entry {
  fn distance_2(&self, point: &[f32; 2]) -> f32 {
    let dx = self.point[0] - point[0];
    let dy = self.point[1] - point[1];
    dx * dx + dy * dy
  }
}

/// Serializable description of a road network.
///
/// Node ids are indices into `nodes`. Each edge is directed, two-way roads are listed in both directions.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RoadNetwork {
  pub metric_scale: f32,
  pub nodes: Vec<Position>,
  pub edges: Vec<(Idx, Idx)>,
}

/// Road network graph used for planning.
///
/// Nodes are positioned in normalized `[0, 1]` map space and indexed in an R-tree for closest node
/// lookups. `metric_scale` converts normalized distances into real-world units. The model also keeps
/// the path of the last committed route, see [`crate::route::plan_route`].
pub struct RouteModel {
  graph: DynamicGraph<Position>,
  rtree: RTree<Entry>,
  metric_scale: f32,
  path: Vec<PathNode<Idx>>,
}

fn check_position(node: Idx, position: &Position) -> Result<(), ModelError> {
  if position.x.is_finite() && position.y.is_finite() {
    Ok(())
  } else {
    Err(ModelError::InvalidPosition { node })
  }
}

impl RouteModel {
  pub fn new(metric_scale: f32) -> Result<Self, ModelError> {
    if !metric_scale.is_finite() || metric_scale <= 0.0 {
      return Err(ModelError::InvalidMetricScale(metric_scale));
    }
    Ok(Self {
      graph: DynamicGraph::new(),
      rtree: RTree::new(),
      metric_scale: metric_scale,
      path: Vec::new(),
    })
  }

  pub fn from_network(network: RoadNetwork) -> Result<Self, ModelError> {
    let mut model = Self::new(network.metric_scale)?;

    for (id, position) in network.nodes.iter().enumerate() {
      check_position(id as Idx, position)?;
    }
    let entries = network
      .nodes
      .iter()
      .enumerate()
      .map(|(id, position)| Entry::new(id as Idx, position))
      .collect();
    model.rtree = RTree::bulk_load(entries);
    model.graph = DynamicGraph::new_with_data(network.nodes);

    for (from, to) in network.edges {
      model.add_edge(from, to)?;
    }
    Ok(model)
  }

  pub fn to_network(&self) -> RoadNetwork {
    RoadNetwork {
      metric_scale: self.metric_scale,
      nodes: self.graph.iter_data().cloned().collect(),
      edges: self.graph.edges().collect(),
    }
  }

  pub fn add_node(&mut self, position: Position) -> Result<Idx, ModelError> {
    check_position(self.graph.number_of_nodes() as Idx, &position)?;
    let id = self.graph.add_node(position);
    self.rtree.insert(Entry::new(id, &position));
    Ok(id)
  }

  /// Adds a one-way road segment from `from` to `to`.
  pub fn add_edge(&mut self, from: Idx, to: Idx) -> Result<&mut Self, ModelError> {
    for node in [from, to].iter() {
      if !self.graph.contains(*node) {
        return Err(ModelError::UnknownNode {
          node: *node,
          len: self.graph.number_of_nodes(),
        });
      }
    }
    self.graph.add_edge(from, to);
    Ok(self)
  }

  /// Adds a road segment which can be traveled in both directions.
  pub fn add_road(&mut self, a: Idx, b: Idx) -> Result<&mut Self, ModelError> {
    self.add_edge(a, b)?.add_edge(b, a)
  }

  pub fn number_of_nodes(&self) -> usize {
    self.graph.number_of_nodes()
  }

  pub fn number_of_edges(&self) -> usize {
    self.graph.number_of_edges()
  }

  pub fn is_empty(&self) -> bool {
    self.graph.number_of_nodes() == 0
  }

  pub fn bounds(&self) -> Option<BoundingBox> {
    bounding_box(self.graph.iter_data().cloned())
  }

  /// Nodes of the last committed route, start node first.
  pub fn path(&self) -> &[PathNode<Idx>] {
    &self.path
  }

  pub fn set_path(&mut self, route: &Route<Idx>) {
    self.path = route.nodes.clone();
  }

  pub fn clear_path(&mut self) {
    self.path.clear();
  }
}

impl GraphBase for RouteModel {
  type NodeId = Idx;
}

impl GraphData for RouteModel {
  type Data = Position;

  fn data(&self, node_id: Idx) -> &Self::Data {
    self.graph.data(node_id)
  }
}

impl Positioned for RouteModel {
  fn position(&self, node_id: Idx) -> Position {
    *self.data(node_id)
  }
}

impl Metric for RouteModel {
  fn metric_scale(&self) -> f32 {
    self.metric_scale
  }
}

impl Spatial for RouteModel {
  fn closest_node(&self, position: &Position) -> Option<Idx> {
    self
      .rtree
      .nearest_neighbor(&[position.x, position.y])
      .map(|entry| entry.id)
  }
}

impl<'a> IntoNeighbors for &'a RouteModel {
  type Neighbors = <&'a DynamicGraph<Position> as IntoNeighbors>::Neighbors;

  fn neighbors(self, node_id: Idx) -> Self::Neighbors {
    <&DynamicGraph<Position> as IntoNeighbors>::neighbors(&self.graph, node_id)
  }
}
