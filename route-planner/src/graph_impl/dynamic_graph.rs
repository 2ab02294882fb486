use crate::graph::*;
use super::common::*;

#[derive(Default, Clone, Debug)]
struct Node {
  out_edges: Vec<Idx>,
}

/// Simple graph implementation which stores edge references as a vector in each node. Not memory efficient. But allows adding nodes dynamically.
#[derive(Clone, Debug)]
pub struct DynamicGraph<NodeData> {
  nodes: Vec<Node>,
  data: Vec<NodeData>,
}

impl<NodeData> DynamicGraph<NodeData> {
  pub fn new() -> Self {
    Self {
      nodes: Vec::new(),
      data: Vec::new(),
    }
  }

  pub fn new_with_data(data: Vec<NodeData>) -> Self {
    Self {
      nodes: vec![Default::default(); data.len()],
      data: data,
    }
  }

  pub fn add_node(&mut self, data: NodeData) -> Idx {
    let size = self.data.len();
    self.nodes.push(Default::default());
    self.data.push(data);
    size as Idx
  }

  /// Adds a directed edge. Both ids must be valid nodes, use [`contains`](Self::contains) to check.
  pub fn add_edge(&mut self, from: Idx, to: Idx) -> &mut Self {
    self.nodes[from as usize].out_edges.push(to);
    self
  }

  pub fn contains(&self, node_id: Idx) -> bool {
    (node_id as usize) < self.nodes.len()
  }

  pub fn number_of_nodes(&self) -> usize {
    self.nodes.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.nodes.iter().map(|node| node.out_edges.len()).sum()
  }

  /// All `(from, to)` edges in node order.
  pub fn edges(&self) -> impl Iterator<Item = (Idx, Idx)> + '_ {
    self
      .nodes
      .iter()
      .enumerate()
      .flat_map(|(from, node)| node.out_edges.iter().map(move |to| (from as Idx, *to)))
  }

  pub fn iter_data(&self) -> std::slice::Iter<'_, NodeData> {
    self.data.iter()
  }
}

impl<NodeData> Default for DynamicGraph<NodeData> {
  fn default() -> Self {
    Self::new()
  }
}

impl<NodeData> GraphBase for DynamicGraph<NodeData> {
  type NodeId = Idx;
}

impl<'a, NodeData> IntoNeighbors for &'a DynamicGraph<NodeData> {
  type Neighbors = std::iter::Cloned<std::slice::Iter<'a, Idx>>;

  fn neighbors(self, node_id: Idx) -> Self::Neighbors {
    self.nodes[node_id as usize].out_edges.iter().cloned()
  }
}

impl<NodeData> GraphData for DynamicGraph<NodeData> {
  type Data = NodeData;

  fn data(&self, node_id: Idx) -> &Self::Data {
    &self.data[node_id as usize]
  }
}
