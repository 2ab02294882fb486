use crate::graph::*;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Search state of a single node, valid for one search only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode<N: Identifier> {
  pub g: f32,
  pub h: f32,
  // The node has been pushed onto the open set at least once
  pub visited: bool,
  // The node has been expanded, its `g` and `parent` are final
  pub closed: bool,
  pub parent: Option<N>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct State<N: Identifier> {
  f: OrderedFloat<f32>,
  h: OrderedFloat<f32>,
  g: OrderedFloat<f32>,
  id: N,
}

impl<N: Identifier> Ord for State<N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, ties on `f` go to the node closer to the target
    other.f.cmp(&self.f).then_with(|| other.h.cmp(&self.h))
  }
}

impl<N: Identifier> PartialOrd for State<N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Open set plus per node search state, keyed by node id.
///
/// The same node may be pushed more than once. Entries which are outdated by the
/// time they are popped are dropped there.
pub struct SearchSpace<N: Identifier> {
  pq: BinaryHeap<State<N>>,
  nodes: HashMap<N, SearchNode<N>>,
  expanded: usize,
}

impl<N: Identifier> SearchSpace<N> {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      nodes: HashMap::new(),
      expanded: 0,
    }
  }

  pub fn init(&mut self, node: N, h: f32) {
    self.push(node, None, 0.0, h);
  }

  pub fn get(&self, node: N) -> Option<&SearchNode<N>> {
    self.nodes.get(&node)
  }

  pub fn is_visited(&self, node: N) -> bool {
    self.nodes.get(&node).map_or(false, |state| state.visited)
  }

  pub fn g(&self, node: N) -> f32 {
    self.nodes.get(&node).map_or(0.0, |state| state.g)
  }

  /// Number of distinct nodes pushed onto the open set.
  pub fn visited_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn expanded_count(&self) -> usize {
    self.expanded
  }

  pub fn open_len(&self) -> usize {
    self.pq.len()
  }

  /// Records `node` as reached from `parent` and pushes it onto the open set.
  pub fn push(&mut self, node: N, parent: Option<N>, g: f32, h: f32) {
    let state = self.nodes.entry(node).or_insert(SearchNode {
      g: g,
      h: h,
      visited: false,
      closed: false,
      parent: parent,
    });
    state.g = g;
    state.h = h;
    state.parent = parent;
    state.visited = true;

    self.pq.push(State {
      f: OrderedFloat(g + h),
      h: OrderedFloat(h),
      g: OrderedFloat(g),
      id: node,
    });
  }

  pub fn close(&mut self, node: N) {
    if let Some(state) = self.nodes.get_mut(&node) {
      if !state.closed {
        state.closed = true;
        self.expanded += 1;
      }
    }
  }

  /// Removes the open entry with the lowest `f = g + h`.
  pub fn pop(&mut self) -> Option<N> {
    while let Some(State { g, id, .. }) = self.pq.pop() {
      if let Some(state) = self.nodes.get(&id) {
        if state.closed || g.into_inner() > state.g {
          continue;
        }
      }
      return Some(id);
    }
    None
  }

  /// Walks parent links from `node` back to a node without parent.
  pub fn unwind(&self, node: N) -> Vec<N> {
    let mut result: Vec<N> = vec![node];

    let mut current_node = node;
    while let Some(parent) = self.nodes.get(&current_node).and_then(|state| state.parent) {
      result.push(parent);
      current_node = parent;
    }
    result
  }
}
