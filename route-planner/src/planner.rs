//! A* route planner.
//!
//! [`RoutePlanner`] resolves two map coordinates to their closest graph nodes and searches
//! for the shortest path between them. The heuristic is the graph's straight-line distance
//! to the end node. All search state is kept in a [`SearchSpace`] created for every search,
//! so the graph is never modified and can be searched any number of times.

use crate::error::{PlannerError, Result};
use crate::graph::*;
use crate::route::{PathNode, Route};
use crate::search_space::SearchSpace;
use crate::spatial::from_map_scale;
use log::{debug, trace};

/// How rediscovered nodes are treated while expanding neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
  /// A node which is still open gets a new parent whenever a strictly shorter path to it is found.
  Relaxing,
  /// A node is pushed onto the open set once, the first path found to it is kept.
  /// Cheaper but may return a longer route.
  FirstVisit,
}

impl Default for Expansion {
  fn default() -> Self {
    Expansion::Relaxing
  }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
  pub expansion: Expansion,
}

pub struct RoutePlanner<G: RoutableGraph> {
  graph: G,
  start_node: G::NodeId,
  end_node: G::NodeId,
  options: SearchOptions,
  distance: f32,
}

impl<G: RoutableGraph> RoutePlanner<G> {
  /// Creates a planner between two points given in `0..=100` map coordinates.
  ///
  /// Coordinates outside that range snap to the closest node, non-finite ones are rejected.
  pub fn new(graph: G, start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> Result<Self> {
    Self::with_options(graph, start_x, start_y, end_x, end_y, SearchOptions::default())
  }

  pub fn with_options(
    graph: G,
    start_x: f32,
    start_y: f32,
    end_x: f32,
    end_y: f32,
    options: SearchOptions,
  ) -> Result<Self> {
    for &(x, y) in [(start_x, start_y), (end_x, end_y)].iter() {
      if !x.is_finite() || !y.is_finite() {
        return Err(PlannerError::InvalidCoordinate { x, y });
      }
    }

    let start_node = graph
      .closest_node(&from_map_scale(start_x, start_y))
      .ok_or(PlannerError::EmptyGraph)?;
    let end_node = graph
      .closest_node(&from_map_scale(end_x, end_y))
      .ok_or(PlannerError::EmptyGraph)?;

    debug!(
      "Start ({}, {}) resolved to {:?}, end ({}, {}) resolved to {:?}",
      start_x, start_y, start_node, end_x, end_y, end_node
    );

    Ok(Self {
      graph: graph,
      start_node: start_node,
      end_node: end_node,
      options: options,
      distance: 0.0,
    })
  }

  pub fn start_node(&self) -> G::NodeId {
    self.start_node
  }

  pub fn end_node(&self) -> G::NodeId {
    self.end_node
  }

  /// Distance of the last route found, in real-world units.
  pub fn distance(&self) -> f32 {
    self.distance
  }

  fn h_value(&self, node: G::NodeId) -> f32 {
    self.graph.distance(node, self.end_node)
  }

  fn add_neighbors(&self, search_space: &mut SearchSpace<G::NodeId>, current: G::NodeId) {
    let current_g = search_space.g(current);
    search_space.close(current);

    for neighbor in self.graph.neighbors(current) {
      let g = current_g + self.graph.distance(current, neighbor);

      match self.options.expansion {
        Expansion::FirstVisit => {
          if search_space.is_visited(neighbor) {
            continue;
          }
        }
        Expansion::Relaxing => {
          if let Some(state) = search_space.get(neighbor) {
            if state.closed || g >= state.g {
              continue;
            }
          }
        }
      }

      let h = match search_space.get(neighbor) {
        Some(state) => state.h,
        None => self.h_value(neighbor),
      };
      trace!("Push {:?} from {:?}: g = {}, h = {}", neighbor, current, g, h);
      search_space.push(neighbor, Some(current), g, h);
    }
  }

  fn next_node(search_space: &mut SearchSpace<G::NodeId>) -> Option<G::NodeId> {
    search_space.pop()
  }

  fn construct_final_path(&mut self, search_space: &SearchSpace<G::NodeId>, node: G::NodeId) -> Route<G::NodeId> {
    // Need to reverse the list to get elements in the routing order
    let ids: Vec<G::NodeId> = search_space.unwind(node).into_iter().rev().collect();

    let length: f32 = ids
      .windows(2)
      .map(|pair| self.graph.distance(pair[0], pair[1]))
      .sum();
    self.distance = length * self.graph.metric_scale();

    Route {
      nodes: ids
        .iter()
        .map(|&id| PathNode {
          id: id,
          position: self.graph.position(id),
        })
        .collect(),
      distance: self.distance,
      visited: search_space.visited_count(),
      expanded: search_space.expanded_count(),
    }
  }

  /// Runs A* from the start node to the end node.
  ///
  /// Returns [`PlannerError::NoPath`] when the end node can't be reached from the start node.
  pub fn a_star_search(&mut self) -> Result<Route<G::NodeId>> {
    let mut search_space = SearchSpace::new();
    search_space.init(self.start_node, self.h_value(self.start_node));

    let mut current = self.start_node;
    while current != self.end_node {
      self.add_neighbors(&mut search_space, current);
      current = match Self::next_node(&mut search_space) {
        Some(node) => node,
        None => {
          debug!(
            "No path from {:?} to {:?} after expanding {} nodes",
            self.start_node,
            self.end_node,
            search_space.expanded_count()
          );
          return Err(PlannerError::NoPath {
            explored: search_space.visited_count(),
          });
        }
      };
    }

    let route = self.construct_final_path(&search_space, current);
    debug!(
      "Route from {:?} to {:?}: {} nodes, distance = {}, visited = {}, open = {}",
      self.start_node,
      self.end_node,
      route.len(),
      route.distance,
      route.visited,
      search_space.open_len()
    );
    Ok(route)
  }
}
