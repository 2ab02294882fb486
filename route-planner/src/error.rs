//! Error types.

use thiserror::Error;

use crate::graph_impl::Idx;

/// Errors produced by a route search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
  /// No node could be resolved for a route endpoint.
  #[error("graph has no nodes to route between")]
  EmptyGraph,

  /// The open set ran empty before the end node was reached.
  #[error("no path to the end node, {explored} nodes explored")]
  NoPath { explored: usize },

  /// A route endpoint has a non-finite coordinate.
  #[error("invalid map coordinate ({x}, {y})")]
  InvalidCoordinate { x: f32, y: f32 },
}

/// Errors produced while building a [`RouteModel`](crate::graph_impl::RouteModel).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
  #[error("edge references node {node}, but the graph has {len} nodes")]
  UnknownNode { node: Idx, len: usize },

  #[error("metric scale must be finite and positive, got {0}")]
  InvalidMetricScale(f32),

  #[error("node {node} has a non-finite position")]
  InvalidPosition { node: Idx },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
