//! Graph data structures.
//! 
//! - [`DynamicGraph`] stores adjacency as a vector of targets in each node and allows growing the graph by adding nodes or edges.
//! - [`RouteModel`] wraps a [`DynamicGraph`] of node positions with a spatial index, a metric scale and the path output of the last route.

mod dynamic_graph;
mod route_model;
mod common;

pub use dynamic_graph::*;
pub use route_model::*;
pub use common::*;
