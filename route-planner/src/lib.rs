//! A* route planning between two points of a road network.

pub mod spatial;
pub mod graph;
pub mod graph_impl;
pub mod planner;
pub mod route;
pub mod error;

mod search_space;

#[cfg(test)]
mod test_utils;

pub use error::{ModelError, PlannerError};
pub use graph_impl::{RoadNetwork, RouteModel};
pub use planner::{Expansion, RoutePlanner, SearchOptions};
pub use route::{plan_route, PathNode, Route};
