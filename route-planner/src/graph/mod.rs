//! Set of traits for defining a graph abstraction.
//! 
//! The traits describe everything the planner needs from a road network: node
//! identity, connectivity, node positions, a distance metric and a closest node lookup.
//! 
mod graph;
mod spatial;
mod weighted;

pub use graph::*;
pub use spatial::*;
pub use weighted::*;
