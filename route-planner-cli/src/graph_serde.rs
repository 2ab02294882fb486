use crate::error::Result;
use route_planner::{RoadNetwork, RouteModel};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

fn is_json(path: &str) -> bool {
  Path::new(path)
    .extension()
    .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
}

/// Writes the network as bincode, or as JSON when `path` ends with `.json`.
pub fn save_network(network: &RoadNetwork, path: &str) -> Result<()> {
  let file = BufWriter::new(File::create(path)?);
  if is_json(path) {
    serde_json::to_writer(file, network)?;
  } else {
    bincode::serialize_into(file, network)?;
  }
  Ok(())
}

/// Reads a network written by [`save_network`].
pub fn load_network(path: &str) -> Result<RoadNetwork> {
  let file = BufReader::new(File::open(path)?);
  let network = if is_json(path) {
    serde_json::from_reader(file)?
  } else {
    bincode::deserialize_from(file)?
  };
  Ok(network)
}

pub fn load_model(path: &str) -> Result<RouteModel> {
  Ok(RouteModel::from_network(load_network(path)?)?)
}

/// Rewrites a network in the format given by the extension of `output`.
///
/// The network is checked by building a [`RouteModel`] first, nothing is written for an invalid graph.
pub fn convert_network(input: &str, output: &str) -> Result<RoadNetwork> {
  let network = load_model(input)?.to_network();
  save_network(&network, output)?;
  Ok(network)
}
