//! Loading road networks and parsing user input for the `route-planner` command.

mod error;
mod graph_serde;

pub use error::{CliError, Result};
pub use graph_serde::{convert_network, load_model, load_network, save_network};

use route_planner::spatial::MAP_SCALE;

/// Parses a map coordinate, which must lie within `0..=100`.
pub fn parse_coordinate(name: &str, value: &str) -> Result<f32> {
  match value.trim().parse::<f32>() {
    Ok(v) if v.is_finite() && v >= 0.0 && v <= MAP_SCALE => Ok(v),
    _ => Err(CliError::InvalidCoordinate {
      name: name.to_string(),
      value: value.to_string(),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("start_x", "0").unwrap(), 0.0);
    assert_eq!(parse_coordinate("start_x", " 42.5 ").unwrap(), 42.5);
    assert_eq!(parse_coordinate("start_x", "100").unwrap(), 100.0);

    for bad in ["100.5", "-1", "NaN", "inf", "ten", ""].iter() {
      assert!(matches!(
        parse_coordinate("end_y", bad),
        Err(CliError::InvalidCoordinate { .. })
      ));
    }
  }

  #[test]
  fn test_coordinate_error_message() {
    let err = parse_coordinate("end_y", "250").unwrap_err();
    assert_eq!(err.to_string(), "end_y must be a number between 0 and 100, got '250'");
  }
}
