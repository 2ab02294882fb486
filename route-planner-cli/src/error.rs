use route_planner::{ModelError, PlannerError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid graph file: {0}")]
  Bincode(#[from] bincode::Error),

  #[error("invalid graph file: {0}")]
  Json(#[from] serde_json::Error),

  #[error("invalid graph: {0}")]
  Model(#[from] ModelError),

  #[error(transparent)]
  Planner(#[from] PlannerError),

  #[error("{name} must be a number between 0 and 100, got '{value}'")]
  InvalidCoordinate { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
