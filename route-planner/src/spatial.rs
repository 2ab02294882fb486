//! Geometric types.

use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo::{Point, Rect};

#[doc(hidden)]
pub use geo::Coordinate;

/// Position of a node in normalized `[0, 1]` map space.
pub type Position = Coordinate<f32>;

pub type BoundingBox = Rect<f32>;

/// Map coordinates given by users are percentages of the map's bounding box.
pub const MAP_SCALE: f32 = 100.0;

/// Converts a `0..=100` map coordinate pair into normalized map space.
pub fn from_map_scale(x: f32, y: f32) -> Position {
  Position {
    x: x / MAP_SCALE,
    y: y / MAP_SCALE,
  }
}

pub fn euclidean_distance(from: &Position, to: &Position) -> f32 {
  Point::from(*from).euclidean_distance(&Point::from(*to))
}

pub fn bounding_box<P: Iterator<Item = Position>>(points: P) -> Option<BoundingBox> {
  let mut extremes: Option<(Position, Position)> = None;
  for p in points {
    let (bl, tr) = extremes.get_or_insert((p, p));
    bl.x = bl.x.min(p.x);
    bl.y = bl.y.min(p.y);
    tr.x = tr.x.max(p.x);
    tr.y = tr.y.max(p.y);
  }

  extremes.map(|e| BoundingBox::new(e.0, e.1))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_map_scale() {
    let p = from_map_scale(25.0, 100.0);
    assert_eq!(p, Position { x: 0.25, y: 1.0 });
    assert_eq!(from_map_scale(0.0, 0.0), Position { x: 0.0, y: 0.0 });
  }

  #[test]
  fn test_euclidean_distance() {
    let a = Position { x: 0.0, y: 0.0 };
    let b = Position { x: 3.0, y: 4.0 };
    assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-6);
    assert!((euclidean_distance(&b, &a) - 5.0).abs() < 1e-6);
    assert_eq!(euclidean_distance(&a, &a), 0.0);
  }

  #[test]
  fn test_bounding_box() {
    let points = vec![
      Position { x: 0.2, y: 0.9 },
      Position { x: 0.7, y: 0.1 },
      Position { x: 0.4, y: 0.5 },
    ];
    let bbox = bounding_box(points.into_iter()).unwrap();
    assert_eq!(bbox.min(), Position { x: 0.2, y: 0.1 });
    assert_eq!(bbox.max(), Position { x: 0.7, y: 0.9 });

    assert!(bounding_box(std::iter::empty()).is_none());
  }
}
