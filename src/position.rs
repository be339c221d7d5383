use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Coordinate increment applied by a single directional move.
pub const DEFAULT_STEP: f64 = 0.0005;

// NOTE: no range validation on purpose, a position can be anything the UI
// hands us (e.g. `lat` outside of [-90, 90]).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Position { lat, lng }
    }
}

// `geo-types` uses x/y, which is lng/lat.
impl From<Position> for geo_types::Coord<f64> {
    fn from(position: Position) -> Self {
        geo_types::coord! { x: position.lng, y: position.lat }
    }
}

impl From<geo_types::Coord<f64>> for Position {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        Position {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<Position> for geo_types::Point<f64> {
    fn from(position: Position) -> Self {
        geo_types::Point::from(geo_types::Coord::from(position))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn apply(self, position: Position, step: f64) -> Position {
        match self {
            Direction::Up => Position {
                lat: position.lat + step,
                ..position
            },
            Direction::Down => Position {
                lat: position.lat - step,
                ..position
            },
            Direction::Left => Position {
                lng: position.lng - step,
                ..position
            },
            Direction::Right => Position {
                lng: position.lng + step,
                ..position
            },
        }
    }
}
