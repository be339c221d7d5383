use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::position::Position;

pub const DEFAULT_WAYPOINT_NAME: &str = "New Waypoint";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub position: Position,
    pub name: String,
}

/// Generates `waypoint-<millis>` ids from the wall clock.
///
/// Several ids requested within the same millisecond (or after the clock
/// went backwards) get a `-<seq>` suffix on top of the last timestamp we
/// handed out, so ids from one generator never collide.
pub struct WaypointIdGenerator {
    last_timestamp_ms: Option<i64>,
    seq: u32,
}

impl WaypointIdGenerator {
    pub fn new() -> Self {
        WaypointIdGenerator {
            last_timestamp_ms: None,
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    pub fn next_id_at(&mut self, timestamp_ms: i64) -> String {
        match self.last_timestamp_ms {
            Some(last_timestamp_ms) if timestamp_ms <= last_timestamp_ms => {
                self.seq += 1;
                format!("waypoint-{}-{}", last_timestamp_ms, self.seq)
            }
            _ => {
                self.last_timestamp_ms = Some(timestamp_ms);
                self.seq = 0;
                format!("waypoint-{}", timestamp_ms)
            }
        }
    }
}

impl Default for WaypointIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
