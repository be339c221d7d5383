use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::position::{Direction, Position};
use crate::waypoint::{Waypoint, WaypointIdGenerator};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleState {
    pub engine_started: bool,
    pub position: Position,
    pub waypoints: Vec<Waypoint>,
    // NOTE: this is a snapshot rather than an index into `waypoints`, deleting
    // the waypoint does not clear it.
    pub selected_waypoint: Option<Waypoint>,
}

impl VehicleState {
    pub fn new(position: Position) -> Self {
        VehicleState {
            engine_started: false,
            position,
            waypoints: Vec::new(),
            selected_waypoint: None,
        }
    }
}

/// Owns the vehicle state and is the only way to mutate it.
///
/// Movement (`move_vehicle`, `drive_to_waypoint`) is gated on the engine
/// being started, a rejected action returns `false` and changes nothing.
/// Every effective mutation bumps `version` so a UI can tell whether its
/// snapshot is stale.
pub struct VehicleStateStore {
    state: VehicleState,
    step: f64,
    default_waypoint_name: String,
    id_generator: WaypointIdGenerator,
    version: u64,
}

impl VehicleStateStore {
    pub fn new(config: StoreConfig) -> Self {
        VehicleStateStore {
            state: VehicleState::new(config.default_position),
            step: config.step,
            default_waypoint_name: config.default_waypoint_name,
            id_generator: WaypointIdGenerator::new(),
            version: 0,
        }
    }

    fn changed(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn engine_started(&self) -> bool {
        self.state.engine_started
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.state.waypoints
    }

    pub fn selected_waypoint(&self) -> Option<&Waypoint> {
        self.state.selected_waypoint.as_ref()
    }

    pub fn find_waypoint(&self, id: &str) -> Option<&Waypoint> {
        self.state.waypoints.iter().find(|w| w.id == id)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn toggle_engine(&mut self) {
        self.state.engine_started = !self.state.engine_started;
        info!(
            "engine {}",
            if self.state.engine_started {
                "started"
            } else {
                "stopped"
            }
        );
        self.changed();
    }

    pub fn set_position(&mut self, position: Position) {
        self.state.position = position;
        self.changed();
    }

    pub fn move_vehicle(&mut self, direction: Direction) -> bool {
        if !self.state.engine_started {
            warn!("cannot move {}, engine is not started", direction);
            return false;
        }
        self.state.position = direction.apply(self.state.position, self.step);
        debug!("moved {} to {:?}", direction, self.state.position);
        self.changed();
        true
    }

    pub fn add_waypoint(&mut self, position: Position, name: Option<&str>) -> Waypoint {
        let waypoint = Waypoint {
            id: self.id_generator.next_id(),
            position,
            name: name.unwrap_or(&self.default_waypoint_name).to_string(),
        };
        info!("waypoint added: {} ({})", waypoint.id, waypoint.name);
        self.state.waypoints.push(waypoint.clone());
        self.changed();
        waypoint
    }

    pub fn delete_waypoint(&mut self, id: &str) {
        let len = self.state.waypoints.len();
        self.state.waypoints.retain(|w| w.id != id);
        if self.state.waypoints.len() != len {
            info!("waypoint deleted: {}", id);
            self.changed();
        }
    }

    pub fn rename_waypoint(&mut self, id: &str, new_name: &str) {
        if let Some(waypoint) = self.state.waypoints.iter_mut().find(|w| w.id == id) {
            info!("waypoint renamed: {} ({} -> {})", id, waypoint.name, new_name);
            waypoint.name = new_name.to_string();
            self.changed();
        }
    }

    pub fn select_waypoint(&mut self, waypoint: Option<Waypoint>) {
        self.state.selected_waypoint = waypoint;
        self.changed();
    }

    pub fn drive_to_waypoint(&mut self, waypoint: &Waypoint) -> bool {
        if !self.state.engine_started {
            warn!("cannot drive to {}, engine is not started", waypoint.id);
            return false;
        }
        self.state.position = waypoint.position;
        info!("drove to waypoint {} at {:?}", waypoint.id, waypoint.position);
        self.changed();
        true
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn version_string(&self) -> String {
        format!("\"{:x}\"", self.version)
    }

    pub fn parse_version_string(version_str: &str) -> Option<u64> {
        // Remove quotes if present
        let cleaned = version_str.trim_matches('"');
        u64::from_str_radix(cleaned, 16).ok()
    }

    pub fn state_if_changed(&self, client_version: Option<&str>) -> Option<(&VehicleState, String)> {
        match client_version {
            Some(v_str) if (Self::parse_version_string(v_str) == Some(self.version)) => None,
            _ => Some((&self.state, self.version_string())),
        }
    }
}

impl Default for VehicleStateStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
