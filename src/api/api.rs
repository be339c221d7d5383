use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Result;
use flutter_rust_bridge::frb;

use crate::config::StoreConfig;
use crate::logs;
use crate::position::{Direction, Position};
use crate::vehicle_state::{VehicleState, VehicleStateStore};
use crate::waypoint::Waypoint;

/// Handle owned by the UI side. Each session carries its own store, there is
/// no global vehicle state.
#[frb(opaque)]
pub struct UgvSession {
    store: Mutex<VehicleStateStore>,
}

impl UgvSession {
    #[frb(sync)]
    pub fn new(config_json: Option<String>) -> Result<UgvSession> {
        let config = match config_json {
            None => StoreConfig::default(),
            Some(json) => StoreConfig::from_json_str(&json)?,
        };
        info!("new session at {:?}", config.default_position);
        Ok(UgvSession {
            store: Mutex::new(VehicleStateStore::new(config)),
        })
    }

    // A panic in the middle of an action can at most leave one field
    // half-updated, so a poisoned lock is still usable.
    fn store(&self) -> MutexGuard<'_, VehicleStateStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[frb(sync)]
    pub fn toggle_engine(&self) {
        self.store().toggle_engine()
    }

    #[frb(sync)]
    pub fn engine_started(&self) -> bool {
        self.store().engine_started()
    }

    #[frb(sync)]
    pub fn set_position(&self, lat: f64, lng: f64) {
        self.store().set_position(Position { lat, lng })
    }

    #[frb(sync)]
    pub fn get_position(&self) -> Position {
        self.store().position()
    }

    #[frb(sync)]
    pub fn move_vehicle(&self, direction: String) -> Result<bool> {
        let direction = Direction::from_str(&direction)
            .map_err(|_| anyhow!("Invalid direction: {:?}", direction))?;
        Ok(self.store().move_vehicle(direction))
    }

    #[frb(sync)]
    pub fn add_waypoint(&self, lat: f64, lng: f64, name: Option<String>) -> Waypoint {
        self.store()
            .add_waypoint(Position { lat, lng }, name.as_deref())
    }

    #[frb(sync)]
    pub fn delete_waypoint(&self, id: String) {
        self.store().delete_waypoint(&id)
    }

    #[frb(sync)]
    pub fn rename_waypoint(&self, id: String, new_name: String) {
        self.store().rename_waypoint(&id, &new_name)
    }

    /// `None` clears the selection, an unknown id is ignored.
    #[frb(sync)]
    pub fn select_waypoint(&self, id: Option<String>) {
        let mut store = self.store();
        match id {
            None => store.select_waypoint(None),
            Some(id) => {
                if let Some(waypoint) = store.find_waypoint(&id).cloned() {
                    store.select_waypoint(Some(waypoint));
                }
            }
        }
    }

    #[frb(sync)]
    pub fn get_selected_waypoint(&self) -> Option<Waypoint> {
        self.store().selected_waypoint().cloned()
    }

    #[frb(sync)]
    pub fn list_waypoints(&self) -> Vec<Waypoint> {
        self.store().waypoints().to_vec()
    }

    #[frb(sync)]
    pub fn drive_to_waypoint(&self, id: String) -> bool {
        let mut store = self.store();
        match store.find_waypoint(&id).cloned() {
            None => false,
            Some(waypoint) => store.drive_to_waypoint(&waypoint),
        }
    }

    #[frb(sync)]
    pub fn get_state(&self) -> VehicleState {
        self.store().state().clone()
    }

    /// Returns `(state_json, version)`, or `None` if `client_version` is
    /// already the latest.
    #[frb(sync)]
    pub fn get_state_json_if_changed(
        &self,
        client_version: Option<String>,
    ) -> Result<Option<(String, String)>> {
        let store = self.store();
        match store.state_if_changed(client_version.as_deref()) {
            None => Ok(None),
            Some((state, version)) => Ok(Some((serde_json::to_string(state)?, version))),
        }
    }
}

pub fn init_logging(cache_dir: String) -> Result<()> {
    logs::init(&cache_dir)
}

pub fn export_logs(cache_dir: String, target_file_path: String) -> Result<()> {
    logs::export(&cache_dir, &target_file_path)
}
