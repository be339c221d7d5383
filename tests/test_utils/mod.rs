use ugv_core::config::StoreConfig;
use ugv_core::position::Position;
use ugv_core::vehicle_state::VehicleStateStore;

pub const SAMPLE_POSITIONS: [Position; 3] = [
    Position::new(10.0, 20.0),
    Position::new(-33.793291910360125, 151.1435370795134),
    Position::new(31.2304, 121.4737),
];

pub fn new_store() -> VehicleStateStore {
    VehicleStateStore::new(StoreConfig::default())
}

pub fn store_with_engine_started() -> VehicleStateStore {
    let mut store = new_store();
    store.toggle_engine();
    assert!(store.engine_started());
    store
}

pub fn store_with_sample_waypoints() -> VehicleStateStore {
    let mut store = new_store();
    for (i, position) in SAMPLE_POSITIONS.iter().enumerate() {
        let _ = store.add_waypoint(*position, Some(&format!("wp{}", i)));
    }
    store
}
