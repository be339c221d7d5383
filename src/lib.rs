#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

mod frb_generated; /* AUTO INJECTED BY flutter_rust_bridge. This line may not be accurate, and you can change it according to your needs. */

pub mod api;
pub mod config;
mod logs;
pub mod position;
pub mod vehicle_state;
pub mod waypoint;
