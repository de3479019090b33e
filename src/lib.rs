#[macro_use]
extern crate log;

pub mod command;
pub mod config;
pub mod dirs;
pub mod free_slots;
pub mod logger;
pub mod parking_lot;
pub mod printer;
pub mod runner;
pub mod slot;
pub mod vehicle;

pub use parking_lot::{ParkingLot, ParkingLotError};
pub use runner::Session;
