//! `valet` - Valet-parking shift tracking
//!
//! This library models valet shifts (the staff working them and the cars they
//! park) and can seed an in-memory store with realistic demo data.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod random;
pub mod seed;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{Car, Departure, DisplayColor, Employee, EmployeeId, Shift};
pub use random::{Catalog, RandomSource, RngSource};
pub use seed::{generate, seed_store, DemoData};
pub use store::{Store, StoreStats};
