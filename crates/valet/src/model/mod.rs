//! Core record types for valet.
//!
//! These are passive records: an [`Employee`] works a [`Shift`], and each
//! [`Car`] on the shift remembers who parked it and whether it has been
//! handed back.

mod car;
mod employee;
mod shift;

pub use car::{Car, Departure};
pub use employee::{DisplayColor, Employee, EmployeeId};
pub use shift::Shift;
