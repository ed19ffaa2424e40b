//! Error types for valet.
//!
//! This module defines all error types used throughout the valet crate,
//! providing detailed context for debugging and user-friendly error messages.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::EmployeeId;

/// The main error type for valet operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Model Errors ===
    /// A car cannot leave before it arrived.
    #[error("car {plate} cannot depart at {departure} before arriving at {arrival}")]
    DepartureBeforeArrival {
        /// License plate of the car.
        plate: String,
        /// When the car arrived.
        arrival: DateTime<Utc>,
        /// The rejected departure time.
        departure: DateTime<Utc>,
    },

    /// The car has already been handed back to its owner.
    #[error("car {plate} has already been returned")]
    AlreadyReturned {
        /// License plate of the car.
        plate: String,
    },

    // === Integrity Errors ===
    /// A car was parked by an employee who is not working the shift.
    #[error("car {plate} on shift '{customer}' was parked by {employee}, who is not on that shift")]
    UnassignedEmployee {
        /// Customer name of the shift.
        customer: String,
        /// License plate of the car.
        plate: String,
        /// The employee referenced by the car.
        employee: EmployeeId,
    },

    /// A shift references an employee the store does not know.
    #[error("shift '{customer}' references unknown employee {employee}")]
    UnknownEmployee {
        /// Customer name of the shift.
        customer: String,
        /// The unknown employee.
        employee: EmployeeId,
    },

    // === Lookup Errors ===
    /// No shift exists at the requested position.
    #[error("no shift at index {index}")]
    ShiftNotFound {
        /// The requested index.
        index: usize,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for valet operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is a link-integrity violation between cars,
    /// shifts and employees.
    #[must_use]
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::UnassignedEmployee { .. } | Self::UnknownEmployee { .. }
        )
    }

    /// Check if this error was raised by an invalid car state transition.
    #[must_use]
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            Self::DepartureBeforeArrival { .. } | Self::AlreadyReturned { .. }
        )
    }
}
