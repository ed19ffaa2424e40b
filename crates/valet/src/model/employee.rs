//! Employees and their display colors.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of an employee.
///
/// Cars and shifts refer to employees through this id, so two employees
/// created separately are always distinct even when their names match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Allocate a fresh, random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display color in hue/saturation/brightness form.
///
/// The app only ever shows this color next to an employee's name; nothing
/// inspects it beyond that. All components are kept in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayColor {
    /// Hue, as a fraction of a full turn.
    pub hue: f64,
    /// Saturation.
    pub saturation: f64,
    /// Brightness.
    pub brightness: f64,
}

impl DisplayColor {
    /// Build a color from its components, clamping each into `[0, 1]`.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue: hue.clamp(0.0, 1.0),
            saturation: saturation.clamp(0.0, 1.0),
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    /// A fully saturated, fully bright color with the given hue.
    #[must_use]
    pub fn from_hue(hue: f64) -> Self {
        Self::new(hue, 1.0, 1.0)
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsb({:.2}, {:.2}, {:.2})",
            self.hue, self.saturation, self.brightness
        )
    }
}

/// A valet working one or more shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Identity used by cars and shifts to refer to this employee.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Color used to tag this employee's cars.
    pub color: DisplayColor,
}

impl Employee {
    /// Create an employee with a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<String>, color: DisplayColor) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            color,
        }
    }
}
