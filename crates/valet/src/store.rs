//! In-memory store of employees and shifts.
//!
//! The store is an owned value handed to whoever needs it; nothing here is
//! global. Appends never fail. Link integrity between cars, shifts and
//! employees is checked on demand with [`Store::validate`].

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Employee, EmployeeId, Shift};
use crate::random::RngSource;
use crate::seed;

/// All employees and shifts known to the app.
///
/// Serializes for display only; a store is always rebuilt, never loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Store {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
}

/// Summary counts over a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Number of employees.
    pub employees: usize,
    /// Number of shifts.
    pub shifts: usize,
    /// Cars across all shifts.
    pub total_cars: usize,
    /// Cars already handed back.
    pub returned_cars: usize,
    /// Cars still parked.
    pub active_cars: usize,
    /// Cars parked by each employee, in employee order.
    pub cars_per_employee: Vec<EmployeeLoad>,
}

/// How many cars one employee has parked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeLoad {
    /// The employee.
    pub employee: EmployeeId,
    /// Their display name.
    pub name: String,
    /// Cars parked across all shifts.
    pub cars: usize,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store, seeding it with demo data when `with_demo_data` is set.
    ///
    /// Demo data uses an OS-seeded random source and the current time.
    #[must_use]
    pub fn bootstrap(with_demo_data: bool) -> Self {
        let mut store = Self::new();
        if with_demo_data {
            seed::seed_store(&mut store, &mut RngSource::from_os_rng(), Utc::now());
        }
        store
    }

    /// Create a store as described by the `[demo]` and `[store]` config.
    ///
    /// # Errors
    ///
    /// Returns an integrity error if `store.strict_assignments` is set and
    /// the seeded data fails [`Store::validate`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut store = Self::new();
        if config.demo.enabled {
            match config.demo.seed {
                Some(seed) => {
                    debug!(seed, "Seeding demo data from fixed seed");
                    seed::seed_store(&mut store, &mut RngSource::seeded(seed), Utc::now());
                }
                None => {
                    seed::seed_store(&mut store, &mut RngSource::from_os_rng(), Utc::now());
                }
            }
        } else {
            debug!("Demo data disabled; starting with an empty store");
        }

        if config.store.strict_assignments {
            store.validate()?;
        }
        Ok(store)
    }

    /// Append employees in order.
    pub fn append_employees(&mut self, employees: impl IntoIterator<Item = Employee>) {
        let before = self.employees.len();
        self.employees.extend(employees);
        debug!(added = self.employees.len() - before, "Appended employees");
    }

    /// Append a shift.
    pub fn append_shift(&mut self, shift: Shift) {
        debug!(
            customer = %shift.customer_name,
            cars = shift.cars.len(),
            "Appended shift"
        );
        self.shifts.push(shift);
    }

    /// All employees, in insertion order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// All shifts, in insertion order.
    #[must_use]
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    /// Look up a shift by position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShiftNotFound`] if there is no shift at `index`.
    pub fn shift(&self, index: usize) -> Result<&Shift> {
        self.shifts.get(index).ok_or(Error::ShiftNotFound { index })
    }

    /// Mutable access to a shift by position, e.g. to hand back a car.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShiftNotFound`] if there is no shift at `index`.
    pub fn shift_mut(&mut self, index: usize) -> Result<&mut Shift> {
        self.shifts
            .get_mut(index)
            .ok_or(Error::ShiftNotFound { index })
    }

    /// Look up an employee by id.
    #[must_use]
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Display name for an employee, or `"unknown"` if the id is dangling.
    #[must_use]
    pub fn employee_name(&self, id: EmployeeId) -> &str {
        self.employee(id).map_or("unknown", |e| e.name.as_str())
    }

    /// Compute summary counts.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let mut per_employee: HashMap<EmployeeId, usize> = HashMap::new();
        let mut total_cars = 0;
        let mut returned_cars = 0;

        for car in self.shifts.iter().flat_map(|s| s.cars.iter()) {
            total_cars += 1;
            if car.is_returned() {
                returned_cars += 1;
            }
            *per_employee.entry(car.parked_by).or_default() += 1;
        }

        let cars_per_employee = self
            .employees
            .iter()
            .map(|e| EmployeeLoad {
                employee: e.id,
                name: e.name.clone(),
                cars: per_employee.get(&e.id).copied().unwrap_or(0),
            })
            .collect();

        StoreStats {
            employees: self.employees.len(),
            shifts: self.shifts.len(),
            total_cars,
            returned_cars,
            active_cars: total_cars - returned_cars,
            cars_per_employee,
        }
    }

    /// Check link integrity and car timing across the whole store.
    ///
    /// Every shift's roster must name known employees, every car must have
    /// been parked by someone on its shift's roster, and no car may depart
    /// before it arrived.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in shift then car order.
    pub fn validate(&self) -> Result<()> {
        for shift in &self.shifts {
            if let Some(&employee) = shift
                .employees
                .iter()
                .find(|id| self.employee(**id).is_none())
            {
                warn!(customer = %shift.customer_name, %employee, "Unknown employee on shift");
                return Err(Error::UnknownEmployee {
                    customer: shift.customer_name.clone(),
                    employee,
                });
            }
            shift.check_assignments().inspect_err(|err| {
                warn!(customer = %shift.customer_name, error = %err, "Car parked by unassigned employee");
            })?;
            for car in &shift.cars {
                car.check_times()?;
            }
        }
        info!(shifts = self.shifts.len(), "Store passed validation");
        Ok(())
    }

    /// A copy of the store holding only the cars a listing should show.
    ///
    /// With `active_only` set, each shift keeps just the cars still parked.
    /// Employees and shift details are unchanged.
    #[must_use]
    pub fn listing(&self, active_only: bool) -> Self {
        let mut listed = self.clone();
        if active_only {
            for shift in &mut listed.shifts {
                shift.cars.retain(|car| !car.is_returned());
            }
        }
        listed
    }

    /// Pretty-printed JSON snapshot of the store, for display.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
