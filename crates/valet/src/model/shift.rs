//! Shifts: one valet work session for one customer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Car, EmployeeId};
use crate::error::{Error, Result};

/// A single valet work session tied to one customer or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Who booked the valet service.
    pub customer_name: String,

    /// Where the shift takes place.
    pub address: String,

    /// When the shift starts.
    pub start_time: DateTime<Utc>,

    /// When the shift ends, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    /// Employees working the shift, in roster order.
    #[serde(default)]
    pub employees: Vec<EmployeeId>,

    /// Cars parked during the shift, in arrival order.
    #[serde(default)]
    pub cars: Vec<Car>,
}

impl Shift {
    /// Create a shift with no staff and no cars.
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        address: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            address: address.into(),
            start_time,
            end_time: None,
            employees: Vec::new(),
            cars: Vec::new(),
        }
    }

    /// Length of the shift, if it has an end time.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Cars still in the valet's care.
    pub fn active_cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|car| !car.is_returned())
    }

    /// Cars already handed back.
    pub fn returned_cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|car| car.is_returned())
    }

    /// Cars parked by the given employee.
    pub fn cars_parked_by(&self, employee: EmployeeId) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(move |car| car.parked_by == employee)
    }

    /// Find a car by license plate.
    #[must_use]
    pub fn car_by_plate(&self, plate: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.license_plate == plate)
    }

    /// Whether the employee is on this shift's roster.
    #[must_use]
    pub fn has_employee(&self, employee: EmployeeId) -> bool {
        self.employees.contains(&employee)
    }

    /// Check that every car was parked by someone on the roster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnassignedEmployee`] for the first car whose
    /// `parked_by` is not among this shift's employees.
    pub fn check_assignments(&self) -> Result<()> {
        match self.cars.iter().find(|car| !self.has_employee(car.parked_by)) {
            Some(car) => Err(Error::UnassignedEmployee {
                customer: self.customer_name.clone(),
                plate: car.license_plate.clone(),
                employee: car.parked_by,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    use crate::model::Departure;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap()
    }

    fn create_test_car(plate: &str, parked_by: EmployeeId, returned: bool) -> Car {
        let arrival_time = start() + Duration::minutes(10);
        Car {
            photo: None,
            license_plate: plate.to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            color: "Silver".to_string(),
            location_parked: "Lot B".to_string(),
            arrival_time,
            departure: if returned {
                Departure::Completed(arrival_time + Duration::minutes(90))
            } else {
                Departure::Pending
            },
            parked_by,
        }
    }

    #[test]
    fn test_new_shift_is_empty() {
        let shift = Shift::new("Gala", "1 Main St", start());
        assert!(shift.employees.is_empty());
        assert!(shift.cars.is_empty());
        assert!(shift.end_time.is_none());
        assert!(shift.duration().is_none());
    }

    #[test]
    fn test_duration() {
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.end_time = Some(start() + Duration::hours(5));
        assert_eq!(shift.duration(), Some(Duration::hours(5)));
    }

    #[test]
    fn test_active_and_returned_cars() {
        let valet = EmployeeId::new();
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.employees.push(valet);
        shift.cars.push(create_test_car("AAA100", valet, true));
        shift.cars.push(create_test_car("AAA101", valet, false));
        shift.cars.push(create_test_car("AAA102", valet, false));

        assert_eq!(shift.returned_cars().count(), 1);
        assert_eq!(shift.active_cars().count(), 2);
    }

    #[test]
    fn test_cars_parked_by() {
        let first = EmployeeId::new();
        let second = EmployeeId::new();
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.employees.extend([first, second]);
        shift.cars.push(create_test_car("AAA100", first, false));
        shift.cars.push(create_test_car("AAA101", second, false));
        shift.cars.push(create_test_car("AAA102", first, false));

        let plates: Vec<_> = shift
            .cars_parked_by(first)
            .map(|car| car.license_plate.as_str())
            .collect();
        assert_eq!(plates, vec!["AAA100", "AAA102"]);
    }

    #[test]
    fn test_car_by_plate() {
        let valet = EmployeeId::new();
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.cars.push(create_test_car("KEY777", valet, false));

        assert!(shift.car_by_plate("KEY777").is_some());
        assert!(shift.car_by_plate("KEY778").is_none());
    }

    #[test]
    fn test_check_assignments_ok() {
        let valet = EmployeeId::new();
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.employees.push(valet);
        shift.cars.push(create_test_car("AAA100", valet, true));

        assert!(shift.check_assignments().is_ok());
    }

    #[test]
    fn test_check_assignments_reports_first_stray_car() {
        let valet = EmployeeId::new();
        let stranger = EmployeeId::new();
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.employees.push(valet);
        shift.cars.push(create_test_car("AAA100", valet, true));
        shift.cars.push(create_test_car("AAA101", stranger, false));

        let err = shift.check_assignments().unwrap_err();
        match err {
            Error::UnassignedEmployee {
                plate, employee, ..
            } => {
                assert_eq!(plate, "AAA101");
                assert_eq!(employee, stranger);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shift_serialization() {
        let valet = EmployeeId::new();
        let mut shift = Shift::new("Gala", "1 Main St", start());
        shift.employees.push(valet);
        shift.cars.push(create_test_car("AAA100", valet, true));

        let json = serde_json::to_string(&shift).unwrap();
        assert!(!json.contains("end_time"));
        let back: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, back);
    }
}
