//! Cars handed over to the valet team.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::EmployeeId;
use crate::error::{Error, Result};

/// Whether a car is still parked or has been handed back.
///
/// Holding the departure time inside the `Completed` variant means a car is
/// returned exactly when it has a departure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "at")]
pub enum Departure {
    /// Still parked.
    #[default]
    Pending,
    /// Handed back to the owner at the given time.
    Completed(DateTime<Utc>),
}

/// A car parked during a shift.
///
/// Deserializing rejects a departure earlier than the arrival, the same rule
/// [`Car::mark_returned`] enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CarRecord")]
pub struct Car {
    /// Photo taken at drop-off, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,

    /// License plate.
    pub license_plate: String,

    /// Manufacturer.
    pub make: String,

    /// Model name.
    pub model: String,

    /// Paint color.
    pub color: String,

    /// Where the car was parked.
    pub location_parked: String,

    /// When the car was dropped off.
    pub arrival_time: DateTime<Utc>,

    /// Departure state. Changed only through [`Car::mark_returned`].
    pub(crate) departure: Departure,

    /// The employee who parked the car.
    pub parked_by: EmployeeId,
}

/// Unchecked wire form of a [`Car`].
#[derive(Deserialize)]
struct CarRecord {
    #[serde(default)]
    photo: Option<Vec<u8>>,
    license_plate: String,
    make: String,
    model: String,
    color: String,
    location_parked: String,
    arrival_time: DateTime<Utc>,
    #[serde(default)]
    departure: Departure,
    parked_by: EmployeeId,
}

impl TryFrom<CarRecord> for Car {
    type Error = Error;

    fn try_from(record: CarRecord) -> Result<Self> {
        let car = Self {
            photo: record.photo,
            license_plate: record.license_plate,
            make: record.make,
            model: record.model,
            color: record.color,
            location_parked: record.location_parked,
            arrival_time: record.arrival_time,
            departure: record.departure,
            parked_by: record.parked_by,
        };
        car.check_times()?;
        Ok(car)
    }
}

impl Car {
    /// A car just dropped off: no photo, not yet returned.
    #[must_use]
    pub fn new(
        license_plate: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        location_parked: impl Into<String>,
        arrival_time: DateTime<Utc>,
        parked_by: EmployeeId,
    ) -> Self {
        Self {
            photo: None,
            license_plate: license_plate.into(),
            make: make.into(),
            model: model.into(),
            color: color.into(),
            location_parked: location_parked.into(),
            arrival_time,
            departure: Departure::Pending,
            parked_by,
        }
    }

    /// Departure state.
    #[must_use]
    pub fn departure(&self) -> Departure {
        self.departure
    }

    /// Whether the car has been handed back.
    #[must_use]
    pub fn is_returned(&self) -> bool {
        matches!(self.departure, Departure::Completed(_))
    }

    /// When the car was handed back, if it has been.
    #[must_use]
    pub fn departure_time(&self) -> Option<DateTime<Utc>> {
        match self.departure {
            Departure::Pending => None,
            Departure::Completed(at) => Some(at),
        }
    }

    /// Hand the car back at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyReturned`] if the car was already handed back,
    /// or [`Error::DepartureBeforeArrival`] if `at` precedes the arrival.
    pub fn mark_returned(&mut self, at: DateTime<Utc>) -> Result<()> {
        if self.is_returned() {
            return Err(Error::AlreadyReturned {
                plate: self.license_plate.clone(),
            });
        }
        if at < self.arrival_time {
            return Err(Error::DepartureBeforeArrival {
                plate: self.license_plate.clone(),
                arrival: self.arrival_time,
                departure: at,
            });
        }
        self.departure = Departure::Completed(at);
        Ok(())
    }

    /// How long the car has been (or was) in the valet's care.
    ///
    /// Pending cars are measured up to `now`. Never negative.
    #[must_use]
    pub fn time_parked(&self, now: DateTime<Utc>) -> Duration {
        let until = self.departure_time().unwrap_or(now);
        (until - self.arrival_time).max(Duration::zero())
    }

    /// Short human label, e.g. `Blue Honda Civic`.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} {} {}", self.color, self.make, self.model)
    }

    /// Whether the departure state respects the arrival time.
    pub(crate) fn check_times(&self) -> Result<()> {
        match self.departure {
            Departure::Completed(at) if at < self.arrival_time => {
                Err(Error::DepartureBeforeArrival {
                    plate: self.license_plate.clone(),
                    arrival: self.arrival_time,
                    departure: at,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    fn arrival() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap()
    }

    fn create_test_car() -> Car {
        Car::new(
            "VLT042",
            "Honda",
            "Civic",
            "Blue",
            "Lot A",
            arrival(),
            EmployeeId::new(),
        )
    }

    #[test]
    fn test_new_car_is_pending() {
        let car = create_test_car();
        assert!(!car.is_returned());
        assert!(car.departure_time().is_none());
    }

    #[test]
    fn test_mark_returned() {
        let mut car = create_test_car();
        let at = arrival() + Duration::minutes(95);
        car.mark_returned(at).unwrap();

        assert!(car.is_returned());
        assert_eq!(car.departure_time(), Some(at));
        assert_eq!(car.departure(), Departure::Completed(at));
    }

    #[test]
    fn test_mark_returned_at_arrival_is_allowed() {
        let mut car = create_test_car();
        assert!(car.mark_returned(arrival()).is_ok());
    }

    #[test]
    fn test_mark_returned_before_arrival_fails() {
        let mut car = create_test_car();
        let err = car
            .mark_returned(arrival() - Duration::minutes(1))
            .unwrap_err();

        assert!(matches!(err, Error::DepartureBeforeArrival { .. }));
        assert!(!car.is_returned());
    }

    #[test]
    fn test_mark_returned_twice_fails() {
        let mut car = create_test_car();
        car.mark_returned(arrival() + Duration::minutes(10)).unwrap();

        let err = car
            .mark_returned(arrival() + Duration::minutes(20))
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyReturned { .. }));
        assert_eq!(
            car.departure_time(),
            Some(arrival() + Duration::minutes(10))
        );
    }

    #[test]
    fn test_time_parked_pending_uses_now() {
        let car = create_test_car();
        let now = arrival() + Duration::minutes(42);
        assert_eq!(car.time_parked(now), Duration::minutes(42));
    }

    #[test]
    fn test_time_parked_returned_ignores_now() {
        let mut car = create_test_car();
        car.mark_returned(arrival() + Duration::minutes(120)).unwrap();
        let now = arrival() + Duration::days(3);
        assert_eq!(car.time_parked(now), Duration::minutes(120));
    }

    #[test]
    fn test_time_parked_never_negative() {
        let car = create_test_car();
        let now = arrival() - Duration::hours(1);
        assert_eq!(car.time_parked(now), Duration::zero());
    }

    #[test]
    fn test_check_times_flags_inconsistent_departure() {
        let mut car = create_test_car();
        car.departure = Departure::Completed(arrival() - Duration::seconds(1));
        assert!(car.check_times().is_err());

        car.departure = Departure::Pending;
        assert!(car.check_times().is_ok());
    }

    #[test]
    fn test_description() {
        assert_eq!(create_test_car().description(), "Blue Honda Civic");
    }

    #[test]
    fn test_departure_serialization() {
        let pending = serde_json::to_string(&Departure::Pending).unwrap();
        assert_eq!(pending, r#"{"status":"pending"}"#);

        let completed = serde_json::to_string(&Departure::Completed(arrival())).unwrap();
        assert!(completed.contains(r#""status":"completed""#));
        assert!(completed.contains("2024-01-01T18:00:00Z"));
    }

    #[test]
    fn test_car_serialization_skips_missing_photo() {
        let car = create_test_car();
        let json = serde_json::to_string(&car).unwrap();
        assert!(!json.contains("photo"));

        let back: Car = serde_json::from_str(&json).unwrap();
        assert_eq!(car, back);
    }

    #[test]
    fn test_deserialize_rejects_departure_before_arrival() {
        let mut value = serde_json::to_value(create_test_car()).unwrap();
        value["departure"] = serde_json::json!({
            "status": "completed",
            "at": "2000-01-01T00:00:00Z"
        });

        let result: std::result::Result<Car, _> = serde_json::from_value(value);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("VLT042"));
        assert!(err.contains("before arriving"));
    }

    #[test]
    fn test_deserialize_accepts_valid_departure() {
        let mut value = serde_json::to_value(create_test_car()).unwrap();
        value["departure"] = serde_json::json!({
            "status": "completed",
            "at": "2024-01-01T19:30:00Z"
        });

        let car: Car = serde_json::from_value(value).unwrap();
        assert!(car.is_returned());
        assert!(car.departure_time().unwrap() >= car.arrival_time);
    }
}
