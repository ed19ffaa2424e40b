//! Demo data for previews and first launch.
//!
//! [`generate`] fabricates one shift worked by three employees, with 22
//! cars arriving in two waves: a busy stretch right after the doors open and
//! a sparser tail. Eighteen cars have been handed back; the last four are
//! still parked. Every random pick comes from a fixed non-empty
//! [`Catalog`](crate::random::Catalog), so generation cannot fail.

pub mod catalog;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, trace};

use crate::model::{Car, Departure, DisplayColor, Employee, EmployeeId, Shift};
use crate::random::RandomSource;
use crate::store::Store;

use catalog::{
    COLORS, CUSTOMER_ADDRESS, CUSTOMER_NAME, LOCATIONS, MAKES, PLATE_PREFIXES, STAFF,
};

/// Cars generated per shift.
pub const CAR_COUNT: u32 = 22;

/// Cars (counted from the first) that have already been handed back.
pub const RETURNED_CAR_COUNT: u32 = 18;

/// Cars that arrive in the opening wave, five minutes apart.
const OPENING_WAVE: u32 = 10;

/// How long before "now" the demo shift started.
pub const SHIFT_AGE_DAYS: i64 = 2;

/// Length of the demo shift.
pub const SHIFT_LENGTH_HOURS: i64 = 5;

/// Bounds for how long a returned car stayed, in minutes (`[min, max)`).
pub const STAY_MINUTES: (i64, i64) = (90, 240);

/// Bounds for the numeric part of a plate (`[min, max)`).
const PLATE_NUMBERS: (i64, i64) = (100, 1000);

/// Everything [`generate`] produces.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    /// The demo staff.
    pub employees: Vec<Employee>,
    /// The demo shift, with all staff assigned and every car attached.
    pub shift: Shift,
}

/// Minutes after shift start at which the `index`-th car (1-based) arrives.
///
/// The opening wave arrives every five minutes; after that cars trickle in
/// every seven minutes starting an hour into the shift.
#[must_use]
pub fn arrival_offset_minutes(index: u32) -> i64 {
    let index = i64::from(index);
    let wave = i64::from(OPENING_WAVE);
    if index <= wave {
        index * 5
    } else {
        (index - wave) * 7 + 60
    }
}

/// Build the demo staff and shift, starting the shift at `shift_start`.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, shift_start: DateTime<Utc>) -> DemoData {
    let employees: Vec<Employee> = STAFF
        .iter()
        .map(|(name, hue)| Employee::new(*name, DisplayColor::from_hue(*hue)))
        .collect();
    let roster: Vec<EmployeeId> = employees.iter().map(|e| e.id).collect();

    let mut shift = Shift::new(CUSTOMER_NAME, CUSTOMER_ADDRESS, shift_start);
    shift.end_time = Some(shift_start + Duration::hours(SHIFT_LENGTH_HOURS));
    shift.employees.clone_from(&roster);

    for index in 1..=CAR_COUNT {
        let parked_by = roster[index as usize % roster.len()];
        let car = generate_car(rng, index, shift_start, parked_by);
        trace!(
            index,
            plate = %car.license_plate,
            car = %car.description(),
            returned = car.is_returned(),
            "Generated demo car"
        );
        shift.cars.push(car);
    }

    DemoData { employees, shift }
}

/// Build the `index`-th demo car.
///
/// Draw order: make, model, color, location, plate prefix, plate number,
/// then stay length for returned cars.
fn generate_car<R: RandomSource + ?Sized>(
    rng: &mut R,
    index: u32,
    shift_start: DateTime<Utc>,
    parked_by: EmployeeId,
) -> Car {
    let make = rng.choose_one(&MAKES);
    let model = rng.choose_one(&make.models);
    let color = rng.choose_one(&COLORS);
    let location = rng.choose_one(&LOCATIONS);
    let prefix = rng.choose_one(&PLATE_PREFIXES);
    let number = rng.int_in_range(PLATE_NUMBERS.0, PLATE_NUMBERS.1);

    let arrival_time = shift_start + Duration::minutes(arrival_offset_minutes(index));
    let departure = if index <= RETURNED_CAR_COUNT {
        let stay = rng.int_in_range(STAY_MINUTES.0, STAY_MINUTES.1);
        Departure::Completed(arrival_time + Duration::minutes(stay))
    } else {
        Departure::Pending
    };

    Car {
        photo: None,
        license_plate: format!("{prefix}{number:03}"),
        make: make.name.to_string(),
        model: (*model).to_string(),
        color: (*color).to_string(),
        location_parked: (*location).to_string(),
        arrival_time,
        departure,
        parked_by,
    }
}

/// Generate demo data and append it to `store`.
///
/// The shift starts [`SHIFT_AGE_DAYS`] before `now`. Employees are appended
/// before the shift that references them.
pub fn seed_store<R: RandomSource + ?Sized>(store: &mut Store, rng: &mut R, now: DateTime<Utc>) {
    let shift_start = now - Duration::days(SHIFT_AGE_DAYS);
    let DemoData { employees, shift } = generate(rng, shift_start);

    let employee_count = employees.len();
    let car_count = shift.cars.len();
    let active = shift.active_cars().count();

    store.append_employees(employees);
    store.append_shift(shift);

    info!(
        employees = employee_count,
        cars = car_count,
        active,
        %shift_start,
        "Seeded demo data"
    );
}
