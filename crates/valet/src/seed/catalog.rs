//! Fixed pools the demo generator draws from.

use crate::random::Catalog;

/// A car manufacturer and the models it sells.
#[derive(Debug, Clone, Copy)]
pub struct Make {
    /// Manufacturer name.
    pub name: &'static str,
    /// Models to pick from for this make.
    pub models: Catalog<&'static str>,
}

impl Make {
    const fn new(name: &'static str, models: &'static [&'static str]) -> Self {
        Self {
            name,
            models: Catalog::new(models),
        }
    }
}

const MAKE_LIST: &[Make] = &[
    Make::new("Toyota", &["Camry", "Corolla", "RAV4", "Highlander", "Prius"]),
    Make::new("Honda", &["Civic", "Accord", "CR-V", "Pilot"]),
    Make::new("Ford", &["F-150", "Explorer", "Mustang", "Escape"]),
    Make::new("Chevrolet", &["Silverado", "Malibu", "Equinox", "Tahoe"]),
    Make::new("Tesla", &["Model 3", "Model S", "Model X", "Model Y"]),
    Make::new("BMW", &["3 Series", "5 Series", "X3", "X5"]),
    Make::new("Mercedes-Benz", &["C-Class", "E-Class", "GLC", "S-Class"]),
    Make::new("Audi", &["A4", "A6", "Q5", "Q7"]),
    Make::new("Lexus", &["ES", "RX", "NX"]),
    Make::new("Nissan", &["Altima", "Rogue", "Sentra", "Pathfinder"]),
    Make::new("Subaru", &["Outback", "Forester", "Crosstrek"]),
    Make::new("Hyundai", &["Elantra", "Sonata", "Tucson", "Santa Fe"]),
    Make::new("Jeep", &["Wrangler", "Grand Cherokee", "Compass"]),
    Make::new("Porsche", &["911", "Cayenne", "Macan", "Taycan"]),
];

/// Makes with their model lists.
pub const MAKES: Catalog<Make> = Catalog::new(MAKE_LIST);

/// Paint colors.
pub const COLORS: Catalog<&str> = Catalog::new(&[
    "Black", "White", "Silver", "Gray", "Red", "Blue", "Navy", "Green", "Beige", "Brown", "Gold",
]);

/// Places a valet can leave a car.
pub const LOCATIONS: Catalog<&str> = Catalog::new(&[
    "Front Row A",
    "Front Row B",
    "Lot A",
    "Lot B",
    "Lot C",
    "Garage Level 1",
    "Garage Level 2",
    "Garage Level 3",
    "Overflow Lot",
    "Street - Main St",
    "VIP Circle",
]);

/// Three-letter prefixes for generated license plates.
pub const PLATE_PREFIXES: Catalog<&str> = Catalog::new(&[
    "ABC", "XYZ", "LMN", "VLT", "PKG", "CAR", "DRV", "KEY", "GTW", "HTL", "EVT",
]);

/// Names and hues of the demo staff.
pub const STAFF: [(&str, f64); 3] = [
    ("Marcus Bell", 0.0),
    ("Priya Shah", 0.35),
    ("Diego Alvarez", 0.62),
];

/// Customer the demo shift is booked for.
pub const CUSTOMER_NAME: &str = "Harborview Hotel Gala";

/// Where the demo shift takes place.
pub const CUSTOMER_ADDRESS: &str = "2200 Bayfront Drive, San Diego, CA";
