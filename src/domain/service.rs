/// Monitored service categories, each mapped to one OSM tag pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Hospitals,
    Hotels,
    Restaurants,
    Fuel,
}

impl ServiceCategory {
    /// All categories, in report order
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Hospitals,
        ServiceCategory::Hotels,
        ServiceCategory::Restaurants,
        ServiceCategory::Fuel,
    ];

    /// OSM tag key/value pair selecting this category
    pub fn tag(&self) -> (&'static str, &'static str) {
        match self {
            ServiceCategory::Hospitals => ("amenity", "hospital"),
            ServiceCategory::Hotels => ("tourism", "hotel"),
            ServiceCategory::Restaurants => ("amenity", "restaurant"),
            ServiceCategory::Fuel => ("amenity", "fuel"),
        }
    }

    /// Human-readable label for report tables
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Hospitals => "Hospitals",
            ServiceCategory::Hotels => "Hotels",
            ServiceCategory::Restaurants => "Restaurants",
            ServiceCategory::Fuel => "Petrol Bunks",
        }
    }
}

/// Count of features found for one service category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTally {
    pub category: ServiceCategory,
    pub count: usize,
}
