use serde::{Serialize, Serializer};

use crate::classify::Category;

/// The municipal body a complaint is routed to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Department {
    Hydraulic,
    SolidWaste,
    RoadMaintenance,
    PublicHealth,
    Electrical,
    StormWaterDrain,
    GeneralAdmin,
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::Hydraulic => "Hydraulic Department",
            Department::SolidWaste => "Solid Waste Department",
            Department::RoadMaintenance => "Road Maintenance",
            Department::PublicHealth => "Public Health",
            Department::Electrical => "Electrical Department",
            Department::StormWaterDrain => "Storm Water Drain",
            Department::GeneralAdmin => "General Admin",
        }
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Maps a category label to its department. Labels outside the known
/// set, including the general category, go to general administration.
pub fn route(category: &str) -> Department {
    match Category::from_label(category) {
        Some(Category::WaterLeakage) => Department::Hydraulic,
        Some(Category::GarbageIssue) => Department::SolidWaste,
        Some(Category::RoadPothole) => Department::RoadMaintenance,
        Some(Category::Sanitation) => Department::PublicHealth,
        Some(Category::StreetlightFault) => Department::Electrical,
        Some(Category::DrainageBlockage) => Department::StormWaterDrain,
        Some(Category::General) | None => Department::GeneralAdmin,
    }
}
