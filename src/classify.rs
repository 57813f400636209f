use serde::{Serialize, Serializer};

use crate::department::{self, Department};

/// A coarse complaint category.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    WaterLeakage,
    RoadPothole,
    GarbageIssue,
    Sanitation,
    StreetlightFault,
    DrainageBlockage,
    General,
}

/// Keywords in priority order. The first one found decides the
/// category, regardless of how many others also occur.
const KEYWORDS: &[(&str, Category)] = &[
    ("water", Category::WaterLeakage),
    ("pothole", Category::RoadPothole),
    ("garbage", Category::GarbageIssue),
    ("toilet", Category::Sanitation),
    ("light", Category::StreetlightFault),
    ("drain", Category::DrainageBlockage),
];

impl Category {
    pub const ALL: [Category; 7] = [
        Category::WaterLeakage,
        Category::RoadPothole,
        Category::GarbageIssue,
        Category::Sanitation,
        Category::StreetlightFault,
        Category::DrainageBlockage,
        Category::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::WaterLeakage => "Water Leakage",
            Category::RoadPothole => "Road/Pothole",
            Category::GarbageIssue => "Garbage Issue",
            Category::Sanitation => "Sanitation",
            Category::StreetlightFault => "Streetlight Fault",
            Category::DrainageBlockage => "Drainage Blockage",
            Category::General => "General Complaint",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// The department complaints in this category are routed to.
    pub fn department(&self) -> Department {
        department::route(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Assigns a category to `text` by case-insensitive keyword search.
///
/// ```
/// use civic::classify::{classify, Category};
/// assert_eq!(classify("Broken street LIGHT"), Category::StreetlightFault);
/// assert_eq!(classify("Nobody answers the phone"), Category::General);
/// ```
pub fn classify(text: &str) -> Category {
    let lowered = text.to_lowercase();

    KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::General)
}
