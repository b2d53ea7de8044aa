use crate::utils::constants::{
    ICON_BLUE_PUSHPIN, ICON_GREEN_PUSHPIN, ICON_PINK_PUSHPIN, ICON_YELLOW_PUSHPIN,
};
use serde::{Deserialize, Serialize};

/// The kinds of source spreadsheet the processor understands.
///
/// Each variant describes its own column layout; the extractor in
/// [`crate::readers::CategoryReader`] consults these instead of carrying one
/// function per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Members,
    Repeaters,
    Winlink,
    AssemblyPoints,
}

impl Category {
    /// Processing order, independent of how the flags were given.
    pub const ALL: [Category; 4] = [
        Category::Members,
        Category::Repeaters,
        Category::Winlink,
        Category::AssemblyPoints,
    ];

    /// Folder name, also used as the style id.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Members => "Members",
            Category::Repeaters => "Repeaters",
            Category::Winlink => "Winlink Nodes",
            Category::AssemblyPoints => "Assembly Points",
        }
    }

    /// Short name used in log lines and error messages.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Members => "members",
            Category::Repeaters => "repeaters",
            Category::Winlink => "winlink",
            Category::AssemblyPoints => "assembly_points",
        }
    }

    pub fn icon_href(&self) -> &'static str {
        match self {
            Category::Members => ICON_BLUE_PUSHPIN,
            Category::Repeaters => ICON_YELLOW_PUSHPIN,
            Category::Winlink => ICON_GREEN_PUSHPIN,
            Category::AssemblyPoints => ICON_PINK_PUSHPIN,
        }
    }

    pub fn label_column(&self) -> &'static str {
        match self {
            Category::Members => "Label\n\"callsign\"",
            Category::Repeaters => "Label\n\"name / output freq / tone\"",
            Category::Winlink => "Label\n\"name / freq / call\"",
            Category::AssemblyPoints => "Name",
        }
    }

    pub fn latitude_column(&self) -> &'static str {
        match self {
            Category::AssemblyPoints => "Latitude",
            _ => "latitude",
        }
    }

    pub fn longitude_column(&self) -> &'static str {
        match self {
            Category::AssemblyPoints => "Longitude",
            _ => "longitude",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
