use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shared icon style, referenced by placemarks as `#<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
    pub icon_href: String,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placemark {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub style_url: String,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub placemarks: Vec<Placemark>,
}

/// Fully assembled map document, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub styles: Vec<Style>,
    pub folders: Vec<Folder>,
}

impl Document {
    /// Text of the document's `<description>`.
    pub fn description(&self) -> String {
        format!(
            "Generated at {} UTC",
            self.generated_at.format("%a %b %e %H:%M:%S %Y")
        )
    }

    pub fn placemark_count(&self) -> usize {
        self.folders.iter().map(|f| f.placemarks.len()).sum()
    }

    pub fn placemarks(&self) -> impl Iterator<Item = &Placemark> {
        self.folders.iter().flat_map(|f| f.placemarks.iter())
    }
}
