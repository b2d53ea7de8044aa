use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value in a record's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataValue {
    Text(String),
    Flag(bool),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(text) => write!(f, "{}", text),
            MetadataValue::Flag(true) => write!(f, "Yes"),
            MetadataValue::Flag(false) => write!(f, "No"),
        }
    }
}

/// Band and network capabilities reported by a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCapabilities {
    pub hf: bool,
    pub six_metre: bool,
    pub two_metre: bool,
    pub mhz_220: bool,
    pub mhz_440: bool,
    pub hamwan: bool,
    pub dmr: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMetadata {
    pub licence_class: String,
    pub bands: BandCapabilities,
    pub data_entry_by: String,
    pub notes: String,
    pub date_modified: Option<String>,
}

/// Repeaters and Winlink nodes share this layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMetadata {
    pub data_entry_by: String,
    pub notes: String,
    pub comments: String,
    pub date_modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyPointMetadata {
    pub data_entry_by: String,
    pub notes: String,
    pub point_type: String,
    pub date_modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metadata {
    Member(MemberMetadata),
    Relay(RelayMetadata),
    AssemblyPoint(AssemblyPointMetadata),
}

impl Metadata {
    /// Key/value pairs in rendering order. `date_modified` is last and only
    /// present when the source cell was filled in.
    pub fn entries(&self) -> Vec<(&'static str, MetadataValue)> {
        fn text(s: &str) -> MetadataValue {
            MetadataValue::Text(s.to_string())
        }

        let mut entries = Vec::new();

        let date_modified = match self {
            Metadata::Member(m) => {
                entries.push(("licence_class", text(&m.licence_class)));
                entries.push(("hf", MetadataValue::Flag(m.bands.hf)));
                entries.push(("6m", MetadataValue::Flag(m.bands.six_metre)));
                entries.push(("2m", MetadataValue::Flag(m.bands.two_metre)));
                entries.push(("220_mhz", MetadataValue::Flag(m.bands.mhz_220)));
                entries.push(("440_mhz", MetadataValue::Flag(m.bands.mhz_440)));
                entries.push(("hamwan", MetadataValue::Flag(m.bands.hamwan)));
                entries.push(("dmr", MetadataValue::Flag(m.bands.dmr)));
                entries.push(("data_entry_by", text(&m.data_entry_by)));
                entries.push(("notes", text(&m.notes)));
                &m.date_modified
            }
            Metadata::Relay(r) => {
                entries.push(("data_entry_by", text(&r.data_entry_by)));
                entries.push(("notes", text(&r.notes)));
                entries.push(("comments", text(&r.comments)));
                &r.date_modified
            }
            Metadata::AssemblyPoint(a) => {
                entries.push(("data_entry_by", text(&a.data_entry_by)));
                entries.push(("notes", text(&a.notes)));
                entries.push(("type", text(&a.point_type)));
                &a.date_modified
            }
        };

        if let Some(date) = date_modified {
            entries.push(("date_modified", text(date)));
        }

        entries
    }

    pub fn date_modified(&self) -> Option<&str> {
        match self {
            Metadata::Member(m) => m.date_modified.as_deref(),
            Metadata::Relay(r) => r.date_modified.as_deref(),
            Metadata::AssemblyPoint(a) => a.date_modified.as_deref(),
        }
    }
}

/// Placemark description text: one `key: value` line per entry.
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

/// Category-agnostic result of extracting one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub metadata: Metadata,
}

/// All records extracted from one category source, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub records: Vec<NormalizedRecord>,
}

impl CategoryGroup {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.category.display_name()
    }

    pub fn icon(&self) -> &'static str {
        self.category.icon_href()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn member(date_modified: Option<&str>) -> Metadata {
        Metadata::Member(MemberMetadata {
            licence_class: "General".to_string(),
            bands: BandCapabilities {
                hf: true,
                two_metre: true,
                dmr: true,
                ..Default::default()
            },
            data_entry_by: "KF7ABC".to_string(),
            notes: "Has generator".to_string(),
            date_modified: date_modified.map(str::to_string),
        })
    }

    #[test]
    fn test_member_rendering() {
        let expected = "licence_class: General\n\
                        hf: Yes\n\
                        6m: No\n\
                        2m: Yes\n\
                        220_mhz: No\n\
                        440_mhz: No\n\
                        hamwan: No\n\
                        dmr: Yes\n\
                        data_entry_by: KF7ABC\n\
                        notes: Has generator\n\
                        date_modified: 2024-03-05T00:00:00+00:00";

        assert_eq!(
            member(Some("2024-03-05T00:00:00+00:00")).to_string(),
            expected
        );
    }

    #[test]
    fn test_date_modified_omitted_when_absent() {
        let metadata = member(None);
        assert!(metadata.date_modified().is_none());
        assert!(!metadata.to_string().contains("date_modified"));
        assert!(metadata.to_string().ends_with("notes: Has generator"));
    }

    #[test]
    fn test_relay_and_assembly_rendering() {
        let relay = Metadata::Relay(RelayMetadata {
            data_entry_by: "Ann".to_string(),
            notes: String::new(),
            comments: "Tone changed".to_string(),
            date_modified: None,
        });
        assert_eq!(
            relay.to_string(),
            "data_entry_by: Ann\nnotes: \ncomments: Tone changed"
        );

        let point = Metadata::AssemblyPoint(AssemblyPointMetadata {
            data_entry_by: "Bo".to_string(),
            notes: "North lot".to_string(),
            point_type: "Park".to_string(),
            date_modified: Some("2023-11-02T00:00:00+00:00".to_string()),
        });
        let keys: Vec<_> = point.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["data_entry_by", "notes", "type", "date_modified"]);
    }

    #[test]
    fn test_group_accessors() {
        let group = CategoryGroup::new(Category::Winlink);
        assert_eq!(group.name(), "Winlink Nodes");
        assert!(group.icon().ends_with("grn-pushpin.png"));
        assert!(group.is_empty());
    }
}
