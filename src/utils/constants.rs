/// KML namespace and document head
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
pub const XML_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Spaces per nesting level in rendered markup
pub const KML_INDENT: usize = 2;

/// Icon scale used for every category style (Google Earth's default pin size)
pub const PIN_SCALE: f64 = 1.1;

/// Marker icons
pub const ICON_BLUE_PUSHPIN: &str = "http://maps.google.com/mapfiles/kml/pushpin/blue-pushpin.png";
pub const ICON_YELLOW_PUSHPIN: &str = "http://maps.google.com/mapfiles/kml/pushpin/ylw-pushpin.png";
pub const ICON_GREEN_PUSHPIN: &str = "http://maps.google.com/mapfiles/kml/pushpin/grn-pushpin.png";
pub const ICON_PINK_PUSHPIN: &str = "http://maps.google.com/mapfiles/kml/pushpin/pink-pushpin.png";

/// Output file extensions
pub const KML_EXTENSION: &str = "kml";
pub const KMZ_EXTENSION: &str = "kmz";

/// Deflate level for the KMZ entry
pub const KMZ_COMPRESSION_LEVEL: i32 = 5;

/// Two-digit years below this map to 20xx, the rest to 19xx
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 69;

/// Value a capability cell must hold to count as true
pub const CAPABILITY_YES: &str = "Yes";

/// Shared column names
pub const COLUMN_DATA_ENTRY_BY: &str = "Data Entry by";
pub const COLUMN_NOTES: &str = "Notes";
pub const COLUMN_DATE_MODIFIED: &str = "date modified";
pub const COLUMN_COMMENTS: &str =
    "If you have comments or make an edit, please summarize them in this column";

/// Members columns
pub const COLUMN_LICENCE_CLASS: &str = "License class";
pub const COLUMN_HF: &str = "HF";
pub const COLUMN_6M: &str = "6m";
pub const COLUMN_2M: &str = "2m";
pub const COLUMN_220_MHZ: &str = "220 Mhz";
pub const COLUMN_440_MHZ: &str = "440 MHz";
pub const COLUMN_HAMWAN: &str = "HamWan";
pub const COLUMN_DMR: &str = "DMR";

/// Assembly point columns
pub const COLUMN_ASSEMBLY_TYPE: &str = "Type of assembly point (choose one)";
