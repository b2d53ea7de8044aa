use crate::error::{ProcessingError, Result};
use crate::models::{
    AssemblyPointMetadata, BandCapabilities, Category, CategoryGroup, MemberMetadata, Metadata,
    NormalizedRecord, RelayMetadata,
};
use crate::processors::row_filter::has_coordinates;
use crate::readers::{CsvTable, RawRow};
use crate::utils::constants::*;
use crate::utils::normalize_date;
use std::path::Path;
use tracing::{debug, info};

/// Turns one category's CSV export into a [`CategoryGroup`].
pub struct CategoryReader {
    category: Category,
}

impl CategoryReader {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    /// Load the source file and extract every row with coordinates.
    pub fn read_group(&self, path: &Path) -> Result<CategoryGroup> {
        let table = CsvTable::from_path(path)?;
        let group = self.extract_group(&table)?;

        info!(
            "Loaded {} {} from {} ({} rows without coordinates skipped)",
            group.len(),
            self.category.slug(),
            path.display(),
            table.len() - group.len()
        );

        Ok(group)
    }

    pub fn extract_group(&self, table: &CsvTable) -> Result<CategoryGroup> {
        let mut group = CategoryGroup::new(self.category);

        for row in table.rows() {
            if !has_coordinates(&row) {
                debug!(
                    "Skipping {} row at line {:?}: no coordinates",
                    self.category.slug(),
                    row.line()
                );
                continue;
            }

            group.records.push(self.extract_record(&row)?);
        }

        Ok(group)
    }

    fn extract_record(&self, row: &RawRow<'_>) -> Result<NormalizedRecord> {
        let label = self.column(row, self.category.label_column())?.to_string();
        let latitude = self.coordinate(row, self.category.latitude_column())?;
        let longitude = self.coordinate(row, self.category.longitude_column())?;
        let metadata = self.extract_metadata(row)?;

        Ok(NormalizedRecord {
            label,
            latitude,
            longitude,
            metadata,
        })
    }

    fn extract_metadata(&self, row: &RawRow<'_>) -> Result<Metadata> {
        let metadata = match self.category {
            Category::Members => Metadata::Member(MemberMetadata {
                licence_class: self.text(row, COLUMN_LICENCE_CLASS)?,
                bands: BandCapabilities {
                    hf: self.flag(row, COLUMN_HF)?,
                    six_metre: self.flag(row, COLUMN_6M)?,
                    two_metre: self.flag(row, COLUMN_2M)?,
                    mhz_220: self.flag(row, COLUMN_220_MHZ)?,
                    mhz_440: self.flag(row, COLUMN_440_MHZ)?,
                    hamwan: self.flag(row, COLUMN_HAMWAN)?,
                    dmr: self.flag(row, COLUMN_DMR)?,
                },
                data_entry_by: self.text(row, COLUMN_DATA_ENTRY_BY)?,
                notes: self.text(row, COLUMN_NOTES)?,
                date_modified: self.date_modified(row)?,
            }),
            Category::Repeaters | Category::Winlink => Metadata::Relay(RelayMetadata {
                data_entry_by: self.text(row, COLUMN_DATA_ENTRY_BY)?,
                notes: self.text(row, COLUMN_NOTES)?,
                comments: self.text(row, COLUMN_COMMENTS)?,
                date_modified: self.date_modified(row)?,
            }),
            Category::AssemblyPoints => Metadata::AssemblyPoint(AssemblyPointMetadata {
                data_entry_by: self.text(row, COLUMN_DATA_ENTRY_BY)?,
                notes: self.text(row, COLUMN_NOTES)?,
                point_type: self.text(row, COLUMN_ASSEMBLY_TYPE)?,
                date_modified: self.date_modified(row)?,
            }),
        };

        Ok(metadata)
    }

    fn column<'a>(&self, row: &RawRow<'a>, column: &str) -> Result<&'a str> {
        row.require(column, self.category.slug())
    }

    fn text(&self, row: &RawRow<'_>, column: &str) -> Result<String> {
        self.column(row, column).map(str::to_string)
    }

    /// Capability cells count only when they read exactly "Yes".
    fn flag(&self, row: &RawRow<'_>, column: &str) -> Result<bool> {
        Ok(self.column(row, column)? == CAPABILITY_YES)
    }

    fn coordinate(&self, row: &RawRow<'_>, column: &str) -> Result<f64> {
        let value = self.column(row, column)?;
        value.trim().parse::<f64>().map_err(|_| {
            ProcessingError::InvalidCoordinate(format!(
                "{} value '{}' in {} source (line {:?}) is not a number",
                column,
                value,
                self.category.slug(),
                row.line()
            ))
        })
    }

    fn date_modified(&self, row: &RawRow<'_>) -> Result<Option<String>> {
        match self.column(row, COLUMN_DATE_MODIFIED)? {
            "" => Ok(None),
            value => normalize_date(value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MEMBERS_HEADER: &str = "\"Label\n\"\"callsign\"\"\",latitude,longitude,License class,HF,6m,2m,220 Mhz,440 MHz,HamWan,DMR,Data Entry by,Notes,date modified";
    const RELAY_HEADER_TAIL: &str = "latitude,longitude,Data Entry by,Notes,\"If you have comments or make an edit, please summarize them in this column\",date modified";

    fn members_table(rows: &[&str]) -> CsvTable {
        let csv = format!("{}\n{}\n", MEMBERS_HEADER, rows.join("\n"));
        CsvTable::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_members_extraction() -> Result<()> {
        let table = members_table(&[
            "KF7ABC,47.6062,-122.3321,General,Yes,No,Yes,,yes,Y,Yes,Ann,Generator,3/5/2024",
            "KF7XYZ,,-122.1,Extra,Yes,Yes,Yes,Yes,Yes,Yes,Yes,Bo,,",
        ]);

        let group = CategoryReader::new(Category::Members).extract_group(&table)?;
        assert_eq!(group.name(), "Members");
        assert_eq!(group.len(), 1);

        let record = &group.records[0];
        assert_eq!(record.label, "KF7ABC");
        assert_eq!(record.latitude, 47.6062);
        assert_eq!(record.longitude, -122.3321);

        let expected = Metadata::Member(MemberMetadata {
            licence_class: "General".to_string(),
            bands: BandCapabilities {
                hf: true,
                six_metre: false,
                two_metre: true,
                mhz_220: false,
                mhz_440: false,
                hamwan: false,
                dmr: true,
            },
            data_entry_by: "Ann".to_string(),
            notes: "Generator".to_string(),
            date_modified: Some("2024-03-05T00:00:00+00:00".to_string()),
        });
        assert_eq!(record.metadata, expected);
        Ok(())
    }

    #[test]
    fn test_empty_date_is_omitted() -> Result<()> {
        let table = members_table(&["KF7ABC,47.6,-122.3,Tech,No,No,No,No,No,No,No,Ann,,"]);
        let group = CategoryReader::new(Category::Members).extract_group(&table)?;
        assert_eq!(group.records[0].metadata.date_modified(), None);
        Ok(())
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let table = members_table(&["KF7ABC,47.6,-122.3,Tech,No,No,No,No,No,No,No,Ann,,13/40/2024"]);
        let result = CategoryReader::new(Category::Members).extract_group(&table);
        assert!(matches!(result, Err(ProcessingError::DateParse { .. })));
    }

    #[test]
    fn test_repeaters_and_winlink() -> Result<()> {
        let repeaters = format!(
            "\"Label\n\"\"name / output freq / tone\"\"\",{}\nTiger Mtn / 146.84 / 103.5,47.5,-121.9,Ann,Linked,None,1/2/23\n",
            RELAY_HEADER_TAIL
        );
        let table = CsvTable::from_reader(repeaters.as_bytes())?;
        let group = CategoryReader::new(Category::Repeaters).extract_group(&table)?;
        assert_eq!(group.records[0].label, "Tiger Mtn / 146.84 / 103.5");
        assert_eq!(
            group.records[0].metadata,
            Metadata::Relay(RelayMetadata {
                data_entry_by: "Ann".to_string(),
                notes: "Linked".to_string(),
                comments: "None".to_string(),
                date_modified: Some("2023-01-02T00:00:00+00:00".to_string()),
            })
        );

        let winlink = format!(
            "\"Label\n\"\"name / freq / call\"\"\",{}\nEOC / 145.05 / W7ACS,47.7,-122.2,Bo,,,\n",
            RELAY_HEADER_TAIL
        );
        let table = CsvTable::from_reader(winlink.as_bytes())?;
        let group = CategoryReader::new(Category::Winlink).extract_group(&table)?;
        assert_eq!(group.name(), "Winlink Nodes");
        assert_eq!(group.records[0].label, "EOC / 145.05 / W7ACS");
        Ok(())
    }

    #[test]
    fn test_assembly_points_use_capitalised_coordinates() -> Result<()> {
        let csv = "Name,Latitude,Longitude,Data Entry by,Notes,Type of assembly point (choose one),date modified\n\
                   Cal Anderson,47.617,-122.319,Cy,Near fountain,Park,\n";
        let table = CsvTable::from_reader(csv.as_bytes())?;
        let group = CategoryReader::new(Category::AssemblyPoints).extract_group(&table)?;

        let record = &group.records[0];
        assert_eq!(record.label, "Cal Anderson");
        assert_eq!(record.latitude, 47.617);
        assert_eq!(
            record.metadata,
            Metadata::AssemblyPoint(AssemblyPointMetadata {
                data_entry_by: "Cy".to_string(),
                notes: "Near fountain".to_string(),
                point_type: "Park".to_string(),
                date_modified: None,
            })
        );
        Ok(())
    }

    #[test]
    fn test_lowercase_coordinates_missing_for_assembly_points() {
        // The presence check ignores case; extraction does not.
        let csv = "Name,latitude,longitude,Data Entry by,Notes,Type of assembly point (choose one),date modified\n\
                   Park,47.6,-122.3,Cy,,Park,\n";
        let table = CsvTable::from_reader(csv.as_bytes()).unwrap();
        let result = CategoryReader::new(Category::AssemblyPoints).extract_group(&table);

        match result {
            Err(ProcessingError::MissingColumn { column, category }) => {
                assert_eq!(column, "Latitude");
                assert_eq!(category, "assembly_points");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_metadata_column() {
        let csv = "Name,Latitude,Longitude,Data Entry by,Notes,date modified\nPark,47.6,-122.3,Cy,,\n";
        let table = CsvTable::from_reader(csv.as_bytes()).unwrap();
        let result = CategoryReader::new(Category::AssemblyPoints).extract_group(&table);
        assert!(matches!(
            result,
            Err(ProcessingError::MissingColumn { ref column, .. })
                if column == COLUMN_ASSEMBLY_TYPE
        ));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let table = members_table(&["KF7ABC,north,-122.3,Tech,No,No,No,No,No,No,No,Ann,,"]);
        let result = CategoryReader::new(Category::Members).extract_group(&table);
        assert!(matches!(result, Err(ProcessingError::InvalidCoordinate(_))));
    }

    #[test]
    fn test_empty_source_gives_empty_group() -> Result<()> {
        let table = CsvTable::from_reader(MEMBERS_HEADER.as_bytes())?;
        let group = CategoryReader::new(Category::Members).extract_group(&table)?;
        assert!(group.is_empty());
        Ok(())
    }
}
