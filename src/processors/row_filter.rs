use crate::readers::RawRow;

/// True when the row carries non-empty `latitude` and `longitude` cells,
/// matching the column names case-insensitively. Spreadsheets disagree on
/// capitalisation, so only this check ignores case.
pub fn has_coordinates(row: &RawRow<'_>) -> bool {
    let present = |column: &str| row.get_ignore_case(column).is_some_and(|v| !v.is_empty());
    present("latitude") && present("longitude")
}
