pub mod category_reader;
pub mod csv_reader;

pub use category_reader::CategoryReader;
pub use csv_reader::{CsvTable, RawRow};
