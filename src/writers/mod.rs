pub mod kml_writer;

pub use kml_writer::{DocumentWriter, OutputFormat};
