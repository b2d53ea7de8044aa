pub mod document_assembler;
pub mod row_filter;

pub use document_assembler::{DocumentAssembler, PlacemarkIdCounter};
pub use row_filter::has_coordinates;
