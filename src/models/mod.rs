pub mod category;
pub mod document;
pub mod record;

pub use category::Category;
pub use document::{Document, Folder, Placemark, Style};
pub use record::{
    AssemblyPointMetadata, BandCapabilities, CategoryGroup, MemberMetadata, Metadata,
    MetadataValue, NormalizedRecord, RelayMetadata,
};
