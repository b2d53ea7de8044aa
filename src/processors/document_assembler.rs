use crate::models::{CategoryGroup, Document, Folder, NormalizedRecord, Placemark, Style};
use crate::utils::constants::PIN_SCALE;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Hands out placemark ids, starting at 1 and shared by every folder.
#[derive(Debug, Clone)]
pub struct PlacemarkIdCounter {
    next: usize,
}

impl PlacemarkIdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.next - 1
    }
}

impl Default for PlacemarkIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the folder/style/placemark hierarchy from extracted groups.
pub struct DocumentAssembler {
    title: String,
    id: String,
}

impl DocumentAssembler {
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
        }
    }

    /// Assemble stamped with the current UTC time. Returns the document and
    /// the number of placemarks in it.
    pub fn assemble(&self, groups: Vec<CategoryGroup>) -> (Document, usize) {
        self.assemble_at(groups, Utc::now())
    }

    pub fn assemble_at(
        &self,
        groups: Vec<CategoryGroup>,
        generated_at: DateTime<Utc>,
    ) -> (Document, usize) {
        let mut counter = PlacemarkIdCounter::new();
        let mut styles = Vec::with_capacity(groups.len());
        let mut folders = Vec::with_capacity(groups.len());

        for group in groups {
            let name = group.name().to_string();
            styles.push(Style {
                id: name.clone(),
                icon_href: group.icon().to_string(),
                scale: PIN_SCALE,
            });

            let style_url = format!("#{}", name);
            let placemarks: Vec<Placemark> = group
                .records
                .into_iter()
                .map(|record| create_placemark(record, &style_url, &mut counter))
                .collect();

            debug!("Assembled folder '{}' with {} placemarks", name, placemarks.len());
            folders.push(Folder { name, placemarks });
        }

        let document = Document {
            id: self.id.clone(),
            title: self.title.clone(),
            generated_at,
            styles,
            folders,
        };

        (document, counter.issued())
    }
}

fn create_placemark(
    record: NormalizedRecord,
    style_url: &str,
    counter: &mut PlacemarkIdCounter,
) -> Placemark {
    Placemark {
        id: counter.next_id(),
        description: record.metadata.to_string(),
        name: record.label,
        style_url: style_url.to_string(),
        longitude: record.longitude,
        latitude: record.latitude,
    }
}
