use crate::error::{ProcessingError, Result};
use crate::models::{Document, Folder, Placemark, Style};
use crate::utils::constants::{
    KML_EXTENSION, KML_INDENT, KML_NAMESPACE, KMZ_COMPRESSION_LEVEL, KMZ_EXTENSION, XML_HEAD,
};
use kml::types::{Coord, Element, Geometry, Placemark as KmlPlacemark, Point};
use kml::{Kml, KmlDocument, KmlVersion, KmlWriter};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Output flavour, chosen from the output file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain KML markup.
    Kml,
    /// Zip archive holding a single deflated KML entry.
    Kmz,
}

impl OutputFormat {
    /// Extensions are matched exactly; anything else is rejected rather
    /// than guessed.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(KML_EXTENSION) => Ok(OutputFormat::Kml),
            Some(KMZ_EXTENSION) => Ok(OutputFormat::Kmz),
            _ => Err(ProcessingError::UnsupportedOutputFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub struct DocumentWriter {
    indent: usize,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self {
            indent: KML_INDENT,
        }
    }

    /// Serialize the document to indented KML markup, XML declaration
    /// included.
    pub fn render(&self, document: &Document) -> Result<String> {
        let kml = to_kml(document);

        let mut buffer = Vec::new();
        writeln!(&mut buffer, "{XML_HEAD}")?;
        let mut writer = KmlWriter::new(quick_xml::Writer::new_with_indent(
            &mut buffer,
            b' ',
            self.indent,
        ));
        writer.write(&kml)?;
        writeln!(&mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Render the document and write it in the format implied by `path`.
    ///
    /// The markup is rendered before the file is created, so a failure
    /// leaves nothing behind.
    pub fn write(&self, document: &Document, path: &Path) -> Result<OutputFormat> {
        let format = OutputFormat::from_path(path)?;
        let markup = self.render(document)?;

        match format {
            OutputFormat::Kml => {
                let mut writer = BufWriter::new(File::create(path)?);
                writer.write_all(markup.as_bytes())?;
                writer.flush()?;
            }
            OutputFormat::Kmz => self.write_archive(&markup, path)?,
        }

        info!(
            "Wrote {} placemarks to {} ({:?})",
            document.placemark_count(),
            path.display(),
            format
        );

        Ok(format)
    }

    fn write_archive(&self, markup: &str, path: &Path) -> Result<()> {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(KMZ_COMPRESSION_LEVEL));

        let mut archive = ZipWriter::new(File::create(path)?);
        archive.start_file(archive_entry_name(path), options)?;
        archive.write_all(markup.as_bytes())?;
        archive.finish()?;

        Ok(())
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// `<stem>.kml` for an archive written to `<stem>.kmz`.
pub fn archive_entry_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", stem, KML_EXTENSION)
}

fn to_kml(document: &Document) -> Kml {
    let mut elements = vec![
        Kml::Element(text_element("name", &document.title)),
        Kml::Element(text_element("description", &document.description())),
    ];
    elements.extend(document.styles.iter().map(|s| Kml::Element(style_element(s))));
    elements.extend(document.folders.iter().map(folder_kml));

    let body = Kml::Document {
        attrs: HashMap::from([("id".to_string(), document.id.clone())]),
        elements,
    };

    Kml::KmlDocument(KmlDocument {
        version: KmlVersion::V22,
        attrs: HashMap::from([("xmlns".to_string(), KML_NAMESPACE.to_string())]),
        elements: vec![body],
    })
}

fn folder_kml(folder: &Folder) -> Kml {
    let mut elements = vec![
        Kml::Element(text_element("name", &folder.name)),
        Kml::Element(text_element("description", "")),
    ];
    elements.extend(folder.placemarks.iter().map(placemark_kml));

    Kml::Folder {
        attrs: HashMap::from([("id".to_string(), folder.name.clone())]),
        elements,
    }
}

fn placemark_kml(placemark: &Placemark) -> Kml {
    // KML points are longitude first.
    let geometry = Geometry::Point(Point {
        coord: Coord {
            x: placemark.longitude,
            y: placemark.latitude,
            z: None,
        },
        ..Default::default()
    });

    Kml::Placemark(KmlPlacemark {
        name: Some(placemark.name.clone()),
        description: Some(placemark.description.clone()),
        geometry: Some(geometry),
        attrs: HashMap::from([("id".to_string(), placemark.id.to_string())]),
        children: vec![text_element("styleUrl", &placemark.style_url)],
        ..Default::default()
    })
}

fn style_element(style: &Style) -> Element {
    let icon = Element {
        name: "Icon".to_string(),
        children: vec![text_element("href", &style.icon_href)],
        ..Default::default()
    };
    let icon_style = Element {
        name: "IconStyle".to_string(),
        children: vec![text_element("scale", &style.scale.to_string()), icon],
        ..Default::default()
    };

    Element {
        name: "Style".to_string(),
        attrs: HashMap::from([("id".to_string(), style.id.clone())]),
        children: vec![icon_style],
        ..Default::default()
    }
}

fn text_element(name: &str, content: &str) -> Element {
    Element {
        name: name.to_string(),
        content: Some(content.to_string()),
        ..Default::default()
    }
}
