//! XML формат каталога:
//!
//! ```xml
//! <layouts>
//!   <layout>
//!     <name>us</name>
//!     <description>English (US)</description>
//!     <variants>
//!       <variant><name>dvorak</name><description>English (Dvorak)</description></variant>
//!     </variants>
//!   </layout>
//! </layouts>
//! ```
//!
//! В отличие от текстового формата, битый XML прерывает весь запуск.
//! Посторонние элементы между `layout` пропускаются.

use super::LayoutEntry;
use crate::error::Result;
use quick_xml::de::DeError;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct XmlCatalog {
    #[serde(rename = "layout", default)]
    layouts: Vec<XmlLayout>,
}

#[derive(Debug, Deserialize)]
struct XmlLayout {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    variants: Option<XmlVariants>,
}

#[derive(Debug, Deserialize)]
struct XmlVariants {
    #[serde(rename = "variant", default)]
    variants: Vec<XmlVariant>,
}

#[derive(Debug, Deserialize)]
struct XmlVariant {
    name: String,
    #[serde(default)]
    description: String,
}

pub fn parse_catalog(input: &str) -> Result<Vec<LayoutEntry>> {
    ensure_single_root(input)?;
    let catalog: XmlCatalog = quick_xml::de::from_str(input)?;

    let entries = catalog
        .layouts
        .into_iter()
        .filter_map(|layout| {
            let layout_name = layout.name.trim().to_string();
            if layout_name.is_empty() {
                warn!("Пропущена раскладка без имени в XML каталоге");
                return None;
            }

            let variants = layout.variants.map(|v| v.variants).unwrap_or_default();
            let entry = variants.into_iter().fold(
                LayoutEntry::new(layout_name, layout.description),
                |entry, variant| {
                    let variant_name = variant.name.trim();
                    if variant_name.is_empty() {
                        warn!("Пропущен вариант без имени в раскладке '{}'", entry.layout_name);
                        return entry;
                    }
                    entry.with_variant(variant_name, variant.description)
                },
            );

            Some(entry)
        })
        .collect();

    Ok(entries)
}

/// Десериализатор останавливается на закрытии корня, поэтому хвост документа проверяется отдельно
fn ensure_single_root(input: &str) -> std::result::Result<(), DeError> {
    let mut reader = Reader::from_str(input);
    let mut depth = 0usize;
    let mut root_closed = false;

    loop {
        let position = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(_) | Event::Empty(_) if root_closed => {
                return Err(DeError::Custom(format!(
                    "лишний элемент после корня (позиция {})",
                    position
                )));
            }
            Event::Start(_) => depth += 1,
            Event::Empty(_) if depth == 0 => root_closed = true,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Text(text) if depth == 0 && text.iter().any(|b| !b.is_ascii_whitespace()) => {
                return Err(DeError::Custom(format!(
                    "текст вне корневого элемента (позиция {})",
                    position
                )));
            }
            Event::CData(_) if depth == 0 => {
                return Err(DeError::Custom(format!(
                    "CDATA вне корневого элемента (позиция {})",
                    position
                )));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(DeError::Custom(format!(
            "документ оборван: не закрыто элементов {}",
            depth
        )));
    }

    Ok(())
}
