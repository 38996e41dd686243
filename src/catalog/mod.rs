pub mod text;
pub mod xml;

use crate::config::CatalogFormat;
use crate::error::Result;
use std::fmt;

/// Раскладка из каталога вместе с её вариантами
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    pub layout_name: String,
    pub layout_description: String,
    pub variants: Vec<VariantEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantEntry {
    pub variant_name: String,
    pub variant_description: String,
}

/// Одна единица экспорта: раскладка без варианта или раскладка + вариант
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub layout_name: String,
    pub layout_description: String,
    pub variant_name: Option<String>,
    pub variant_description: Option<String>,
}

impl LayoutEntry {
    pub fn new(layout_name: impl Into<String>, layout_description: impl Into<String>) -> Self {
        Self {
            layout_name: layout_name.into(),
            layout_description: layout_description.into(),
            variants: Vec::new(),
        }
    }

    pub fn with_variant(
        mut self,
        variant_name: impl Into<String>,
        variant_description: impl Into<String>,
    ) -> Self {
        self.variants.push(VariantEntry {
            variant_name: variant_name.into(),
            variant_description: variant_description.into(),
        });
        self
    }

    /// Сначала сама раскладка, затем по одной цели на вариант
    pub fn targets(&self) -> impl Iterator<Item = ExportTarget> + '_ {
        let bare = ExportTarget {
            layout_name: self.layout_name.clone(),
            layout_description: self.layout_description.clone(),
            variant_name: None,
            variant_description: None,
        };

        std::iter::once(bare).chain(self.variants.iter().map(move |variant| ExportTarget {
            layout_name: self.layout_name.clone(),
            layout_description: self.layout_description.clone(),
            variant_name: Some(variant.variant_name.clone()),
            variant_description: Some(variant.variant_description.clone()),
        }))
    }
}

impl ExportTarget {
    /// `<layout>` или `<layout>-<variant>`; спецсимволы не экранируются
    pub fn file_name(&self) -> String {
        match &self.variant_name {
            Some(variant) => format!("{}-{}", self.layout_name, variant),
            None => self.layout_name.clone(),
        }
    }

    /// Четыре строки заголовка в фиксированном порядке
    pub fn header(&self) -> String {
        format!(
            "#layoutName={}\n#layoutDescription={}\n#variantName={}\n#variantDescription={}\n",
            self.layout_name,
            self.layout_description,
            self.variant_name.as_deref().unwrap_or(""),
            self.variant_description.as_deref().unwrap_or(""),
        )
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{layoutName={}, layoutDescription={}, variantName={}, variantDescription={}}}",
            self.layout_name,
            self.layout_description,
            self.variant_name.as_deref().unwrap_or(""),
            self.variant_description.as_deref().unwrap_or(""),
        )
    }
}

/// Разбор вывода `--list-layouts` выбранным парсером
pub fn parse_catalog(input: &str, format: CatalogFormat) -> Result<Vec<LayoutEntry>> {
    match format {
        CatalogFormat::Text => Ok(text::parse_catalog(input)),
        CatalogFormat::Xml => xml::parse_catalog(input),
    }
}

/// Плоский список целей в порядке каталога
pub fn flatten(entries: &[LayoutEntry]) -> Vec<ExportTarget> {
    entries.iter().flat_map(|entry| entry.targets()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_target_count_is_layouts_plus_variants() {
        let entries = vec![
            LayoutEntry::new("us", "English (US)")
                .with_variant("dvorak", "English (Dvorak)")
                .with_variant("colemak", "English (Colemak)"),
            LayoutEntry::new("de", "German"),
            LayoutEntry::new("fr", "French").with_variant("azerty", "French (AZERTY)"),
        ];

        let targets = flatten(&entries);
        assert_eq!(targets.len(), 3 + 3);
        assert_eq!(targets[0].file_name(), "us");
        assert_eq!(targets[1].file_name(), "us-dvorak");
        assert_eq!(targets[2].file_name(), "us-colemak");
        assert_eq!(targets[3].file_name(), "de");
        assert_eq!(targets[4].file_name(), "fr");
        assert_eq!(targets[5].file_name(), "fr-azerty");
    }

    #[test]
    fn test_header_keeps_all_lines_when_fields_missing() {
        let target = LayoutEntry::new("de", "").targets().next().unwrap();
        assert_eq!(
            target.header(),
            "#layoutName=de\n#layoutDescription=\n#variantName=\n#variantDescription=\n"
        );
    }

    #[test]
    fn test_empty_description_is_not_missing_variant() {
        let entry = LayoutEntry::new("us", "English").with_variant("intl", "");
        let variant = entry.targets().nth(1).unwrap();
        assert_eq!(variant.variant_name.as_deref(), Some("intl"));
        assert_eq!(variant.variant_description.as_deref(), Some(""));
        assert_eq!(variant.file_name(), "us-intl");
    }

    #[test]
    fn test_display_substitutes_empty_strings() {
        let target = LayoutEntry::new("ru", "Russian").targets().next().unwrap();
        assert_eq!(
            target.to_string(),
            "{layoutName=ru, layoutDescription=Russian, variantName=, variantDescription=}"
        );
    }
}
