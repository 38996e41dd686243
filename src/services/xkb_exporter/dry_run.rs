use crate::config::CatalogFormat;
use crate::error::Result;
use tracing::info;

use super::r#trait::{LayoutSelection, XkbExporterTrait};

const FAKE_TEXT_CATALOG: &str = "\
#<layout>,<layout_description>,<variant_1>,<variant_description_1>,...
de,German,nodeadkeys,German (no dead keys)
us,English (US),dvorak,English (Dvorak),intl,English (US\\, intl.\\, with dead keys)
";

const FAKE_XML_CATALOG: &str = r#"<layouts>
  <layout>
    <name>de</name>
    <description>German</description>
    <variants>
      <variant><name>nodeadkeys</name><description>German (no dead keys)</description></variant>
    </variants>
  </layout>
  <layout>
    <name>us</name>
    <description>English (US)</description>
    <variants>
      <variant><name>dvorak</name><description>English (Dvorak)</description></variant>
      <variant><name>intl</name><description>English (US, intl., with dead keys)</description></variant>
    </variants>
  </layout>
</layouts>
"#;

const FAKE_KEYCODES: &str = "\
#<keycode>,<keysym_level_1>,<keysym_level_2>,<keysym_level_3>,<keysym_level_4>,...
9,0xff1b
10,0x0031,0x0021
11,0x0032,0x0040
38,0x0061,0x0041
";

/// Эмулятор утилиты экспорта: фиксированный каталог и таблица кейкодов
pub struct DryRunExporter {
    format: CatalogFormat,
}

impl DryRunExporter {
    pub fn new(format: CatalogFormat) -> Self {
        Self { format }
    }
}

impl XkbExporterTrait for DryRunExporter {
    fn list_layouts(&self) -> Result<String> {
        info!("Dry-run: возвращаем тестовый каталог ({})", self.format);
        Ok(match self.format {
            CatalogFormat::Text => FAKE_TEXT_CATALOG.to_string(),
            CatalogFormat::Xml => FAKE_XML_CATALOG.to_string(),
        })
    }

    fn list_keycodes(&self, _check_status: bool) -> Result<Vec<u8>> {
        Ok(FAKE_KEYCODES.as_bytes().to_vec())
    }

    fn current_layout(&self) -> Result<LayoutSelection> {
        Ok(LayoutSelection {
            layout: "us".to_string(),
            variant: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{flatten, parse_catalog};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fake_catalogs_agree() {
        let text = parse_catalog(
            &DryRunExporter::new(CatalogFormat::Text).list_layouts().unwrap(),
            CatalogFormat::Text,
        )
        .unwrap();
        let xml = parse_catalog(
            &DryRunExporter::new(CatalogFormat::Xml).list_layouts().unwrap(),
            CatalogFormat::Xml,
        )
        .unwrap();

        assert_eq!(text, xml);
        assert_eq!(flatten(&text).len(), 5);
    }
}
