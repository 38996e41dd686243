use crate::config::Config;
use crate::error::Result;
use crate::export_error;

/// Раскладка, активная в системе (вывод `--print`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSelection {
    pub layout: String,
    pub variant: Option<String>,
}

impl LayoutSelection {
    /// Разбирает строки вида `layout: us` и `variant: dvorak`
    pub fn parse(output: &str) -> Result<Self> {
        let mut layout = None;
        let mut variant = None;

        for line in output.lines() {
            if let Some((key, value)) = line.split_once(':') {
                let value = value.trim();
                match key.trim() {
                    "layout" => layout = Some(value.to_string()),
                    "variant" if !value.is_empty() => variant = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        match layout {
            Some(layout) if !layout.is_empty() => Ok(Self { layout, variant }),
            _ => Err(export_error!(
                internal,
                "в выводе нет активной раскладки: '{}'",
                output.trim()
            )),
        }
    }
}

/// Внешняя утилита экспорта: каталог раскладок, кейкоды активной раскладки, текущая раскладка
pub trait XkbExporterTrait {
    /// Сырой вывод каталога раскладок
    fn list_layouts(&self) -> Result<String>;

    /// Таблица кейкодов для раскладки, активной в данный момент
    fn list_keycodes(&self, check_status: bool) -> Result<Vec<u8>>;

    fn current_layout(&self) -> Result<LayoutSelection>;
}

/// Factory function to create an appropriate exporter based on the dry_run flag
pub fn create_xkb_exporter(config: &Config, dry_run: bool) -> Result<Box<dyn XkbExporterTrait>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunExporter::new(
            config.catalog.format,
        )))
    } else {
        Ok(Box::new(super::xkb_exporter::XkbExporter::new(
            config.tools.exporter.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_print_output() {
        let selection = LayoutSelection::parse("layout: us\nvariant: dvorak\n").unwrap();
        assert_eq!(selection.layout, "us");
        assert_eq!(selection.variant.as_deref(), Some("dvorak"));
    }

    #[test]
    fn test_parse_print_output_without_variant() {
        let selection = LayoutSelection::parse("layout: us,ru\nvariant: \n").unwrap();
        assert_eq!(selection.layout, "us,ru");
        assert_eq!(selection.variant, None);
    }

    #[test]
    fn test_parse_print_output_without_layout() {
        assert!(LayoutSelection::parse("error: could not open display\n").is_err());
    }
}
