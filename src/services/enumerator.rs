use crate::catalog::{self, LayoutEntry};
use crate::config::CatalogFormat;
use crate::error::Result;
use crate::services::session::KeyboardSession;
use tracing::info;

/// Получает каталог раскладок от утилиты экспорта и разбирает его
pub struct LayoutEnumerator {
    format: CatalogFormat,
}

impl LayoutEnumerator {
    pub fn new(format: CatalogFormat) -> Self {
        Self { format }
    }

    pub fn enumerate(&self, session: &KeyboardSession) -> Result<Vec<LayoutEntry>> {
        info!("Запрос каталога раскладок (формат: {})", self.format);

        let raw = session.list_layouts()?;
        let entries = catalog::parse_catalog(&raw, self.format)?;

        let variants: usize = entries.iter().map(|e| e.variants.len()).sum();
        info!(
            "В каталоге {} раскладок и {} вариантов",
            entries.len(),
            variants
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::layout_switcher::dry_run::DryRunSwitcher;
    use crate::services::xkb_exporter::dry_run::DryRunExporter;

    fn dry_session(format: CatalogFormat) -> KeyboardSession {
        KeyboardSession::new(
            Box::new(DryRunSwitcher::new()),
            Box::new(DryRunExporter::new(format)),
        )
    }

    #[test]
    fn test_enumerate_text_catalog() {
        let session = dry_session(CatalogFormat::Text);
        let entries = LayoutEnumerator::new(CatalogFormat::Text)
            .enumerate(&session)
            .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].layout_name, "us");
        assert_eq!(
            entries[1].variants[1].variant_description,
            "English (US, intl., with dead keys)"
        );
    }

    #[test]
    fn test_format_mismatch_xml_parser_on_text_fails() {
        // Текстовый вывод под XML парсером - ошибка на весь запуск
        let session = dry_session(CatalogFormat::Text);
        assert!(LayoutEnumerator::new(CatalogFormat::Xml)
            .enumerate(&session)
            .is_err());
    }
}
