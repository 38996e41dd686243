use crate::catalog::{self, ExportTarget};
use crate::config::Config;
use crate::error::Result;
use crate::export_error;
use crate::services::enumerator::LayoutEnumerator;
use crate::services::keycode_exporter::KeycodeExporter;
use crate::services::session::KeyboardSession;
use tracing::{info, warn};

/// Итог прогона; на код выхода процесса не влияет
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub succeeded: usize,
    pub failed: Vec<String>,
}

impl ExportSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }
}

/// Каталог -> цели -> экспорт, строго последовательно
pub struct ExportPipeline {
    session: KeyboardSession,
    enumerator: LayoutEnumerator,
    exporter: KeycodeExporter,
    restore_layout: bool,
    layout_filter: Vec<String>,
}

impl ExportPipeline {
    pub fn new(config: &Config, session: KeyboardSession) -> Self {
        Self {
            session,
            enumerator: LayoutEnumerator::new(config.catalog.format),
            exporter: KeycodeExporter::new(&config.output),
            restore_layout: config.output.restore_layout,
            layout_filter: Vec::new(),
        }
    }

    /// Ограничить экспорт раскладками с указанными именами; пустой список - все
    pub fn with_layout_filter(mut self, layouts: Vec<String>) -> Self {
        self.layout_filter = layouts;
        self
    }

    pub fn exporter(&self) -> &KeycodeExporter {
        &self.exporter
    }

    /// Ошибка каталога (в т.ч. битый XML) прерывает весь запуск
    pub fn collect_targets(&self) -> Result<Vec<ExportTarget>> {
        let mut entries = self.enumerator.enumerate(&self.session)?;

        if !self.layout_filter.is_empty() {
            if let Some(missing) = self
                .layout_filter
                .iter()
                .find(|name| !entries.iter().any(|entry| &entry.layout_name == *name))
            {
                return Err(export_error!(
                    invalid_catalog,
                    "раскладки '{}' нет в каталоге",
                    missing
                ));
            }

            entries.retain(|entry| self.layout_filter.contains(&entry.layout_name));
            info!(
                "После фильтра {:?} осталось {} раскладок",
                self.layout_filter,
                entries.len()
            );
        }

        Ok(catalog::flatten(&entries))
    }

    pub fn run(&mut self) -> Result<ExportSummary> {
        let targets = self.collect_targets()?;
        info!("Целей для экспорта: {}", targets.len());

        let original = if self.restore_layout {
            match self.session.current_layout() {
                Ok(selection) => {
                    info!(
                        "Текущая раскладка: {}({})",
                        selection.layout,
                        selection.variant.as_deref().unwrap_or("")
                    );
                    Some(selection)
                }
                Err(e) => {
                    warn!("Не удалось определить текущую раскладку, восстановления не будет: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let mut summary = ExportSummary::default();
        for target in &targets {
            if self.exporter.export_keycodes(&mut self.session, target) {
                summary.succeeded += 1;
            } else {
                summary.failed.push(target.file_name());
            }
        }

        if let Some(selection) = original {
            match self
                .session
                .activate(&selection.layout, selection.variant.as_deref())
            {
                Ok(_) => info!("Исходная раскладка восстановлена"),
                Err(e) => warn!("Не удалось восстановить исходную раскладку: {}", e),
            }
        }

        info!(
            "Экспорт завершён: всего {}, успешно {}, с ошибками {}",
            summary.total(),
            summary.succeeded,
            summary.failed.len()
        );
        if !summary.failed.is_empty() {
            warn!("Не экспортированы: {}", summary.failed.join(", "));
        }

        Ok(summary)
    }
}
