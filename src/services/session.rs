use crate::error::Result;
use crate::services::layout_switcher::LayoutSwitcherTrait;
use crate::services::xkb_exporter::{LayoutSelection, XkbExporterTrait};
use tracing::debug;

/// Единственный владелец активной раскладки системы.
///
/// Раскладка глобальна, а дамп кейкодов неявно читает ту, что активна сейчас.
/// Поэтому дамп доступен только через [`ActiveLayout`], который держит `&mut`
/// заём сессии: пока он жив, сменить раскладку повторно нельзя.
pub struct KeyboardSession {
    switcher: Box<dyn LayoutSwitcherTrait>,
    exporter: Box<dyn XkbExporterTrait>,
}

/// Подтверждение того, что раскладка активирована; живёт не дольше заёма сессии
pub struct ActiveLayout<'a> {
    exporter: &'a dyn XkbExporterTrait,
    layout: &'a str,
    variant: Option<&'a str>,
}

impl KeyboardSession {
    pub fn new(
        switcher: Box<dyn LayoutSwitcherTrait>,
        exporter: Box<dyn XkbExporterTrait>,
    ) -> Self {
        Self { switcher, exporter }
    }

    /// Каталог не зависит от активной раскладки
    pub fn list_layouts(&self) -> Result<String> {
        self.exporter.list_layouts()
    }

    pub fn current_layout(&self) -> Result<LayoutSelection> {
        self.exporter.current_layout()
    }

    pub fn activate<'a>(
        &'a mut self,
        layout: &'a str,
        variant: Option<&'a str>,
    ) -> Result<ActiveLayout<'a>> {
        self.switcher.switch_layout(layout, variant)?;
        debug!("Активирована раскладка {}({})", layout, variant.unwrap_or(""));

        Ok(ActiveLayout {
            exporter: self.exporter.as_ref(),
            layout,
            variant,
        })
    }
}

impl ActiveLayout<'_> {
    pub fn dump_keycodes(&self, check_status: bool) -> Result<Vec<u8>> {
        debug!(
            "Экспорт кейкодов для {}({})",
            self.layout,
            self.variant.unwrap_or("")
        );
        self.exporter.list_keycodes(check_status)
    }
}
