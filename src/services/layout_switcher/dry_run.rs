use crate::error::Result;
use tracing::info;

use super::r#trait::LayoutSwitcherTrait;

pub struct DryRunSwitcher;

impl DryRunSwitcher {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutSwitcherTrait for DryRunSwitcher {
    fn switch_layout(&self, layout: &str, variant: Option<&str>) -> Result<()> {
        info!(
            "Dry-run: эмулируем смену раскладки на {}({})",
            layout,
            variant.unwrap_or("")
        );
        Ok(())
    }
}
