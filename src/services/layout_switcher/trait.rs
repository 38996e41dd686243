use crate::config::Config;
use crate::error::Result;

/// Смена активной раскладки системы. Побочный эффект глобальный
pub trait LayoutSwitcherTrait {
    /// `variant == None` означает раскладку без варианта
    fn switch_layout(&self, layout: &str, variant: Option<&str>) -> Result<()>;
}

/// Factory function to create an appropriate layout switcher based on the dry_run flag
pub fn create_layout_switcher(
    config: &Config,
    dry_run: bool,
) -> Result<Box<dyn LayoutSwitcherTrait>> {
    if dry_run {
        Ok(Box::new(super::dry_run::DryRunSwitcher::new()))
    } else {
        Ok(Box::new(super::setxkbmap::SetxkbmapSwitcher::new(
            config.tools.switcher.clone(),
        )))
    }
}
