use crate::error::Result;
use crate::utils::run_checked;
use tracing::debug;

use super::r#trait::LayoutSwitcherTrait;

pub struct SetxkbmapSwitcher {
    program: String,
}

impl SetxkbmapSwitcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl LayoutSwitcherTrait for SetxkbmapSwitcher {
    fn switch_layout(&self, layout: &str, variant: Option<&str>) -> Result<()> {
        // Пустой -variant сбрасывает вариант
        let variant = variant.unwrap_or("");
        debug!("{} -layout '{}' -variant '{}'", self.program, layout, variant);

        run_checked(&self.program, &["-layout", layout, "-variant", variant])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;

    #[test]
    fn test_zero_exit_is_success() {
        let switcher = SetxkbmapSwitcher::new("true");
        assert!(switcher.switch_layout("us", None).is_ok());
        assert!(switcher.switch_layout("us", Some("dvorak")).is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        let switcher = SetxkbmapSwitcher::new("false");
        let err = switcher.switch_layout("us", Some("dvorak")).unwrap_err();
        assert!(matches!(err, ExportError::ToolFailed { ref program, .. } if program == "false"));
    }
}
