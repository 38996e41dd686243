use crate::error::Result;
use crate::utils::{run_captured, run_checked};
use tracing::{debug, warn};

use super::r#trait::{LayoutSelection, XkbExporterTrait};

pub struct XkbExporter {
    program: String,
}

impl XkbExporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl XkbExporterTrait for XkbExporter {
    fn list_layouts(&self) -> Result<String> {
        let output = run_checked(&self.program, &["--list-layouts"])?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("{} --list-layouts: {} байт", self.program, stdout.len());
        Ok(stdout)
    }

    fn list_keycodes(&self, check_status: bool) -> Result<Vec<u8>> {
        let output = if check_status {
            run_checked(&self.program, &["--list-keycodes"])?
        } else {
            let output = run_captured(&self.program, &["--list-keycodes"])?;
            if !output.status.success() {
                warn!(
                    "{} --list-keycodes завершился с {}, вывод используется без проверки",
                    self.program, output.status
                );
            }
            output
        };

        Ok(output.stdout)
    }

    fn current_layout(&self) -> Result<LayoutSelection> {
        let output = run_checked(&self.program, &["--print"])?;
        LayoutSelection::parse(&String::from_utf8_lossy(&output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;

    #[test]
    fn test_keycodes_are_raw_stdout() {
        // echo печатает свои аргументы, этого достаточно для проверки перехвата stdout
        let exporter = XkbExporter::new("echo");
        assert_eq!(exporter.list_keycodes(true).unwrap(), b"--list-keycodes\n");
        assert_eq!(exporter.list_layouts().unwrap(), "--list-layouts\n");
    }

    #[test]
    fn test_keycode_status_checked_only_when_asked() {
        let exporter = XkbExporter::new("false");
        let err = exporter.list_keycodes(true).unwrap_err();
        assert!(matches!(err, ExportError::ToolFailed { .. }));

        assert_eq!(exporter.list_keycodes(false).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_list_layouts_failure_is_error() {
        let exporter = XkbExporter::new("false");
        assert!(exporter.list_layouts().is_err());
    }
}
