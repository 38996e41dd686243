use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка разбора XML каталога: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("Не удалось запустить '{program}': {source}")]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' завершился с ошибкой ({status}): {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Некорректный каталог раскладок: {0}")]
    InvalidCatalog(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl ExportError {
    pub fn tool_failed<T>(program: &str, output: &std::process::Output) -> Result<T> {
        Err(ExportError::ToolFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! export_error {
    (invalid_catalog, $($arg:tt)*) => {
        $crate::error::ExportError::InvalidCatalog(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::ExportError::Internal(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};

    #[test]
    fn test_tool_failed_carries_status_and_stderr() {
        let output = Output {
            status: ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: b"Error loading new keyboard description\n".to_vec(),
        };

        let err = ExportError::tool_failed::<()>("setxkbmap", &output).unwrap_err();
        match err {
            ExportError::ToolFailed { program, status, stderr } => {
                assert_eq!(program, "setxkbmap");
                assert!(status.contains('1'));
                assert_eq!(stderr, "Error loading new keyboard description");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_macro_builds_variants() {
        let err = export_error!(invalid_catalog, "строка {}", 3);
        assert_eq!(err.to_string(), "Некорректный каталог раскладок: строка 3");
    }
}
