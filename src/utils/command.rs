use crate::error::{ExportError, Result};
use std::collections::HashMap;
use std::process::{Command, Output};
use tracing::debug;

/// Переменные окружения, без которых X11 утилиты не достучатся до дисплея под sudo
fn build_env_overrides() -> HashMap<String, String> {
    let mut env_vars = HashMap::new();

    for key in ["DISPLAY", "XAUTHORITY"] {
        if let Ok(value) = std::env::var(key) {
            env_vars.insert(key.to_string(), value);
        }
    }

    if std::env::var("USER").unwrap_or_default() == "root" && !env_vars.contains_key("XAUTHORITY") {
        if let Ok(sudo_user) = std::env::var("SUDO_USER") {
            let xauthority = format!("/home/{}/.Xauthority", sudo_user);
            debug!("Подставляем XAUTHORITY для пользователя {}: {}", sudo_user, xauthority);
            env_vars.insert("XAUTHORITY".to_string(), xauthority);
        }
    }

    env_vars
}

pub fn create_command(program: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);

    for (key, value) in build_env_overrides() {
        cmd.env(key, value);
    }

    cmd
}

/// Запускает утилиту и дожидается завершения, stdout/stderr перехватываются
pub fn run_captured(program: &str, args: &[&str]) -> Result<Output> {
    debug!("Запуск: {} {:?}", program, args);

    let output = create_command(program, args)
        .output()
        .map_err(|source| ExportError::ToolLaunch {
            program: program.to_string(),
            source,
        })?;

    debug!("{} завершился: {}", program, output.status);
    Ok(output)
}

/// То же, что [`run_captured`], но ненулевой код возврата считается ошибкой
pub fn run_checked(program: &str, args: &[&str]) -> Result<Output> {
    let output = run_captured(program, args)?;
    if !output.status.success() {
        return ExportError::tool_failed(program, &output);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captured_collects_stdout() {
        let output = run_captured("echo", &["--list-keycodes"]).unwrap();
        assert!(output.status.success());
        assert_eq!(output.stdout, b"--list-keycodes\n");
    }

    #[test]
    fn test_run_checked_rejects_nonzero_exit() {
        let err = run_checked("false", &[]).unwrap_err();
        assert!(matches!(err, ExportError::ToolFailed { .. }));

        // Без проверки код возврата не мешает
        assert!(run_captured("false", &[]).is_ok());
    }

    #[test]
    fn test_missing_program_is_launch_error() {
        let err = run_captured("/nonexistent/xkb-exporter", &[]).unwrap_err();
        assert!(matches!(err, ExportError::ToolLaunch { .. }));
    }
}
