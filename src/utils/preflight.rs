use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Подготовка окружения перед экспортом; проблемы только логируются
pub fn check_environment(output_dir: &Path) {
    info!("Проверка окружения...");

    if let Err(e) = ensure_output_dir(output_dir) {
        warn!(
            "Каталог {:?} недоступен: {}. Запись файлов будет завершаться ошибкой",
            output_dir, e
        );
    }

    check_display();
}

pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;
    info!("Создан каталог для кейкодов: {:?}", output_dir);
    Ok(())
}

fn check_display() {
    match std::env::var("DISPLAY") {
        Ok(value) if !value.is_empty() => {
            info!("Используется дисплей: {}", value);
        }
        _ => {
            warn!("Переменная DISPLAY не задана, утилиты X11 могут не работать");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_output_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("keycodes");
        ensure_output_dir(&target).unwrap();
        assert!(target.is_dir());

        // Повторный вызов ничего не ломает
        ensure_output_dir(&target).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_fails_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("keycodes");
        fs::write(&file, "not a directory").unwrap();
        assert!(ensure_output_dir(&file).is_err());
    }

    #[test]
    fn test_check_environment_prepares_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("keycodes");
        check_environment(&target);
        assert!(target.is_dir());
    }
}
