use crate::catalog::ExportTarget;
use crate::config::OutputConfig;
use crate::debug_if_enabled;
use crate::error::Result;
use crate::services::session::KeyboardSession;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Экспорт кейкодов одной цели: смена раскладки, дамп, запись файла
pub struct KeycodeExporter {
    output_dir: PathBuf,
    write_header: bool,
    check_dump_status: bool,
}

impl KeycodeExporter {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            output_dir: output.directory.clone(),
            write_header: output.write_header,
            check_dump_status: output.check_dump_status,
        }
    }

    pub fn target_path(&self, target: &ExportTarget) -> PathBuf {
        self.output_dir.join(target.file_name())
    }

    /// Ошибки не выходят за пределы одной цели: диагностика в лог и `false`
    pub fn export_keycodes(&self, session: &mut KeyboardSession, target: &ExportTarget) -> bool {
        info!("set keyboard layout {}", target);

        let active = match session.activate(&target.layout_name, target.variant_name.as_deref()) {
            Ok(active) => active,
            Err(e) => {
                error!("Не удалось сменить раскладку на {}: {}", target.file_name(), e);
                return false;
            }
        };

        let dump = match active.dump_keycodes(self.check_dump_status) {
            Ok(dump) => dump,
            Err(e) => {
                error!("Не удалось экспортировать кейкоды для {}: {}", target.file_name(), e);
                return false;
            }
        };
        debug_if_enabled!("Дамп кейкодов {}: {} байт", target.file_name(), dump.len());

        let path = self.target_path(target);
        let header = self.write_header.then(|| target.header());
        if let Err(e) = write_keycode_file(&path, header.as_deref(), &dump) {
            error!("Не удалось записать файл '{}': {}", path.display(), e);
            return false;
        }

        info!("Кейкоды сохранены в {}", path.display());
        true
    }
}

/// Перезаписывает файл целиком; дескриптор закрывается на любом пути выхода
fn write_keycode_file(path: &Path, header: Option<&str>, dump: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    if let Some(header) = header {
        writer.write_all(header.as_bytes())?;
    }
    writer.write_all(dump)?;
    writer.flush()?;

    Ok(())
}
