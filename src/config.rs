use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub tools: ToolsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub format: CatalogFormat,
}

/// Формат вывода `--list-layouts`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// Строки через запятую, `\,` экранирует запятую
    #[default]
    Text,
    /// `<layouts><layout><name/>...</layout></layouts>`
    Xml,
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogFormat::Text => f.write_str("text"),
            CatalogFormat::Xml => f.write_str("xml"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Утилита смены раскладки (`-layout <l> -variant <v>`)
    pub switcher: String,
    /// Утилита экспорта (`--list-layouts`, `--list-keycodes`, `--print`)
    pub exporter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub write_header: bool,
    pub check_dump_status: bool,
    pub restore_layout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            switcher: "setxkbmap".to_string(),
            exporter: "./xkb-exporter".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("keycodes"),
            write_header: true,
            check_dump_status: true,
            restore_layout: true,
        }
    }
}

impl Config {
    /// Загружает конфигурацию: значения по умолчанию, затем TOML (если файл есть), затем окружение.
    /// Проверка `validate` остаётся вызывающему, после наложения флагов командной строки
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("KEYCODE_EXPORT_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        if self.tools.switcher.trim().is_empty() {
            anyhow::bail!("tools.switcher не может быть пустым");
        }

        if self.tools.exporter.trim().is_empty() {
            anyhow::bail!("tools.exporter не может быть пустым");
        }

        if self.output.directory.as_os_str().is_empty() {
            anyhow::bail!("output.directory не может быть пустым");
        }

        Ok(())
    }
}
