use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
mod catalog;
mod config;
mod error;
mod services;
mod utils;

use config::{CatalogFormat, Config};
use services::{create_layout_switcher, create_xkb_exporter, ExportPipeline, KeyboardSession};

#[derive(Parser, Debug)]
#[command(name = "keycode-export")]
#[command(about = "Экспорт таблиц кейкодов для каждой раскладки и варианта XKB")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "keycode-export.toml")]
    config: String,

    /// Режим сухого запуска (без смены раскладки и вызова утилит)
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (по умолчанию из конфигурации)
    #[arg(long)]
    log_level: Option<String>,

    /// Формат каталога раскладок
    #[arg(long, value_enum)]
    format: Option<CatalogFormat>,

    /// Каталог для файлов кейкодов
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Писать только дамп, без строк заголовка
    #[arg(long)]
    no_header: bool,

    /// Экспортировать только указанные раскладки (можно повторять)
    #[arg(short, long = "layout", value_name = "NAME")]
    layouts: Vec<String>,

    /// Только вывести цели экспорта, ничего не записывая
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;
    apply_overrides(&mut config, &args);
    config.validate()?;

    // Инициализация системы логирования
    init_tracing(&config.logging.level)?;

    info!("Запуск keycode-export v{}", env!("CARGO_PKG_VERSION"));
    info!("Конфигурация загружена из: {}", args.config);

    if args.dry_run {
        warn!("Режим сухого запуска - раскладка системы не меняется");
    }

    let switcher = create_layout_switcher(&config, args.dry_run)?;
    let exporter = create_xkb_exporter(&config, args.dry_run)?;
    let session = KeyboardSession::new(switcher, exporter);

    let mut pipeline = ExportPipeline::new(&config, session).with_layout_filter(args.layouts.clone());

    if args.list {
        for target in pipeline.collect_targets()? {
            println!(
                "{}\t{}",
                pipeline.exporter().target_path(&target).display(),
                target
            );
        }
        return Ok(());
    }

    utils::preflight::check_environment(&config.output.directory);

    // Ошибки отдельных раскладок уже залогированы и на код выхода не влияют
    pipeline.run()?;

    info!("keycode-export завершил работу");
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = args.format {
        config.catalog.format = format;
    }
    if let Some(dir) = &args.output_dir {
        config.output.directory = dir.clone();
    }
    if args.no_header {
        config.output.write_header = false;
    }
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    Ok(())
}
