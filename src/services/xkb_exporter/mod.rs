//! XkbExporter: обёртка над утилитой экспорта. Ничего не знает о файлах и форматах каталога.

pub mod dry_run;
pub mod xkb_exporter;
mod r#trait;

pub use self::r#trait::{create_xkb_exporter, LayoutSelection, XkbExporterTrait};
