//! LayoutSwitcher: только смена раскладки, без экспорта и записи файлов.

pub mod dry_run;
pub mod setxkbmap;
mod r#trait;

pub use self::r#trait::{create_layout_switcher, LayoutSwitcherTrait};
