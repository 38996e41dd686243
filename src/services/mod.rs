pub mod enumerator;
pub mod keycode_exporter;
pub mod layout_switcher;
pub mod pipeline;
pub mod session;
pub mod xkb_exporter;

pub use layout_switcher::create_layout_switcher;
pub use pipeline::ExportPipeline;
pub use session::KeyboardSession;
pub use xkb_exporter::create_xkb_exporter;
