pub mod command;
pub mod preflight;

pub use command::{run_captured, run_checked};

// Макросы условного логирования: аргументы не вычисляются, если уровень выключен
#[macro_export]
macro_rules! debug_if_enabled {
    ($($arg:tt)*) => {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!($($arg)*);
        }
    };
}
