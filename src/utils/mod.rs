// Wed Oct 14 2026 - Alex

pub mod logging;

pub use logging::{init_logger, level_from_str, scoped_timer, ScopedTimer};
