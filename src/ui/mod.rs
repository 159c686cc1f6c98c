// Wed Oct 14 2026 - Alex

pub mod cli;
pub mod errors;
pub mod progress;
pub mod table;

pub use cli::{Args, Command, CommandHandler};
pub use errors::ErrorDisplay;
pub use progress::ProgressManager;
pub use table::TableBuilder;
