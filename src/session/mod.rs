pub mod headless_mode;
pub mod messages;
pub mod setup;
pub mod status;
pub mod tui_mode;

pub use headless_mode::run_headless_mode;
pub use setup::{SessionData, setup_session};
pub use status::run_status;
pub use tui_mode::run_tui_mode;
