//! Modular dashboard implementation
//!
//! State, the display projection, and the terminal components

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;
pub mod view;

pub use renderer::render_dashboard;
pub use state::DashboardState;
pub use view::DashboardView;
