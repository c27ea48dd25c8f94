//! TUI front end
//!
//! Terminal wrapper, keyboard mapping, screen components and the event loop.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{FrameRenderer, ResultAction, Screens};
pub use state::{NavigationAction, StateManager};
pub use tui::Tui;
