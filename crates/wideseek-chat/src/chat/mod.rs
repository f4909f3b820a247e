// Chat module - session state, history window, and turn handling
pub mod config;
pub mod history;
pub mod session;
pub mod state;
