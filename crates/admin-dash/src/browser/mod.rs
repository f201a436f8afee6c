//! Browser runtime for the admin dashboard.
//!
//! This module is the bridge between the [`Dashboard`](admin_dash_core::Dashboard)
//! state machines and the host document.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;

// Cross-platform modules
pub mod delegate;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub use app::App;
pub use delegate::{click_events, ClickContext};
#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;
pub use logging::{init_logging, ConsoleMakeWriter, LoggingError};
