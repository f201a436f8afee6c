//! Admin dashboard: browser runtime over [`admin_dash_core`].
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { App } from './admin_dash.js';
//!
//! async function main() {
//!     await init();
//!     // Optional JSON configuration; element ids and timings default to the stock page.
//!     const app = new App('{"breakpoint_px": 1024, "search_debounce_ms": 150}');
//!     app.toast('Welcome back', 'success');
//! }
//! ```

pub use admin_dash_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{App, DomRenderer};

pub use browser::{click_events, init_logging, ClickContext, ConsoleMakeWriter, LoggingError};
