//! Create-your-own-chart playground core.
//!
//! The playground lets a user write small JS/CSS/HTML snippets against the
//! Muze charting library, fed with tabular data from the host analytics
//! platform, and previews the result inside a sandboxed iframe. Everything the
//! browser supplies (host chart context, iframe windows, the Muze global) is
//! reached through traits so the logic here stays host-agnostic.
//!
//! ## Modules
//!
//! - `host` - Host chart-SDK context contract and an in-memory host
//! - `data` - Columnar query results to row-array data and Muze schema
//! - `state` - Client state persisted inside host visual properties
//! - `comm` - Typed message channel between parent and preview iframes
//! - `editors` - JS/CSS/HTML editor buffers with debounced change tracking
//! - `preview` - Preview document generation, iframe model and loopback server
//! - `playground` - Versioned playground data and default code samples
//! - `interactions` - Context-menu translation on both sides of the iframe
//! - `sdk` - The SDK object exposed inside the preview iframe
//! - `app` - Render lifecycle and user actions
//! - `llm` - Natural language to Muze code generation

pub mod app;
pub mod comm;
pub mod constants;
pub mod data;
pub mod editors;
pub mod error;
pub mod host;
pub mod interactions;
pub mod llm;
pub mod logger;
pub mod playground;
pub mod preview;
pub mod sdk;
pub mod settings;
pub mod state;
pub mod timing;
pub mod types;
pub mod utils;

pub use error::{PlaygroundError, Result};
