//! Application module - the playground's render lifecycle and user actions.
//!
//! This module is organized into several submodules:
//! - `state` - The App struct and the split layout
//! - `lifecycle` - Initialization, render and preview rebuild
//! - `editor_handlers` - Run, debounced code persistence and split resizing
//! - `channel_handlers` - Messages arriving from the preview iframe

mod channel_handlers;
mod editor_handlers;
mod lifecycle;
mod state;

pub use state::{App, SplitLayout};
