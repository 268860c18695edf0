//! Context menu interactions
//!
//! A right-click in the preview travels in two hops: the SDK inside the
//! iframe turns Muze's interaction payload into a `ShowContextMenu` channel
//! message, and the host page turns that into host points and asks the
//! host to open its context menu.

mod context_menu;
mod muze;

pub use context_menu::*;
pub use muze::*;
