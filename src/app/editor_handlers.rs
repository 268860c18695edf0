//! Editor handlers - run, debounced persistence and split resizing.

use super::App;
use crate::editors::CodeLanguage;
use crate::error::Result;
use crate::state::{PartialClientState, update_client_state};
use crate::utils::encode_base64;
use std::time::Instant;

impl App {
    /// Store the code and rebuild the preview with it
    pub async fn run(&mut self) -> Result<()> {
        self.store_code().await?;
        self.editors_mut()?.cancel_pending_change();
        self.update_preview()
    }

    /// Content change reported by an editor widget
    pub fn on_editor_edit(&mut self, lang: CodeLanguage, text: impl Into<String>, now: Instant) -> Result<bool> {
        Ok(self.editors_mut()?.content_changed(lang, text, now))
    }

    /// Store the code once the edit debounce has elapsed. Returns whether
    /// anything was stored.
    pub async fn poll_timers(&mut self, now: Instant) -> Result<bool> {
        if !self.editors_mut()?.poll_change(now) {
            return Ok(false);
        }
        self.store_code().await?;
        Ok(true)
    }

    /// Persist the pane sizes after a drag. Ignored when dragging is off.
    pub async fn on_split_drag_end(&mut self, sizes: [f64; 2]) -> Result<bool> {
        let layout = self.layout()?;
        if !layout.draggable {
            return Ok(false);
        }

        update_client_state(self.ctx.as_ref(), PartialClientState::split_sizes(sizes)).await?;
        if let Some(layout) = self.layout.as_mut() {
            layout.sizes = sizes;
        }
        Ok(true)
    }

    async fn store_code(&mut self) -> Result<()> {
        let values = self.editors()?.get_values();
        let partial = PartialClientState::code(
            encode_base64(&values.js),
            encode_base64(&values.css),
            encode_base64(&values.html),
        );
        update_client_state(self.ctx.as_ref(), partial).await?;
        self.logger.debug("Code stored in client state");
        Ok(())
    }
}
