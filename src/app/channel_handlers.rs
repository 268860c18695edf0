//! Channel handlers - messages posted by the preview iframe.

use super::App;
use crate::comm::ChannelEvent;
use crate::error::Result;
use crate::host::ChartToTsEvent;
use crate::interactions::handle_context_menu_event;
use serde_json::Value;

impl App {
    /// Window message from the preview iframe
    pub fn on_window_message(&self, data: &Value) -> bool {
        self.channel.handle_message(data)
    }

    /// Handle the channel events received so far, in arrival order.
    /// Returns how many were handled.
    pub async fn process_channel_events(&mut self) -> Result<usize> {
        let mut handled = 0;
        while let Ok(event) = self.channel_events.try_recv() {
            match event {
                ChannelEvent::ShowContextMenu(payload) => {
                    handle_context_menu_event(self.ctx.as_ref(), &payload, self.logger).await?;
                }
                ChannelEvent::HideAllContextMenus => self.hide_all_context_menus().await?,
                ChannelEvent::RenderCompleted => self.logger.debug("Preview chart rendered"),
            }
            handled += 1;
        }
        Ok(handled)
    }

    /// Click anywhere in the playground outside the preview
    pub async fn on_document_click(&self) -> Result<()> {
        self.hide_all_context_menus().await
    }

    pub async fn hide_all_context_menus(&self) -> Result<()> {
        self.ctx.emit_event(ChartToTsEvent::CloseContextMenu).await?;
        self.ctx.emit_event(ChartToTsEvent::CloseAxisMenu).await
    }
}
