//! App state definition.

use crate::comm::{ChannelEvent, IframeChannel};
use crate::constants::{DEFAULT_SPLIT_SIZES, SPLIT_GUTTER_SIZE_PX, SPLIT_MIN_SIZE_PX};
use crate::editors::CodeEditors;
use crate::error::{PlaygroundError, Result};
use crate::host::ChartContext;
use crate::logger::Logger;
use crate::playground::PlaygroundData;
use crate::preview::{PreviewFrame, PreviewServer};
use crate::settings::PlaygroundSettings;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Preview/editors split pane
#[derive(Clone, Debug, PartialEq)]
pub struct SplitLayout {
    /// Pane sizes in percent, preview first
    pub sizes: [f64; 2],
    pub min_size: u32,
    pub gutter_size: u32,
    /// Dragging is off inside liveboards and in print mode
    pub draggable: bool,
}

impl Default for SplitLayout {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SPLIT_SIZES,
            min_size: SPLIT_MIN_SIZE_PX,
            gutter_size: SPLIT_GUTTER_SIZE_PX,
            draggable: true,
        }
    }
}

/// The playground application driven by host events and user actions
pub struct App {
    pub(super) ctx: Arc<dyn ChartContext>,
    pub(super) settings: PlaygroundSettings,
    pub(super) logger: Logger,
    pub(super) is_mounted: bool,
    pub(super) layout: Option<SplitLayout>,
    pub(super) editors: Option<CodeEditors>,
    pub(super) playground_data: Option<PlaygroundData>,
    pub(super) preview: Option<PreviewFrame>,
    pub(super) preview_server: Option<PreviewServer>,
    pub(super) channel: Arc<IframeChannel>,
    pub(super) channel_events: UnboundedReceiver<ChannelEvent>,
}

impl App {
    pub fn logger(&self) -> Logger {
        self.logger
    }

    pub fn settings(&self) -> &PlaygroundSettings {
        &self.settings
    }

    pub fn is_mounted(&self) -> bool {
        self.is_mounted
    }

    /// Channel the preview iframe posts its messages to
    pub fn channel(&self) -> &Arc<IframeChannel> {
        &self.channel
    }

    pub fn layout(&self) -> Result<&SplitLayout> {
        self.layout
            .as_ref()
            .ok_or(PlaygroundError::NotInitialized("split layout"))
    }

    pub fn editors(&self) -> Result<&CodeEditors> {
        self.editors
            .as_ref()
            .ok_or(PlaygroundError::NotInitialized("code editors"))
    }

    pub fn editors_mut(&mut self) -> Result<&mut CodeEditors> {
        self.editors
            .as_mut()
            .ok_or(PlaygroundError::NotInitialized("code editors"))
    }

    pub fn playground_data(&self) -> Result<&PlaygroundData> {
        self.playground_data
            .as_ref()
            .ok_or(PlaygroundError::NotInitialized("playground data"))
    }

    pub fn preview(&self) -> Result<&PreviewFrame> {
        self.preview
            .as_ref()
            .ok_or(PlaygroundError::NotInitialized("preview"))
    }
}
