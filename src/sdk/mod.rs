//! SDK running inside the preview iframe
//!
//! The preview document binds a `DyocSdk` built from the playground init
//! data to a global. User code reads the host environment from it, loads
//! the search data and creates Muze canvases through it. Everything that
//! must reach the host page goes through the channel to the parent window.

mod canvas;

pub use canvas::*;

use crate::comm::{ChannelEvent, IframeChannel, MessageTarget};
use crate::data::DataAndSchema;
use crate::error::Result;
use crate::logger::Logger;
use crate::playground::SdkInitData;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// Host environment as seen by user code
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkEnv {
    pub is_debug_mode: bool,
    pub is_liveboard_context: bool,
    pub is_mobile: bool,
    pub is_print_mode: bool,
    #[serde(rename = "colorPallettes")]
    pub color_palettes: Vec<String>,
}

/// What the SDK shares with every canvas it creates
#[derive(Clone)]
pub struct SdkContext {
    pub init_data: Arc<SdkInitData>,
    pub channel: Arc<IframeChannel>,
    pub parent: Arc<dyn MessageTarget>,
    pub logger: Logger,
}

impl SdkContext {
    /// Post an event to the host page
    pub fn emit_to_parent(&self, event: &ChannelEvent) -> Result<()> {
        self.channel.emit(event, self.parent.as_ref())
    }
}

pub struct DyocSdk {
    ctx: SdkContext,
}

impl DyocSdk {
    pub fn new(init_data: SdkInitData, parent: Arc<dyn MessageTarget>) -> Self {
        let logger = Logger::with_debug_mode(init_data.ts_system_info.is_debug_mode);
        logger.info(format!(
            "SDK received {} data rows and {} fields",
            init_data.data.len().saturating_sub(1),
            init_data.schema.len()
        ));

        Self {
            ctx: SdkContext {
                init_data: Arc::new(init_data),
                channel: Arc::new(IframeChannel::new()),
                parent,
                logger,
            },
        }
    }

    pub fn channel(&self) -> &Arc<IframeChannel> {
        &self.ctx.channel
    }

    pub fn env(&self) -> SdkEnv {
        let info = &self.ctx.init_data.ts_system_info;
        SdkEnv {
            is_debug_mode: info.is_debug_mode,
            is_liveboard_context: info.is_liveboard_context,
            is_mobile: info.is_mobile,
            is_print_mode: info.is_print_mode,
            color_palettes: info.color_palettes.clone(),
        }
    }

    /// Dataset and schema Muze loads its data model from
    pub fn get_data_from_search_query(&self) -> DataAndSchema {
        DataAndSchema {
            schema: self.ctx.init_data.schema.clone(),
            data: self.ctx.init_data.data.clone(),
        }
    }

    /// Options Muze's `canvas()` is called with
    pub fn canvas_options(&self) -> Value {
        json!({ "isPrintMode": self.ctx.init_data.ts_system_info.is_print_mode })
    }

    /// Wrap a freshly created Muze canvas with the playground defaults
    pub fn canvas<C: MuzeCanvas>(&self, canvas: C) -> CanvasWrapper<C> {
        CanvasWrapper::new(canvas, self.ctx.clone())
    }

    /// Any click in the preview closes open host menus
    pub fn on_document_click(&self) -> Result<()> {
        self.ctx.emit_to_parent(&ChannelEvent::HideAllContextMenus)
    }
}
