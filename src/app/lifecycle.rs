//! Application lifecycle - initialization, render and preview rebuild.

use super::{App, SplitLayout};
use crate::comm::{ChannelEvent, ChannelEventKind, IframeChannel};
use crate::editors::{CodeEditors, EditorValues};
use crate::error::{PlaygroundError, Result};
use crate::host::{ChartContext, ChartToTsEvent, TsToChartEvent};
use crate::logger::Logger;
use crate::playground::{
    default_css_code_sample, default_html_code_sample, default_js_code_sample,
    generate_playground_data,
};
use crate::preview::{PreviewFrame, PreviewServer, generate_preview_code};
use crate::settings::PlaygroundSettings;
use crate::state::{ClientState, get_client_state};
use crate::utils::decode_base64;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::mpsc;

impl App {
    pub fn new(ctx: Arc<dyn ChartContext>, settings: PlaygroundSettings) -> Self {
        let channel = Arc::new(IframeChannel::new());
        let (tx, channel_events) = mpsc::unbounded_channel();

        for kind in [
            ChannelEventKind::ShowContextMenu,
            ChannelEventKind::RenderCompleted,
            ChannelEventKind::HideAllContextMenus,
        ] {
            let tx = tx.clone();
            channel.on(kind, move |event: &ChannelEvent| {
                let _ = tx.send(event.clone());
            });
        }

        Self {
            ctx,
            settings,
            logger: Logger::default(),
            is_mounted: false,
            layout: None,
            editors: None,
            playground_data: None,
            preview: None,
            preview_server: None,
            channel,
            channel_events,
        }
    }

    /// Also publish every preview document on a loopback server
    pub fn with_preview_server(mut self, server: PreviewServer) -> Self {
        self.preview_server = Some(server);
        self
    }

    /// Configure logging from the host, listen for visual prop updates and
    /// render for the first time
    pub async fn init(&mut self) -> Result<()> {
        let options = self.ctx.app_config().options();
        self.logger = Logger::with_debug_mode(options.is_debug_mode);
        self.logger.info("Initializing playground");

        let logger = self.logger;
        self.ctx.on(
            TsToChartEvent::VisualPropsUpdate,
            Box::new(move |_payload: &Value| {
                logger.debug("Visual props updated");
                json!({ "triggerRenderChart": false })
            }),
        );

        self.render().await
    }

    /// One render pass bracketed by the host lifecycle events.
    ///
    /// `RenderComplete` is sent whether or not the pass failed.
    pub async fn render(&mut self) -> Result<()> {
        let started = self.ctx.emit_event(ChartToTsEvent::RenderStart).await;
        let outcome = match started {
            Ok(()) => self.do_render().await,
            Err(e) => Err(e),
        };

        if let Err(e) = &outcome {
            self.logger.error(format!("Render failed: {}", e));
            let error_event = ChartToTsEvent::RenderError {
                has_error: true,
                error: e.to_string(),
            };
            if let Err(emit_err) = self.ctx.emit_event(error_event).await {
                self.logger.error(format!("Failed to report render error: {}", emit_err));
            }
        }

        self.ctx.emit_event(ChartToTsEvent::RenderComplete).await
    }

    async fn do_render(&mut self) -> Result<()> {
        if !self.is_mounted {
            self.mount();
        }

        let state = get_client_state(self.ctx.as_ref());
        let values = self.editor_values_from_state(&state);
        self.editors_mut()?.set_values(values);

        if let Some(layout) = self.layout.as_mut() {
            layout.sizes = state.playground.split_sizes;
        }

        let data =
            generate_playground_data(&state.playground.version, self.ctx.as_ref(), &self.settings)?;
        self.playground_data = Some(data);

        self.update_preview()
    }

    /// Create the layout, editors and preview frame
    fn mount(&mut self) {
        let options = self.ctx.app_config().options();
        let draggable = !options.is_liveboard_context && !options.is_print_mode;

        self.layout = Some(SplitLayout {
            min_size: self.settings.split_min_size,
            draggable,
            ..SplitLayout::default()
        });
        self.editors = Some(CodeEditors::new(self.settings.editor_debounce()));
        self.preview = Some(PreviewFrame::new());
        self.is_mounted = true;
        self.logger.debug("Playground mounted");
    }

    /// Stored code, with the samples standing in for empty or undecodable
    /// fields
    fn editor_values_from_state(&self, state: &ClientState) -> EditorValues {
        let code = &state.playground.code;
        let decode_or = |field: &str, encoded: &str, sample: String| -> String {
            if encoded.is_empty() {
                return sample;
            }
            decode_base64(encoded).unwrap_or_else(|e| {
                self.logger
                    .error(format!("Stored {} code could not be decoded: {}", field, e));
                sample
            })
        };

        EditorValues {
            js: decode_or("JS", &code.js_code_base64, default_js_code_sample(&self.ctx.chart_model())),
            css: decode_or("CSS", &code.css_code_base64, default_css_code_sample()),
            html: decode_or("HTML", &code.html_code_base64, default_html_code_sample()),
        }
    }

    /// Rebuild the preview document from the current editor values
    pub(super) fn update_preview(&mut self) -> Result<()> {
        let values = self.editors()?.get_values();
        let document =
            generate_preview_code(self.playground_data()?, &values.js, &values.css, &values.html)?;

        if let Some(server) = &self.preview_server {
            server.set_document(&document);
        }

        let generation = self
            .preview
            .as_mut()
            .ok_or(PlaygroundError::NotInitialized("preview"))?
            .rebuild(document);
        self.logger.debug(format!("Preview rebuilt (generation {})", generation));
        Ok(())
    }
}
