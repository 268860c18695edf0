//! Muze canvas wrapper

use super::SdkContext;
use crate::comm::ChannelEvent;
use crate::constants::CANVAS_RESIZE_THROTTLE_MS;
use crate::error::Result;
use crate::interactions::muze_context_menu_payload;
use crate::timing::Throttle;
use serde_json::{Value, json};
use std::time::{Duration, Instant};

/// The parts of a Muze canvas the wrapper drives
pub trait MuzeCanvas: Send {
    fn config(&mut self, config: Value);
    fn layers(&mut self, layers: Value);
    fn set_width(&mut self, width: f64);
    fn set_height(&mut self, height: f64);
    fn mount(&mut self, target: &str);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Default canvas config: the context-menu interaction on the plot, both
/// axes and both facet headers, and the legend colors from the host palettes
pub fn default_canvas_config(color_palettes: &[String]) -> Value {
    let context_menu = json!({ "contextMenu": { "enabled": true } });
    json!({
        "interaction": context_menu,
        "axes": {
            "x": { "interaction": context_menu },
            "y": { "interaction": context_menu },
        },
        "rows": { "facets": { "interaction": context_menu } },
        "columns": { "facets": { "interaction": context_menu } },
        "legend": { "color": { "range": color_palettes } },
    })
}

/// Default layers: bars in the first palette color
pub fn default_canvas_layers(color_palettes: &[String]) -> Value {
    json!([{
        "mark": "bar",
        "encoding": { "color": { "value": color_palettes.first() } },
    }])
}

/// A Muze canvas with the playground defaults applied. The shell forwards
/// the canvas events (`animationEnd`, `afterDisposed`), container resizes
/// and context-menu hooks here.
pub struct CanvasWrapper<C: MuzeCanvas> {
    canvas: C,
    ctx: SdkContext,
    render_completed_sent: bool,
    resize: Option<Throttle<ContainerSize>>,
    resize_interval: Duration,
}

impl<C: MuzeCanvas> CanvasWrapper<C> {
    pub fn new(mut canvas: C, ctx: SdkContext) -> Self {
        let palettes = &ctx.init_data.ts_system_info.color_palettes;
        canvas.config(default_canvas_config(palettes));
        canvas.layers(default_canvas_layers(palettes));

        Self {
            canvas,
            ctx,
            render_completed_sent: false,
            resize: None,
            resize_interval: Duration::from_millis(CANVAS_RESIZE_THROTTLE_MS),
        }
    }

    pub fn with_resize_interval(mut self, interval: Duration) -> Self {
        self.resize_interval = interval;
        self
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Mount the canvas. When the mount container exists the canvas follows
    /// its size until the canvas is disposed.
    pub fn mount(&mut self, target: &str, container: Option<ContainerSize>, now: Instant) {
        if !target.is_empty()
            && let Some(size) = container
        {
            self.resize = Some(Throttle::new(self.resize_interval));
            self.on_container_resize(size, now);
        }
        self.canvas.mount(target);
    }

    /// Whether container sizes are being followed
    pub fn is_tracking_container(&self) -> bool {
        self.resize.is_some()
    }

    pub fn on_container_resize(&mut self, size: ContainerSize, now: Instant) {
        let ready = match self.resize.as_mut() {
            Some(throttle) => throttle.call(size, now),
            None => return,
        };
        if let Some(size) = ready {
            self.apply_size(size);
        }
    }

    /// Apply a trailing resize once its interval is over
    pub fn poll(&mut self, now: Instant) {
        if let Some(size) = self.resize.as_mut().and_then(|t| t.poll(now)) {
            self.apply_size(size);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.resize.as_ref().and_then(Throttle::next_deadline)
    }

    fn apply_size(&mut self, size: ContainerSize) {
        self.ctx
            .logger
            .debug(format!("Canvas size {}x{}", size.width, size.height));
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    /// First animation end tells the host page the chart is rendered
    pub fn on_animation_end(&mut self) -> Result<()> {
        if self.render_completed_sent {
            return Ok(());
        }
        self.render_completed_sent = true;
        self.ctx.emit_to_parent(&ChannelEvent::RenderCompleted)
    }

    /// Stop following the container
    pub fn on_after_disposed(&mut self) {
        self.resize = None;
    }

    /// Context-menu hook: forward supported interactions to the host page
    pub fn on_context_menu(&self, muze_payload: &Value) -> Result<()> {
        match muze_context_menu_payload(muze_payload, &self.ctx.init_data.schema) {
            Some(payload) => self
                .ctx
                .emit_to_parent(&ChannelEvent::ShowContextMenu(payload)),
            None => Ok(()),
        }
    }
}
