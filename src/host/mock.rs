//! In-memory host used by tests and headless drivers.

use super::{ChartContext, ChartToTsEvent, EventHandler, TsToChartEvent};
use crate::error::{PlaygroundError, Result};
use crate::types::{AppConfig, ChartModel};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

type SharedHandler = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// Host double: records every emitted event and persists visual props the
/// way the real host does
#[derive(Default)]
pub struct InMemoryChartContext {
    model: Mutex<ChartModel>,
    app_config: Mutex<AppConfig>,
    events: Mutex<Vec<ChartToTsEvent>>,
    handlers: Mutex<HashMap<TsToChartEvent, Vec<SharedHandler>>>,
    rejected_event: Mutex<Option<&'static str>>,
}

impl InMemoryChartContext {
    pub fn new(model: ChartModel, app_config: AppConfig) -> Self {
        Self {
            model: Mutex::new(model),
            app_config: Mutex::new(app_config),
            ..Default::default()
        }
    }

    pub fn set_chart_model(&self, model: ChartModel) {
        *self.model.lock() = model;
    }

    pub fn set_app_config(&self, app_config: AppConfig) {
        *self.app_config.lock() = app_config;
    }

    pub fn set_visual_props(&self, visual_props: Value) {
        self.model.lock().visual_props = Some(visual_props);
    }

    /// Make every future emit of the named event fail
    pub fn reject_event(&self, name: &'static str) {
        *self.rejected_event.lock() = Some(name);
    }

    /// Events emitted so far, oldest first
    pub fn events(&self) -> Vec<ChartToTsEvent> {
        self.events.lock().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(ChartToTsEvent::name).collect()
    }

    pub fn clear_events(&self) {
        self.events.lock().clear();
    }

    /// Invoke the handlers registered for `event`, returning the last result
    pub fn trigger(&self, event: TsToChartEvent, payload: &Value) -> Option<Value> {
        let handlers = self.handlers.lock().get(&event).cloned().unwrap_or_default();
        handlers.iter().map(|handler| handler(payload)).last()
    }
}

#[async_trait]
impl ChartContext for InMemoryChartContext {
    fn chart_model(&self) -> ChartModel {
        self.model.lock().clone()
    }

    fn app_config(&self) -> AppConfig {
        self.app_config.lock().clone()
    }

    fn on(&self, event: TsToChartEvent, handler: EventHandler) {
        self.handlers
            .lock()
            .entry(event)
            .or_default()
            .push(Arc::from(handler));
    }

    async fn emit_event(&self, event: ChartToTsEvent) -> Result<()> {
        if *self.rejected_event.lock() == Some(event.name()) {
            return Err(PlaygroundError::Host(format!("{} rejected", event.name())));
        }

        if let ChartToTsEvent::UpdateVisualProps { visual_props } = &event {
            self.model.lock().visual_props = Some(visual_props.clone());
        }

        tracing::trace!("Host received {}", event.name());
        self.events.lock().push(event);
        Ok(())
    }
}
