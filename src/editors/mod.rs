//! JS/CSS/HTML code editors
//!
//! `CodeEditors` holds the three buffers and decides which content changes
//! count as user edits. The editor widgets themselves live in the shell; it
//! forwards every content change here.

use crate::timing::Debouncer;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeLanguage {
    Js,
    Css,
    Html,
}

/// Contents of all three editors
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorValues {
    pub js: String,
    pub css: String,
    pub html: String,
}

#[derive(Clone, Debug, Default)]
struct EditorBuffer {
    text: String,
    programmatic: bool,
}

impl EditorBuffer {
    /// Apply a content change; returns whether it was a user edit
    fn content_changed(&mut self, text: String) -> bool {
        self.text = text;
        if self.programmatic {
            self.programmatic = false;
            return false;
        }
        true
    }
}

/// The three editor buffers plus the debounced change notification
#[derive(Clone, Debug)]
pub struct CodeEditors {
    js: EditorBuffer,
    css: EditorBuffer,
    html: EditorBuffer,
    change_debounce: Debouncer,
}

impl CodeEditors {
    pub fn new(debounce: Duration) -> Self {
        Self {
            js: EditorBuffer::default(),
            css: EditorBuffer::default(),
            html: EditorBuffer::default(),
            change_debounce: Debouncer::new(debounce),
        }
    }

    fn buffer_mut(&mut self, lang: CodeLanguage) -> &mut EditorBuffer {
        match lang {
            CodeLanguage::Js => &mut self.js,
            CodeLanguage::Css => &mut self.css,
            CodeLanguage::Html => &mut self.html,
        }
    }

    pub fn value(&self, lang: CodeLanguage) -> &str {
        match lang {
            CodeLanguage::Js => &self.js.text,
            CodeLanguage::Css => &self.css.text,
            CodeLanguage::Html => &self.html.text,
        }
    }

    pub fn get_values(&self) -> EditorValues {
        EditorValues {
            js: self.js.text.clone(),
            css: self.css.text.clone(),
            html: self.html.text.clone(),
        }
    }

    /// Replace all buffers. The widget echo of each replacement is not
    /// treated as a user edit.
    pub fn set_values(&mut self, values: EditorValues) {
        let EditorValues { js, css, html } = values;
        for (lang, text) in [(CodeLanguage::Js, js), (CodeLanguage::Css, css), (CodeLanguage::Html, html)] {
            let buffer = self.buffer_mut(lang);
            buffer.text = text;
            buffer.programmatic = true;
        }
    }

    /// Content change reported by an editor widget. User edits arm the
    /// change debounce; returns whether this was one.
    pub fn content_changed(&mut self, lang: CodeLanguage, text: impl Into<String>, now: Instant) -> bool {
        let is_user_edit = self.buffer_mut(lang).content_changed(text.into());
        if is_user_edit {
            self.change_debounce.call(now);
        }
        is_user_edit
    }

    /// Whether the debounced change callback is due
    pub fn poll_change(&mut self, now: Instant) -> bool {
        self.change_debounce.poll(now)
    }

    pub fn has_pending_change(&self) -> bool {
        self.change_debounce.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.change_debounce.next_deadline()
    }

    /// Drop a pending change notification, e.g. when the code is stored
    /// by an explicit run
    pub fn cancel_pending_change(&mut self) {
        self.change_debounce.cancel();
    }
}
