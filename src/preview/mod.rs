//! Preview iframe
//!
//! The preview is rebuilt from scratch on every run: a new sandboxed frame
//! replaces the old one and receives a freshly generated document.

mod server;
mod template;

pub use server::PreviewServer;
pub use template::generate_preview_code;

use crate::constants::PREVIEW_IFRAME_SANDBOX;
use crate::utils::escape_html_attr;

/// The sandboxed preview frame
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    sandbox: String,
    document: Option<String>,
    generation: u64,
}

impl Default for PreviewFrame {
    fn default() -> Self {
        Self {
            sandbox: PREVIEW_IFRAME_SANDBOX.to_string(),
            document: None,
            generation: 0,
        }
    }
}

impl PreviewFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sandbox(&self) -> &str {
        &self.sandbox
    }

    /// Document of the current frame, if one was built
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of frames built so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Discard the current frame and build a new one for `document`.
    /// Returns the new frame's generation.
    pub fn rebuild(&mut self, document: String) -> u64 {
        self.generation += 1;
        self.document = Some(document);
        tracing::debug!("Preview frame rebuilt (generation {})", self.generation);
        self.generation
    }

    /// `<iframe>` markup for the current frame, with the document inlined
    pub fn to_iframe_html(&self) -> String {
        format!(
            r#"<iframe frameborder="0" sandbox="{}" srcdoc="{}"></iframe>"#,
            escape_html_attr(&self.sandbox),
            escape_html_attr(self.document.as_deref().unwrap_or_default())
        )
    }
}
