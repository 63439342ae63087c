//! JSON rendering via serde.

use tallysheet_core::{RenderError, Renderer, Summary};

/// JSON renderer for scripting consumers. Emits the summary structure as-is:
/// entries in display order, the grand total, and the active rounding mode.
#[derive(Clone, Debug, Default)]
pub struct JsonRenderer {
    /// Pretty-print the output
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printed output
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl Renderer for JsonRenderer {
    type Output = String;

    fn render(&self, summary: &Summary) -> Result<String, RenderError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(summary)
        } else {
            serde_json::to_string(summary)
        };
        result.map_err(|e| RenderError::Format(e.to_string()))
    }
}
