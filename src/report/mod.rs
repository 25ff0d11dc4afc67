pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::config::OutputFormat;
use crate::model::{DashboardReport, RenderError};

/// Turns a computed report into something a person or a chart tool can read.
pub trait Renderer {
    fn render(&self, report: &DashboardReport) -> Result<String, RenderError>;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
