//! Output formatter trait

use penumbra_domain::config::OutputFormat;
use penumbra_domain::tool::ToolDefinition;

/// Trait for rendering the tool catalog
pub trait CatalogFormatter {
    /// Human-readable listing
    fn format_text(&self, tools: &[&ToolDefinition]) -> String;

    /// Same document `tools/list` returns
    fn format_json(&self, tools: &[&ToolDefinition]) -> String;

    fn format(&self, tools: &[&ToolDefinition], format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_text(tools),
            OutputFormat::Json => self.format_json(tools),
        }
    }
}
