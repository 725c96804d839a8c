//! Console output formatter for the tool catalog

use crate::output::formatter::CatalogFormatter;
use colored::Colorize;
use penumbra_domain::tool::{PropertySchema, ToolDefinition};
use serde_json::json;

/// Formats the catalog for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the catalog as an annotated listing
    pub fn format_text(tools: &[&ToolDefinition]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Penumbra Ledger Tools ({})", tools.len())));
        output.push('\n');

        for tool in tools {
            output.push_str(&format!(
                "\n{}\n  {}\n",
                tool.name.yellow().bold(),
                tool.description
            ));

            let mut properties = tool.input_schema.properties().peekable();
            if properties.peek().is_none() {
                output.push_str(&format!("  {}\n", "(no arguments)".dimmed()));
                continue;
            }

            for (name, schema) in properties {
                let required = tool.input_schema.is_required(name);
                output.push_str(&format!(
                    "    {} {}\n",
                    if required {
                        name.cyan().bold()
                    } else {
                        name.cyan()
                    },
                    Self::describe_property(schema, required).dimmed()
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as the `tools/list` result document
    pub fn format_json(tools: &[&ToolDefinition]) -> String {
        serde_json::to_string_pretty(&json!({ "tools": tools }))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn describe_property(schema: &PropertySchema, required: bool) -> String {
        let mut parts = vec![schema.schema_type.as_str().to_string()];
        if required {
            parts.push("required".to_string());
        }
        if let Some(values) = &schema.allowed_values {
            parts.push(format!("one of {}", values.join("|")));
        }
        if let Some(default) = &schema.default {
            parts.push(format!("default {}", default));
        }
        if let Some(min) = schema.min_items {
            parts.push(format!("min {} items", min));
        }

        match &schema.description {
            Some(description) => format!("({}) {}", parts.join(", "), description),
            None => format!("({})", parts.join(", ")),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl CatalogFormatter for ConsoleFormatter {
    fn format_text(&self, tools: &[&ToolDefinition]) -> String {
        Self::format_text(tools)
    }

    fn format_json(&self, tools: &[&ToolDefinition]) -> String {
        Self::format_json(tools)
    }
}
