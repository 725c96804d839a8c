//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async [`ToolHandler`](super::handler::ToolHandler) lives next door;
//! validation never performs I/O.

use serde_json::Value;
use thiserror::Error;

use super::entities::{InputSchema, PropertySchema, ToolCall, ToolDefinition, json_type_name};
use super::value_objects::ProtocolError;

/// First contract violation found in a call's arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required parameter '{field}' for tool '{tool}'")]
    Missing { tool: String, field: String },

    #[error("Parameter '{field}' for tool '{tool}' must be of type {expected}, got {actual}")]
    WrongType {
        tool: String,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Parameter '{field}' for tool '{tool}' must contain at least {min} item(s)")]
    TooFewItems {
        tool: String,
        field: String,
        min: usize,
    },
}

impl ValidationError {
    /// Path of the offending field (e.g. `actions[1].params`)
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field, .. }
            | ValidationError::WrongType { field, .. }
            | ValidationError::TooFewItems { field, .. } => field,
        }
    }
}

impl From<ValidationError> for ProtocolError {
    fn from(err: ValidationError) -> Self {
        ProtocolError::InvalidParams(err.to_string())
    }
}

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator: Send + Sync {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition)
    -> Result<(), ValidationError>;
}

/// Default implementation of ToolValidator.
///
/// Checks required properties only, in declaration order, and stops at the
/// first violation. Required arrays additionally honour `minItems` and the
/// required fields of their element schema. Optional properties, enum
/// membership and undeclared keys are left alone.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(
        &self,
        call: &ToolCall,
        definition: &ToolDefinition,
    ) -> Result<(), ValidationError> {
        check_object(&definition.name, "", &definition.input_schema, |name| {
            call.get(name)
        })
    }
}

fn check_object<'a>(
    tool: &str,
    prefix: &str,
    schema: &InputSchema,
    lookup: impl Fn(&str) -> Option<&'a Value>,
) -> Result<(), ValidationError> {
    for name in schema.required() {
        let field = format!("{}{}", prefix, name);
        let value = match lookup(name) {
            Some(value) if !value.is_null() => value,
            _ => {
                return Err(ValidationError::Missing {
                    tool: tool.to_string(),
                    field,
                });
            }
        };

        // A required name without a declared property only needs presence
        if let Some(property) = schema.property(name) {
            check_property(tool, &field, property, value)?;
        }
    }
    Ok(())
}

fn check_property(
    tool: &str,
    field: &str,
    property: &PropertySchema,
    value: &Value,
) -> Result<(), ValidationError> {
    if !property.schema_type.matches(value) {
        return Err(ValidationError::WrongType {
            tool: tool.to_string(),
            field: field.to_string(),
            expected: property.schema_type.as_str(),
            actual: json_type_name(value),
        });
    }

    let Some(elements) = value.as_array() else {
        return Ok(());
    };

    if let Some(min) = property.min_items
        && elements.len() < min
    {
        return Err(ValidationError::TooFewItems {
            tool: tool.to_string(),
            field: field.to_string(),
            min,
        });
    }

    if let Some(items) = &property.items {
        for (i, element) in elements.iter().enumerate() {
            let path = format!("{}[{}]", field, i);
            let Some(object) = element.as_object() else {
                return Err(ValidationError::WrongType {
                    tool: tool.to_string(),
                    field: path,
                    expected: "object",
                    actual: json_type_name(element),
                });
            };
            check_object(tool, &format!("{}.", path), items, |name| object.get(name))?;
        }
    }

    Ok(())
}
