//! Command registry: name → handler, populated once and read-only afterwards.

use super::errors::{DispatchError, RegistryError};
use crate::ports::outbound::KeywordHandler;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One positional parameter of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    /// Reject `""` during validation
    pub non_empty: bool,
}

impl ParamSpec {
    /// String parameter, empty allowed
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            non_empty: false,
        }
    }

    /// String parameter that must carry at least one character
    pub const fn non_empty_text(name: &'static str) -> Self {
        Self {
            name,
            non_empty: true,
        }
    }
}

/// Command metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
    pub description: &'static str,
}

impl CommandSpec {
    pub const fn new(
        name: &'static str,
        params: &'static [ParamSpec],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            params,
            description,
        }
    }

    pub const fn arity(&self) -> usize {
        self.params.len()
    }

    /// Validate and decompose positional arguments into strings.
    ///
    /// Runs before any handler; arity, type and emptiness mismatches all map
    /// to [`DispatchError::MalformedArguments`].
    pub fn decompose(&self, args: &[Value]) -> Result<Vec<String>, DispatchError> {
        if args.len() != self.arity() {
            return Err(DispatchError::malformed(
                self.name,
                format!("expected {} arguments, got {}", self.arity(), args.len()),
            ));
        }

        self.params
            .iter()
            .zip(args)
            .enumerate()
            .map(|(index, (param, arg))| {
                let Value::String(text) = arg else {
                    return Err(DispatchError::malformed(
                        self.name,
                        format!(
                            "argument {} (`{}`) must be a string, got {}",
                            index,
                            param.name,
                            json_type_name(arg)
                        ),
                    ));
                };

                if param.non_empty && text.is_empty() {
                    return Err(DispatchError::malformed(
                        self.name,
                        format!("argument {} (`{}`) must not be empty", index, param.name),
                    ));
                }

                Ok(text.clone())
            })
            .collect()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A registered command: metadata plus its handler
#[derive(Clone)]
pub struct RegisteredCommand {
    pub spec: CommandSpec,
    pub handler: Arc<dyn KeywordHandler>,
}

impl fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Immutable command table with O(1) lookup and stable listing order
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    order: Vec<&'static str>,
    commands: HashMap<&'static str, RegisteredCommand>,
}

impl CommandRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Names in registration order
    pub fn names(&self) -> &[&'static str] {
        &self.order
    }

    pub fn lookup(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Startup-time builder; the only way to populate a registry
#[derive(Default)]
pub struct RegistryBuilder {
    registry: CommandRegistry,
}

impl RegistryBuilder {
    /// Add a command. Names must be unique.
    pub fn register(
        mut self,
        spec: CommandSpec,
        handler: Arc<dyn KeywordHandler>,
    ) -> Result<Self, RegistryError> {
        if self.registry.contains(spec.name) {
            return Err(RegistryError::DuplicateCommand(spec.name));
        }

        self.registry.order.push(spec.name);
        self.registry
            .commands
            .insert(spec.name, RegisteredCommand { spec, handler });
        Ok(self)
    }

    pub fn build(self) -> CommandRegistry {
        self.registry
    }
}
