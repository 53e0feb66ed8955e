//! Typed partial-update engine.
//!
//! Accepts a JSON Patch style document (`[{ "op", "path", "value" }]`) and
//! applies it to a mutable field view implementing [`PatchTarget`]. Only
//! single-segment paths naming a top-level field are supported; `add` and
//! `replace` both assign, `remove` resets the field to its empty value and
//! `test` asserts equality.
//!
//! The caller owns the target. Nothing here touches storage: a handler clones
//! the current record into a view, applies the patch, validates the view and
//! only then persists it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::CoreError;
use crate::validation::FieldError;

/// Patch operation kind.
///
/// Serialized lowercase. Deserialization accepts any casing (`"Replace"`,
/// `"REMOVE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
    Test,
}

const OP_NAMES: &[&str] = &["add", "replace", "remove", "test"];

impl FromStr for PatchOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [PatchOp::Add, PatchOp::Replace, PatchOp::Remove, PatchOp::Test]
            .into_iter()
            .find(|op| op.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported patch operation '{s}'"))
    }
}

impl<'de> Deserialize<'de> for PatchOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse()
            .map_err(|_| serde::de::Error::unknown_variant(&name, OP_NAMES))
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Remove => "remove",
            PatchOp::Test => "test",
        };
        f.write_str(name)
    }
}

/// One operation as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatchOperation {
    pub op: PatchOp,
    /// Field path, e.g. `/title`.
    #[schema(example = "/duration")]
    pub path: String,
    /// New value for `add`/`replace`, expected value for `test`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
        }
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Test,
            path: path.into(),
            value: Some(value.into()),
        }
    }
}

/// A mutable field view that patch operations can address.
pub trait PatchTarget {
    /// Addressable field. `Display` yields the name used in error reports.
    type Field: Copy + fmt::Display;

    /// Resolve a field name (path without the leading `/`).
    fn resolve_field(name: &str) -> Option<Self::Field>;

    /// Current value of a field as JSON, for `test`.
    fn field_value(&self, field: Self::Field) -> Value;

    /// Assign a JSON value, rejecting values of the wrong type.
    fn set_field(&mut self, field: Self::Field, value: &Value) -> Result<(), String>;

    /// Reset a field to its empty value.
    fn reset_field(&mut self, field: Self::Field);
}

/// Apply `operations` to `target` in order.
///
/// Every operation is attempted so the caller gets the full list of failures.
/// On error the target may be partially modified; callers must discard it.
pub fn apply_patch<T: PatchTarget>(
    target: &mut T,
    operations: &[PatchOperation],
) -> Result<(), CoreError> {
    let mut errors = Vec::new();

    for operation in operations {
        if let Err(err) = apply_one(target, operation) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors))
    }
}

fn apply_one<T: PatchTarget>(target: &mut T, operation: &PatchOperation) -> Result<(), FieldError> {
    let field = resolve_path::<T>(&operation.path)?;
    let name = field.to_string();

    match operation.op {
        PatchOp::Add | PatchOp::Replace => {
            let value = require_value(operation, &name)?;
            target
                .set_field(field, value)
                .map_err(|msg| FieldError::new(name, msg))
        }
        PatchOp::Remove => {
            target.reset_field(field);
            Ok(())
        }
        PatchOp::Test => {
            let expected = require_value(operation, &name)?;
            let actual = target.field_value(field);
            if &actual == expected {
                Ok(())
            } else {
                Err(FieldError::new(
                    name,
                    format!("test failed: expected {expected}, found {actual}"),
                ))
            }
        }
    }
}

fn resolve_path<T: PatchTarget>(path: &str) -> Result<T::Field, FieldError> {
    let name = path.strip_prefix('/').ok_or_else(|| {
        FieldError::new(path, format!("path '{path}' must start with '/'"))
    })?;

    if name.is_empty() || name.contains('/') {
        return Err(FieldError::new(
            path,
            format!("path '{path}' does not name a single field"),
        ));
    }

    T::resolve_field(name)
        .ok_or_else(|| FieldError::new(name, format!("unknown field '{name}'")))
}

fn require_value<'a>(operation: &'a PatchOperation, field: &str) -> Result<&'a Value, FieldError> {
    operation.value.as_ref().ok_or_else(|| {
        FieldError::new(
            field,
            format!("'{}' operation requires a value", operation.op),
        )
    })
}
