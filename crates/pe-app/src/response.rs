//! Labeled results returned by [`evaluate`](crate::service::evaluate).

use serde::Serialize;

/// A single output or echoed input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Series(Vec<f64>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Series(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Series(v.to_vec())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedValue {
    pub name: String,
    pub value: Value,
    /// Unit label; empty for dimensionless values and text.
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResponse {
    pub operation: String,
    pub outputs: Vec<NamedValue>,
    pub inputs: Vec<NamedValue>,
}

impl OperationResponse {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            outputs: Vec::new(),
            inputs: Vec::new(),
        }
    }

    pub fn output(mut self, name: &str, value: impl Into<Value>, unit: &str) -> Self {
        self.outputs.push(NamedValue {
            name: name.to_string(),
            value: value.into(),
            unit: unit.to_string(),
        });
        self
    }

    pub fn input(mut self, name: &str, value: impl Into<Value>, unit: &str) -> Self {
        self.inputs.push(NamedValue {
            name: name.to_string(),
            value: value.into(),
            unit: unit.to_string(),
        });
        self
    }

    /// Look up an output by name.
    pub fn get(&self, name: &str) -> Option<&NamedValue> {
        self.outputs.iter().find(|v| v.name == name)
    }

    /// Numeric output by name, if present and numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)?.value {
            Value::Number(v) => Some(v),
            _ => None,
        }
    }

    /// Echoed input by name.
    pub fn get_input(&self, name: &str) -> Option<&NamedValue> {
        self.inputs.iter().find(|v| v.name == name)
    }
}
