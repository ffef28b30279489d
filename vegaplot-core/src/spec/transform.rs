use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A named transform definition. Data sets refer to transforms by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSpec {
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl TransformSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref()
    }

    pub fn set_type<S: Into<String>>(&mut self, type_: S) -> &mut Self {
        self.type_ = Some(type_.into());
        self
    }

    /// Set an additional transform parameter, e.g. `keys` for a facet transform
    pub fn set_param<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
