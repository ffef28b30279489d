use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use vegaplot_common::error::{Result, VegaPlotError};

/// Points at a single field of a named data set
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataRef {
    data: String,
    field: String,
}

impl DataRef {
    pub fn new<D: Into<String>, F: Into<String>>(data: D, field: F) -> Self {
        Self {
            data: data.into(),
            field: field.into(),
        }
    }

    /// Build a reference from a dotted `"table.field"` path.
    ///
    /// A bare table name, or a path whose field is `index`, refers to the
    /// index field of the table. Any other field is nested under `data.`,
    /// which is where Vega stores the raw tuple values.
    pub fn from_path(path: &str) -> Self {
        match path.split_once('.') {
            None => Self::new(path, "index"),
            Some((data, "index")) => Self::new(data, "index"),
            Some((data, field)) => Self::new(data, format!("data.{field}")),
        }
    }

    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self> {
        let mut data_ref = Self::default();
        for (key, value) in attributes {
            match key.as_str() {
                "data" => {
                    data_ref.set_data(string_attribute(key, value)?);
                }
                "field" => {
                    data_ref.set_field(string_attribute(key, value)?);
                }
                _ => log::debug!("Ignoring unrecognized data reference attribute {key:?}"),
            }
        }
        Ok(data_ref)
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_data<S: Into<String>>(&mut self, data: S) -> &mut Self {
        self.data = data.into();
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn set_field<S: Into<String>>(&mut self, field: S) -> &mut Self {
        self.field = field.into();
        self
    }
}

/// Range values understood directly by the Vega renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeLiteral {
    Width,
    Height,
    Shapes,
    Category10,
    Category20,
}

impl RangeLiteral {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeLiteral::Width => "width",
            RangeLiteral::Height => "height",
            RangeLiteral::Shapes => "shapes",
            RangeLiteral::Category10 => "category10",
            RangeLiteral::Category20 => "category20",
        }
    }
}

impl Display for RangeLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic shorthands accepted by `ScaleSpec::set_range`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSymbol {
    Width,
    Height,
    Shapes,
    Colors,
    MoreColors,
}

pub const RANGE_SYMBOLS: [RangeSymbol; 5] = [
    RangeSymbol::Width,
    RangeSymbol::Height,
    RangeSymbol::Shapes,
    RangeSymbol::Colors,
    RangeSymbol::MoreColors,
];

impl RangeSymbol {
    pub fn name(&self) -> &'static str {
        match self {
            RangeSymbol::Width => "width",
            RangeSymbol::Height => "height",
            RangeSymbol::Shapes => "shapes",
            RangeSymbol::Colors => "colors",
            RangeSymbol::MoreColors => "more_colors",
        }
    }

    /// The value stored on the scale for this symbol
    pub fn literal(&self) -> RangeLiteral {
        match self {
            RangeSymbol::Width => RangeLiteral::Width,
            RangeSymbol::Height => RangeLiteral::Height,
            RangeSymbol::Shapes => RangeLiteral::Shapes,
            RangeSymbol::Colors => RangeLiteral::Category10,
            RangeSymbol::MoreColors => RangeLiteral::Category20,
        }
    }
}

impl FromStr for RangeSymbol {
    type Err = VegaPlotError;

    fn from_str(s: &str) -> Result<Self> {
        RANGE_SYMBOLS
            .iter()
            .find(|sym| sym.name() == s)
            .copied()
            .ok_or_else(|| {
                VegaPlotError::invalid_argument(format!("Unrecognized range literal: {s:?}"))
            })
    }
}

/// The stored value of a scale domain, range, or one of their bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleValueSpec {
    // Before FieldReference, which would also accept a two element sequence
    Array(Vec<Value>),
    FieldReference(DataRef),
    Literal(RangeLiteral),
    Value(Value),
}

impl ScaleValueSpec {
    pub fn as_field_reference(&self) -> Option<&DataRef> {
        match self {
            ScaleValueSpec::FieldReference(data_ref) => Some(data_ref),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<RangeLiteral> {
        match self {
            ScaleValueSpec::Literal(literal) => Some(*literal),
            _ => None,
        }
    }
}

/// Argument accepted by the domain and range setters of a scale.
///
/// Strings are interpreted by the setter (field path for domains, range
/// literal for ranges); every other variant is stored as given.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleArg {
    Text(String),
    Symbol(RangeSymbol),
    Reference(DataRef),
    Array(Vec<Value>),
    Value(Value),
}

impl From<&str> for ScaleArg {
    fn from(v: &str) -> Self {
        ScaleArg::Text(v.to_string())
    }
}

impl From<String> for ScaleArg {
    fn from(v: String) -> Self {
        ScaleArg::Text(v)
    }
}

impl From<RangeSymbol> for ScaleArg {
    fn from(v: RangeSymbol) -> Self {
        ScaleArg::Symbol(v)
    }
}

impl From<DataRef> for ScaleArg {
    fn from(v: DataRef) -> Self {
        ScaleArg::Reference(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for ScaleArg {
    fn from(v: Vec<T>) -> Self {
        ScaleArg::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for ScaleArg {
    fn from(v: [T; N]) -> Self {
        ScaleArg::Array(v.into_iter().map(Into::into).collect())
    }
}

macro_rules! scale_arg_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ScaleArg {
                fn from(v: $ty) -> Self {
                    ScaleArg::Value(Value::from(v))
                }
            }
        )*
    };
}

scale_arg_from_scalar!(f64, f32, i64, i32, u64, u32, bool);

impl From<Value> for ScaleArg {
    fn from(v: Value) -> Self {
        let is_reference = matches!(
            &v,
            Value::Object(obj) if obj.contains_key("data") && obj.contains_key("field")
        );
        if is_reference {
            if let Ok(data_ref) = serde_json::from_value::<DataRef>(v.clone()) {
                return ScaleArg::Reference(data_ref);
            }
        }
        match v {
            Value::String(s) => ScaleArg::Text(s),
            Value::Array(values) => ScaleArg::Array(values),
            v => ScaleArg::Value(v),
        }
    }
}

pub(crate) fn string_attribute(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(VegaPlotError::invalid_argument(format!(
            "Expected string for attribute {key:?}, received {value}"
        ))),
    }
}

pub(crate) fn bool_attribute(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        VegaPlotError::invalid_argument(format!(
            "Expected boolean for attribute {key:?}, received {value}"
        ))
    })
}

pub(crate) fn number_attribute(key: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| {
            VegaPlotError::invalid_argument(format!("Attribute {key:?} is not a finite number"))
        }),
        Value::String(s) => Ok(s.trim().parse::<f64>()?),
        _ => Err(VegaPlotError::invalid_argument(format!(
            "Expected number for attribute {key:?}, received {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_path_rules() {
        assert_eq!(DataRef::from_path("table.x"), DataRef::new("table", "data.x"));
        assert_eq!(DataRef::from_path("table"), DataRef::new("table", "index"));
        assert_eq!(DataRef::from_path("table.index"), DataRef::new("table", "index"));
        // Only the first dot separates the table from the field
        assert_eq!(
            DataRef::from_path("table.a.b"),
            DataRef::new("table", "data.a.b")
        );
    }

    #[test]
    fn test_range_symbol_lookup() {
        let sym: RangeSymbol = "more_colors".parse().unwrap();
        assert_eq!(sym.literal(), RangeLiteral::Category20);
        assert!("category10".parse::<RangeSymbol>().is_err());
    }

    #[test]
    fn test_scale_value_serializes_literal_as_string() {
        let value = ScaleValueSpec::Literal(RangeLiteral::Category10);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("category10"));

        let parsed: ScaleValueSpec = serde_json::from_value(json!("width")).unwrap();
        assert_eq!(parsed, ScaleValueSpec::Literal(RangeLiteral::Width));

        let parsed: ScaleValueSpec =
            serde_json::from_value(json!({"data": "table", "field": "data.x"})).unwrap();
        assert_eq!(
            parsed.as_field_reference(),
            Some(&DataRef::new("table", "data.x"))
        );
    }

    #[test]
    fn test_string_array_is_not_a_field_reference() {
        let parsed: ScaleValueSpec = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(parsed, ScaleValueSpec::Array(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn test_scale_arg_from_json_value() {
        assert_eq!(ScaleArg::from(json!("t.x")), ScaleArg::Text("t.x".to_string()));
        assert_eq!(
            ScaleArg::from(json!({"data": "t", "field": "index"})),
            ScaleArg::Reference(DataRef::new("t", "index"))
        );
        assert_eq!(ScaleArg::from(json!(3)), ScaleArg::Value(json!(3)));
    }

    #[test]
    fn test_data_ref_from_attributes() {
        let attrs = json!({"data": "table", "field": "data.y", "other": 1});
        let data_ref = DataRef::from_attributes(attrs.as_object().unwrap()).unwrap();
        assert_eq!(data_ref, DataRef::new("table", "data.y"));

        let mut data_ref = DataRef::from_path("table");
        data_ref.set_field("data.z");
        assert_eq!(data_ref.data(), "table");
        assert_eq!(data_ref.field(), "data.z");

        let attrs = json!({"data": 12});
        let err = DataRef::from_attributes(attrs.as_object().unwrap()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
