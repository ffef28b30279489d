use crate::spec::transform::TransformSpec;
use crate::spec::values::string_attribute;
use crate::validate::{Validate, ValidationError};
use itertools::sorted;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use vegaplot_common::error::{Result, ResultWithContext, VegaPlotError};

pub const FORMAT_TYPES: [&str; 3] = ["json", "csv", "tsv"];
pub const PARSE_TYPES: [&str; 3] = ["number", "boolean", "date"];

lazy_static! {
    // Characters permitted in an RFC 3986 URI reference
    static ref URI_REFERENCE_RE: Regex =
        Regex::new(r"^(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[0-9A-Fa-f]{2})*$").unwrap();
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSpec {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<DataFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    transform: Vec<String>,
}

impl DataSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a data set from a mapping of attribute names to values.
    /// Unrecognized attributes are ignored.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self> {
        let mut data = Self::default();
        for (key, value) in attributes {
            match key.as_str() {
                "name" => {
                    data.set_name(string_attribute(key, value)?);
                }
                "format" => {
                    data.set_format(value.clone());
                }
                "values" => {
                    data.set_values(value.clone());
                }
                "source" => {
                    data.set_source(value.clone())?;
                }
                "url" => {
                    data.set_url(&string_attribute(key, value)?)?;
                }
                "transform" => {
                    data.set_transform(value.clone())?;
                }
                _ => log::debug!("Ignoring unrecognized data attribute {key:?}"),
            }
        }
        Ok(data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn format(&self) -> Option<&DataFormat> {
        self.format.as_ref()
    }

    /// Store the format descriptor as given. Unsupported format or parse
    /// types, and values that are not descriptors at all, are reported by
    /// [`Validate::validate`] rather than here.
    pub fn set_format<F: Into<DataFormat>>(&mut self, format: F) -> &mut Self {
        self.format = Some(format.into());
        self
    }

    pub fn values(&self) -> Option<&Value> {
        self.values.as_ref()
    }

    pub fn set_values<V: Into<Value>>(&mut self, values: V) -> &mut Self {
        self.values = Some(values.into());
        self
    }

    pub fn set_values_from<T: Serialize + ?Sized>(&mut self, values: &T) -> Result<&mut Self> {
        let values = serde_json::to_value(values)
            .with_context(|| format!("Serializing inline values of data {:?}", self.name))?;
        Ok(self.set_values(values))
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Derive this data set from another one, given by name or by reference
    pub fn set_source<S: Into<DataSourceArg>>(&mut self, source: S) -> Result<&mut Self> {
        let source = match source.into() {
            DataSourceArg::Name(name) => name,
            DataSourceArg::Value(Value::String(name)) => name,
            DataSourceArg::Value(value) => {
                return Err(VegaPlotError::invalid_argument(format!(
                    "Data source must be a data set or a data set name, received {value}"
                )))
            }
        };
        self.source = Some(source);
        Ok(self)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: &str) -> Result<&mut Self> {
        validate_url(url).with_context(|| format!("Setting url of data {:?}", self.name))?;
        self.url = Some(url.to_string());
        Ok(self)
    }

    pub fn transform(&self) -> &[String] {
        &self.transform
    }

    /// Replace the transform list. Accepts a transform name, a transform
    /// definition, or a sequence of either.
    pub fn set_transform<T: Into<TransformArg>>(&mut self, transform: T) -> Result<&mut Self> {
        let mut names = Vec::new();
        transform
            .into()
            .collect_names(&mut names)
            .with_context(|| format!("Setting transform of data {:?}", self.name))?;
        self.transform = names;
        Ok(self)
    }
}

impl Validate for DataSpec {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let Some(format) = &self.format {
            if let Some(problem) = format.problem() {
                log::debug!("Data {:?} has an invalid format: {problem}", self.name);
                errors.push(ValidationError::new(&self.name, "format", "invalid format"));
            }
        }
        errors
    }
}

fn validate_url(url: &str) -> Result<()> {
    // Url::parse percent-encodes characters that are illegal in a URI
    if !URI_REFERENCE_RE.is_match(url) {
        return Err(VegaPlotError::invalid_argument(format!("Invalid URL: {url:?}")));
    }
    match url::Url::parse(url) {
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// The stored `format` attribute of a data set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataFormat {
    Descriptor(DataFormatSpec),
    /// A value that does not have the shape of a format descriptor
    Invalid(Value),
}

impl DataFormat {
    pub fn descriptor(&self) -> Option<&DataFormatSpec> {
        match self {
            DataFormat::Descriptor(format) => Some(format),
            DataFormat::Invalid(_) => None,
        }
    }

    pub fn problem(&self) -> Option<String> {
        match self {
            DataFormat::Descriptor(format) => format.problem(),
            DataFormat::Invalid(value) => Some(format!("not a format descriptor: {value}")),
        }
    }
}

impl From<DataFormatSpec> for DataFormat {
    fn from(v: DataFormatSpec) -> Self {
        DataFormat::Descriptor(v)
    }
}

impl From<&str> for DataFormat {
    fn from(v: &str) -> Self {
        DataFormat::Descriptor(v.into())
    }
}

impl From<String> for DataFormat {
    fn from(v: String) -> Self {
        DataFormat::Descriptor(v.into())
    }
}

impl From<Value> for DataFormat {
    fn from(v: Value) -> Self {
        match v {
            Value::String(type_) => DataFormat::Descriptor(type_.into()),
            v => match serde_json::from_value::<DataFormatSpec>(v.clone()) {
                Ok(format) => DataFormat::Descriptor(format),
                Err(err) => {
                    log::debug!("Keeping unrecognized format descriptor {v}: {err}");
                    DataFormat::Invalid(v)
                }
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFormatSpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<DataFormatParseSpec>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl DataFormatSpec {
    pub fn new<S: Into<String>>(type_: S) -> Self {
        Self {
            type_: Some(type_.into()),
            ..Default::default()
        }
    }

    pub fn json() -> Self {
        Self::new("json")
    }

    pub fn csv() -> Self {
        Self::new("csv")
    }

    pub fn tsv() -> Self {
        Self::new("tsv")
    }

    /// Parse the given field as `parse_type` when the data is loaded
    pub fn with_parse<F: Into<String>, P: Into<String>>(mut self, field: F, parse_type: P) -> Self {
        let mut parse = match self.parse.take() {
            Some(DataFormatParseSpec::Object(parse)) => parse,
            _ => HashMap::new(),
        };
        parse.insert(field.into(), parse_type.into());
        self.parse = Some(DataFormatParseSpec::Object(parse));
        self
    }

    /// Describe the first problem with this descriptor, if any
    pub fn problem(&self) -> Option<String> {
        match self.type_.as_deref() {
            Some(type_) if FORMAT_TYPES.contains(&type_) => {}
            Some(type_) => return Some(format!("unsupported format type {type_:?}")),
            None => return Some("missing format type".to_string()),
        }
        match &self.parse {
            None => None,
            Some(DataFormatParseSpec::Object(parse)) => {
                let invalid: Vec<_> = sorted(
                    parse
                        .iter()
                        .filter(|(_, v)| !PARSE_TYPES.contains(&v.as_str()))
                        .map(|(k, _)| k.as_str()),
                )
                .collect();
                if invalid.is_empty() {
                    None
                } else {
                    Some(format!("unsupported parse type for fields {invalid:?}"))
                }
            }
            Some(DataFormatParseSpec::Auto(parse)) => {
                Some(format!("parse must map fields to types, received {parse:?}"))
            }
        }
    }
}

impl From<&str> for DataFormatSpec {
    fn from(type_: &str) -> Self {
        Self::new(type_)
    }
}

impl From<String> for DataFormatSpec {
    fn from(type_: String) -> Self {
        Self::new(type_)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataFormatParseSpec {
    Auto(String),
    Object(HashMap<String, String>),
}

/// Argument accepted by [`DataSpec::set_source`]
#[derive(Debug, Clone, PartialEq)]
pub enum DataSourceArg {
    Name(String),
    Value(Value),
}

impl From<&str> for DataSourceArg {
    fn from(v: &str) -> Self {
        DataSourceArg::Name(v.to_string())
    }
}

impl From<String> for DataSourceArg {
    fn from(v: String) -> Self {
        DataSourceArg::Name(v)
    }
}

impl From<&DataSpec> for DataSourceArg {
    fn from(v: &DataSpec) -> Self {
        DataSourceArg::Name(v.name.clone())
    }
}

impl From<Value> for DataSourceArg {
    fn from(v: Value) -> Self {
        DataSourceArg::Value(v)
    }
}

/// Argument accepted by [`DataSpec::set_transform`]
#[derive(Debug, Clone, PartialEq)]
pub enum TransformArg {
    Name(String),
    Many(Vec<TransformArg>),
    Value(Value),
}

impl TransformArg {
    fn collect_names(self, names: &mut Vec<String>) -> Result<()> {
        match self {
            TransformArg::Name(name) | TransformArg::Value(Value::String(name)) => {
                names.push(name);
            }
            TransformArg::Many(args) => {
                for arg in args {
                    arg.collect_names(names)?;
                }
            }
            TransformArg::Value(Value::Array(values)) => {
                for value in values {
                    TransformArg::Value(value).collect_names(names)?;
                }
            }
            TransformArg::Value(value) => {
                return Err(VegaPlotError::invalid_argument(format!(
                    "Transform must be a transform or a transform name, received {value}"
                )))
            }
        }
        Ok(())
    }
}

impl From<&str> for TransformArg {
    fn from(v: &str) -> Self {
        TransformArg::Name(v.to_string())
    }
}

impl From<String> for TransformArg {
    fn from(v: String) -> Self {
        TransformArg::Name(v)
    }
}

impl From<&TransformSpec> for TransformArg {
    fn from(v: &TransformSpec) -> Self {
        TransformArg::Name(v.name.clone())
    }
}

impl From<Value> for TransformArg {
    fn from(v: Value) -> Self {
        TransformArg::Value(v)
    }
}

impl<T: Into<TransformArg>> From<Vec<T>> for TransformArg {
    fn from(v: Vec<T>) -> Self {
        TransformArg::Many(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relative_urls_are_accepted() {
        assert!(validate_url("data/cars.json").is_ok());
        assert!(validate_url("../data/unemployment%20rates.tsv").is_ok());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("data/bad%zz.csv").is_err());
        assert!(validate_url("http://exa mple.com/").is_err());
        assert!(validate_url("http://example.com/my data.json").is_err());
        assert!(validate_url("https://example.com/a%20b.json?x=1#top").is_ok());
    }

    #[test]
    fn test_with_parse_accumulates_fields() {
        let format = DataFormatSpec::csv()
            .with_parse("date", "date")
            .with_parse("price", "number");
        assert_eq!(
            serde_json::to_value(&format).unwrap(),
            json!({"type": "csv", "parse": {"date": "date", "price": "number"}})
        );
        assert!(format.problem().is_none());
    }

    #[test]
    fn test_format_values_that_are_not_descriptors() {
        let format = DataFormat::from(json!({"type": "csv", "parse": {"a": 5}}));
        assert!(format.descriptor().is_none());
        assert!(format.problem().is_some());

        let format = DataFormat::from(json!({"type": "tsv"}));
        assert_eq!(format.descriptor(), Some(&DataFormatSpec::tsv()));
        assert!(format.problem().is_none());
    }

    #[test]
    fn test_nested_transform_lists_are_flattened() {
        let mut data = DataSpec::new("table");
        data.set_transform(json!(["a", ["b", "c"]])).unwrap();
        assert_eq!(data.transform(), ["a", "b", "c"]);
    }

    #[test]
    fn test_failed_set_leaves_previous_value() {
        let mut data = DataSpec::new("table");
        data.set_url("data/table.json").unwrap();
        assert!(data.set_url("not a url").is_err());
        assert_eq!(data.url(), Some("data/table.json"));

        data.set_transform(vec!["a", "b"]).unwrap();
        assert!(data.set_transform(json!(["c", 1])).is_err());
        assert_eq!(data.transform(), ["a", "b"]);
    }
}
