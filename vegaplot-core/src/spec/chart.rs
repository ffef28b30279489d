/*
 * VegaPlot
 * Copyright (C) 2022 VegaFusion Technologies LLC
 *
 * This program is distributed under multiple licenses.
 * Please consult the license documentation provided alongside
 * this program the details of the active license.
 */
use crate::config::SerializeConfig;
use crate::spec::data::DataSpec;
use crate::spec::scale::ScaleSpec;
use crate::spec::visitors::ValidateChartVisitor;
use crate::validate::{Validate, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use vegaplot_common::error::{Result, ResultWithContext, VegaPlotError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema", default = "default_schema")]
    pub schema: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DataSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scales: Vec<ScaleSpec>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            data: Vec::new(),
            scales: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

pub fn default_schema() -> String {
    String::from("https://vega.github.io/schema/vega/v5.json")
}

impl ChartSpec {
    pub fn walk(&self, visitor: &mut dyn ChartVisitor) -> Result<()> {
        visitor.visit_chart(self)?;
        for data in &self.data {
            visitor.visit_data(data)?;
        }
        for scale in &self.scales {
            visitor.visit_scale(scale)?;
        }
        Ok(())
    }

    pub fn add_data(&mut self, data: DataSpec) -> &mut Self {
        self.data.push(data);
        self
    }

    pub fn add_scale(&mut self, scale: ScaleSpec) -> &mut Self {
        self.scales.push(scale);
        self
    }

    pub fn get_data(&self, name: &str) -> Option<&DataSpec> {
        self.data.iter().find(|d| d.name() == name)
    }

    pub fn get_data_mut(&mut self, name: &str) -> Option<&mut DataSpec> {
        self.data.iter_mut().find(|d| d.name() == name)
    }

    pub fn get_scale(&self, name: &str) -> Option<&ScaleSpec> {
        self.scales.iter().find(|s| s.name() == name)
    }

    pub fn get_scale_mut(&mut self, name: &str) -> Option<&mut ScaleSpec> {
        self.scales.iter_mut().find(|s| s.name() == name)
    }

    /// Set a top-level property that has no dedicated field, e.g. `width`
    pub fn set_property<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Convert the chart to a Vega JSON object. With validation enabled, any
    /// validation error fails the conversion.
    pub fn to_json(&self, config: &SerializeConfig) -> Result<Value> {
        if config.validate {
            let errors = self.validate();
            if !errors.is_empty() {
                let messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
                return Err(VegaPlotError::specification(format!(
                    "{} validation error(s): {}",
                    errors.len(),
                    messages.join("; ")
                )));
            }
        }

        let mut value = serde_json::to_value(self).with_context(|| "Serializing chart")?;
        if let (Some(schema), Value::Object(obj)) = (&config.schema, &mut value) {
            obj.insert("$schema".to_string(), Value::String(schema.clone()));
        }
        log::debug!(
            "Serialized chart with {} data set(s) and {} scale(s)",
            self.data.len(),
            self.scales.len()
        );
        Ok(value)
    }

    pub fn to_json_string(&self, config: &SerializeConfig) -> Result<String> {
        let value = self.to_json(config)?;
        let s = if config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(s)
    }
}

impl Validate for ChartSpec {
    fn validate(&self) -> Vec<ValidationError> {
        let mut visitor = ValidateChartVisitor::new();
        // The validation visitor never fails, errors are collected instead
        match self.walk(&mut visitor) {
            Ok(()) => visitor.errors,
            Err(err) => vec![ValidationError::new("", "chart", err.to_string())],
        }
    }
}

pub trait ChartVisitor {
    fn visit_chart(&mut self, _chart: &ChartSpec) -> Result<()> {
        Ok(())
    }
    fn visit_data(&mut self, _data: &DataSpec) -> Result<()> {
        Ok(())
    }
    fn visit_scale(&mut self, _scale: &ScaleSpec) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::data::DataFormatSpec;
    use serde_json::json;

    #[test]
    fn test_schema_defaults_when_missing() {
        let chart: ChartSpec = serde_json::from_str(r#"{"data": [{"name": "table"}]}"#).unwrap();
        assert_eq!(chart.schema, default_schema());
        assert_eq!(chart.get_data("table").map(|d| d.name()), Some("table"));
    }

    #[test]
    fn test_invalid_format_blocks_serialization() {
        let mut data = DataSpec::new("table");
        data.set_format(DataFormatSpec::new("xml"));
        let mut chart = ChartSpec::default();
        chart.add_data(data);

        let err = chart.to_json(&Default::default()).unwrap_err();
        assert!(err.is_specification());

        let config = SerializeConfig {
            validate: false,
            ..Default::default()
        };
        let value = chart.to_json(&config).unwrap();
        assert_eq!(value["data"][0]["format"], json!({"type": "xml"}));
    }

    #[test]
    fn test_schema_override() {
        let mut chart = ChartSpec::default();
        chart.set_property("width", 400);
        let config = SerializeConfig {
            schema: Some("https://vega.github.io/schema/vega/v2.json".to_string()),
            ..Default::default()
        };
        let value = chart.to_json(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "$schema": "https://vega.github.io/schema/vega/v2.json",
                "width": 400
            })
        );
    }
}
