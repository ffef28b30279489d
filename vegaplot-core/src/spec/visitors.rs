use crate::error::Result;
use crate::spec::chart::{ChartSpec, ChartVisitor};
use crate::spec::data::DataSpec;
use crate::spec::scale::ScaleSpec;
use crate::spec::values::ScaleValueSpec;
use crate::validate::{Validate, ValidationError};
use std::collections::HashSet;

/// Collect the validation errors of every data set and scale in a chart.
///
/// Names are not enforced across objects, so a data source or a scale field
/// reference that names an unknown data set is only logged.
#[derive(Clone, Debug, Default)]
pub struct ValidateChartVisitor {
    pub errors: Vec<ValidationError>,
    data_names: HashSet<String>,
}

impl ValidateChartVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_data_name(&self, name: &str, referenced_by: &str) {
        if !self.data_names.contains(name) {
            log::warn!("{referenced_by} references unknown data set {name:?}");
        }
    }
}

impl ChartVisitor for ValidateChartVisitor {
    fn visit_chart(&mut self, chart: &ChartSpec) -> Result<()> {
        self.data_names = chart.data.iter().map(|d| d.name().to_string()).collect();
        Ok(())
    }

    fn visit_data(&mut self, data: &DataSpec) -> Result<()> {
        if let Some(source) = data.source() {
            self.check_data_name(source, &format!("Data {:?}", data.name()));
        }
        self.errors.extend(data.validate());
        Ok(())
    }

    fn visit_scale(&mut self, scale: &ScaleSpec) -> Result<()> {
        let referenced_by = format!("Scale {:?}", scale.name());
        for value in [
            scale.domain(),
            scale.domain_min(),
            scale.domain_max(),
            scale.range(),
            scale.range_min(),
            scale.range_max(),
        ]
        .into_iter()
        .flatten()
        {
            if let ScaleValueSpec::FieldReference(data_ref) = value {
                self.check_data_name(data_ref.data(), &referenced_by);
            }
        }
        self.errors.extend(scale.validate());
        Ok(())
    }
}
