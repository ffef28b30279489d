/*
 * VegaPlot
 * Copyright (C) 2022 VegaFusion Technologies LLC
 *
 * This program is distributed under multiple licenses.
 * Please consult the license documentation provided alongside
 * this program the details of the active license.
 */
use crate::spec::values::{
    bool_attribute, number_attribute, string_attribute, DataRef, RangeSymbol, ScaleArg,
    ScaleValueSpec, RANGE_SYMBOLS,
};
use crate::validate::{Validate, ValidationError};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use vegaplot_common::error::{Result, ResultWithContext, VegaPlotError};

lazy_static! {
    /// Convenience method names and the canonical setter call each one stands for
    static ref SCALE_METHODS: HashMap<String, ScaleMethod> = {
        let mut methods = HashMap::new();
        for sym in RANGE_SYMBOLS {
            methods.insert(format!("to_{}", sym.name()), ScaleMethod::Range(sym));
        }
        for interval in TIME_INTERVALS {
            methods.insert(format!("in_{}s", interval.name()), ScaleMethod::NiceInterval(interval));
        }
        for (name, method) in [
            ("reverse", ScaleMethod::Reverse),
            ("round", ScaleMethod::Round),
            ("points", ScaleMethod::Points),
            ("as_points", ScaleMethod::Points),
            ("bands", ScaleMethod::Bands),
            ("as_bands", ScaleMethod::Bands),
            ("clamp", ScaleMethod::Clamp),
            ("sort", ScaleMethod::Sort),
            ("zero", ScaleMethod::Zero),
            ("include_zero", ScaleMethod::Zero),
            ("nice", ScaleMethod::Nice),
            ("nicely", ScaleMethod::Nice),
        ] {
            methods.insert(name.to_string(), method);
        }
        methods
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleTypeSpec {
    Linear,
    Log,
    Pow,
    Sqrt,
    Quantile,
    Quantize,
    Threshold,
    Ordinal,
    Time,
    Utc,
}

impl ScaleTypeSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleTypeSpec::Linear => "linear",
            ScaleTypeSpec::Log => "log",
            ScaleTypeSpec::Pow => "pow",
            ScaleTypeSpec::Sqrt => "sqrt",
            ScaleTypeSpec::Quantile => "quantile",
            ScaleTypeSpec::Quantize => "quantize",
            ScaleTypeSpec::Threshold => "threshold",
            ScaleTypeSpec::Ordinal => "ordinal",
            ScaleTypeSpec::Time => "time",
            ScaleTypeSpec::Utc => "utc",
        }
    }

    /// Time and utc scales take a time interval for `nice` instead of a flag
    pub fn is_temporal(&self) -> bool {
        matches!(self, ScaleTypeSpec::Time | ScaleTypeSpec::Utc)
    }
}

impl Display for ScaleTypeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleTypeSpec {
    type Err = VegaPlotError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Ok(match normalized.as_str() {
            "linear" => ScaleTypeSpec::Linear,
            "log" => ScaleTypeSpec::Log,
            "pow" => ScaleTypeSpec::Pow,
            "sqrt" => ScaleTypeSpec::Sqrt,
            "quantile" => ScaleTypeSpec::Quantile,
            "quantize" => ScaleTypeSpec::Quantize,
            "threshold" => ScaleTypeSpec::Threshold,
            "ordinal" => ScaleTypeSpec::Ordinal,
            "time" => ScaleTypeSpec::Time,
            "utc" => ScaleTypeSpec::Utc,
            _ => {
                return Err(VegaPlotError::invalid_argument(format!(
                    "Unrecognized scale type: {s:?}"
                )))
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInterval {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

pub const TIME_INTERVALS: [TimeInterval; 7] = [
    TimeInterval::Second,
    TimeInterval::Minute,
    TimeInterval::Hour,
    TimeInterval::Day,
    TimeInterval::Week,
    TimeInterval::Month,
    TimeInterval::Year,
];

impl TimeInterval {
    pub fn name(&self) -> &'static str {
        match self {
            TimeInterval::Second => "second",
            TimeInterval::Minute => "minute",
            TimeInterval::Hour => "hour",
            TimeInterval::Day => "day",
            TimeInterval::Week => "week",
            TimeInterval::Month => "month",
            TimeInterval::Year => "year",
        }
    }
}

impl FromStr for TimeInterval {
    type Err = VegaPlotError;

    fn from_str(s: &str) -> Result<Self> {
        TIME_INTERVALS
            .iter()
            .find(|interval| interval.name() == s)
            .copied()
            .ok_or_else(|| VegaPlotError::invalid_argument(format!("Unrecognized time interval: {s:?}")))
    }
}

/// Stored value of the `nice` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NiceSpec {
    Flag(bool),
    Interval(TimeInterval),
}

/// The `nice` attribute as seen through the scale's type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleNice {
    /// Non-temporal scales: nice is a boolean flag
    Flag(Option<bool>),
    /// Time and utc scales: nice is a time interval
    Interval(Option<TimeInterval>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMethod {
    Range(RangeSymbol),
    NiceInterval(TimeInterval),
    Reverse,
    Round,
    Points,
    Bands,
    Clamp,
    Sort,
    Zero,
    Nice,
}

impl ScaleMethod {
    pub fn lookup(name: &str) -> Option<ScaleMethod> {
        SCALE_METHODS.get(name).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleSpec {
    name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    type_: Option<ScaleTypeSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<ScaleValueSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    domain_min: Option<ScaleValueSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    domain_max: Option<ScaleValueSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<ScaleValueSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    range_min: Option<ScaleValueSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    range_max: Option<ScaleValueSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reverse: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    round: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    points: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    clamp: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nice: Option<NiceSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    exponent: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    zero: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    padding: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<bool>,
}

impl ScaleSpec {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a scale from a mapping of attribute names to values. Both the
    /// snake_case and the emitted camelCase spellings are recognized, and
    /// unrecognized attributes are ignored.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Result<Self> {
        let mut scale = Self::default();

        // nice depends on the type, so the type goes first
        if let Some(type_) = attributes.get("type") {
            scale.set_type(string_attribute("type", type_)?.parse()?);
        }

        for (key, value) in attributes {
            match key.as_str() {
                "type" => {}
                "name" => {
                    scale.set_name(string_attribute(key, value)?);
                }
                "domain" => {
                    scale.set_domain(value.clone())?;
                }
                "domain_min" | "domainMin" => {
                    scale.set_domain_min(value.clone())?;
                }
                "domain_max" | "domainMax" => {
                    scale.set_domain_max(value.clone())?;
                }
                "range" => {
                    scale.set_range(value.clone())?;
                }
                "range_min" | "rangeMin" => {
                    scale.set_range_min(value.clone())?;
                }
                "range_max" | "rangeMax" => {
                    scale.set_range_max(value.clone())?;
                }
                "reverse" => scale.reverse = Some(bool_attribute(key, value)?),
                "round" => scale.round = Some(bool_attribute(key, value)?),
                "points" => scale.points = Some(bool_attribute(key, value)?),
                "bands" => scale.points = Some(!bool_attribute(key, value)?),
                "clamp" => scale.clamp = Some(bool_attribute(key, value)?),
                "zero" => scale.zero = Some(bool_attribute(key, value)?),
                "sort" => scale.sort = Some(bool_attribute(key, value)?),
                "nice" => match value {
                    Value::Bool(flag) => {
                        scale.check_flag_nice()?;
                        scale.nice = Some(NiceSpec::Flag(*flag));
                    }
                    Value::String(interval) => {
                        scale.set_nice_interval(interval.parse()?)?;
                    }
                    _ => {
                        return Err(VegaPlotError::invalid_argument(format!(
                            "Expected boolean or time interval for attribute \"nice\", received {value}"
                        )))
                    }
                },
                "exponent" => {
                    scale.set_exponent(number_attribute(key, value)?)?;
                }
                "padding" => {
                    scale.set_padding(number_attribute(key, value)?)?;
                }
                _ => log::debug!("Ignoring unrecognized scale attribute {key:?}"),
            }
        }
        Ok(scale)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn type_(&self) -> Option<ScaleTypeSpec> {
        self.type_
    }

    /// Set the scale type. A stored `nice` value that does not fit the new
    /// type (a flag on a temporal scale or an interval on any other) is
    /// cleared.
    pub fn set_type(&mut self, type_: ScaleTypeSpec) -> &mut Self {
        self.type_ = Some(type_);
        if !self.nice_matches_type() {
            log::warn!(
                "Clearing nice value {:?} of scale {:?}, which does not apply to {type_} scales",
                self.nice,
                self.name
            );
            self.nice = None;
        }
        self
    }

    pub fn is_temporal(&self) -> bool {
        self.type_.is_some_and(|t| t.is_temporal())
    }

    pub fn domain(&self) -> Option<&ScaleValueSpec> {
        self.domain.as_ref()
    }

    pub fn set_domain<A: Into<ScaleArg>>(&mut self, domain: A) -> Result<&mut Self> {
        let domain = parse_domain(domain.into())
            .with_context(|| format!("Setting domain of scale {:?}", self.name))?;
        self.domain = Some(domain);
        Ok(self)
    }

    /// Set the domain together with its minimum and maximum companions
    pub fn set_domain_bounded<A, B, C>(&mut self, domain: A, min: B, max: C) -> Result<&mut Self>
    where
        A: Into<ScaleArg>,
        B: Into<ScaleArg>,
        C: Into<ScaleArg>,
    {
        let (domain, min, max) = parse_bounded(parse_domain, domain.into(), min.into(), max.into())
            .with_context(|| format!("Setting domain of scale {:?}", self.name))?;
        self.domain = Some(domain);
        self.domain_min = Some(min);
        self.domain_max = Some(max);
        Ok(self)
    }

    pub fn domain_min(&self) -> Option<&ScaleValueSpec> {
        self.domain_min.as_ref()
    }

    pub fn set_domain_min<A: Into<ScaleArg>>(&mut self, min: A) -> Result<&mut Self> {
        self.domain_min = Some(parse_domain(min.into())?);
        Ok(self)
    }

    pub fn domain_max(&self) -> Option<&ScaleValueSpec> {
        self.domain_max.as_ref()
    }

    pub fn set_domain_max<A: Into<ScaleArg>>(&mut self, max: A) -> Result<&mut Self> {
        self.domain_max = Some(parse_domain(max.into())?);
        Ok(self)
    }

    pub fn range(&self) -> Option<&ScaleValueSpec> {
        self.range.as_ref()
    }

    pub fn set_range<A: Into<ScaleArg>>(&mut self, range: A) -> Result<&mut Self> {
        let range = parse_range(range.into())
            .with_context(|| format!("Setting range of scale {:?}", self.name))?;
        self.range = Some(range);
        Ok(self)
    }

    /// Set the range together with its minimum and maximum companions
    pub fn set_range_bounded<A, B, C>(&mut self, range: A, min: B, max: C) -> Result<&mut Self>
    where
        A: Into<ScaleArg>,
        B: Into<ScaleArg>,
        C: Into<ScaleArg>,
    {
        let (range, min, max) = parse_bounded(parse_range, range.into(), min.into(), max.into())
            .with_context(|| format!("Setting range of scale {:?}", self.name))?;
        self.range = Some(range);
        self.range_min = Some(min);
        self.range_max = Some(max);
        Ok(self)
    }

    pub fn range_min(&self) -> Option<&ScaleValueSpec> {
        self.range_min.as_ref()
    }

    pub fn set_range_min<A: Into<ScaleArg>>(&mut self, min: A) -> Result<&mut Self> {
        self.range_min = Some(parse_domain(min.into())?);
        Ok(self)
    }

    pub fn range_max(&self) -> Option<&ScaleValueSpec> {
        self.range_max.as_ref()
    }

    pub fn set_range_max<A: Into<ScaleArg>>(&mut self, max: A) -> Result<&mut Self> {
        self.range_max = Some(parse_domain(max.into())?);
        Ok(self)
    }

    pub fn set_reverse(&mut self) -> &mut Self {
        self.reverse = Some(true);
        self
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse.unwrap_or(false)
    }

    pub fn set_round(&mut self) -> &mut Self {
        self.round = Some(true);
        self
    }

    pub fn is_round(&self) -> bool {
        self.round.unwrap_or(false)
    }

    /// Distribute ordinal values at uniformly spaced points
    pub fn set_points(&mut self) -> &mut Self {
        self.points = Some(true);
        self
    }

    pub fn is_points(&self) -> bool {
        self.points.unwrap_or(false)
    }

    /// Distribute ordinal values over uniformly spaced bands
    pub fn set_bands(&mut self) -> &mut Self {
        self.points = Some(false);
        self
    }

    pub fn is_bands(&self) -> bool {
        !self.is_points()
    }

    pub fn set_clamp(&mut self) -> &mut Self {
        self.clamp = Some(true);
        self
    }

    pub fn is_clamp(&self) -> bool {
        self.clamp.unwrap_or(false)
    }

    pub fn set_sort(&mut self) -> &mut Self {
        self.sort = Some(true);
        self
    }

    pub fn is_sort(&self) -> bool {
        self.sort.unwrap_or(false)
    }

    pub fn set_zero(&mut self) -> &mut Self {
        self.zero = Some(true);
        self
    }

    pub fn is_zero(&self) -> bool {
        self.zero.unwrap_or(false)
    }

    pub fn padding(&self) -> Option<f64> {
        self.padding
    }

    pub fn set_padding<T: ToPrimitive>(&mut self, padding: T) -> Result<&mut Self> {
        let padding = padding.to_f64().ok_or_else(|| {
            VegaPlotError::invalid_argument("Scale padding is not representable as a float")
        })?;
        self.padding = Some(padding);
        Ok(self)
    }

    pub fn exponent(&self) -> Option<f64> {
        self.exponent
    }

    pub fn set_exponent<T: ToPrimitive>(&mut self, exponent: T) -> Result<&mut Self> {
        let exponent = exponent.to_f64().ok_or_else(|| {
            VegaPlotError::invalid_argument("Scale exponent is not representable as a float")
        })?;
        self.exponent = Some(exponent);
        Ok(self)
    }

    pub fn nice(&self) -> ScaleNice {
        if self.is_temporal() {
            ScaleNice::Interval(match self.nice {
                Some(NiceSpec::Interval(interval)) => Some(interval),
                _ => None,
            })
        } else {
            ScaleNice::Flag(match self.nice {
                Some(NiceSpec::Flag(flag)) => Some(flag),
                _ => None,
            })
        }
    }

    /// Turn on nice domain boundaries. Only valid for non-temporal scales,
    /// temporal scales take an interval through [`Self::set_nice_interval`].
    pub fn set_nice(&mut self) -> Result<&mut Self> {
        self.check_flag_nice()?;
        self.nice = Some(NiceSpec::Flag(true));
        Ok(self)
    }

    /// Whether nice domain boundaries are on. Fails for time and utc scales,
    /// whose nice value is an interval.
    pub fn is_nice(&self) -> Result<bool> {
        match self.nice() {
            ScaleNice::Flag(flag) => Ok(flag.unwrap_or(false)),
            ScaleNice::Interval(_) => Err(VegaPlotError::unsupported(format!(
                "nice is not a flag on {} scale {:?}",
                self.type_.map(|t| t.as_str()).unwrap_or_default(),
                self.name
            ))),
        }
    }

    pub fn set_nice_interval(&mut self, interval: TimeInterval) -> Result<&mut Self> {
        if !self.is_temporal() {
            return Err(VegaPlotError::invalid_argument(format!(
                "A nice time interval requires a time or utc scale, scale {:?} is not temporal",
                self.name
            )));
        }
        self.nice = Some(NiceSpec::Interval(interval));
        Ok(self)
    }

    pub fn nice_interval(&self) -> Result<Option<TimeInterval>> {
        match self.nice() {
            ScaleNice::Interval(interval) => Ok(interval),
            ScaleNice::Flag(_) => Err(VegaPlotError::unsupported(format!(
                "Scale {:?} is not temporal and has no nice time interval",
                self.name
            ))),
        }
    }

    /// Call a convenience method by name, e.g. `to_colors`, `in_months`, or
    /// `include_zero`.
    pub fn invoke(&mut self, method: &str) -> Result<&mut Self> {
        let method = ScaleMethod::lookup(method).ok_or_else(|| {
            VegaPlotError::invalid_argument(format!("Unsupported scale method: {method:?}"))
        })?;
        self.apply(method)
    }

    pub fn apply(&mut self, method: ScaleMethod) -> Result<&mut Self> {
        match method {
            ScaleMethod::Range(sym) => self.set_range(sym),
            ScaleMethod::NiceInterval(interval) => self.set_nice_interval(interval),
            ScaleMethod::Nice => self.set_nice(),
            ScaleMethod::Reverse => Ok(self.set_reverse()),
            ScaleMethod::Round => Ok(self.set_round()),
            ScaleMethod::Points => Ok(self.set_points()),
            ScaleMethod::Bands => Ok(self.set_bands()),
            ScaleMethod::Clamp => Ok(self.set_clamp()),
            ScaleMethod::Sort => Ok(self.set_sort()),
            ScaleMethod::Zero => Ok(self.set_zero()),
        }
    }

    fn check_flag_nice(&self) -> Result<()> {
        if self.is_temporal() {
            Err(VegaPlotError::invalid_argument(format!(
                "Scale {:?} is temporal, nice takes a time interval",
                self.name
            )))
        } else {
            Ok(())
        }
    }

    fn nice_matches_type(&self) -> bool {
        match self.nice {
            None => true,
            Some(NiceSpec::Flag(_)) => !self.is_temporal(),
            Some(NiceSpec::Interval(_)) => self.is_temporal(),
        }
    }
}

impl Validate for ScaleSpec {
    fn validate(&self) -> Vec<ValidationError> {
        if self.nice_matches_type() {
            Vec::new()
        } else {
            vec![ValidationError::new(
                &self.name,
                "nice",
                "does not match the scale type",
            )]
        }
    }
}

fn parse_domain(arg: ScaleArg) -> Result<ScaleValueSpec> {
    Ok(match arg {
        ScaleArg::Text(path) | ScaleArg::Value(Value::String(path)) => {
            ScaleValueSpec::FieldReference(DataRef::from_path(&path))
        }
        ScaleArg::Symbol(sym) => {
            return Err(VegaPlotError::invalid_argument(format!(
                "Range literal {:?} is not a valid domain",
                sym.name()
            )))
        }
        ScaleArg::Reference(data_ref) => ScaleValueSpec::FieldReference(data_ref),
        ScaleArg::Array(values) => ScaleValueSpec::Array(values),
        ScaleArg::Value(value) => ScaleValueSpec::Value(value),
    })
}

fn parse_range(arg: ScaleArg) -> Result<ScaleValueSpec> {
    Ok(match arg {
        ScaleArg::Text(name) | ScaleArg::Value(Value::String(name)) => {
            range_literal(name.parse()?)
        }
        ScaleArg::Symbol(sym) => range_literal(sym),
        ScaleArg::Reference(data_ref) => ScaleValueSpec::FieldReference(data_ref),
        ScaleArg::Array(values) => ScaleValueSpec::Array(values),
        ScaleArg::Value(value) => ScaleValueSpec::Value(value),
    })
}

/// Parse a value and its min/max companions, failing before anything is stored
fn parse_bounded(
    parse: fn(ScaleArg) -> Result<ScaleValueSpec>,
    value: ScaleArg,
    min: ScaleArg,
    max: ScaleArg,
) -> Result<(ScaleValueSpec, ScaleValueSpec, ScaleValueSpec)> {
    Ok((parse(value)?, parse(min)?, parse(max)?))
}

fn range_literal(sym: RangeSymbol) -> ScaleValueSpec {
    let literal = sym.literal();
    if literal.as_str() != sym.name() {
        log::debug!("Resolved range literal {:?} to {literal}", sym.name());
    }
    ScaleValueSpec::Literal(literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::values::RangeLiteral;
    use serde_json::json;

    #[test]
    fn test_convenience_table_is_complete() {
        assert_eq!(
            ScaleMethod::lookup("to_more_colors"),
            Some(ScaleMethod::Range(RangeSymbol::MoreColors))
        );
        assert_eq!(
            ScaleMethod::lookup("in_weeks"),
            Some(ScaleMethod::NiceInterval(TimeInterval::Week))
        );
        assert_eq!(ScaleMethod::lookup("in_week"), None);
        assert_eq!(ScaleMethod::lookup("to_category10"), None);
        assert_eq!(SCALE_METHODS.len(), 5 + 7 + 12);
    }

    #[test]
    fn test_type_is_normalized() {
        assert_eq!(" Time ".parse::<ScaleTypeSpec>().unwrap(), ScaleTypeSpec::Time);
        assert!("bogus".parse::<ScaleTypeSpec>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_type_change_clears_mismatched_nice() {
        let mut scale = ScaleSpec::new("x");
        scale.set_nice().unwrap();
        assert_eq!(scale.nice(), ScaleNice::Flag(Some(true)));

        scale.set_type(ScaleTypeSpec::Time);
        assert_eq!(scale.nice(), ScaleNice::Interval(None));

        scale.set_nice_interval(TimeInterval::Day).unwrap();
        scale.set_type(ScaleTypeSpec::Utc);
        assert_eq!(scale.nice_interval().unwrap(), Some(TimeInterval::Day));

        scale.set_type(ScaleTypeSpec::Linear);
        assert!(!scale.is_nice().unwrap());
    }

    #[test]
    fn test_bounded_range_is_atomic() {
        let mut scale = ScaleSpec::new("color");
        scale.set_range("colors").unwrap();
        let err = scale
            .set_range_bounded("width", 0, "bogus")
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            scale.range().and_then(|r| r.as_literal()),
            Some(RangeLiteral::Category10)
        );
        assert!(scale.range_min().is_none());
    }

    #[test]
    fn test_deserialized_nice_mismatch_is_reported() {
        let scale: ScaleSpec =
            serde_json::from_value(json!({"name": "x", "type": "linear", "nice": "month"}))
                .unwrap();
        let errors = scale.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].attribute, "nice");
    }
}
