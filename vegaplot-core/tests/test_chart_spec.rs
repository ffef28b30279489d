use serde_json::json;
use vegaplot_core::config::SerializeConfig;
use vegaplot_core::spec::chart::{ChartSpec, ChartVisitor};
use vegaplot_core::spec::data::{DataFormatSpec, DataSpec};
use vegaplot_core::spec::scale::{ScaleSpec, ScaleTypeSpec};
use vegaplot_core::validate::Validate;

fn bar_chart() -> ChartSpec {
    let mut table = DataSpec::new("table");
    table.set_values(json!([
        {"x": 1, "y": 28},
        {"x": 2, "y": 55},
        {"x": 3, "y": 43}
    ]));

    let mut x = ScaleSpec::new("x");
    x.set_type(ScaleTypeSpec::Ordinal);
    x.set_domain("table.x").unwrap().set_range("width").unwrap();

    let mut y = ScaleSpec::new("y");
    y.set_type(ScaleTypeSpec::Linear);
    y.set_domain("table.y")
        .unwrap()
        .set_range("height")
        .unwrap()
        .set_nice()
        .unwrap();

    let mut chart = ChartSpec::default();
    chart
        .set_property("width", 400)
        .set_property("height", 200)
        .add_data(table)
        .add_scale(x)
        .add_scale(y);
    chart
}

#[test]
fn test_bar_chart_json() {
    let value = bar_chart().to_json(&Default::default()).unwrap();
    assert_eq!(
        value,
        json!({
            "$schema": "https://vega.github.io/schema/vega/v5.json",
            "width": 400,
            "height": 200,
            "data": [{
                "name": "table",
                "values": [
                    {"x": 1, "y": 28},
                    {"x": 2, "y": 55},
                    {"x": 3, "y": 43}
                ]
            }],
            "scales": [
                {
                    "name": "x",
                    "type": "ordinal",
                    "domain": {"data": "table", "field": "data.x"},
                    "range": "width"
                },
                {
                    "name": "y",
                    "type": "linear",
                    "domain": {"data": "table", "field": "data.y"},
                    "range": "height",
                    "nice": true
                }
            ]
        })
    );
}

#[test]
fn test_round_trip() {
    let chart = bar_chart();
    let s = chart.to_json_string(&Default::default()).unwrap();
    let parsed: ChartSpec = serde_json::from_str(&s).unwrap();
    assert_eq!(parsed, chart);
}

#[test]
fn test_pretty_output() {
    let config = SerializeConfig {
        pretty: true,
        ..Default::default()
    };
    let s = bar_chart().to_json_string(&config).unwrap();
    assert!(s.contains('\n'));
}

#[test]
fn test_validation_collects_all_errors() {
    let mut chart = bar_chart();
    let mut stocks = DataSpec::new("stocks");
    stocks.set_format(DataFormatSpec::new("xml"));
    let mut other = DataSpec::new("other");
    other.set_format(DataFormatSpec::csv().with_parse("when", "datetime"));
    chart.add_data(stocks).add_data(other);

    let errors = chart.validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].name, "stocks");
    assert_eq!(errors[1].name, "other");
    assert!(errors.iter().all(|e| e.attribute == "format"));

    let err = chart.to_json(&Default::default()).unwrap_err();
    assert!(err.is_specification());
    assert!(err.to_string().contains("2 validation error(s)"));
}

#[test]
fn test_unknown_references_are_not_errors() {
    let mut chart = bar_chart();
    let mut derived = DataSpec::new("derived");
    derived.set_source("missing").unwrap();
    chart.add_data(derived);
    assert!(chart.is_valid());
}

#[test]
fn test_walk_visits_in_order() {
    #[derive(Default)]
    struct NameCollector {
        names: Vec<String>,
    }

    impl ChartVisitor for NameCollector {
        fn visit_data(&mut self, data: &DataSpec) -> vegaplot_core::error::Result<()> {
            self.names.push(format!("data:{}", data.name()));
            Ok(())
        }

        fn visit_scale(&mut self, scale: &ScaleSpec) -> vegaplot_core::error::Result<()> {
            self.names.push(format!("scale:{}", scale.name()));
            Ok(())
        }
    }

    let mut visitor = NameCollector::default();
    bar_chart().walk(&mut visitor).unwrap();
    assert_eq!(visitor.names, vec!["data:table", "scale:x", "scale:y"]);
}

#[test]
fn test_lookup_and_mutate_by_name() {
    let mut chart = bar_chart();
    chart
        .get_scale_mut("x")
        .unwrap()
        .set_points()
        .set_padding(1)
        .unwrap();
    let x = chart.get_scale("x").unwrap();
    assert!(x.is_points());
    assert_eq!(x.padding(), Some(1.0));
    assert!(chart.get_scale("z").is_none());
    assert!(chart.get_data_mut("table").is_some());
}
