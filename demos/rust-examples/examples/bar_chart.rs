use serde_json::json;
use vegaplot_common::error::Result;
use vegaplot_core::config::SerializeConfig;
use vegaplot_core::spec::chart::ChartSpec;
use vegaplot_core::spec::data::DataSpec;
use vegaplot_core::spec::scale::{ScaleSpec, ScaleTypeSpec};

/// Build the classic Vega bar chart data and scales, then print the spec JSON
fn main() -> Result<()> {
    env_logger::init();

    let mut table = DataSpec::new("table");
    table.set_values(json!([
        {"x": 1, "y": 28}, {"x": 2, "y": 55}, {"x": 3, "y": 43}, {"x": 4, "y": 91},
        {"x": 5, "y": 81}, {"x": 6, "y": 53}, {"x": 7, "y": 19}, {"x": 8, "y": 87}
    ]));

    let mut x = ScaleSpec::new("x");
    x.set_type(ScaleTypeSpec::Ordinal);
    x.set_domain("table.x")?.invoke("to_width")?;

    let mut y = ScaleSpec::new("y");
    y.set_type(ScaleTypeSpec::Linear);
    y.set_domain("table.y")?.invoke("to_height")?.set_nice()?;

    let mut chart = ChartSpec::default();
    chart
        .set_property("width", 400)
        .set_property("height", 200)
        .add_data(table)
        .add_scale(x)
        .add_scale(y);

    let config = SerializeConfig {
        pretty: true,
        ..Default::default()
    };
    let spec = chart.to_json_string(&config)?;
    log::info!("Built chart with {} scales", chart.scales.len());
    println!("{spec}");
    Ok(())
}
