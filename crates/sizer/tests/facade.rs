use serde_json::json;
use sizer::chart::notation::{numeric_to_x, x_to_numeric};
use sizer::prelude::*;

#[test]
fn chart_built_from_json_config() {
    let config: ChartConfig = serde_json::from_value(json!({
        "sizes": { "XS": 0, "S": 4, "M": 8, "L": 12, "XL": 16 },
        "dynamic_operations": [
            { "base_suffix": "XS", "sort_value_increment": 2, "growth_direction": -1 },
            { "base_suffix": "XL", "sort_value_increment": 2, "growth_direction": 1 }
        ]
    }))
    .expect("config deserialize");

    let mut chart = SizeChart::from_config(&config).expect("chart");
    assert_eq!(chart.range_list("2XS", "2XL").expect("range"), [
        "2XS", "XS", "S", "M", "L", "XL", "2XL"
    ]);
    assert_eq!(chart.get_or_create("4XL").expect("4XL").sort_value(), 22.0);
}

#[test]
fn repeated_notation_feeds_the_chart() {
    let mut chart = SizeChart::builder().build().expect("chart");

    let key = x_to_numeric("XXXL").expect("XXXL");
    let node = chart.get_or_create(&key).expect("3XL");
    assert_eq!(node.sort_value(), 120.0);
    assert_eq!(numeric_to_x(node.key()).expect("3XL"), "XXXL");
}
