use sizer_domain::config::{ChartConfig, DetailedSize, SizeSpec};
use sizer_domain::defaults::{STANDARD_CHART, standard_dynamic_operations, standard_sizes};
use sizer_domain::format::{FormatFlags, FormattingOptions, FormattingOverrides, XSizeNotation};
use serde_json::json;

#[test]
fn formatting_defaults_are_sane() {
    let options = FormattingOptions::default();
    assert!(!options.verbose());
    assert!(!options.dynamic_size_verbose());
    assert_eq!(options.x_size_notation, XSizeNotation::Numeric);
}

#[test]
fn single_override_keeps_other_options() {
    let mut options = FormattingOptions {
        flags: FormatFlags::DYNAMIC_SIZE_VERBOSE,
        x_size_notation: XSizeNotation::Repeated,
    };

    options.merge(&FormattingOverrides { verbose: Some(true), ..FormattingOverrides::default() });

    assert!(options.verbose());
    assert!(options.dynamic_size_verbose());
    assert_eq!(options.x_size_notation, XSizeNotation::Repeated);

    options.merge(&FormattingOverrides {
        dynamic_size_verbose: Some(false),
        ..FormattingOverrides::default()
    });
    assert!(options.verbose());
    assert!(!options.dynamic_size_verbose());
}

#[test]
fn chart_config_deserializes() {
    let raw = json!({
        "sizes": {
            "XS": { "sort_value": 0, "verbose": "X-Small", "dynamic": true },
            "M": 8,
        },
        "dynamic_operations": [
            { "base_suffix": "XS", "sort_value_increment": 4, "growth_direction": -1 }
        ],
        "formatting": { "flags": 1, "x_size_notation": "repeated" },
        "dynamic_size_cache": true
    });

    let cfg: ChartConfig = serde_json::from_value(raw).expect("config deserialize");
    let sizes = cfg.sizes.expect("sizes present");

    assert_eq!(
        sizes["XS"],
        SizeSpec::Detailed(DetailedSize {
            sort_value: 0.0,
            verbose: Some("X-Small".to_owned()),
            dynamic: true,
        })
    );
    assert_eq!(sizes["M"], SizeSpec::Value(8.0));
    assert_eq!(cfg.dynamic_operations.expect("ops present")[0].growth_direction, -1);
    assert!(cfg.formatting.verbose());
    assert_eq!(cfg.formatting.x_size_notation, XSizeNotation::Repeated);
    assert!(cfg.dynamic_size_cache);
}

#[test]
fn empty_config_uses_defaults() {
    let cfg: ChartConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert!(cfg.sizes.is_none());
    assert!(cfg.dynamic_operations.is_none());
    assert!(!cfg.dynamic_size_cache);
    assert_eq!(cfg.formatting, FormattingOptions::default());
}

#[test]
fn standard_tables_are_fresh_copies() {
    let mut first = standard_sizes();
    first[1].set_dynamic_size(true);

    let second = standard_sizes();
    assert_eq!(second.len(), STANDARD_CHART.len());
    assert!(!second[1].is_dynamic_size());
    assert!(second[0].is_dynamic_size());
    assert_eq!(second[4].verbose(), "X-Large");

    let ops = standard_dynamic_operations();
    assert_eq!(ops.len(), 2);
    assert!(ops.iter().all(|op| op.sort_value_increment > 0.0));
    assert_eq!(ops[0].step(), -10.0);
    assert_eq!(ops[1].step(), 10.0);
}

#[test]
fn formatting_options_serialize_flags_as_bits() {
    let options = FormattingOptions {
        flags: FormatFlags::VERBOSE | FormatFlags::DYNAMIC_SIZE_VERBOSE,
        x_size_notation: XSizeNotation::Repeated,
    };

    let value = serde_json::to_value(&options).expect("serialize");
    assert_eq!(value, json!({ "flags": 3, "x_size_notation": "repeated" }));

    let back: FormattingOptions = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, options);
}
