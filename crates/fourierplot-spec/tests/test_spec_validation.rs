//! Spec parsing and validation integration tests.

use fourierplot_spec::{
    validate_plot_spec, ErrorCode, PlotSpec, TickFormat, WarningCode, WaveformKind, PRESET_NAMES,
};
use pretty_assertions::assert_eq;

const SAWTOOTH_JSON: &str = r#"{
    "spec_version": 1,
    "plot_id": "saw-coarse",
    "description": "Sawtooth with a handful of harmonics",
    "series": {
        "waveform": "sawtooth",
        "period": 6.283185307179586,
        "harmonics": 8
    },
    "domain": { "start": -12.566370614359172, "end": 12.566370614359172, "samples": 400 },
    "chart": {
        "width": 800,
        "height": 320,
        "title": "Sawtooth, 8 harmonics",
        "legend": "{harmonics} harmonics",
        "line_color": [1.0, 0.0, 0.0, 1.0],
        "x_ticks": { "step": 3.141592653589793, "format": "pi_multiples" }
    }
}"#;

#[test]
fn test_presets_validate_cleanly() {
    for name in PRESET_NAMES {
        let spec = PlotSpec::preset(name).unwrap();
        let result = validate_plot_spec(&spec);
        assert!(result.is_ok(), "{}: {:?}", name, result.errors);
        assert!(result.warnings.is_empty(), "{}: {:?}", name, result.warnings);
    }
}

#[test]
fn test_json_spec_parses_with_defaults() {
    let spec = PlotSpec::from_json(SAWTOOTH_JSON).unwrap();
    assert_eq!(spec.series.waveform, WaveformKind::Sawtooth);
    assert_eq!(spec.series.effective_time_shift(), -std::f64::consts::PI);
    assert_eq!(spec.chart.x_ticks.format, TickFormat::PiMultiples);
    assert_eq!(spec.chart.y_ticks.step, 0.5);
    assert_eq!(spec.chart.reference_levels, vec![1.0, -1.0]);
    assert_eq!(spec.legend_text().as_deref(), Some("8 harmonics"));

    let result = validate_plot_spec(&spec);
    assert!(result.is_ok());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_invalid_json_spec_reports_every_error() {
    let json = r#"{
        "spec_version": 2,
        "plot_id": "X",
        "series": { "waveform": "square", "period": 0.0, "harmonics": -1 },
        "domain": { "start": 0.0, "end": 1.0, "samples": 10 }
    }"#;
    let spec = PlotSpec::from_json(json).unwrap();
    let result = validate_plot_spec(&spec);

    let codes: Vec<ErrorCode> = result.errors.iter().map(|e| e.code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::UnsupportedSpecVersion,
            ErrorCode::InvalidPlotId,
            ErrorCode::InvalidPeriod,
        ]
    );

    let warnings: Vec<WarningCode> = result.warnings.iter().map(|w| w.code).collect();
    assert_eq!(
        warnings,
        vec![
            WarningCode::NegativeHarmonics,
            WarningCode::MissingDescription,
        ]
    );
}

#[test]
fn test_unknown_waveform_rejected_at_parse() {
    let json = SAWTOOTH_JSON.replace("\"sawtooth\"", "\"triangle\"");
    assert!(PlotSpec::from_json(&json).is_err());
}
