//! End-to-end chart rendering tests.

use std::f64::consts::PI;
use std::fs::File;

use fourierplot_backend_chart::{render_chart, ChartError};
use fourierplot_spec::BackendError;
use fourierplot_spec::{ChartParams, PlotSpec, TickParams};
use pretty_assertions::assert_eq;

fn sawtooth_like(samples: usize) -> (Vec<f64>, Vec<f64>) {
    let times: Vec<f64> = (0..samples)
        .map(|i| -4.0 * PI + i as f64 * 8.0 * PI / (samples - 1) as f64)
        .collect();
    let amplitudes = times.iter().map(|t| (t / PI).rem_euclid(2.0) - 1.0).collect();
    (times, amplitudes)
}

#[test]
fn identical_inputs_give_identical_png() {
    let (times, amplitudes) = sawtooth_like(500);
    let chart = PlotSpec::preset("sawtooth").unwrap().chart;

    let first = render_chart(&chart, &times, &amplitudes, Some("Adjusted sawtooth wave")).unwrap();
    let second = render_chart(&chart, &times, &amplitudes, Some("Adjusted sawtooth wave")).unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(first.png_data, second.png_data);
}

#[test]
fn legend_changes_the_image() {
    let (times, amplitudes) = sawtooth_like(200);
    let chart = ChartParams::default();
    let with = render_chart(&chart, &times, &amplitudes, Some("60 harmonics")).unwrap();
    let without = render_chart(&chart, &times, &amplitudes, None).unwrap();
    assert_ne!(with.hash, without.hash);
}

#[test]
fn written_file_decodes_with_requested_size() {
    let (times, amplitudes) = sawtooth_like(300);
    let chart = ChartParams::default()
        .with_size(1000, 400)
        .with_title("Sawtooth wave")
        .with_x_ticks(TickParams::pi_multiples());
    let image = render_chart(&chart, &times, &amplitudes, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sawtooth.png");
    image.write_to(&path).unwrap();

    let decoder = png::Decoder::new(File::open(&path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!((info.width, info.height), (1000, 400));
    assert_eq!(info.color_type, png::ColorType::Rgba);
}

#[test]
fn tiny_tick_step_is_rejected() {
    let (times, amplitudes) = sawtooth_like(50);
    let chart = ChartParams::default().with_x_ticks(TickParams::decimal(0.001));
    let err = render_chart(&chart, &times, &amplitudes, None).unwrap_err();
    assert!(matches!(err, ChartError::TooManyTicks { axis: "x", .. }));
    assert_eq!(err.code(), "CHART_004");
}

#[test]
fn empty_series_still_renders_axes() {
    let image = render_chart(&ChartParams::default(), &[], &[], None).unwrap();
    assert_eq!(image.width, 1000);
    assert!(!image.png_data.is_empty());
}
