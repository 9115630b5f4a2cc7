//! Built-in plot specs.
//!
//! `square` and `sawtooth` reproduce the two classroom figures this tool
//! started from: a 60-harmonic square wave over `[-8, 8]` and a 60-harmonic
//! sawtooth over `[-4pi, 4pi]`. Titles, labels and legends keep the
//! figures' Portuguese captions.

use std::f64::consts::PI;

use crate::chart::{ChartParams, TickParams};
use crate::error::SpecError;
use crate::plot::PlotSpec;
use crate::series::WaveformKind;

/// Names accepted by [`PlotSpec::preset`].
pub const PRESET_NAMES: &[&str] = &["square", "sawtooth"];

const BLUE: [f64; 4] = [0.0, 0.0, 1.0, 1.0];
const RED: [f64; 4] = [1.0, 0.0, 0.0, 1.0];

impl PlotSpec {
    /// Looks up a built-in spec by name.
    pub fn preset(name: &str) -> Result<PlotSpec, SpecError> {
        match name {
            "square" => Ok(square_wave()),
            "sawtooth" => Ok(sawtooth_wave()),
            _ => Err(SpecError::UnknownPreset(
                name.to_string(),
                PRESET_NAMES.join(", "),
            )),
        }
    }
}

/// Square wave, `T = 4`, `N = 60`, shifted one unit left.
pub fn square_wave() -> PlotSpec {
    PlotSpec::builder("square", WaveformKind::Square)
        .description("Square wave approximated by 60 odd harmonics")
        .period(4.0)
        .harmonics(60)
        .time_shift(1.0)
        .domain(-8.0, 8.0, 1000)
        .chart(
            ChartParams::default()
                .with_size(1000, 500)
                .with_title("Aproximação de Onda Quadrada usando Série de Fourier")
                .with_labels("Tempo (t)", "Amplitude x(t)")
                .with_legend("{harmonics} harmônicos")
                .with_line_color(BLUE)
                .with_x_ticks(TickParams::decimal(1.0))
                .with_y_ticks(TickParams::decimal(0.5)),
        )
        .build()
}

/// Sawtooth wave, `T = 2pi`, `N = 60`, shifted by `-pi`.
pub fn sawtooth_wave() -> PlotSpec {
    PlotSpec::builder("sawtooth", WaveformKind::Sawtooth)
        .description("Sawtooth wave approximated by 60 harmonics")
        .period(2.0 * PI)
        .harmonics(60)
        .time_shift(-PI)
        .domain(-4.0 * PI, 4.0 * PI, 1000)
        .chart(
            ChartParams::default()
                .with_size(1000, 400)
                .with_title("Onda Dente de Serra")
                .with_labels("Tempo (rad)", "Amplitude x(t)")
                .with_legend("Onda Dente de Serra ajustada")
                .with_line_color(RED)
                .with_x_ticks(TickParams::pi_multiples())
                .with_y_ticks(TickParams::decimal(0.5)),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TickFormat;

    #[test]
    fn test_every_preset_name_resolves() {
        for name in PRESET_NAMES {
            let spec = PlotSpec::preset(name).unwrap();
            assert_eq!(&spec.plot_id, name);
        }
    }

    #[test]
    fn test_unknown_preset() {
        let err = PlotSpec::preset("triangle").unwrap_err();
        assert!(err.to_string().contains("triangle"));
        assert!(err.to_string().contains("square, sawtooth"));
    }

    #[test]
    fn test_square_preset_values() {
        let spec = square_wave();
        assert_eq!(spec.series.period, 4.0);
        assert_eq!(spec.series.harmonics, 60);
        assert_eq!(spec.series.effective_time_shift(), 1.0);
        assert_eq!(spec.domain.samples, 1000);
        assert_eq!((spec.chart.width, spec.chart.height), (1000, 500));
        assert_eq!(spec.legend_text().as_deref(), Some("60 harmônicos"));
    }

    #[test]
    fn test_sawtooth_preset_uses_pi_ticks() {
        let spec = sawtooth_wave();
        assert_eq!(spec.chart.x_ticks.format, TickFormat::PiMultiples);
        assert_eq!(spec.chart.x_ticks.step, PI);
        assert_eq!(spec.series.effective_time_shift(), -PI);
        assert_eq!(spec.domain.start, -4.0 * PI);
    }

    #[test]
    fn test_presets_keep_portuguese_captions() {
        let square = square_wave();
        assert_eq!(
            square.chart.title,
            "Aproximação de Onda Quadrada usando Série de Fourier"
        );
        assert_eq!(square.chart.x_label, "Tempo (t)");

        let sawtooth = sawtooth_wave();
        assert_eq!(sawtooth.chart.title, "Onda Dente de Serra");
        assert_eq!(
            sawtooth.legend_text().as_deref(),
            Some("Onda Dente de Serra ajustada")
        );
    }
}
