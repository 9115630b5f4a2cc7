//! Plot spec validation logic.

use std::sync::OnceLock;

use regex::Regex;

use crate::budget::{BudgetProfile, SeriesBudget};
use crate::chart::{ChartParams, TickParams};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::plot::{PlotSpec, SPEC_VERSION};

/// Regex pattern for valid plot_id.
/// Format: starts with lowercase letter, followed by 2-63 lowercase letters, digits, underscores, or hyphens.
const PLOT_ID_PATTERN: &str = r"^[a-z][a-z0-9_-]{2,63}$";

/// Allowed chart width/height in pixels.
pub const MIN_CHART_DIMENSION: u32 = 240;
pub const MAX_CHART_DIMENSION: u32 = 8192;

/// Allowed series line width in pixels.
pub const MAX_LINE_WIDTH: u32 = 16;

static PLOT_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn plot_id_regex() -> &'static Regex {
    PLOT_ID_REGEX.get_or_init(|| Regex::new(PLOT_ID_PATTERN).expect("invalid regex pattern"))
}

/// Returns true if `id` is a valid plot identifier.
pub fn is_valid_plot_id(id: &str) -> bool {
    plot_id_regex().is_match(id)
}

/// Validates a plot spec against the default budget profile.
///
/// All checks run; the result collects every error and warning found.
///
/// # Example
/// ```
/// use fourierplot_spec::PlotSpec;
/// use fourierplot_spec::validation::validate_plot_spec;
///
/// let spec = PlotSpec::preset("square").unwrap();
/// assert!(validate_plot_spec(&spec).is_ok());
/// ```
pub fn validate_plot_spec(spec: &PlotSpec) -> ValidationResult {
    validate_plot_spec_with_budget(spec, &BudgetProfile::default())
}

/// Validates a plot spec, enforcing the limits of `budget`.
pub fn validate_plot_spec_with_budget(spec: &PlotSpec, budget: &BudgetProfile) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_contract(spec, &mut result);
    validate_series(spec, &mut result);
    validate_budget(spec, &budget.series, &mut result);
    validate_chart(&spec.chart, &mut result);
    check_warnings(spec, &mut result);

    result
}

fn validate_contract(spec: &PlotSpec, result: &mut ValidationResult) {
    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }

    if !is_valid_plot_id(&spec.plot_id) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPlotId,
            format!(
                "plot_id '{}' must match {}",
                spec.plot_id, PLOT_ID_PATTERN
            ),
            "plot_id",
        ));
    }
}

fn validate_series(spec: &PlotSpec, result: &mut ValidationResult) {
    let errors_before = result.errors.len();

    let period = spec.series.period;
    if !period.is_finite() || period <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPeriod,
            format!("period must be a positive finite number, got {}", period),
            "series.period",
        ));
    }

    if let Some(shift) = spec.series.time_shift {
        if !shift.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDomain,
                format!("time_shift must be finite, got {}", shift),
                "series.time_shift",
            ));
        }
    }

    let (start, end) = (spec.domain.start, spec.domain.end);
    for (name, value) in [("start", start), ("end", end)] {
        if !value.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDomain,
                format!("domain bound must be finite, got {}", value),
                format!("domain.{}", name),
            ));
        }
    }
    if start.is_finite() && end.is_finite() && !(end - start).is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDomain,
            format!("domain span [{}, {}] overflows", start, end),
            "domain",
        ));
    }

    if result.errors.len() == errors_before {
        check_phase(spec, result);
    }
}

/// Shifted times must stay finite, and the largest phase `2*pi*k*|t|/T`
/// must be finite too, or `sin` turns it into NaN.
fn check_phase(spec: &PlotSpec, result: &mut ValidationResult) {
    let shift = spec.series.effective_time_shift();
    let reach = (spec.domain.start + shift)
        .abs()
        .max((spec.domain.end + shift).abs());
    if !reach.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDomain,
            format!("domain shifted by {} overflows", shift),
            "series.time_shift",
        ));
        return;
    }

    let highest = spec.series.highest_harmonic();
    if highest == 0 {
        return;
    }
    let phase = 2.0 * std::f64::consts::PI * highest as f64 * reach / spec.series.period;
    if !phase.is_finite() {
        result.add_error(ValidationError::with_path(
            ErrorCode::PhaseOverflow,
            format!(
                "phase of harmonic {} at |t| = {} with period {} is not finite",
                highest, reach, spec.series.period
            ),
            "series.period",
        ));
    }
}

fn validate_budget(spec: &PlotSpec, budget: &SeriesBudget, result: &mut ValidationResult) {
    if !budget.allows_samples(spec.domain.samples) {
        result.add_error(ValidationError::with_path(
            ErrorCode::BudgetExceeded,
            format!(
                "samples {} exceeds budget of {}",
                spec.domain.samples, budget.max_samples
            ),
            "domain.samples",
        ));
    }
    if !budget.allows_harmonics(spec.series.harmonics) {
        result.add_error(ValidationError::with_path(
            ErrorCode::BudgetExceeded,
            format!(
                "harmonics {} exceeds budget of {}",
                spec.series.harmonics, budget.max_harmonics
            ),
            "series.harmonics",
        ));
    }
}

fn validate_chart(chart: &ChartParams, result: &mut ValidationResult) {
    for (name, value) in [("width", chart.width), ("height", chart.height)] {
        if !(MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidChartDimensions,
                format!(
                    "{} must be between {} and {} pixels, got {}",
                    name, MIN_CHART_DIMENSION, MAX_CHART_DIMENSION, value
                ),
                format!("chart.{}", name),
            ));
        }
    }

    if chart.line_width == 0 || chart.line_width > MAX_LINE_WIDTH {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidLineWidth,
            format!(
                "line_width must be between 1 and {}, got {}",
                MAX_LINE_WIDTH, chart.line_width
            ),
            "chart.line_width",
        ));
    }

    for (i, component) in chart.line_color.iter().enumerate() {
        if !(0.0..=1.0).contains(component) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidColor,
                format!("color components must be in [0, 1], got {}", component),
                format!("chart.line_color[{}]", i),
            ));
        }
    }

    validate_ticks(&chart.x_ticks, "chart.x_ticks.step", result);
    validate_ticks(&chart.y_ticks, "chart.y_ticks.step", result);

    for (name, range) in [("x_range", chart.x_range), ("y_range", chart.y_range)] {
        if let Some([min, max]) = range {
            if !min.is_finite() || !max.is_finite() || min >= max {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidAxisRange,
                    format!("range must be finite with min < max, got [{}, {}]", min, max),
                    format!("chart.{}", name),
                ));
            }
        }
    }

    for (i, level) in chart.reference_levels.iter().enumerate() {
        if !level.is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidAxisRange,
                format!("reference level must be finite, got {}", level),
                format!("chart.reference_levels[{}]", i),
            ));
        }
    }
}

fn validate_ticks(ticks: &TickParams, path: &str, result: &mut ValidationResult) {
    if !ticks.step.is_finite() || ticks.step <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTickStep,
            format!("tick step must be a positive finite number, got {}", ticks.step),
            path,
        ));
    }
}

fn check_warnings(spec: &PlotSpec, result: &mut ValidationResult) {
    let harmonics = spec.series.harmonics;
    if harmonics < 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NegativeHarmonics,
            format!(
                "harmonics is {}; negative counts are evaluated as an empty sum",
                harmonics
            ),
            "series.harmonics",
        ));
    } else if harmonics == 0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ZeroHarmonics,
            "harmonics is 0; every sample will be zero",
            "series.harmonics",
        ));
    }

    // Shortest period in the sum is T / k_max; fewer than two samples per
    // period cannot represent it.
    let period = spec.series.period;
    let highest = spec.series.highest_harmonic();
    if let Some(spacing) = spec.domain.spacing() {
        if highest > 0 && period.is_finite() && period > 0.0 && spacing > 0.0 {
            let samples_per_period = period / highest as f64 / spacing;
            if samples_per_period < 2.0 {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::UndersampledHarmonic,
                    format!(
                        "harmonic {} gets {:.2} samples per period; increase domain.samples",
                        highest, samples_per_period
                    ),
                    "domain.samples",
                ));
            }
        }
    }

    if spec.description.is_none() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "description is not set",
            "description",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::WaveformKind;

    fn valid_spec() -> PlotSpec {
        PlotSpec::builder("test-square", WaveformKind::Square)
            .description("test")
            .period(4.0)
            .harmonics(10)
            .domain(-8.0, 8.0, 1000)
            .build()
    }

    #[test]
    fn test_valid_spec_has_no_errors_or_warnings() {
        let result = validate_plot_spec(&valid_spec());
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_plot_id_pattern() {
        assert!(is_valid_plot_id("square"));
        assert!(is_valid_plot_id("saw_tooth-2"));
        assert!(!is_valid_plot_id("ab"));
        assert!(!is_valid_plot_id("Square"));
        assert!(!is_valid_plot_id("1square"));
        assert!(!is_valid_plot_id("square wave"));
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut spec = valid_spec();
        spec.series.period = 0.0;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::InvalidPeriod));
        assert_eq!(result.errors[0].path.as_deref(), Some("series.period"));
    }

    #[test]
    fn test_negative_and_nan_period_rejected() {
        for period in [-4.0, f64::NAN, f64::INFINITY] {
            let mut spec = valid_spec();
            spec.series.period = period;
            assert!(validate_plot_spec(&spec).has_error(ErrorCode::InvalidPeriod));
        }
    }

    #[test]
    fn test_negative_harmonics_is_warning_not_error() {
        let mut spec = valid_spec();
        spec.series.harmonics = -5;
        let result = validate_plot_spec(&spec);
        assert!(result.is_ok());
        assert!(result.has_warning(WarningCode::NegativeHarmonics));
    }

    #[test]
    fn test_zero_harmonics_warning() {
        let mut spec = valid_spec();
        spec.series.harmonics = 0;
        let result = validate_plot_spec(&spec);
        assert!(result.is_ok());
        assert!(result.has_warning(WarningCode::ZeroHarmonics));
    }

    #[test]
    fn test_undersampled_harmonic_warning() {
        let mut spec = valid_spec();
        // T = 4, k_max = 1999, 1000 samples over 16 units: far below 2 samples per period
        spec.series.harmonics = 1000;
        let result = validate_plot_spec(&spec);
        assert!(result.has_warning(WarningCode::UndersampledHarmonic));
    }

    #[test]
    fn test_chart_errors_collected() {
        let mut spec = valid_spec();
        spec.chart.width = 10;
        spec.chart.line_width = 0;
        spec.chart.line_color = [1.5, 0.0, 0.0, 1.0];
        spec.chart.y_ticks.step = 0.0;
        spec.chart.x_range = Some([1.0, 1.0]);
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::InvalidChartDimensions));
        assert!(result.has_error(ErrorCode::InvalidLineWidth));
        assert!(result.has_error(ErrorCode::InvalidColor));
        assert!(result.has_error(ErrorCode::InvalidTickStep));
        assert!(result.has_error(ErrorCode::InvalidAxisRange));
        assert_eq!(result.errors.len(), 5);
    }

    #[test]
    fn test_non_finite_domain_rejected() {
        let mut spec = valid_spec();
        spec.domain.end = f64::INFINITY;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::InvalidDomain));
    }

    #[test]
    fn test_overflowing_domain_span_rejected() {
        let mut spec = valid_spec();
        spec.domain.start = -1e308;
        spec.domain.end = 1e308;
        spec.domain.samples = 3;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::InvalidDomain));
        assert_eq!(result.errors[0].path.as_deref(), Some("domain"));
    }

    #[test]
    fn test_tiny_period_phase_overflow_rejected() {
        let mut spec = valid_spec();
        spec.series.period = 1e-300;
        spec.domain.start = -1e10;
        spec.domain.end = 1e10;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::PhaseOverflow));
        assert!(!result.has_error(ErrorCode::InvalidPeriod));
    }

    #[test]
    fn test_sample_budget_exceeded() {
        let mut spec = valid_spec();
        spec.domain.samples = usize::MAX;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::BudgetExceeded));
        assert_eq!(result.errors[0].path.as_deref(), Some("domain.samples"));
    }

    #[test]
    fn test_harmonic_budget_exceeded() {
        let mut spec = valid_spec();
        spec.series.harmonics = 3_000_000_000;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::BudgetExceeded));
    }

    #[test]
    fn test_strict_budget_is_enforced() {
        let mut spec = valid_spec();
        spec.domain.samples = 200_000;
        assert!(validate_plot_spec(&spec).is_ok());
        let strict = validate_plot_spec_with_budget(&spec, &BudgetProfile::strict());
        assert!(strict.has_error(ErrorCode::BudgetExceeded));
    }

    #[test]
    fn test_shift_overflow_rejected_even_without_harmonics() {
        let mut spec = valid_spec();
        spec.series.harmonics = 0;
        spec.series.time_shift = Some(f64::MAX);
        spec.domain.end = f64::MAX;
        let result = validate_plot_spec(&spec);
        assert!(result.has_error(ErrorCode::InvalidDomain));
        assert!(result
            .errors
            .iter()
            .any(|e| e.path.as_deref() == Some("series.time_shift")));
    }
}
