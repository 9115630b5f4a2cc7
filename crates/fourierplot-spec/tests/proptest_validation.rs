//! Property-based validation tests using proptest.
//!
//! These tests verify that validation never panics and that budget limits
//! hold for arbitrary inputs, including boundary values.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fourierplot-spec --test proptest_validation
//! ```

use proptest::prelude::*;

use fourierplot_spec::{
    is_valid_plot_id, validate_plot_spec, validate_plot_spec_with_budget, BudgetProfile,
    ErrorCode, PlotSpec, SeriesBudget,
};

proptest! {
    /// Arbitrary numeric fields never panic validation.
    #[test]
    fn validation_never_panics(
        period in any::<f64>(),
        harmonics in any::<i64>(),
        shift in prop::option::of(any::<f64>()),
        start in any::<f64>(),
        end in any::<f64>(),
        samples in any::<usize>(),
        width in any::<u32>(),
        step in any::<f64>(),
    ) {
        let mut spec = PlotSpec::preset("sawtooth").unwrap();
        spec.series.period = period;
        spec.series.harmonics = harmonics;
        spec.series.time_shift = shift;
        spec.domain.start = start;
        spec.domain.end = end;
        spec.domain.samples = samples;
        spec.chart.width = width;
        spec.chart.x_ticks.step = step;
        let _ = validate_plot_spec(&spec);
    }

    /// Sample counts over the budget are always rejected.
    #[test]
    fn samples_over_budget_rejected(extra in 1usize..=usize::MAX - SeriesBudget::DEFAULT_MAX_SAMPLES) {
        let mut spec = PlotSpec::preset("square").unwrap();
        spec.domain.samples = SeriesBudget::DEFAULT_MAX_SAMPLES + extra;
        prop_assert!(validate_plot_spec(&spec).has_error(ErrorCode::BudgetExceeded));
    }

    /// Harmonic counts over the strict budget are rejected by it and
    /// nothing else in the spec changes that.
    #[test]
    fn harmonics_over_strict_budget_rejected(
        harmonics in (BudgetProfile::strict().series.max_harmonics as i64 + 1)..i64::MAX,
    ) {
        let mut spec = PlotSpec::preset("square").unwrap();
        spec.series.harmonics = harmonics;
        let result = validate_plot_spec_with_budget(&spec, &BudgetProfile::strict());
        prop_assert!(result.has_error(ErrorCode::BudgetExceeded));
    }

    /// Valid plot ids match the documented pattern.
    #[test]
    fn valid_plot_ids_pass(prefix in "[a-z]", rest in "[a-z0-9_\\-]{2,63}") {
        let id = format!("{}{}", prefix, rest);
        prop_assert!(is_valid_plot_id(&id), "Expected valid plot_id: '{}'", id);
    }
}
