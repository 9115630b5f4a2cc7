//! Property-based tests for the partial-sum evaluator using proptest.
//!
//! These tests check the evaluator's quantified properties over random
//! inputs, and that any spec passing validation samples to finite output
//! without panicking.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fourierplot-backend-series --test proptest_series
//! ```

use proptest::prelude::*;

use fourierplot_backend_series::{
    partial_sum, partial_sum_at, sample_waveform, HarmonicSet, SawtoothTerm, SquareTerm,
};
use fourierplot_spec::{validate_plot_spec, PlotSpec, SampleDomain, SeriesParams, WaveformKind};

// ============================================================================
// Strategies
// ============================================================================

fn waveform() -> impl Strategy<Value = WaveformKind> {
    prop_oneof![Just(WaveformKind::Square), Just(WaveformKind::Sawtooth)]
}

fn harmonic_set() -> impl Strategy<Value = HarmonicSet> {
    prop_oneof![
        (0u32..64).prop_map(HarmonicSet::odd),
        (0u32..64).prop_map(HarmonicSet::all),
        prop::collection::vec(0u32..200, 0..16).prop_map(HarmonicSet::explicit),
    ]
}

/// Any f64 half the time, otherwise a moderate value.
fn wild_f64(moderate: std::ops::Range<f64>) -> impl Strategy<Value = f64> {
    prop_oneof![any::<f64>(), moderate]
}

fn wild_spec() -> impl Strategy<Value = PlotSpec> {
    (
        waveform(),
        wild_f64(1e-300..1e3),
        prop_oneof![-10i64..200, any::<i64>()],
        prop::option::of(wild_f64(-10.0..10.0)),
        wild_f64(-1e6..1e6),
        wild_f64(-1e6..1e6),
        prop_oneof![0usize..400, any::<usize>()],
    )
        .prop_map(|(kind, period, harmonics, shift, start, end, samples)| {
            let mut spec = PlotSpec::preset("square").unwrap();
            spec.series.waveform = kind;
            spec.series.period = period;
            spec.series.harmonics = harmonics;
            spec.series.time_shift = shift;
            spec.domain = SampleDomain::new(start, end, samples);
            spec
        })
}

// ============================================================================
// Evaluator properties
// ============================================================================

proptest! {
    /// Output has one amplitude per input time, whatever the harmonics.
    #[test]
    fn output_length_matches_input(
        times in prop::collection::vec(-1e6..1e6f64, 0..200),
        period in 1e-3..1e3f64,
        set in harmonic_set(),
    ) {
        let square = partial_sum(&times, period, &set, &SquareTerm).unwrap();
        let sawtooth = partial_sum(&times, period, &set, &SawtoothTerm).unwrap();
        prop_assert_eq!(square.len(), times.len());
        prop_assert_eq!(sawtooth.len(), times.len());
    }

    /// The sawtooth partial sum repeats every period.
    #[test]
    fn sawtooth_is_periodic(
        t in -50.0..50.0f64,
        period in 0.5..20.0f64,
        n in 1u32..40,
    ) {
        let set = HarmonicSet::all(n);
        let here = partial_sum_at(t, period, &set, &SawtoothTerm).unwrap();
        let next = partial_sum_at(t + period, period, &set, &SawtoothTerm).unwrap();
        prop_assert!((here - next).abs() < 1e-8, "f({}) = {}, f(t + T) = {}", t, here, next);
    }

    /// Without a shift the square partial sum is odd.
    #[test]
    fn unshifted_square_is_odd(
        t in -100.0..100.0f64,
        period in 0.5..20.0f64,
        n in 0u32..60,
    ) {
        let set = HarmonicSet::odd(n);
        let pos = partial_sum_at(t, period, &set, &SquareTerm).unwrap();
        let neg = partial_sum_at(-t, period, &set, &SquareTerm).unwrap();
        prop_assert!((pos + neg).abs() <= 1e-12, "f({}) = {}, f(-t) = {}", t, pos, neg);
    }

    /// Zero or negative harmonic counts give a flat zero output.
    #[test]
    fn non_positive_harmonics_give_zeros(
        kind in waveform(),
        harmonics in i64::MIN..=0,
        period in 1e-3..1e3f64,
        start in -100.0..100.0f64,
        end in -100.0..100.0f64,
        samples in 0usize..300,
    ) {
        let params = SeriesParams::new(kind, period, harmonics);
        let wave = sample_waveform(&params, &SampleDomain::new(start, end, samples)).unwrap();
        prop_assert_eq!(wave.amplitudes.len(), samples);
        prop_assert!(wave.amplitudes.iter().all(|&y| y == 0.0));
    }
}

// ============================================================================
// Spec-driven sampling
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// A spec that validates samples without error and only finite values.
    #[test]
    fn validated_specs_sample_to_finite_output(spec in wild_spec()) {
        if validate_plot_spec(&spec).is_ok() {
            let wave = sample_waveform(&spec.series, &spec.domain);
            prop_assert!(wave.is_ok(), "{:?} for {:?}", wave.as_ref().err(), spec.series);
            let wave = wave.unwrap();
            prop_assert_eq!(wave.len(), spec.domain.samples);
            prop_assert!(wave.amplitudes.iter().all(|y| y.is_finite()));
        }
    }

    /// Sampling never panics, valid spec or not.
    #[test]
    fn sampling_never_panics(spec in wild_spec()) {
        if let Ok(wave) = sample_waveform(&spec.series, &spec.domain) {
            prop_assert!(wave.amplitudes.iter().all(|y| y.is_finite()));
        }
    }
}
