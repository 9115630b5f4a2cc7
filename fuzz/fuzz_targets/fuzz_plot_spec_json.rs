#![no_main]

use libfuzzer_sys::fuzz_target;

use fourierplot_backend_series::sample_waveform;
use fourierplot_spec::validation::validate_plot_spec;
use fourierplot_spec::PlotSpec;

// Tighter than the default budget so each iteration stays fast.
const MAX_FUZZ_SAMPLES: usize = 4096;
const MAX_FUZZ_HARMONICS: i64 = 512;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = serde_json::from_str::<PlotSpec>(text) else {
        return;
    };

    if !validate_plot_spec(&spec).is_ok() {
        return;
    }
    if spec.domain.samples > MAX_FUZZ_SAMPLES || spec.series.harmonics > MAX_FUZZ_HARMONICS {
        return;
    }

    // A validated spec must sample cleanly to finite values.
    let wave = match sample_waveform(&spec.series, &spec.domain) {
        Ok(wave) => wave,
        Err(e) => panic!("validated spec failed to sample: {}", e),
    };
    assert_eq!(wave.times.len(), spec.domain.samples);
    assert!(wave.amplitudes.iter().all(|y| y.is_finite()));

    // Canonical re-serialization must parse back.
    if let Ok(json) = spec.to_json() {
        let _ = serde_json::from_str::<PlotSpec>(&json);
    }
});
