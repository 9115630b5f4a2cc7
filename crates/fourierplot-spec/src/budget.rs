//! Resource budgets for validation and sampling.
//!
//! Budget limits bound the work a spec may request so oversized specs are
//! rejected at validation instead of exhausting memory during sampling.
//! The default profile is also the hard ceiling the series backend enforces.

use serde::{Deserialize, Serialize};

/// Series evaluation budget limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBudget {
    /// Maximum number of time samples.
    pub max_samples: usize,
    /// Maximum number of harmonic terms per sample.
    pub max_harmonics: u32,
}

impl Default for SeriesBudget {
    fn default() -> Self {
        Self {
            max_samples: Self::DEFAULT_MAX_SAMPLES,
            max_harmonics: Self::DEFAULT_MAX_HARMONICS,
        }
    }
}

impl SeriesBudget {
    /// Default maximum number of time samples.
    pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

    /// Default maximum number of harmonic terms.
    pub const DEFAULT_MAX_HARMONICS: u32 = 100_000;

    /// Returns true if `samples` fits the budget.
    pub fn allows_samples(&self, samples: usize) -> bool {
        samples <= self.max_samples
    }

    /// Returns true if a signed harmonic count fits the budget.
    /// Negative counts are an empty sum and always fit.
    pub fn allows_harmonics(&self, harmonics: i64) -> bool {
        harmonics <= self.max_harmonics as i64
    }
}

/// A named set of budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProfile {
    /// Profile name.
    pub name: String,
    /// Series evaluation limits.
    pub series: SeriesBudget,
}

impl Default for BudgetProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            series: SeriesBudget::default(),
        }
    }
}

impl BudgetProfile {
    /// Profile names accepted by [`BudgetProfile::by_name`].
    pub const NAMES: &'static [&'static str] = &["default", "strict"];

    /// Creates a profile with default limits and a custom name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Tighter limits for quick previews and CI.
    pub fn strict() -> Self {
        Self {
            name: "strict".to_string(),
            series: SeriesBudget {
                max_samples: 100_000,
                max_harmonics: 10_000,
            },
        }
    }

    /// Looks up a profile by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "strict" => Some(Self::strict()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = BudgetProfile::default();
        assert_eq!(profile.name, "default");
        assert_eq!(profile.series.max_samples, SeriesBudget::DEFAULT_MAX_SAMPLES);
        assert_eq!(profile.series.max_harmonics, SeriesBudget::DEFAULT_MAX_HARMONICS);
    }

    #[test]
    fn test_strict_is_tighter_than_default() {
        let strict = BudgetProfile::strict().series;
        let default = SeriesBudget::default();
        assert!(strict.max_samples < default.max_samples);
        assert!(strict.max_harmonics < default.max_harmonics);
    }

    #[test]
    fn test_by_name() {
        for name in BudgetProfile::NAMES {
            assert_eq!(BudgetProfile::by_name(name).unwrap().name, *name);
        }
        assert!(BudgetProfile::by_name("unlimited").is_none());
    }

    #[test]
    fn test_allows() {
        let budget = SeriesBudget::default();
        assert!(budget.allows_samples(1000));
        assert!(!budget.allows_samples(usize::MAX));
        assert!(budget.allows_harmonics(-5));
        assert!(budget.allows_harmonics(60));
        assert!(!budget.allows_harmonics(3_000_000_000));
    }
}
