//! Canonical hashing.
//!
//! A plot spec hash identifies the rendered output: two specs with the same
//! hash produce byte-identical PNGs.

use crate::error::SpecError;
use crate::plot::PlotSpec;

/// Computes the canonical BLAKE3 hash of a plot spec.
///
/// ```text
/// spec_hash = hex(BLAKE3(canonical_json(spec)))
/// ```
///
/// # Example
/// ```
/// use fourierplot_spec::PlotSpec;
/// use fourierplot_spec::hash::canonical_spec_hash;
///
/// let spec = PlotSpec::preset("sawtooth").unwrap();
/// let hash = canonical_spec_hash(&spec).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &PlotSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Serializes a JSON value with lexicographically sorted object keys and no
/// whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    let key = serde_json::Value::String(k.clone()).to_string();
                    format!("{}:{}", key, canonicalize_json(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        // Scalars already have a single compact serde_json form
        scalar => scalar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonicalize_sorts_keys() {
        let value = json!({"b": 1, "a": {"d": [1, 2], "c": "x"}});
        assert_eq!(
            canonicalize_json(&value),
            r#"{"a":{"c":"x","d":[1,2]},"b":1}"#
        );
    }

    #[test]
    fn test_hash_is_stable_for_equal_specs() {
        let a = PlotSpec::preset("square").unwrap();
        let b = PlotSpec::preset("square").unwrap();
        assert_eq!(
            canonical_spec_hash(&a).unwrap(),
            canonical_spec_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_hash_changes_with_harmonics() {
        let a = PlotSpec::preset("square").unwrap();
        let mut b = a.clone();
        b.series.harmonics = 61;
        assert_ne!(
            canonical_spec_hash(&a).unwrap(),
            canonical_spec_hash(&b).unwrap()
        );
    }
}
