//! Canonical JSON and SHA-256 digests for sealed compliance artifacts.
//!
//! Canonical form: integer-valued floats collapse to integers, object keys
//! are sorted by UTF-16 code units, output is compact. NaN and infinities
//! are rejected.

use sha2::{Digest, Sha256};

use super::error::{ComplianceError, Result};

fn sort_keys_utf16(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));

            let mut sorted = serde_json::Map::new();
            for key in keys {
                if let Some(v) = map.get(key) {
                    sorted.insert(key.to_string(), sort_keys_utf16(v));
                }
            }
            serde_json::Value::Object(sorted)
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(sort_keys_utf16).collect())
        }
        other => other.clone(),
    }
}

fn normalize_value(value: &serde_json::Value) -> Result<serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => {
            let mut normalized = serde_json::Map::new();
            for (k, v) in map {
                normalized.insert(k.clone(), normalize_value(v)?);
            }
            Ok(serde_json::Value::Object(normalized))
        }
        serde_json::Value::Array(arr) => Ok(serde_json::Value::Array(
            arr.iter().map(normalize_value).collect::<Result<Vec<_>>>()?,
        )),
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => match n.as_f64() {
            Some(f) if !f.is_finite() => Err(ComplianceError::NonFiniteNumber),
            Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                Ok(serde_json::Value::Number(serde_json::Number::from(f as i64)))
            }
            _ => Ok(serde_json::Value::Number(n.clone())),
        },
        other => Ok(other.clone()),
    }
}

/// Convert a JSON value to canonical form.
pub fn canonical_json(value: &serde_json::Value) -> Result<String> {
    let normalized = normalize_value(value)?;
    Ok(serde_json::to_string(&sort_keys_utf16(&normalized))?)
}

/// SHA-256 hex digest of the canonical form of `value`.
pub fn compute_digest(value: &serde_json::Value) -> Result<String> {
    let canonical = canonical_json(value)?;
    Ok(sha256_hex(canonical.as_bytes()))
}

/// SHA-256 hex digest of raw bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_integer_float() {
        let canonical = canonical_json(&json!({ "score": 100.0 })).unwrap();
        assert_eq!(canonical, r#"{"score":100}"#);
    }

    #[test]
    fn test_canonical_json_fractional_float() {
        let canonical = canonical_json(&json!({ "score": 87.5 })).unwrap();
        assert_eq!(canonical, r#"{"score":87.5}"#);
    }

    #[test]
    fn test_canonical_json_field_order_invariant() {
        let a = json!({ "level": "AA", "id": "cert-1", "nested": { "z": 1, "a": 2 } });
        let b = json!({ "nested": { "a": 2, "z": 1 }, "id": "cert-1", "level": "AA" });
        assert_eq!(canonical_json(&a).unwrap(), canonical_json(&b).unwrap());
    }

    #[test]
    fn test_canonical_json_array_order_preserved() {
        let a = canonical_json(&json!({ "criteria": ["1.1.1", "1.4.3"] })).unwrap();
        let b = canonical_json(&json!({ "criteria": ["1.4.3", "1.1.1"] })).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_compute_digest_shape_and_delta() {
        let d1 = compute_digest(&json!({ "subject": "https://example.org" })).unwrap();
        let d2 = compute_digest(&json!({ "subject": "https://example.com" })).unwrap();
        assert_eq!(d1.len(), 64);
        assert!(d1.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(d1, d2);
    }
}
