//! Digest-sealed persistence for certificates and plain JSON output.
//!
//! A sealed certificate is `<dir>/<id>/certificate.json` plus
//! `<dir>/<id>/certificate.digest`, the SHA-256 of the certificate's
//! canonical JSON. Signing happens outside this crate over that digest.
//!
//! Verification hashes the stored document as read, before it is mapped
//! onto [`ComplianceCertification`], so any edit to the file is detected.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::certificate::ComplianceCertification;
use crate::domain::digest::compute_digest;
use crate::domain::{ComplianceError, Result};
use crate::obs;

const CERTIFICATE_FILE: &str = "certificate.json";
const DIGEST_FILE: &str = "certificate.digest";

/// Canonical SHA-256 digest of a certification.
pub fn certificate_digest(cert: &ComplianceCertification) -> Result<String> {
    compute_digest(&serde_json::to_value(cert)?)
}

/// Persist a certificate and its digest; returns the certificate path.
pub fn write_certificate_artifact(cert: &ComplianceCertification, dir: &Path) -> Result<PathBuf> {
    check_artifact_id(&cert.id)?;
    let cert_dir = dir.join(&cert.id);
    std::fs::create_dir_all(&cert_dir)?;

    let path = cert_dir.join(CERTIFICATE_FILE);
    let json = serde_json::to_vec_pretty(cert)?;
    let digest = certificate_digest(cert)?;

    std::fs::write(&path, &json)?;
    std::fs::write(cert_dir.join(DIGEST_FILE), digest.as_bytes())?;
    Ok(path)
}

/// Artifact ids name a single directory under the artifact root.
fn check_artifact_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\'])
        && !Path::new(id).is_absolute();
    if valid {
        Ok(())
    } else {
        Err(ComplianceError::InvalidArtifactId(id.to_string()))
    }
}

/// Read a sealed certificate and verify it against its stored digest.
pub fn read_certificate_artifact(id: &str, dir: &Path) -> Result<ComplianceCertification> {
    check_artifact_id(id)?;
    let cert_dir = dir.join(id);
    let json = std::fs::read(cert_dir.join(CERTIFICATE_FILE))?;
    let expected = std::fs::read_to_string(cert_dir.join(DIGEST_FILE))?;
    let expected = expected.trim();

    let stored: serde_json::Value = serde_json::from_slice(&json)?;
    let actual = compute_digest(&stored)?;
    if expected != actual {
        obs::emit_digest_mismatch(id, expected, &actual);
        return Err(ComplianceError::DigestMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(serde_json::from_value(stored)?)
}

/// Write any serializable output as pretty JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content)?;
    Ok(())
}
