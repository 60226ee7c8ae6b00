use chrono::{TimeZone, Utc};
use tempfile::tempdir;
use wcag_core::{
    certificate_digest, read_certificate_artifact, write_certificate_artifact, CertificateRequest,
    ComplianceCertification, ComplianceEngine, ComplianceError, ConformanceLevel,
    CriteriaHierarchy, Evaluation, Severity, WcagVersion,
};

/// Certificate for `target` where the first `passing` required criteria pass.
fn certificate_with(target: ConformanceLevel, passing: usize) -> ComplianceCertification {
    let engine = ComplianceEngine::default();
    let mut evals: Vec<Evaluation> = CriteriaHierarchy::for_version(WcagVersion::V2_1)
        .required(target)
        .iter()
        .take(passing)
        .map(|id| Evaluation::pass(id.as_str()))
        .collect();
    evals.push(Evaluation::fail("9.9.9", Severity::Medium).with_finding("Unlisted check"));
    engine.generate_certificate(
        &evals,
        &CertificateRequest::new("docs.example.org", "R. Reviewer", "Example Cert Co")
            .with_target(target),
        Utc.with_ymd_and_hms(2026, 6, 30, 12, 0, 0).unwrap(),
    )
}

fn sample_certificate() -> ComplianceCertification {
    // 28 of 30 Level A criteria: a non-terminating fractional score.
    certificate_with(ConformanceLevel::A, 28)
}

fn rewrite_stored(path: &std::path::Path, edit: impl FnOnce(&mut serde_json::Value)) {
    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    edit(&mut value);
    std::fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

#[test]
fn sealed_certificate_round_trips() {
    let dir = tempdir().expect("tempdir");
    let cert = sample_certificate();
    assert!(cert.compliance_score.fract() != 0.0);

    let path = write_certificate_artifact(&cert, dir.path()).expect("write");
    assert!(path.ends_with("certificate.json"));

    let stored = std::fs::read_to_string(dir.path().join(&cert.id).join("certificate.digest"))
        .expect("digest file");
    assert_eq!(stored, certificate_digest(&cert).unwrap());

    let loaded = read_certificate_artifact(&cert.id, dir.path()).expect("read");
    assert_eq!(loaded, cert);
}

#[test]
fn every_partial_score_verifies_after_sealing() {
    let dir = tempdir().expect("tempdir");
    let hierarchy = CriteriaHierarchy::for_version(WcagVersion::V2_1);
    for target in ConformanceLevel::ASCENDING {
        for passing in 0..=hierarchy.required(target).len() {
            let cert = certificate_with(target, passing);
            write_certificate_artifact(&cert, dir.path()).expect("write");
            let loaded = read_certificate_artifact(&cert.id, dir.path()).unwrap_or_else(|e| {
                panic!("{target} passing={passing} score={}: {e}", cert.compliance_score)
            });
            assert_eq!(loaded.compliance_score.to_bits(), cert.compliance_score.to_bits());
        }
    }
}

#[test]
fn edited_score_fails_verification() {
    let dir = tempdir().expect("tempdir");
    let cert = sample_certificate();
    let path = write_certificate_artifact(&cert, dir.path()).expect("write");

    rewrite_stored(&path, |v| v["compliance_score"] = serde_json::json!(100.0));

    let err = read_certificate_artifact(&cert.id, dir.path()).unwrap_err();
    assert!(matches!(err, ComplianceError::DigestMismatch { .. }));
}

#[test]
fn edited_level_fails_verification() {
    let dir = tempdir().expect("tempdir");
    let cert = sample_certificate();
    let path = write_certificate_artifact(&cert, dir.path()).expect("write");

    rewrite_stored(&path, |v| v["compliance_level"] = serde_json::json!("AAA"));

    let err = read_certificate_artifact(&cert.id, dir.path()).unwrap_err();
    assert!(matches!(err, ComplianceError::DigestMismatch { .. }));
}

#[test]
fn added_field_fails_verification() {
    let dir = tempdir().expect("tempdir");
    let cert = sample_certificate();
    let path = write_certificate_artifact(&cert, dir.path()).expect("write");

    rewrite_stored(&path, |v| v["endorsed_by"] = serde_json::json!("someone else"));

    let err = read_certificate_artifact(&cert.id, dir.path()).unwrap_err();
    assert!(matches!(err, ComplianceError::DigestMismatch { .. }));
}

#[test]
fn reformatted_file_still_verifies() {
    let dir = tempdir().expect("tempdir");
    let cert = sample_certificate();
    let path = write_certificate_artifact(&cert, dir.path()).expect("write");

    rewrite_stored(&path, |_| {});
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    assert_eq!(read_certificate_artifact(&cert.id, dir.path()).unwrap(), cert);
}

#[test]
fn ids_escaping_the_directory_are_rejected() {
    let dir = tempdir().expect("tempdir");
    for id in ["../x", "a/b", "..", "", "/etc", "a\\b"] {
        let err = read_certificate_artifact(id, dir.path()).unwrap_err();
        assert!(
            matches!(err, ComplianceError::InvalidArtifactId(_)),
            "{id:?}: {err}"
        );
    }
}

#[test]
fn missing_certificate_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = read_certificate_artifact("cert-0000000000000000", dir.path()).unwrap_err();
    assert!(matches!(err, ComplianceError::Io(_)));
}

#[test]
fn digest_ignores_formatting() {
    let cert = sample_certificate();
    let compact: ComplianceCertification =
        serde_json::from_str(&serde_json::to_string(&cert).unwrap()).unwrap();
    assert_eq!(
        certificate_digest(&cert).unwrap(),
        certificate_digest(&compact).unwrap()
    );
}
