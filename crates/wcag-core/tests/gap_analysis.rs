use wcag_core::{
    ComplianceEngine, ConformanceLevel, CriteriaHierarchy, Effort, Evaluation, GapStatus,
    GuidelineRegistry, Impact, InMemoryRegistry, RemediationPolicy, Severity, WcagVersion,
};

fn passing_except(level: ConformanceLevel, skip: &[&str]) -> Vec<Evaluation> {
    CriteriaHierarchy::for_version(WcagVersion::V2_1)
        .required(level)
        .iter()
        .filter(|id| !skip.contains(&id.as_str()))
        .map(|id| Evaluation::pass(id.as_str()))
        .collect()
}

#[test]
fn single_critical_failure_against_aa() {
    let engine = ComplianceEngine::default();
    let evals = vec![Evaluation::fail("1.1.1", Severity::Critical)];

    let gaps = engine.find_gaps(&evals, ConformanceLevel::AA);

    // Everything else at AA is untested and therefore also a gap.
    assert_eq!(gaps.len(), 50);
    let matching: Vec<_> = gaps.iter().filter(|g| g.criterion_id == "1.1.1").collect();
    assert_eq!(matching.len(), 1);
    let gap = matching[0];
    assert_eq!(gap.impact, Impact::Critical);
    assert_eq!(gap.current_status, GapStatus::Fail);
    assert_eq!(gap.required_for_level, ConformanceLevel::AA);
    assert_eq!(gaps[0].criterion_id, "1.1.1");
}

#[test]
fn full_aa_coverage_has_no_aa_gaps() {
    let engine = ComplianceEngine::default();
    let evals = passing_except(ConformanceLevel::AA, &[]);
    assert!(engine.find_gaps(&evals, ConformanceLevel::AA).is_empty());
    assert!(!engine.find_gaps(&evals, ConformanceLevel::AAA).is_empty());
}

#[test]
fn untested_criterion_is_a_gap() {
    let engine = ComplianceEngine::default();
    let evals = passing_except(ConformanceLevel::A, &["2.4.4"]);

    let gaps = engine.find_gaps(&evals, ConformanceLevel::A);

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].criterion_id, "2.4.4");
    assert_eq!(gaps[0].current_status, GapStatus::NotTested);
    assert_eq!(gaps[0].impact, Impact::Low);
    assert_eq!(gaps[0].effort, Effort::Minimal);
    assert_eq!(gaps[0].priority, 6);
}

#[test]
fn twelve_failures_resolve_to_extensive_effort() {
    let engine = ComplianceEngine::default();
    let mut evals = passing_except(ConformanceLevel::AA, &["1.4.11"]);
    for _ in 0..12 {
        evals.push(Evaluation::fail("1.4.11", Severity::Medium));
    }

    let gaps = engine.find_gaps(&evals, ConformanceLevel::AA);

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].effort, Effort::Extensive);
    assert_eq!(gaps[0].impact, Impact::Medium);
    assert_eq!(gaps[0].priority, 5);
}

#[test]
fn fixed_sets_override_derived_values() {
    let engine = ComplianceEngine::default();
    let mut evals = passing_except(ConformanceLevel::AA, &["2.4.2", "1.2.5"]);
    // 2.4.2 is fixed high impact and fixed minimal effort despite many low failures.
    for _ in 0..8 {
        evals.push(Evaluation::fail("2.4.2", Severity::Low));
    }
    // 1.2.5 is fixed extensive effort despite a single failure.
    evals.push(Evaluation::fail("1.2.5", Severity::Critical));

    let gaps = engine.find_gaps(&evals, ConformanceLevel::AA);

    let title = gaps.iter().find(|g| g.criterion_id == "2.4.2").unwrap();
    assert_eq!(title.impact, Impact::High);
    assert_eq!(title.effort, Effort::Minimal);
    assert_eq!(title.priority, 10);

    let audio = gaps.iter().find(|g| g.criterion_id == "1.2.5").unwrap();
    assert_eq!(audio.impact, Impact::High);
    assert_eq!(audio.effort, Effort::Extensive);
    assert_eq!(audio.priority, 7);

    assert_eq!(gaps[0].criterion_id, "2.4.2");
}

#[test]
fn needs_review_only_is_not_a_gap() {
    let engine = ComplianceEngine::default();
    let mut evals = passing_except(ConformanceLevel::A, &["1.3.3"]);
    evals.push(Evaluation::new("1.3.3", wcag_core::EvaluationStatus::NeedsReview));
    assert!(engine.find_gaps(&evals, ConformanceLevel::A).is_empty());
}

#[test]
fn gaps_are_sorted_by_descending_priority() {
    let engine = ComplianceEngine::default();
    let mut evals = passing_except(ConformanceLevel::AA, &["1.4.3", "1.4.4", "1.4.10", "4.1.2"]);
    evals.push(Evaluation::fail("1.4.4", Severity::Low));
    evals.push(Evaluation::fail("1.4.10", Severity::Medium));
    evals.push(Evaluation::fail("1.4.10", Severity::Medium));
    evals.push(Evaluation::fail("4.1.2", Severity::High));

    let gaps = engine.find_gaps(&evals, ConformanceLevel::AA);
    let priorities: Vec<u32> = gaps.iter().map(|g| g.priority).collect();

    assert!(priorities.windows(2).all(|w| w[0] >= w[1]), "{priorities:?}");
    assert_eq!(gaps[0].criterion_id, "4.1.2");
    assert_eq!(gaps[1].criterion_id, "1.4.3");
    assert_eq!(gaps.last().unwrap().criterion_id, "1.4.4");
}

#[test]
fn recommendations_merge_registry_and_evaluations_without_duplicates() {
    let engine = ComplianceEngine::default();
    let mut evals = passing_except(ConformanceLevel::AA, &["1.4.3"]);
    evals.push(
        Evaluation::fail("1.4.3", Severity::High)
            .with_finding("Body text #777 on #fff is 4.48:1")
            .with_recommendation("Darken body text to #767676"),
    );
    evals.push(
        Evaluation::fail("1.4.3", Severity::Medium)
            .with_recommendation("Darken body text to #767676")
            .with_recommendation("Increase placeholder contrast"),
    );

    let gaps = engine.find_gaps(&evals, ConformanceLevel::AA);
    let gap = &gaps[0];

    let registry = InMemoryRegistry::builtin(WcagVersion::V2_1);
    let summary = &registry.lookup("1.4.3").unwrap().success_criteria[0];
    assert_eq!(
        gap.recommendations,
        vec![
            summary.clone(),
            "Darken body text to #767676".to_string(),
            "Increase placeholder contrast".to_string(),
        ]
    );
    assert_eq!(gap.title.as_deref(), Some("Contrast (Minimum)"));
    assert!(gap
        .resources
        .contains(&"https://webaim.org/resources/contrastchecker/".to_string()));
}

#[test]
fn unknown_registry_entry_degrades_gracefully() {
    let hierarchy = CriteriaHierarchy::from_levels(
        WcagVersion::V2_1,
        vec!["7.1.1".to_string()],
        vec!["7.1.1".to_string()],
        vec!["7.1.1".to_string()],
    )
    .unwrap();
    let registry = InMemoryRegistry::default();
    let evals = vec![Evaluation::fail("7.1.1", Severity::Medium).with_recommendation("Fix it")];

    let gaps = wcag_core::find_gaps(
        &hierarchy,
        &registry,
        &RemediationPolicy::default(),
        &evals,
        ConformanceLevel::A,
    );

    assert_eq!(gaps.len(), 1);
    assert!(gaps[0].title.is_none());
    assert_eq!(gaps[0].recommendations, vec!["Fix it".to_string()]);
    assert!(!gaps[0].resources.is_empty());
}

#[test]
fn empty_input_reports_every_required_criterion_as_not_tested() {
    let engine = ComplianceEngine::default();
    let gaps = engine.find_gaps(&[], ConformanceLevel::AAA);
    assert_eq!(gaps.len(), 78);
    assert!(gaps.iter().all(|g| g.current_status == GapStatus::NotTested));
}
