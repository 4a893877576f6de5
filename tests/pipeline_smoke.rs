use limner::{
    GuidelineSet, Orchestrator, PlaceholderClient, ProjectRecord, ProjectStore, analyze,
    compile_prompt, generate_concepts,
};

#[test]
fn end_to_end_run_persists_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let client = PlaceholderClient;
    let orchestrator = Orchestrator::with_defaults(
        GuidelineSet::empty(),
        &client,
        ProjectStore::new(dir.path()),
    );

    let project = orchestrator
        .run("Blog post about recognizing God in daily life")
        .unwrap();

    assert!(project.path.starts_with(dir.path()));
    assert!(project.path.join("concept.json").is_file());
    assert!(project.path.join("prompt.txt").is_file());

    // First-candidate policy over the recognition object list.
    assert_eq!(project.concept.index, 1);
    assert_eq!(project.concept.objects, "open eyes");

    // The backend saw exactly the compiled prompt.
    assert_eq!(project.result.prompt, project.prompt.text());
}

#[test]
fn saved_record_round_trips_the_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let client = PlaceholderClient;
    let orchestrator = Orchestrator::with_defaults(
        GuidelineSet::empty(),
        &client,
        ProjectStore::new(dir.path()),
    );

    let content = "Too busy to notice the quiet";
    let project = orchestrator.run(content).unwrap();

    let analysis = analyze(content);
    let concepts = generate_concepts(&analysis, limner::DEFAULT_CONCEPT_COUNT).unwrap();
    let expected = compile_prompt(&concepts[0]);

    let json = std::fs::read_to_string(project.path.join("concept.json")).unwrap();
    let record: ProjectRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record.prompt.text(), expected.text());
    assert_eq!(record.result.prompt, expected.text());

    let prompt_txt = std::fs::read_to_string(project.path.join("prompt.txt")).unwrap();
    assert_eq!(prompt_txt, expected.text());
}

#[test]
fn backend_failure_propagates_without_a_project() {
    struct FailingClient;

    impl limner::ImageGenerationClient for FailingClient {
        fn generate(&self, _prompt: &str) -> limner::LimnerResult<limner::GenerationResult> {
            Err(limner::LimnerError::generation("backend unavailable"))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let client = FailingClient;
    let orchestrator = Orchestrator::with_defaults(
        GuidelineSet::empty(),
        &client,
        ProjectStore::new(dir.path()),
    );

    let err = orchestrator.run("anything").unwrap_err();
    assert!(err.to_string().contains("generation error:"));

    // The store is only reached after generation succeeds.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn custom_selector_is_honored() {
    struct SelectLast;

    impl limner::ConceptSelector for SelectLast {
        fn select<'a>(
            &self,
            concepts: &'a [limner::Concept],
        ) -> limner::LimnerResult<&'a limner::Concept> {
            concepts
                .last()
                .ok_or_else(|| limner::LimnerError::concept("no concepts"))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let client = PlaceholderClient;
    let selector = SelectLast;
    let orchestrator = Orchestrator::new(
        GuidelineSet::empty(),
        &client,
        &selector,
        ProjectStore::new(dir.path()),
        5,
    );

    let project = orchestrator
        .run("Blog post about recognizing God in daily life")
        .unwrap();

    // Five candidates over a three-object list: the last cycles back to the
    // second object.
    assert_eq!(project.concept.index, 5);
    assert_eq!(project.concept.objects, "light breaking");
}
