use crate::{
    analyze::analyze,
    client::ImageGenerationClient,
    concepts::{DEFAULT_CONCEPT_COUNT, generate_concepts},
    error::{LimnerError, LimnerResult},
    guidelines::GuidelineSet,
    model::{Concept, Project},
    project::ProjectStore,
    prompt::compile_prompt,
};

/// Picks one concept out of the generated candidates.
///
/// Selection is injected so an interactive picker can replace the automatic
/// policy without the pipeline growing branches.
pub trait ConceptSelector {
    fn select<'a>(&self, concepts: &'a [Concept]) -> LimnerResult<&'a Concept>;
}

/// Current policy: always the first candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectFirst;

impl ConceptSelector for SelectFirst {
    fn select<'a>(&self, concepts: &'a [Concept]) -> LimnerResult<&'a Concept> {
        concepts
            .first()
            .ok_or_else(|| LimnerError::concept("no concepts to select from"))
    }
}

/// Sequences one end-to-end run: analyze, generate concepts, select, compile
/// the prompt, invoke the generation backend, persist the artifacts.
pub struct Orchestrator<'a> {
    guidelines: GuidelineSet,
    client: &'a dyn ImageGenerationClient,
    selector: &'a dyn ConceptSelector,
    store: ProjectStore,
    concept_count: usize,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        guidelines: GuidelineSet,
        client: &'a dyn ImageGenerationClient,
        selector: &'a dyn ConceptSelector,
        store: ProjectStore,
        concept_count: usize,
    ) -> Self {
        for name in guidelines.missing() {
            tracing::debug!(guideline = %name, "brand document unavailable for this run");
        }
        Orchestrator {
            guidelines,
            client,
            selector,
            store,
            concept_count,
        }
    }

    /// Default wiring: first-candidate selection, default concept count.
    pub fn with_defaults(
        guidelines: GuidelineSet,
        client: &'a dyn ImageGenerationClient,
        store: ProjectStore,
    ) -> Self {
        Self::new(guidelines, client, &SelectFirst, store, DEFAULT_CONCEPT_COUNT)
    }

    pub fn guidelines(&self) -> &GuidelineSet {
        &self.guidelines
    }

    /// One single-shot run. Strictly ordered, no retries; any stage failure
    /// propagates to the caller.
    #[tracing::instrument(skip(self, content))]
    pub fn run(&self, content: &str) -> LimnerResult<Project> {
        let analysis = analyze(content);
        let concepts = generate_concepts(&analysis, self.concept_count)?;
        tracing::debug!(count = concepts.len(), theme = %analysis.theme, "generated concepts");

        let selected = self.selector.select(&concepts)?.clone();
        tracing::debug!(index = selected.index, "selected concept");

        let prompt = compile_prompt(&selected);
        let result = self.client.generate(prompt.text())?;

        let path = self.store.create_project()?;
        self.store.save(&path, selected, prompt, result)
    }
}
