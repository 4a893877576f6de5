#![forbid(unsafe_code)]

pub mod analyze;
pub mod client;
pub mod concepts;
pub mod error;
pub mod guidelines;
pub mod model;
pub mod pipeline;
pub mod project;
pub mod prompt;

pub use analyze::analyze;
pub use client::{ImageGenerationClient, PlaceholderClient};
pub use concepts::{DEFAULT_CONCEPT_COUNT, generate_concepts};
pub use error::{LimnerError, LimnerResult};
pub use guidelines::{FsGuidelineStore, GuidelineName, GuidelineSet, GuidelineStore};
pub use model::{
    Concept, ContentAnalysis, GenerationResult, Mood, Project, ProjectRecord, Prompt, Style, Theme,
};
pub use pipeline::{ConceptSelector, Orchestrator, SelectFirst};
pub use project::ProjectStore;
pub use prompt::compile_prompt;
