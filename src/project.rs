use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{
    error::{LimnerError, LimnerResult},
    model::{Concept, GenerationResult, Project, ProjectRecord, Prompt},
};

const PROJECT_PREFIX: &str = "illustration";
const RECORD_FILE: &str = "concept.json";
const PROMPT_FILE: &str = "prompt.txt";

/// Creates timestamped project directories and writes run artifacts into
/// them. Each run gets a fresh directory; nothing is ever updated in place.
#[derive(Clone, Debug)]
pub struct ProjectStore {
    root: PathBuf,
}

impl ProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProjectStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a new project directory named `illustration-<YYYYmmdd-HHMMSS>`.
    /// Parent directories are created idempotently; an unwritable root is a
    /// persistence error, surfaced as-is.
    pub fn create_project(&self) -> LimnerResult<PathBuf> {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = self.root.join(format!("{PROJECT_PREFIX}-{stamp}"));
        std::fs::create_dir_all(&path).map_err(|e| {
            LimnerError::persistence(format!(
                "failed to create project directory '{}': {e}",
                path.display()
            ))
        })?;
        Ok(path)
    }

    /// Write the structured record (`concept.json`) and the bare prompt
    /// (`prompt.txt`) into an existing project directory.
    pub fn save(
        &self,
        path: &Path,
        concept: Concept,
        prompt: Prompt,
        result: GenerationResult,
    ) -> LimnerResult<Project> {
        let record = ProjectRecord {
            concept,
            prompt,
            result,
        };

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| LimnerError::serde(format!("failed to encode project record: {e}")))?;

        let record_path = path.join(RECORD_FILE);
        std::fs::write(&record_path, json).map_err(|e| {
            LimnerError::persistence(format!(
                "failed to write '{}': {e}",
                record_path.display()
            ))
        })?;

        let prompt_path = path.join(PROMPT_FILE);
        std::fs::write(&prompt_path, record.prompt.text()).map_err(|e| {
            LimnerError::persistence(format!(
                "failed to write '{}': {e}",
                prompt_path.display()
            ))
        })?;

        tracing::info!(project = %path.display(), "saved project artifacts");

        Ok(Project {
            path: path.to_path_buf(),
            concept: record.concept,
            prompt: record.prompt,
            result: record.result,
        })
    }
}
