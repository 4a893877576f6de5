use std::{fmt, path::PathBuf};

use chrono::{DateTime, Utc};

/// Coarse content category driving object and mood defaults.
///
/// The set is closed: classification always lands on one of these variants,
/// with [`Theme::General`] as the documented fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Recognition,
    Rest,
    Busyness,
    Faith,
    Prayer,
    General,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Recognition => "recognition",
            Theme::Rest => "rest",
            Theme::Busyness => "busyness",
            Theme::Faith => "faith",
            Theme::Prayer => "prayer",
            Theme::General => "general",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Contemplative,
    Hopeful,
    Urgent,
    Peaceful,
    Dramatic,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Contemplative => "contemplative",
            Mood::Hopeful => "hopeful",
            Mood::Urgent => "urgent",
            Mood::Peaceful => "peaceful",
            Mood::Dramatic => "dramatic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Caravaggio,
    Minimal,
    Textured,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Caravaggio => "caravaggio",
            Style::Minimal => "minimal",
            Style::Textured => "textured",
        }
    }

    /// One-line characterization of the visual style.
    pub fn brief(self) -> &'static str {
        match self {
            Style::Caravaggio => "Single-source lighting, dramatic shadows, timeless objects",
            Style::Minimal => "Clean, simple, generous white space",
            Style::Textured => "Paper grain, fabric, tactile quality",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one piece of content. Derived purely from the input
/// text and fixed lookup tables; `objects` is non-empty by construction.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ContentAnalysis {
    pub theme: Theme,
    pub objects: Vec<String>,
    pub mood: Mood,
    pub style: Style,
}

/// One candidate illustration idea derived from a [`ContentAnalysis`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Concept {
    /// 1-based position among the generated candidates.
    pub index: usize,
    pub description: String,
    pub objects: String,
    pub mood: Mood,
    pub style: Style,
}

/// A compiled image-generation prompt: ordered fragments joined into a single
/// string. Never mutated after compilation; fragment order is a contract with
/// the generation backend.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Prompt {
    fragments: Vec<String>,
    text: String,
}

impl Prompt {
    pub(crate) fn from_fragments(fragments: Vec<String>, separator: &str) -> Self {
        let text = fragments.join(separator);
        Prompt { fragments, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What the generation backend handed back for one prompt.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GenerationResult {
    pub handle_or_url: String,
    pub prompt: String,
    pub generated_at: DateTime<Utc>,
}

/// The serialized artifact record written to `concept.json`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ProjectRecord {
    pub concept: Concept,
    pub prompt: Prompt,
    pub result: GenerationResult,
}

/// One completed pipeline run: the project directory plus everything that was
/// persisted into it. Append-only; never reused across runs.
#[derive(Clone, Debug)]
pub struct Project {
    pub path: PathBuf,
    pub concept: Concept,
    pub prompt: Prompt,
    pub result: GenerationResult,
}
