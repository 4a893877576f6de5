use std::{collections::BTreeMap, fmt, path::PathBuf};

/// The fixed set of brand reference documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineName {
    Colors,
    Typography,
    Photography,
    VisualWorld,
    Style,
    IdeaMapping,
}

impl GuidelineName {
    pub const ALL: [GuidelineName; 6] = [
        GuidelineName::Colors,
        GuidelineName::Typography,
        GuidelineName::Photography,
        GuidelineName::VisualWorld,
        GuidelineName::Style,
        GuidelineName::IdeaMapping,
    ];

    /// Document file name inside a guideline directory.
    pub fn file_name(self) -> &'static str {
        match self {
            GuidelineName::Colors => "colors.md",
            GuidelineName::Typography => "typography.md",
            GuidelineName::Photography => "photography.md",
            GuidelineName::VisualWorld => "visual-world.md",
            GuidelineName::Style => "style.md",
            GuidelineName::IdeaMapping => "idea-mapping.md",
        }
    }
}

impl fmt::Display for GuidelineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Supplies the raw text of one brand reference document.
///
/// A missing or unreadable document is not an error: implementations return
/// an empty string and the affected prompt material degrades to nothing.
pub trait GuidelineStore {
    fn read(&self, name: GuidelineName) -> String;
}

/// Reads guideline documents from a directory on disk.
#[derive(Clone, Debug)]
pub struct FsGuidelineStore {
    root: PathBuf,
}

impl FsGuidelineStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsGuidelineStore { root: root.into() }
    }
}

impl GuidelineStore for FsGuidelineStore {
    fn read(&self, name: GuidelineName) -> String {
        let path = self.root.join(name.file_name());
        match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(guideline = %name, path = %path.display(), error = %e, "guideline unavailable, substituting empty text");
                String::new()
            }
        }
    }
}

/// All six brand documents, loaded once and immutable for the lifetime of a
/// pipeline run.
#[derive(Clone, Debug)]
pub struct GuidelineSet {
    docs: BTreeMap<GuidelineName, String>,
}

impl GuidelineSet {
    pub fn load(store: &dyn GuidelineStore) -> Self {
        let docs = GuidelineName::ALL
            .into_iter()
            .map(|name| (name, store.read(name)))
            .collect();
        GuidelineSet { docs }
    }

    /// An empty set, for callers that run the pipeline without brand documents.
    pub fn empty() -> Self {
        let docs = GuidelineName::ALL
            .into_iter()
            .map(|name| (name, String::new()))
            .collect();
        GuidelineSet { docs }
    }

    pub fn get(&self, name: GuidelineName) -> &str {
        self.docs.get(&name).map(String::as_str).unwrap_or("")
    }

    /// Names of documents that loaded as empty text.
    pub fn missing(&self) -> Vec<GuidelineName> {
        GuidelineName::ALL
            .into_iter()
            .filter(|name| self.get(*name).is_empty())
            .collect()
    }
}
