pub type LimnerResult<T> = Result<T, LimnerError>;

#[derive(thiserror::Error, Debug)]
pub enum LimnerError {
    #[error("concept error: {0}")]
    Concept(String),

    #[error("generation error: {0}")]
    Generation(String),

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LimnerError {
    pub fn concept(msg: impl Into<String>) -> Self {
        Self::Concept(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
