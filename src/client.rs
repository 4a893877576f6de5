use chrono::Utc;

use crate::{error::LimnerResult, model::GenerationResult};

/// Call contract for an image-generation backend.
///
/// The pipeline treats generation as opaque and synchronous: one prompt in,
/// one result out. Backend failures are fatal to the current run and
/// propagate without retry. Production implementations reach a third-party
/// service over the network; the transport is theirs to choose.
pub trait ImageGenerationClient {
    fn generate(&self, prompt: &str) -> LimnerResult<GenerationResult>;
}

/// Stand-in backend that produces no pixels: it echoes the prompt back with a
/// placeholder handle. Keeps the pipeline runnable end to end before a real
/// backend is wired in, and serves as the test double.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderClient;

impl ImageGenerationClient for PlaceholderClient {
    fn generate(&self, prompt: &str) -> LimnerResult<GenerationResult> {
        tracing::info!("placeholder backend: returning stub handle");
        Ok(GenerationResult {
            handle_or_url: "placeholder-image-url.jpg".to_string(),
            prompt: prompt.to_string(),
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_echoes_prompt() {
        let result = PlaceholderClient.generate("a lamp in darkness").unwrap();
        assert_eq!(result.prompt, "a lamp in darkness");
        assert_eq!(result.handle_or_url, "placeholder-image-url.jpg");
    }
}
