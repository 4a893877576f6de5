use crate::model::{Concept, Prompt};

const SEPARATOR: &str = ", ";

/// Compile one concept into the full image-generation prompt.
///
/// The fragment order is load-bearing: generation backends weight earlier
/// fragments more heavily, so style foundation comes first, then subject and
/// mood, then color/composition treatment, then the negative constraint.
/// Reordering is a breaking change.
pub fn compile_prompt(concept: &Concept) -> Prompt {
    let mut fragments: Vec<String> = Vec::with_capacity(10);

    // Style foundation.
    fragments.push("A photograph in the style of Caravaggio".to_string());
    fragments.push("single-source lighting, dramatic chiaroscuro".to_string());
    fragments.push("deep shadows, subject emerging from darkness".to_string());

    // Subject and mood.
    fragments.push(format!("featuring {}", concept.objects));
    fragments.push(format!("{} atmosphere", concept.mood));

    // Color treatment.
    fragments.push("muted earth tones, desaturated".to_string());
    fragments.push("blacks and warm grays, subtle amber highlights".to_string());

    // Composition.
    fragments.push("generous negative space, intentional framing".to_string());
    fragments.push("film grain texture, museum-quality lighting".to_string());

    // Negative constraint.
    fragments.push(
        "Avoid: modern objects, bright colors, multiple light sources, flat lighting".to_string(),
    );

    Prompt::from_fragments(fragments, SEPARATOR)
}
