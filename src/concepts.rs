use crate::{
    error::{LimnerError, LimnerResult},
    model::{Concept, ContentAnalysis},
};

/// Default number of concept candidates per run.
pub const DEFAULT_CONCEPT_COUNT: usize = 3;

/// Expand one analysis into `count` ordered concept candidates.
///
/// Objects cycle through `analysis.objects` by index modulo list length, so a
/// request larger than the object list repeats objects in order. The analyzer
/// guarantees a non-empty object list; this boundary defends it anyway.
pub fn generate_concepts(
    analysis: &ContentAnalysis,
    count: usize,
) -> LimnerResult<Vec<Concept>> {
    if analysis.objects.is_empty() {
        return Err(LimnerError::concept(
            "analysis has no candidate objects to cycle through",
        ));
    }
    if count == 0 {
        return Err(LimnerError::concept("concept count must be at least 1"));
    }

    let concepts = (0..count)
        .map(|i| {
            let objects = analysis.objects[i % analysis.objects.len()].clone();
            Concept {
                index: i + 1,
                description: format!(
                    "A {} scene featuring {}, in {} style with dramatic lighting",
                    analysis.mood, objects, analysis.style
                ),
                objects,
                mood: analysis.mood,
                style: analysis.style,
            }
        })
        .collect();

    Ok(concepts)
}
