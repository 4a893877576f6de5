use crate::model::{ContentAnalysis, Mood, Style, Theme};

/// Theme keyword table. Order is a contract: the first theme whose keyword
/// list matches the content wins, so reordering changes tie-breaks.
const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (
        Theme::Recognition,
        // Stem form: matches "recognize", "recognizing", "recognized".
        &["recogniz", "see", "notice", "aware", "attention"],
    ),
    (
        Theme::Rest,
        &["sabbath", "rest", "peace", "stillness", "quiet"],
    ),
    (
        Theme::Busyness,
        &["busy", "distracted", "hurried", "overwhelmed"],
    ),
    (Theme::Faith, &["believe", "trust", "faith", "confidence"]),
    (
        Theme::Prayer,
        &["pray", "prayer", "conversation", "talk with god"],
    ),
];

const URGENT_KEYWORDS: &[&str] = &["urgent", "wake up", "now"];
const PEACEFUL_KEYWORDS: &[&str] = &["peace", "rest", "quiet"];

/// Object phrases per theme, drawn from the brand's visual-world vocabulary.
/// Every theme maps to at least one phrase; the concept generator depends on
/// that.
pub fn theme_objects(theme: Theme) -> &'static [&'static str] {
    match theme {
        Theme::Recognition => &["open eyes", "light breaking", "doorway"],
        Theme::Rest => &["bed", "hammock", "quiet room", "sunset"],
        Theme::Busyness => &["clock", "calendar", "desk chaos", "running figure"],
        Theme::Faith => &["rock", "anchor", "foundation", "hands reaching"],
        Theme::Prayer => &["hands folded", "quiet corner", "morning light"],
        Theme::General => &["lamp", "book", "cup", "window"],
    }
}

/// Classify raw content text into a [`ContentAnalysis`].
///
/// Total over all inputs: unrecognized content falls back to
/// [`Theme::General`] and [`Mood::Contemplative`], and the object list is
/// never empty.
pub fn analyze(content: &str) -> ContentAnalysis {
    let lowered = content.to_lowercase();

    let theme = detect_theme(&lowered);
    let objects = theme_objects(theme)
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mood = determine_mood(&lowered);
    let style = select_style(&lowered);

    tracing::debug!(%theme, %mood, %style, "analyzed content");

    ContentAnalysis {
        theme,
        objects,
        mood,
        style,
    }
}

fn detect_theme(lowered: &str) -> Theme {
    for (theme, keywords) in THEME_KEYWORDS {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            return *theme;
        }
    }
    Theme::General
}

fn determine_mood(lowered: &str) -> Mood {
    // Urgent keywords take priority when both sets match.
    if URGENT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return Mood::Urgent;
    }
    if PEACEFUL_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return Mood::Peaceful;
    }
    Mood::Contemplative
}

// Style selection is a stub today: the brand default. A table-driven
// classifier reading from style.md / idea-mapping.md can slot in here without
// touching callers.
fn select_style(_lowered: &str) -> Style {
    Style::Caravaggio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognition_stem_covers_inflected_forms() {
        for content in [
            "learning to recognize grace",
            "Blog post about recognizing God in daily life",
            "she recognized the voice",
        ] {
            assert_eq!(analyze(content).theme, Theme::Recognition);
        }
    }

    #[test]
    fn recognition_scenario() {
        let a = analyze("Blog post about recognizing God in daily life");
        assert_eq!(a.theme, Theme::Recognition);
        assert_eq!(a.mood, Mood::Contemplative);
        assert_eq!(a.objects[0], "open eyes");
        assert_eq!(a.style, Style::Caravaggio);
    }

    #[test]
    fn urgent_scenario() {
        let a = analyze("Wake up now, it's urgent");
        assert_eq!(a.mood, Mood::Urgent);
    }

    #[test]
    fn empty_content_falls_back() {
        let a = analyze("");
        assert_eq!(a.theme, Theme::General);
        assert_eq!(a.mood, Mood::Contemplative);
        assert_eq!(a.objects, ["lamp", "book", "cup", "window"]);
    }

    #[test]
    fn first_matching_theme_wins() {
        // "busy" (busyness) and "pray" (prayer) both match; busyness sits
        // earlier in the table.
        let a = analyze("Too busy to pray");
        assert_eq!(a.theme, Theme::Busyness);
    }

    #[test]
    fn urgent_beats_peaceful() {
        let a = analyze("Find peace, but do it now");
        assert_eq!(a.mood, Mood::Urgent);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let a = analyze("SABBATH REST");
        assert_eq!(a.theme, Theme::Rest);
        assert_eq!(a.mood, Mood::Peaceful);
    }

    #[test]
    fn every_theme_has_objects() {
        for (theme, _) in THEME_KEYWORDS {
            assert!(!theme_objects(*theme).is_empty());
        }
        assert!(!theme_objects(Theme::General).is_empty());
    }
}
