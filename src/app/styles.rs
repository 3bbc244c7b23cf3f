//! Writing-style presets.
//!
//! The catalogue is fixed at compile time. Session state stores only the preset id; the
//! display name is looked up here when rendering.

/// A named persona/tone applied to generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub id: &'static str,
    pub name: &'static str,
}

pub const WRITING_STYLES: [StylePreset; 5] = [
    StylePreset {
        id: "tim-ferriss",
        name: "Super Writer GPT (Tim Ferriss Style)",
    },
    StylePreset {
        id: "tim-ferriss-james-clear",
        name: "Super Writer GPT (Tim Ferriss Style) + James Clear (20%)",
    },
    StylePreset {
        id: "shane-parrish",
        name: "Insight Writer GPT (Shane Parrish Style)",
    },
    StylePreset {
        id: "mark-manson",
        name: "Brutally Honest GPT (Mark Manson Style)",
    },
    StylePreset {
        id: "david-perell",
        name: "Idea Curator GPT (David Perell Style)",
    },
];

/// Look up a preset by id.
pub fn find_style(id: &str) -> Option<&'static StylePreset> {
    WRITING_STYLES.iter().find(|style| style.id == id)
}

/// Display name for a style id, falling back to the id itself for unknown ids.
pub fn display_name(id: &str) -> &str {
    find_style(id).map(|style| style.name).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_five_unique_ids() {
        let ids: HashSet<&str> = WRITING_STYLES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_find_style() {
        let style = find_style("mark-manson").expect("preset should exist");
        assert_eq!(style.name, "Brutally Honest GPT (Mark Manson Style)");
        assert!(find_style("unknown").is_none());
        assert!(find_style("").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(
            display_name("david-perell"),
            "Idea Curator GPT (David Perell Style)"
        );
        assert_eq!(display_name("custom-style"), "custom-style");
    }
}
