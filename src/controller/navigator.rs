use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Leaderboard,
    Updates,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub kind: SectionKind,
}

impl Section {
    #[must_use]
    pub fn new(id: &str, label: &str, kind: SectionKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
        }
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// What the page should show for a given fragment.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    /// Fragment as it should appear in the URL, without the `#`.
    pub fragment: String,
    /// Id of the visible section; `None` when the fragment names no section.
    pub visible: Option<String>,
}

impl NavState {
    #[must_use]
    pub fn is_visible(&self, section_id: &str) -> bool {
        self.visible.as_deref() == Some(section_id)
    }
}

/// Maps URL fragments to section visibility. Exactly one known section is visible
/// at a time; an unknown fragment shows none.
#[derive(Debug, Clone)]
pub struct Navigator {
    sections: Vec<Section>,
    default_section: String,
}

impl Navigator {
    #[must_use]
    pub fn new(sections: Vec<Section>, default_section: &str) -> Self {
        Self {
            sections,
            default_section: default_section.to_string(),
        }
    }

    /// Leaderboard first and default, then updates.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            vec![
                Section::new("leaderboard", "Leaderboard", SectionKind::Leaderboard),
                Section::new("updates", "Updates", SectionKind::Updates),
            ],
            "leaderboard",
        )
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn default_section(&self) -> &str {
        &self.default_section
    }

    /// State for the current fragment, on page load and on every fragment change.
    /// A leading `#` is ignored; an empty fragment means the default section.
    #[must_use]
    pub fn handle_fragment(&self, fragment: &str) -> NavState {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            self.navigate_to(&self.default_section)
        } else {
            self.navigate_to(id)
        }
    }

    /// State after a nav control for `section_id` is clicked. The fragment is
    /// always updated, even when no such section exists.
    #[must_use]
    pub fn navigate_to(&self, section_id: &str) -> NavState {
        NavState {
            fragment: section_id.to_string(),
            visible: self
                .sections
                .iter()
                .find(|s| s.id == section_id)
                .map(|s| s.id.clone()),
        }
    }
}
