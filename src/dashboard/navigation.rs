//! Navigation shell: top bar links, sidebar items and the mobile sidebar

use serde::Serialize;

/// Mobile sidebar overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

impl SidebarState {
    pub fn open(self) -> Self {
        Self::Open
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

const TOP_LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Flashcards", "/flashcards"),
    ("Settings", "/settings"),
];

const SIDEBAR_LINKS: [(&str, &str); 4] = [
    ("Home", "/flashcards"),
    ("Library", "/flashcards/library"),
    ("Folder", "/flashcards/folder"),
    ("Notifications", "/flashcards/notifications"),
];

fn links(table: &[(&'static str, &'static str)], path: &str) -> Vec<NavLink> {
    table
        .iter()
        .map(|&(label, href)| NavLink {
            label,
            href,
            active: normalize(path) == href,
        })
        .collect()
}

/// Exact path match; a trailing slash is ignored except for the root
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Links in the header; the one matching `path` is active
pub fn top_nav(path: &str) -> Vec<NavLink> {
    links(&TOP_LINKS, path)
}

/// Dashboard sidebar entries
pub fn sidebar_nav(path: &str) -> Vec<NavLink> {
    links(&SIDEBAR_LINKS, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_state_transitions() {
        let state = SidebarState::default();
        assert!(!state.is_open());
        assert_eq!(state.toggle(), SidebarState::Open);
        assert_eq!(state.toggle().toggle(), SidebarState::Closed);
        assert_eq!(state.open().close(), SidebarState::Closed);
        assert!(state.open().open().is_open());
    }

    #[test]
    fn test_top_nav_active_link() {
        let nav = top_nav("/flashcards");
        let active: Vec<&str> = nav.iter().filter(|l| l.active).map(|l| l.label).collect();
        assert_eq!(active, vec!["Flashcards"]);

        let root = top_nav("/");
        assert!(root[0].active);
        assert!(!root[1].active);
    }

    #[test]
    fn test_nested_path_is_not_active() {
        let nav = top_nav("/flashcards/library");
        assert!(nav.iter().all(|l| !l.active));

        let sidebar = sidebar_nav("/flashcards/library/");
        assert!(sidebar.iter().any(|l| l.label == "Library" && l.active));
    }
}
