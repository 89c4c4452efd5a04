//! Navigation state
//!
//! Which page is active and whether the sidebar is open. Nothing here is
//! persisted; a fresh [`Navigation`] always starts on the overview with the
//! sidebar visible.

use serde::{Serialize, Serializer};
use std::fmt;

/// Sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavSection {
    Platform,
    Modules,
    Workflows,
}

impl NavSection {
    pub const ALL: [NavSection; 3] = [
        NavSection::Platform,
        NavSection::Modules,
        NavSection::Workflows,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Platform => "Platform",
            NavSection::Modules => "MVP Modules",
            NavSection::Workflows => "Workflows",
        }
    }
}

/// Every page the shell can mount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageId {
    #[default]
    Overview,
    Onboarding,
    Ingestion,
    Audit,
    Enterprise,
    Agentic,
    Autonomous,
    AuditFlow,
    ModelChecker,
    PolicyLibrary,
    FeedLog,
    Reports,
}

impl PageId {
    pub const ALL: [PageId; 12] = [
        PageId::Overview,
        PageId::Onboarding,
        PageId::Ingestion,
        PageId::Audit,
        PageId::Enterprise,
        PageId::Agentic,
        PageId::Autonomous,
        PageId::AuditFlow,
        PageId::ModelChecker,
        PageId::PolicyLibrary,
        PageId::FeedLog,
        PageId::Reports,
    ];

    /// Stable key used by navigation callers
    pub fn key(&self) -> &'static str {
        match self {
            PageId::Overview => "dashboard",
            PageId::Onboarding => "onboarding",
            PageId::Ingestion => "mvp1",
            PageId::Audit => "mvp2",
            PageId::Enterprise => "mvp3",
            PageId::Agentic => "mvp4",
            PageId::Autonomous => "mvp5",
            PageId::AuditFlow => "auditflow",
            PageId::ModelChecker => "modelchecker",
            PageId::PolicyLibrary => "policies",
            PageId::FeedLog => "feed",
            PageId::Reports => "reports",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Overview => "Overview",
            PageId::Onboarding => "Onboarding",
            PageId::Ingestion => "Ingestion & Forecast",
            PageId::Audit => "Audit & Compliance",
            PageId::Enterprise => "Enterprise",
            PageId::Agentic => "Agentic GA",
            PageId::Autonomous => "Autonomous Gov",
            PageId::AuditFlow => "Audit Flow",
            PageId::ModelChecker => "Model Output Checker",
            PageId::PolicyLibrary => "Policy Library",
            PageId::FeedLog => "Regulatory Feed",
            PageId::Reports => "Audit Reports",
        }
    }

    /// Header title
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Overview => "Overview Dashboard",
            PageId::Onboarding => "Onboarding",
            PageId::Ingestion => "MVP1 - Ingestion & Forecast",
            PageId::Audit => "MVP2 - Audit & Compliance",
            PageId::Enterprise => "MVP3 - Enterprise",
            PageId::Agentic => "MVP4 - Agentic GA",
            PageId::Autonomous => "MVP5 - Autonomous Governance",
            PageId::AuditFlow => "Agent Audit Flow",
            PageId::ModelChecker => "Model Output Checker",
            PageId::PolicyLibrary => "Policy Library",
            PageId::FeedLog => "Regulatory Feed",
            PageId::Reports => "Audit Reports",
        }
    }

    pub fn section(&self) -> NavSection {
        match self {
            PageId::Overview | PageId::Onboarding => NavSection::Platform,
            PageId::Ingestion
            | PageId::Audit
            | PageId::Enterprise
            | PageId::Agentic
            | PageId::Autonomous => NavSection::Modules,
            _ => NavSection::Workflows,
        }
    }

    pub fn badge(&self) -> Option<&'static str> {
        match self {
            PageId::Ingestion => Some("MVP1"),
            PageId::Audit => Some("MVP2"),
            PageId::Enterprise => Some("MVP3"),
            PageId::Agentic => Some("MVP4"),
            PageId::Autonomous => Some("MVP5"),
            _ => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    /// Unknown keys render the overview
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or_default()
    }

    /// Pages in a sidebar section, in display order
    pub fn in_section(section: NavSection) -> impl Iterator<Item = PageId> {
        Self::ALL
            .into_iter()
            .filter(move |page| page.section() == section)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for PageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Active page and sidebar visibility
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    active: PageId,
    sidebar_open: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            active: PageId::Overview,
            sidebar_open: true,
        }
    }
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Navigate by key. Unknown keys land on the overview. Returns whether the
    /// active page changed.
    pub fn navigate(&mut self, key: &str) -> bool {
        let target = PageId::from_key(key).unwrap_or_else(|| {
            tracing::debug!(key = %key, "Unknown page key, falling back to overview");
            PageId::Overview
        });
        self.navigate_to(target)
    }

    pub fn navigate_to(&mut self, page: PageId) -> bool {
        if self.active == page {
            return false;
        }
        tracing::debug!(from = %self.active, to = %page, "Navigating");
        self.active = page;
        true
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigation::new();
        assert_eq!(nav.active(), PageId::Overview);
        assert!(nav.sidebar_open());
    }

    #[test]
    fn test_keys_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_key(page.key()), Some(page));
        }
        assert_eq!(PageId::from_key("mvp9"), None);
    }

    #[test]
    fn test_unknown_key_falls_back_to_overview() {
        let mut nav = Navigation::new();
        assert!(nav.navigate("policies"));
        assert_eq!(nav.active(), PageId::PolicyLibrary);

        assert!(nav.navigate("does-not-exist"));
        assert_eq!(nav.active(), PageId::Overview);
    }

    #[test]
    fn test_navigate_is_idempotent() {
        let mut nav = Navigation::new();
        assert!(nav.navigate("mvp2"));
        let once = nav.clone();
        assert!(!nav.navigate("mvp2"));
        assert_eq!(nav, once);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut nav = Navigation::new();
        nav.toggle_sidebar();
        assert!(!nav.sidebar_open());
        nav.toggle_sidebar();
        assert!(nav.sidebar_open());
    }

    #[test]
    fn test_sections_cover_every_page() {
        let total: usize = NavSection::ALL
            .iter()
            .map(|section| PageId::in_section(*section).count())
            .sum();
        assert_eq!(total, PageId::ALL.len());
        assert_eq!(PageId::Autonomous.badge(), Some("MVP5"));
        assert_eq!(PageId::FeedLog.section(), NavSection::Workflows);
    }
}
