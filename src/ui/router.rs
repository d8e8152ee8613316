use tracing::debug;

use crate::error::HarvestError;
use crate::models::{Section, ViewId};

/// Holds the active section; the only state shared across views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    current: Section,
}

impl ViewRouter {
    /// Router starting on the landing section
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(section: Section) -> Self {
        Self { current: section }
    }

    /// Switch to `section`. Always succeeds; navigating to the active section is a no-op.
    pub fn navigate(&mut self, section: Section) {
        if self.current != section {
            debug!("Navigating {} -> {}", self.current, section);
        }
        self.current = section;
    }

    /// Switch to the section named `id`; unknown ids leave the router unchanged
    pub fn navigate_to(&mut self, id: &str) -> Result<(), HarvestError> {
        let section: Section = id.parse()?;
        self.navigate(section);
        Ok(())
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// View for the active section
    pub fn current_view(&self) -> ViewId {
        self.current.view()
    }

    /// Move to the next section in navigation order, wrapping around
    pub fn next(&mut self) {
        self.navigate(self.current.next());
    }

    /// Move to the previous section in navigation order, wrapping around
    pub fn previous(&mut self) {
        self.navigate(self.current.previous());
    }
}
