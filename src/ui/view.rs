use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};

use crate::models::Section;

/// Request a view hands back to the top-level controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    None,
    Navigate(Section),
    Quit,
}

/// View contract for all TUI views
pub trait View {
    /// Render the view
    fn render(&self, f: &mut Frame, area: Rect);

    /// Get the view status text
    fn status(&self) -> String;

    /// True while the view is collecting free text, so global shortcuts
    /// must not intercept keys
    fn captures_input(&self) -> bool {
        false
    }

    /// Handle view-specific key events
    fn handle_key(&mut self, _key: KeyCode) -> Result<ViewAction> {
        Ok(ViewAction::None) // Default: not handled
    }

    /// Update the view (called every tick)
    fn update(&mut self) -> Result<()> {
        Ok(()) // Default: no update needed
    }
}
