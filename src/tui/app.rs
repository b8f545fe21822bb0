// TUI application state
//
// This module owns which documentation section is visible, the per-section
// scroll and code-block focus, and the retained copy widgets. The section
// selection is the single source of truth for what gets rendered; nothing
// else decides visibility.

use super::clipboard::ClipboardSink;
use super::copy::CopyWidget;
use super::scroll::ScrollState;
use crate::config::Config;
use crate::content::{self, Block, Section};
use crate::theme::Theme;
use std::time::{Duration, Instant};

/// Debounce duration for action keys (Enter, y, c)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Main application state for the TUI
pub struct App {
    /// Currently selected section - mutated only through select()
    section: Section,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current color theme
    pub theme: Theme,

    /// Scroll state per section, indexed by Section::index()
    scroll: Vec<ScrollState>,

    /// Focused code block per section (0 when the section has none)
    focused: Vec<usize>,

    /// Per-listing copy widgets, one per code block per section.
    /// Retained across navigation: leaving a section does not touch them.
    widgets: Vec<Vec<CopyWidget>>,

    /// Whole-section copy actions (log-only feedback), one per section
    section_copy: Vec<CopyWidget>,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self::with_start(Section::default(), Theme::auto())
    }

    /// Build app state from configuration (start section, theme)
    pub fn with_config(config: &Config) -> Self {
        let section = Section::from_name(&config.start_section).unwrap_or_default();
        Self::with_start(section, Theme::by_name(&config.theme))
    }

    fn with_start(section: Section, theme: Theme) -> Self {
        let widgets = Section::ALL
            .iter()
            .map(|s| {
                content::blocks(*s)
                    .iter()
                    .filter_map(|block| match block {
                        Block::Code { source, .. } => Some(CopyWidget::new(*source)),
                        Block::Prose(_) => None,
                    })
                    .collect()
            })
            .collect();

        let section_copy = Section::ALL
            .iter()
            .map(|s| CopyWidget::log_only(content::section_text(*s)))
            .collect();

        Self {
            section,
            should_quit: false,
            theme,
            scroll: vec![ScrollState::new(); Section::ALL.len()],
            focused: vec![0; Section::ALL.len()],
            widgets,
            section_copy,
            last_action_time: None,
        }
    }

    /// Switch to a specific section
    pub fn select(&mut self, section: Section) {
        self.section = section;
    }

    /// The currently selected section
    pub fn current(&self) -> Section {
        self.section
    }

    /// Switch to the next section in tab order
    pub fn next_section(&mut self) {
        self.select(self.section.next());
    }

    /// Switch to the previous section in tab order
    pub fn prev_section(&mut self) {
        self.select(self.section.prev());
    }

    /// Follow the current section's cross-link, if it has one
    pub fn follow_cross_link(&mut self) {
        if let Some(target) = self.section.cross_link() {
            self.select(target);
        }
    }

    /// Scroll state of the current section
    pub fn scroll(&mut self) -> &mut ScrollState {
        &mut self.scroll[self.section.index()]
    }

    /// Number of code blocks in the current section
    pub fn code_block_count(&self) -> usize {
        self.widgets[self.section.index()].len()
    }

    /// Index of the focused code block in the current section,
    /// None when the section has no code blocks
    pub fn focused_block(&self) -> Option<usize> {
        let count = self.code_block_count();
        if count == 0 {
            None
        } else {
            Some(self.focused[self.section.index()].min(count - 1))
        }
    }

    /// Move code-block focus forward (wraps)
    pub fn focus_next_block(&mut self) {
        let count = self.code_block_count();
        if count > 0 {
            let idx = self.section.index();
            self.focused[idx] = (self.focused[idx] + 1) % count;
        }
    }

    /// Move code-block focus backward (wraps)
    pub fn focus_prev_block(&mut self) {
        let count = self.code_block_count();
        if count > 0 {
            let idx = self.section.index();
            self.focused[idx] = (self.focused[idx] + count - 1) % count;
        }
    }

    /// Copy widget for the `code_index`-th code block of `section`
    pub fn widget(&self, section: Section, code_index: usize) -> Option<&CopyWidget> {
        self.widgets[section.index()].get(code_index)
    }

    /// Copy the focused code block (timed confirmation on success)
    pub fn copy_focused(&mut self, clipboard: &mut dyn ClipboardSink) {
        if let Some(block) = self.focused_block() {
            self.widgets[self.section.index()][block].copy(clipboard);
        }
    }

    /// Copy the whole current section as text (diagnostic log only)
    pub fn copy_section(&mut self, clipboard: &mut dyn ClipboardSink) {
        self.section_copy[self.section.index()].copy(clipboard);
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Check if an action should be debounced.
    /// Returns true if the action should be blocked (too soon since last).
    pub fn should_debounce_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::copy::CopyState;
    use super::*;
    use anyhow::anyhow;
    use std::time::Instant;

    struct ScriptedClipboard {
        fail: bool,
        writes: Vec<String>,
    }

    impl ClipboardSink for ScriptedClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                return Err(anyhow!("rejected"));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_initial_selection_is_overview() {
        let app = App::new();
        assert_eq!(app.current(), Section::Overview);
    }

    #[test]
    fn test_select_then_current_for_every_section() {
        let mut app = App::new();
        for section in Section::ALL {
            app.select(section);
            assert_eq!(app.current(), section);
        }
    }

    #[test]
    fn test_reselect_scenario() {
        let mut app = App::new();
        app.select(Section::Deployment);
        assert_eq!(app.current(), Section::Deployment);
        app.select(Section::Overview);
        assert_eq!(app.current(), Section::Overview);
    }

    #[test]
    fn test_unknown_start_section_falls_back_to_default() {
        let mut config = Config::default();
        config.start_section = "release-notes".to_string();
        let app = App::with_config(&config);
        assert_eq!(app.current(), Section::Overview);
    }

    #[test]
    fn test_configured_start_section_is_honored() {
        let mut config = Config::default();
        config.start_section = "dashboard".to_string();
        let app = App::with_config(&config);
        assert_eq!(app.current(), Section::Dashboard);
    }

    #[test]
    fn test_navigation_does_not_touch_copy_state() {
        let mut app = App::new();
        let mut clipboard = ScriptedClipboard {
            fail: false,
            writes: Vec::new(),
        };

        app.select(Section::Code);
        app.copy_focused(&mut clipboard);
        let now = Instant::now();
        let copied = app
            .widget(Section::Code, 0)
            .map(|w| w.state_at(now))
            .unwrap();
        assert_eq!(copied, CopyState::Copied);

        // Navigate away and back: the widget keeps its own state
        app.select(Section::Overview);
        app.select(Section::Code);
        let still = app
            .widget(Section::Code, 0)
            .map(|w| w.state_at(now))
            .unwrap();
        assert_eq!(still, CopyState::Copied);
    }

    #[test]
    fn test_block_focus_wraps_per_section() {
        let mut app = App::new();
        app.select(Section::Code);
        let count = app.code_block_count();
        assert!(count >= 2);

        assert_eq!(app.focused_block(), Some(0));
        for _ in 0..count {
            app.focus_next_block();
        }
        assert_eq!(app.focused_block(), Some(0));
        app.focus_prev_block();
        assert_eq!(app.focused_block(), Some(count - 1));
    }

    #[test]
    fn test_copy_section_uses_log_only_widget() {
        let mut app = App::new();
        let mut clipboard = ScriptedClipboard {
            fail: false,
            writes: Vec::new(),
        };
        app.select(Section::Dashboard);
        app.copy_section(&mut clipboard);
        assert_eq!(clipboard.writes.len(), 1);
        assert!(clipboard.writes[0].contains("SharePointStorageStats_CL"));
    }

    #[test]
    fn test_cross_link_jumps_to_deployment() {
        let mut app = App::new();
        app.follow_cross_link();
        assert_eq!(app.current(), Section::Deployment);

        // Sections without a cross-link keep the selection
        app.select(Section::Dashboard);
        app.follow_cross_link();
        assert_eq!(app.current(), Section::Dashboard);
    }
}
