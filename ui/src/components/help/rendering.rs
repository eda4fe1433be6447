use super::content::{HelpContent, HelpSection, Shortcut};
use crate::theme::ThemeManager;
use tuirealm::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph as RatatuiParagraph},
};

/// Utility for rendering help content with consistent styling
pub struct HelpRenderer<'a> {
    theme: &'a ThemeManager,
    key_width: usize,
}

impl<'a> HelpRenderer<'a> {
    pub fn new(theme: &'a ThemeManager) -> Self {
        Self {
            theme,
            key_width: 18,
        }
    }

    /// Render the complete help content split into two columns
    pub fn render_help_content<'c>(&self, content: &'c HelpContent) -> (Text<'c>, Text<'c>) {
        let sections = &content.sections;
        let mid_point = sections.len().div_ceil(2);

        (
            self.render_sections(&sections[..mid_point]),
            self.render_sections(&sections[mid_point..]),
        )
    }

    /// Render header content (instructions and warnings)
    pub fn render_header<'c>(&self, content: &'c HelpContent) -> Text<'c> {
        let mut lines = vec![Line::from(vec![Span::styled(
            content.header_message.as_str(),
            Style::default()
                .fg(self.theme.shortcut_description())
                .add_modifier(Modifier::BOLD),
        )])];

        if let Some(warning) = &content.warning_message {
            lines.push(Line::from(vec![Span::styled(
                warning.as_str(),
                Style::default().fg(self.theme.status_warning()),
            )]));
        }

        Text::from(lines)
    }

    fn render_sections<'c>(&self, sections: &'c [HelpSection]) -> Text<'c> {
        let mut lines = Vec::new();

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("{} {}", section.icon, section.title),
                Style::default()
                    .fg(self.theme.header_accent())
                    .add_modifier(Modifier::BOLD),
            )]));
            lines.push(Line::from(""));

            for shortcut in &section.shortcuts {
                lines.push(self.render_shortcut(shortcut));
            }

            lines.push(Line::from(""));
        }

        Text::from(lines)
    }

    fn render_shortcut<'c>(&self, shortcut: &'c Shortcut) -> Line<'c> {
        let key_text = shortcut.keys.join(" ");

        Line::from(vec![
            Span::styled(
                format!("  {:width$}", key_text, width = self.key_width),
                Style::default()
                    .fg(self.theme.shortcut_key())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                shortcut.description.as_str(),
                Style::default().fg(self.theme.shortcut_description()),
            ),
        ])
    }

    /// Create a styled paragraph with the given text and alignment
    pub fn create_paragraph<'c>(
        &self,
        text: Text<'c>,
        alignment: Alignment,
    ) -> RatatuiParagraph<'c> {
        RatatuiParagraph::new(text)
            .alignment(alignment)
            .block(Block::default())
    }

    /// Split area into header and two content columns
    pub fn layout_help_screen(&self, area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .margin(1)
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        (chunks[0], columns[0], columns[1])
    }
}
