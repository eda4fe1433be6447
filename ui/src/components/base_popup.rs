use crate::theme::{Palette, ThemeManager};
use tuirealm::ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Common popup styling and layout patterns
#[derive(Debug, Clone, Copy)]
pub struct PopupStyle {
    pub border_color: Color,
    pub title_color: Color,
    pub text_color: Color,
    pub muted_color: Color,
    pub background: Color,
}

impl PopupStyle {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            border_color: palette.primary_accent,
            title_color: palette.title_accent,
            text_color: palette.text_primary,
            muted_color: palette.text_muted,
            background: palette.surface_raised,
        }
    }

    pub fn error(palette: &Palette) -> Self {
        Self {
            border_color: palette.status_error,
            title_color: palette.status_error,
            ..Self::from_palette(palette)
        }
    }

    pub fn warning(palette: &Palette) -> Self {
        Self {
            border_color: palette.status_warning,
            title_color: palette.status_warning,
            ..Self::from_palette(palette)
        }
    }
}

/// Base popup builder for consistent popup creation
pub struct PopupBuilder {
    title: String,
    style: PopupStyle,
    content_lines: Vec<Line<'static>>,
    instructions: Option<String>,
}

impl PopupBuilder {
    pub fn new(title: impl Into<String>, theme: &ThemeManager) -> Self {
        Self::with_style(title, PopupStyle::from_palette(theme.palette()))
    }

    pub fn with_style(title: impl Into<String>, style: PopupStyle) -> Self {
        Self {
            title: title.into(),
            style,
            content_lines: Vec::new(),
            instructions: None,
        }
    }

    pub fn add_text(mut self, text: impl Into<String>) -> Self {
        self.content_lines.push(Line::from(text.into()));
        self
    }

    pub fn add_empty_line(mut self) -> Self {
        self.content_lines.push(Line::from(""));
        self
    }

    pub fn add_line(mut self, spans: Vec<Span<'static>>) -> Self {
        self.content_lines.push(Line::from(spans));
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Create a block widget with custom title (without content)
    pub fn create_block_with_title(self, title: impl Into<String>) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.style.border_color))
            .style(Style::default().bg(self.style.background))
            .title(title.into())
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(self.style.title_color)
                    .add_modifier(Modifier::BOLD),
            )
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let style = self.style;
        let title = format!(" {} ", self.title);

        let mut all_lines = vec![Line::from("")];
        all_lines.extend(self.content_lines);

        if let Some(instructions) = self.instructions {
            all_lines.push(Line::from(""));
            all_lines.push(Line::from(Span::styled(
                instructions,
                Style::default().fg(style.muted_color),
            )));
        }

        let block = PopupBuilder::with_style("", style).create_block_with_title(title);
        let paragraph = Paragraph::new(all_lines)
            .block(block)
            .style(Style::default().fg(style.text_color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

/// Common popup sizing utilities
pub struct PopupLayout;

impl PopupLayout {
    /// Calculate centered popup area with given percentage of screen
    pub fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = (area.width * width_percent) / 100;
        let popup_height = (area.height * height_percent) / 100;
        Self::centered_fixed(area, popup_width, popup_height)
    }

    /// Center a box of fixed size, clamped to the available area
    pub fn centered_fixed(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);

        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Calculate small popup (40% width, 30% height)
    pub fn small(area: Rect) -> Rect {
        Self::centered(area, 40, 30)
    }

    /// Calculate medium popup (60% width, 50% height)
    pub fn medium(area: Rect) -> Rect {
        Self::centered(area, 60, 50)
    }

    /// Calculate large popup (80% width, 70% height)
    pub fn large(area: Rect) -> Rect {
        Self::centered(area, 80, 70)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = PopupLayout::medium(area);

        assert_eq!(popup, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_fixed_popup_is_clamped() {
        let area = Rect::new(2, 1, 30, 8);
        let popup = PopupLayout::centered_fixed(area, 60, 10);

        assert_eq!(popup, Rect::new(2, 1, 30, 8));
    }
}
