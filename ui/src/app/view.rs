use crate::app::managers::AppState;
use crate::components::base_popup::PopupLayout;
use crate::components::common::{ComponentId, Msg};
use crate::error::AppError;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::widgets::Clear;
use tuirealm::{Application, Frame, NoUserEvent};

/// Height of the header: two content rows inside a border
pub const HEADER_HEIGHT: u16 = 4;

/// Split the screen into header, section pane and help bar.
pub fn page_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(8), // Section pane
            Constraint::Length(1), // Help bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Area a popup occupies for the given state.
pub fn popup_area(state: AppState, area: Rect) -> Rect {
    match state {
        AppState::ThemePicker => PopupLayout::centered_fixed(area, 64, 12),
        AppState::LocalePicker => PopupLayout::centered_fixed(area, 56, 10),
        AppState::AdminLogin => PopupLayout::centered_fixed(area, 64, 17),
        AppState::HelpScreen | AppState::AdminDashboard => PopupLayout::large(area),
        AppState::Browsing => area,
    }
}

// Render the error popup centered on the screen
pub fn view_error_popup(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
) -> Result<(), AppError> {
    let popup_area = PopupLayout::centered_fixed(f.area(), 64, 12);

    app.view(&ComponentId::ErrorPopup, f, popup_area);

    // Make sure the popup has focus
    app.active(&ComponentId::ErrorPopup)
        .map_err(|e| AppError::Component(e.to_string()))?;

    Ok(())
}

/// Header and section pane, always drawn underneath any popup.
pub fn view_page(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
) {
    app.view(&ComponentId::Header, f, chunks[0]);
    app.view(&ComponentId::SectionView, f, chunks[1]);
}

/// Draw the popup that belongs to `state` over the page.
pub fn view_popup(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    state: AppState,
) -> Result<(), AppError> {
    if !state.is_overlay() {
        return Ok(());
    }

    let id = state.focus_component();
    if !app.mounted(&id) {
        return Err(AppError::State(format!(
            "{id:?} should be open in state {state:?} but is not mounted"
        )));
    }

    let area = popup_area(state, f.area());
    f.render_widget(Clear, area);
    app.view(&id, f, area);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_reserves_header_and_help_bar() {
        let [header, pane, help] = page_layout(Rect::new(0, 0, 100, 40));

        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(help.height, 1);
        assert_eq!(help.y, 39);
        assert_eq!(pane.height, 40 - HEADER_HEIGHT - 1);
    }

    #[test]
    fn test_popups_fit_small_terminals() {
        let small = Rect::new(0, 0, 40, 10);
        for state in [
            AppState::ThemePicker,
            AppState::LocalePicker,
            AppState::AdminLogin,
            AppState::HelpScreen,
            AppState::AdminDashboard,
        ] {
            let area = popup_area(state, small);
            assert!(area.width <= small.width && area.height <= small.height, "{state:?}");
        }
    }
}
