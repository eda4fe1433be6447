use super::{AppState, Model};
use crate::app::view::*;
use crate::components::common::ComponentId;
use crate::components::help_bar::HelpBar;
use crate::error::AppResult;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn view(&mut self) -> AppResult<()> {
        let mut view_result: AppResult<()> = Ok(());

        // Extract values before the closure to avoid borrowing issues
        let current_app_state = self.state_manager.app_state;
        let active_component = if self.app.mounted(&ComponentId::ErrorPopup) {
            ComponentId::ErrorPopup
        } else {
            current_app_state.focus_component()
        };

        // Update active component before drawing
        self.set_active_component(active_component.clone());

        let theme = &self.theme;
        let keys = &self.keys;
        let app = &mut self.app;

        let draw_result = self.terminal.draw(|f| {
            let chunks = page_layout(f.area());

            view_page(app, f, &chunks);

            // Apply the popup for the app state, with the error popup on top
            view_result = view_popup(app, f, current_app_state);
            if app.mounted(&ComponentId::ErrorPopup) {
                if let Err(e) = view_error_popup(app, f) {
                    view_result = Err(e);
                }
            }

            HelpBar::new(theme, keys).view_with_active(f, chunks[2], &active_component);
        });

        if let Err(e) = draw_result {
            log::error!("Failed to draw frame: {e}");
        }

        view_result
    }

    /// Set the active component
    pub fn set_active_component(&mut self, component: ComponentId) {
        if self.state_manager.active_component != component {
            self.state_manager.set_active_component(component);
        }
    }

    pub fn set_app_state(&mut self, app_state: AppState) {
        self.state_manager.set_app_state(app_state);
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.state_manager.set_editing(editing);
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.state_manager.set_redraw(redraw);
    }

    pub fn set_quit(&mut self, quit: bool) {
        self.state_manager.quit = quit;
    }
}
