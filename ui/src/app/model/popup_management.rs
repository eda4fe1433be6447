use super::{AppState, Model};
use crate::components::admin_dashboard::AdminDashboard;
use crate::components::admin_login::AdminLogin;
use crate::components::common::{ComponentId, Msg};
use crate::components::error_popup::ErrorPopup;
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::help_screen::HelpScreen;
use crate::components::locale_picker::LocalePicker;
use crate::components::state::{ComponentState, ComponentStateMount};
use crate::components::theme_picker::ThemePicker;
use crate::error::{AppError, AppResult};
use crate::services::AdminSession;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Component, MockComponent, NoUserEvent, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    /// Mount error popup and give focus to it
    pub fn mount_error_popup(&mut self, error: &AppError) -> AppResult<()> {
        log::error!("Displaying error popup: {error}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::new(error, self.theme.clone()),
            Vec::default(),
        )?;

        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.set_redraw(true);

        Ok(())
    }

    /// Mount the popup in its warning style
    pub fn mount_warning_popup(&mut self, message: &str) -> AppResult<()> {
        log::warn!("Displaying warning popup: {message}");

        self.app.remount_with_state(
            ComponentId::ErrorPopup,
            ErrorPopup::warning(message, self.theme.clone()),
            Vec::default(),
        )?;

        self.app
            .active(&ComponentId::ErrorPopup)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.set_redraw(true);

        Ok(())
    }

    /// Unmount error popup and return focus to previous component
    pub fn unmount_error_popup(&mut self) -> AppResult<()> {
        if self.app.mounted(&ComponentId::ErrorPopup) {
            self.app
                .umount(&ComponentId::ErrorPopup)
                .map_err(|e| AppError::Component(e.to_string()))?;
        }

        // Return to appropriate state
        self.activate_component_for_current_state()?;
        self.set_redraw(true);
        Ok(())
    }

    pub fn mount_theme_picker(&mut self) -> AppResult<()> {
        let picker = ThemePicker::new(self.theme.clone(), self.keys.up(), self.keys.down());
        self.open_popup(AppState::ThemePicker, picker)
    }

    pub fn unmount_theme_picker(&mut self) -> AppResult<()> {
        self.close_popup(AppState::ThemePicker)
    }

    pub fn mount_locale_picker(&mut self) -> AppResult<()> {
        let picker = LocalePicker::new(self.theme.clone(), self.keys.up(), self.keys.down());
        self.open_popup(AppState::LocalePicker, picker)
    }

    pub fn unmount_locale_picker(&mut self) -> AppResult<()> {
        self.close_popup(AppState::LocalePicker)
    }

    pub fn mount_help_screen(&mut self) -> AppResult<()> {
        let screen = HelpScreen::new(
            self.theme.clone(),
            self.keys.clone(),
            self.authenticator.is_enabled(),
        );
        self.open_popup(AppState::HelpScreen, screen)
    }

    pub fn unmount_help_screen(&mut self) -> AppResult<()> {
        self.close_popup(AppState::HelpScreen)
    }

    /// Mount the sign-in form, optionally after a rejected attempt.
    pub fn mount_admin_login(&mut self, retry: Option<(String, String)>) -> AppResult<()> {
        let form = match retry {
            Some((email, error)) => AdminLogin::with_error(self.theme.clone(), email, error),
            None => AdminLogin::new(self.theme.clone()),
        };
        self.open_popup(AppState::AdminLogin, form)?;

        // Disable global shortcuts while the form has focus
        self.set_editing(true);
        if let Err(e) = self.update_global_key_watcher_editing_state() {
            self.error_reporter
                .report_mount_error("GlobalKeyWatcher", "remount", e);
        }

        Ok(())
    }

    pub fn unmount_admin_login(&mut self) -> AppResult<()> {
        self.close_popup(AppState::AdminLogin)?;

        // Re-enable global shortcuts after the form is gone
        self.set_editing(false);
        if let Err(e) = self.update_global_key_watcher_editing_state() {
            self.error_reporter
                .report_mount_error("GlobalKeyWatcher", "remount", e);
        }

        Ok(())
    }

    pub fn mount_admin_dashboard(&mut self, session: AdminSession) -> AppResult<()> {
        let dashboard = AdminDashboard::new(self.theme.clone(), session, self.keys.sign_out());
        self.open_popup(AppState::AdminDashboard, dashboard)
    }

    pub fn unmount_admin_dashboard(&mut self) -> AppResult<()> {
        self.close_popup(AppState::AdminDashboard)
    }

    /// Update the GlobalKeyWatcher's editing state
    pub fn update_global_key_watcher_editing_state(&mut self) -> AppResult<()> {
        self.app
            .remount(
                ComponentId::GlobalKeyWatcher,
                Box::new(GlobalKeyWatcher::new(
                    self.keys.clone(),
                    self.state_manager.is_editing,
                )),
                vec![Sub::new(SubEventClause::Any, SubClause::Always)],
            )
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }

    /// Mount a popup for `state`, replacing any other open popup.
    fn open_popup<C>(&mut self, state: AppState, component: C) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        let current = self.state_manager.app_state;
        if current.is_overlay() && current != state {
            log::debug!("Replacing {current:?} with {state:?}");
            self.umount_if_mounted(&current.focus_component())?;
        }

        let id = state.focus_component();
        self.app.remount_with_state(id.clone(), component, Vec::default())?;

        self.app
            .active(&id)
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.state_manager.push_state(state);
        self.set_redraw(true);

        Ok(())
    }

    fn close_popup(&mut self, state: AppState) -> AppResult<()> {
        self.umount_if_mounted(&state.focus_component())?;

        // Return to previous state
        if self.state_manager.app_state == state {
            self.state_manager.pop_state();
        }

        // Return to appropriate component based on state
        self.activate_component_for_current_state()?;
        self.set_redraw(true);
        Ok(())
    }

    fn umount_if_mounted(&mut self, id: &ComponentId) -> AppResult<()> {
        if !self.app.mounted(id) {
            log::debug!("{id:?} not mounted, skipping unmount");
            return Ok(());
        }
        self.app
            .umount(id)
            .map_err(|e| AppError::Component(e.to_string()))
    }

    /// Helper method to activate the appropriate component for the current state
    fn activate_component_for_current_state(&mut self) -> AppResult<()> {
        // An open error popup keeps focus until it is dismissed
        if self.app.mounted(&ComponentId::ErrorPopup) {
            self.app
                .active(&ComponentId::ErrorPopup)
                .map_err(|e| AppError::Component(e.to_string()))?;
            return Ok(());
        }

        let id = self.state_manager.app_state.focus_component();
        if !self.app.mounted(&id) {
            // Popup vanished without going through close_popup
            log::warn!("{id:?} is not mounted, returning to the page");
            self.state_manager.previous_state = None;
            self.state_manager.set_app_state(AppState::Browsing);
            return self
                .app
                .active(&ComponentId::SectionView)
                .map_err(|e| AppError::Component(e.to_string()));
        }

        self.app
            .active(&id)
            .map_err(|e| AppError::Component(e.to_string()))
    }
}
