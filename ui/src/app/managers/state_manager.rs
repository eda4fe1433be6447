use crate::components::common::{ComponentId, Msg};
use crate::components::sections::Section;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Browsing,
    HelpScreen,
    ThemePicker,
    LocalePicker,
    AdminLogin,
    AdminDashboard,
}

impl AppState {
    /// Component that owns keyboard focus in this state.
    pub fn focus_component(self) -> ComponentId {
        match self {
            AppState::Browsing => ComponentId::SectionView,
            AppState::HelpScreen => ComponentId::HelpScreen,
            AppState::ThemePicker => ComponentId::ThemePicker,
            AppState::LocalePicker => ComponentId::LocalePicker,
            AppState::AdminLogin => ComponentId::AdminLogin,
            AppState::AdminDashboard => ComponentId::AdminDashboard,
        }
    }

    /// States drawn as a popup over the section pane.
    pub fn is_overlay(self) -> bool {
        !matches!(self, AppState::Browsing)
    }
}

/// Manages application state transitions and UI state
pub struct StateManager {
    pub app_state: AppState,
    pub active_component: ComponentId,
    pub quit: bool,
    pub redraw: bool,
    pub previous_state: Option<AppState>,
    pub current_section: Section,
    /// Set while a text field has focus so plain keys are not read as shortcuts
    pub is_editing: bool,
    pub tx_to_main: Sender<Msg>,
}

impl StateManager {
    /// Create a new StateManager
    pub fn new(tx_to_main: Sender<Msg>) -> Self {
        Self {
            app_state: AppState::Browsing,
            active_component: ComponentId::SectionView,
            quit: false,
            redraw: true,
            previous_state: None,
            current_section: Section::default(),
            is_editing: false,
            tx_to_main,
        }
    }

    /// Change application state
    pub fn set_app_state(&mut self, new_state: AppState) {
        log::debug!("State transition: {:?} -> {:?}", self.app_state, new_state);
        self.app_state = new_state;
        self.redraw = true;
    }

    /// Enter a popup state, remembering where to return.
    ///
    /// Opening one popup from another keeps the original return point, so
    /// closing always lands back on the page rather than on a closed popup.
    pub fn push_state(&mut self, new_state: AppState) {
        if self.app_state != new_state && self.previous_state.is_none() {
            self.previous_state = Some(self.app_state);
        }
        self.set_app_state(new_state);
    }

    /// Leave the current popup state.
    pub fn pop_state(&mut self) -> AppState {
        let state = self.previous_state.take().unwrap_or_default();
        self.set_app_state(state);
        state
    }

    /// Set the active component
    pub fn set_active_component(&mut self, component: ComponentId) {
        self.active_component = component;
        self.redraw = true;
    }

    pub fn set_editing(&mut self, editing: bool) {
        self.is_editing = editing;
    }

    /// Signal application shutdown
    pub fn shutdown(&mut self) {
        self.quit = true;
    }

    /// Check if application should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Check if redraw is needed
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Set redraw flag
    pub fn set_redraw(&mut self, redraw: bool) {
        self.redraw = redraw;
    }

    /// Mark redraw as complete
    pub fn redraw_complete(&mut self) {
        self.redraw = false;
    }
}
