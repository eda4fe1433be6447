use catalog::{LocaleCode, SelectionChange, ThemeId};

use crate::error::AppError;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Header,
    SectionView,
    ThemePicker,
    LocalePicker,
    AdminLogin,
    AdminDashboard,
    HelpScreen,
    ErrorPopup,
    GlobalKeyWatcher,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    ToggleHelpScreen,
    ThemeActivity(ThemeActivityMsg),
    LocaleActivity(LocaleActivityMsg),
    SectionActivity(SectionActivityMsg),
    AdminActivity(AdminActivityMsg),
    PopupActivity(PopupActivityMsg),
    /// Queued by the selection observer after a theme or language switch.
    SelectionChanged(SelectionChange),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum ThemeActivityMsg {
    OpenPicker,
    ThemeSelected(ThemeId),
    PickerClosed,
}

#[derive(Debug, PartialEq)]
pub enum LocaleActivityMsg {
    OpenPicker,
    LocaleSelected(LocaleCode),
    PickerClosed,
}

#[derive(Debug, PartialEq)]
pub enum SectionActivityMsg {
    Next,
    Previous,
}

#[derive(Debug, PartialEq)]
pub enum AdminActivityMsg {
    OpenLogin,
    SubmitCredentials { email: String, password: String },
    LoginCancelled,
    SignOut,
    DashboardClosed,
}

#[derive(Debug, PartialEq)]
pub enum PopupActivityMsg {
    ShowError(AppError),
    ShowWarning(String),
    CloseError,
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
