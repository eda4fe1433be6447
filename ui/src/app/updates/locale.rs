use crate::app::model::Model;
use crate::components::common::{LocaleActivityMsg, Msg};
use catalog::LocaleCode;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_locale(&mut self, msg: LocaleActivityMsg) -> Option<Msg> {
        match msg {
            LocaleActivityMsg::OpenPicker => self.handle_open_locale_picker(),
            LocaleActivityMsg::LocaleSelected(code) => self.handle_locale_selected(code),
            LocaleActivityMsg::PickerClosed => self.handle_locale_picker_closed(),
        }
    }

    fn handle_open_locale_picker(&mut self) -> Option<Msg> {
        if let Err(e) = self.mount_locale_picker() {
            log::error!("Failed to mount language picker: {e}");
            self.error_reporter.report_simple(e, "UI", "locale_picker");
        }
        None
    }

    fn handle_locale_selected(&mut self, code: LocaleCode) -> Option<Msg> {
        log::info!("Switching to language: {code}");
        self.selection.select_locale(code);

        if let Err(e) = self.unmount_locale_picker() {
            log::error!("Failed to unmount language picker: {e}");
            self.error_reporter.report_simple(e, "Locale", "unmount");
        }
        None
    }

    fn handle_locale_picker_closed(&mut self) -> Option<Msg> {
        log::debug!("Language picker closed");

        if let Err(e) = self.unmount_locale_picker() {
            log::error!("Failed to unmount language picker: {e}");
            self.error_reporter.report_simple(e, "Locale", "close");
        }
        None
    }
}
