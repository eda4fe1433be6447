use crate::app::model::Model;
use crate::components::common::{Msg, ThemeActivityMsg};
use catalog::ThemeId;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_theme(&mut self, msg: ThemeActivityMsg) -> Option<Msg> {
        match msg {
            ThemeActivityMsg::OpenPicker => self.handle_open_theme_picker(),
            ThemeActivityMsg::ThemeSelected(id) => self.handle_theme_selected(id),
            ThemeActivityMsg::PickerClosed => self.handle_theme_picker_closed(),
        }
    }

    fn handle_open_theme_picker(&mut self) -> Option<Msg> {
        if let Err(e) = self.mount_theme_picker() {
            log::error!("Failed to mount theme picker: {e}");
            self.error_reporter.report_simple(e, "UI", "theme_picker");
        }
        None
    }

    fn handle_theme_selected(&mut self, id: ThemeId) -> Option<Msg> {
        log::info!("Switching to theme: {id}");

        // Observers queue the redraw; components read the new palette on their next draw
        self.selection.select_bundle(id);

        // Close the theme picker
        if let Err(e) = self.unmount_theme_picker() {
            log::error!("Failed to unmount theme picker: {e}");
            self.error_reporter.report_simple(e, "Theme", "unmount");
        }

        None
    }

    fn handle_theme_picker_closed(&mut self) -> Option<Msg> {
        log::debug!("Theme picker closed");

        if let Err(e) = self.unmount_theme_picker() {
            log::error!("Failed to unmount theme picker: {e}");
            self.error_reporter.report_simple(e, "Theme", "close");
        }
        None
    }
}
