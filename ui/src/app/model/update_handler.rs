use super::Model;
use crate::components::common::{Msg, PopupActivityMsg};
use crate::error::handle_error;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn handle_update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            // Set redraw
            self.set_redraw(true);

            // Process the message and handle any resulting errors
            let result = match msg {
                Msg::AppClose => {
                    self.shutdown(); // Properly shutdown and terminate
                    None
                }
                Msg::ForceRedraw => None,
                Msg::ToggleHelpScreen => self.update_help(),
                Msg::ThemeActivity(msg) => self.update_theme(msg),
                Msg::LocaleActivity(msg) => self.update_locale(msg),
                Msg::SectionActivity(msg) => self.update_section(msg),
                Msg::AdminActivity(msg) => self.update_admin(msg),
                Msg::PopupActivity(msg) => self.update_popup(msg),
                Msg::SelectionChanged(change) => self.update_selection_changed(change),
                Msg::Error(e) => {
                    log::error!("Error received: {e}");
                    self.update_popup(PopupActivityMsg::ShowError(e))
                }
            };

            if let Some(Msg::Error(e)) = result {
                log::error!("Error from message processing: {e}");
                if let Err(err) = self.mount_error_popup(&e) {
                    log::error!("Failed to mount error popup: {err}");
                    handle_error(e);
                }
                None
            } else {
                result
            }
        } else {
            None
        }
    }
}
