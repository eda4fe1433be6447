use crate::app::model::{AppState, Model};
use crate::components::common::Msg;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_help(&mut self) -> Option<Msg> {
        // Toggle between help screen and previous state
        let result = if self.state_manager.app_state == AppState::HelpScreen {
            self.unmount_help_screen()
        } else {
            self.mount_help_screen()
        };

        if let Err(e) = result {
            self.error_reporter
                .report_mount_error("HelpScreen", "toggle", e);
        }

        self.set_redraw(true);
        None
    }
}
