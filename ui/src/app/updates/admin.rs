use crate::app::model::Model;
use crate::components::common::{AdminActivityMsg, Msg};
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_admin(&mut self, msg: AdminActivityMsg) -> Option<Msg> {
        match msg {
            AdminActivityMsg::OpenLogin => self.handle_open_admin(),
            AdminActivityMsg::SubmitCredentials { email, password } => {
                self.handle_submit_credentials(email, password)
            }
            AdminActivityMsg::LoginCancelled => {
                log::debug!("Admin sign-in cancelled");
                self.unmount_admin_login().err().map(Msg::Error)
            }
            AdminActivityMsg::SignOut => self.handle_sign_out(),
            AdminActivityMsg::DashboardClosed => {
                self.unmount_admin_dashboard().err().map(Msg::Error)
            }
        }
    }

    /// A live session goes straight to the dashboard.
    fn handle_open_admin(&mut self) -> Option<Msg> {
        let result = match self.admin_session.clone() {
            Some(session) => self.mount_admin_dashboard(session),
            None => {
                if !self.authenticator.is_enabled() {
                    log::info!("Opening admin sign-in while no credentials are configured");
                }
                self.mount_admin_login(None)
            }
        };
        result.err().map(Msg::Error)
    }

    fn handle_submit_credentials(&mut self, email: String, password: String) -> Option<Msg> {
        match self.authenticator.authenticate(&email, &password) {
            Ok(session) => {
                if let Err(e) = self.unmount_admin_login() {
                    return Some(Msg::Error(e));
                }
                self.admin_session = Some(session.clone());
                self.mount_admin_dashboard(session).err().map(Msg::Error)
            }
            Err(e) => {
                // Keep the form open so the operator can try again
                self.mount_admin_login(Some((email, e.to_string())))
                    .err()
                    .map(Msg::Error)
            }
        }
    }

    fn handle_sign_out(&mut self) -> Option<Msg> {
        if let Some(session) = self.admin_session.take() {
            log::info!("Admin '{}' signed out", session.email);
        }
        self.unmount_admin_dashboard().err().map(Msg::Error)
    }
}
