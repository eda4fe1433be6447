//! Sign-in and sign-out driven through the admin components, with the
//! model's part (checking credentials) played by the authenticator directly.

use catalog::SelectionContext;
use claims::{assert_err_eq, assert_ok};
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, NoUserEvent};
use ui::components::admin_dashboard::AdminDashboard;
use ui::components::admin_login::AdminLogin;
use ui::components::common::{AdminActivityMsg, Msg};
use ui::config::AdminConfig;
use ui::services::{AdminAuthenticator, AuthError, ConfigAdminAuthenticator};
use ui::theme::ThemeManager;

const EMAIL: &str = "host@unitythreads.example";
const PASSWORD: &str = "marigold";

fn theme() -> ThemeManager {
    ThemeManager::new(SelectionContext::builtin().unwrap())
}

fn key(code: Key) -> Event<NoUserEvent> {
    Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Fill in the form and press Enter.
fn submit(form: &mut AdminLogin, email: &str, password: &str) -> Option<Msg> {
    for c in email.chars() {
        form.on(key(Key::Char(c)));
    }
    form.on(key(Key::Tab));
    for c in password.chars() {
        form.on(key(Key::Char(c)));
    }
    form.on(key(Key::Enter))
}

fn credentials(msg: Option<Msg>) -> (String, String) {
    match msg {
        Some(Msg::AdminActivity(AdminActivityMsg::SubmitCredentials { email, password })) => {
            (email, password)
        }
        other => panic!("Expected submitted credentials, got {other:?}"),
    }
}

fn configured() -> ConfigAdminAuthenticator {
    ConfigAdminAuthenticator::from_config(&AdminConfig::new(
        Some(EMAIL.to_string()),
        Some(PASSWORD.to_string()),
    ))
}

#[test]
fn test_sign_in_and_out() {
    let authenticator = configured();

    let mut form = AdminLogin::new(theme());
    let (email, password) = credentials(submit(&mut form, EMAIL, PASSWORD));
    let session = assert_ok!(authenticator.authenticate(&email, &password));
    assert_eq!(session.email, EMAIL);

    let mut dashboard = AdminDashboard::new(theme(), session, 'x');
    assert_eq!(
        dashboard.on(key(Key::Char('x'))),
        Some(Msg::AdminActivity(AdminActivityMsg::SignOut))
    );
}

#[test]
fn test_wrong_password_is_rejected_by_the_authenticator() {
    let authenticator = configured();

    let mut form = AdminLogin::new(theme());
    let (email, password) = credentials(submit(&mut form, EMAIL, "jasmine"));

    assert_err_eq!(
        authenticator.authenticate(&email, &password),
        AuthError::InvalidCredentials
    );
}

#[test]
fn test_sign_in_is_closed_without_configured_credentials() {
    let authenticator = ConfigAdminAuthenticator::from_config(&AdminConfig::default());
    assert!(!authenticator.is_enabled());

    let mut form = AdminLogin::new(theme());
    let (email, password) = credentials(submit(&mut form, EMAIL, PASSWORD));

    assert_err_eq!(authenticator.authenticate(&email, &password), AuthError::Disabled);
}

#[test]
fn test_custom_authenticator_can_be_injected() {
    struct GuestList(Vec<&'static str>);

    impl AdminAuthenticator for GuestList {
        fn authenticate(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<ui::services::AdminSession, AuthError> {
            if self.0.iter().any(|guest| *guest == email) {
                Ok(ui::services::AdminSession::new(email))
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }

        fn is_enabled(&self) -> bool {
            !self.0.is_empty()
        }
    }

    let authenticator: Box<dyn AdminAuthenticator> = Box::new(GuestList(vec![EMAIL]));

    let mut form = AdminLogin::new(theme());
    let (email, password) = credentials(submit(&mut form, EMAIL, "anything"));
    assert_ok!(authenticator.authenticate(&email, &password));
}

#[test]
fn test_email_is_trimmed_before_submit() {
    let mut form = AdminLogin::new(theme());
    let (email, _) = credentials(submit(&mut form, " host@unitythreads.example ", PASSWORD));
    assert_eq!(email, EMAIL);
}
