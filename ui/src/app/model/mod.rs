use crate::app::managers::StateManager;
use crate::components::common::{ComponentId, Msg};
use crate::config::KeyBindingsConfig;
use crate::error::ErrorReporter;
use crate::services::{AdminAuthenticator, AdminSession};
use crate::theme::ThemeManager;
use catalog::{SelectionContext, SubscriptionId};
use std::sync::mpsc::Receiver;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{TerminalAdapter, TerminalBridge};
use tuirealm::{Application, Update};

pub use crate::app::managers::AppState;

// Submodules
mod initialization;
mod popup_management;
mod state_management;
mod update_handler;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub state_manager: StateManager,
    pub rx_to_main: Receiver<Msg>,

    // Enhanced error reporting system
    pub error_reporter: ErrorReporter,

    /// Shared theme and language selection, also held by every component
    pub selection: SelectionContext,
    pub theme: ThemeManager,
    pub keys: KeyBindingsConfig,

    pub authenticator: Box<dyn AdminAuthenticator>,
    pub admin_session: Option<AdminSession>,

    /// Observer that turns selection switches into redraw messages
    subscription: Option<SubscriptionId>,
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        // Handle messages queued by the selection observer and the error reporter
        while let Ok(msg) = self.rx_to_main.try_recv() {
            let mut msg = Some(msg);
            while msg.is_some() {
                msg = self.update(msg);
            }
        }
    }

    /// Shutdown the application and clean up resources
    pub fn shutdown(&mut self) {
        log::info!("Shutting down application");

        if let Some(id) = self.subscription.take() {
            if !self.selection.unsubscribe(id) {
                log::debug!("Selection observer {id:?} was already removed");
            }
        }

        self.admin_session = None;
        self.state_manager.shutdown();
    }
}

impl<T> Drop for Model<T>
where
    T: TerminalAdapter,
{
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.selection.unsubscribe(id);
        }
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        self.handle_update(msg)
    }
}
