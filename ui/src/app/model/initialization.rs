use super::Model;
use crate::app::managers::StateManager;
use crate::components::common::{ComponentId, Msg};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::header::Header;
use crate::components::section_view::SectionView;
use crate::components::sections::Section;
use crate::components::state::ComponentStateMount;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult, ErrorReporter};
use crate::services::AdminAuthenticator;
use crate::theme::ThemeManager;
use catalog::SelectionContext;
use std::sync::mpsc;
use tuirealm::event::NoUserEvent;
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    fn init_app(
        config: &AppConfig,
        theme: &ThemeManager,
    ) -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let keys = config.keys();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.crossterm_input_listener_interval(),
                    config.crossterm_input_listener_retries(),
                )
                .poll_timeout(config.poll_timeout())
                .tick_interval(config.tick_interval()),
        );

        app.mount_with_state(
            ComponentId::Header,
            Header::new(theme.clone(), Section::default()),
            Vec::default(),
        )?;

        app.mount_with_state(
            ComponentId::SectionView,
            SectionView::new(theme.clone(), Section::default(), keys.up(), keys.down()),
            Vec::default(),
        )?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher::new(keys.clone(), false)),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.active(&ComponentId::SectionView)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new(
        config: &AppConfig,
        selection: SelectionContext,
        authenticator: Box<dyn AdminAuthenticator>,
    ) -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();

        // Create error reporter for enhanced error handling
        let error_reporter = ErrorReporter::new(tx_to_main.clone());

        let theme = ThemeManager::new(selection.clone());
        let app = Self::init_app(config, &theme)?;
        let terminal =
            TerminalBridge::init_crossterm().map_err(|e| AppError::Component(e.to_string()))?;

        // Switches happen on this thread, so the message is picked up on the next loop turn
        let observer_tx = tx_to_main.clone();
        let subscription = selection.subscribe(move |change| {
            if let Err(e) = observer_tx.send(Msg::SelectionChanged(change)) {
                log::debug!("Dropped selection change {change:?}: {e}");
            }
        });

        let state_manager = StateManager::new(tx_to_main);

        log::info!(
            "Model initialized with theme '{}' and language '{}'",
            selection.active_bundle().id,
            selection.active_locale()
        );

        Ok(Self {
            app,
            terminal,
            state_manager,
            rx_to_main,
            error_reporter,
            selection,
            theme,
            keys: config.keys().clone(),
            authenticator,
            admin_session: None,
            subscription: Some(subscription),
        })
    }
}
