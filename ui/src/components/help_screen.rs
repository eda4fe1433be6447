use crate::components::base_popup::PopupBuilder;
use crate::components::common::Msg;
use crate::components::help::{HelpContent, HelpRenderer};
use crate::components::state::ComponentState;
use crate::config::KeyBindingsConfig;
use crate::error::AppResult;
use crate::theme::ThemeManager;
use catalog::locale::keys;
use tuirealm::{
    Component, Event, Frame, MockComponent, NoUserEvent,
    event::{Key, KeyEvent},
    ratatui::layout::{Alignment, Rect},
    ratatui::widgets::Clear,
};

/// Full-screen keyboard reference.
///
/// Shortcuts reflect the configured key bindings and the labels that have
/// a translation follow the active language.
///
/// # Events
///
/// - `KeyEvent::Esc` - Closes the help screen and returns to the site
pub struct HelpScreen {
    theme: ThemeManager,
    bindings: KeyBindingsConfig,
    admin_enabled: bool,
}

impl HelpScreen {
    pub fn new(theme: ThemeManager, bindings: KeyBindingsConfig, admin_enabled: bool) -> Self {
        Self {
            theme,
            bindings,
            admin_enabled,
        }
    }
}

impl MockComponent for HelpScreen {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let help_content =
            HelpContent::from_config(&self.bindings, &self.theme, self.admin_enabled);
        let renderer = HelpRenderer::new(&self.theme);

        let (header_area, left_area, right_area) = renderer.layout_help_screen(area);

        let title = format!("  📖 {}  ", self.theme.t(keys::HELP));
        let block = PopupBuilder::new("Help Screen", &self.theme).create_block_with_title(title);

        let header_para =
            renderer.create_paragraph(renderer.render_header(&help_content), Alignment::Center);

        let (left_content, right_content) = renderer.render_help_content(&help_content);
        let left_para = renderer.create_paragraph(left_content, Alignment::Left);
        let right_para = renderer.create_paragraph(right_content, Alignment::Left);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(header_para, header_area);
        frame.render_widget(left_para, left_area);
        frame.render_widget(right_para, right_area);
    }

    fn query(&self, _attr: tuirealm::Attribute) -> Option<tuirealm::AttrValue> {
        None
    }

    fn attr(&mut self, _attr: tuirealm::Attribute, _value: tuirealm::AttrValue) {}

    fn state(&self) -> tuirealm::State {
        tuirealm::State::None
    }

    fn perform(&mut self, _cmd: tuirealm::command::Cmd) -> tuirealm::command::CmdResult {
        tuirealm::command::CmdResult::None
    }
}

impl Component<Msg, NoUserEvent> for HelpScreen {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => Some(Msg::ToggleHelpScreen),
            _ => None,
        }
    }
}

impl ComponentState for HelpScreen {
    fn mount(&mut self) -> AppResult<()> {
        log::debug!("Mounting HelpScreen");
        Ok(())
    }
}
