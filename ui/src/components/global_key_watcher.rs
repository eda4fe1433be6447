use crate::components::common::{
    AdminActivityMsg, LocaleActivityMsg, Msg, SectionActivityMsg, ThemeActivityMsg,
};
use crate::config::KeyBindingsConfig;
use tui_realm_stdlib::Phantom;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, MockComponent, NoUserEvent};

/// Invisible component subscribed to every event that turns the configured
/// global keys into messages.
///
/// While a text field has focus the watcher is remounted in editing mode and
/// ignores plain characters so typed letters never trigger shortcuts.
#[derive(MockComponent)]
pub struct GlobalKeyWatcher {
    component: Phantom,
    keys: KeyBindingsConfig,
    is_editing: bool,
}

impl GlobalKeyWatcher {
    pub fn new(keys: KeyBindingsConfig, is_editing: bool) -> Self {
        Self {
            component: Phantom::default(),
            keys,
            is_editing,
        }
    }

    fn shortcut(&self, c: char) -> Option<Msg> {
        let keys = &self.keys;
        if c == keys.quit() {
            Some(Msg::AppClose)
        } else if c == keys.help() {
            Some(Msg::ToggleHelpScreen)
        } else if c == keys.theme() {
            Some(Msg::ThemeActivity(ThemeActivityMsg::OpenPicker))
        } else if c == keys.language() {
            Some(Msg::LocaleActivity(LocaleActivityMsg::OpenPicker))
        } else if c == keys.admin() {
            Some(Msg::AdminActivity(AdminActivityMsg::OpenLogin))
        } else if c == keys.next_section() {
            Some(Msg::SectionActivity(SectionActivityMsg::Next))
        } else if c == keys.prev_section() {
            Some(Msg::SectionActivity(SectionActivityMsg::Previous))
        } else {
            None
        }
    }
}

impl Component<Msg, NoUserEvent> for GlobalKeyWatcher {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }) => Some(Msg::AppClose),
            Event::Keyboard(KeyEvent {
                code: Key::Char(c),
                modifiers: KeyModifiers::NONE,
            }) if !self.is_editing => self.shortcut(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(watcher: &mut GlobalKeyWatcher, c: char) -> Option<Msg> {
        watcher.on(Event::Keyboard(KeyEvent::new(
            Key::Char(c),
            KeyModifiers::NONE,
        )))
    }

    #[test]
    fn test_default_bindings() {
        let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default(), false);

        assert_eq!(press(&mut watcher, 'q'), Some(Msg::AppClose));
        assert_eq!(press(&mut watcher, 'h'), Some(Msg::ToggleHelpScreen));
        assert_eq!(
            press(&mut watcher, 't'),
            Some(Msg::ThemeActivity(ThemeActivityMsg::OpenPicker))
        );
        assert_eq!(
            press(&mut watcher, 'l'),
            Some(Msg::LocaleActivity(LocaleActivityMsg::OpenPicker))
        );
        assert_eq!(
            press(&mut watcher, 'a'),
            Some(Msg::AdminActivity(AdminActivityMsg::OpenLogin))
        );
        assert_eq!(
            press(&mut watcher, 'n'),
            Some(Msg::SectionActivity(SectionActivityMsg::Next))
        );
        assert_eq!(press(&mut watcher, 'z'), None);
    }

    #[test]
    fn test_editing_mode_ignores_characters() {
        let mut watcher = GlobalKeyWatcher::new(KeyBindingsConfig::default(), true);

        assert_eq!(press(&mut watcher, 'q'), None);
        assert_eq!(
            watcher.on(Event::Keyboard(KeyEvent::new(
                Key::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Msg::AppClose)
        );
    }
}
