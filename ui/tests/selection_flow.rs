//! Theme and language switches as the running app performs them: a picker
//! emits the choice, the switch is applied to the shared selection, and the
//! observer queues a redraw message.

use catalog::{LocaleCode, SelectionChange, SelectionContext, ThemeId};
use std::sync::mpsc;
use tuirealm::event::{Key, KeyEvent, KeyModifiers};
use tuirealm::{Component, Event, NoUserEvent};
use ui::components::common::{LocaleActivityMsg, Msg, ThemeActivityMsg};
use ui::components::locale_picker::LocalePicker;
use ui::components::sections::{Section, SectionRenderer};
use ui::components::state::ComponentState;
use ui::components::theme_picker::ThemePicker;
use ui::config::SelectionConfig;
use ui::theme::ThemeManager;

fn key(code: Key) -> Event<NoUserEvent> {
    Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
}

fn observed(selection: &SelectionContext) -> mpsc::Receiver<Msg> {
    let (tx, rx) = mpsc::channel();
    selection.subscribe(move |change| {
        tx.send(Msg::SelectionChanged(change)).unwrap();
    });
    rx
}

fn heading(theme: &ThemeManager, section: Section) -> String {
    let text = SectionRenderer::new(theme).render(section);
    text.lines[0]
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

#[test]
fn test_theme_picker_switch_notifies_once() {
    let selection = SelectionContext::builtin().unwrap();
    let theme = ThemeManager::new(selection.clone());
    let rx = observed(&selection);

    let mut picker = ThemePicker::new(theme.clone(), 'k', 'j');
    picker.mount().unwrap();
    picker.on(key(Key::Down));
    let msg = picker.on(key(Key::Enter));
    assert_eq!(
        msg,
        Some(Msg::ThemeActivity(ThemeActivityMsg::ThemeSelected(
            ThemeId::Asian
        )))
    );

    selection.select_bundle(ThemeId::Asian);
    // Re-selecting the active theme is not a change
    selection.select_bundle(ThemeId::Asian);

    assert_eq!(
        rx.try_iter().collect::<Vec<_>>(),
        vec![Msg::SelectionChanged(SelectionChange::Theme {
            previous: ThemeId::Indian,
            current: ThemeId::Asian,
        })]
    );
    assert_eq!(theme.bundle().colors.primary, "#DC143C");
}

#[test]
fn test_locale_switch_changes_headings() {
    let selection = SelectionContext::builtin().unwrap();
    let theme = ThemeManager::new(selection.clone());
    let rx = observed(&selection);

    let english = heading(&theme, Section::OurStory);

    let mut picker = LocalePicker::new(theme.clone(), 'k', 'j');
    picker.mount().unwrap();
    picker.on(key(Key::Char('j')));
    let Some(Msg::LocaleActivity(LocaleActivityMsg::LocaleSelected(code))) =
        picker.on(key(Key::Enter))
    else {
        panic!("picker should emit a locale");
    };
    assert_eq!(code, LocaleCode::Hi);

    selection.select_locale(code);
    assert_ne!(heading(&theme, Section::OurStory), english);

    // Switching back restores identical output
    selection.select_locale(LocaleCode::En);
    assert_eq!(heading(&theme, Section::OurStory), english);

    assert_eq!(rx.try_iter().count(), 2);
}

#[test]
fn test_configured_selection_falls_back_with_warnings() {
    let selection = SelectionContext::builtin().unwrap();
    let rx = observed(&selection);

    let warnings = SelectionConfig::new(Some("nordic".to_string()), Some("zh-CN".to_string()))
        .with_overrides(None, None)
        .apply(&selection);

    assert_eq!(warnings.len(), 1);
    assert_eq!(selection.active_bundle().id, ThemeId::Indian);
    assert_eq!(selection.active_locale(), LocaleCode::Zh);
    assert_eq!(rx.try_iter().count(), 1);
}

#[test]
fn test_command_line_overrides_configured_theme() {
    let selection = SelectionContext::builtin().unwrap();

    let warnings = SelectionConfig::new(Some("asian".to_string()), None)
        .with_overrides(Some("african"), Some("hi"))
        .apply(&selection);

    assert!(warnings.is_empty());
    assert_eq!(selection.active_bundle().id, ThemeId::African);
    assert_eq!(selection.active_locale(), LocaleCode::Hi);
}
