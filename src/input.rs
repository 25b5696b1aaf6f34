//! Key bindings: translate a key press into an `Action` for the current screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, App};
use crate::core::nav::Page;
use crate::core::portal::AuthView;

const PAGE_STEP: i32 = 10;

pub fn map_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.transition().is_transitioning() {
        return matches!(key.code, KeyCode::Esc).then_some(Action::CancelTransition);
    }
    if app.notice().is_some() {
        return Some(Action::DismissNotice);
    }
    if app.mobile_warning().is_visible() {
        return match key.code {
            KeyCode::Char(' ') => Some(Action::MobileWarningToggle),
            KeyCode::Enter | KeyCode::Esc => Some(Action::MobileWarningConfirm),
            _ => None,
        };
    }
    if app.command().is_some() {
        return match key.code {
            KeyCode::Enter => Some(Action::CommandSubmit),
            KeyCode::Esc => Some(Action::CommandCancel),
            KeyCode::Backspace => Some(Action::CommandBackspace),
            KeyCode::Char(c) => Some(Action::CommandInput(c)),
            _ => None,
        };
    }

    match app.auth() {
        Some(auth) if app.page() == Page::Portal => match auth.view() {
            AuthView::Picker => picker_key(key.code),
            AuthView::Login | AuthView::Signup => form_key(key.code),
        },
        _ => page_key(key.code),
    }
}

fn picker_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::PickerPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::PickerNext),
        KeyCode::Enter => Some(Action::PickerActivate),
        KeyCode::Esc => Some(Action::AuthBack),
        KeyCode::Char('l') | KeyCode::F(2) => Some(Action::ToggleLanguage),
        _ => None,
    }
}

fn form_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Tab | KeyCode::Down => Some(Action::AuthNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::AuthPrevField),
        KeyCode::F(2) => Some(Action::ToggleLanguage),
        KeyCode::Enter => Some(Action::AuthSubmit),
        KeyCode::Esc => Some(Action::AuthBack),
        KeyCode::Backspace => Some(Action::AuthBackspace),
        KeyCode::Char(c) => Some(Action::AuthInput(c)),
        _ => None,
    }
}

fn page_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::MenuPrev),
        KeyCode::Right => Some(Action::MenuNext),
        KeyCode::Tab => Some(Action::MenuNext),
        KeyCode::BackTab => Some(Action::MenuPrev),
        KeyCode::Enter => Some(Action::MenuActivate),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(1)),
        KeyCode::PageUp => Some(Action::Scroll(-PAGE_STEP)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::Scroll(PAGE_STEP)),
        KeyCode::Char(':') => Some(Action::CommandOpen),
        KeyCode::Char('l') | KeyCode::F(2) => Some(Action::ToggleLanguage),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::core::i18n::Language;
    use crate::core::portal::AuthMode;
    use crate::core::storage::MemoryStore;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Box::new(MemoryStore::new()), Language::En, 120)
    }

    #[test]
    fn marketing_keys() {
        let app = app();
        assert_eq!(map_key(&app, press(KeyCode::Right)), Some(Action::MenuNext));
        assert_eq!(map_key(&app, press(KeyCode::Char('l'))), Some(Action::ToggleLanguage));
        assert_eq!(map_key(&app, press(KeyCode::Char(':'))), Some(Action::CommandOpen));
        assert_eq!(map_key(&app, press(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn only_escape_works_during_transition() {
        let mut app = app();
        app.handle(Action::OpenAuth(AuthMode::Login));
        assert_eq!(map_key(&app, press(KeyCode::Char('q'))), None);
        assert_eq!(map_key(&app, press(KeyCode::Esc)), Some(Action::CancelTransition));
    }

    #[test]
    fn command_prompt_captures_letters() {
        let mut app = app();
        app.handle(Action::CommandOpen);
        assert_eq!(map_key(&app, press(KeyCode::Char('q'))), Some(Action::CommandInput('q')));
        assert_eq!(map_key(&app, press(KeyCode::Esc)), Some(Action::CommandCancel));
    }

    #[test]
    fn f2_toggles_language_on_every_portal_view() {
        let mut app = app();
        app.handle(Action::OpenAuth(AuthMode::Login));
        app.advance(Duration::from_secs(5));
        assert_eq!(map_key(&app, press(KeyCode::F(2))), Some(Action::ToggleLanguage));

        app.handle(Action::PickerActivate);
        assert_eq!(app.auth().unwrap().view(), AuthView::Login);
        assert_eq!(map_key(&app, press(KeyCode::Char('l'))), Some(Action::AuthInput('l')));
        let key = map_key(&app, press(KeyCode::F(2))).unwrap();
        assert_eq!(key, Action::ToggleLanguage);

        app.handle(key);
        assert_eq!(app.lang(), Language::Ko);
        assert_eq!(app.auth().unwrap().view(), AuthView::Login);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&app, key), Some(Action::Quit));
    }
}
