//! Application root: owns every piece of mutable state and reduces actions
//! and timer expiries into it.

use std::time::Duration;

use tracing::info;

use crate::core::accounts::AccountStore;
use crate::core::catalog::Category;
use crate::core::i18n::{self, Language};
use crate::core::nav::{Anchor, NavTarget, Navigator, Page, ProductId, Scroll};
use crate::core::portal::{
    submit_notice, AuthMode, AuthSurface, AuthView, BackOutcome, Field, MobileWarning,
    SubmitOutcome,
};
use crate::core::storage::KeyValueStore;
use crate::core::timer::{TimerEvent, TimerQueue};
use crate::core::transition::TransitionEmulator;
use crate::pages;

/// Entries of the header menu shown on every marketing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Go(NavTarget),
    OpenAuth(AuthMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(NavTarget),
    OpenAuth(AuthMode),
    ToggleLanguage,
    Scroll(i32),
    MenuNext,
    MenuPrev,
    MenuActivate,
    CommandOpen,
    CommandInput(char),
    CommandBackspace,
    CommandSubmit,
    CommandCancel,
    CancelTransition,
    AuthNextField,
    AuthPrevField,
    AuthInput(char),
    AuthBackspace,
    AuthSubmit,
    AuthBack,
    PickerNext,
    PickerPrev,
    PickerActivate,
    MobileWarningToggle,
    MobileWarningConfirm,
    DismissNotice,
    Resize(u16),
    Quit,
}

pub struct App {
    storage: Box<dyn KeyValueStore>,
    accounts: AccountStore,
    lang: Language,
    nav: Navigator,
    transition: TransitionEmulator,
    requested_mode: AuthMode,
    auth: Option<AuthSurface>,
    mobile_warning: MobileWarning,
    timers: TimerQueue<TimerEvent>,
    viewport_cols: u16,
    menu_cursor: usize,
    command: Option<String>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(storage: Box<dyn KeyValueStore>, lang: Language, viewport_cols: u16) -> Self {
        let accounts = AccountStore::open(storage.as_ref());
        Self {
            storage,
            accounts,
            lang,
            nav: Navigator::new(),
            transition: TransitionEmulator::new(),
            requested_mode: AuthMode::Login,
            auth: None,
            mobile_warning: MobileWarning::default(),
            timers: TimerQueue::new(),
            viewport_cols,
            menu_cursor: 0,
            command: None,
            notice: None,
            should_quit: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn page(&self) -> Page {
        self.nav.page()
    }

    pub fn scroll(&self) -> Scroll {
        self.nav.scroll()
    }

    pub fn accounts(&self) -> &AccountStore {
        &self.accounts
    }

    pub fn transition(&self) -> &TransitionEmulator {
        &self.transition
    }

    pub fn requested_mode(&self) -> AuthMode {
        self.requested_mode
    }

    pub fn auth(&self) -> Option<&AuthSurface> {
        self.auth.as_ref()
    }

    pub fn mobile_warning(&self) -> &MobileWarning {
        &self.mobile_warning
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn menu_items() -> &'static [(MenuItem, MenuLabel)] {
        MENU
    }

    // ── Time ──────────────────────────────────────────────────────────────────

    /// Feeds wall time into the timer queue and handles every expiry.
    pub fn advance(&mut self, elapsed: Duration) {
        self.timers.advance(elapsed);
        while let Some(event) = self.timers.next_due() {
            self.on_timer(event);
        }
    }

    fn on_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::TransitionTick => self.transition.on_tick(&mut self.timers),
            TimerEvent::TransitionComplete => {
                if self.transition.on_complete() {
                    self.enter_portal();
                }
            }
            TimerEvent::ScrollSettle(anchor) => self.nav.on_scroll_settle(anchor),
            TimerEvent::MobileWarning => self.mobile_warning.on_timer(),
        }
    }

    fn enter_portal(&mut self) {
        info!(mode = ?self.requested_mode, "entering portal");
        self.nav.go(Page::Portal);
        self.auth = Some(AuthSurface::open(self.requested_mode, true));
        self.mobile_warning
            .on_portal_enter(self.viewport_cols, self.storage.as_ref(), &mut self.timers);
    }

    fn leave_portal(&mut self) {
        self.auth = None;
        self.mobile_warning.dismiss();
        self.transition.reset();
        self.nav.go(Page::Landing);
    }

    // ── Reducer ───────────────────────────────────────────────────────────────

    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Navigate(target) => self.navigate(target),
            Action::OpenAuth(mode) => self.open_auth(mode),
            Action::ToggleLanguage => self.lang = self.lang.toggled(),
            Action::Scroll(delta) => self.scroll_by(delta),
            Action::MenuNext => self.menu_cursor = (self.menu_cursor + 1) % MENU.len(),
            Action::MenuPrev => self.menu_cursor = (self.menu_cursor + MENU.len() - 1) % MENU.len(),
            Action::MenuActivate => match MENU[self.menu_cursor].0 {
                MenuItem::Go(target) => self.navigate(target),
                MenuItem::OpenAuth(mode) => self.open_auth(mode),
            },
            Action::CommandOpen => self.command = Some(String::new()),
            Action::CommandInput(c) => {
                if let Some(buf) = self.command.as_mut() {
                    buf.push(c);
                }
            }
            Action::CommandBackspace => {
                if let Some(buf) = self.command.as_mut() {
                    buf.pop();
                }
            }
            Action::CommandSubmit => {
                if let Some(buf) = self.command.take() {
                    self.navigate(NavTarget::parse(&buf));
                }
            }
            Action::CommandCancel => self.command = None,
            Action::CancelTransition => self.transition.cancel(),
            Action::AuthNextField => self.with_auth(AuthSurface::focus_next),
            Action::AuthPrevField => self.with_auth(AuthSurface::focus_prev),
            Action::AuthInput(c) => self.with_auth(|a| a.type_char(c)),
            Action::AuthBackspace => self.with_auth(AuthSurface::backspace),
            Action::AuthSubmit => self.auth_submit(),
            Action::AuthBack => self.auth_back(),
            Action::PickerNext => {
                let n = self.accounts.len();
                self.with_auth(|a| a.select_next(n));
            }
            Action::PickerPrev => self.with_auth(AuthSurface::select_prev),
            Action::PickerActivate => self.picker_activate(),
            Action::MobileWarningToggle => self.mobile_warning.toggle_dont_show_again(),
            Action::MobileWarningConfirm => self.mobile_warning.confirm(self.storage.as_mut()),
            Action::DismissNotice => self.notice = None,
            Action::Resize(cols) => self.viewport_cols = cols,
            Action::Quit => self.should_quit = true,
        }
    }

    fn with_auth(&mut self, f: impl FnOnce(&mut AuthSurface)) {
        if let Some(auth) = self.auth.as_mut() {
            f(auth);
        }
    }

    fn navigate(&mut self, target: NavTarget) {
        if target == NavTarget::Page(Page::Portal) {
            self.open_auth(AuthMode::Login);
            return;
        }
        if self.page() == Page::Portal {
            self.leave_portal();
        }
        self.nav.navigate(target, &mut self.timers);
    }

    fn open_auth(&mut self, mode: AuthMode) {
        self.requested_mode = mode;
        self.transition.start(&mut self.timers);
    }

    fn scroll_by(&mut self, delta: i32) {
        let doc = pages::document(self.page(), self.lang);
        let current = doc.offset_for(self.nav.scroll());
        let max = doc.lines.len().saturating_sub(1);
        let next = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            current.saturating_add(delta as usize).min(max)
        };
        self.nav.set_scroll(Scroll::Line(next));
    }

    fn auth_submit(&mut self) {
        let Some(auth) = self.auth.as_mut() else { return };
        if auth.focused() == Some(Field::SwitchLink) {
            auth.toggle_mode();
            return;
        }
        let outcome = auth.submit(&mut self.accounts, self.storage.as_mut());
        if let Some(text) = submit_notice(&outcome, self.lang) {
            self.notice = Some(text);
        }
        if let SubmitOutcome::LoggedIn { back: BackOutcome::Close, .. }
        | SubmitOutcome::SignedUp { back: BackOutcome::Close } = outcome
        {
            self.auth = None;
        }
    }

    fn auth_back(&mut self) {
        let Some(auth) = self.auth.as_mut() else { return };
        match auth.back() {
            BackOutcome::ShowPicker => {}
            BackOutcome::Close => self.auth = None,
            BackOutcome::ExitPortal => self.leave_portal(),
        }
    }

    fn picker_activate(&mut self) {
        let Some(auth) = self.auth.as_mut() else { return };
        if auth.view() != AuthView::Picker {
            return;
        }
        match self.accounts.accounts().get(auth.selected()) {
            Some(account) => self.notice = Some(i18n::accessing_as(self.lang, &account.name)),
            None => auth.switch_mode(AuthMode::Login),
        }
    }
}

/// Label of a header menu entry, resolved per language at render time.
#[derive(Debug, Clone, Copy)]
pub enum MenuLabel {
    Home,
    Features,
    Pricing,
    Category(Category),
    Status,
    Docs,
    Login,
    Signup,
}

impl MenuLabel {
    pub fn text(self, lang: Language) -> &'static str {
        let s = lang.strings();
        match self {
            Self::Home => match lang {
                Language::Ko => "홈",
                Language::En => "Home",
            },
            Self::Features => s.features_title,
            Self::Pricing => s.pricing_title,
            Self::Category(c) => c.label(lang),
            Self::Status => s.nav_status,
            Self::Docs => s.nav_docs,
            Self::Login => s.nav_login,
            Self::Signup => s.nav_signup,
        }
    }
}

static MENU: &[(MenuItem, MenuLabel)] = &[
    (MenuItem::Go(NavTarget::Page(Page::Landing)), MenuLabel::Home),
    (MenuItem::Go(NavTarget::Anchor(Anchor::Features)), MenuLabel::Features),
    (MenuItem::Go(NavTarget::Anchor(Anchor::Pricing)), MenuLabel::Pricing),
    (
        MenuItem::Go(NavTarget::Page(Page::Product(ProductId::CloudCompute))),
        MenuLabel::Category(Category::Computing),
    ),
    (
        MenuItem::Go(NavTarget::Page(Page::Product(ProductId::Hdd))),
        MenuLabel::Category(Category::Storage),
    ),
    (
        MenuItem::Go(NavTarget::Page(Page::Product(ProductId::Firewall))),
        MenuLabel::Category(Category::Network),
    ),
    (MenuItem::Go(NavTarget::Page(Page::Status)), MenuLabel::Status),
    (MenuItem::Go(NavTarget::Page(Page::Docs)), MenuLabel::Docs),
    (MenuItem::OpenAuth(AuthMode::Login), MenuLabel::Login),
    (MenuItem::OpenAuth(AuthMode::Signup), MenuLabel::Signup),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::accounts::Account;
    use crate::core::error::AuthError;
    use crate::core::portal::HIDE_MOBILE_WARNING_KEY;
    use crate::core::storage::{FileStore, MemoryStore};
    use crate::core::transition::TransitionMode;

    const WIDE: u16 = 120;

    fn app() -> App {
        App::new(Box::new(MemoryStore::new()), Language::En, WIDE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(Action::AuthInput(c));
        }
    }

    fn enter_portal(app: &mut App, mode: AuthMode) {
        app.handle(Action::OpenAuth(mode));
        app.advance(Duration::from_secs(5));
        assert_eq!(app.page(), Page::Portal);
    }

    #[test]
    fn opening_auth_lands_on_the_picker_after_the_transition() {
        let mut app = app();
        app.handle(Action::OpenAuth(AuthMode::Signup));
        assert!(app.transition().is_transitioning());
        assert_eq!(app.requested_mode(), AuthMode::Signup);

        app.advance(Duration::from_millis(2_000));
        assert_eq!(app.page(), Page::Landing);
        assert!(app.auth().is_none());

        app.advance(Duration::from_millis(3_000));
        assert_eq!(app.page(), Page::Portal);
        assert_eq!(app.transition().mode(), TransitionMode::Active);
        let auth = app.auth().unwrap();
        assert_eq!(auth.view(), AuthView::Picker);
        assert!(auth.is_fullscreen());
    }

    #[test]
    fn cancelled_transition_never_enters_the_portal() {
        let mut app = app();
        app.handle(Action::OpenAuth(AuthMode::Login));
        app.advance(Duration::from_millis(500));
        app.handle(Action::CancelTransition);
        app.advance(Duration::from_secs(10));

        assert_eq!(app.page(), Page::Landing);
        assert!(app.auth().is_none());
        assert_eq!(app.transition().mode(), TransitionMode::Idle);
    }

    #[test]
    fn signup_from_picker_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStore::open(dir.path()).unwrap();
        let mut app = App::new(Box::new(storage), Language::En, WIDE);
        enter_portal(&mut app, AuthMode::Signup);

        // empty picker: the only row is "add account"
        app.handle(Action::PickerNext);
        app.handle(Action::PickerActivate);
        assert_eq!(app.auth().unwrap().view(), AuthView::Login);

        app.handle(Action::AuthNextField);
        app.handle(Action::AuthNextField);
        app.handle(Action::AuthSubmit);
        assert_eq!(app.auth().unwrap().view(), AuthView::Signup);

        type_text(&mut app, "Ada");
        app.handle(Action::AuthNextField);
        type_text(&mut app, "a@x.com");
        app.handle(Action::AuthNextField);
        type_text(&mut app, "p1");
        app.handle(Action::AuthNextField);
        type_text(&mut app, "p1");
        app.handle(Action::AuthSubmit);

        assert_eq!(app.notice(), Some("Account created successfully"));
        assert_eq!(app.auth().unwrap().view(), AuthView::Picker);
        assert_eq!(app.accounts().len(), 1);

        // cursor is still on "add account", so Enter opens a fresh form
        app.handle(Action::DismissNotice);
        app.handle(Action::PickerActivate);
        assert!(app.notice().is_none());
        assert_eq!(app.auth().unwrap().view(), AuthView::Login);

        let reopened = FileStore::open(dir.path()).unwrap();
        let store = AccountStore::open(&reopened);
        assert_eq!(store.accounts()[0].name, "Ada");
        assert!(store.login("a@x.com", "p1").is_ok());
    }

    #[test]
    fn rejected_login_shows_inline_error() {
        let mut app = app();
        enter_portal(&mut app, AuthMode::Login);
        app.handle(Action::PickerActivate);
        type_text(&mut app, "ghost@x.com");
        app.handle(Action::AuthSubmit);

        let auth = app.auth().unwrap();
        assert_eq!(auth.view(), AuthView::Login);
        assert_eq!(
            auth.error_text(Language::En),
            Some(AuthError::InvalidCredentials.localized(Language::En))
        );
        assert!(app.notice().is_none());
    }

    #[test]
    fn picking_an_account_greets_it() {
        let mut app = app();
        app.accounts
            .signup(
                app.storage.as_mut(),
                Account {
                    name: "Ada".into(),
                    email: "a@x.com".into(),
                    password: "p1".into(),
                },
            )
            .unwrap();
        enter_portal(&mut app, AuthMode::Login);
        app.handle(Action::PickerActivate);
        assert_eq!(app.notice(), Some("Accessing as Ada"));
        app.handle(Action::DismissNotice);
        assert!(app.notice().is_none());
    }

    #[test]
    fn exit_returns_to_landing_and_revisit_is_fast() {
        let mut app = app();
        enter_portal(&mut app, AuthMode::Login);
        app.handle(Action::AuthBack);
        assert_eq!(app.page(), Page::Landing);
        assert!(app.auth().is_none());
        assert!(app.transition().visited_before());

        app.handle(Action::OpenAuth(AuthMode::Login));
        app.advance(Duration::from_millis(349));
        assert!(app.transition().is_transitioning());
        app.advance(Duration::from_millis(201));
        assert_eq!(app.page(), Page::Portal);
    }

    #[test]
    fn command_prompt_resolves_aliases_and_unknown_ids() {
        let mut app = app();
        for (cmd, page) in [
            ("computing", Page::Product(ProductId::CloudCompute)),
            ("status", Page::Status),
            ("nowhere", Page::NotFound),
        ] {
            app.handle(Action::CommandOpen);
            for c in cmd.chars() {
                app.handle(Action::CommandInput(c));
            }
            app.handle(Action::CommandSubmit);
            assert_eq!(app.page(), page);
            assert!(app.command().is_none());
        }
    }

    #[test]
    fn anchor_from_another_page_waits_for_settle() {
        let mut app = app();
        app.handle(Action::Navigate(NavTarget::Page(Page::Docs)));
        app.handle(Action::Navigate(NavTarget::Anchor(Anchor::Pricing)));
        assert_eq!(app.page(), Page::Landing);
        assert_eq!(app.scroll(), Scroll::Top);

        app.advance(Duration::from_millis(100));
        assert_eq!(app.scroll(), Scroll::Anchor(Anchor::Pricing));
    }

    #[test]
    fn menu_wraps_and_activates() {
        let mut app = app();
        app.handle(Action::MenuPrev);
        assert_eq!(app.menu_cursor(), MENU.len() - 1);
        app.handle(Action::MenuActivate);
        assert!(app.transition().is_transitioning());
        assert_eq!(app.requested_mode(), AuthMode::Signup);
    }

    #[test]
    fn scrolling_is_bounded_by_the_document() {
        let mut app = app();
        app.handle(Action::Scroll(-5));
        assert_eq!(app.scroll(), Scroll::Line(0));
        app.handle(Action::Scroll(10_000));
        let last = pages::document(Page::Landing, Language::En).lines.len() - 1;
        assert_eq!(app.scroll(), Scroll::Line(last));
    }

    #[test]
    fn narrow_terminal_warns_once_persisted() {
        let mut app = App::new(Box::new(MemoryStore::new()), Language::En, 60);
        enter_portal(&mut app, AuthMode::Login);
        assert!(app.mobile_warning().is_visible());

        app.handle(Action::MobileWarningToggle);
        app.handle(Action::MobileWarningConfirm);
        assert!(!app.mobile_warning().is_visible());
        assert_eq!(app.storage.get(HIDE_MOBILE_WARNING_KEY).as_deref(), Some("true"));

        app.handle(Action::AuthBack);
        enter_portal(&mut app, AuthMode::Login);
        assert!(!app.mobile_warning().is_visible());
        assert!(!app.mobile_warning().is_pending());
    }

    #[test]
    fn language_toggle_is_available_everywhere() {
        let mut app = app();
        app.handle(Action::ToggleLanguage);
        assert_eq!(app.lang(), Language::Ko);
        enter_portal(&mut app, AuthMode::Login);
        app.handle(Action::ToggleLanguage);
        assert_eq!(app.lang(), Language::En);
    }
}
