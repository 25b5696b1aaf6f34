//! Authentication surface and the narrow-screen warning shown in the portal.

use std::time::Duration;

use tracing::{debug, warn};

use super::accounts::AccountStore;
use super::error::AuthError;
use super::i18n::{self, Language};
use super::storage::KeyValueStore;
use super::timer::{TimerEvent, TimerHandle, TimerQueue};
use super::validate::{submit_login, submit_signup, LoginForm, SignupForm};

pub const HIDE_MOBILE_WARNING_KEY: &str = "hide-mobile-warning";
pub const MOBILE_WARNING_DELAY: Duration = Duration::from_millis(500);
/// Terminals narrower than this count as a "mobile" viewport.
pub const NARROW_VIEWPORT_COLS: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Picker,
    Login,
    Signup,
}

impl From<AuthMode> for AuthView {
    fn from(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Login => Self::Login,
            AuthMode::Signup => Self::Signup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    /// The "switch to the other form" link under the inputs.
    SwitchLink,
}

impl Field {
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

const LOGIN_FIELDS: &[Field] = &[Field::Email, Field::Password, Field::SwitchLink];
const SIGNUP_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
    Field::SwitchLink,
];

/// What the owner of the surface should do after `back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    ShowPicker,
    /// Modal context: dismiss the surface.
    Close,
    /// Full-screen picker: leave the portal.
    ExitPortal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to submit in the current view.
    Ignored,
    Rejected(AuthError),
    LoggedIn { email: String, back: BackOutcome },
    SignedUp { back: BackOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSurface {
    fullscreen: bool,
    view: AuthView,
    focus: usize,
    selected: usize,
    pub login: LoginForm,
    pub signup: SignupForm,
    error: Option<AuthError>,
}

impl AuthSurface {
    /// Full-screen surfaces always open on the picker; modal ones open on
    /// the requested form.
    pub fn open(mode: AuthMode, fullscreen: bool) -> Self {
        let view = if fullscreen { AuthView::Picker } else { mode.into() };
        Self {
            fullscreen,
            view,
            focus: 0,
            selected: 0,
            login: LoginForm::default(),
            signup: SignupForm::default(),
            error: None,
        }
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    #[cfg(test)]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<AuthError> {
        self.error
    }

    pub fn fields(&self) -> &'static [Field] {
        match self.view {
            AuthView::Picker => &[],
            AuthView::Login => LOGIN_FIELDS,
            AuthView::Signup => SIGNUP_FIELDS,
        }
    }

    pub fn focused(&self) -> Option<Field> {
        self.fields().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        let n = self.fields().len();
        if n > 0 {
            self.focus = (self.focus + 1) % n;
        }
    }

    pub fn focus_prev(&mut self) {
        let n = self.fields().len();
        if n > 0 {
            self.focus = (self.focus + n - 1) % n;
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match (self.view, field) {
            (AuthView::Login, Field::Email) => &self.login.email,
            (AuthView::Login, Field::Password) => &self.login.password,
            (AuthView::Signup, Field::Name) => &self.signup.name,
            (AuthView::Signup, Field::Email) => &self.signup.email,
            (AuthView::Signup, Field::Password) => &self.signup.password,
            (AuthView::Signup, Field::ConfirmPassword) => &self.signup.confirm_password,
            _ => "",
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        let field = self.focused()?;
        match (self.view, field) {
            (AuthView::Login, Field::Email) => Some(&mut self.login.email),
            (AuthView::Login, Field::Password) => Some(&mut self.login.password),
            (AuthView::Signup, Field::Name) => Some(&mut self.signup.name),
            (AuthView::Signup, Field::Email) => Some(&mut self.signup.email),
            (AuthView::Signup, Field::Password) => Some(&mut self.signup.password),
            (AuthView::Signup, Field::ConfirmPassword) => Some(&mut self.signup.confirm_password),
            _ => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if let Some(buf) = self.focused_buffer() {
            buf.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buf) = self.focused_buffer() {
            buf.pop();
        }
    }

    /// Picker rows are the accounts followed by "add account".
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, accounts: usize) {
        self.selected = (self.selected + 1).min(accounts);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.view = mode.into();
        self.focus = 0;
        self.error = None;
        self.login = LoginForm::default();
        self.signup = SignupForm::default();
    }

    pub fn toggle_mode(&mut self) {
        match self.view {
            AuthView::Login => self.switch_mode(AuthMode::Signup),
            AuthView::Signup => self.switch_mode(AuthMode::Login),
            AuthView::Picker => {}
        }
    }

    pub fn back(&mut self) -> BackOutcome {
        if !self.fullscreen {
            return BackOutcome::Close;
        }
        if self.view == AuthView::Picker {
            return BackOutcome::ExitPortal;
        }
        self.view = AuthView::Picker;
        self.error = None;
        BackOutcome::ShowPicker
    }

    pub fn submit(
        &mut self,
        store: &mut AccountStore,
        storage: &mut dyn KeyValueStore,
    ) -> SubmitOutcome {
        self.error = None;
        let result = match self.view {
            AuthView::Picker => return SubmitOutcome::Ignored,
            AuthView::Login => submit_login(store, &self.login).map(|acc| Some(acc.email.clone())),
            AuthView::Signup => submit_signup(store, storage, &self.signup).map(|()| None),
        };
        match result {
            Ok(email) => {
                let back = self.back();
                match email {
                    Some(email) => SubmitOutcome::LoggedIn { email, back },
                    None => {
                        // picker cursor stays on "add account" as the list grows
                        self.selected = store.len();
                        SubmitOutcome::SignedUp { back }
                    }
                }
            }
            Err(err) => {
                debug!(error = %err, "auth form rejected");
                self.error = Some(err);
                SubmitOutcome::Rejected(err)
            }
        }
    }

    pub fn error_text(&self, lang: Language) -> Option<&'static str> {
        self.error.map(|e| e.localized(lang))
    }
}

pub fn submit_notice(outcome: &SubmitOutcome, lang: Language) -> Option<String> {
    match outcome {
        SubmitOutcome::LoggedIn { email, .. } => Some(i18n::login_success(lang, email)),
        SubmitOutcome::SignedUp { .. } => Some(lang.strings().portal_signup_done.to_string()),
        SubmitOutcome::Ignored | SubmitOutcome::Rejected(_) => None,
    }
}

// ── Narrow-screen warning ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MobileWarning {
    visible: bool,
    dont_show_again: bool,
    pending: Option<TimerHandle>,
}

impl MobileWarning {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dont_show_again(&self) -> bool {
        self.dont_show_again
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_suppressed(storage: &dyn KeyValueStore) -> bool {
        storage.get(HIDE_MOBILE_WARNING_KEY).is_some()
    }

    pub fn on_portal_enter(
        &mut self,
        viewport_cols: u16,
        storage: &dyn KeyValueStore,
        timers: &mut TimerQueue<TimerEvent>,
    ) {
        if viewport_cols < NARROW_VIEWPORT_COLS && !Self::is_suppressed(storage) {
            self.pending = Some(timers.after(MOBILE_WARNING_DELAY, TimerEvent::MobileWarning));
        }
    }

    pub fn on_timer(&mut self) {
        if self.pending.take().is_some() {
            self.visible = true;
        }
    }

    pub fn toggle_dont_show_again(&mut self) {
        self.dont_show_again = !self.dont_show_again;
    }

    pub fn confirm(&mut self, storage: &mut dyn KeyValueStore) {
        if self.dont_show_again {
            if let Err(err) = storage.set(HIDE_MOBILE_WARNING_KEY, "true") {
                warn!(error = %err, "failed to persist mobile warning preference");
            }
        }
        self.visible = false;
    }

    /// Leaving the portal drops a pending or visible dialog.
    pub fn dismiss(&mut self) {
        self.pending = None;
        self.visible = false;
    }
}
