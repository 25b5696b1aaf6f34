//! Portal screens: account picker, login and signup forms, narrow-screen dialog.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::accounts::AccountStore;
use crate::core::i18n::Language;
use crate::core::portal::{AuthSurface, AuthView, Field, MobileWarning};
use crate::ui::{
    accent_style, centered, dim_style, error_style, normal_style, pad_horizontal, sel_style,
    title_style,
};

const FORM_WIDTH: u16 = 60;

pub fn render(f: &mut Frame, area: Rect, auth: &AuthSurface, accounts: &AccountStore, lang: Language) {
    let inner = pad_horizontal(area);
    let column = Rect { width: FORM_WIDTH.min(inner.width), ..inner };
    let column = Rect { x: inner.x + (inner.width - column.width) / 2, ..column };
    let lines = match auth.view() {
        AuthView::Picker => picker_lines(auth, accounts, lang),
        AuthView::Login | AuthView::Signup => form_lines(auth, lang),
    };
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), column);
}

fn picker_lines<'a>(auth: &AuthSurface, accounts: &'a AccountStore, lang: Language) -> Vec<Line<'a>> {
    let s = lang.strings();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(s.portal_choose_account, title_style())),
    ];
    let subtitle = if accounts.is_empty() { s.portal_no_accounts } else { s.portal_select_account };
    lines.push(Line::from(Span::styled(subtitle, dim_style())));
    lines.push(Line::from(""));

    for (idx, account) in accounts.accounts().iter().enumerate() {
        let selected = idx == auth.selected();
        let marker = if selected { "  > " } else { "    " };
        let style = if selected { sel_style() } else { normal_style() };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("[{}] ", account.initial()), accent_style()),
            Span::styled(account.name.as_str(), style),
            Span::styled(format!("  {}", account.email), dim_style()),
        ]));
    }

    let add_selected = auth.selected() >= accounts.len();
    let (marker, style) = if add_selected { ("  > ", sel_style()) } else { ("    ", normal_style()) };
    lines.push(Line::from(Span::styled(format!("{marker}[+] {}", s.portal_add_account), style)));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(format!("🔒 {}", s.portal_secure_session), dim_style())));
    lines
}

fn field_label(field: Field, lang: Language) -> &'static str {
    let s = lang.strings();
    match field {
        Field::Name => s.auth_name,
        Field::Email => s.auth_email,
        Field::Password => s.auth_password,
        Field::ConfirmPassword => s.auth_confirm_password,
        Field::SwitchLink => "",
    }
}

fn form_lines(auth: &AuthSurface, lang: Language) -> Vec<Line<'static>> {
    let s = lang.strings();
    let (title, subtitle, switch) = match auth.view() {
        AuthView::Signup => (s.auth_create_account, s.auth_signup_subtitle, s.auth_has_account),
        _ => (s.auth_welcome, s.auth_login_subtitle, s.auth_no_account),
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, title_style())),
        Line::from(Span::styled(subtitle, dim_style())),
        Line::from(""),
    ];

    for &field in auth.fields() {
        let focused = auth.focused() == Some(field);
        if field == Field::SwitchLink {
            lines.push(Line::from(""));
            let style = if focused { sel_style() } else { accent_style() };
            lines.push(Line::from(Span::styled(format!(" {switch} "), style)));
            continue;
        }
        let raw = auth.value(field);
        let shown = if field.is_secret() {
            "•".repeat(raw.chars().count())
        } else {
            raw.to_string()
        };
        let cursor = if focused { "█" } else { "" };
        let label_style = if focused { accent_style() } else { dim_style() };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<18}", field_label(field, lang)), label_style),
            Span::styled(format!("{shown}{cursor}"), normal_style()),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(err) = auth.error_text(lang) {
        lines.push(Line::from(Span::styled(format!("  ! {err}"), error_style())));
    }
    lines.push(Line::from(Span::styled(s.auth_plaintext_notice, dim_style())));
    lines
}

pub fn render_hint(f: &mut Frame, area: Rect, auth: &AuthSurface, lang: Language) {
    let s = lang.strings();
    let hint = match auth.view() {
        AuthView::Picker => s.hint_picker,
        AuthView::Login | AuthView::Signup => s.hint_form,
    };
    let p = Paragraph::new(Span::styled(hint, dim_style()));
    f.render_widget(p, pad_horizontal(area));
}

// ── Narrow-screen dialog ──────────────────────────────────────────────────────

pub fn render_mobile_warning(f: &mut Frame, warning: &MobileWarning, lang: Language) {
    let s = lang.strings();
    let area = centered(f.area(), 56, 12);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent_style())
        .title(Span::styled(format!(" {} ", s.mobile_title), title_style()));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let check = if warning.dont_show_again() { "[x]" } else { "[ ]" };
    let lines = vec![
        Line::from(Span::styled(s.mobile_body, normal_style())),
        Line::from(""),
        Line::from(Span::styled(s.mobile_disclaimer, dim_style())),
        Line::from(""),
        Line::from(Span::styled(format!("{check} {}  (Space)", s.mobile_dont_show), normal_style())),
        Line::from(""),
        Line::from(Span::styled(format!(" {} (Enter) ", s.mobile_confirm), sel_style()))
            .alignment(Alignment::Center),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
