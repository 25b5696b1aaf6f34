use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::i18n::Language;
use crate::core::nav::Page;
use crate::ui::sel_style;

// ── Status bar ────────────────────────────────────────────────────────────────

pub fn render_status_bar(f: &mut Frame, area: Rect, page: Page, lang: Language) {
    if area.height == 0 { return; }

    let now = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let right = format!("/{}  {} ", page.id(), lang.code());

    let left = Span::styled(format!(" {now}"), sel_style());
    let used = now.chars().count() + 1 + right.chars().count();
    let pad = " ".repeat((area.width as usize).saturating_sub(used));

    let line = Line::from(vec![
        left,
        Span::styled(pad, sel_style()),
        Span::styled(right, sel_style()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
