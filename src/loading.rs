//! Full-screen progress shown while the portal transition runs.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::core::i18n::Language;
use crate::core::transition::TransitionEmulator;
use crate::ui::{accent_style, centered, dim_style, normal_style, title_style};

const BAR_WIDTH: u16 = 50;

pub fn render(f: &mut Frame, transition: &TransitionEmulator, lang: Language) {
    let size = f.area();
    let s = lang.strings();
    let area = centered(size, BAR_WIDTH, 6);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("REPUBLIC CLOUD", accent_style())),
        Line::from(Span::styled(s.portal_loading, title_style())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(accent_style())
        .label(Span::styled(format!("{}%", transition.progress()), normal_style()))
        .percent(u16::from(transition.progress()));
    f.render_widget(gauge, rows[2]);

    let status = Paragraph::new(Span::styled(s.portal_initializing, dim_style()))
        .alignment(Alignment::Center);
    f.render_widget(status, rows[4]);

    let hint = Paragraph::new(Span::styled(s.loading_cancel, dim_style()))
        .alignment(Alignment::Center);
    let hint_area = Rect {
        x: 0, y: size.height.saturating_sub(1), width: size.width, height: 1
    };
    f.render_widget(hint, hint_area);
}
