use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::app::App;
use crate::config::{BRAND_COLOR, ERROR_COLOR, HEADER_LINES};
use crate::core::nav::Page;
use crate::status::render_status_bar;
use crate::{loading, pages, portal_view};

pub type Term = Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>;

// ── Padding ───────────────────────────────────────────────────────────────────
const H_PAD: u16 = 3;

/// Shrink a rect by H_PAD columns on each side.
pub fn pad_horizontal(area: Rect) -> Rect {
    let pad = H_PAD.min(area.width / 2);
    Rect {
        x: area.x + pad,
        y: area.y,
        width: area.width.saturating_sub(pad * 2),
        height: area.height,
    }
}

/// A `w` x `h` rect centered in `area`, clipped to it.
pub fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

// ── Color helpers ─────────────────────────────────────────────────────────────

pub fn normal_style()   -> Style { Style::default().fg(Color::White) }
pub fn sel_style()      -> Style { Style::default().fg(Color::Black).bg(BRAND_COLOR).add_modifier(Modifier::BOLD) }
pub fn title_style()    -> Style { Style::default().fg(Color::White).add_modifier(Modifier::BOLD) }
pub fn accent_style()   -> Style { Style::default().fg(BRAND_COLOR).add_modifier(Modifier::BOLD) }
pub fn dim_style()      -> Style { Style::default().fg(Color::Gray).add_modifier(Modifier::DIM) }
pub fn error_style()    -> Style { Style::default().fg(ERROR_COLOR) }

// ── Header ────────────────────────────────────────────────────────────────────

pub fn render_header(f: &mut Frame, area: Rect) {
    let inner = pad_horizontal(area);
    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(HEADER_LINES.iter().enumerate().map(|(i, l)| {
        let style = if i == 0 { accent_style() } else { dim_style() };
        Line::from(Span::styled(*l, style))
    }));
    let p = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(p, inner);
}

pub fn render_separator(f: &mut Frame, area: Rect) {
    let inner = pad_horizontal(area);
    let sep = "=".repeat(inner.width as usize);
    let p = Paragraph::new(sep).alignment(Alignment::Center).style(dim_style());
    f.render_widget(p, inner);
}

// ── Menu bar ──────────────────────────────────────────────────────────────────

fn render_menu_bar(f: &mut Frame, area: Rect, app: &App) {
    let inner = pad_horizontal(area);
    let mut spans = Vec::new();
    for (idx, (_, label)) in App::menu_items().iter().enumerate() {
        let text = format!(" {} ", label.text(app.lang()));
        let style = if idx == app.menu_cursor() { sel_style() } else { normal_style() };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ── Hint / command line ───────────────────────────────────────────────────────

fn render_hint_line(f: &mut Frame, area: Rect, app: &App) {
    let inner = pad_horizontal(area);
    let line = match app.command() {
        Some(buf) => Line::from(vec![
            Span::styled(":", accent_style()),
            Span::styled(format!("{buf}█"), normal_style()),
        ]),
        None => Line::from(Span::styled(app.lang().strings().hint_pages, dim_style())),
    };
    f.render_widget(Paragraph::new(line), inner);
}

// ── Box overlay message ───────────────────────────────────────────────────────

pub fn box_message(f: &mut Frame, message: &str) {
    let size = f.area();
    let w = (message.chars().count() + 6) as u16;
    let area = centered(size, w, 5);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(sel_style())
        .style(sel_style());
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let p = Paragraph::new(vec![Line::from(""), Line::from(message)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(sel_style());
    f.render_widget(p, inner);
}

// ── Frame ─────────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    if app.transition().is_transitioning() {
        loading::render(f, app.transition(), app.lang());
        return;
    }

    let size = f.area();
    let in_portal = app.page() == Page::Portal;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if in_portal { 0 } else { 1 }),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_header(f, chunks[0]);
    if !in_portal {
        render_menu_bar(f, chunks[1], app);
    }
    render_separator(f, chunks[2]);

    match app.auth() {
        Some(auth) if in_portal => {
            portal_view::render(f, chunks[3], auth, app.accounts(), app.lang());
            portal_view::render_hint(f, chunks[4], auth, app.lang());
        }
        _ => {
            pages::render_page(f, chunks[3], app.page(), app.lang(), app.scroll());
            render_hint_line(f, chunks[4], app);
        }
    }
    render_status_bar(f, chunks[5], app.page(), app.lang());

    if app.mobile_warning().is_visible() {
        portal_view::render_mobile_warning(f, app.mobile_warning(), app.lang());
    }
    if let Some(notice) = app.notice() {
        box_message(f, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_never_exceeds_width() {
        let r = pad_horizontal(Rect::new(0, 0, 4, 1));
        assert_eq!(r.x, 2);
        assert_eq!(r.width, 0);
    }

    #[test]
    fn centered_clips_to_area() {
        let r = centered(Rect::new(0, 0, 20, 10), 40, 4);
        assert_eq!(r, Rect::new(0, 3, 20, 4));
    }
}
