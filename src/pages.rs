//! Marketing pages as scrollable line documents.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::catalog::{self, FEATURES, REGIONS, SERVICES};
use crate::core::i18n::Language;
use crate::core::nav::{Anchor, Page, ProductId, Scroll};
use crate::ui::{accent_style, dim_style, normal_style, pad_horizontal, title_style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Heading,
    Body,
    Accent,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub text: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<DocLine>,
    anchors: Vec<(Anchor, usize)>,
}

impl Document {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(DocLine { text: text.into(), kind });
    }

    fn blank(&mut self) {
        self.push(LineKind::Body, "");
    }

    fn anchor(&mut self, anchor: Anchor) {
        self.anchors.push((anchor, self.lines.len()));
    }

    pub fn anchor_line(&self, anchor: Anchor) -> Option<usize> {
        self.anchors.iter().find(|(a, _)| *a == anchor).map(|(_, l)| *l)
    }

    pub fn offset_for(&self, scroll: Scroll) -> usize {
        let max = self.lines.len().saturating_sub(1);
        match scroll {
            Scroll::Top => 0,
            Scroll::Line(line) => line.min(max),
            Scroll::Anchor(anchor) => self.anchor_line(anchor).unwrap_or(0),
        }
    }
}

pub fn document(page: Page, lang: Language) -> Document {
    let mut doc = Document::default();
    match page {
        Page::Landing => landing(&mut doc, lang),
        Page::Product(id) => product(&mut doc, lang, id),
        Page::Status => status(&mut doc, lang),
        Page::Docs => docs(&mut doc, lang),
        Page::NotFound => not_found(&mut doc, lang),
        Page::Portal => return doc,
    }
    footer(&mut doc, lang);
    doc
}

fn landing(doc: &mut Document, lang: Language) {
    let s = lang.strings();
    doc.blank();
    doc.push(LineKind::Title, s.hero_title);
    doc.push(LineKind::Body, s.hero_subtitle);
    doc.blank();

    doc.anchor(Anchor::Features);
    doc.push(LineKind::Heading, s.features_title);
    for feature in &FEATURES {
        doc.push(LineKind::Body, format!("  • {}", feature.get(lang)));
    }
    doc.blank();

    doc.anchor(Anchor::Pricing);
    doc.push(LineKind::Heading, s.pricing_title);
    for (name, id) in &SERVICES {
        let p = catalog::product(*id);
        doc.push(LineKind::Accent, format!("  {}", name.get(lang)));
        doc.push(LineKind::Dim, format!("    {}  (:{})", p.desc.get(lang), id.id()));
    }
    doc.blank();

    doc.push(LineKind::Heading, s.status_regions);
    let names: Vec<&str> = REGIONS.iter().map(|r| r.name).collect();
    doc.push(LineKind::Body, format!("  {}", names.join(" · ")));
    doc.push(LineKind::Dim, format!("  {} {}", catalog::UPTIME, s.status_uptime));
    doc.blank();

    doc.push(LineKind::Title, s.cta_title);
    doc.push(LineKind::Body, s.cta_body);
    doc.push(LineKind::Dim, s.cta_fineprint);
}

fn product(doc: &mut Document, lang: Language, id: ProductId) {
    let p = catalog::product(id);
    doc.blank();
    doc.push(LineKind::Dim, p.category.label(lang));
    doc.push(LineKind::Title, p.title.get(lang));
    doc.push(LineKind::Body, p.desc.get(lang));
    doc.blank();

    doc.push(LineKind::Heading, lang.strings().features_title);
    for feature in p.features {
        doc.push(LineKind::Body, format!("  ✓ {feature}"));
    }
    doc.blank();

    doc.push(LineKind::Heading, lang.strings().specs_title);
    for spec in &p.specs {
        doc.push(LineKind::Body, format!("  {:<14} {}", spec.label, spec.value));
    }
    doc.blank();

    let related: Vec<&str> = catalog::PRODUCTS
        .iter()
        .filter(|other| other.category == p.category && other.id != id)
        .map(|other| other.id.id())
        .collect();
    if !related.is_empty() {
        doc.push(LineKind::Dim, format!("  → :{}", related.join("  :")));
    }
}

fn status(doc: &mut Document, lang: Language) {
    let s = lang.strings();
    doc.blank();
    doc.push(LineKind::Accent, format!("● {}", s.status_operational));
    doc.push(LineKind::Title, s.status_title);
    doc.push(LineKind::Body, s.status_subtitle);
    doc.blank();
    doc.push(LineKind::Body, format!("  {:<8} {}", catalog::UPTIME, s.status_uptime));
    doc.push(LineKind::Body, format!("  {:<8} {}", catalog::API_AVAILABILITY, s.status_api));
    doc.push(LineKind::Body, format!("  {:<8} {}", REGIONS.len(), s.status_active_regions));
    doc.blank();

    doc.push(LineKind::Heading, s.status_regions);
    for region in &REGIONS {
        doc.push(
            LineKind::Body,
            format!("  ● {:<26} {:>6}", region.name, region.latency),
        );
    }
    doc.blank();

    doc.push(LineKind::Heading, s.status_incidents);
    doc.push(LineKind::Dim, format!("  {}", s.status_no_incidents));
}

fn docs(doc: &mut Document, lang: Language) {
    let s = lang.strings();
    doc.blank();
    doc.push(LineKind::Title, s.docs_title);
    doc.push(LineKind::Body, s.docs_subtitle);
    doc.blank();
    for (idx, cat) in s.docs_categories.iter().enumerate() {
        doc.push(LineKind::Body, format!("  {}. {cat}", idx + 1));
    }
    doc.blank();
    doc.push(LineKind::Heading, s.docs_welcome_title);
    doc.push(LineKind::Dim, format!("  {}", s.docs_welcome_desc));
}

fn not_found(doc: &mut Document, lang: Language) {
    let s = lang.strings();
    doc.blank();
    doc.push(LineKind::Title, "404");
    doc.push(LineKind::Heading, s.not_found_title);
    doc.push(LineKind::Body, s.not_found_desc);
    doc.blank();
    doc.push(LineKind::Dim, format!("  :landing  →  {}", s.not_found_home));
}

fn footer(doc: &mut Document, lang: Language) {
    let s = lang.strings();
    doc.blank();
    doc.push(LineKind::Dim, s.footer_company);
    doc.push(LineKind::Dim, s.footer_copyright);
}

// ── Rendering ─────────────────────────────────────────────────────────────────

pub fn render_page(f: &mut Frame, area: Rect, page: Page, lang: Language, scroll: Scroll) {
    let doc = document(page, lang);
    let offset = doc.offset_for(scroll);
    let inner = pad_horizontal(area);
    let lines: Vec<Line> = doc.lines[offset..]
        .iter()
        .take(inner.height as usize)
        .map(|l| {
            let style = match l.kind {
                LineKind::Title => title_style(),
                LineKind::Heading => accent_style(),
                LineKind::Accent => accent_style(),
                LineKind::Body => normal_style(),
                LineKind::Dim => dim_style(),
            };
            Line::from(Span::styled(l.text.as_str(), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_has_both_anchors_in_order() {
        let doc = document(Page::Landing, Language::En);
        let features = doc.anchor_line(Anchor::Features).unwrap();
        let pricing = doc.anchor_line(Anchor::Pricing).unwrap();
        assert!(features < pricing);
        assert_eq!(doc.lines[features].text, "Features");
        assert_eq!(doc.offset_for(Scroll::Anchor(Anchor::Pricing)), pricing);
    }

    #[test]
    fn other_pages_have_no_anchors() {
        let doc = document(Page::Status, Language::Ko);
        assert_eq!(doc.anchor_line(Anchor::Features), None);
        assert_eq!(doc.offset_for(Scroll::Anchor(Anchor::Features)), 0);
    }

    #[test]
    fn every_product_renders_its_specs() {
        for id in ProductId::ALL {
            let doc = document(Page::Product(id), Language::En);
            let p = catalog::product(id);
            assert!(doc.lines.iter().any(|l| l.text == p.title.en));
            for spec in &p.specs {
                assert!(doc.lines.iter().any(|l| l.text.contains(spec.value)));
            }
        }
    }

    #[test]
    fn line_scroll_is_clamped() {
        let doc = document(Page::NotFound, Language::En);
        assert_eq!(doc.offset_for(Scroll::Line(10_000)), doc.lines.len() - 1);
    }

    #[test]
    fn status_copy_follows_the_language() {
        let ko = document(Page::Status, Language::Ko);
        assert!(ko.lines.iter().any(|l| l.text.contains("API 가용성")));
        assert!(!ko.lines.iter().any(|l| l.text.contains("API Availability")));
        let product = document(Page::Product(ProductId::Nas), Language::Ko);
        assert!(product.lines.iter().any(|l| l.text == "사양"));
    }

    #[test]
    fn portal_has_no_document() {
        assert!(document(Page::Portal, Language::En).lines.is_empty());
    }
}
