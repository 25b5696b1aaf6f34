//! Logical pages and navigation between them.

use std::time::Duration;

use tracing::debug;

use super::timer::{TimerEvent, TimerHandle, TimerQueue};

/// Wait after switching to the landing page before jumping to an anchor.
pub const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductId {
    CloudCompute,
    BareMetal,
    AutoScaling,
    Hdd,
    Nas,
    Firewall,
    Ddos,
    LoadBalancing,
}

impl ProductId {
    pub const ALL: [ProductId; 8] = [
        ProductId::CloudCompute,
        ProductId::BareMetal,
        ProductId::AutoScaling,
        ProductId::Hdd,
        ProductId::Nas,
        ProductId::Firewall,
        ProductId::Ddos,
        ProductId::LoadBalancing,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::CloudCompute => "cloud-compute",
            Self::BareMetal => "bare-metal",
            Self::AutoScaling => "auto-scaling",
            Self::Hdd => "hdd",
            Self::Nas => "nas",
            Self::Firewall => "firewall",
            Self::Ddos => "ddos",
            Self::LoadBalancing => "load-balancing",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Portal,
    Status,
    Docs,
    NotFound,
    Product(ProductId),
}

impl Page {
    pub fn id(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Portal => "portal",
            Self::Status => "status",
            Self::Docs => "docs",
            Self::NotFound => "not-found",
            Self::Product(p) => p.id(),
        }
    }

    /// Unknown identifiers resolve to `NotFound`.
    pub fn parse(id: &str) -> Self {
        match id {
            "landing" => Self::Landing,
            "portal" => Self::Portal,
            "status" => Self::Status,
            "docs" => Self::Docs,
            "not-found" => Self::NotFound,
            other => ProductId::from_id(other).map_or(Self::NotFound, Self::Product),
        }
    }
}

/// Sections of the landing page that can be scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Features,
    Pricing,
}

impl Anchor {
    pub const ALL: [Anchor; 2] = [Anchor::Features, Anchor::Pricing];

    pub fn id(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Pricing => "pricing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Page(Page),
    Anchor(Anchor),
}

impl NavTarget {
    pub fn parse(id: &str) -> Self {
        let id = id.trim();
        if let Some(anchor) = Anchor::ALL.into_iter().find(|a| a.id() == id) {
            return Self::Anchor(anchor);
        }
        match id {
            // legacy category links
            "computing" => Self::Page(Page::Product(ProductId::CloudCompute)),
            "storage" => Self::Page(Page::Product(ProductId::Hdd)),
            "network" => Self::Page(Page::Product(ProductId::Firewall)),
            other => Self::Page(Page::parse(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scroll {
    #[default]
    Top,
    Anchor(Anchor),
    Line(usize),
}

#[derive(Debug, Default)]
pub struct Navigator {
    page: Page,
    scroll: Scroll,
    pending_anchor: Option<TimerHandle>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn scroll(&self) -> Scroll {
        self.scroll
    }

    pub fn set_scroll(&mut self, scroll: Scroll) {
        self.scroll = scroll;
    }

    #[cfg(test)]
    pub fn has_pending_scroll(&self) -> bool {
        self.pending_anchor.is_some()
    }

    pub fn navigate(&mut self, target: NavTarget, timers: &mut TimerQueue<TimerEvent>) {
        debug!(?target, from = self.page.id(), "navigate");
        match target {
            NavTarget::Anchor(anchor) if self.page == Page::Landing => {
                self.pending_anchor = None;
                self.scroll = Scroll::Anchor(anchor);
            }
            NavTarget::Anchor(anchor) => {
                self.page = Page::Landing;
                self.scroll = Scroll::Top;
                self.pending_anchor =
                    Some(timers.after(SCROLL_SETTLE_DELAY, TimerEvent::ScrollSettle(anchor)));
            }
            NavTarget::Page(page) => self.go(page),
        }
    }

    /// Switches page directly, dropping any deferred anchor jump.
    pub fn go(&mut self, page: Page) {
        self.pending_anchor = None;
        self.page = page;
        self.scroll = Scroll::Top;
    }

    pub fn on_scroll_settle(&mut self, anchor: Anchor) {
        if self.pending_anchor.take().is_some() && self.page == Page::Landing {
            self.scroll = Scroll::Anchor(anchor);
        }
    }
}
