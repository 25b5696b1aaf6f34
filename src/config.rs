use anyhow::{Context, Result};
use clap::Parser;
use ratatui::style::Color;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::core::i18n::Language;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "republic-portal", version, about = "Republic Cloud marketing site and portal")]
pub struct Args {
    /// Directory holding storage.json and portal.log.
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Interface language at startup.
    #[arg(long, value_enum, default_value_t = Language::Ko)]
    pub lang: Language,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

pub const APP_DIR: &str = "republic-cloud";
pub const LOG_FILE: &str = "portal.log";

pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .context("no platform data directory; pass --data-dir")
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to `<dir>/portal.log`; the terminal belongs to the UI.
/// Keep the guard alive until exit so buffered lines are flushed.
pub fn init_logging(dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating data directory {}", dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)
        .context("opening log file")?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;
    Ok(guard)
}

// ── Theme ─────────────────────────────────────────────────────────────────────

pub const BRAND_COLOR: Color = Color::Rgb(0x4c, 0x8d, 0xff);
pub const ERROR_COLOR: Color = Color::Rgb(0xff, 0x5f, 0x5f);

pub const HEADER_LINES: &[&str] = &[
    "R E P U B L I C   C L O U D",
    "Cloud infrastructure for the Republic of Korea",
];
