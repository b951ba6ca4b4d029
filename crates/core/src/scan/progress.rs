//! Scanning progress counter and its async driver
//!
//! The counter is pure and tick-driven; [`ScanTicker`] drives it on a
//! fixed interval and owns the completion rule (minimum duration, hold
//! after 100%, doubled speed once data has arrived).

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use subsidyscope_domain::constants::{SCAN_PROGRESS_MAX, SCAN_STAGE_PERCENT};
use subsidyscope_domain::ScanConfig;

/// The four visible stages of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStage {
    Documents,
    Detection,
    Subsidies,
    Losses,
}

impl ScanStage {
    /// Progress label shown while the stage is active
    pub fn label(self) -> &'static str {
        match self {
            Self::Documents => "Analyzing documents...",
            Self::Detection => "Running AI detection...",
            Self::Subsidies => "Scanning for subsidies...",
            Self::Losses => "Calculating losses...",
        }
    }
}

/// Pure progress counter, advanced once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanProgress {
    percent: u8,
}

impl ScanProgress {
    pub fn new() -> Self {
        Self { percent: 0 }
    }

    /// Current percentage, 0..=100
    pub fn percent(self) -> u8 {
        self.percent
    }

    /// Advance one tick
    ///
    /// Steps by 1, or by 2 once the analysis result has already arrived —
    /// the perceived speed-up; the underlying network task is never
    /// touched. Saturates at 100.
    pub fn advance(&mut self, data_ready: bool) -> u8 {
        let step = if data_ready { 2 } else { 1 };
        self.percent = (self.percent + step).min(SCAN_PROGRESS_MAX);
        self.percent
    }

    /// Stage for the current percentage (25% bands, clamped to the last)
    pub fn stage(self) -> ScanStage {
        match self.percent / SCAN_STAGE_PERCENT {
            0 => ScanStage::Documents,
            1 => ScanStage::Detection,
            2 => ScanStage::Subsidies,
            _ => ScanStage::Losses,
        }
    }

    pub fn is_complete(self) -> bool {
        self.percent >= SCAN_PROGRESS_MAX
    }
}

/// Async driver for [`ScanProgress`]
///
/// Runs independently of the network task; the two are joined by the
/// caller so the session leaves the scanning phase only when both have
/// settled.
pub struct ScanTicker {
    tick_interval: Duration,
    completion_hold: Duration,
}

impl ScanTicker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            completion_hold: Duration::from_millis(config.completion_hold_ms),
        }
    }

    /// Tick to completion, reporting each tick to `on_tick`
    ///
    /// `data_ready` is flipped by the fetch task when the analysis result
    /// settles; from then on the counter advances at double speed. After
    /// reaching 100% the ticker holds briefly before returning, matching
    /// the completion delay of the scanning animation.
    pub async fn run_with<F>(&self, data_ready: &AtomicBool, mut on_tick: F)
    where
        F: FnMut(ScanProgress),
    {
        let mut progress = ScanProgress::new();
        let mut interval = tokio::time::interval(self.tick_interval);
        // The first tick of a tokio interval fires immediately; consume it
        // so every advance is one interval apart.
        interval.tick().await;

        while !progress.is_complete() {
            interval.tick().await;
            progress.advance(data_ready.load(Ordering::Relaxed));
            on_tick(progress);
        }

        tokio::time::sleep(self.completion_hold).await;
    }

    /// Tick to completion without observation
    pub async fn run(&self, data_ready: &AtomicBool) {
        self.run_with(data_ready, |_| {}).await;
    }
}
