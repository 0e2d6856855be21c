//! Progress animation utility
//!
//! Provides the pacing table for simulated operations and the percentage
//! bar shared by acquisition and flash stages.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config;
use crate::log_debug;

/// Delays used by simulated operations
///
/// Every sleep in the acquisition and flash sequences comes from here, so
/// tests and `skip_animations` can run the same code paths instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Delay per step of the acquisition bar
    pub download_step: Duration,
    /// Delay per step of a flash stage bar
    pub stage_step: Duration,
    /// Delay after printing a partition write line
    pub partition_write: Duration,
    /// Delay after the partition "OKAY" line
    pub partition_settle: Duration,
    /// Delay after erasing a partition
    pub partition_erase: Duration,
    /// Short pause between phases (server connect, stage end)
    pub phase: Duration,
    /// Pause that lets the operator read a status block or an error
    pub linger: Duration,
    /// One tick of the reboot countdown
    pub countdown_tick: Duration,
}

impl Pacing {
    /// Delays matching the interactive experience
    pub const fn standard() -> Self {
        Self {
            download_step: Duration::from_millis(30),
            stage_step: Duration::from_millis(20),
            partition_write: Duration::from_millis(300),
            partition_settle: Duration::from_millis(200),
            partition_erase: Duration::from_millis(100),
            phase: Duration::from_secs(1),
            linger: Duration::from_secs(2),
            countdown_tick: Duration::from_secs(1),
        }
    }

    /// No delays at all
    pub const fn instant() -> Self {
        Self {
            download_step: Duration::ZERO,
            stage_step: Duration::ZERO,
            partition_write: Duration::ZERO,
            partition_settle: Duration::ZERO,
            partition_erase: Duration::ZERO,
            phase: Duration::ZERO,
            linger: Duration::ZERO,
            countdown_tick: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::standard()
    }
}

/// Sleep for `delay`, skipping the timer entirely for zero
pub async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Color of a percentage bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Yellow,
    Green,
}

impl BarColor {
    fn name(self) -> &'static str {
        match self {
            BarColor::Yellow => "yellow",
            BarColor::Green => "green",
        }
    }
}

fn percent_style(color: BarColor) -> ProgressStyle {
    let template = format!("[{{bar:50.{}}}] {{pos}}% ", color.name());
    ProgressStyle::with_template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█ ")
}

/// Animate a 0..=100 percentage bar
///
/// # Arguments
/// * `step_delay` - Delay between consecutive percentage steps
/// * `finish_color` - Color of the bar once it reaches 100%
pub async fn animate_percent(step_delay: Duration, finish_color: BarColor) {
    let last = config::firmware::PROGRESS_STEPS - 1;
    let bar = ProgressBar::new(last);
    bar.set_style(percent_style(BarColor::Yellow));

    for step in 0..config::firmware::PROGRESS_STEPS {
        if step == last && finish_color != BarColor::Yellow {
            bar.set_style(percent_style(finish_color));
        }
        bar.set_position(step);
        pause(step_delay).await;
    }

    bar.finish();
    log_debug!("progress", "Percentage animation finished ({} steps)", last + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_pacing_has_no_delays() {
        let pacing = Pacing::instant();
        assert!(pacing.download_step.is_zero());
        assert!(pacing.partition_write.is_zero());
        assert!(pacing.countdown_tick.is_zero());
    }

    #[test]
    fn test_standard_pacing() {
        let pacing = Pacing::default();
        assert_eq!(pacing.download_step, Duration::from_millis(30));
        assert_eq!(pacing.countdown_tick, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_animate_percent_instant_completes() {
        animate_percent(Duration::ZERO, BarColor::Green).await;
    }
}
