use std::collections::VecDeque;

use web_time::{Duration, Instant};

use super::tier::QualityTier;
use crate::options::PerformanceOptions;

/// One measured frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSample {
    /// Wall time the frame took, in milliseconds.
    pub frame_duration_ms: f32,
    /// When the frame ended.
    pub timestamp: Instant,
}

/// Read-only performance figures for diagnostics overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSummary {
    /// Average frames per second over the sample window.
    pub fps: f32,
    /// Average frame time in milliseconds over the sample window.
    pub frame_time_ms: f32,
    /// Number of samples currently in the window.
    pub sample_count: usize,
    /// Tier currently in effect.
    pub tier: QualityTier,
}

/// Rolling-window FPS tracker that picks a [`QualityTier`].
///
/// Decisions wait for a warm-up after the first sample and are then taken
/// at most once per dwell period: below `low_fps` the tier drops one step,
/// above `high_fps` it rises one step, in between it stays.
#[derive(Debug, Clone)]
pub struct PerformanceGovernor {
    samples: VecDeque<PerformanceSample>,
    window_total_ms: f64,
    window: Duration,
    warmup: Duration,
    dwell: Duration,
    low_fps: f32,
    high_fps: f32,
    adaptive: bool,
    tier: QualityTier,
    first_sample: Option<Instant>,
    last_frame: Option<Instant>,
    last_decision: Option<Instant>,
}

impl PerformanceGovernor {
    /// Create a governor starting at the configured initial tier.
    pub fn new(options: &PerformanceOptions) -> Self {
        let mut governor = Self {
            samples: VecDeque::new(),
            window_total_ms: 0.0,
            window: Duration::ZERO,
            warmup: Duration::ZERO,
            dwell: Duration::ZERO,
            low_fps: 0.0,
            high_fps: 0.0,
            adaptive: true,
            tier: options.initial_tier,
            first_sample: None,
            last_frame: None,
            last_decision: None,
        };
        governor.set_options(options);
        governor
    }

    /// Apply new thresholds. The current tier and samples are kept.
    pub fn set_options(&mut self, options: &PerformanceOptions) {
        self.window = Duration::from_millis(options.window_ms.max(1));
        self.warmup = Duration::from_millis(options.warmup_ms);
        self.dwell = Duration::from_millis(options.dwell_ms);
        self.low_fps = options.low_fps;
        // Keep a non-empty hysteresis band even for odd configs
        self.high_fps = options.high_fps.max(options.low_fps);
        self.adaptive = options.adaptive;
    }

    /// Tier currently in effect.
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Record a frame that ended at `now`, timing it against the previous
    /// call. The first call only starts the clock.
    pub fn record_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            let elapsed = now.saturating_duration_since(last);
            self.record(PerformanceSample {
                frame_duration_ms: elapsed.as_secs_f32() * 1000.0,
                timestamp: now,
            });
        }
        self.last_frame = Some(now);
    }

    /// Record an externally measured frame.
    ///
    /// Non-finite and non-positive durations are ignored.
    pub fn record(&mut self, sample: PerformanceSample) {
        let ms = sample.frame_duration_ms;
        if !ms.is_finite() || ms <= 0.0 {
            return;
        }
        let _ = self.first_sample.get_or_insert(sample.timestamp);
        self.window_total_ms += f64::from(ms);
        self.samples.push_back(sample);
        self.evict(sample.timestamp);
    }

    /// Drop samples that fell out of the window ending at `now`.
    fn evict(&mut self, now: Instant) {
        let Some(cutoff) = now.checked_sub(self.window) else {
            return;
        };
        while let Some(front) = self.samples.front() {
            if front.timestamp >= cutoff {
                break;
            }
            self.window_total_ms -= f64::from(front.frame_duration_ms);
            let _ = self.samples.pop_front();
        }
        if self.samples.is_empty() {
            self.window_total_ms = 0.0;
        }
    }

    /// Average FPS over the current window, or `None` without samples.
    pub fn average_fps(&self) -> Option<f32> {
        if self.samples.is_empty() || self.window_total_ms <= 0.0 {
            return None;
        }
        Some((1000.0 * self.samples.len() as f64 / self.window_total_ms) as f32)
    }

    /// Figures for a diagnostics display.
    pub fn summary(&self) -> PerformanceSummary {
        let fps = self.average_fps().unwrap_or(0.0);
        PerformanceSummary {
            fps,
            frame_time_ms: if fps > 0.0 { 1000.0 / fps } else { 0.0 },
            sample_count: self.samples.len(),
            tier: self.tier,
        }
    }

    /// Reconsider the tier at `now`. Returns the new tier if it changed.
    pub fn evaluate(&mut self, now: Instant) -> Option<QualityTier> {
        if !self.adaptive {
            return None;
        }
        let first = self.first_sample?;
        if now.saturating_duration_since(first) < self.warmup {
            return None;
        }
        if let Some(last) = self.last_decision {
            if now.saturating_duration_since(last) < self.dwell {
                return None;
            }
        }
        self.evict(now);
        let fps = self.average_fps()?;
        self.last_decision = Some(now);

        let next = if fps < self.low_fps {
            self.tier.lower()
        } else if fps > self.high_fps {
            self.tier.higher()
        } else {
            None
        };

        match next {
            Some(tier) => {
                log::info!(
                    "quality tier {} -> {} (avg {fps:.1} fps)",
                    self.tier.name(),
                    tier.name()
                );
                self.tier = tier;
                Some(tier)
            }
            None => {
                log::debug!(
                    "quality tier stays {} (avg {fps:.1} fps)",
                    self.tier.name()
                );
                None
            }
        }
    }
}
