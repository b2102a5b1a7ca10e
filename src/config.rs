//! Timing configuration.
//!
//! All thresholds are tunable rather than protocol constants: hilt
//! transmitter timing varies by hardware revision, so hosts that decode
//! marginal signals may need to adjust them.

use embassy_time::Duration;

use crate::color::{BLADE_WHITE, CLASH_YELLOW, Rgb};

/// Any HIGH period at least this long is an invalid bit and resets capture.
pub const VALID_BIT_CUTOFF: Duration = Duration::from_micros(4000);

/// Any HIGH period longer than this (but below the cutoff) is a 1 bit;
/// anything shorter is a 0 bit.
///
/// Typical hilt pulses measure 1200-1600 us for a 0 and 2000-3000 us for a
/// 1, so the threshold sits between the two bands to absorb delivery jitter.
pub const VALID_BIT_ONE: Duration = Duration::from_micros(1600);

/// How long the blade stays off before the sleep point is reached.
pub const SLEEP_AFTER: Duration = Duration::from_millis(6_000_000);

/// Re-igniting within this window after extinguishing advances the color
/// mode.
pub const COLOR_MODE_CHANGE_TIME: Duration = Duration::from_millis(1500);

/// How long to hold a wheel color before moving to the next one.
pub const COLOR_WHEEL_PAUSE_TIME: Duration = Duration::from_millis(2000);

/// Hue steps to jump per wheel color change; a power of two is recommended.
pub const COLOR_WHEEL_CYCLE_STEP: u8 = 16;

/// Delay before the clash flash restores the normal blade color.
pub const CLASH_RESTORE_TIME: Duration = Duration::from_millis(40);

/// Delay before a flicker resolves back to idle.
pub const FLICKER_RESTORE_TIME: Duration = Duration::from_millis(40);

/// Pulse classification thresholds for the decoder.
#[derive(Debug, Clone, Copy)]
pub struct DecoderTimings {
    /// HIGH periods at or above this width are invalid.
    pub cutoff: Duration,
    /// HIGH periods above this width (below the cutoff) are 1 bits.
    pub one_threshold: Duration,
}

impl Default for DecoderTimings {
    fn default() -> Self {
        Self {
            cutoff: VALID_BIT_CUTOFF,
            one_threshold: VALID_BIT_ONE,
        }
    }
}

/// Schedule timings for the behavior controller.
#[derive(Debug, Clone, Copy)]
pub struct BladeTimings {
    /// Off-state dwell before the sleep point.
    pub sleep_after: Duration,
    /// Double-tap window for advancing the color mode.
    pub color_mode_change: Duration,
    /// Hold time between wheel color steps.
    pub wheel_pause: Duration,
    /// Clash flash duration.
    pub clash_restore: Duration,
    /// Flicker duration.
    pub flicker_restore: Duration,
    /// Hue steps to jump per wheel color change.
    pub wheel_step: u8,
}

impl Default for BladeTimings {
    fn default() -> Self {
        Self {
            sleep_after: SLEEP_AFTER,
            color_mode_change: COLOR_MODE_CHANGE_TIME,
            wheel_pause: COLOR_WHEEL_PAUSE_TIME,
            clash_restore: CLASH_RESTORE_TIME,
            flicker_restore: FLICKER_RESTORE_TIME,
            wheel_step: COLOR_WHEEL_CYCLE_STEP,
        }
    }
}

/// Colors used while the blade is in the stock color mode.
#[derive(Debug, Clone, Copy)]
pub struct BladeColors {
    /// Steady blade color.
    pub blade: Rgb,
    /// Clash flash color.
    pub clash: Rgb,
}

impl Default for BladeColors {
    fn default() -> Self {
        Self {
            blade: BLADE_WHITE,
            clash: CLASH_YELLOW,
        }
    }
}
