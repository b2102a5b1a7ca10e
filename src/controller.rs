//! Blade behavior controller.
//!
//! Consumes at most one decoded hilt command per tick, maps it to a state
//! transition and advances the time-driven animation schedule. All behavior
//! state lives here and is only ever touched from the tick context; the
//! command slot is the sole contact point with the decoding path.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::EffectSink;
use crate::color::{BladePalette, CLASH_WHITE, wheel_color};
use crate::command::{CommandFamily, CommandReceiver, HiltCommand};
use crate::config::{BladeColors, BladeTimings};
use crate::deadline::Deadline;
use crate::effect::EffectId;
use crate::state::{BladeState, ColorMode};

/// Snapshot returned from each tick for host-side pacing.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// State after the tick.
    pub state: BladeState,
    /// Next scheduled action, if any.
    ///
    /// While the blade is off this is the point at which the host may power
    /// down; it is re-armed on every sleep-check tick so it stays live
    /// however long the blade sits idle.
    pub next_step: Option<Instant>,
}

/// Configuration for the behavior controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct BladeControllerConfig {
    pub timings: BladeTimings,
    pub colors: BladeColors,
}

/// Drives the blade through its themed states.
///
/// The controller owns the blade state, color mode and schedule deadline
/// outright; constructing a fresh instance yields a fully reset machine,
/// which keeps the behavior directly testable.
pub struct BladeController<'a, S: EffectSink> {
    commands: CommandReceiver<'a>,
    sink: S,
    timings: BladeTimings,
    colors: BladeColors,

    state: BladeState,
    color_mode: ColorMode,
    wheel_index: u8,
    next_step: Deadline,
    last_extinguish: Option<Instant>,
}

impl<'a, S: EffectSink> BladeController<'a, S> {
    /// Create a controller draining `commands` and rendering into `sink`.
    ///
    /// The first tick enters the off state unless a pending command already
    /// targets another state.
    pub fn new(commands: CommandReceiver<'a>, sink: S, config: &BladeControllerConfig) -> Self {
        Self {
            commands,
            sink,
            timings: config.timings,
            colors: config.colors,
            state: BladeState::Uninitialized,
            color_mode: ColorMode::default(),
            wheel_index: 0,
            next_step: Deadline::new(),
            last_extinguish: None,
        }
    }

    /// Current blade state.
    pub const fn state(&self) -> BladeState {
        self.state
    }

    /// Current color mode.
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Get a reference to the rendering sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the rendering sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Run one tick of the behavior schedule.
    ///
    /// Call this from the host's main loop, frequently enough that the
    /// 40 ms clash/flicker deadlines are observed with acceptable jitter.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let mut target = self.commands.take().and_then(|cmd| self.classify(cmd));

        // Leaving the boot state lands in off unless a command already
        // asked for something else.
        if target.is_none() && self.state == BladeState::Uninitialized {
            target = Some(BladeState::Off);
        }

        if let Some(target) = target {
            if target != self.state {
                self.enter(target, now);
            }
        }

        if self.next_step.is_elapsed(now) {
            self.on_deadline(now);
        }

        TickResult {
            state: self.state,
            next_step: self.next_step.due(),
        }
    }

    /// Map a command byte to its target state, applying transition guards.
    fn classify(&self, cmd: HiltCommand) -> Option<BladeState> {
        let family = cmd.family()?;

        #[cfg(feature = "esp32-log")]
        println!("hilt command {:#04x} ({:?})", cmd.raw(), family);

        Some(match family {
            CommandFamily::Ignite => BladeState::Igniting,
            CommandFamily::SetColor => {
                // A refresh may only interrupt an idle blade, or force it on
                // after a missed ignite while off.
                if self.state != BladeState::Idle && self.state != BladeState::Off {
                    return None;
                }
                BladeState::Refresh
            }
            CommandFamily::Extinguish => BladeState::Extinguishing,
            CommandFamily::Off => BladeState::Off,
            CommandFamily::Clash => BladeState::Clash,
            CommandFamily::FlickerLow => BladeState::FlickerLow,
            CommandFamily::FlickerHigh => BladeState::FlickerHigh,
        })
    }

    /// Run entry actions for `target`, following pass-through states within
    /// the same tick.
    fn enter(&mut self, target: BladeState, now: Instant) {
        let mut next = Some(target);
        while let Some(state) = next {
            self.state = state;
            next = self.run_entry(state, now);
        }
    }

    /// Entry actions for a freshly entered state.
    ///
    /// Returns the follow-up state for pass-through states.
    fn run_entry(&mut self, state: BladeState, now: Instant) -> Option<BladeState> {
        // Only refresh, on and idle may preserve an ongoing animation.
        if !state.preserves_deadline() {
            self.next_step.clear();
        }

        match state {
            BladeState::Off => {
                self.sink.apply(EffectId::Off);
                self.next_step.arm(now + self.timings.sleep_after);
            }
            BladeState::Igniting => self.enter_igniting(now),
            BladeState::On => {
                self.sink.apply(EffectId::On);
                return Some(BladeState::Idle);
            }
            BladeState::Idle => {
                self.sink.apply(EffectId::Idle);
                if self.color_mode == ColorMode::WheelCycle {
                    // May be inheriting a deadline from a refresh cascade.
                    self.next_step
                        .arm_unless_future(now + self.timings.wheel_pause, now);
                }
            }
            BladeState::Clash => {
                self.sink.apply(EffectId::Clash);
                self.next_step.arm(now + self.timings.clash_restore);
            }
            BladeState::Extinguishing => {
                self.last_extinguish = Some(now);
                self.sink.apply(EffectId::Extinguishing);
                self.next_step.arm(now);
            }
            BladeState::Refresh => {
                self.sink.apply(EffectId::Refresh);
                return Some(BladeState::On);
            }
            BladeState::FlickerLow | BladeState::FlickerHigh => {
                self.next_step.arm(now + self.timings.flicker_restore);
            }
            BladeState::Uninitialized => {}
        }

        None
    }

    fn enter_igniting(&mut self, now: Instant) {
        // A rapid extinguish/ignite double tap advances the color mode.
        if let Some(extinguished) = self.last_extinguish {
            if now.duration_since(extinguished) < self.timings.color_mode_change {
                self.color_mode = self.color_mode.next();

                #[cfg(feature = "esp32-log")]
                println!("color mode changed to {:?}", self.color_mode);
            }
        }

        self.sink.set_palette(self.palette());
        self.sink.apply(EffectId::Igniting);
        // Ignition animation starts immediately.
        self.next_step.arm(now);
    }

    /// Blade and clash colors for the current color mode.
    fn palette(&self) -> BladePalette {
        if self.color_mode.uses_wheel() {
            BladePalette {
                blade: wheel_color(self.wheel_index),
                clash: CLASH_WHITE,
            }
        } else {
            BladePalette {
                blade: self.colors.blade,
                clash: self.colors.clash,
            }
        }
    }

    /// Scheduled action for the current state once its deadline elapses.
    fn on_deadline(&mut self, now: Instant) {
        match self.state {
            // Step effects repeat every tick until the state is superseded;
            // the sink tracks its own animation progress.
            BladeState::Igniting => self.sink.apply(EffectId::IgnitingStep),
            BladeState::Clash => self.sink.apply(EffectId::ClashStep),
            BladeState::Extinguishing => self.sink.apply(EffectId::ExtinguishingStep),
            BladeState::FlickerLow => {
                self.sink.apply(EffectId::FlickerLowStep);
                self.next_step.clear();
                self.enter(BladeState::Idle, now);
            }
            BladeState::FlickerHigh => {
                self.sink.apply(EffectId::FlickerHighStep);
                self.next_step.clear();
                self.enter(BladeState::Idle, now);
            }
            BladeState::Off => {
                // Keep the sleep point alive while the blade stays off.
                self.next_step.arm(now + self.timings.sleep_after);
            }
            BladeState::Idle => {
                if self.color_mode == ColorMode::WheelCycle {
                    self.advance_wheel(now);
                }
            }
            BladeState::Uninitialized | BladeState::On | BladeState::Refresh => {}
        }
    }

    fn advance_wheel(&mut self, now: Instant) {
        self.wheel_index = self.wheel_index.wrapping_add(self.timings.wheel_step);
        self.sink.set_palette(self.palette());
        self.next_step.arm(now + self.timings.wheel_pause);
    }
}
