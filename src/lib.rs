#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod deadline;
pub mod decoder;
pub mod effect;
pub mod slot;
pub mod state;

pub use command::{CommandFamily, CommandReceiver, CommandSender, CommandSlot, HiltCommand};
pub use config::{BladeColors, BladeTimings, DecoderTimings};
pub use controller::{BladeController, BladeControllerConfig, TickResult};
pub use deadline::Deadline;
pub use decoder::{Edge, PulseDecoder};
pub use effect::EffectId;
pub use slot::{Slot, SlotReceiver, SlotSender};
pub use state::{BladeState, ColorMode};

pub use color::{BladePalette, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract rendering collaborator.
///
/// Implement this trait to connect the controller to an effect playback
/// engine. The controller only ever names effects and colors; how they are
/// rendered is up to the implementation.
pub trait EffectSink {
    /// Apply a named visual effect.
    fn apply(&mut self, effect: EffectId);

    /// Update the palette used by subsequent effects.
    fn set_palette(&mut self, palette: BladePalette);
}
