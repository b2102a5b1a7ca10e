//! Hilt command protocol.
//!
//! The hilt addresses the blade with single 8-bit commands. The high nibble
//! selects the command family; the low nibble carries a protocol variant or
//! parameter the blade-side logic does not interpret.

use crate::slot::{Slot, SlotReceiver, SlotSender};

/// Command families recognized by the behavior controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandFamily {
    /// Power the blade on.
    Ignite,
    /// Periodic set-color/refresh keepalive.
    SetColor,
    /// Power the blade down.
    Extinguish,
    /// Hard off.
    Off,
    /// The blade hit something or the hilt stopped suddenly.
    Clash,
    /// Dim flicker (0-50% brightness).
    FlickerLow,
    /// Bright flicker (50-100% brightness).
    FlickerHigh,
}

/// A completed 8-bit command byte received from the hilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HiltCommand(u8);

impl HiltCommand {
    /// Wrap a raw command byte.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw command byte.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The variant/parameter nibble.
    ///
    /// Carried for hosts that want it (flicker commands encode a brightness
    /// level here); the behavior controller ignores it.
    pub const fn parameter(self) -> u8 {
        self.0 & 0x0F
    }

    /// The command family selected by the high nibble.
    ///
    /// Returns `None` for unrecognized families, which the controller drops
    /// without a transition.
    pub const fn family(self) -> Option<CommandFamily> {
        Some(match self.0 >> 4 {
            0x2 | 0x3 => CommandFamily::Ignite, // savi's / legacy ignite
            0xA | 0xB => CommandFamily::SetColor, // savi's / legacy set color
            0x4 | 0x5 => CommandFamily::Extinguish, // savi's / legacy extinguish
            0x8 | 0x9 | 0xE | 0xF => CommandFamily::Off,
            0xC | 0xD => CommandFamily::Clash, // savi's / legacy clash
            0x6 => CommandFamily::FlickerLow,
            0x7 => CommandFamily::FlickerHigh,
            _ => return None,
        })
    }
}

/// Type alias for the decoder-to-controller command slot.
pub type CommandSlot = Slot<HiltCommand>;

/// Type alias for the command producer handle held by the decoder.
pub type CommandSender<'a> = SlotSender<'a, HiltCommand>;

/// Type alias for the command consumer handle held by the controller.
pub type CommandReceiver<'a> = SlotReceiver<'a, HiltCommand>;
