//! Blade operating states and color modes.

/// Operating mode of the blade.
///
/// Owned exclusively by the behavior controller and mutated only on its
/// tick. `On` and `Refresh` are pass-through states that resolve within the
/// same tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BladeState {
    Uninitialized,
    Off,
    Igniting,
    On,
    Idle,
    Clash,
    Extinguishing,
    Refresh,
    FlickerLow,
    FlickerHigh,
}

impl BladeState {
    /// States whose entry may preserve an in-flight animation deadline.
    pub(crate) const fn preserves_deadline(self) -> bool {
        matches!(self, Self::On | Self::Idle | Self::Refresh)
    }
}

/// How the blade color is derived.
///
/// Persists across ordinary ignite/extinguish cycles; advances only via the
/// rapid re-ignite gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Fixed stock palette.
    #[default]
    Stock,
    /// Color wheel, stepping to a new hue while idle.
    WheelCycle,
    /// Color wheel, held at the current hue.
    WheelHold,
}

impl ColorMode {
    /// The mode the rapid re-ignite gesture advances to.
    pub const fn next(self) -> Self {
        match self {
            Self::Stock => Self::WheelCycle,
            Self::WheelCycle => Self::WheelHold,
            Self::WheelHold => Self::Stock,
        }
    }

    /// Whether the blade color comes from the color wheel.
    pub const fn uses_wheel(self) -> bool {
        matches!(self, Self::WheelCycle | Self::WheelHold)
    }
}
