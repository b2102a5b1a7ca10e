//! Effect vocabulary handed to the rendering collaborator.
//!
//! Identifiers map one-to-one onto the controller's state-entry and
//! state-tick actions. How an effect looks is entirely the host's concern.

const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_IGNITING: &str = "igniting";
const EFFECT_NAME_IGNITING_STEP: &str = "igniting_step";
const EFFECT_NAME_ON: &str = "on";
const EFFECT_NAME_IDLE: &str = "idle";
const EFFECT_NAME_CLASH: &str = "clash";
const EFFECT_NAME_CLASH_STEP: &str = "clash_step";
const EFFECT_NAME_EXTINGUISHING: &str = "extinguishing";
const EFFECT_NAME_EXTINGUISHING_STEP: &str = "extinguishing_step";
const EFFECT_NAME_REFRESH: &str = "refresh";
const EFFECT_NAME_FLICKER_LOW_STEP: &str = "flicker_low_step";
const EFFECT_NAME_FLICKER_HIGH_STEP: &str = "flicker_high_step";

const EFFECT_ID_OFF: u8 = 0;
const EFFECT_ID_IGNITING: u8 = 1;
const EFFECT_ID_IGNITING_STEP: u8 = 2;
const EFFECT_ID_ON: u8 = 3;
const EFFECT_ID_IDLE: u8 = 4;
const EFFECT_ID_CLASH: u8 = 5;
const EFFECT_ID_CLASH_STEP: u8 = 6;
const EFFECT_ID_EXTINGUISHING: u8 = 7;
const EFFECT_ID_EXTINGUISHING_STEP: u8 = 8;
const EFFECT_ID_REFRESH: u8 = 9;
const EFFECT_ID_FLICKER_LOW_STEP: u8 = 10;
const EFFECT_ID_FLICKER_HIGH_STEP: u8 = 11;

/// Named visual effects the controller can request.
///
/// `*Step` identifiers advance an ongoing animation by one step and may be
/// requested repeatedly; the rest mark state entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Off = EFFECT_ID_OFF,
    Igniting = EFFECT_ID_IGNITING,
    IgnitingStep = EFFECT_ID_IGNITING_STEP,
    On = EFFECT_ID_ON,
    Idle = EFFECT_ID_IDLE,
    Clash = EFFECT_ID_CLASH,
    ClashStep = EFFECT_ID_CLASH_STEP,
    Extinguishing = EFFECT_ID_EXTINGUISHING,
    ExtinguishingStep = EFFECT_ID_EXTINGUISHING_STEP,
    Refresh = EFFECT_ID_REFRESH,
    FlickerLowStep = EFFECT_ID_FLICKER_LOW_STEP,
    FlickerHighStep = EFFECT_ID_FLICKER_HIGH_STEP,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_IGNITING => Self::Igniting,
            EFFECT_ID_IGNITING_STEP => Self::IgnitingStep,
            EFFECT_ID_ON => Self::On,
            EFFECT_ID_IDLE => Self::Idle,
            EFFECT_ID_CLASH => Self::Clash,
            EFFECT_ID_CLASH_STEP => Self::ClashStep,
            EFFECT_ID_EXTINGUISHING => Self::Extinguishing,
            EFFECT_ID_EXTINGUISHING_STEP => Self::ExtinguishingStep,
            EFFECT_ID_REFRESH => Self::Refresh,
            EFFECT_ID_FLICKER_LOW_STEP => Self::FlickerLowStep,
            EFFECT_ID_FLICKER_HIGH_STEP => Self::FlickerHighStep,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => EFFECT_NAME_OFF,
            Self::Igniting => EFFECT_NAME_IGNITING,
            Self::IgnitingStep => EFFECT_NAME_IGNITING_STEP,
            Self::On => EFFECT_NAME_ON,
            Self::Idle => EFFECT_NAME_IDLE,
            Self::Clash => EFFECT_NAME_CLASH,
            Self::ClashStep => EFFECT_NAME_CLASH_STEP,
            Self::Extinguishing => EFFECT_NAME_EXTINGUISHING,
            Self::ExtinguishingStep => EFFECT_NAME_EXTINGUISHING_STEP,
            Self::Refresh => EFFECT_NAME_REFRESH,
            Self::FlickerLowStep => EFFECT_NAME_FLICKER_LOW_STEP,
            Self::FlickerHighStep => EFFECT_NAME_FLICKER_HIGH_STEP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_OFF => Some(Self::Off),
            EFFECT_NAME_IGNITING => Some(Self::Igniting),
            EFFECT_NAME_IGNITING_STEP => Some(Self::IgnitingStep),
            EFFECT_NAME_ON => Some(Self::On),
            EFFECT_NAME_IDLE => Some(Self::Idle),
            EFFECT_NAME_CLASH => Some(Self::Clash),
            EFFECT_NAME_CLASH_STEP => Some(Self::ClashStep),
            EFFECT_NAME_EXTINGUISHING => Some(Self::Extinguishing),
            EFFECT_NAME_EXTINGUISHING_STEP => Some(Self::ExtinguishingStep),
            EFFECT_NAME_REFRESH => Some(Self::Refresh),
            EFFECT_NAME_FLICKER_LOW_STEP => Some(Self::FlickerLowStep),
            EFFECT_NAME_FLICKER_HIGH_STEP => Some(Self::FlickerHighStep),
            _ => None,
        }
    }
}
