//! Blade color palette.
//!
//! Stock colors reproduce PWM duty cycles measured from a stock blade
//! controller. Wheel colors are derived from a position on the 0-255 HSV hue
//! circle.

use smart_leds::{
    RGB8,
    hsv::{Hsv as HSV, hsv2rgb},
};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLADE_WHITE: Rgb = Rgb {
    r: 102,
    g: 102,
    b: 102,
};
pub const BLADE_RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLADE_ORANGE: Rgb = Rgb { r: 231, g: 77, b: 0 };
pub const BLADE_YELLOW: Rgb = Rgb {
    r: 154,
    g: 154,
    b: 0,
};
pub const BLADE_GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLADE_CYAN: Rgb = Rgb {
    r: 0,
    g: 154,
    b: 154,
};
pub const BLADE_BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLADE_PURPLE: Rgb = Rgb {
    r: 154,
    g: 0,
    b: 154,
};
pub const BLADE_DARK_PURPLE: Rgb = Rgb { r: 26, g: 0, b: 13 };
pub const BLADE_OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const CLASH_YELLOW: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 0,
};
pub const CLASH_ORANGE: Rgb = Rgb { r: 255, g: 64, b: 0 };
pub const CLASH_WHITE: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};

/// Blade and clash colors selected for the current ignition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BladePalette {
    /// Steady blade color.
    pub blade: Rgb,
    /// Flash color shown during a clash.
    pub clash: Rgb,
}

/// Color at `index` on the hue wheel, at full saturation and value.
pub fn wheel_color(index: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue: index,
        sat: 255,
        val: 255,
    })
}
