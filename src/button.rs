//! Button identifiers
//!
//! The four play buttons are plain ids; the animation each one triggers is
//! decided by the [`AnimationMap`](crate::AnimationMap).

use core::fmt;

const BUTTON_NAME_A: &str = "a";
const BUTTON_NAME_B: &str = "b";
const BUTTON_NAME_C: &str = "c";
const BUTTON_NAME_D: &str = "d";

const BUTTON_ID_A: u8 = 0;
const BUTTON_ID_B: u8 = 1;
const BUTTON_ID_C: u8 = 2;
const BUTTON_ID_D: u8 = 3;

/// One of the four play buttons.
///
/// Ordering follows scan priority: `A` wins over `B` and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ButtonId {
    A = BUTTON_ID_A,
    B = BUTTON_ID_B,
    C = BUTTON_ID_C,
    D = BUTTON_ID_D,
}

impl ButtonId {
    /// Number of play buttons
    pub const COUNT: usize = 4;

    /// All buttons in scan priority order
    pub const PRIORITY: [Self; Self::COUNT] = [Self::A, Self::B, Self::C, Self::D];

    /// Position in per-button tables
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            BUTTON_ID_A => Self::A,
            BUTTON_ID_B => Self::B,
            BUTTON_ID_C => Self::C,
            BUTTON_ID_D => Self::D,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => BUTTON_NAME_A,
            Self::B => BUTTON_NAME_B,
            Self::C => BUTTON_NAME_C,
            Self::D => BUTTON_NAME_D,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BUTTON_NAME_A => Some(Self::A),
            BUTTON_NAME_B => Some(Self::B),
            BUTTON_NAME_C => Some(Self::C),
            BUTTON_NAME_D => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board buttons that adjust settings instead of playing animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuxButton {
    BrightnessUp,
    BrightnessDown,
}

impl AuxButton {
    pub const ALL: [Self; 2] = [Self::BrightnessUp, Self::BrightnessDown];
}
