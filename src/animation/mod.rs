//! Animation system with compile-time known animation variants
//!
//! Every animation is a pure function of elapsed time and the random
//! parameters drawn when its session starts. All animations are stored in an
//! enum to avoid heap allocations.

mod boot;
mod butterfly;
mod flower;
mod heart;
mod moon;
mod star;

use embassy_time::Duration;

pub use boot::BootAnimation;
pub use butterfly::ButterflyAnimation;
pub use flower::FlowerAnimation;
pub use heart::HeartAnimation;
pub use moon::MoonAnimation;
pub use star::StarAnimation;

use crate::button::ButtonId;
use crate::frame::{Frame, HEIGHT, WIDTH};
use crate::rng::SessionRng;
use crate::sound::SoundId;

/// Default length of the moving part of an animation
pub const DEFAULT_ACTIVE: Duration = Duration::from_millis(5_000);
/// Default time the final frame stays on screen
pub const DEFAULT_HOLD: Duration = Duration::from_millis(5_000);
/// Length of the startup animation
pub const BOOT_ACTIVE: Duration = Duration::from_millis(1_500);

const ANIMATION_NAME_BOOT: &str = "boot";
const ANIMATION_NAME_HEART: &str = "heart";
const ANIMATION_NAME_STAR: &str = "star";
const ANIMATION_NAME_MOON: &str = "moon";
const ANIMATION_NAME_FLOWER: &str = "flower";
const ANIMATION_NAME_BUTTERFLY: &str = "butterfly";

const ANIMATION_ID_BOOT: u8 = 0;
const ANIMATION_ID_HEART: u8 = 1;
const ANIMATION_ID_STAR: u8 = 2;
const ANIMATION_ID_MOON: u8 = 3;
const ANIMATION_ID_FLOWER: u8 = 4;
const ANIMATION_ID_BUTTERFLY: u8 = 5;

pub trait Animation {
    /// Draw the random parameters for one session
    fn new(rng: &mut SessionRng) -> Self
    where
        Self: Sized;

    /// Draw the frame at `elapsed` into a blank frame
    fn render(&self, elapsed: Duration, frame: &mut Frame);

    /// Draw the final frame shown during the hold phase
    fn render_hold(&self, _frame: &mut Frame) {}
}

/// Known animations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Boot = ANIMATION_ID_BOOT,
    Heart = ANIMATION_ID_HEART,
    Star = ANIMATION_ID_STAR,
    Moon = ANIMATION_ID_MOON,
    Flower = ANIMATION_ID_FLOWER,
    Butterfly = ANIMATION_ID_BUTTERFLY,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_BOOT => Self::Boot,
            ANIMATION_ID_HEART => Self::Heart,
            ANIMATION_ID_STAR => Self::Star,
            ANIMATION_ID_MOON => Self::Moon,
            ANIMATION_ID_FLOWER => Self::Flower,
            ANIMATION_ID_BUTTERFLY => Self::Butterfly,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boot => ANIMATION_NAME_BOOT,
            Self::Heart => ANIMATION_NAME_HEART,
            Self::Star => ANIMATION_NAME_STAR,
            Self::Moon => ANIMATION_NAME_MOON,
            Self::Flower => ANIMATION_NAME_FLOWER,
            Self::Butterfly => ANIMATION_NAME_BUTTERFLY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_BOOT => Some(Self::Boot),
            ANIMATION_NAME_HEART => Some(Self::Heart),
            ANIMATION_NAME_STAR => Some(Self::Star),
            ANIMATION_NAME_MOON => Some(Self::Moon),
            ANIMATION_NAME_FLOWER => Some(Self::Flower),
            ANIMATION_NAME_BUTTERFLY => Some(Self::Butterfly),
            _ => None,
        }
    }

    /// Sound that accompanies the animation
    pub const fn default_sound(self) -> SoundId {
        match self {
            Self::Boot => SoundId::Startup,
            Self::Heart | Self::Butterfly => SoundId::Heartbeat,
            Self::Star => SoundId::Star,
            Self::Moon => SoundId::Moon,
            Self::Flower => SoundId::Flower,
        }
    }

    /// Build the animation with freshly drawn parameters
    pub fn to_slot(self, rng: &mut SessionRng) -> AnimationSlot {
        match self {
            Self::Boot => AnimationSlot::Boot(BootAnimation::new(rng)),
            Self::Heart => AnimationSlot::Heart(HeartAnimation::new(rng)),
            Self::Star => AnimationSlot::Star(StarAnimation::new(rng)),
            Self::Moon => AnimationSlot::Moon(MoonAnimation::new(rng)),
            Self::Flower => AnimationSlot::Flower(FlowerAnimation::new(rng)),
            Self::Butterfly => AnimationSlot::Butterfly(ButterflyAnimation::new(rng)),
        }
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Boot(BootAnimation),
    Heart(HeartAnimation),
    Star(StarAnimation),
    Moon(MoonAnimation),
    Flower(FlowerAnimation),
    Butterfly(ButterflyAnimation),
}

impl AnimationSlot {
    /// Render the active phase frame at `elapsed`
    pub fn render(&self, elapsed: Duration, frame: &mut Frame) {
        match self {
            Self::Boot(animation) => animation.render(elapsed, frame),
            Self::Heart(animation) => animation.render(elapsed, frame),
            Self::Star(animation) => animation.render(elapsed, frame),
            Self::Moon(animation) => animation.render(elapsed, frame),
            Self::Flower(animation) => animation.render(elapsed, frame),
            Self::Butterfly(animation) => animation.render(elapsed, frame),
        }
    }

    /// Render the terminal hold frame
    pub fn render_hold(&self, frame: &mut Frame) {
        match self {
            Self::Boot(animation) => animation.render_hold(frame),
            Self::Heart(animation) => animation.render_hold(frame),
            Self::Star(animation) => animation.render_hold(frame),
            Self::Moon(animation) => animation.render_hold(frame),
            Self::Flower(animation) => animation.render_hold(frame),
            Self::Butterfly(animation) => animation.render_hold(frame),
        }
    }

    pub fn id(&self) -> AnimationId {
        match self {
            Self::Boot(_) => AnimationId::Boot,
            Self::Heart(_) => AnimationId::Heart,
            Self::Star(_) => AnimationId::Star,
            Self::Moon(_) => AnimationId::Moon,
            Self::Flower(_) => AnimationId::Flower,
            Self::Butterfly(_) => AnimationId::Butterfly,
        }
    }
}

/// What to play for a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub animation: AnimationId,
    /// Sound started with the animation
    pub sound: Option<SoundId>,
    /// Length of the moving part
    pub active: Duration,
    /// Length of the still final frame, `None` for no hold phase
    pub hold: Option<Duration>,
}

impl AnimationSpec {
    /// Spec with the default 5 s active and 5 s hold phases
    pub const fn new(animation: AnimationId) -> Self {
        Self {
            animation,
            sound: Some(animation.default_sound()),
            active: DEFAULT_ACTIVE,
            hold: Some(DEFAULT_HOLD),
        }
    }

    /// The startup animation: 1.5 s and no hold
    pub const fn boot() -> Self {
        Self {
            animation: AnimationId::Boot,
            sound: Some(SoundId::Startup),
            active: BOOT_ACTIVE,
            hold: None,
        }
    }

    #[must_use]
    pub const fn with_sound(mut self, sound: Option<SoundId>) -> Self {
        self.sound = sound;
        self
    }

    #[must_use]
    pub const fn with_active(mut self, active: Duration) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub const fn with_hold(mut self, hold: Option<Duration>) -> Self {
        self.hold = hold;
        self
    }
}

/// Static table from button to animation, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationMap {
    specs: [Option<AnimationSpec>; ButtonId::COUNT],
}

impl Default for AnimationMap {
    /// Heart, star, moon and flower on A to D
    fn default() -> Self {
        Self::empty()
            .with(ButtonId::A, AnimationSpec::new(AnimationId::Heart))
            .with(ButtonId::B, AnimationSpec::new(AnimationId::Star))
            .with(ButtonId::C, AnimationSpec::new(AnimationId::Moon))
            .with(ButtonId::D, AnimationSpec::new(AnimationId::Flower))
    }
}

impl AnimationMap {
    /// Table with no buttons mapped
    pub const fn empty() -> Self {
        Self {
            specs: [None; ButtonId::COUNT],
        }
    }

    #[must_use]
    pub fn with(mut self, button: ButtonId, spec: AnimationSpec) -> Self {
        self.specs[button.index()] = Some(spec);
        self
    }

    #[must_use]
    pub fn without(mut self, button: ButtonId) -> Self {
        self.specs[button.index()] = None;
        self
    }

    pub fn get(&self, button: ButtonId) -> Option<&AnimationSpec> {
        self.specs[button.index()].as_ref()
    }
}

/// Seconds since the start of the phase
pub(crate) fn seconds(elapsed: Duration) -> f32 {
    elapsed.as_millis() as f32 / 1000.0
}

/// Draw a filled disc of `radius` around a fractional center
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn fill_disc(frame: &mut Frame, cx: f32, cy: f32, radius: f32, color: crate::Rgb) {
    for y in 0..HEIGHT as i32 {
        for x in 0..WIDTH as i32 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if libm::sqrtf(dx * dx + dy * dy) <= radius {
                frame.set(x, y, color);
            }
        }
    }
}
