#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dotmatrix_toy::{
    AuxButton, ButtonId, Clock, Controller, Duration, Error, Frame, InputPort, Instant,
    MatrixDisplay, Port, Result, SoundId, SoundPort, ToyConfig,
};

/// Fake time stops tests that would otherwise spin forever
const TIME_LIMIT_MS: u64 = 30 * 60 * 1000;

/// Millisecond counter shared by the fake clock and the fake input
#[derive(Clone, Default)]
pub struct SharedTime(Rc<Cell<u64>>);

impl SharedTime {
    pub fn now_ms(&self) -> u64 {
        self.0.get()
    }

    pub fn now(&self) -> Instant {
        Instant::from_millis(self.0.get())
    }

    pub fn set_ms(&self, ms: u64) {
        self.0.set(ms);
    }

    pub fn advance_ms(&self, ms: u64) {
        let next = self.0.get() + ms;
        assert!(next < TIME_LIMIT_MS, "fake clock ran past {TIME_LIMIT_MS} ms");
        self.0.set(next);
    }
}

pub struct FakeClock {
    time: SharedTime,
}

impl FakeClock {
    pub fn new(time: SharedTime) -> Self {
        Self { time }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.time.now()
    }

    fn sleep(&mut self, duration: Duration) {
        self.time.advance_ms(duration.as_millis());
    }
}

#[derive(Clone, Copy)]
enum Key {
    Play(ButtonId),
    Aux(AuxButton),
}

/// Button held from `from_ms` until just before `until_ms`
#[derive(Clone, Copy)]
struct Press {
    key: Key,
    from_ms: u64,
    until_ms: u64,
}

/// Input whose buttons follow a timed script
#[derive(Clone)]
pub struct ScriptedInput {
    time: SharedTime,
    presses: Rc<RefCell<Vec<Press>>>,
    failing: Rc<Cell<bool>>,
}

impl ScriptedInput {
    pub fn new(time: SharedTime) -> Self {
        Self {
            time,
            presses: Rc::default(),
            failing: Rc::default(),
        }
    }

    pub fn press(&self, button: ButtonId, from_ms: u64, until_ms: u64) {
        self.push(Key::Play(button), from_ms, until_ms);
    }

    pub fn press_aux(&self, button: AuxButton, from_ms: u64, until_ms: u64) {
        self.push(Key::Aux(button), from_ms, until_ms);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn push(&self, key: Key, from_ms: u64, until_ms: u64) {
        self.presses.borrow_mut().push(Press {
            key,
            from_ms,
            until_ms,
        });
    }

    fn is_held(&self, wanted: impl Fn(Key) -> bool) -> Result<bool> {
        if self.failing.get() {
            return Err(Error::Hardware(Port::Input));
        }
        let now = self.time.now_ms();
        Ok(self
            .presses
            .borrow()
            .iter()
            .any(|p| wanted(p.key) && p.from_ms <= now && now < p.until_ms))
    }
}

impl InputPort for ScriptedInput {
    fn read_raw(&mut self, button: ButtonId) -> Result<bool> {
        self.is_held(|key| matches!(key, Key::Play(b) if b == button))
    }

    fn read_aux(&mut self, button: AuxButton) -> Result<bool> {
        self.is_held(|key| matches!(key, Key::Aux(b) if b == button))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    Render { at_ms: u64, frame: Frame },
    Clear { at_ms: u64 },
    Brightness(u8),
    LowPower { at_ms: u64 },
    Wake { at_ms: u64 },
}

pub struct RecordingDisplay {
    time: SharedTime,
    events: Vec<DisplayEvent>,
    fail_render: bool,
}

impl RecordingDisplay {
    pub fn new(time: SharedTime) -> Self {
        Self {
            time,
            events: Vec::new(),
            fail_render: false,
        }
    }

    pub fn failing_render(time: SharedTime) -> Self {
        Self {
            fail_render: true,
            ..Self::new(time)
        }
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Times of every pushed frame
    pub fn render_times(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Render { at_ms, .. } => Some(*at_ms),
                _ => None,
            })
            .collect()
    }

    pub fn brightness_levels(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Brightness(level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn last(&self) -> Option<&DisplayEvent> {
        self.events.last()
    }
}

impl MatrixDisplay for RecordingDisplay {
    fn render_frame(&mut self, frame: &Frame) -> Result<()> {
        if self.fail_render {
            return Err(Error::Hardware(Port::Display));
        }
        self.events.push(DisplayEvent::Render {
            at_ms: self.time.now_ms(),
            frame: frame.clone(),
        });
        Ok(())
    }

    fn clear_display(&mut self) -> Result<()> {
        self.events.push(DisplayEvent::Clear {
            at_ms: self.time.now_ms(),
        });
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.events.push(DisplayEvent::Brightness(level));
        Ok(())
    }

    fn enter_low_power(&mut self) -> Result<()> {
        self.events.push(DisplayEvent::LowPower {
            at_ms: self.time.now_ms(),
        });
        Ok(())
    }

    fn exit_low_power(&mut self) -> Result<()> {
        self.events.push(DisplayEvent::Wake {
            at_ms: self.time.now_ms(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Play { sound: SoundId, at_ms: u64 },
    Stop { at_ms: u64 },
    Volume(u8),
}

pub struct RecordingSound {
    time: SharedTime,
    events: Vec<SoundEvent>,
    failing: bool,
}

impl RecordingSound {
    pub fn new(time: SharedTime) -> Self {
        Self {
            time,
            events: Vec::new(),
            failing: false,
        }
    }

    pub fn failing(time: SharedTime) -> Self {
        Self {
            failing: true,
            ..Self::new(time)
        }
    }

    pub fn events(&self) -> &[SoundEvent] {
        &self.events
    }

    pub fn played(&self) -> Vec<SoundId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SoundEvent::Play { sound, .. } => Some(*sound),
                _ => None,
            })
            .collect()
    }
}

impl SoundPort for RecordingSound {
    fn play(&mut self, sound: SoundId) -> Result<()> {
        if self.failing {
            return Err(Error::Hardware(Port::Sound));
        }
        self.events.push(SoundEvent::Play {
            sound,
            at_ms: self.time.now_ms(),
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.failing {
            return Err(Error::Hardware(Port::Sound));
        }
        self.events.push(SoundEvent::Stop {
            at_ms: self.time.now_ms(),
        });
        Ok(())
    }

    fn set_volume(&mut self, level: u8) -> Result<()> {
        self.events.push(SoundEvent::Volume(level));
        Ok(())
    }
}

pub type TestController = Controller<ScriptedInput, RecordingDisplay, RecordingSound, FakeClock>;

/// Controller wired to fakes, plus handles to drive them
pub struct Rig {
    pub time: SharedTime,
    pub input: ScriptedInput,
    pub controller: TestController,
}

impl Rig {
    pub fn new(config: ToyConfig) -> Self {
        let time = SharedTime::default();
        Self::with_ports(
            config,
            RecordingDisplay::new(time.clone()),
            RecordingSound::new(time.clone()),
            time,
        )
    }

    pub fn with_ports(
        config: ToyConfig,
        display: RecordingDisplay,
        sound: RecordingSound,
        time: SharedTime,
    ) -> Self {
        let input = ScriptedInput::new(time.clone());
        let controller = Controller::new(
            input.clone(),
            display,
            sound,
            FakeClock::new(time.clone()),
            config,
        );
        Self {
            time,
            input,
            controller,
        }
    }

    /// Rig without a startup animation
    pub fn quiet() -> Self {
        Self::new(ToyConfig::default().with_boot(None))
    }
}
