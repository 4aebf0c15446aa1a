// Front-end parameter state: five sliders, the pen color picker and the
// curated presets, plus the keyboard mapping that drives them.
//
// This is where `r` gets clamped to `R - 1`, strictly before a draw starts.

use crate::color::{ColorPicker, PRESET_COLORS};
use crate::error::Result;
use crate::types::MechanismParams;
use minifb::Key;

/// Segments per tick for each notch of the speed slider.
pub const SPEED_PER_NOTCH: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slider {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub value: i32,
}

impl Slider {
    pub const fn new(label: &'static str, min: i32, max: i32, value: i32) -> Self {
        Self { label, min, max, value }
    }

    /// Move by `delta`, staying inside [min, max].
    pub fn nudge(&mut self, delta: i32) {
        self.value = (self.value + delta).clamp(self.min, self.max);
    }

    pub fn set(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Position of the value inside the range, in [0,1].
    pub fn fraction(&self) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (self.value - self.min) as f32 / (self.max - self.min) as f32
    }
}

pub const OUTER: usize = 0;
pub const INNER: usize = 1;
pub const OFFSET: usize = 2;
pub const SPEED: usize = 3;
pub const WIDTH: usize = 4;

/// A named mechanism setting that is known to look good.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub outer: i32,
    pub inner: i32,
    pub offset: i32,
}

pub const PRESETS: [Preset; 12] = [
    Preset { name: "Classic", outer: 150, inner: 80, offset: 100 },
    Preset { name: "Star", outer: 200, inner: 130, offset: 150 },
    Preset { name: "Petal", outer: 180, inner: 45, offset: 120 },
    Preset { name: "Rose", outer: 150, inner: 60, offset: 60 },
    Preset { name: "Infinity", outer: 200, inner: 70, offset: 190 },
    Preset { name: "Snowflake", outer: 120, inner: 55, offset: 80 },
    Preset { name: "Ring", outer: 175, inner: 25, offset: 140 },
    Preset { name: "Galaxy", outer: 200, inner: 110, offset: 200 },
    Preset { name: "Web", outer: 160, inner: 48, offset: 110 },
    Preset { name: "Diamond", outer: 190, inner: 95, offset: 90 },
    Preset { name: "Mandala", outer: 145, inner: 29, offset: 145 },
    Preset { name: "Spiral", outer: 200, inner: 150, offset: 100 },
];

/// Everything a key press can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Draw,
    Undo,
    Clear,
    Save,
    ToggleRainbow,
    PickColor(usize),
    NextPreset,
    SelectPrev,
    SelectNext,
    Nudge(i32),
    Quit,
}

/// Keyboard layout. `ctrl` covers Cmd on macOS.
pub fn action_for(key: Key, ctrl: bool, shift: bool) -> Option<Action> {
    let step = if shift { 10 } else { 1 };
    let action = match key {
        Key::Escape => Action::Quit,
        Key::Enter | Key::D => Action::Draw,
        Key::Z if ctrl => Action::Undo,
        Key::U | Key::Backspace => Action::Undo,
        Key::C => Action::Clear,
        Key::S => Action::Save,
        Key::Space => Action::ToggleRainbow,
        Key::Key1 => Action::PickColor(0),
        Key::Key2 => Action::PickColor(1),
        Key::Key3 => Action::PickColor(2),
        Key::Key4 => Action::PickColor(3),
        Key::Key5 => Action::PickColor(4),
        Key::Key6 => Action::PickColor(5),
        Key::Key7 => Action::PickColor(6),
        Key::Key8 => Action::PickColor(7),
        Key::P => Action::NextPreset,
        Key::Up => Action::SelectPrev,
        Key::Down => Action::SelectNext,
        Key::Left => Action::Nudge(-step),
        Key::Right => Action::Nudge(step),
        _ => return None,
    };
    Some(action)
}

#[derive(Clone, Debug)]
pub struct Controls {
    pub sliders: [Slider; 5],
    pub colors: ColorPicker,
    selected: usize,
    preset: Option<usize>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            sliders: [
                Slider::new("BIG CIRCLE", 50, 300, 150),
                Slider::new("LITTLE WHEEL", 5, 200, 80),
                Slider::new("PEN REACH", 5, 250, 100),
                Slider::new("SPEED", 1, 20, 5),
                Slider::new("LINE WIDTH", 1, 8, 1),
            ],
            colors: ColorPicker::default(),
            selected: 0,
            preset: None,
        }
    }
}

impl Controls {
    pub fn outer(&self) -> i32 {
        self.sliders[OUTER].value
    }

    /// Little wheel radius, clamped below the big circle.
    pub fn inner(&self) -> i32 {
        self.sliders[INNER].value.min(self.outer() - 1)
    }

    pub fn offset(&self) -> i32 {
        self.sliders[OFFSET].value
    }

    /// Resolve the sliders into validated mechanism parameters.
    pub fn resolve_params(&self) -> Result<MechanismParams> {
        MechanismParams::new(self.outer(), self.inner(), self.offset())
    }

    /// Segments the engine may paint per tick.
    pub fn speed(&self) -> usize {
        self.sliders[SPEED].value.max(1) as usize * SPEED_PER_NOTCH
    }

    pub fn thickness(&self) -> u32 {
        self.sliders[WIDTH].value.max(1) as u32
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Name of the preset last applied, if the sliders still hold it.
    pub fn preset_name(&self) -> Option<&'static str> {
        let p = PRESETS[self.preset?];
        let intact = self.outer() == p.outer
            && self.sliders[INNER].value == p.inner
            && self.offset() == p.offset;
        intact.then_some(p.name)
    }

    pub fn apply_preset(&mut self, index: usize) {
        let p = PRESETS[index % PRESETS.len()];
        self.sliders[OUTER].set(p.outer);
        self.sliders[INNER].set(p.inner);
        self.sliders[OFFSET].set(p.offset);
        self.preset = Some(index % PRESETS.len());
    }

    /// Apply the parameter-editing actions; engine actions are ignored here.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectPrev => {
                self.selected = (self.selected + self.sliders.len() - 1) % self.sliders.len();
            }
            Action::SelectNext => {
                self.selected = (self.selected + 1) % self.sliders.len();
            }
            Action::Nudge(delta) => self.sliders[self.selected].nudge(delta),
            Action::PickColor(i) if i < PRESET_COLORS.len() => self.colors.select(i),
            Action::ToggleRainbow => self.colors.toggle_rainbow(),
            Action::NextPreset => {
                let next = self.preset.map_or(0, |p| p + 1);
                self.apply_preset(next);
            }
            _ => {}
        }
    }
}
