//! Frame producers.
//!
//! A [`FrameProducer`] turns the animation phase into the three duty cycles
//! of one frame. Two are provided: [`HueCycle`] walks the HSV color wheel,
//! [`PhaseWheel`] drives each channel with the same waveform staggered by a
//! third of a period. [`Pattern`] selects between them at configuration time.

use crate::colors::hsv_to_rgb;
use crate::types::{ChannelWeights, Frame, MAX_DUTY};

/// Produces the duty cycles for each phase of an animation.
pub trait FrameProducer {
    /// Number of distinct phases before the animation repeats. Never zero.
    fn period(&self) -> u16;

    /// Returns the frame for `phase`, where `phase < self.period()`.
    fn frame(&self, phase: u16) -> Frame;
}

/// Hue rotation at fixed saturation and value.
///
/// The phase is the hue in degrees, so one revolution takes 360 frames.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HueCycle {
    /// Saturation in percent.
    pub saturation: f32,
    /// Value in percent.
    pub value: f32,
    pub weights: ChannelWeights,
}

impl HueCycle {
    /// Hue steps in one revolution.
    pub const PERIOD: u16 = 360;

    /// Creates a hue cycle.
    pub fn new(saturation: f32, value: f32, weights: ChannelWeights) -> Self {
        Self {
            saturation,
            value,
            weights,
        }
    }
}

impl Default for HueCycle {
    /// 80% saturation and value with the default channel weights.
    fn default() -> Self {
        Self::new(80.0, 80.0, ChannelWeights::default())
    }
}

impl FrameProducer for HueCycle {
    fn period(&self) -> u16 {
        Self::PERIOD
    }

    fn frame(&self, phase: u16) -> Frame {
        let rgb = hsv_to_rgb(phase as f32, self.saturation, self.value);
        Frame::new(
            self.weights.red.scale(rgb.red),
            self.weights.green.scale(rgb.green),
            self.weights.blue.scale(rgb.blue),
        )
    }
}

/// Shape of the per-channel wave in [`PhaseWheel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Waveform {
    /// Ramps up to `MAX_DUTY` over the first half period and back down over
    /// the second.
    #[default]
    Triangle,

    /// Ramps up over the whole period, then drops to zero.
    Sawtooth,
}

impl Waveform {
    /// Level in `0..=MAX_DUTY` at position `x` in `0..MAX_DUTY`.
    pub fn level(self, x: u16) -> u16 {
        let x = x % MAX_DUTY;
        match self {
            Waveform::Triangle => {
                let half = MAX_DUTY / 2;
                if x < half {
                    x * 2
                } else {
                    (MAX_DUTY - x) * 2
                }
            }
            Waveform::Sawtooth => x,
        }
    }
}

/// Three copies of one waveform, offset by a third of a period each.
///
/// Red leads, green follows `MAX_DUTY / 3` behind, blue `2 * MAX_DUTY / 3`.
/// No color conversion is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseWheel {
    pub waveform: Waveform,
    pub weights: ChannelWeights,
}

impl PhaseWheel {
    /// Phase steps in one revolution.
    pub const PERIOD: u16 = MAX_DUTY;

    /// Offsets applied to the red, green and blue channels.
    pub const OFFSETS: [u16; 3] = [0, MAX_DUTY / 3, 2 * MAX_DUTY / 3];

    /// Creates a phase wheel.
    pub fn new(waveform: Waveform, weights: ChannelWeights) -> Self {
        Self { waveform, weights }
    }

    fn level(&self, phase: u16, offset: u16) -> u16 {
        let shifted = (phase as u32 + offset as u32) % MAX_DUTY as u32;
        self.waveform.level(shifted as u16)
    }
}

impl FrameProducer for PhaseWheel {
    fn period(&self) -> u16 {
        Self::PERIOD
    }

    fn frame(&self, phase: u16) -> Frame {
        let [r, g, b] = Self::OFFSETS;
        Frame::new(
            self.weights.red.scale_duty(self.level(phase, r)),
            self.weights.green.scale_duty(self.level(phase, g)),
            self.weights.blue.scale_duty(self.level(phase, b)),
        )
    }
}

/// The animation selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    Hue(HueCycle),
    PhaseWheel(PhaseWheel),
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Hue(HueCycle::default())
    }
}

impl FrameProducer for Pattern {
    fn period(&self) -> u16 {
        match self {
            Pattern::Hue(p) => p.period(),
            Pattern::PhaseWheel(p) => p.period(),
        }
    }

    fn frame(&self, phase: u16) -> Frame {
        match self {
            Pattern::Hue(p) => p.frame(phase),
            Pattern::PhaseWheel(p) => p.frame(phase),
        }
    }
}
