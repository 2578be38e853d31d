//! Fixed-step animation loop.
//!
//! Provides [`AnimationLoop`], which owns the PWM sink, the delay and the
//! phase counter, and writes one frame per fixed interval. Also defines
//! [`AnimationConfig`] and its validating builder.

use crate::frame::{FrameProducer, HueCycle, Pattern, PhaseWheel, Waveform};
use crate::pwm::PwmSink;
use crate::types::{ChannelMap, ChannelWeights, ConfigError, Frame};
use embedded_hal::delay::DelayNs;

/// Default time between frames.
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 5;

/// Animation position, counting `0..period` and wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase {
    value: u16,
    period: u16,
}

impl Phase {
    /// Creates a phase at zero. A `period` of zero is treated as one.
    pub fn new(period: u16) -> Self {
        Self::starting_at(0, period)
    }

    /// Creates a phase at `value`, wrapped into `0..period`.
    pub fn starting_at(value: u16, period: u16) -> Self {
        let period = period.max(1);
        Self {
            value: value % period,
            period,
        }
    }

    /// Current position.
    #[inline]
    pub fn value(self) -> u16 {
        self.value
    }

    /// Number of positions before wrapping.
    #[inline]
    pub fn period(self) -> u16 {
        self.period
    }

    /// Moves one position forward, wrapping at the period.
    #[inline]
    pub fn advance(&mut self) {
        self.value = ((self.value as u32 + 1) % self.period as u32) as u16;
    }
}

/// Everything needed to set up an [`AnimationLoop`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    pattern: Pattern,
    channel_map: ChannelMap,
    frame_interval_ms: u32,
}

impl AnimationConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> AnimationConfigBuilder {
        AnimationConfigBuilder::new()
    }

    /// The selected animation.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Color to timer channel routing.
    pub fn channel_map(&self) -> ChannelMap {
        self.channel_map
    }

    /// Time between frames in milliseconds.
    pub fn frame_interval_ms(&self) -> u32 {
        self.frame_interval_ms
    }
}

impl Default for AnimationConfig {
    /// Hue cycle at 80% saturation and value, default weights and channel
    /// map, one frame every 5 ms.
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            channel_map: ChannelMap::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Hue { saturation: f32, value: f32 },
    PhaseWheel(Waveform),
}

/// Builder for validated animation configurations.
#[derive(Debug, Clone, Copy)]
pub struct AnimationConfigBuilder {
    mode: Mode,
    weights: ChannelWeights,
    channel_map: ChannelMap,
    frame_interval_ms: u32,
}

impl AnimationConfigBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            mode: Mode::Hue {
                saturation: 80.0,
                value: 80.0,
            },
            weights: ChannelWeights::default(),
            channel_map: ChannelMap::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }

    /// Selects the hue cycle with the given saturation and value (percent).
    pub fn hue_cycle(mut self, saturation: f32, value: f32) -> Self {
        self.mode = Mode::Hue { saturation, value };
        self
    }

    /// Selects the phase-shifted wheel with the given waveform.
    pub fn phase_wheel(mut self, waveform: Waveform) -> Self {
        self.mode = Mode::PhaseWheel(waveform);
        self
    }

    /// Sets the per-color brightness weights.
    pub fn weights(mut self, weights: ChannelWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets which timer channel drives each color.
    pub fn channel_map(mut self, channel_map: ChannelMap) -> Self {
        self.channel_map = channel_map;
        self
    }

    /// Sets the time between frames.
    pub fn frame_interval_ms(mut self, millis: u32) -> Self {
        self.frame_interval_ms = millis;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `SaturationOutOfRange` / `ValueOutOfRange` - hue cycle input outside `0..=100`
    /// * `ChannelConflict` - two colors share a timer channel
    /// * `ZeroFrameInterval` - frame interval is zero
    pub fn build(self) -> Result<AnimationConfig, ConfigError> {
        let pattern = match self.mode {
            Mode::Hue { saturation, value } => {
                if !(0.0..=100.0).contains(&saturation) {
                    return Err(ConfigError::SaturationOutOfRange(saturation));
                }
                if !(0.0..=100.0).contains(&value) {
                    return Err(ConfigError::ValueOutOfRange(value));
                }
                Pattern::Hue(HueCycle::new(saturation, value, self.weights))
            }
            Mode::PhaseWheel(waveform) => {
                Pattern::PhaseWheel(PhaseWheel::new(waveform, self.weights))
            }
        };

        let map = self.channel_map;
        if map.red == map.green || map.red == map.blue {
            return Err(ConfigError::ChannelConflict(map.red));
        }
        if map.green == map.blue {
            return Err(ConfigError::ChannelConflict(map.green));
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        Ok(AnimationConfig {
            pattern,
            channel_map: map,
            frame_interval_ms: self.frame_interval_ms,
        })
    }
}

impl Default for AnimationConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives an RGB LED through a repeating animation, one frame per interval.
///
/// The loop is the sole owner of the sink, the delay and the phase counter.
/// Each [`step`](Self::step) renders the frame for the current phase, writes
/// the three duty cycles, advances the phase and then blocks for the frame
/// interval.
///
/// # Type Parameters
/// * `S` - PWM sink implementation type
/// * `D` - Blocking delay implementation type
/// * `P` - Frame producer type
pub struct AnimationLoop<S: PwmSink, D: DelayNs, P: FrameProducer = Pattern> {
    sink: S,
    delay: D,
    producer: P,
    channel_map: ChannelMap,
    frame_interval_ms: u32,
    phase: Phase,
}

impl<S: PwmSink, D: DelayNs> AnimationLoop<S, D, Pattern> {
    /// Creates a loop from a validated configuration.
    pub fn from_config(sink: S, delay: D, config: AnimationConfig) -> Self {
        #[cfg(feature = "defmt")]
        defmt::debug!("animation configured: {}", config);

        Self::new(
            sink,
            delay,
            config.pattern,
            config.channel_map,
            config.frame_interval_ms,
        )
    }
}

impl<S: PwmSink, D: DelayNs, P: FrameProducer> AnimationLoop<S, D, P> {
    /// Creates a loop starting at phase zero.
    pub fn new(
        sink: S,
        delay: D,
        producer: P,
        channel_map: ChannelMap,
        frame_interval_ms: u32,
    ) -> Self {
        let phase = Phase::new(producer.period());
        Self {
            sink,
            delay,
            producer,
            channel_map,
            frame_interval_ms,
            phase,
        }
    }

    /// Moves the loop to `phase`, wrapped into the producer's period.
    pub fn starting_at(mut self, phase: u16) -> Self {
        self.phase = Phase::starting_at(phase, self.producer.period());
        self
    }

    /// Writes the frame for the current phase and advances the phase.
    ///
    /// Does not wait. Returns the frame that was written.
    pub fn render(&mut self) -> Frame {
        let frame = self.producer.frame(self.phase.value());

        #[cfg(feature = "defmt")]
        defmt::trace!("phase {}: {}", self.phase.value(), frame);

        self.sink.set_duty(self.channel_map.red, frame.red);
        self.sink.set_duty(self.channel_map.green, frame.green);
        self.sink.set_duty(self.channel_map.blue, frame.blue);

        self.phase.advance();
        frame
    }

    /// Runs one full iteration: render, then wait for the frame interval.
    pub fn step(&mut self) -> Frame {
        let frame = self.render();
        self.delay.delay_ms(self.frame_interval_ms);
        frame
    }

    /// Runs the animation forever.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Current animation position.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The frame producer driving this loop.
    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// The PWM sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Stops the loop and hands back the sink and delay.
    pub fn release(self) -> (S, D) {
        (self.sink, self.delay)
    }
}
