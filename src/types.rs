//! Core types shared by the converter, the frame producers and the loop.

/// Full-scale PWM width. The timer reloads at this value, so a duty cycle of
/// `MAX_DUTY` keeps the output high for the whole period.
pub const MAX_DUTY: u16 = 1024;

/// A PWM compare value in `0..=MAX_DUTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycle(u16);

impl DutyCycle {
    /// Output permanently low.
    pub const ZERO: Self = DutyCycle(0);

    /// Output permanently high.
    pub const MAX: Self = DutyCycle(MAX_DUTY);

    /// Creates a duty cycle, saturating at `MAX_DUTY`.
    #[inline]
    pub fn new(width: u16) -> Self {
        DutyCycle(width.min(MAX_DUTY))
    }

    /// Returns the raw compare value.
    #[inline]
    pub fn width(self) -> u16 {
        self.0
    }
}

impl From<DutyCycle> for u16 {
    fn from(duty: DutyCycle) -> Self {
        duty.0
    }
}

/// One of the four compare channels of a PWM timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Ch1,
    Ch2,
    Ch3,
    Ch4,
}

impl Channel {
    /// Maps a channel index to a channel. Only the low two bits are used,
    /// so every index selects a valid channel.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Channel::Ch1,
            1 => Channel::Ch2,
            2 => Channel::Ch3,
            _ => Channel::Ch4,
        }
    }

    /// Zero-based channel index.
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Channel::Ch1 => 0,
            Channel::Ch2 => 1,
            Channel::Ch3 => 2,
            Channel::Ch4 => 3,
        }
    }
}

/// Which timer channel drives each color of the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
}

impl ChannelMap {
    /// Creates a channel map.
    pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
        Self { red, green, blue }
    }

    /// Returns true if no two colors share a channel.
    pub fn is_distinct(&self) -> bool {
        self.red != self.green && self.red != self.blue && self.green != self.blue
    }
}

impl Default for ChannelMap {
    /// Red on CH3, green on CH1, blue on CH4. CH2 is left unused.
    fn default() -> Self {
        Self::new(Channel::Ch3, Channel::Ch1, Channel::Ch4)
    }
}

/// Brightness ceiling of a single color channel, expressed as a PWM width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelWeight(u16);

impl ChannelWeight {
    /// Channel at full brightness.
    pub const FULL: Self = ChannelWeight(MAX_DUTY);

    /// Creates a weight of `percent` of `MAX_DUTY`.
    ///
    /// # Errors
    /// * `WeightOutOfRange` - `percent` is above 100
    pub fn from_percent(percent: u8) -> Result<Self, ConfigError> {
        if percent > 100 {
            return Err(ConfigError::WeightOutOfRange(percent));
        }
        Ok(ChannelWeight(
            (MAX_DUTY as u32 * percent as u32 / 100) as u16,
        ))
    }

    /// Returns the widest duty cycle this channel may be driven to.
    #[inline]
    pub fn width(self) -> u16 {
        self.0
    }

    /// Scales an 8-bit channel level into `[0, width]`.
    ///
    /// The level is divided by 256, not 255, so full scale lands just below
    /// the weight; the clamp only matters if that ever changes.
    #[inline]
    pub fn scale(self, level: u8) -> DutyCycle {
        let width = level as u32 * self.0 as u32 / 256;
        DutyCycle::new((width as u16).min(self.0))
    }

    /// Scales a level in `0..=MAX_DUTY` into `[0, width]`.
    #[inline]
    pub fn scale_duty(self, level: u16) -> DutyCycle {
        let level = level.min(MAX_DUTY) as u32;
        DutyCycle::new((level * self.0 as u32 / MAX_DUTY as u32) as u16)
    }
}

/// Per-color brightness weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelWeights {
    pub red: ChannelWeight,
    pub green: ChannelWeight,
    pub blue: ChannelWeight,
}

impl ChannelWeights {
    /// Builds weights from percentages of `MAX_DUTY`.
    ///
    /// # Errors
    /// * `WeightOutOfRange` - any percentage is above 100
    pub fn from_percent(red: u8, green: u8, blue: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            red: ChannelWeight::from_percent(red)?,
            green: ChannelWeight::from_percent(green)?,
            blue: ChannelWeight::from_percent(blue)?,
        })
    }
}

impl Default for ChannelWeights {
    /// Red at 100%, green and blue at 50% to balance the LED's uneven
    /// per-die efficiency.
    fn default() -> Self {
        Self {
            red: ChannelWeight::FULL,
            green: ChannelWeight(MAX_DUTY / 2),
            blue: ChannelWeight(MAX_DUTY / 2),
        }
    }
}

/// The three duty cycles written during one animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub red: DutyCycle,
    pub green: DutyCycle,
    pub blue: DutyCycle,
}

impl Frame {
    /// Creates a frame.
    #[inline]
    pub fn new(red: DutyCycle, green: DutyCycle, blue: DutyCycle) -> Self {
        Self { red, green, blue }
    }
}

/// Animation configuration errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Saturation outside `0..=100` percent.
    SaturationOutOfRange(f32),

    /// Value outside `0..=100` percent.
    ValueOutOfRange(f32),

    /// Brightness weight above 100 percent.
    WeightOutOfRange(u8),

    /// Two colors routed to the same timer channel.
    ChannelConflict(Channel),

    /// Frame interval of zero milliseconds.
    ZeroFrameInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::SaturationOutOfRange(s) => {
                write!(f, "saturation {} is outside 0-100%", s)
            }
            ConfigError::ValueOutOfRange(v) => {
                write!(f, "value {} is outside 0-100%", v)
            }
            ConfigError::WeightOutOfRange(p) => {
                write!(f, "brightness weight {}% exceeds 100%", p)
            }
            ConfigError::ChannelConflict(ch) => {
                write!(f, "channel {:?} is assigned to more than one color", ch)
            }
            ConfigError::ZeroFrameInterval => {
                write!(f, "frame interval must be at least 1 ms")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
