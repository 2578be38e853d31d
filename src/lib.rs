#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`hsv_to_rgb`**: Converts hue (degrees), saturation and value (percent) to 8-bit RGB
//! - **`DutyCycle`**: A PWM compare value, never above `MAX_DUTY`
//! - **`ChannelWeight`**: Per-color brightness ceiling applied to each frame
//! - **`FrameProducer`**: Turns the animation phase into three duty cycles
//! - **`HueCycle`** / **`PhaseWheel`**: The two built-in producers, selected through `Pattern`
//! - **`PwmSink`**: Trait to implement for your PWM timer
//! - **`AnimationLoop`**: Owns the sink, delay and phase counter and writes one frame per interval
//!
//! Delays use `embedded_hal::delay::DelayNs`. Timers exposing
//! `embedded_hal::pwm::SetDutyCycle` channels can be wrapped in `HalPwmSink`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod colors;
pub mod frame;
pub mod pwm;
pub mod types;

pub use animation::{
    AnimationConfig, AnimationConfigBuilder, AnimationLoop, DEFAULT_FRAME_INTERVAL_MS, Phase,
};
pub use colors::{Hsv, Sector, hsv_to_rgb};
pub use frame::{FrameProducer, HueCycle, Pattern, PhaseWheel, Waveform};
pub use pwm::{HalPwmSink, PwmSink, Unused};
pub use types::{
    Channel, ChannelMap, ChannelWeight, ChannelWeights, ConfigError, DutyCycle, Frame, MAX_DUTY,
};
