//! PWM output abstraction.
//!
//! Provides the [`PwmSink`] trait the animation loop writes through, and
//! [`HalPwmSink`], an implementation over four `embedded-hal` PWM channels.

use crate::types::{Channel, DutyCycle, MAX_DUTY};
use core::convert::Infallible;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

/// Trait for abstracting PWM timer hardware.
///
/// Implement this for your timer to let the animation loop drive it.
pub trait PwmSink {
    /// Sets the compare value of one timer channel.
    ///
    /// `duty` is in the `0..=MAX_DUTY` domain. Implementations should rescale
    /// it if their timer uses a different reload value. Handle any hardware
    /// errors internally - this method cannot fail.
    fn set_duty(&mut self, channel: Channel, duty: DutyCycle);
}

impl<T: PwmSink + ?Sized> PwmSink for &mut T {
    fn set_duty(&mut self, channel: Channel, duty: DutyCycle) {
        (**self).set_duty(channel, duty);
    }
}

/// Placeholder for a timer channel with nothing connected.
///
/// Accepts and discards every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unused;

impl ErrorType for Unused {
    type Error = Infallible;
}

impl SetDutyCycle for Unused {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// PWM sink over four `embedded-hal` channels of one timer.
///
/// Widths are rescaled from `0..=MAX_DUTY` to each channel's own
/// `max_duty_cycle()`. Use [`Unused`] for channels that drive nothing.
pub struct HalPwmSink<C1, C2, C3, C4>
where
    C1: SetDutyCycle,
    C2: SetDutyCycle,
    C3: SetDutyCycle,
    C4: SetDutyCycle,
{
    ch1: C1,
    ch2: C2,
    ch3: C3,
    ch4: C4,
}

impl<C1, C2, C3, C4> HalPwmSink<C1, C2, C3, C4>
where
    C1: SetDutyCycle,
    C2: SetDutyCycle,
    C3: SetDutyCycle,
    C4: SetDutyCycle,
{
    /// Creates a sink from the four channels of a timer.
    pub fn new(ch1: C1, ch2: C2, ch3: C3, ch4: C4) -> Self {
        Self { ch1, ch2, ch3, ch4 }
    }

    /// Returns the channels.
    pub fn release(self) -> (C1, C2, C3, C4) {
        (self.ch1, self.ch2, self.ch3, self.ch4)
    }
}

/// Maps a `0..=MAX_DUTY` width onto a channel whose full scale is `max`.
fn rescale(duty: DutyCycle, max: u16) -> u16 {
    if max == MAX_DUTY {
        return duty.width();
    }
    (duty.width() as u32 * max as u32 / MAX_DUTY as u32) as u16
}

fn write<P: SetDutyCycle>(pin: &mut P, duty: DutyCycle) {
    let width = rescale(duty, pin.max_duty_cycle());
    let _ = pin.set_duty_cycle(width);
}

impl<C1, C2, C3, C4> PwmSink for HalPwmSink<C1, C2, C3, C4>
where
    C1: SetDutyCycle,
    C2: SetDutyCycle,
    C3: SetDutyCycle,
    C4: SetDutyCycle,
{
    fn set_duty(&mut self, channel: Channel, duty: DutyCycle) {
        match channel {
            Channel::Ch1 => write(&mut self.ch1, duty),
            Channel::Ch2 => write(&mut self.ch2, duty),
            Channel::Ch3 => write(&mut self.ch3, duty),
            Channel::Ch4 => write(&mut self.ch4, duty),
        }
    }
}
