//! Shared test infrastructure for pwm-hue integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use pwm_hue::{AnimationConfig, AnimationLoop, Channel, DutyCycle, PwmSink};

// ============================================================================
// Mock PWM Sink
// ============================================================================

/// Mock sink that records every duty cycle write
pub struct RecordingSink {
    current: [DutyCycle; 4],
    history: heapless::Vec<(Channel, DutyCycle), 4096>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            current: [DutyCycle::ZERO; 4],
            history: heapless::Vec::new(),
        }
    }

    /// Last duty cycle written to `channel`
    pub fn duty(&self, channel: Channel) -> DutyCycle {
        self.current[channel.index() as usize]
    }

    pub fn history(&self) -> &[(Channel, DutyCycle)] {
        &self.history
    }
}

impl PwmSink for RecordingSink {
    fn set_duty(&mut self, channel: Channel, duty: DutyCycle) {
        self.current[channel.index() as usize] = duty;
        let _ = self.history.push((channel, duty));
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that records requested waits instead of blocking
pub struct RecordingDelay {
    waits_ms: heapless::Vec<u32, 64>,
    total_ns: u64,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            waits_ms: heapless::Vec::new(),
            total_ns: 0,
        }
    }

    pub fn waits_ms(&self) -> &[u32] {
        &self.waits_ms
    }

    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.waits_ms.push(ms);
        self.total_ns += ms as u64 * 1_000_000;
    }
}

// ============================================================================
// Mock HAL PWM Channel
// ============================================================================

/// Mock `embedded-hal` PWM channel with a configurable full scale
pub struct MockPwmChannel {
    max_duty: u16,
    duty: u16,
    writes: usize,
}

impl MockPwmChannel {
    pub fn new(max_duty: u16) -> Self {
        Self {
            max_duty,
            duty: 0,
            writes: 0,
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ErrorType for MockPwmChannel {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwmChannel {
    fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty = duty;
        self.writes += 1;
        Ok(())
    }
}

// ============================================================================
// Loop Helpers
// ============================================================================

/// Animation loop writing to recording mocks
pub type RecordingLoop = AnimationLoop<RecordingSink, RecordingDelay>;

pub fn recording_loop(config: AnimationConfig) -> RecordingLoop {
    AnimationLoop::from_config(RecordingSink::new(), RecordingDelay::new(), config)
}
