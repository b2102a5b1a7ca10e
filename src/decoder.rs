//! Hilt pulse decoder.
//!
//! The hilt encodes each command as 8 pulses on the one-wire data line, MSB
//! first. The HIGH duration of a pulse selects the bit value; overlong
//! pulses reset capture, so the stream resynchronizes on the next full byte
//! without any error propagation.

use embassy_time::{Duration, Instant};

use crate::command::{CommandSender, HiltCommand};
use crate::config::DecoderTimings;

const BITS_PER_COMMAND: u8 = 8;

/// An electrical transition on the hilt data line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

/// Decodes pulse-width encoded command bytes from edge notifications.
///
/// [`on_edge`](Self::on_edge) is meant to run from the edge-notification
/// context, typically a GPIO interrupt. Pulse widths are deltas between
/// consecutive edge timestamps, so late delivery skews classification; the
/// routine performs no allocation and no blocking work to keep its own
/// latency bounded.
///
/// Completed bytes are published to a [`CommandSlot`](crate::CommandSlot),
/// where the newest byte replaces any byte the tick context has not yet
/// consumed.
pub struct PulseDecoder<'a> {
    outbox: CommandSender<'a>,
    timings: DecoderTimings,
    /// Byte under construction.
    cmd: u8,
    /// Valid bits collected since the last reset (0-7).
    bit_count: u8,
    /// Rising edge that opened the current pulse.
    pulse_start: Option<Instant>,
}

impl<'a> PulseDecoder<'a> {
    /// Create a decoder publishing to `outbox`.
    pub const fn new(outbox: CommandSender<'a>, timings: DecoderTimings) -> Self {
        Self {
            outbox,
            timings,
            cmd: 0,
            bit_count: 0,
            pulse_start: None,
        }
    }

    /// Feed one edge notification into the decoder.
    ///
    /// `at` must come from a monotonic microsecond-resolution clock read at
    /// notification time.
    pub fn on_edge(&mut self, edge: Edge, at: Instant) {
        match edge {
            Edge::Rising => self.pulse_start = Some(at),
            Edge::Falling => {
                // A falling edge with no recorded rise carries no pulse
                // width (startup, or capture lost mid-pulse).
                if let Some(start) = self.pulse_start.take() {
                    self.record_pulse(at.duration_since(start));
                }
            }
        }
    }

    fn record_pulse(&mut self, width: Duration) {
        if width >= self.timings.cutoff {
            self.reset();
            return;
        }

        // Shift left to make room, MSB first.
        self.cmd <<= 1;
        if width > self.timings.one_threshold {
            self.cmd += 1;
        }
        self.bit_count += 1;

        if self.bit_count == BITS_PER_COMMAND {
            self.outbox.publish(HiltCommand::new(self.cmd));
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.cmd = 0;
        self.bit_count = 0;
    }
}
