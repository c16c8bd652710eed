//! Delivery of the radio's IRQ outcomes to the application.
//!
//! [`RF24::service_irq()`](fn@crate::radio::RF24::service_irq) produces at most one
//! [`IrqOutcome`] per interrupt. The outcome can be handed to any [`RadioEventHandler`],
//! including an [`EventChannel`] that queues [`RadioEvent`]s for an async task.
//!
//! ```
//! use rf24_irq::events::RadioEventHandler;
//!
//! struct Counter {
//!     bytes: usize,
//!     failures: usize,
//! }
//!
//! impl RadioEventHandler for Counter {
//!     fn on_payload_received(&mut self, payload: &[u8]) {
//!         self.bytes += payload.len();
//!     }
//!
//!     fn on_transmit_failed(&mut self) {
//!         self.failures += 1;
//!     }
//! }
//! ```

use core::slice::Iter;

use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

use crate::{log::warn, Payload};

/// A single notification about the radio's activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioEvent {
    /// A payload was read from the RX FIFO.
    PayloadReceived(Payload),
    /// The radio finished transmitting (and received an ACK packet if auto-ack is enabled).
    TransmitSucceeded,
    /// The radio reached the auto-retry limit without receiving an ACK packet.
    TransmitFailed,
    /// The radio reported a payload length that cannot be valid.
    /// The RX FIFO was flushed.
    PayloadCorrupted,
}

/// The payloads drained from the RX FIFO during one interrupt, in the order received.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PayloadBatch {
    payloads: [Payload; PayloadBatch::CAPACITY],
    len: usize,
}

impl PayloadBatch {
    /// The most payloads read in response to a single interrupt.
    pub const CAPACITY: usize = 6;

    pub const fn new() -> Self {
        Self {
            payloads: [Payload::EMPTY; Self::CAPACITY],
            len: 0,
        }
    }

    /// Append a `payload`. If the batch is full, the `payload` is given back.
    pub fn push(&mut self, payload: Payload) -> Result<(), Payload> {
        if self.is_full() {
            return Err(payload);
        }
        self.payloads[self.len] = payload;
        self.len += 1;
        Ok(())
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len >= Self::CAPACITY
    }

    pub fn as_slice(&self) -> &[Payload] {
        &self.payloads[..self.len]
    }

    pub fn iter(&self) -> Iter<'_, Payload> {
        self.as_slice().iter()
    }
}

impl Default for PayloadBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a PayloadBatch {
    type Item = &'a Payload;
    type IntoIter = Iter<'a, Payload>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::fmt::Debug for PayloadBatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PayloadBatch {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_slice())
    }
}

/// The single result of servicing an interrupt.
///
/// Precedence is: corruption, then received payloads, then a successful transmission.
/// Anything else is reported as a failed transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqOutcome {
    Received(PayloadBatch),
    Corrupted,
    TxSucceeded,
    TxFailed,
}

impl IrqOutcome {
    /// Notify the `handler` about this outcome.
    ///
    /// A [`IrqOutcome::Received`] batch invokes
    /// [`RadioEventHandler::on_payload_received()`] once per payload, in order.
    pub fn dispatch<H: RadioEventHandler + ?Sized>(&self, handler: &mut H) {
        match self {
            IrqOutcome::Received(batch) => {
                for payload in batch {
                    handler.on_payload_received(payload.as_bytes());
                }
            }
            IrqOutcome::Corrupted => handler.on_payload_corrupted(),
            IrqOutcome::TxSucceeded => handler.on_transmit_succeeded(),
            IrqOutcome::TxFailed => handler.on_transmit_failed(),
        }
    }

    /// Visit this outcome as a sequence of [`RadioEvent`]s.
    pub fn for_each_event<F: FnMut(RadioEvent)>(&self, mut f: F) {
        match self {
            IrqOutcome::Received(batch) => {
                for payload in batch {
                    f(RadioEvent::PayloadReceived(*payload));
                }
            }
            IrqOutcome::Corrupted => f(RadioEvent::PayloadCorrupted),
            IrqOutcome::TxSucceeded => f(RadioEvent::TransmitSucceeded),
            IrqOutcome::TxFailed => f(RadioEvent::TransmitFailed),
        }
    }
}

/// An observer of the radio's IRQ outcomes.
///
/// Only [`RadioEventHandler::on_payload_received()`] is required.
/// The other notifications are ignored by default.
///
/// Handlers are invoked after the radio has been released by
/// [`SharedRadio`](struct@crate::radio::SharedRadio), so they may use the radio again
/// (e.g. to reply with [`EsbRadio::send_to()`](fn@crate::radio::prelude::EsbRadio::send_to)).
pub trait RadioEventHandler {
    fn on_payload_received(&mut self, payload: &[u8]);

    fn on_transmit_succeeded(&mut self) {}

    fn on_transmit_failed(&mut self) {}

    fn on_payload_corrupted(&mut self) {}
}

/// A [`RadioEventHandler`] that forwards [`RadioEvent`]s to a bounded
/// [`Channel`](embassy_sync::channel::Channel).
///
/// Events are never awaited. If the channel is full, the event is dropped
/// (and a warning is logged).
///
/// ```
/// use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel};
/// use rf24_irq::events::{EventChannel, IrqOutcome, RadioEvent};
///
/// let channel = Channel::<NoopRawMutex, RadioEvent, 4>::new();
/// let mut events = EventChannel::new(&channel);
/// IrqOutcome::TxSucceeded.dispatch(&mut events);
/// assert_eq!(channel.try_receive(), Ok(RadioEvent::TransmitSucceeded));
/// ```
pub struct EventChannel<'a, M: RawMutex, const N: usize> {
    channel: &'a Channel<M, RadioEvent, N>,
}

impl<'a, M: RawMutex, const N: usize> EventChannel<'a, M, N> {
    pub const fn new(channel: &'a Channel<M, RadioEvent, N>) -> Self {
        Self { channel }
    }

    fn publish(&mut self, event: RadioEvent) {
        if self.channel.try_send(event).is_err() {
            warn!("event channel is full; dropped {}", event);
        }
    }
}

impl<M: RawMutex, const N: usize> RadioEventHandler for EventChannel<'_, M, N> {
    fn on_payload_received(&mut self, payload: &[u8]) {
        // a payload from the radio is never empty nor longer than 32 bytes
        if let Ok(payload) = Payload::new(payload) {
            self.publish(RadioEvent::PayloadReceived(payload));
        }
    }

    fn on_transmit_succeeded(&mut self) {
        self.publish(RadioEvent::TransmitSucceeded);
    }

    fn on_transmit_failed(&mut self) {
        self.publish(RadioEvent::TransmitFailed);
    }

    fn on_payload_corrupted(&mut self) {
        self.publish(RadioEvent::PayloadCorrupted);
    }
}
