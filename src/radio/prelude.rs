//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use rf24_irq::radio::prelude::*;
//! ```

use crate::types::{Address, AddressSlot, DataRate, PaLevel, StatusFlags};

use super::RadioConfig;

/// A trait to represent manipulation of pipe addresses
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Set the `address` used by pipe 0.
    ///
    /// The `address` must be 3 to 5 bytes long. Its length also sets the
    /// address width used by all pipes.
    ///
    /// <div class="warning">
    ///
    /// Pipe 0 is also used to receive ACK packets while transmitting, so
    /// [`EsbRadio::send_to()`] overwrites it. The `address` given here is cached
    /// and restored at every call to [`EsbRadio::as_rx()`].
    ///
    /// </div>
    fn set_address(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Get the address used by pipe 0.
    ///
    /// The number of bytes read is the length of the address
    /// last given to [`EsbPipe::set_address()`] (or 5 if none was given).
    fn get_address(&mut self) -> Result<Address, Self::PipeErrorType>;

    /// Set the `address` of any pipe.
    ///
    /// Pipes 2 - 5 only store 1 byte on the radio (the first byte of `address`).
    /// They borrow the remaining bytes from pipe 1.
    /// Unlike [`EsbPipe::set_address()`], this does not change the address width.
    fn set_address_slot(
        &mut self,
        slot: AddressSlot,
        address: &[u8],
    ) -> Result<(), Self::PipeErrorType>;

    /// Read `width` bytes (3 to 5) from the address register of the given `slot`.
    fn get_address_slot(
        &mut self,
        slot: AddressSlot,
        width: usize,
    ) -> Result<Address, Self::PipeErrorType>;

    /// Get the currently configured address length (applied to all pipes).
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The default channel is 76 (2400 + 76 = 2.476 GHz).
    ///
    /// Channels greater than 127 are rejected.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;

    /// Get the radio's currently selected frequency (in MHz).
    fn get_frequency(&mut self) -> Result<u16, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self) -> StatusFlags;

    /// Clear the radio's IRQ status flags
    ///
    /// This needs to be done after the event has been handled.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// interrupt event. Setting any member of [`StatusFlags`] to `false` will leave
    /// the corresponding status flag untouched. This means that the IRQ pin can remain
    /// active (LOW) when multiple events occurred but only flag was cleared.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    fn update(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;
}

/// A trait to represent manipulation of payload lengths
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the dynamic payloads feature for all pipes.
    ///
    /// This also toggles the ACK payloads feature (which requires dynamic payloads).
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the current setting of the dynamic payloads feature.
    ///
    /// This is `true` only when both dynamic payloads and ACK payloads are enabled.
    fn get_dynamic_payloads(&mut self) -> Result<bool, Self::PayloadLengthErrorType>;

    /// Get the dynamic length of the next available payload in the RX FIFO.
    ///
    /// A value greater than 32 means the payload is corrupted.
    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType>;
}

/// A trait to represent manipulation of the automatic acknowledgement feature
/// for an ESB capable transceiver.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Enable or disable the auto-ack (automatic acknowledgement) feature for all
    /// pipes.
    ///
    /// Please remember that this feature's configuration
    /// needs to match for transmitting and receiving radios.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Is the auto-ack feature enabled for any pipe?
    fn get_auto_ack(&mut self) -> Result<bool, Self::AutoAckErrorType>;

    /// Set the auto-ack feature for an individual pipe.
    fn set_auto_ack_pipe(
        &mut self,
        enable: bool,
        slot: AddressSlot,
    ) -> Result<(), Self::AutoAckErrorType>;

    /// Allow the functionality of the `ask_no_ack` parameter in [`EsbRadio::send_to()`].
    fn allow_ask_no_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Get the setting controlled by [`EsbAutoAck::allow_ask_no_ack()`].
    fn get_ask_no_ack(&mut self) -> Result<bool, Self::AutoAckErrorType>;

    /// Set the number of retry attempts and delay between retry attempts when
    /// transmitting a payload.
    ///
    /// Both parameters are clamped to range [0, 15].
    /// - `delay`: How long to wait between each retry, in multiples of
    ///   250 us (microseconds). The minimum value of 0 means 250 us, and
    ///   the maximum value of 15 means 4000 us.
    ///   The default value of 5 means 1500us (`5 * 250 + 250`).
    /// - `count`: How many retries before giving up. The default/maximum is 15. Use
    ///   0 to disable the auto-retry feature.
    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Get the `(delay, count)` set by [`EsbAutoAck::set_auto_retries()`].
    fn get_auto_retries(&mut self) -> Result<(u8, u8), Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of the power amplitude level
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the currently configured Power Amplitude Level (PA Level)
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's Power Amplitude Level (PA Level)
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the state of power
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power up (`true`) or power down (`false`) the radio.
    ///
    /// <div class="warning">
    ///
    /// The nRF24L01 cannot receive nor transmit data when powered down.
    ///
    /// </div>
    fn set_powered(&mut self, enable: bool) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    ///
    /// This reads the CONFIG register.
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of the Data Rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the currently configured Data Rate
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's Data Rate
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This deactivates the CE pin, waits 100 milliseconds for the radio to settle,
    /// then applies [`RadioConfig::default()`] with [`EsbInit::with_config()`].
    ///
    /// Afterward, the radio is in RX mode but not enabled.
    /// Use [`RF24::set_enabled()`](fn@crate::radio::RF24::set_enabled) to start listening.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for more detail.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent manipulation of an ESB capable transceiver.
///
/// Although the name is rather generic, this trait describes the
/// behavior of a radio's rudimentary modes (RX and TX).
pub trait EsbRadio {
    type RadioErrorType;

    /// Put the radio into RX mode.
    ///
    /// This restores the address given to [`EsbPipe::set_address()`] on pipe 0.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into TX mode.
    fn as_tx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Non-blocking function to transmit a `buf` to the given `address`.
    ///
    /// The radio is put in TX mode and the payload is written into the TX FIFO.
    /// Then the radio is enabled to start transmitting.
    ///
    /// The outcome is signaled on the IRQ pin and reported by
    /// [`RF24::service_irq()`](fn@crate::radio::RF24::service_irq).
    ///
    /// If `ask_no_ack` is true, then the transmitted payload will not use the auto-ack
    /// feature. If [`EsbAutoAck::allow_ask_no_ack()`] is not passed `true` at least once
    /// before passing `true` to this parameter, then this parameter has no effect.
    fn send_to(
        &mut self,
        address: &[u8],
        buf: &[u8],
        ask_no_ack: bool,
    ) -> Result<(), Self::RadioErrorType>;

    /// Get the Auto-Retry Count (ARC) about the previous transmission.
    ///
    /// This data is reset for every payload attempted to transmit.
    /// It cannot exceed 15 per the `count` parameter in [`EsbAutoAck::set_auto_retries()`].
    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType>;
}
