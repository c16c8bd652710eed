use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, StatefulOutputPin},
    spi::SpiDevice,
};
mod address;
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod data_rate;
mod fifo;
mod init;
mod irq;
mod pa_level;
mod payload_length;
mod power;
mod radio;
mod status;
pub use constants::{commands, mnemonics, registers};

use crate::types::{Address, InvalidArgument, StatusFlags};

/// An collection of error types to describe hardware malfunctions and rejected calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO, DI> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (the CE pin).
    Gpo(DO),
    /// Represents a DigitalInput error (the IRQ pin).
    Gpi(DI),
    /// The radio was used before a successful call to
    /// [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init).
    ///
    /// No SPI transaction was performed.
    NotInitialized,
    /// A caller-supplied value was rejected before any register was written.
    InvalidArgument(InvalidArgument),
}

impl<SPI, DO, DI> From<InvalidArgument> for Nrf24Error<SPI, DO, DI> {
    fn from(value: InvalidArgument) -> Self {
        Nrf24Error::InvalidArgument(value)
    }
}

#[cfg(feature = "defmt")]
impl<SPI, DO, DI> defmt::Format for Nrf24Error<SPI, DO, DI>
where
    SPI: core::fmt::Debug,
    DO: core::fmt::Debug,
    DI: core::fmt::Debug,
{
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(e) => defmt::write!(fmt, "Spi({})", defmt::Debug2Format(e)),
            Nrf24Error::Gpo(e) => defmt::write!(fmt, "Gpo({})", defmt::Debug2Format(e)),
            Nrf24Error::Gpi(e) => defmt::write!(fmt, "Gpi({})", defmt::Debug2Format(e)),
            Nrf24Error::NotInitialized => defmt::write!(fmt, "NotInitialized"),
            Nrf24Error::InvalidArgument(e) => defmt::write!(fmt, "InvalidArgument({})", e),
        }
    }
}

const ZEROS: [u8; 32] = [0u8; 32];

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// It owns the radio's SPI device, CE pin, IRQ pin, and a delay provider.
/// The only state cached here is what the chip cannot tell us cheaply:
/// the pipe 0 RX address (restored after every transmission), whether the CE pin
/// is supposed to be active, and the STATUS byte from the latest SPI transaction.
pub struct RF24<SPI, DO, DI, DELAY> {
    ce_pin: DO,
    irq_pin: DI,
    _spi: SPI,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _pipe0_rx_addr: Option<Address>,
    _enabled: bool,
    _initialized: bool,
}

impl<SPI, DO, DI, DELAY> RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`RF24`] object for use on the specified
    /// `spi` bus with the given `ce_pin` and `irq_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// The `irq_pin` should be configured with a pull-up because the radio drives
    /// it active LOW.
    ///
    /// No hardware is touched until
    /// [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init) is called.
    pub fn new(ce_pin: DO, irq_pin: DI, spi: SPI, delay_impl: DELAY) -> Self {
        RF24 {
            ce_pin,
            irq_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _pipe0_rx_addr: None,
            _enabled: false,
            _initialized: false,
        }
    }

    /// Release the hardware handles given to [`RF24::new()`].
    pub fn free(self) -> (SPI, DO, DI, DELAY) {
        (self._spi, self.ce_pin, self.irq_pin, self._delay_impl)
    }

    /// Has [`EsbInit::init()`](fn@crate::radio::prelude::EsbInit::init) succeeded?
    pub fn is_initialized(&self) -> bool {
        self._initialized
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Execute a single SPI transaction.
    ///
    /// The first byte sent is `command | register`, followed by `data`.
    /// Returns the STATUS register (always the first byte received)
    /// and the `data.len()` bytes that followed it.
    ///
    /// This does not touch the CE pin. Writing a register
    /// while the radio is active (CE is HIGH) is not supported by the radio.
    /// Use [`RF24::set_enabled()`] to deactivate the radio beforehand.
    ///
    /// ```ignore
    /// use rf24_irq::radio::{commands, registers};
    /// let (status, response) = radio.execute(commands::R_REGISTER, registers::RF_CH, &[0])?;
    /// let channel = response[0];
    /// ```
    pub fn execute(
        &mut self,
        command: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(StatusFlags, &[u8]), Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        if !self._initialized {
            return Err(Nrf24Error::NotInitialized);
        }
        let len = data.len();
        if len > 32 {
            return Err(InvalidArgument::PayloadLength(len).into());
        }
        self._buf[0] = command | register;
        self._buf[1..=len].copy_from_slice(data);
        self.spi_transfer(len + 1)?;
        Ok((self._status, &self._buf[1..=len]))
    }

    /// Clock out `len` zeros after `command | register` and return what was received.
    pub(crate) fn spi_read(
        &mut self,
        command: u8,
        register: u8,
        len: usize,
    ) -> Result<&[u8], Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        let len = len.min(ZEROS.len());
        self.execute(command, register, &ZEROS[..len])
            .map(|(_, response)| response)
    }

    /// Read a single byte register.
    pub(crate) fn read_byte(
        &mut self,
        register: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        Ok(self.spi_read(commands::R_REGISTER, register, 1)?[0])
    }

    /// Send a command that consists of only 1 byte (e.g. `NOP`, `FLUSH_TX`).
    pub(crate) fn spi_command(
        &mut self,
        command: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        self.execute(command, 0, &[]).map(|(status, _)| status)
    }

    /// Write `data` to a `register`.
    ///
    /// If the radio is enabled, the CE pin is driven LOW for the duration of the
    /// transaction and restored HIGH afterward, even if the transaction failed.
    pub(crate) fn write_register(
        &mut self,
        register: u8,
        data: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        let was_enabled = self._enabled;
        if was_enabled {
            self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        }
        let result = self
            .execute(commands::W_REGISTER, register, data)
            .map(|(status, _)| status);
        if was_enabled {
            self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        }
        result
    }

    pub(crate) fn write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        self.write_register(register, &[byte])
    }

    /// Activate (`true`) or deactivate (`false`) the radio's CE pin.
    ///
    /// While enabled, the radio actively listens (RX mode) or transmits
    /// whatever is in its TX FIFO (TX mode).
    pub fn set_enabled(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        if !self._initialized {
            return Err(Nrf24Error::NotInitialized);
        }
        self._enabled = enable;
        if enable {
            self.ce_pin.set_high()
        } else {
            self.ce_pin.set_low()
        }
        .map_err(Nrf24Error::Gpo)
    }
}

impl<SPI, DO, DI, DELAY> RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: StatefulOutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Is the radio's CE pin currently driven HIGH?
    ///
    /// This reads back the pin's output level rather than trusting
    /// the last value given to [`RF24::set_enabled()`].
    pub fn is_enabled(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        if !self._initialized {
            return Err(Nrf24Error::NotInitialized);
        }
        self.ce_pin.is_set_high().map_err(Nrf24Error::Gpo)
    }
}

#[cfg(test)]
impl<SPI, DO, DI, DELAY> RF24<SPI, DO, DI, DELAY> {
    /// Skip `init()` for tests that only care about a single operation.
    pub(crate) fn assume_initialized(&mut self) {
        self._initialized = true;
    }
}
