use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, RF24},
    types::StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, DI, DELAY> EsbStatus for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)?;
        Ok(())
    }

    fn update(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.spi_command(commands::NOP)
    }

    fn get_status_flags(&self) -> StatusFlags {
        self._status
    }
}
