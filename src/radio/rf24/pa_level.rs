use crate::{
    radio::{prelude::EsbPaLevel, Nrf24Error, RF24},
    PaLevel,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{bit_fields::RfSetup, registers};

impl<SPI, DO, DI, DELAY> EsbPaLevel for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        Ok(RfSetup::from_bits(self.read_byte(registers::RF_SETUP)?).pa_level())
    }

    /// Only bits 1 and 2 of the RF_SETUP register are changed.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let setup = RfSetup::from_bits(self.read_byte(registers::RF_SETUP)?);
        self.write_byte(
            registers::RF_SETUP,
            setup.with_pa_level(pa_level).into_bits(),
        )?;
        Ok(())
    }
}
