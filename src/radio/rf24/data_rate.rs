use super::{bit_fields::RfSetup, registers};
use crate::{
    radio::{prelude::EsbDataRate, Nrf24Error, RF24},
    DataRate,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbDataRate for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let setup = RfSetup::from_bits(self.read_byte(registers::RF_SETUP)?);
        Ok(setup.data_rate())
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let setup = RfSetup::from_bits(self.read_byte(registers::RF_SETUP)?);
        self.write_byte(
            registers::RF_SETUP,
            setup.with_data_rate(data_rate).into_bits(),
        )?;
        Ok(())
    }
}
