use super::{bit_fields::Feature, commands, mnemonics, registers};
use crate::radio::{prelude::EsbPayloadLength, Nrf24Error, RF24};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbPayloadLength for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::PayloadLengthErrorType> {
        let feature = Feature::from_bits(self.read_byte(registers::FEATURE)?)
            .with_dynamic_payloads(enable)
            .with_ack_payloads(enable);
        self.write_byte(registers::FEATURE, feature.into_bits())?;
        self.write_byte(registers::DYNPD, mnemonics::ALL_PIPES * enable as u8)?;
        Ok(())
    }

    fn get_dynamic_payloads(&mut self) -> Result<bool, Self::PayloadLengthErrorType> {
        let feature = Feature::from_bits(self.read_byte(registers::FEATURE)?);
        Ok(feature.dynamic_payloads() && feature.ack_payloads())
    }

    fn get_dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadLengthErrorType> {
        Ok(self.spi_read(commands::R_RX_PL_WID, 0, 1)?[0])
    }
}
