use super::{mnemonics, registers};
use crate::{
    radio::{prelude::EsbChannel, Nrf24Error, RF24},
    InvalidArgument,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbChannel for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    /// The nRF24L01 supports 128 channels. Any `channel` greater than 127
    /// is rejected with [`InvalidArgument::Channel`].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        if channel > 127 {
            return Err(InvalidArgument::Channel(channel).into());
        }
        self.write_byte(registers::RF_CH, channel & mnemonics::RF_CH_MASK)?;
        Ok(())
    }

    /// See also [`RF24::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        Ok(self.read_byte(registers::RF_CH)? & mnemonics::RF_CH_MASK)
    }

    fn get_frequency(&mut self) -> Result<u16, Self::ChannelErrorType> {
        Ok(2400 + self.get_channel()? as u16)
    }
}
