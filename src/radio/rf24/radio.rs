use super::{bit_fields::Config, commands, mnemonics, registers, Nrf24Error, RF24};
use crate::{log::debug, radio::prelude::EsbRadio, Address, Payload};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbRadio for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    /// This does not change the CE pin. Use [`RF24::set_enabled()`]
    /// to start listening.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType> {
        // Restore the pipe0 address, if exists
        self.restore_pipe0_address()?;
        self.write_byte(registers::CONFIG, Config::powered().as_rx().into_bits())?;
        Ok(())
    }

    fn as_tx(&mut self) -> Result<(), Self::RadioErrorType> {
        self.write_byte(registers::CONFIG, Config::powered().as_tx().into_bits())?;
        Ok(())
    }

    /// See [`EsbRadio::send_to()`] for implementation-agnostic detail.
    ///
    /// Pipe 0's RX address is overwritten with `address` so ACK packets can be received.
    /// It is restored by [`RF24::as_rx()`] (which [`RF24::service_irq()`] calls).
    fn send_to(
        &mut self,
        address: &[u8],
        buf: &[u8],
        ask_no_ack: bool,
    ) -> Result<(), Self::RadioErrorType> {
        let address = Address::new(address)?;
        let payload = Payload::new(buf)?;

        self.set_enabled(false)?;
        self.as_tx()?;
        self.write_register(registers::TX_ADDR, address.as_bytes())?;
        self.write_register(registers::RX_ADDR_P0, address.as_bytes())?;
        let command = if ask_no_ack {
            commands::W_TX_PAYLOAD_NO_ACK
        } else {
            commands::W_TX_PAYLOAD
        };
        self.execute(command, 0, payload.as_bytes())?;
        debug!("sending {} to {}", payload, address);
        self.set_enabled(true)
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType> {
        Ok(self.read_byte(registers::OBSERVE_TX)? & mnemonics::ARC_CNT_MASK)
    }
}
