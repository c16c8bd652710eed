use super::{
    bit_fields::{Feature, SetupRetry},
    mnemonics, registers,
};
use crate::{
    radio::{prelude::EsbAutoAck, Nrf24Error, RF24},
    AddressSlot,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbAutoAck for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_byte(
            registers::EN_AA,
            mnemonics::ALL_PIPES * (enable as u8),
        )?;
        Ok(())
    }

    fn get_auto_ack(&mut self) -> Result<bool, Self::AutoAckErrorType> {
        Ok(self.read_byte(registers::EN_AA)? & mnemonics::ALL_PIPES != 0)
    }

    fn set_auto_ack_pipe(
        &mut self,
        enable: bool,
        slot: AddressSlot,
    ) -> Result<(), Self::AutoAckErrorType> {
        let mask = 1 << slot.index();
        let reg_val = self.read_byte(registers::EN_AA)? & !mask;
        self.write_byte(registers::EN_AA, reg_val | (mask * enable as u8))?;
        Ok(())
    }

    fn allow_ask_no_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        let feature = Feature::from_bits(self.read_byte(registers::FEATURE)?);
        self.write_byte(
            registers::FEATURE,
            feature.with_ask_no_ack(enable).into_bits(),
        )?;
        Ok(())
    }

    fn get_ask_no_ack(&mut self) -> Result<bool, Self::AutoAckErrorType> {
        Ok(Feature::from_bits(self.read_byte(registers::FEATURE)?).ask_no_ack())
    }

    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        self.write_byte(
            registers::SETUP_RETR,
            SetupRetry::from_params(delay, count).into_bits(),
        )?;
        Ok(())
    }

    fn get_auto_retries(&mut self) -> Result<(u8, u8), Self::AutoAckErrorType> {
        let retries = SetupRetry::from_bits(self.read_byte(registers::SETUP_RETR)?);
        Ok((retries.ard(), retries.arc()))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbAutoAck};
    use crate::{radio::commands, spi_test_expects, test::mk_radio, AddressSlot};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn auto_ack() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_AA, 0u8], vec![0xEu8, 0u8]),
            (vec![registers::EN_AA, 0u8], vec![0xEu8, 0x20u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_auto_ack(true).unwrap();
        radio.set_auto_ack(false).unwrap();
        assert!(!radio.get_auto_ack().unwrap());
        assert!(radio.get_auto_ack().unwrap());
        mocks.done();
    }

    #[test]
    pub fn auto_ack_pipe() {
        let spi_expectations = spi_test_expects![
            (vec![registers::EN_AA, 0u8], vec![0xEu8, 0x3Fu8]),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0x3Bu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::EN_AA, 0u8], vec![0xEu8, 0u8]),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_auto_ack_pipe(false, AddressSlot::P2).unwrap();
        radio.set_auto_ack_pipe(true, AddressSlot::P0).unwrap();
        mocks.done();
    }

    #[test]
    pub fn ask_no_ack() {
        let spi_expectations = spi_test_expects![
            // other FEATURE bits are preserved
            (vec![registers::FEATURE, 0u8], vec![0xEu8, 6u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 7u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::FEATURE, 0u8], vec![0xEu8, 7u8]),
            (vec![registers::FEATURE, 0u8], vec![0xEu8, 7u8]),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 6u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.allow_ask_no_ack(true).unwrap();
        assert!(radio.get_ask_no_ack().unwrap());
        radio.allow_ask_no_ack(false).unwrap();
        mocks.done();
    }

    #[test]
    pub fn auto_retries() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x5Fu8],
                vec![0xEu8, 0u8],
            ),
            // count is clamped to 15
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x5Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0x23u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_auto_retries(5, 15).unwrap();
        radio.set_auto_retries(5, 60).unwrap();
        assert_eq!(radio.get_auto_retries().unwrap(), (2, 3));
        mocks.done();
    }
}
