use super::{bit_fields::Config, registers};
use crate::radio::{prelude::EsbPower, Nrf24Error, RF24};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbPower for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn set_powered(&mut self, enable: bool) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_byte(registers::CONFIG)?);
        self.write_byte(registers::CONFIG, config.with_power(enable).into_bits())?;
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        Ok(Config::from_bits(self.read_byte(registers::CONFIG)?).power())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPower};
    use crate::{radio::commands, spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn power() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xFu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xDu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xDu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xDu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0xFu8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_powered(false).unwrap();
        assert!(!radio.is_powered().unwrap());
        radio.set_powered(true).unwrap();
        assert!(radio.is_powered().unwrap());
        mocks.done();
    }
}
