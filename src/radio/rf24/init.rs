use super::{mnemonics, registers, Nrf24Error, RF24};
use crate::{
    log::info,
    radio::{
        prelude::{
            EsbAutoAck, EsbChannel, EsbDataRate, EsbFifo, EsbInit, EsbPaLevel, EsbPipe, EsbRadio,
            EsbStatus,
        },
        RadioConfig,
    },
    StatusFlags,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> EsbInit for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and pins given
    /// to [`RF24::new()`].
    ///
    /// If anything fails, the radio is left uninitialized.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        self._initialized = false;
        self._enabled = false;
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        // The radio needs time to settle after power on reset,
        // otherwise configuration bits will not necessarily stick.
        self._delay_impl.delay_ms(100);

        self._initialized = true;
        let result = self.with_config(&RadioConfig::default());
        if result.is_err() {
            self._initialized = false;
        } else {
            info!("radio initialized");
        }
        result
    }

    /// The radio is left in RX mode. The CE pin is not changed.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.set_address(config.address())?;
        self.set_data_rate(config.data_rate())?;

        self.write_byte(registers::FEATURE, config.feature.into_bits())?;
        self.write_byte(
            registers::DYNPD,
            mnemonics::ALL_PIPES * config.dynamic_payloads() as u8,
        )?;
        self.set_auto_ack(config.auto_ack())?;

        // Flush buffers
        self.flush_rx()?;
        self.flush_tx()?;
        self.clear_status_flags(StatusFlags::new())?;

        self.write_byte(registers::SETUP_RETR, config.auto_retries.into_bits())?;
        self.set_channel(config.channel())?;
        self.set_pa_level(config.pa_level())?;
        self.as_rx()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbInit};
    use crate::{
        radio::{commands, Nrf24Error, RadioConfig},
        spi_test_expects,
        test::mk_uninit_radio,
        DataRate, PaLevel,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn init() {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            // set_address(b"NRF1")
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 2u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, b'N', b'R', b'F', b'1'],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8],
            ),
            // set_data_rate(2 Mbps)
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0xFu8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            // dynamic payloads and ACK payloads
            (
                vec![registers::FEATURE | commands::W_REGISTER, 6u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            // set_auto_ack(true)
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x5Fu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 76u8],
                vec![0xEu8, 0u8],
            ),
            // set_pa_level(Max)
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0xFu8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            // as_rx()
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, b'N', b'R', b'F', b'1'],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mut mocks = mk_uninit_radio(&ce_expectations, &[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.init().unwrap();
        assert!(radio.is_initialized());
        mocks.done();
    }

    #[test]
    pub fn with_config() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, b'B', b'a', b's', b'e', b'1'],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0xFu8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x27u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::FEATURE | commands::W_REGISTER, 1u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::DYNPD | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0u8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x70u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x23u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 42u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::RF_SETUP, 0u8], vec![0xEu8, 0x27u8]),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x21u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, b'B', b'a', b's', b'e', b'1'],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let config = RadioConfig::default()
            .with_address(b"Base1")
            .unwrap()
            .with_channel(42)
            .unwrap()
            .with_data_rate(DataRate::Kbps250)
            .with_pa_level(PaLevel::Min)
            .with_dynamic_payloads(false)
            .with_auto_ack(false)
            .with_ask_no_ack(true)
            .with_auto_retries(2, 3);
        let mut mocks = crate::test::mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.with_config(&config).unwrap();
        mocks.done();
    }

    #[test]
    pub fn with_config_uninitialized() {
        let mut mocks = mk_uninit_radio(&[], &[], &[]);
        let radio = &mut mocks.0;
        assert_eq!(
            radio.with_config(&RadioConfig::default()),
            Err(Nrf24Error::NotInitialized)
        );
        assert!(!radio.is_initialized());
        mocks.done();
    }
}
