use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

use super::{Nrf24Error, RF24};
use crate::{
    events::{IrqOutcome, RadioEventHandler},
    log::error,
    Edge,
};

/// An [`RF24`] guarded by a blocking mutex, for use from both
/// the application and the IRQ pin's interrupt handler.
///
/// Every register access and CE pin toggle happens while the mutex is held.
/// The type of raw mutex `M` decides how the lock is implemented:
///
/// - [`CriticalSectionRawMutex`](embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex)
///   when the radio is shared with an interrupt handler.
/// - [`NoopRawMutex`](embassy_sync::blocking_mutex::raw::NoopRawMutex)
///   when everything runs in one execution context.
///
/// ```ignore
/// static RADIO: StaticCell<SharedRadio<CriticalSectionRawMutex, Spi, Ce, Irq, Delay>> = StaticCell::new();
/// let radio = RADIO.init(SharedRadio::new(RF24::new(ce_pin, irq_pin, spi, delay)));
/// radio.lock(|radio| {
///     radio.init()?;
///     radio.set_enabled(true)
/// })?;
///
/// // in the GPIO interrupt handler
/// radio.on_irq_edge(Edge::Falling, &mut handler).ok();
/// ```
pub struct SharedRadio<M: RawMutex, SPI, DO, DI, DELAY> {
    radio: Mutex<M, RefCell<RF24<SPI, DO, DI, DELAY>>>,
}

impl<M, SPI, DO, DI, DELAY> SharedRadio<M, SPI, DO, DI, DELAY>
where
    M: RawMutex,
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    pub const fn new(radio: RF24<SPI, DO, DI, DELAY>) -> Self {
        Self {
            radio: Mutex::new(RefCell::new(radio)),
        }
    }

    /// Get exclusive access to the radio for the duration of `f`.
    ///
    /// <div class="warning">
    ///
    /// Calling [`SharedRadio::lock()`] again from within `f` panics.
    ///
    /// </div>
    pub fn lock<R>(&self, f: impl FnOnce(&mut RF24<SPI, DO, DI, DELAY>) -> R) -> R {
        self.radio.lock(|radio| f(&mut radio.borrow_mut()))
    }

    /// Release the radio.
    pub fn into_inner(self) -> RF24<SPI, DO, DI, DELAY> {
        self.radio.into_inner().into_inner()
    }

    /// Service the radio (see [`RF24::service_irq()`]) and notify the `handler` of the outcome.
    ///
    /// The `handler` is called after the radio is unlocked, so it may use
    /// [`SharedRadio::lock()`] to respond.
    pub fn service_irq<H: RadioEventHandler + ?Sized>(
        &self,
        handler: &mut H,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        let result = self.lock(|radio| radio.service_irq());
        self.dispatch(result, handler)
    }

    /// Same as [`SharedRadio::service_irq()`], but only for a [`Edge::Falling`] transition.
    pub fn on_irq_edge<H: RadioEventHandler + ?Sized>(
        &self,
        edge: Edge,
        handler: &mut H,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        let result = self.lock(|radio| radio.on_irq_edge(edge));
        self.dispatch(result, handler)
    }

    /// Same as [`SharedRadio::service_irq()`], but only if the IRQ pin is active.
    pub fn poll_irq<H: RadioEventHandler + ?Sized>(
        &self,
        handler: &mut H,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        let result = self.lock(|radio| radio.poll_irq());
        self.dispatch(result, handler)
    }

    fn dispatch<H: RadioEventHandler + ?Sized>(
        &self,
        result: Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>>,
        handler: &mut H,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        match &result {
            Ok(Some(outcome)) => outcome.dispatch(handler),
            Ok(None) => (),
            Err(_e) => {
                error!("failed to service IRQ: {}", _e);
            }
        }
        result
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::SharedRadio;
    use crate::{
        events::{IrqOutcome, RadioEventHandler},
        radio::{commands, prelude::*, registers},
        spi_test_expects,
        test::{mk_radio, MockRF24},
        Edge,
    };
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::{vec, vec::Vec};

    type MockShared = SharedRadio<NoopRawMutex, SpiMock<u8>, PinMock, PinMock, NoopDelay>;

    /// Records payloads and inspects the radio from within the callback.
    struct Replier<'a> {
        radio: &'a MockShared,
        received: Vec<Vec<u8>>,
        rx_dr_seen: bool,
    }

    impl RadioEventHandler for Replier<'_> {
        fn on_payload_received(&mut self, payload: &[u8]) {
            self.received.push(payload.to_vec());
            // the radio is not locked anymore
            self.rx_dr_seen = self.radio.lock(|radio| radio.get_status_flags().rx_dr());
        }
    }

    fn enabled(radio: MockRF24) -> MockShared {
        let shared = SharedRadio::new(radio);
        shared.lock(|radio| radio.set_enabled(true)).unwrap();
        shared
    }

    #[test]
    pub fn dispatch_after_unlock() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::NOP], vec![0x42u8]),
            (vec![commands::R_RX_PL_WID, 0u8], vec![0x42u8, 2u8]),
            (vec![commands::R_RX_PAYLOAD, 0u8, 0u8], vec![0x42u8, b'h', b'i']),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x40u8],
                vec![0x4Eu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let shared = enabled(mocks.0);
        let mut handler = Replier {
            radio: &shared,
            received: Vec::new(),
            rx_dr_seen: false,
        };
        // rising edges are ignored
        assert_eq!(shared.on_irq_edge(Edge::Rising, &mut handler), Ok(None));
        let outcome = shared.on_irq_edge(Edge::Falling, &mut handler).unwrap();
        assert!(matches!(outcome, Some(IrqOutcome::Received(_))));
        assert_eq!(handler.received, [b"hi".to_vec()]);
        assert!(handler.rx_dr_seen);
        mocks.1.done();
        mocks.2.done();
        mocks.3.done();
    }

    #[test]
    pub fn transmit_failed() {
        struct Failures(usize);
        impl RadioEventHandler for Failures {
            fn on_payload_received(&mut self, _payload: &[u8]) {}

            fn on_transmit_failed(&mut self) {
                self.0 += 1;
            }
        }

        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0xFu8],
                vec![0xEu8, 0u8],
            ),
            (vec![commands::NOP], vec![0x1Eu8]),
            (vec![commands::FLUSH_TX], vec![0x1Eu8]),
            (
                vec![registers::STATUS | commands::W_REGISTER, 0x10u8],
                vec![0x1Eu8, 0u8],
            ),
        ];
        let mut mocks = mk_radio(&ce_expectations, &spi_expectations);
        let shared = enabled(mocks.0);
        let mut handler = Failures(0);
        assert_eq!(
            shared.service_irq(&mut handler),
            Ok(Some(IrqOutcome::TxFailed))
        );
        assert_eq!(handler.0, 1);
        let _radio = shared.into_inner();
        mocks.1.done();
        mocks.2.done();
        mocks.3.done();
    }
}
