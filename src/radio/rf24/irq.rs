use super::{commands, Nrf24Error, RF24};
use crate::{
    events::{IrqOutcome, PayloadBatch},
    log::{debug, warn},
    radio::prelude::{EsbFifo, EsbPayloadLength, EsbRadio, EsbStatus},
    Edge, Payload, StatusFlags,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

impl<SPI, DO, DI, DELAY> RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    /// Handle the radio's IRQ events.
    ///
    /// This should be called when the IRQ pin goes active (LOW).
    /// It drains the RX FIFO (up to [`PayloadBatch::CAPACITY`] payloads),
    /// handles the TX flags, clears the status flags that were handled, and
    /// returns the single [`IrqOutcome`] that describes what happened.
    ///
    /// A reported payload length of 0 or more than 32 bytes is treated as corruption:
    /// the RX FIFO is flushed and [`IrqOutcome::Corrupted`] is returned.
    ///
    /// `Ok(None)` is returned if the radio was not initialized or not enabled.
    /// A disabled radio has both FIFOs flushed.
    ///
    /// <div class="warning">
    ///
    /// The radio is always put back in RX mode (and re-enabled),
    /// even if the interrupt was caused by a transmission.
    /// The CE pin is re-enabled even if an error occurred.
    ///
    /// </div>
    pub fn service_irq(
        &mut self,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        if !self._initialized {
            return Ok(None);
        }
        if !self._enabled {
            self.flush_rx()?;
            self.flush_tx()?;
            return Ok(None);
        }
        let outcome = self.handle_irq_events();
        let enabled = self.set_enabled(true);
        let outcome = outcome?;
        enabled?;
        Ok(Some(outcome))
    }

    fn handle_irq_events(
        &mut self,
    ) -> Result<IrqOutcome, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        self.set_enabled(false)?;
        self.as_rx()?;

        let mut status = self.update()?;
        let rx_dr = StatusFlags::default().with_rx_dr(true);
        let mut batch = PayloadBatch::new();
        let mut corrupted = false;
        while status.rx_dr() && !status.rx_empty() {
            let width = self.get_dynamic_payload_length()? as usize;
            let discard = if width == 0 || width > Payload::MAX_LEN {
                warn!("discarding corrupted payload (length {})", width);
                corrupted = true;
                true
            } else if batch.is_full() {
                warn!("RX FIFO overflow; discarding remaining payloads");
                true
            } else {
                let payload = Payload::new(self.spi_read(commands::R_RX_PAYLOAD, 0, width)?)?;
                batch.push(payload).is_err()
            };
            if discard {
                self.flush_rx()?;
            }
            self.clear_status_flags(rx_dr)?;
            // TX flags may have been raised while draining
            status = self._status;
            if discard {
                break;
            }
        }

        if status.tx_df() {
            self.flush_tx()?;
            self.clear_status_flags(StatusFlags::default().with_tx_df(true))?;
        }
        if status.tx_full() {
            self.flush_tx()?;
        }
        if status.tx_ds() {
            debug!("data sent");
            self.clear_status_flags(StatusFlags::default().with_tx_ds(true))?;
        }

        Ok(if corrupted {
            IrqOutcome::Corrupted
        } else if !batch.is_empty() {
            IrqOutcome::Received(batch)
        } else if status.tx_ds() {
            IrqOutcome::TxSucceeded
        } else {
            IrqOutcome::TxFailed
        })
    }

    /// Service the radio for a transition observed on the IRQ pin.
    ///
    /// Only a [`Edge::Falling`] transition is serviced.
    pub fn on_irq_edge(
        &mut self,
        edge: Edge,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        match edge {
            Edge::Falling => self.service_irq(),
            Edge::Rising => Ok(None),
        }
    }

    /// Read the IRQ pin and service the radio if the pin is active (LOW).
    ///
    /// Use this when the IRQ pin cannot be attached to an interrupt.
    pub fn poll_irq(
        &mut self,
    ) -> Result<Option<IrqOutcome>, Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        if self.irq_pin.is_low().map_err(Nrf24Error::Gpi)? {
            self.service_irq()
        } else {
            Ok(None)
        }
    }
}
