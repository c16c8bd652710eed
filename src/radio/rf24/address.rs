use super::{commands, mnemonics, registers};
use crate::{
    radio::{prelude::EsbPipe, Nrf24Error, RF24},
    Address, AddressSlot, InvalidArgument,
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
    /// Write the cached pipe 0 address (if any) back to RX_ADDR_P0.
    pub(super) fn restore_pipe0_address(
        &mut self,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error, DI::Error>> {
        if let Some(address) = self._pipe0_rx_addr {
            self.write_register(registers::RX_ADDR_P0, address.as_bytes())?;
        }
        Ok(())
    }
}

impl<SPI, DO, DI, DELAY> EsbPipe for RF24<SPI, DO, DI, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DI: InputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error, DI::Error>;

    fn set_address(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let address = Address::new(address)?;
        self.write_byte(registers::SETUP_AW, address.width_field())?;
        self.write_register(registers::RX_ADDR_P0, address.as_bytes())?;
        self._pipe0_rx_addr = Some(address);
        Ok(())
    }

    fn get_address(&mut self) -> Result<Address, Self::PipeErrorType> {
        let width = self
            ._pipe0_rx_addr
            .map_or(Address::MAX_LEN, |address| address.len());
        let address = self.spi_read(commands::R_REGISTER, registers::RX_ADDR_P0, width)?;
        Ok(Address::new(address)?)
    }

    fn set_address_slot(
        &mut self,
        slot: AddressSlot,
        address: &[u8],
    ) -> Result<(), Self::PipeErrorType> {
        let address = Address::new(address)?;
        let register = registers::RX_ADDR_P0 + slot.index();
        match slot {
            AddressSlot::P0 | AddressSlot::P1 => {
                self.write_register(register, address.as_bytes())?;
                if slot == AddressSlot::P0 {
                    self._pipe0_rx_addr = Some(address);
                }
            }
            // For pipes 2-5, only write the LSB
            _ => {
                self.write_byte(register, address[0])?;
            }
        }
        Ok(())
    }

    /// Pipes 2 - 5 share all but the first byte with pipe 1,
    /// so the result is composed from both registers.
    fn get_address_slot(
        &mut self,
        slot: AddressSlot,
        width: usize,
    ) -> Result<Address, Self::PipeErrorType> {
        if !(Address::MIN_LEN..=Address::MAX_LEN).contains(&width) {
            return Err(InvalidArgument::AddressLength(width).into());
        }
        let mut buf = [0u8; 5];
        match slot {
            AddressSlot::P0 | AddressSlot::P1 => {
                let register = registers::RX_ADDR_P0 + slot.index();
                let address = self.spi_read(commands::R_REGISTER, register, width)?;
                buf[..width].copy_from_slice(address);
            }
            _ => {
                let pipe1 = self.spi_read(commands::R_REGISTER, registers::RX_ADDR_P1, width)?;
                buf[..width].copy_from_slice(pipe1);
                buf[0] = self.read_byte(registers::RX_ADDR_P0 + slot.index())?;
            }
        }
        Ok(Address::new(&buf[..width])?)
    }

    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType> {
        Ok((self.read_byte(registers::SETUP_AW)? & mnemonics::AW_MASK) + 2)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, EsbPipe};
    use crate::{
        radio::{commands, Nrf24Error},
        spi_test_expects,
        test::mk_radio,
        AddressSlot, InvalidArgument,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    fn address_round_trip(address: &[u8]) {
        let len = address.len();
        let mut write = vec![registers::RX_ADDR_P0 | commands::W_REGISTER];
        write.extend_from_slice(address);
        let mut read = vec![0xEu8];
        read.extend_from_slice(address);
        let mut echo = vec![0u8; len + 1];
        echo[0] = 0xE;
        let mut expected_read = vec![registers::RX_ADDR_P0];
        expected_read.extend_from_slice(&[0u8; 5][..len]);
        let spi_expectations = spi_test_expects![
            // set the address width
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, len as u8 - 2],
                vec![0xEu8, 0u8],
            ),
            (write, echo),
            // read back only `len` bytes
            (expected_read, read),
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, len as u8 - 2]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_address(address).unwrap();
        assert_eq!(radio.get_address().unwrap().as_bytes(), address);
        assert_eq!(radio.get_address_length().unwrap(), len as u8);
        mocks.done();
    }

    #[test]
    fn address_3_bytes() {
        address_round_trip(b"abc");
    }

    #[test]
    fn address_4_bytes() {
        address_round_trip(b"NRF1");
    }

    #[test]
    fn address_5_bytes() {
        address_round_trip(&[0xE7, 0xD3, 0xF0, 0x35, 0x77]);
    }

    #[test]
    pub fn get_address_uncached() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::RX_ADDR_P0, 0u8, 0u8, 0u8, 0u8, 0u8],
                vec![0xEu8, 0xE7, 0xE7, 0xE7, 0xE7, 0xE7],
            ),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        assert_eq!(radio.get_address().unwrap().as_bytes(), &[0xE7u8; 5]);
        mocks.done();
    }

    #[test]
    pub fn reject_address() {
        let mut mocks = mk_radio(&[], &[]);
        let radio = &mut mocks.0;
        assert_eq!(
            radio.set_address(b"ab"),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::AddressLength(2)))
        );
        assert_eq!(
            radio.set_address(b"abcdef"),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::AddressLength(6)))
        );
        assert_eq!(
            radio.get_address_slot(AddressSlot::P1, 6),
            Err(Nrf24Error::InvalidArgument(InvalidArgument::AddressLength(6)))
        );
        mocks.done();
    }

    #[test]
    pub fn address_slots() {
        let spi_expectations = spi_test_expects![
            (
                vec![
                    registers::RX_ADDR_P1 | commands::W_REGISTER,
                    b'1',
                    b'N',
                    b'o',
                    b'd',
                    b'e'
                ],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
            // only the LSB is written for pipes 2 - 5
            (
                vec![registers::RX_ADDR_P5 | commands::W_REGISTER, b'5'],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RX_ADDR_P1, 0u8, 0u8, 0u8, 0u8, 0u8],
                vec![0xEu8, b'1', b'N', b'o', b'd', b'e'],
            ),
            (vec![registers::RX_ADDR_P5, 0u8], vec![0xEu8, b'5']),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        radio.set_address_slot(AddressSlot::P1, b"1Node").unwrap();
        radio.set_address_slot(AddressSlot::P5, b"5Node").unwrap();
        assert_eq!(
            radio.get_address_slot(AddressSlot::P5, 5).unwrap().as_bytes(),
            b"5Node"
        );
        mocks.done();
    }

    #[test]
    pub fn get_address_length() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 3u8]),
            (vec![registers::SETUP_AW, 0u8], vec![0xEu8, 1u8]),
        ];
        let mut mocks = mk_radio(&[], &spi_expectations);
        let radio = &mut mocks.0;
        assert_eq!(radio.get_address_length().unwrap(), 5);
        assert_eq!(radio.get_address_length().unwrap(), 3);
        mocks.done();
    }
}
