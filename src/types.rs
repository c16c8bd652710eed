//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Debug, Display, Formatter, Result},
    ops::Deref,
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    /// The 2-bit field value (not yet shifted into RF_SETUP bits 1 and 2).
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 1,
            PaLevel::High => 2,
            PaLevel::Max => 3,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 3 {
            0 => PaLevel::Min,
            1 => PaLevel::Low,
            2 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The data rate in kilobits per second.
    pub const fn kbps(self) -> u32 {
        match self {
            DataRate::Mbps1 => 1000,
            DataRate::Mbps2 => 2000,
            DataRate::Kbps250 => 250,
        }
    }
}

impl TryFrom<u32> for DataRate {
    type Error = InvalidArgument;

    /// Convert a rate given in kbps. Only 250, 1000, and 2000 are recognized.
    fn try_from(kbps: u32) -> core::result::Result<Self, Self::Error> {
        match kbps {
            250 => Ok(DataRate::Kbps250),
            1000 => Ok(DataRate::Mbps1),
            2000 => Ok(DataRate::Mbps2),
            _ => Err(InvalidArgument::DataRate(kbps)),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// A decoded snapshot of the radio's STATUS register.
///
/// Every SPI transaction clocks out the STATUS register as the first byte,
/// so this is refreshed as a side effect of any register access.
///
/// To compose a mask of flags (e.g. for clearing them):
/// ```
/// use rf24_irq::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed (the auto-retry limit was reached).
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// `6` means no pipe is used and `7` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}, rx_pipe: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe(),
            self.tx_full(),
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    const PIPE_NOT_USED: u8 = 6;
    const RX_EMPTY: u8 = 7;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all IRQ flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// Is the [`StatusFlags::rx_pipe()`] field reporting "pipe not used"?
    pub const fn pipe_not_used(&self) -> bool {
        self.rx_pipe() == Self::PIPE_NOT_USED
    }

    /// Is the [`StatusFlags::rx_pipe()`] field reporting an empty RX FIFO?
    pub const fn rx_empty(&self) -> bool {
        self.rx_pipe() == Self::RX_EMPTY
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// A flag to describe if TX Data Failed.
    pub fn with_tx_df(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DF_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DF_OFFSET))
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}, rx_pipe: {}, tx_full: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df(),
            self.rx_pipe(),
            self.tx_full()
        )
    }
}

/// A caller-supplied value that the radio cannot accept.
///
/// These are always detected before any register is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// The channel exceeds 127.
    Channel(u8),
    /// An address is not 3, 4, or 5 bytes long.
    AddressLength(usize),
    /// A payload is empty or longer than 32 bytes.
    PayloadLength(usize),
    /// A data rate (in kbps) that the radio does not support.
    DataRate(u32),
    /// A pipe number greater than 5.
    Pipe(u8),
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            InvalidArgument::Channel(c) => write!(f, "channel {c} is greater than 127"),
            InvalidArgument::AddressLength(len) => {
                write!(f, "address length {len} is not in range [3, 5]")
            }
            InvalidArgument::PayloadLength(len) => {
                write!(f, "payload length {len} is not in range [1, 32]")
            }
            InvalidArgument::DataRate(kbps) => write!(f, "unrecognized data rate {kbps} kbps"),
            InvalidArgument::Pipe(pipe) => write!(f, "pipe {pipe} is not in range [0, 5]"),
        }
    }
}

/// One of the six RX pipes' address registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressSlot {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl AddressSlot {
    /// The pipe number (0 - 5).
    pub const fn index(self) -> u8 {
        match self {
            AddressSlot::P0 => 0,
            AddressSlot::P1 => 1,
            AddressSlot::P2 => 2,
            AddressSlot::P3 => 3,
            AddressSlot::P4 => 4,
            AddressSlot::P5 => 5,
        }
    }
}

impl TryFrom<u8> for AddressSlot {
    type Error = InvalidArgument;

    fn try_from(pipe: u8) -> core::result::Result<Self, Self::Error> {
        match pipe {
            0 => Ok(AddressSlot::P0),
            1 => Ok(AddressSlot::P1),
            2 => Ok(AddressSlot::P2),
            3 => Ok(AddressSlot::P3),
            4 => Ok(AddressSlot::P4),
            5 => Ok(AddressSlot::P5),
            _ => Err(InvalidArgument::Pipe(pipe)),
        }
    }
}

/// A validated pipe address of 3 to 5 bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Address {
    bytes: [u8; 5],
    len: u8,
}

impl Address {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 5;

    /// The 4 byte address `b"NRF1"`.
    pub const DEFAULT: Self = Self {
        bytes: [b'N', b'R', b'F', b'1', 0],
        len: 4,
    };

    /// Copy `address` into a new [`Address`].
    ///
    /// Fails with [`InvalidArgument::AddressLength`] if `address` is not 3 to 5 bytes long.
    pub fn new(address: &[u8]) -> core::result::Result<Self, InvalidArgument> {
        let len = address.len();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(InvalidArgument::AddressLength(len));
        }
        let mut bytes = [0u8; 5];
        bytes[..len].copy_from_slice(address);
        Ok(Self {
            bytes,
            len: len as u8,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The value of the SETUP_AW register that describes this address' width.
    pub(crate) const fn width_field(&self) -> u8 {
        self.len - 2
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = InvalidArgument;

    fn try_from(address: &[u8]) -> core::result::Result<Self, Self::Error> {
        Self::new(address)
    }
}

impl Deref for Address {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple("Address").field(&self.as_bytes()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Address {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Address({=[u8]})", self.as_bytes())
    }
}

/// A payload of 1 to 32 bytes, as read from (or written to) a radio FIFO.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Payload {
    buf: [u8; 32],
    len: u8,
}

impl Payload {
    pub const MAX_LEN: usize = 32;

    /// A placeholder used to fill fixed-size collections.
    pub(crate) const EMPTY: Self = Self {
        buf: [0u8; 32],
        len: 0,
    };

    /// Copy `buf` into a new [`Payload`].
    ///
    /// Fails with [`InvalidArgument::PayloadLength`] if `buf` is empty or longer than 32 bytes.
    pub fn new(buf: &[u8]) -> core::result::Result<Self, InvalidArgument> {
        let len = buf.len();
        if len == 0 || len > Self::MAX_LEN {
            return Err(InvalidArgument::PayloadLength(len));
        }
        let mut payload = Self {
            buf: [0u8; 32],
            len: len as u8,
        };
        payload.buf[..len].copy_from_slice(buf);
        Ok(payload)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for Payload {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl Debug for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple("Payload").field(&self.as_bytes()).finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Payload {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Payload({=[u8]})", self.as_bytes())
    }
}

/// The transition observed on the radio's IRQ pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// The IRQ pin went active (LOW). This is the only edge that signals an event.
    Falling,
    Rising,
}
