use bitfield_struct::bitfield;

use crate::{DataRate, PaLevel};

/// The CONFIG register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Mask the "RX Data Ready" IRQ event.
    pub mask_rx_dr: bool,

    /// Mask the "TX Data Sent" IRQ event.
    pub mask_tx_ds: bool,

    /// Mask the "TX Data Fail" IRQ event.
    pub mask_max_rt: bool,

    #[bits(default = true)]
    pub crc_enable: bool,

    /// 16 bit CRC when set, 8 bit otherwise.
    #[bits(default = true)]
    pub crc_2_bytes: bool,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    /// Powered up with a 16 bit CRC and every IRQ event unmasked.
    pub const fn powered() -> Self {
        Self::new().with_power(true)
    }

    pub const fn as_rx(self) -> Self {
        self.with_is_rx(true)
    }

    pub const fn as_tx(self) -> Self {
        self.with_is_rx(false)
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay`.
    #[bits(4, default = 5)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 15)]
    pub arc: u8,
}

impl SetupRetry {
    pub fn from_params(delay: u8, count: u8) -> Self {
        Self::new().with_ard(delay.min(15)).with_arc(count.min(15))
    }
}

/// The RF_SETUP register.
#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _reserved: u8,

    pub dr_low: bool,

    pub pll_lock: bool,

    pub dr_high: bool,

    #[bits(2)]
    pub pa_bits: u8,

    /// Obsolete on the nRF24L01+, LNA gain on older variants.
    pub lna_enable: bool,
}

impl RfSetup {
    pub const fn data_rate(&self) -> DataRate {
        // RF_DR_LOW takes precedence over RF_DR_HIGH
        if self.dr_low() {
            DataRate::Kbps250
        } else if self.dr_high() {
            DataRate::Mbps2
        } else {
            DataRate::Mbps1
        }
    }

    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        let (low, high) = match data_rate {
            DataRate::Mbps1 => (false, false),
            DataRate::Mbps2 => (false, true),
            DataRate::Kbps250 => (true, false),
        };
        self.with_dr_low(low).with_dr_high(high)
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.pa_bits())
    }

    pub const fn with_pa_level(self, level: PaLevel) -> Self {
        self.with_pa_bits(level.into_bits())
    }
}

/// The FEATURE register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Feature {
    #[bits(5)]
    _padding: u8,

    pub dynamic_payloads: bool,

    pub ack_payloads: bool,

    pub ask_no_ack: bool,
}
