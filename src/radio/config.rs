use crate::radio::rf24::bit_fields::{Feature, RfSetup, SetupRetry};
use crate::{Address, DataRate, InvalidArgument, PaLevel};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use rf24_irq::radio::RadioConfig;
/// let config = RadioConfig::default().with_channel(42).unwrap();
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) auto_retries: SetupRetry,
    pub(crate) setup_rf: RfSetup,
    pub(crate) feature: Feature,
    address: Address,
    channel: u8,
    auto_ack: bool,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::address()`] | `b"NRF1"` |
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps2`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::dynamic_payloads()`] | `true` |
    /// | [`RadioConfig::auto_ack()`] | `true` (enabled for pipes 0 - 5) |
    /// | [`RadioConfig::ask_no_ack()`] | `false` |
    /// | [`RadioConfig::auto_retry_delay()`] | `5` |
    /// | [`RadioConfig::auto_retry_count()`] | `15` |
    fn default() -> Self {
        Self {
            /*
               - 5 * 250 + 250 = 1500 us delay between attempts
               - 15 max attempts
            */
            auto_retries: SetupRetry::new(),
            setup_rf: RfSetup::new()
                .with_data_rate(DataRate::Mbps2)
                .with_pa_level(PaLevel::Max),
            /*
               - enabled dynamic payloads
               - enabled ACK payloads
               - disabled ask_no_ack param
            */
            feature: Feature::new()
                .with_dynamic_payloads(true)
                .with_ack_payloads(true),
            address: Address::DEFAULT,
            channel: 76,
            auto_ack: true,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_address()`].
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// The address used by pipe 0 (3 to 5 bytes long).
    ///
    /// See [`EsbPipe::set_address()`](fn@crate::radio::prelude::EsbPipe::set_address).
    pub fn with_address(self, address: &[u8]) -> Result<Self, InvalidArgument> {
        Ok(Self {
            address: Address::new(address)?,
            ..self
        })
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (in range [0, 127]).
    ///
    /// See [`EsbChannel::set_channel()`](fn@crate::radio::prelude::EsbChannel::set_channel).
    pub fn with_channel(self, channel: u8) -> Result<Self, InvalidArgument> {
        if channel > 127 {
            return Err(InvalidArgument::Channel(channel));
        }
        Ok(Self { channel, ..self })
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.setup_rf.data_rate()
    }

    /// Set the Data Rate.
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            setup_rf: self.setup_rf.with_data_rate(data_rate),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.setup_rf.pa_level()
    }

    /// Set the Power Amplitude (PA) level.
    ///
    /// See [`EsbPaLevel::set_pa_level()`](fn@crate::radio::prelude::EsbPaLevel::set_pa_level).
    pub fn with_pa_level(self, pa_level: PaLevel) -> Self {
        Self {
            setup_rf: self.setup_rf.with_pa_level(pa_level),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_dynamic_payloads()`].
    pub const fn dynamic_payloads(&self) -> bool {
        self.feature.dynamic_payloads()
    }

    /// Enable or disable dynamic payloads (and ACK payloads) on all pipes.
    ///
    /// See [`EsbPayloadLength::set_dynamic_payloads()`](fn@crate::radio::prelude::EsbPayloadLength::set_dynamic_payloads).
    pub fn with_dynamic_payloads(self, enable: bool) -> Self {
        Self {
            feature: self
                .feature
                .with_dynamic_payloads(enable)
                .with_ack_payloads(enable),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_auto_ack()`].
    pub const fn auto_ack(&self) -> bool {
        self.auto_ack
    }

    /// Enable or disable auto-ack on all pipes.
    ///
    /// See [`EsbAutoAck::set_auto_ack()`](fn@crate::radio::prelude::EsbAutoAck::set_auto_ack).
    pub fn with_auto_ack(self, enable: bool) -> Self {
        Self {
            auto_ack: enable,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_ask_no_ack()`].
    pub const fn ask_no_ack(&self) -> bool {
        self.feature.ask_no_ack()
    }

    /// Allow disabling auto-ack per payload.
    ///
    /// See [`EsbAutoAck::allow_ask_no_ack()`](fn@crate::radio::prelude::EsbAutoAck::allow_ask_no_ack).
    pub fn with_ask_no_ack(self, enable: bool) -> Self {
        Self {
            feature: self.feature.with_ask_no_ack(enable),
            ..self
        }
    }

    /// Returns the `delay` value set by [`RadioConfig::with_auto_retries()`].
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// Returns the `count` value set by [`RadioConfig::with_auto_retries()`].
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set the auto-retry feature's `delay` and `count` (each clamped to 15).
    ///
    /// See [`EsbAutoAck::set_auto_retries()`](fn@crate::radio::prelude::EsbAutoAck::set_auto_retries).
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: SetupRetry::from_params(delay, count),
            ..self
        }
    }
}
