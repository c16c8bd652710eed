#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`RF24::new()`](fn@crate::radio::RF24::new)
//! - [`RF24::init()`](radio/struct.RF24.html#method.init)
//! - [`RF24::set_enabled()`](fn@crate::radio::RF24::set_enabled)
//! - [`RF24::send_to()`](radio/struct.RF24.html#method.send_to)
//! - [`RF24::service_irq()`](radio/struct.RF24.html#method.service_irq)
//! - [`RF24::on_irq_edge()`](radio/struct.RF24.html#method.on_irq_edge)
//! - [`RF24::poll_irq()`](radio/struct.RF24.html#method.poll_irq)
//! - [`SharedRadio`](struct@crate::radio::SharedRadio)
//! - [`RadioEventHandler`](trait@crate::events::RadioEventHandler)
//! - [`EventChannel`](struct@crate::events::EventChannel)
//!
//! ## Advanced API
//!
//! - [`RF24::execute()`](fn@crate::radio::RF24::execute)
//! - [`RF24::as_rx()`](radio/struct.RF24.html#method.as_rx)
//! - [`RF24::as_tx()`](radio/struct.RF24.html#method.as_tx)
//! - [`RF24::update()`](radio/struct.RF24.html#method.update)
//! - [`RF24::get_status_flags()`](radio/struct.RF24.html#method.get_status_flags)
//! - [`RF24::clear_status_flags()`](radio/struct.RF24.html#method.clear_status_flags)
//! - [`RF24::flush_rx()`](radio/struct.RF24.html#method.flush_rx)
//! - [`RF24::flush_tx()`](radio/struct.RF24.html#method.flush_tx)
//! - [`RF24::get_last_arc()`](radio/struct.RF24.html#method.get_last_arc)
//! - [`RF24::get_dynamic_payload_length()`](radio/struct.RF24.html#method.get_dynamic_payload_length)
//!
//! ## Configuration API
//!
//! - [`RF24::with_config()`](radio/struct.RF24.html#method.with_config)
//! - [`RF24::set_address()`](radio/struct.RF24.html#method.set_address)
//! - [`RF24::set_address_slot()`](radio/struct.RF24.html#method.set_address_slot)
//! - [`RF24::set_channel()`](radio/struct.RF24.html#method.set_channel)
//! - [`RF24::set_data_rate()`](radio/struct.RF24.html#method.set_data_rate)
//! - [`RF24::set_pa_level()`](radio/struct.RF24.html#method.set_pa_level)
//! - [`RF24::set_dynamic_payloads()`](radio/struct.RF24.html#method.set_dynamic_payloads)
//! - [`RF24::set_auto_ack()`](radio/struct.RF24.html#method.set_auto_ack)
//! - [`RF24::set_auto_ack_pipe()`](radio/struct.RF24.html#method.set_auto_ack_pipe)
//! - [`RF24::allow_ask_no_ack()`](radio/struct.RF24.html#method.allow_ask_no_ack)
//! - [`RF24::set_auto_retries()`](radio/struct.RF24.html#method.set_auto_retries)
//! - [`RF24::set_powered()`](radio/struct.RF24.html#method.set_powered)
//!
#![no_std]

mod log;
mod types;
pub use types::{
    Address, AddressSlot, DataRate, Edge, InvalidArgument, PaLevel, Payload, StatusFlags,
};
pub mod events;
pub mod radio;
