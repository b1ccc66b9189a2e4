//! Asynchronous domain event delivery
//!
//! Use cases publish through [`ChannelEventDispatcher`] and return
//! immediately; a worker task drains the channel and hands each event to
//! its handler.

mod dispatcher;
mod worker;

pub use dispatcher::{ChannelEventDispatcher, EVENT_QUEUE_CAPACITY};
pub use worker::spawn_event_worker;
