//! Supper Club - Booking API core
//!
//! Hosts publish menus and schedule dinners; guests register, log in and
//! reserve seats. The crate is split hexagonally: `domain` holds the
//! aggregates, `application` the command handlers, `ports` the interfaces
//! they depend on, and `adapters` the implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
