//! Interface adapters - REST API over the booking services

pub mod http;
