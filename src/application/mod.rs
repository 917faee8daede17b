//! Application layer - Use cases, ports and DTOs
//!
//! Services here depend only on the domain and on outbound port traits; the
//! infrastructure layer supplies the concrete generator.

pub mod dto;
pub mod ports;
pub mod services;
