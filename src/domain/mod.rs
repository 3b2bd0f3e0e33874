pub mod entities;
pub mod error;
pub mod ports;
pub mod valuation;
pub mod values;
