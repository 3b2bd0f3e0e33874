pub mod noop;
pub mod twelvedata;
