pub mod key_value_storage;
pub mod quote_provider;
