pub mod analysis_store;
pub mod quote;
pub mod valuate;
