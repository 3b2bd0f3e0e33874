pub mod saved_analysis;
