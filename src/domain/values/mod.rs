pub mod peg_classification;
pub mod signal;
pub mod valuation_method;
