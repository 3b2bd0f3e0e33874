//! The valuation engine: four closed-form fair-value heuristics sharing one
//! result shape. Every function here is pure and never fails; degenerate
//! input degrades to an intrinsic value of zero.

pub mod barsi;
pub mod dcf;
pub mod graham;
pub mod peter_lynch;
pub mod result;

pub use barsi::{calculate_barsi, BarsiInput};
pub use dcf::{calculate_dcf, DcfInput, TERMINAL_GROWTH};
pub use graham::{calculate_graham, GrahamInput, GRAHAM_MULTIPLIER};
pub use peter_lynch::{calculate_peter_lynch, PeterLynchInput};
pub use result::{ceiling_price, ValuationResult};
