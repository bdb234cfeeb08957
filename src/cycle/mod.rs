//! 이상 랭킨 사이클 계산.

pub mod error;
pub mod evaluator;
pub mod state;

pub use error::{CycleError, CycleStep, PressureRangeViolation};
pub use evaluator::{CycleEvaluator, CycleInputs, CycleResult, ProcessQuantities};
pub use state::{StatePoint, ThermodynamicState};
