use thiserror::Error;

use super::state::StatePoint;
use crate::steam::PropertyError;

/// 계산에 실패한 단계. 상태점 또는 파생량을 가리킨다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStep {
    State(StatePoint),
    PumpWork,
    /// T–s 선도의 포화 돔 스윕
    SaturationDome,
}

impl std::fmt::Display for CycleStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleStep::State(point) => write!(f, "{point}"),
            CycleStep::PumpWork => write!(f, "pump work"),
            CycleStep::SaturationDome => write!(f, "saturation dome"),
        }
    }
}

/// 입력 압력 조합이 유효하지 않은 이유.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressureRangeViolation {
    /// 0 이하이거나 유한하지 않음
    NonPositive,
    /// 응축기 압력이 물성 범위 하한 미만
    BelowMinimum { min_kpa: f64 },
    /// 응축기 압력이 보일러 압력 이상
    NotIncreasing,
    /// 보일러 압력이 임계 압력 이상
    AboveCritical { critical_kpa: f64 },
}

impl std::fmt::Display for PressureRangeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PressureRangeViolation::NonPositive => write!(f, "pressures must be positive and finite"),
            PressureRangeViolation::BelowMinimum { min_kpa } => {
                write!(f, "condenser pressure must be at least {min_kpa} kPa")
            }
            PressureRangeViolation::NotIncreasing => {
                write!(f, "condenser pressure must be below boiler pressure")
            }
            PressureRangeViolation::AboveCritical { critical_kpa } => {
                write!(f, "boiler pressure must be below the critical pressure {critical_kpa} kPa")
            }
        }
    }
}

/// 사이클 계산 오류. 두 경우 모두 해당 실행을 즉시 중단한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CycleError {
    #[error(
        "invalid pressure range (condenser {condenser_kpa} kPa, boiler {boiler_kpa} kPa): {reason}"
    )]
    InvalidPressureRange {
        condenser_kpa: f64,
        boiler_kpa: f64,
        reason: PressureRangeViolation,
    },

    #[error("could not compute {step}")]
    PropertyLookupFailure {
        step: CycleStep,
        #[source]
        source: PropertyError,
    },
}

impl CycleError {
    /// 물성 조회 오류에 실패 단계를 붙인다.
    pub(crate) fn at(step: CycleStep) -> impl Fn(PropertyError) -> CycleError {
        move |source| CycleError::PropertyLookupFailure { step, source }
    }
}
