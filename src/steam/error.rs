//! 증기 물성 조회 오류.

use thiserror::Error;

/// 물성 조회 결과 타입.
pub type PropertyResult<T> = Result<T, PropertyError>;

/// 물성 오라클이 상태를 결정하지 못했을 때의 오류.
///
/// 모든 변형은 원인이 된 수치 입력을 함께 담는다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// 압력이 포화선/물성식의 유효 범위를 벗어남
    #[error("pressure {pressure_kpa} kPa is outside the valid range [{min_kpa}, {max_kpa}) kPa")]
    PressureOutOfRange {
        pressure_kpa: f64,
        min_kpa: f64,
        max_kpa: f64,
    },

    /// 온도가 포화선 범위를 벗어남
    #[error("temperature {temperature_k} K is outside the saturation range [{min_k}, {max_k}] K")]
    TemperatureOutOfRange {
        temperature_k: f64,
        min_k: f64,
        max_k: f64,
    },

    /// 주어진 엔트로피가 해당 압력의 2상 영역 밖에 있음
    #[error(
        "entropy {entropy} kJ/kg·K is outside the two-phase envelope at {pressure_kpa} kPa \
         (s_f = {liquid_entropy}, s_g = {vapor_entropy})"
    )]
    OutsideTwoPhase {
        pressure_kpa: f64,
        entropy: f64,
        liquid_entropy: f64,
        vapor_entropy: f64,
    },

    /// 건도가 [0, 1] 범위 밖
    #[error("quality {quality} is outside [0, 1]")]
    QualityOutOfRange { quality: f64 },

    /// IF97 계산 결과가 NaN/무한대
    #[error("IF97 evaluation of {what} failed at {pressure_kpa} kPa (input {input})")]
    NonFinite {
        what: &'static str,
        pressure_kpa: f64,
        input: f64,
    },

    /// 포화온도 뉴턴 반복이 수렴하지 않음
    #[error("saturation temperature at {pressure_kpa} kPa did not converge in {iterations} iterations")]
    ConvergenceFailed { pressure_kpa: f64, iterations: usize },
}
