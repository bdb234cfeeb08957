//! 사이클 계산이 소비하는 증기 물성 계약.
//!
//! 단위: 압력 kPa(abs), 온도 K, 엔트로피 kJ/kg·K, 엔탈피 kJ/kg, 비체적 m³/kg.

use super::error::PropertyResult;

/// 포화/상태 물성을 제공하는 오라클.
///
/// 모든 연산은 입력 값만의 순수 함수여야 한다. 사이클 계산기는 이 트레잇에만
/// 의존하므로 상관식/표 기반 구현을 자유롭게 교체할 수 있다.
pub trait SteamPropertyOracle {
    /// 임계 압력(kPa). 포화 조회는 이 값 미만에서만 유효하다.
    fn critical_pressure(&self) -> f64;

    /// 포화 조회가 가능한 최저 압력(kPa).
    fn min_pressure(&self) -> f64;

    /// 포화온도(K).
    fn saturation_temperature(&self, pressure_kpa: f64) -> PropertyResult<f64>;

    /// 포화수/포화증기 엔트로피 `(s_f, s_g)`.
    fn saturation_entropy(&self, pressure_kpa: f64) -> PropertyResult<(f64, f64)>;

    /// 포화수/포화증기 엔탈피 `(h_f, h_g)`.
    fn saturation_enthalpy(&self, pressure_kpa: f64) -> PropertyResult<(f64, f64)>;

    /// 포화수 밀도의 역수로 구한 비체적.
    fn liquid_specific_volume(&self, pressure_kpa: f64) -> PropertyResult<f64>;

    /// 압력과 엔탈피로부터 온도(K).
    fn temperature_from_enthalpy(&self, pressure_kpa: f64, enthalpy: f64) -> PropertyResult<f64>;

    /// 압력과 엔트로피로부터 `(온도 K, 건도)`. 2상 영역 밖이면 오류.
    fn temperature_and_quality_from_entropy(
        &self,
        pressure_kpa: f64,
        entropy: f64,
    ) -> PropertyResult<(f64, f64)>;

    /// 압력과 건도로부터 엔탈피.
    fn enthalpy_from_quality(&self, pressure_kpa: f64, quality: f64) -> PropertyResult<f64>;
}

impl<O: SteamPropertyOracle + ?Sized> SteamPropertyOracle for &O {
    fn critical_pressure(&self) -> f64 {
        (**self).critical_pressure()
    }

    fn min_pressure(&self) -> f64 {
        (**self).min_pressure()
    }

    fn saturation_temperature(&self, pressure_kpa: f64) -> PropertyResult<f64> {
        (**self).saturation_temperature(pressure_kpa)
    }

    fn saturation_entropy(&self, pressure_kpa: f64) -> PropertyResult<(f64, f64)> {
        (**self).saturation_entropy(pressure_kpa)
    }

    fn saturation_enthalpy(&self, pressure_kpa: f64) -> PropertyResult<(f64, f64)> {
        (**self).saturation_enthalpy(pressure_kpa)
    }

    fn liquid_specific_volume(&self, pressure_kpa: f64) -> PropertyResult<f64> {
        (**self).liquid_specific_volume(pressure_kpa)
    }

    fn temperature_from_enthalpy(&self, pressure_kpa: f64, enthalpy: f64) -> PropertyResult<f64> {
        (**self).temperature_from_enthalpy(pressure_kpa, enthalpy)
    }

    fn temperature_and_quality_from_entropy(
        &self,
        pressure_kpa: f64,
        entropy: f64,
    ) -> PropertyResult<(f64, f64)> {
        (**self).temperature_and_quality_from_entropy(pressure_kpa, entropy)
    }

    fn enthalpy_from_quality(&self, pressure_kpa: f64, quality: f64) -> PropertyResult<f64> {
        (**self).enthalpy_from_quality(pressure_kpa, quality)
    }
}
