//! 테스트용 결정적 오라클. 단순 선형식으로 포화 물성을 흉내낸다.
#![allow(dead_code)]

use rankine_cycle::steam::{PropertyError, PropertyResult, SteamPropertyOracle};

pub const STUB_VOLUME: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    Nothing,
    SpecificVolume,
    CompressedLiquid,
    TwoPhase,
}

#[derive(Debug, Clone)]
pub struct StubOracle {
    pub fail: Fail,
}

impl StubOracle {
    pub fn new() -> Self {
        Self { fail: Fail::Nothing }
    }

    pub fn failing(fail: Fail) -> Self {
        Self { fail }
    }

    pub fn sf(p: f64) -> f64 {
        0.5 + p * 1e-4
    }

    pub fn sg(p: f64) -> f64 {
        8.0 - p * 1e-4
    }

    pub fn hf(p: f64) -> f64 {
        200.0 + p * 0.1
    }

    pub fn hg(p: f64) -> f64 {
        2600.0 + p * 0.01
    }

    pub fn tsat(p: f64) -> f64 {
        300.0 + p / 100.0
    }
}

impl SteamPropertyOracle for StubOracle {
    fn critical_pressure(&self) -> f64 {
        22_064.0
    }

    fn min_pressure(&self) -> f64 {
        0.6
    }

    fn saturation_temperature(&self, p: f64) -> PropertyResult<f64> {
        Ok(Self::tsat(p))
    }

    fn saturation_entropy(&self, p: f64) -> PropertyResult<(f64, f64)> {
        Ok((Self::sf(p), Self::sg(p)))
    }

    fn saturation_enthalpy(&self, p: f64) -> PropertyResult<(f64, f64)> {
        Ok((Self::hf(p), Self::hg(p)))
    }

    fn liquid_specific_volume(&self, p: f64) -> PropertyResult<f64> {
        if self.fail == Fail::SpecificVolume {
            return Err(PropertyError::NonFinite {
                what: "saturated liquid density",
                pressure_kpa: p,
                input: 0.0,
            });
        }
        Ok(STUB_VOLUME)
    }

    fn temperature_from_enthalpy(&self, p: f64, h: f64) -> PropertyResult<f64> {
        if self.fail == Fail::CompressedLiquid {
            return Err(PropertyError::NonFinite {
                what: "temperature from enthalpy",
                pressure_kpa: p,
                input: h,
            });
        }
        Ok(273.15 + h / 4.18)
    }

    fn temperature_and_quality_from_entropy(&self, p: f64, s: f64) -> PropertyResult<(f64, f64)> {
        let (sf, sg) = (Self::sf(p), Self::sg(p));
        if self.fail == Fail::TwoPhase {
            return Err(PropertyError::OutsideTwoPhase {
                pressure_kpa: p,
                entropy: s,
                liquid_entropy: sf,
                vapor_entropy: sg,
            });
        }
        Ok((Self::tsat(p), (s - sf) / (sg - sf)))
    }

    fn enthalpy_from_quality(&self, p: f64, x: f64) -> PropertyResult<f64> {
        Ok(Self::hf(p) + x * (Self::hg(p) - Self::hf(p)))
    }
}
