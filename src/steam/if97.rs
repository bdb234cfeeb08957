//! IAPWS-IF97 기반 물 물성 오라클.
//! 포화선(Region 4)은 직접 계산하고, 포화수/포화증기 및 압축수 물성은 seuif97 크레이트로 위임한다.
//! 입력: 압력(kPa, 절대), 출력 온도(K)

use seuif97::{ph, px, OD, OH, OS, OT};
use tracing::{debug, warn};

use super::error::{PropertyError, PropertyResult};
use super::oracle::SteamPropertyOracle;
use crate::config::SteamConfig;
use crate::units::{pressure, to_kelvin, PressureUnit, TemperatureUnit};

/// 물의 임계 압력(kPa).
pub const CRITICAL_PRESSURE_KPA: f64 = 22_064.0;
/// 물의 임계 온도(K).
pub const CRITICAL_TEMPERATURE_K: f64 = 647.096;
/// Region 4 하한(삼중점 부근) 압력(kPa).
pub const MIN_SATURATION_PRESSURE_KPA: f64 = 0.611_213;
/// Region 4 하한 온도(K).
pub const MIN_SATURATION_TEMPERATURE_K: f64 = 273.15;
/// IF97 압축수 영역 상한 압력(kPa).
const MAX_PRESSURE_KPA: f64 = 100_000.0;

// ---------------- Region 4 (포화) ----------------
const R4_N: [f64; 10] = [
    0.116_705_214_527_67e4,
    -0.724_213_167_032_06e6,
    -0.170_738_469_400_92e2,
    0.120_208_247_024_70e5,
    -0.323_255_503_223_33e7,
    0.149_151_086_135_30e2,
    -0.482_326_573_615_91e4,
    0.405_113_405_420_57e6,
    -0.238_555_575_678_49,
    0.650_175_348_447_98e3,
];

// 뉴턴 반복의 수치 미분 간격(K)
const NEWTON_STEP_K: f64 = 1e-4;

/// 포화압력(kPa) - 입력 온도는 K. IF97 Region 4 식(30).
pub fn saturation_pressure_kpa(t_k: f64) -> PropertyResult<f64> {
    if !(MIN_SATURATION_TEMPERATURE_K..=CRITICAL_TEMPERATURE_K).contains(&t_k) {
        return Err(PropertyError::TemperatureOutOfRange {
            temperature_k: t_k,
            min_k: MIN_SATURATION_TEMPERATURE_K,
            max_k: CRITICAL_TEMPERATURE_K,
        });
    }
    Ok(region4_pressure_kpa(t_k))
}

fn region4_pressure_kpa(t_k: f64) -> f64 {
    let n = &R4_N;
    let v = t_k + n[8] / (t_k - n[9]);
    let a = v * v + n[0] * v + n[1];
    let b = n[2] * v * v + n[3] * v + n[4];
    let c = n[5] * v * v + n[6] * v + n[7];
    let p_mpa = (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4);
    p_mpa * 1000.0
}

// IF97 Region 4 역방향 식(31). 뉴턴 반복의 초기값으로 쓴다.
fn region4_temperature_guess_k(p_kpa: f64) -> f64 {
    let n = &R4_N;
    let beta = (p_kpa / 1000.0).powf(0.25);
    let e = beta * beta + n[2] * beta + n[5];
    let f = n[0] * beta * beta + n[3] * beta + n[6];
    let g = n[1] * beta * beta + n[4] * beta + n[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (n[9] + d - ((n[9] + d).powi(2) - 4.0 * (n[8] + n[9] * d)).sqrt()) / 2.0
}

/// seuif97 위임 + Region 4 포화선으로 구성한 물 물성 오라클.
#[derive(Debug, Clone, Default)]
pub struct If97Steam {
    config: SteamConfig,
}

impl If97Steam {
    pub fn new(config: SteamConfig) -> Self {
        Self { config }
    }

    fn check_saturation_pressure(&self, p_kpa: f64) -> PropertyResult<()> {
        if !p_kpa.is_finite() || p_kpa < MIN_SATURATION_PRESSURE_KPA || p_kpa >= CRITICAL_PRESSURE_KPA
        {
            return Err(PropertyError::PressureOutOfRange {
                pressure_kpa: p_kpa,
                min_kpa: MIN_SATURATION_PRESSURE_KPA,
                max_kpa: CRITICAL_PRESSURE_KPA,
            });
        }
        Ok(())
    }

    fn check_pressure(&self, p_kpa: f64) -> PropertyResult<()> {
        if !p_kpa.is_finite() || p_kpa < MIN_SATURATION_PRESSURE_KPA || p_kpa >= MAX_PRESSURE_KPA {
            return Err(PropertyError::PressureOutOfRange {
                pressure_kpa: p_kpa,
                min_kpa: MIN_SATURATION_PRESSURE_KPA,
                max_kpa: MAX_PRESSURE_KPA,
            });
        }
        Ok(())
    }

    // 포화선 위(건도 x)의 seuif97 물성 조회
    fn saturated(&self, what: &'static str, p_kpa: f64, x: f64, o_id: i32) -> PropertyResult<f64> {
        let p_mpa = pressure::from_kpa(p_kpa, PressureUnit::MegaPascal);
        finite(what, p_kpa, x, px(p_mpa, x, o_id))
    }
}

fn finite(what: &'static str, pressure_kpa: f64, input: f64, value: f64) -> PropertyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PropertyError::NonFinite {
            what,
            pressure_kpa,
            input,
        })
    }
}

impl SteamPropertyOracle for If97Steam {
    fn critical_pressure(&self) -> f64 {
        CRITICAL_PRESSURE_KPA
    }

    fn min_pressure(&self) -> f64 {
        MIN_SATURATION_PRESSURE_KPA
    }

    fn saturation_temperature(&self, pressure_kpa: f64) -> PropertyResult<f64> {
        self.check_saturation_pressure(pressure_kpa)?;
        let target = pressure_kpa.ln();
        let mut t_k = region4_temperature_guess_k(pressure_kpa);
        for iteration in 0..self.config.max_iterations {
            let f = region4_pressure_kpa(t_k).ln() - target;
            let f_prev = region4_pressure_kpa(t_k - NEWTON_STEP_K).ln() - target;
            let dfdt = (f - f_prev) / NEWTON_STEP_K;
            let delta = f / dfdt;
            t_k = (t_k - delta).clamp(MIN_SATURATION_TEMPERATURE_K, CRITICAL_TEMPERATURE_K);
            if !t_k.is_finite() {
                break;
            }
            if delta.abs() < self.config.saturation_tolerance_k {
                debug!(pressure_kpa, t_k, iteration, "saturation temperature converged");
                return Ok(t_k);
            }
        }
        Err(PropertyError::ConvergenceFailed {
            pressure_kpa,
            iterations: self.config.max_iterations,
        })
    }

    fn saturation_entropy(&self, pressure_kpa: f64) -> PropertyResult<(f64, f64)> {
        self.check_saturation_pressure(pressure_kpa)?;
        let s_f = self.saturated("saturated liquid entropy", pressure_kpa, 0.0, OS)?;
        let s_g = self.saturated("saturated vapor entropy", pressure_kpa, 1.0, OS)?;
        Ok((s_f, s_g))
    }

    fn saturation_enthalpy(&self, pressure_kpa: f64) -> PropertyResult<(f64, f64)> {
        self.check_saturation_pressure(pressure_kpa)?;
        let h_f = self.saturated("saturated liquid enthalpy", pressure_kpa, 0.0, OH)?;
        let h_g = self.saturated("saturated vapor enthalpy", pressure_kpa, 1.0, OH)?;
        Ok((h_f, h_g))
    }

    fn liquid_specific_volume(&self, pressure_kpa: f64) -> PropertyResult<f64> {
        self.check_saturation_pressure(pressure_kpa)?;
        let density = self.saturated("saturated liquid density", pressure_kpa, 0.0, OD)?;
        if density <= 0.0 {
            return Err(PropertyError::NonFinite {
                what: "saturated liquid density",
                pressure_kpa,
                input: density,
            });
        }
        Ok(1.0 / density)
    }

    fn temperature_from_enthalpy(&self, pressure_kpa: f64, enthalpy: f64) -> PropertyResult<f64> {
        self.check_pressure(pressure_kpa)?;
        let p_mpa = pressure::from_kpa(pressure_kpa, PressureUnit::MegaPascal);
        let t_c = finite(
            "temperature from enthalpy",
            pressure_kpa,
            enthalpy,
            ph(p_mpa, enthalpy, OT),
        )?;
        Ok(to_kelvin(t_c, TemperatureUnit::Celsius))
    }

    fn temperature_and_quality_from_entropy(
        &self,
        pressure_kpa: f64,
        entropy: f64,
    ) -> PropertyResult<(f64, f64)> {
        let (s_f, s_g) = self.saturation_entropy(pressure_kpa)?;
        let outside = || PropertyError::OutsideTwoPhase {
            pressure_kpa,
            entropy,
            liquid_entropy: s_f,
            vapor_entropy: s_g,
        };
        if !entropy.is_finite() {
            return Err(outside());
        }
        let raw = (entropy - s_f) / (s_g - s_f);
        let tol = self.config.quality_tolerance;
        if raw < -tol || raw > 1.0 + tol {
            return Err(outside());
        }
        let quality = raw.clamp(0.0, 1.0);
        if quality != raw {
            warn!(pressure_kpa, entropy, raw, "quality clamped onto the saturation line");
        }
        let t_k = self.saturation_temperature(pressure_kpa)?;
        Ok((t_k, quality))
    }

    fn enthalpy_from_quality(&self, pressure_kpa: f64, quality: f64) -> PropertyResult<f64> {
        if !(0.0..=1.0).contains(&quality) {
            return Err(PropertyError::QualityOutOfRange { quality });
        }
        self.check_saturation_pressure(pressure_kpa)?;
        self.saturated("two-phase enthalpy", pressure_kpa, quality, OH)
    }
}
