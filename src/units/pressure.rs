use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 압력 단위. 모든 값은 절대압으로 취급하며 내부 기준은 kPa(abs)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
    Atm,
}

const KPA_PER_BAR: f64 = 100.0;
const KPA_PER_PSI: f64 = 6.894_757;
const KPA_PER_ATM: f64 = 101.325;

/// 주어진 압력을 kPa(abs)로 변환한다.
pub fn to_kpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value / 1000.0,
        PressureUnit::KiloPascal => value,
        PressureUnit::MegaPascal => value * 1000.0,
        PressureUnit::Bar => value * KPA_PER_BAR,
        PressureUnit::Psi => value * KPA_PER_PSI,
        PressureUnit::Atm => value * KPA_PER_ATM,
    }
}

/// kPa(abs) 값을 원하는 단위로 변환한다.
pub fn from_kpa(value_kpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_kpa * 1000.0,
        PressureUnit::KiloPascal => value_kpa,
        PressureUnit::MegaPascal => value_kpa / 1000.0,
        PressureUnit::Bar => value_kpa / KPA_PER_BAR,
        PressureUnit::Psi => value_kpa / KPA_PER_PSI,
        PressureUnit::Atm => value_kpa / KPA_PER_ATM,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_kpa(to_kpa(value, from), to)
}

impl PressureUnit {
    /// 화면/보고서 표기용 단위 문자열.
    pub fn label(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
            PressureUnit::Atm => "atm",
        }
    }
}

/// 알 수 없는 압력 단위 문자열.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pressure unit `{0}` (expected Pa, kPa, MPa, bar, psi or atm)")]
pub struct UnknownPressureUnit(pub String);

impl FromStr for PressureUnit {
    type Err = UnknownPressureUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pa" | "pascal" => Ok(PressureUnit::Pascal),
            "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
            "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
            "bar" | "bara" => Ok(PressureUnit::Bar),
            "psi" | "psia" => Ok(PressureUnit::Psi),
            "atm" => Ok(PressureUnit::Atm),
            _ => Err(UnknownPressureUnit(s.to_string())),
        }
    }
}
