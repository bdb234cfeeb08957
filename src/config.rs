use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cycle::CycleInputs;
use crate::units::{convert_pressure, pressure, PressureUnit};

/// 사이클 운전 압력 설정. 값은 `pressure_unit` 기준 절대압이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    pub condenser_pressure: f64,
    pub boiler_pressure: f64,
    pub pressure_unit: PressureUnit,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            condenser_pressure: 10.0,
            boiler_pressure: 2000.0,
            pressure_unit: PressureUnit::KiloPascal,
        }
    }
}

impl CycleConfig {
    /// kPa 기준 사이클 입력으로 변환한다.
    pub fn inputs(&self) -> CycleInputs {
        CycleInputs {
            condenser_pressure_kpa: pressure::to_kpa(self.condenser_pressure, self.pressure_unit),
            boiler_pressure_kpa: pressure::to_kpa(self.boiler_pressure, self.pressure_unit),
        }
    }

    /// 두 압력을 `unit` 기준 값으로 환산한 설정을 돌려준다.
    pub fn with_unit(self, unit: PressureUnit) -> Self {
        let from = self.pressure_unit;
        Self {
            condenser_pressure: convert_pressure(self.condenser_pressure, from, unit),
            boiler_pressure: convert_pressure(self.boiler_pressure, from, unit),
            pressure_unit: unit,
        }
    }

    /// 주어진 값(현재 `pressure_unit` 기준)으로 압력을 덮어쓴다.
    pub fn with_overrides(mut self, condenser: Option<f64>, boiler: Option<f64>) -> Self {
        if let Some(p) = condenser {
            self.condenser_pressure = p;
        }
        if let Some(p) = boiler {
            self.boiler_pressure = p;
        }
        self
    }
}

/// IF97 오라클 생성 시 전달하는 수치 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamConfig {
    /// 포화온도 뉴턴 반복 수렴 기준(K)
    pub saturation_tolerance_k: f64,
    /// 포화온도 뉴턴 반복 최대 횟수
    pub max_iterations: usize,
    /// 건도를 [0, 1]로 보정해 주는 허용 오차
    pub quality_tolerance: f64,
}

impl Default for SteamConfig {
    fn default() -> Self {
        Self {
            saturation_tolerance_k: 1e-8,
            max_iterations: 30,
            quality_tolerance: 1e-9,
        }
    }
}

/// 결과 보고서의 소수 자릿수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub energy_decimals: usize,
    pub quality_decimals: usize,
    pub efficiency_decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            energy_decimals: 1,
            quality_decimals: 4,
            efficiency_decimals: 1,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cycle: CycleConfig,
    pub steam: SteamConfig,
    pub report: ReportConfig,
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// TOML 문자열에서 설정을 읽는다. 빠진 항목은 기본값을 쓴다.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 설정을 TOML 문자열로 직렬화한다.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// 경로가 주어지면 해당 TOML 파일을, 없으면 기본 설정을 반환한다. 파일은 쓰지 않는다.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Config::from_toml(&content)
        }
        None => Ok(Config::default()),
    }
}
