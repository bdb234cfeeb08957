use serde::Serialize;
use tracing::{debug, info};

use super::error::{CycleError, CycleStep, PressureRangeViolation};
use super::state::{StatePoint, ThermodynamicState};
use crate::steam::SteamPropertyOracle;

/// 사이클 입력 압력(kPa abs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleInputs {
    pub condenser_pressure_kpa: f64,
    pub boiler_pressure_kpa: f64,
}

/// 두 상태점에서 파생되는 과정량(kJ/kg).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessQuantities {
    /// 펌프 소요 일 `v1·(p2 − p1)`
    pub pump_work: f64,
    /// 보일러 입열 `h3 − h2`
    pub boiler_heat: f64,
    /// 터빈 발생 일 `h3 − h4`
    pub turbine_work: f64,
    /// 응축기 방열 `h4 − h1`
    pub condenser_heat: f64,
}

impl ProcessQuantities {
    /// 순일. 펌프 일은 기생 부하로 차감한다.
    pub fn net_work(&self) -> f64 {
        self.turbine_work - self.pump_work
    }

    /// 터빈 일 대비 펌프 일의 비.
    pub fn back_work_ratio(&self) -> f64 {
        self.pump_work / self.turbine_work
    }
}

/// 한 번의 사이클 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleResult {
    pub inputs: CycleInputs,
    pub state1: ThermodynamicState,
    pub state2: ThermodynamicState,
    pub state3: ThermodynamicState,
    pub state4: ThermodynamicState,
    /// 펌프 입구 포화수 비체적(m³/kg)
    pub specific_volume_m3_per_kg: f64,
    pub quantities: ProcessQuantities,
    /// 열효율(%)
    pub thermal_efficiency_pct: f64,
}

impl CycleResult {
    pub fn state(&self, point: StatePoint) -> &ThermodynamicState {
        match point {
            StatePoint::One => &self.state1,
            StatePoint::Two => &self.state2,
            StatePoint::Three => &self.state3,
            StatePoint::Four => &self.state4,
        }
    }

    /// 터빈 출구 건도.
    pub fn turbine_exit_quality(&self) -> f64 {
        self.state4.quality.unwrap_or(1.0)
    }
}

/// 펌프 → 보일러 → 터빈 → 응축기 순서로 상태점을 구하는 계산기.
#[derive(Debug, Clone)]
pub struct CycleEvaluator<O> {
    oracle: O,
}

impl<O: SteamPropertyOracle> CycleEvaluator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// 입력 압력을 물성 범위와 순서 조건에 대해 검사한다.
    pub fn validate(&self, inputs: &CycleInputs) -> Result<(), CycleError> {
        let p_cond = inputs.condenser_pressure_kpa;
        let p_boiler = inputs.boiler_pressure_kpa;
        let reject = |reason| CycleError::InvalidPressureRange {
            condenser_kpa: p_cond,
            boiler_kpa: p_boiler,
            reason,
        };
        let positive = |p: f64| p.is_finite() && p > 0.0;
        if !positive(p_cond) || !positive(p_boiler) {
            return Err(reject(PressureRangeViolation::NonPositive));
        }
        if p_cond >= p_boiler {
            return Err(reject(PressureRangeViolation::NotIncreasing));
        }
        let critical_kpa = self.oracle.critical_pressure();
        if p_boiler >= critical_kpa {
            return Err(reject(PressureRangeViolation::AboveCritical { critical_kpa }));
        }
        let min_kpa = self.oracle.min_pressure();
        if p_cond < min_kpa {
            return Err(reject(PressureRangeViolation::BelowMinimum { min_kpa }));
        }
        Ok(())
    }

    /// 두 압력으로부터 네 상태점과 과정량, 열효율을 계산한다.
    ///
    /// 물성 조회가 실패하면 실패한 상태점(또는 파생량)과 함께 즉시 오류를 반환한다.
    pub fn evaluate(&self, inputs: CycleInputs) -> Result<CycleResult, CycleError> {
        self.validate(&inputs)?;
        let oracle = &self.oracle;
        let p1 = inputs.condenser_pressure_kpa;
        let p2 = inputs.boiler_pressure_kpa;

        // 1: 응축기 압력의 포화수 (x = 0)
        let at1 = CycleError::at(CycleStep::State(StatePoint::One));
        let t1 = oracle.saturation_temperature(p1).map_err(&at1)?;
        let (s1, _) = oracle.saturation_entropy(p1).map_err(&at1)?;
        let (h1, _) = oracle.saturation_enthalpy(p1).map_err(at1)?;
        let state1 = ThermodynamicState {
            pressure_kpa: p1,
            temperature_k: t1,
            entropy_kj_per_kgk: s1,
            enthalpy_kj_per_kg: h1,
            quality: Some(0.0),
        };
        debug!(?state1, "state 1");

        // 펌프: 비압축성 액체 근사
        let v1 = oracle
            .liquid_specific_volume(p1)
            .map_err(CycleError::at(CycleStep::PumpWork))?;
        let pump_work = v1 * (p2 - p1);
        debug!(v1, pump_work, "pump work");

        // 2: 등엔트로피 압축
        let h2 = h1 + pump_work;
        let t2 = oracle
            .temperature_from_enthalpy(p2, h2)
            .map_err(CycleError::at(CycleStep::State(StatePoint::Two)))?;
        let state2 = ThermodynamicState {
            pressure_kpa: p2,
            temperature_k: t2,
            entropy_kj_per_kgk: s1,
            enthalpy_kj_per_kg: h2,
            quality: None,
        };
        debug!(?state2, "state 2");

        // 3: 보일러 출구 포화증기 (x = 1)
        let at3 = CycleError::at(CycleStep::State(StatePoint::Three));
        let t3 = oracle.saturation_temperature(p2).map_err(&at3)?;
        let (_, s3) = oracle.saturation_entropy(p2).map_err(&at3)?;
        let (_, h3) = oracle.saturation_enthalpy(p2).map_err(at3)?;
        let state3 = ThermodynamicState {
            pressure_kpa: p2,
            temperature_k: t3,
            entropy_kj_per_kgk: s3,
            enthalpy_kj_per_kg: h3,
            quality: Some(1.0),
        };
        debug!(?state3, "state 3");
        let boiler_heat = h3 - h2;

        // 4: 등엔트로피 팽창
        let at4 = CycleError::at(CycleStep::State(StatePoint::Four));
        let (t4, x4) = oracle
            .temperature_and_quality_from_entropy(p1, s3)
            .map_err(&at4)?;
        let h4 = oracle.enthalpy_from_quality(p1, x4).map_err(at4)?;
        let state4 = ThermodynamicState {
            pressure_kpa: p1,
            temperature_k: t4,
            entropy_kj_per_kgk: s3,
            enthalpy_kj_per_kg: h4,
            quality: Some(x4),
        };
        debug!(?state4, "state 4");

        let quantities = ProcessQuantities {
            pump_work,
            boiler_heat,
            turbine_work: h3 - h4,
            condenser_heat: h4 - h1,
        };
        let thermal_efficiency_pct = quantities.net_work() / boiler_heat * 100.0;
        info!(
            condenser_kpa = p1,
            boiler_kpa = p2,
            net_work = quantities.net_work(),
            thermal_efficiency_pct,
            "rankine cycle evaluated"
        );

        Ok(CycleResult {
            inputs,
            state1,
            state2,
            state3,
            state4,
            specific_volume_m3_per_kg: v1,
            quantities,
            thermal_efficiency_pct,
        })
    }
}
