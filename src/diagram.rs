//! T–s 선도 데이터 모델. 포화 돔과 사이클 경로, 상태점 주석을 만든다.
//! 그리는 방법(색, 선 스타일)은 GUI 쪽 책임이다.

use serde::Serialize;

use crate::cycle::{CycleError, CycleResult, CycleStep, StatePoint};
use crate::steam::{PropertyResult, SteamPropertyOracle};

/// 포화 돔 샘플 수.
pub const DOME_SAMPLES: usize = 1000;
/// 포화 돔 스윕 시작 압력(kPa).
pub const DOME_MIN_PRESSURE_KPA: f64 = 1.0;
// 임계점 바로 아래에서 스윕을 멈추는 간격(kPa)
const DOME_CRITICAL_MARGIN_KPA: f64 = 1.0;

/// 포화수/포화증기 경계선. 각 점은 `[s, T]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SaturationDome {
    pub liquid: Vec<[f64; 2]>,
    pub vapor: Vec<[f64; 2]>,
}

/// 상태점 옆에 표시할 주석.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub point: StatePoint,
    /// `[s, T]`
    pub position: [f64; 2],
    pub text: String,
}

/// 이상 랭킨 사이클 T–s 선도.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsDiagram {
    pub title: &'static str,
    pub dome: SaturationDome,
    /// 1 → 2 → 3' → 3 → 4 → 1
    pub path: Vec<[f64; 2]>,
    pub annotations: Vec<Annotation>,
}

fn linspace(start: f64, end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let step = if samples > 1 {
        (end - start) / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples).map(move |i| start + step * i as f64)
}

/// 압력을 선형 스윕하며 포화 엔트로피/온도를 조회해 돔을 만든다.
pub fn saturation_dome<O: SteamPropertyOracle>(
    oracle: &O,
    p_min_kpa: f64,
    p_max_kpa: f64,
    samples: usize,
) -> PropertyResult<SaturationDome> {
    let mut dome = SaturationDome {
        liquid: Vec::with_capacity(samples),
        vapor: Vec::with_capacity(samples),
    };
    for p in linspace(p_min_kpa, p_max_kpa, samples) {
        let t = oracle.saturation_temperature(p)?;
        let (s_f, s_g) = oracle.saturation_entropy(p)?;
        dome.liquid.push([s_f, t]);
        dome.vapor.push([s_g, t]);
    }
    Ok(dome)
}

fn annotate(result: &CycleResult, point: StatePoint) -> Annotation {
    let state = result.state(point);
    let mut text = format!(
        "({})\nT = {:.2} K\nh = {:.1} kJ/kg\ns = {:.3} kJ/kgK",
        point.number(),
        state.temperature_k,
        state.enthalpy_kj_per_kg,
        state.entropy_kj_per_kgk
    );
    if point == StatePoint::Four {
        if let Some(x) = state.quality {
            text.push_str(&format!("\nx = {x:.3}"));
        }
    }
    Annotation {
        point,
        position: [state.entropy_kj_per_kgk, state.temperature_k],
        text,
    }
}

impl TsDiagram {
    /// 계산 결과와 같은 오라클로 선도를 구성한다.
    ///
    /// 3'은 보일러 압력의 포화수 점으로, 주석 없이 경로에만 들어간다.
    pub fn build<O: SteamPropertyOracle>(
        oracle: &O,
        result: &CycleResult,
    ) -> Result<Self, CycleError> {
        let p_max = oracle.critical_pressure() - DOME_CRITICAL_MARGIN_KPA;
        let dome = saturation_dome(oracle, DOME_MIN_PRESSURE_KPA, p_max, DOME_SAMPLES)
            .map_err(CycleError::at(CycleStep::SaturationDome))?;

        let (s3_dash, _) = oracle
            .saturation_entropy(result.state3.pressure_kpa)
            .map_err(CycleError::at(CycleStep::State(StatePoint::Three)))?;
        let t3 = result.state3.temperature_k;

        let vertex = |point: StatePoint| {
            let state = result.state(point);
            [state.entropy_kj_per_kgk, state.temperature_k]
        };
        let path = vec![
            vertex(StatePoint::One),
            vertex(StatePoint::Two),
            [s3_dash, t3],
            vertex(StatePoint::Three),
            vertex(StatePoint::Four),
            vertex(StatePoint::One),
        ];

        let annotations = [
            StatePoint::One,
            StatePoint::Two,
            StatePoint::Three,
            StatePoint::Four,
        ]
        .into_iter()
        .map(|point| annotate(result, point))
        .collect();

        Ok(Self {
            title: "Ideal Rankine Cycle T-s Diagram",
            dome,
            path,
            annotations,
        })
    }
}
