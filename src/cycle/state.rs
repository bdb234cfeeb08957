use serde::Serialize;

/// 사이클 상태점 번호.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatePoint {
    /// 응축기 출구 포화수
    One,
    /// 펌프 출구 압축수
    Two,
    /// 보일러 출구 포화증기
    Three,
    /// 터빈 출구 습증기
    Four,
}

impl StatePoint {
    pub fn number(self) -> u8 {
        match self {
            StatePoint::One => 1,
            StatePoint::Two => 2,
            StatePoint::Three => 3,
            StatePoint::Four => 4,
        }
    }
}

impl std::fmt::Display for StatePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "state {}", self.number())
    }
}

/// 한 상태점의 열역학 물성. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermodynamicState {
    /// 압력(kPa abs)
    pub pressure_kpa: f64,
    /// 온도(K)
    pub temperature_k: f64,
    /// 비엔트로피(kJ/kg·K)
    pub entropy_kj_per_kgk: f64,
    /// 비엔탈피(kJ/kg)
    pub enthalpy_kj_per_kg: f64,
    /// 건도. 2상 경계/영역에서만 `Some`.
    pub quality: Option<f64>,
}
