//! 사이클 결과를 고정 소수 자릿수의 텍스트 보고서로 만든다. 계산은 하지 않는다.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::cycle::CycleResult;

const ENERGY_UNIT: &str = "kJ/kg";

/// 보고서 한 줄: `"<Label>: <value> <unit>"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: f64,
    pub decimals: usize,
    pub unit: Option<&'static str>,
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.*}", self.label, self.decimals, self.value)?;
        if let Some(unit) = self.unit {
            write!(f, " {unit}")?;
        }
        Ok(())
    }
}

/// 계산 순서대로 정렬된 보고서.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub lines: Vec<ReportLine>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// 설정된 자릿수로 보고서를 구성한다.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, result: &CycleResult) -> Report {
        let energy = |label, value| ReportLine {
            label,
            value,
            decimals: self.config.energy_decimals,
            unit: Some(ENERGY_UNIT),
        };
        let q = &result.quantities;
        let lines = vec![
            energy("Work required by pump", q.pump_work),
            energy("h2", result.state2.enthalpy_kj_per_kg),
            energy("Heat input by boiler", q.boiler_heat),
            energy("Work generated by turbine", q.turbine_work),
            ReportLine {
                label: "Quality of low pressure steam",
                value: result.turbine_exit_quality(),
                decimals: self.config.quality_decimals,
                unit: None,
            },
            energy("Heat rejected by the condenser", q.condenser_heat),
            ReportLine {
                label: "Thermal efficiency",
                value: result.thermal_efficiency_pct,
                decimals: self.config.efficiency_decimals,
                unit: Some("%"),
            },
        ];
        Report { lines }
    }
}
