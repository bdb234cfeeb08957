use tracing::info;

use crate::config::Config;
use crate::cycle::{CycleError, CycleEvaluator, CycleResult};
use crate::diagram::TsDiagram;
use crate::report::{Report, ReportFormatter};
use crate::steam::If97Steam;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 설정 로드 오류
    #[error("configuration error")]
    Config(#[from] crate::config::ConfigError),
    /// 사이클 계산 오류
    #[error("cycle evaluation failed")]
    Cycle(#[from] CycleError),
    /// JSON 출력 직렬화 오류
    #[error("failed to serialize result")]
    Json(#[from] serde_json::Error),
}

/// 오류와 그 원인들을 바깥쪽부터 차례로 나열한다.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}

/// 한 번의 실행 결과: 계산 결과와 보고서.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub result: CycleResult,
    pub report: Report,
}

/// 설정으로부터 IF97 오라클을 갖춘 계산기를 만든다.
pub fn evaluator(config: &Config) -> CycleEvaluator<If97Steam> {
    CycleEvaluator::new(If97Steam::new(config.steam.clone()))
}

/// 설정된 압력으로 사이클을 계산하고 보고서를 만든다.
pub fn run(config: &Config) -> Result<RunOutput, AppError> {
    let inputs = config.cycle.inputs();
    info!(
        condenser_kpa = inputs.condenser_pressure_kpa,
        boiler_kpa = inputs.boiler_pressure_kpa,
        "evaluating ideal rankine cycle"
    );
    let result = evaluator(config).evaluate(inputs)?;
    let report = ReportFormatter::new(config.report.clone()).format(&result);
    Ok(RunOutput { result, report })
}

/// 계산과 함께 T–s 선도까지 만든다.
pub fn run_with_diagram(config: &Config) -> Result<(RunOutput, TsDiagram), AppError> {
    let evaluator = evaluator(config);
    let result = evaluator.evaluate(config.cycle.inputs())?;
    let diagram = TsDiagram::build(evaluator.oracle(), &result)?;
    let report = ReportFormatter::new(config.report.clone()).format(&result);
    Ok((RunOutput { result, report }, diagram))
}
