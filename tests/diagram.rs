//! T–s 선도 데이터 모델 테스트.
mod common;

use approx::assert_relative_eq;
use common::StubOracle;
use rankine_cycle::config::SteamConfig;
use rankine_cycle::cycle::{CycleEvaluator, CycleInputs, StatePoint};
use rankine_cycle::diagram::{saturation_dome, TsDiagram, DOME_SAMPLES};
use rankine_cycle::steam::If97Steam;

fn stub_diagram() -> (rankine_cycle::cycle::CycleResult, TsDiagram) {
    let evaluator = CycleEvaluator::new(StubOracle::new());
    let result = evaluator
        .evaluate(CycleInputs {
            condenser_pressure_kpa: 10.0,
            boiler_pressure_kpa: 2_000.0,
        })
        .expect("stub cycle");
    let diagram = TsDiagram::build(evaluator.oracle(), &result).expect("diagram");
    (result, diagram)
}

#[test]
fn dome_spans_one_kilopascal_to_just_below_critical() {
    let (_, diagram) = stub_diagram();
    assert_eq!(diagram.dome.liquid.len(), DOME_SAMPLES);
    assert_eq!(diagram.dome.vapor.len(), DOME_SAMPLES);
    // 스텁 포화온도: 300 + p/100
    assert_relative_eq!(diagram.dome.liquid[0][1], 300.0 + 1.0 / 100.0);
    assert_relative_eq!(
        diagram.dome.vapor[DOME_SAMPLES - 1][1],
        300.0 + 22_063.0 / 100.0,
        max_relative = 1e-12
    );
}

#[test]
fn path_visits_boiler_liquid_point_and_closes() {
    let (result, diagram) = stub_diagram();
    assert_eq!(diagram.path.len(), 6);
    assert_eq!(diagram.path.first(), diagram.path.last());
    let s3_dash = StubOracle::sf(2_000.0);
    assert_eq!(diagram.path[2], [s3_dash, result.state3.temperature_k]);
    assert_eq!(
        diagram.path[4],
        [result.state4.entropy_kj_per_kgk, result.state4.temperature_k]
    );
}

#[test]
fn only_real_states_are_annotated() {
    let (_, diagram) = stub_diagram();
    let points: Vec<StatePoint> = diagram.annotations.iter().map(|a| a.point).collect();
    assert_eq!(
        points,
        vec![StatePoint::One, StatePoint::Two, StatePoint::Three, StatePoint::Four]
    );
    assert!(diagram.annotations[0].text.starts_with("(1)\nT = "));
    assert!(diagram.annotations[3].text.contains("\nx = 0.97"));
    assert!(!diagram.annotations[2].text.contains("x = "));
}

#[test]
fn if97_dome_keeps_liquid_left_of_vapor() {
    let steam = If97Steam::new(SteamConfig::default());
    let dome = saturation_dome(&steam, 1.0, 15_000.0, 50).expect("dome");
    for (l, v) in dome.liquid.iter().zip(&dome.vapor) {
        assert!(l[0] < v[0], "s_f={} s_g={}", l[0], v[0]);
        assert_eq!(l[1], v[1]);
    }
    for pair in dome.liquid.windows(2) {
        assert!(pair[1][1] > pair[0][1]);
    }
}

#[test]
fn default_diagram_sweeps_up_to_the_critical_point() {
    let (output, diagram) =
        rankine_cycle::app::run_with_diagram(&rankine_cycle::config::Config::default())
            .expect("diagram with IF97 steam");
    assert_eq!(diagram.dome.liquid.len(), DOME_SAMPLES);
    assert_eq!(diagram.dome.vapor.len(), DOME_SAMPLES);

    let liquid = diagram.dome.liquid[DOME_SAMPLES - 1];
    let vapor = diagram.dome.vapor[DOME_SAMPLES - 1];
    assert!(liquid.iter().chain(&vapor).all(|v| v.is_finite()));
    assert!(liquid[0] < vapor[0], "s_f={} s_g={}", liquid[0], vapor[0]);
    // 22063 kPa 포화온도는 임계온도 바로 아래
    assert!(liquid[1] > 640.0 && liquid[1] < 647.096, "T={}", liquid[1]);

    assert_eq!(diagram.path.len(), 6);
    assert_eq!(diagram.annotations.len(), 4);
    assert_eq!(output.report.lines.len(), 7);
}
