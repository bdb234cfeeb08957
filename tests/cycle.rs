//! 10 kPa / 2 MPa 이상 랭킨 사이클 회귀 테스트 (IF97 물성).
use approx::assert_abs_diff_eq;
use rankine_cycle::config::SteamConfig;
use rankine_cycle::cycle::{
    CycleError, CycleEvaluator, CycleInputs, PressureRangeViolation, StatePoint,
};
use rankine_cycle::steam::If97Steam;

fn evaluator() -> CycleEvaluator<If97Steam> {
    CycleEvaluator::new(If97Steam::new(SteamConfig::default()))
}

fn inputs(condenser_kpa: f64, boiler_kpa: f64) -> CycleInputs {
    CycleInputs {
        condenser_pressure_kpa: condenser_kpa,
        boiler_pressure_kpa: boiler_kpa,
    }
}

#[test]
fn canonical_cycle_matches_steam_tables() {
    let res = evaluator().evaluate(inputs(10.0, 2_000.0)).expect("cycle");
    let q = &res.quantities;
    assert_abs_diff_eq!(q.pump_work, 2.01, epsilon = 0.2);
    assert_abs_diff_eq!(res.state2.enthalpy_kj_per_kg, 193.8, epsilon = 0.2);
    assert_abs_diff_eq!(q.boiler_heat, 2604.6, epsilon = 2.0);
    assert_abs_diff_eq!(q.turbine_work, 791.7, epsilon = 3.0);
    assert_abs_diff_eq!(q.condenser_heat, 1814.9, epsilon = 3.0);
    assert_abs_diff_eq!(res.thermal_efficiency_pct, 30.3, epsilon = 0.5);
    let x = res.turbine_exit_quality();
    assert!(x > 0.75 && x < 0.77, "x={x}");
}

#[test]
fn states_follow_the_cycle_layout() {
    let res = evaluator().evaluate(inputs(10.0, 2_000.0)).expect("cycle");
    assert_eq!(res.state1.quality, Some(0.0));
    assert_eq!(res.state2.quality, None);
    assert_eq!(res.state3.quality, Some(1.0));
    assert_eq!(res.state1.pressure_kpa, 10.0);
    assert_eq!(res.state2.pressure_kpa, 2_000.0);
    assert_eq!(res.state4.pressure_kpa, 10.0);
    // 등엔트로피 펌프/터빈
    assert_eq!(res.state2.entropy_kj_per_kgk, res.state1.entropy_kj_per_kgk);
    assert_eq!(res.state4.entropy_kj_per_kgk, res.state3.entropy_kj_per_kgk);
    assert_eq!(res.state(StatePoint::Three), &res.state3);
    assert!(res.state3.temperature_k > res.state2.temperature_k);
    assert_abs_diff_eq!(res.state4.temperature_k, res.state1.temperature_k, epsilon = 1e-9);
}

#[test]
fn energy_balance_closes() {
    let res = evaluator().evaluate(inputs(10.0, 2_000.0)).expect("cycle");
    let q = &res.quantities;
    assert_abs_diff_eq!(q.boiler_heat - q.condenser_heat, q.net_work(), epsilon = 1e-9);
    assert!(q.back_work_ratio() > 0.0 && q.back_work_ratio() < 0.01);
}

#[test]
fn repeated_evaluation_is_identical() {
    let evaluator = evaluator();
    let a = evaluator.evaluate(inputs(10.0, 2_000.0)).expect("first");
    let b = evaluator.evaluate(inputs(10.0, 2_000.0)).expect("second");
    assert_eq!(a, b);
}

#[test]
fn efficiency_rises_with_boiler_pressure() {
    let evaluator = evaluator();
    let etas: Vec<f64> = [1_000.0, 2_000.0, 4_000.0, 8_000.0]
        .into_iter()
        .map(|p| {
            evaluator
                .evaluate(inputs(10.0, p))
                .expect("cycle")
                .thermal_efficiency_pct
        })
        .collect();
    for pair in etas.windows(2) {
        assert!(pair[1] > pair[0], "efficiencies {etas:?}");
    }
}

#[test]
fn condenser_at_or_above_boiler_is_rejected() {
    for (cond, boiler) in [(2_000.0, 2_000.0), (3_000.0, 2_000.0)] {
        let err = evaluator().evaluate(inputs(cond, boiler)).unwrap_err();
        assert!(
            matches!(
                err,
                CycleError::InvalidPressureRange {
                    reason: PressureRangeViolation::NotIncreasing,
                    ..
                }
            ),
            "{err}"
        );
    }
}

#[test]
fn supercritical_boiler_is_rejected() {
    for boiler in [22_064.0, 22_089.0, 30_000.0] {
        let err = evaluator().evaluate(inputs(10.0, boiler)).unwrap_err();
        assert!(
            matches!(
                err,
                CycleError::InvalidPressureRange {
                    reason: PressureRangeViolation::AboveCritical { .. },
                    ..
                }
            ),
            "{err}"
        );
    }
}

#[test]
fn non_positive_and_sub_triple_pressures_are_rejected() {
    let err = evaluator().evaluate(inputs(0.0, 2_000.0)).unwrap_err();
    assert!(matches!(
        err,
        CycleError::InvalidPressureRange {
            reason: PressureRangeViolation::NonPositive,
            ..
        }
    ));
    let err = evaluator().evaluate(inputs(f64::NAN, 2_000.0)).unwrap_err();
    assert!(matches!(err, CycleError::InvalidPressureRange { .. }));
    let err = evaluator().evaluate(inputs(0.5, 2_000.0)).unwrap_err();
    assert!(matches!(
        err,
        CycleError::InvalidPressureRange {
            reason: PressureRangeViolation::BelowMinimum { .. },
            ..
        }
    ));
}

#[test]
fn invalid_range_message_names_the_inputs() {
    let err = evaluator().evaluate(inputs(10.0, 22_089.0)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("22089"), "{msg}");
    assert!(msg.contains("critical"), "{msg}");
}
