//! Reference values for the closed-form parts of the model.

use poresense_core::{
    PerturbationModel, bypass_resistance, parallel, pre_channel_resistance, series,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {}, got {} (tolerance {})",
        expected,
        actual,
        tol
    );
}

#[test]
fn test_series_fixtures() {
    assert_eq!(series(&[10.0, 10.0]), 20.0);
    assert_eq!(series(&[5.0, 10.0]), 15.0);
    assert_eq!(series(&[10.0, 10.0, 10.0]), 30.0);
    assert_eq!(series(&[5.0, 10.0, 15.0]), 30.0);
}

#[test]
fn test_parallel_fixtures() {
    assert_close(parallel(&[10.0, 10.0]).unwrap(), 5.0, 1e-12);
    assert_close(parallel(&[5.0, 20.0]).unwrap(), 4.0, 1e-12);
    assert_close(parallel(&[30.0, 30.0, 30.0]).unwrap(), 10.0, 1e-12);
    assert_close(parallel(&[2.0, 5.0, 10.0]).unwrap(), 1.25, 1e-12);
}

#[test]
fn test_voltage_drop_ratio_fixtures() {
    // r = 10 nm, 20 V, 2 nm molecule, 25 nm x 3 nm pore, ratio 100
    let model = PerturbationModel::new(20.0, 2.0, 25.0, 3.0, 100.0).unwrap();
    assert_close(model.voltage_drop_ratio(10.0), 0.55500909645, 1e-7);

    // r = 99 nm, 15 V, 6 nm molecule, 50 nm x 10 nm pore, ratio 1000
    let model = PerturbationModel::new(15.0, 6.0, 50.0, 10.0, 1000.0).unwrap();
    assert_close(model.voltage_drop_ratio(99.0), 0.51962267, 1e-7);
}

#[test]
fn test_pre_channel_fixture() {
    // length 100 nm, active radius 7 nm, 983 ohm/sq
    assert_close(
        pre_channel_resistance(100.0, 7.0, 983.0),
        3019.214285714285,
        1e-7,
    );
}

#[test]
fn test_bypass_fixture() {
    // length 10 nm, width 100 nm, active radius 7 nm, 983 ohm/sq
    assert_close(
        bypass_resistance(10.0, 100.0, 7.0, 983.0),
        228.604651162790697,
        1e-7,
    );
}
