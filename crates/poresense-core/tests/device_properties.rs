//! Physical properties of the full device model.

use poresense_core::{
    DSDNA_DIAMETER, DeviceParams, EstimateConfig, NO_MOLECULE, PerturbationModel, active_radius,
    device_resistance, device_resistance_breakdown, distance_sweep, percent_resistance_change,
    sensing_report,
};

fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

fn channel(length: f64, width: f64) -> DeviceParams {
    DeviceParams {
        length,
        width,
        ..Default::default()
    }
}

#[test]
fn test_voltage_drop_ratio_non_increasing() {
    let config = [
        (0.5, 2.0, 50.0, 3.0, 100.0),
        (20.0, 2.0, 25.0, 3.0, 100.0),
        (15.0, 6.0, 50.0, 10.0, 1000.0),
        (0.1, 1.0, 10.0, 2.0, 2.0),
    ];
    let distances = distance_sweep(0.0, 2000.0, 400);

    for (v_macro, molecule, height, diameter, ratio) in config {
        let model = PerturbationModel::new(v_macro, molecule, height, diameter, ratio).unwrap();
        for pair in distances.windows(2) {
            assert!(
                model.voltage_drop_ratio(pair[1]) <= model.voltage_drop_ratio(pair[0]),
                "drop increased between {} and {} nm",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_no_molecule_no_active_radius() {
    let config = EstimateConfig::default();
    for params in [
        DeviceParams::default(),
        channel(30.0, 20.0),
        DeviceParams {
            concentration_ratio: 1000.0,
            pore_diameter: 10.0,
            ..Default::default()
        },
    ] {
        assert_eq!(active_radius(&params, NO_MOLECULE, &config).unwrap(), 0.0);
    }
}

#[test]
fn test_resistance_increases_with_contact_resistance() {
    let config = EstimateConfig::default();
    for molecule in [NO_MOLECULE, DSDNA_DIAMETER] {
        let mut previous = None;
        for r_contact in [0.0, 1e3, 1e6, 1e9, 1e12] {
            let params = DeviceParams {
                r_contact,
                ..Default::default()
            };
            let total = device_resistance(&params, molecule, &config).unwrap();
            if let Some(prev) = previous {
                assert!(total > prev, "{} not above {}", total, prev);
            }
            previous = Some(total);
        }
    }
}

#[test]
fn test_no_molecule_zero_change() {
    let config = EstimateConfig::default();
    for params in [DeviceParams::default(), channel(30.0, 20.0), channel(40.0, 38.0)] {
        assert_eq!(
            percent_resistance_change(&params, NO_MOLECULE, &config).unwrap(),
            0.0
        );
    }
}

#[test]
fn test_demo_device_signal() {
    let config = EstimateConfig::default();
    let report = sensing_report(&DeviceParams::default(), DSDNA_DIAMETER, &config).unwrap();

    assert!(relative_error(report.off.total, 21430571428.571426) < 1e-12);
    assert!(relative_error(report.on.total, 75707571596.78871) < 1e-6);
    assert!(relative_error(report.relative_change, 2.532690290089732) < 1e-6);
}

#[test]
fn test_active_region_wider_than_channel() {
    // 2r exceeds both dimensions: no pre-channel, no bypass
    let config = EstimateConfig::default();
    let params = channel(30.0, 20.0);
    let b = device_resistance_breakdown(&params, DSDNA_DIAMETER, &config).unwrap();

    assert_eq!(b.x_half_extent, 30.0);
    assert_eq!(b.y_half_extent, 30.0);
    assert_eq!(b.r_pre, None);
    assert_eq!(b.r_out, None);
    assert_eq!(b.r_channel, b.r_active);
    assert!(relative_error(b.r_active, 46057797061.533394) < 1e-6);

    let change = percent_resistance_change(&params, DSDNA_DIAMETER, &config).unwrap();
    assert!(relative_error(change, 1.5585933263822571) < 1e-6);
}

#[test]
fn test_narrow_channel_extends_along_length() {
    // Only the width is exceeded: x clamps to the channel length
    let config = EstimateConfig::default();
    let params = channel(500.0, 20.0);
    let b = device_resistance_breakdown(&params, DSDNA_DIAMETER, &config).unwrap();

    assert_eq!(b.x_half_extent, 500.0);
    assert_eq!(b.y_half_extent, b.active_radius);
    assert!(b.r_pre.is_some());
    assert_eq!(b.r_out, None);
    assert!(relative_error(b.r_active, 100205130690.26285) < 1e-6);
    assert!(relative_error(b.total, 477708202655.67) < 1e-6);
}

#[test]
fn test_short_channel_keeps_bypass() {
    let config = EstimateConfig::default();
    let params = channel(30.0, 200.0);
    let b = device_resistance_breakdown(&params, DSDNA_DIAMETER, &config).unwrap();

    assert_eq!(b.x_half_extent, b.active_radius);
    assert_eq!(b.y_half_extent, 30.0);
    assert_eq!(b.r_pre, None);
    assert!(b.r_out.is_some());
    assert!(relative_error(b.total, 4878398740.13644) < 1e-6);
}

#[test]
fn test_half_extents_never_exceed_length() {
    let config = EstimateConfig::default();
    for (length, width) in [(500.0, 200.0), (30.0, 20.0), (500.0, 20.0), (30.0, 200.0)] {
        let params = channel(length, width);
        let b = device_resistance_breakdown(&params, DSDNA_DIAMETER, &config).unwrap();
        assert!(b.x_half_extent <= length);
        assert!(b.y_half_extent <= length);
        assert!(b.active_radius >= 0.0);
    }
}

#[test]
fn test_equal_concentrations_rejected() {
    let config = EstimateConfig::default();
    let params = DeviceParams {
        concentration_ratio: 1.0,
        ..Default::default()
    };
    assert!(device_resistance(&params, DSDNA_DIAMETER, &config).is_err());
    assert!(percent_resistance_change(&params, DSDNA_DIAMETER, &config).is_err());
}

#[test]
fn test_breakdown_serializes() {
    let config = EstimateConfig::default();
    let report = sensing_report(&DeviceParams::default(), DSDNA_DIAMETER, &config).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["relative_change"].as_f64().unwrap() > 0.0);
    assert!(json["off"]["r_pre"].is_null());
    assert!(json["on"]["r_pre"].as_f64().is_some());
}
