//! 변환 엔진 회귀 테스트. 기준점, 항등, 왕복, 수치 안전성 검사.
use unit_conversion_toolbox::category::{Unit, UnitCategory};
use unit_conversion_toolbox::conversion::{
    convert, convert_length, convert_temperature, convert_volume, convert_weight,
    ConversionError,
};
use unit_conversion_toolbox::units::{LengthUnit, TemperatureUnit, VolumeUnit, WeightUnit};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

/// 0 근처에서도 상대 오차만으로 비교한다.
fn assert_relative(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * expected.abs(),
        "{label} expected {expected:e} got {actual:e} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn identity_is_exact_for_every_unit() {
    let samples = [0.0, -0.0, 1.0, -273.15, 0.1 + 0.2, 1e-300, 1e300, f64::MAX];
    for category in UnitCategory::ALL {
        for unit in category.units() {
            for x in samples {
                let out = convert(x, unit, unit).unwrap();
                assert_eq!(out.to_bits(), x.to_bits(), "{unit} {x}");
            }
        }
    }
}

#[test]
fn temperature_round_trip_returns_original_value() {
    // 273.15 오프셋 때문에 0 근처는 절대 오차 기준으로 비교한다
    let samples = [1.0, -42.5, 1234.5678, 0.003];
    let units = UnitCategory::Temperature.units();
    for &a in &units {
        for &b in &units {
            for x in samples {
                let there = convert(x, a, b).unwrap();
                let back = convert(there, b, a).unwrap();
                assert_close(&format!("{a}->{b}->{a}"), back, x, 1e-9);
            }
        }
    }
}

#[test]
fn linear_round_trip_is_relative_even_for_small_values() {
    let samples = [1e-7, 0.003, -0.25, 1.0, 1234.5678, 9.87e12];
    for category in [UnitCategory::Length, UnitCategory::Weight, UnitCategory::Volume] {
        let units = category.units();
        for &a in &units {
            for &b in &units {
                for x in samples {
                    let there = convert(x, a, b).unwrap();
                    let back = convert(there, b, a).unwrap();
                    assert_relative(&format!("{a}->{b}->{a} at {x}"), back, x, 1e-9);
                }
            }
        }
    }
}

#[test]
fn temperature_fixed_points() {
    use TemperatureUnit::*;
    assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), Ok(32.0));
    assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), Ok(212.0));
    assert_eq!(convert_temperature(0.0, Celsius, Kelvin), Ok(273.15));
    assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), Ok(0.0));
    assert_close("-40F", convert_temperature(-40.0, Fahrenheit, Celsius).unwrap(), -40.0, 1e-12);
    assert_close("0K->F", convert_temperature(0.0, Kelvin, Fahrenheit).unwrap(), -459.67, 1e-9);
}

#[test]
fn length_scaling() {
    assert_eq!(
        convert_length(1.0, LengthUnit::Meters, LengthUnit::Kilometers),
        Ok(0.001)
    );
    assert_close(
        "1609.344 m in miles",
        convert_length(1609.344, LengthUnit::Meters, LengthUnit::Miles).unwrap(),
        1.0,
        1e-12,
    );
    assert_close(
        "1 ft in inches",
        convert_length(1.0, LengthUnit::Feet, LengthUnit::Inches).unwrap(),
        12.0,
        1e-12,
    );
}

#[test]
fn weight_base_cases() {
    assert_eq!(
        convert_weight(1.0, WeightUnit::Kilograms, WeightUnit::Grams),
        Ok(1000.0)
    );
    assert_close(
        "1 lb in kg",
        convert_weight(1.0, WeightUnit::Pounds, WeightUnit::Kilograms).unwrap(),
        0.453592,
        1e-12,
    );
    // tons는 미국식 쇼트톤
    assert_close(
        "1 ton in kg",
        convert_weight(1.0, WeightUnit::Tons, WeightUnit::Kilograms).unwrap(),
        907.185,
        1e-12,
    );
}

#[test]
fn volume_base_case() {
    assert_close(
        "1 gal in L",
        convert_volume(1.0, VolumeUnit::Gallons, VolumeUnit::Liters).unwrap(),
        3.78541,
        1e-12,
    );
    assert_close(
        "1 L in ml",
        convert_volume(1.0, VolumeUnit::Liters, VolumeUnit::Milliliters).unwrap(),
        1000.0,
        1e-12,
    );
}

#[test]
fn overflow_is_reported_not_returned() {
    let err = convert_length(f64::MAX, LengthUnit::Miles, LengthUnit::Millimeters).unwrap_err();
    assert!(matches!(err, ConversionError::NumericOverflow { value } if value.is_infinite()));

    let err = convert_weight(f64::NAN, WeightUnit::Pounds, WeightUnit::Grams).unwrap_err();
    assert!(matches!(err, ConversionError::NumericOverflow { value } if value.is_nan()));

    let err = convert_temperature(
        f64::INFINITY,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
    )
    .unwrap_err();
    assert!(matches!(err, ConversionError::NumericOverflow { .. }));
}

#[test]
fn unified_entry_rejects_cross_category_pairs() {
    let err = convert(
        1.0,
        Unit::Volume(VolumeUnit::Cups),
        Unit::Temperature(TemperatureUnit::Kelvin),
    )
    .unwrap_err();
    assert!(err.is_defect());
    assert!(matches!(err, ConversionError::CategoryMismatch { .. }));
}
