//! 변환 결과를 화면 표시용 문자열로 만든다.

/// 이 값 이상이면 지수 표기로 바꾼다.
const SCIENTIFIC_UPPER: f64 = 1e6;
/// 0이 아니면서 이 값 미만이면 지수 표기로 바꾼다.
const SCIENTIFIC_LOWER: f64 = 1e-3;
const DECIMALS: usize = 6;

/// 결과 값을 표시 문자열로 변환한다.
///
/// 일반 범위는 소수 6자리 고정 소수점에서 끝의 0과 소수점을 지운다.
/// 절댓값이 1e6 이상이거나 1e-3 미만(0 제외)이면 가수 6자리 지수 표기
/// (`1.234568e+06`)를 쓴다.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || (magnitude != 0.0 && magnitude < SCIENTIFIC_LOWER) {
        format_scientific(value)
    } else {
        format_fixed(value)
    }
}

fn format_fixed(value: f64) -> String {
    let raw = format!("{value:.DECIMALS$}");
    let trimmed = raw.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_scientific(value: f64) -> String {
    let raw = format!("{value:.DECIMALS$e}");
    // Rust는 `1.234568e6` 형태로 출력하므로 지수를 부호 + 최소 두 자리로 맞춘다.
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_trims_trailing_zeros_and_point() {
        assert_eq!(format_value(32.0), "32");
        assert_eq!(format_value(1.5), "1.5");
        assert_eq!(format_value(0.001), "0.001");
        assert_eq!(format_value(273.15), "273.15");
        assert_eq!(format_value(-12.25), "-12.25");
    }

    #[test]
    fn fixed_rounds_to_six_decimals() {
        assert_eq!(format_value(39.37007874015748), "39.370079");
        assert_eq!(format_value(0.1 + 0.2), "0.3");
    }

    #[test]
    fn zero_and_negative_zero_render_plainly() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn large_and_tiny_magnitudes_use_scientific() {
        assert_eq!(format_value(1_000_000.0), "1.000000e+06");
        assert_eq!(format_value(1_234_567.8), "1.234568e+06");
        assert_eq!(format_value(0.0001), "1.000000e-04");
        assert_eq!(format_value(-2.5e-7), "-2.500000e-07");
        assert_eq!(format_value(6.02e23), "6.020000e+23");
        assert_eq!(format_value(1e-120), "1.000000e-120");
    }

    #[test]
    fn boundaries_stay_fixed_below_upper_limit() {
        assert_eq!(format_value(999_999.5), "999999.5");
    }

    #[test]
    fn non_finite_values_fall_back_to_default_text() {
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
