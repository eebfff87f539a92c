use crate::category::{Unit, UnitCategory};
use crate::units::temperature::{from_celsius, to_celsius};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// 계수표에 없는 단위. 단위 열거형과 표가 어긋난 빌드 결함이다.
    #[error("계수표에 없는 단위: {unit}")]
    UnknownUnit { unit: String },
    /// 계수가 정확히 0인 단위
    #[error("계수가 0인 단위: {unit}")]
    DegenerateFactor { unit: String },
    /// 결과가 무한대 또는 NaN
    #[error("변환 결과가 유한하지 않음: {value}")]
    NumericOverflow { value: f64 },
    /// 서로 다른 카테고리의 단위끼리 변환 요청
    #[error("카테고리가 다른 단위 간 변환: {from} ({from_category}) -> {to} ({to_category})")]
    CategoryMismatch {
        from: Unit,
        from_category: UnitCategory,
        to: Unit,
        to_category: UnitCategory,
    },
}

impl ConversionError {
    /// 사용자 입력이 아니라 프로그램 결함으로 봐야 하는 오류인지.
    pub fn is_defect(&self) -> bool {
        !matches!(self, ConversionError::NumericOverflow { .. })
    }
}

pub type ConversionResult = Result<f64, ConversionError>;

fn check_finite(value: f64) -> ConversionResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::NumericOverflow { value })
    }
}

/// 계수표를 이용해 기준 단위를 거쳐 변환한다.
///
/// 같은 단위끼리는 산술 없이 입력을 그대로 돌려준다. 표에 없는 단위는
/// `UnknownUnit`, 계수 0은 `DegenerateFactor`, 유한하지 않은 결과는
/// `NumericOverflow`로 실패한다.
pub fn convert_with_table<U>(value: f64, from: U, to: U, table: &FactorTable<U>) -> ConversionResult
where
    U: PartialEq + std::fmt::Debug,
{
    if from == to {
        return Ok(value);
    }
    let result = scale_through_base(value, &from, &to, table);
    warn_on_failure(result, value, &from, &to)
}

fn scale_through_base<U>(value: f64, from: &U, to: &U, table: &FactorTable<U>) -> ConversionResult
where
    U: PartialEq + std::fmt::Debug,
{
    // 두 단위 모두 표에 있는지 먼저 확인한 뒤 계수 0을 검사한다
    let from_factor = lookup_factor(table, from).ok_or_else(|| unknown_unit(from))?;
    let to_factor = lookup_factor(table, to).ok_or_else(|| unknown_unit(to))?;
    for (unit, factor) in [(from, from_factor), (to, to_factor)] {
        if factor == 0.0 {
            return Err(ConversionError::DegenerateFactor {
                unit: format!("{unit:?}"),
            });
        }
    }
    check_finite(value * from_factor / to_factor)
}

fn unknown_unit<U: std::fmt::Debug>(unit: &U) -> ConversionError {
    ConversionError::UnknownUnit {
        unit: format!("{unit:?}"),
    }
}

fn warn_on_failure<U: std::fmt::Debug>(
    result: ConversionResult,
    value: f64,
    from: &U,
    to: &U,
) -> ConversionResult {
    if let Err(err) = &result {
        log::warn!("conversion {value} {from:?} -> {to:?} failed: {err}");
    }
    result
}

/// 카테고리 고유의 계수표로 선형 단위를 변환한다.
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> ConversionResult {
    convert_with_table(value, from, to, U::factor_table())
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> ConversionResult {
    convert_linear(value, from, to)
}

/// 무게를 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> ConversionResult {
    convert_linear(value, from, to)
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> ConversionResult {
    convert_linear(value, from, to)
}

/// 온도를 섭씨를 거쳐 변환한다.
pub fn convert_temperature(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> ConversionResult {
    if from == to {
        return Ok(value);
    }
    let c = to_celsius(value, from);
    warn_on_failure(check_finite(from_celsius(c, to)), value, &from, &to)
}

/// 태그가 붙은 단위끼리 변환한다. 카테고리가 다르면 `CategoryMismatch`.
pub fn convert(value: f64, from: Unit, to: Unit) -> ConversionResult {
    match (from, to) {
        (Unit::Length(f), Unit::Length(t)) => convert_length(value, f, t),
        (Unit::Weight(f), Unit::Weight(t)) => convert_weight(value, f, t),
        (Unit::Temperature(f), Unit::Temperature(t)) => convert_temperature(value, f, t),
        (Unit::Volume(f), Unit::Volume(t)) => convert_volume(value, f, t),
        _ => warn_on_failure(
            Err(ConversionError::CategoryMismatch {
                from,
                from_category: from.category(),
                to,
                to_category: to.category(),
            }),
            value,
            &from,
            &to,
        ),
    }
}

/// 한 번의 변환 요청. 저장되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    pub fn new(value: f64, from: impl Into<Unit>, to: impl Into<Unit>) -> Self {
        Self {
            value,
            from: from.into(),
            to: to.into(),
        }
    }

    /// 출발 단위 기준의 카테고리.
    pub fn category(&self) -> UnitCategory {
        self.from.category()
    }

    pub fn execute(&self) -> ConversionResult {
        convert(self.value, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Probe {
        One,
        Two,
        Zero,
        Missing,
    }

    #[test]
    fn identity_skips_table_lookup() {
        let table: [(Probe, f64); 0] = [];
        assert_eq!(
            convert_with_table(1.25, Probe::Missing, Probe::Missing, &table),
            Ok(1.25)
        );
    }

    #[test]
    fn missing_entry_is_unknown_unit() {
        let table = [(Probe::One, 1.0), (Probe::Two, 2.0)];
        let err = convert_with_table(1.0, Probe::One, Probe::Missing, &table).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                unit: "Missing".into()
            }
        );
        assert!(err.is_defect());
    }

    #[test]
    fn zero_factor_is_degenerate() {
        let table = [(Probe::One, 1.0), (Probe::Two, 0.0)];
        let err = convert_with_table(1.0, Probe::Two, Probe::One, &table).unwrap_err();
        assert!(matches!(err, ConversionError::DegenerateFactor { .. }));
    }

    #[test]
    fn missing_unit_wins_over_zero_factor() {
        let table = [(Probe::Zero, 0.0)];
        let err = convert_with_table(1.0, Probe::Zero, Probe::Missing, &table).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                unit: "Missing".into()
            }
        );

        let err = convert_with_table(1.0, Probe::Missing, Probe::Zero, &table).unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    }

    #[test]
    fn non_finite_result_is_overflow() {
        let table = [(Probe::One, 1e300), (Probe::Two, 1e-300)];
        let err = convert_with_table(1e10, Probe::One, Probe::Two, &table).unwrap_err();
        assert!(matches!(err, ConversionError::NumericOverflow { value } if value.is_infinite()));
        assert!(!err.is_defect());
    }

    #[test]
    fn mismatched_categories_are_rejected() {
        let err = convert(1.0, LengthUnit::Feet.into(), WeightUnit::Pounds.into()).unwrap_err();
        assert!(matches!(err, ConversionError::CategoryMismatch { .. }));
    }

    #[test]
    fn request_executes_through_unified_entry() {
        let req = ConversionRequest::new(2.0, LengthUnit::Kilometers, LengthUnit::Meters);
        assert_eq!(req.category(), UnitCategory::Length);
        assert_eq!(req.execute(), Ok(2000.0));
    }
}
