//! 사용자가 입력한 문자열을 변환 요청으로 해석한다. 엔진 호출 전 단계의 검증을 담당한다.

use crate::category::{Unit, UnitCategory};
use crate::conversion::ConversionRequest;

/// 입력 해석 단계의 오류. 모두 사용자가 다시 입력하면 되는 오류이다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// 숫자로 해석할 수 없는 입력
    #[error("올바른 숫자가 아님: '{0}'")]
    InvalidInput(String),
    /// 카테고리 안에 없는 단위 이름
    #[error("{category} 카테고리에 없는 단위: '{input}'")]
    UnrecognizedUnit {
        category: UnitCategory,
        input: String,
    },
    /// 알 수 없는 카테고리 이름
    #[error("알 수 없는 카테고리: '{0}'")]
    UnrecognizedCategory(String),
}

/// 값 문자열을 실수로 해석한다. 빈 문자열과 inf/NaN 표기는 거부한다.
pub fn parse_value(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidInput(trimmed.to_string())),
    }
}

pub fn parse_category(text: &str) -> Result<UnitCategory, InputError> {
    text.parse::<UnitCategory>()
        .map_err(|_| InputError::UnrecognizedCategory(text.trim().to_string()))
}

pub fn parse_unit(category: UnitCategory, text: &str) -> Result<Unit, InputError> {
    category
        .parse_unit(text)
        .map_err(|_| InputError::UnrecognizedUnit {
            category,
            input: text.trim().to_string(),
        })
}

/// 카테고리/값/단위 문자열을 한 번에 해석해 변환 요청을 만든다.
pub fn parse_request(
    category: UnitCategory,
    value_text: &str,
    from_text: &str,
    to_text: &str,
) -> Result<ConversionRequest, InputError> {
    let value = parse_value(value_text)?;
    let from = parse_unit(category, from_text)?;
    let to = parse_unit(category, to_text)?;
    Ok(ConversionRequest { value, from, to })
}
