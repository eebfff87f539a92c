//! 단위 정의 및 환산 계수표 모음.

pub mod length;
pub mod temperature;
pub mod volume;
pub mod weight;

pub use length::LengthUnit;
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;

/// 단위 하나가 기준 단위 몇 개에 해당하는지 나열한 표.
pub type FactorTable<U> = [(U, f64)];

/// 문자열을 단위로 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 단위 이름: {0}")]
pub struct UnitParseError(pub String);

/// 공통 기준 단위를 거쳐 배율만으로 환산되는 단위(길이/무게/체적).
pub trait LinearUnit: Copy + PartialEq + std::fmt::Debug + 'static {
    /// 카테고리 전체의 계수표. 프로세스 수명 동안 바뀌지 않는다.
    fn factor_table() -> &'static FactorTable<Self>;
}

/// 계수표에서 단위의 계수를 찾는다. 표에 없으면 None.
pub fn lookup_factor<U: PartialEq>(table: &FactorTable<U>, unit: &U) -> Option<f64> {
    table.iter().find(|(u, _)| u == unit).map(|(_, f)| *f)
}

/// 입력 문자열을 별칭 비교용으로 정규화한다 (소문자, 공백/마침표/밑줄/하이픈 제거).
pub(crate) fn normalize_alias(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
