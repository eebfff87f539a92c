//! 세션 동안의 변환 기록. 최근 항목만 정해진 개수까지 보관하고 파일로 내보낼 수 있다.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::category::{Unit, UnitCategory};
use crate::conversion::ConversionRequest;
use crate::format::format_value;

/// 기본 보관 개수.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 기록 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: NaiveDateTime,
    pub label: Option<String>,
    pub input_value: f64,
    pub from_unit: Unit,
    pub result: f64,
    pub to_unit: Unit,
    pub category: UnitCategory,
}

impl HistoryEntry {
    /// 현재 시각으로 기록을 만든다.
    pub fn new(request: &ConversionRequest, result: f64, label: Option<String>) -> Self {
        Self::at(Local::now().naive_local(), request, result, label)
    }

    pub fn at(
        timestamp: NaiveDateTime,
        request: &ConversionRequest,
        result: f64,
        label: Option<String>,
    ) -> Self {
        // 빈 라벨은 라벨 없음으로 취급
        let label = label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        Self {
            timestamp,
            label,
            input_value: request.value,
            from_unit: request.from,
            result,
            to_unit: request.to,
            category: request.category(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.timestamp.format(TIMESTAMP_FORMAT))?;
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        write!(
            f,
            "{} {} = {} {} ({})",
            format_value(self.input_value),
            self.from_unit,
            format_value(self.result),
            self.to_unit,
            self.category
        )
    }
}

/// 기록 내보내기 오류.
#[derive(Debug, thiserror::Error)]
pub enum HistoryExportError {
    /// 파일 입출력 오류
    #[error("기록 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 직렬화 오류
    #[error("기록 직렬화 오류: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 내보내기 형식. 확장자로 고른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Text,
        }
    }
}

/// 최근 변환 기록. 가득 차면 가장 오래된 항목부터 버린다.
#[derive(Debug, Clone)]
pub struct ConversionHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for ConversionHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LIMIT)
    }
}

impl ConversionHistory {
    /// 보관 개수를 지정한다. 0은 1로 올린다.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 기록을 추가한다. 입력이나 결과가 유한하지 않은 항목은 내보낼 수 없으므로 버린다.
    pub fn push(&mut self, entry: HistoryEntry) {
        if !(entry.input_value.is_finite() && entry.result.is_finite()) {
            log::debug!("skipping non-finite history entry: {entry}");
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// 변환 요청과 결과를 현재 시각으로 기록한다.
    pub fn record(&mut self, request: &ConversionRequest, result: f64, label: Option<String>) {
        self.push(HistoryEntry::new(request, result, label));
    }

    /// 최신 항목부터 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 기록을 파일로 내보낸다. `.json`이면 JSON 배열, 그 외에는 한 줄에 한 항목.
    pub fn export(&self, path: &Path) -> Result<ExportFormat, HistoryExportError> {
        let format = ExportFormat::from_path(path);
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out, format)?;
        out.flush()?;
        log::info!(
            "exported {} history entries to {}",
            self.len(),
            path.display()
        );
        Ok(format)
    }

    pub fn write_to<W: Write>(
        &self,
        out: &mut W,
        format: ExportFormat,
    ) -> Result<(), HistoryExportError> {
        match format {
            ExportFormat::Json => {
                let entries: Vec<&HistoryEntry> = self.iter().collect();
                serde_json::to_writer_pretty(&mut *out, &entries)?;
                writeln!(out)?;
            }
            ExportFormat::Text => {
                for entry in self.iter() {
                    writeln!(out, "{entry}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;
    use chrono::NaiveDate;

    fn ts(sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, sec))
            .unwrap()
    }

    fn entry(value: f64, sec: u32) -> HistoryEntry {
        let req = ConversionRequest::new(value, LengthUnit::Meters, LengthUnit::Feet);
        HistoryEntry::at(ts(sec), &req, value / 0.3048, None)
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = ConversionHistory::with_capacity(3);
        for i in 0..5 {
            history.push(entry(i as f64, i));
        }
        assert_eq!(history.len(), 3);
        let values: Vec<f64> = history.iter().map(|e| e.input_value).collect();
        assert_eq!(values, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn non_finite_entries_are_not_kept() {
        let mut history = ConversionHistory::default();
        let req = ConversionRequest::new(f64::NAN, LengthUnit::Meters, LengthUnit::Meters);
        history.record(&req, f64::NAN, None);
        history.push(entry(f64::INFINITY, 1));
        assert!(history.is_empty());

        history.push(entry(1.0, 2));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = ConversionHistory::with_capacity(0);
        history.push(entry(1.0, 0));
        history.push(entry(2.0, 1));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.latest().map(|e| e.input_value), Some(2.0));
    }

    #[test]
    fn blank_label_is_dropped() {
        let req = ConversionRequest::new(1.0, LengthUnit::Meters, LengthUnit::Feet);
        let e = HistoryEntry::at(ts(0), &req, 3.28084, Some("   ".into()));
        assert_eq!(e.label, None);
    }

    #[test]
    fn text_line_includes_label_and_category() {
        let req = ConversionRequest::new(12.0, LengthUnit::Meters, LengthUnit::Feet);
        let e = HistoryEntry::at(ts(5), &req, 12.0 / 0.3048, Some("desk".into()));
        assert_eq!(
            e.to_string(),
            "[2024-03-01 09:30:05] desk: 12 meters = 39.370079 feet (Length)"
        );
    }

    #[test]
    fn export_format_follows_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("a.txt")), ExportFormat::Text);
        assert_eq!(ExportFormat::from_path(Path::new("history")), ExportFormat::Text);
    }
}
