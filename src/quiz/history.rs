use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, Offset, Utc};

use super::catalog::Category;
use super::scoring::Tally;

/// Asia/Jakarta (WIB) has no daylight saving, a fixed UTC+7 is exact.
const WIB_OFFSET_SECONDS: i32 = 7 * 3600;
const CSV_SEPARATOR: char = ';';
const UTF8_BOM: &str = "\u{feff}";

fn wib() -> FixedOffset {
    FixedOffset::east_opt(WIB_OFFSET_SECONDS).unwrap_or(Utc.fix())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRecord {
    /// `dd/mm/YYYY` in WIB.
    pub date: String,
    /// 24-hour `HH:MM:SS` in WIB.
    pub time: String,
    pub scores: Tally,
    pub result: String,
}

impl QuizRecord {
    pub fn new(scores: Tally, result: impl Into<String>, at: DateTime<Utc>) -> Self {
        let local = at.with_timezone(&wib());
        Self {
            date: local.format("%d/%m/%Y").to_string(),
            time: local.format("%H:%M:%S").to_string(),
            scores,
            result: result.into(),
        }
    }
}

/// Quiz results collected during one session.
#[derive(Debug, Clone, Default)]
pub struct QuizHistory {
    records: Vec<QuizRecord>,
}

impl QuizHistory {
    pub fn push(&mut self, record: QuizRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the history as `;`-separated CSV with a UTF-8 BOM.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let mut header = vec!["tanggal", "jam"];
        header.extend(Category::ALL.iter().map(Category::name));
        header.push("hasil");
        write!(writer, "{UTF8_BOM}")?;
        write_row(&mut writer, header.into_iter().map(str::to_string))?;
        for record in &self.records {
            let mut row = vec![record.date.clone(), record.time.clone()];
            row.extend(record.scores.iter().map(|(_, points)| points.to_string()));
            row.push(record.result.clone());
            write_row(&mut writer, row.into_iter())?;
        }
        writer.flush()
    }
}

fn write_row<W: Write>(writer: &mut W, fields: impl Iterator<Item = String>) -> io::Result<()> {
    let line = fields
        .map(|field| escape_field(&field))
        .collect::<Vec<_>>()
        .join(&CSV_SEPARATOR.to_string());
    writeln!(writer, "{line}")
}

fn escape_field(field: &str) -> String {
    if field.contains([CSV_SEPARATOR, '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{score, QUESTIONS};
    use chrono::TimeZone;

    fn sample_record() -> QuizRecord {
        let tally = score(QUESTIONS, &[Some(0); 5]).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 20, 5, 7).unwrap();
        QuizRecord::new(tally, "Programmer", at)
    }

    #[test]
    fn record_uses_jakarta_time() {
        let record = sample_record();
        assert_eq!(record.date, "10/03/2025");
        assert_eq!(record.time, "03:05:07");
    }

    #[test]
    fn csv_has_bom_header_and_rows() {
        let mut history = QuizHistory::default();
        history.push(sample_record());
        let mut out = Vec::new();
        history.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("\u{feff}tanggal;jam;Programmer;Designer;Data Scientist;hasil")
        );
        assert_eq!(lines.next(), Some("10/03/2025;03:05:07;25;7;15;Programmer"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn fields_with_separator_are_quoted() {
        assert_eq!(escape_field("a;b"), "\"a;b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("Programmer atau Designer"), "Programmer atau Designer");
    }
}
