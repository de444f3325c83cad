//! Batch report aggregation and output.
//!
//! A [`Report`] holds one [`MetricRecord`] per analyzed document, in input
//! order, plus a [`DocumentFailure`] for every document that was skipped.
//! Records are written as CSV with the fixed [`REPORT_COLUMNS`] header or as
//! a JSON array.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::Result;
use crate::metrics::TextMetrics;

/// Column order of the CSV report.
///
/// `AVG NUMBER OF WORDS PER SENTENCE` repeats `AVG SENTENCE LENGTH`, and
/// `WORD COUNT` is the cleaned word count.
pub const REPORT_COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Metrics for one document, tagged with its identifier and locator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    pub url_id: String,
    pub url: String,
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

impl MetricRecord {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>, metrics: TextMetrics) -> Self {
        Self { url_id: url_id.into(), url: url.into(), metrics }
    }

    /// Cell values in [`REPORT_COLUMNS`] order.
    pub fn to_row(&self) -> Vec<String> {
        let m = &self.metrics;
        vec![
            self.url_id.clone(),
            self.url.clone(),
            m.positive_score.to_string(),
            m.negative_score.to_string(),
            m.polarity_score.to_string(),
            m.subjectivity_score.to_string(),
            m.avg_sentence_length.to_string(),
            m.percentage_of_complex_words.to_string(),
            m.fog_index.to_string(),
            m.avg_number_of_words_per_sentence.to_string(),
            m.complex_word_count.to_string(),
            m.word_count.to_string(),
            m.syllable_per_word.to_string(),
            m.personal_pronouns.to_string(),
            m.avg_word_length.to_string(),
        ]
    }
}

/// Pipeline stage at which a document was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Fetch,
    Analysis,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureStage::Fetch => write!(f, "fetch"),
            FailureStage::Analysis => write!(f, "analysis"),
        }
    }
}

/// A document that produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub url_id: String,
    pub url: String,
    pub stage: FailureStage,
    pub reason: String,
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {} failed: {}", self.url_id, self.url, self.stage, self.reason)
    }
}

/// Output format for [`Report::write`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}' (expected csv or json)", other)),
        }
    }
}

/// Processed and skipped counts for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub processed: usize,
    pub skipped: usize,
}

impl ReportSummary {
    pub fn total(&self) -> usize {
        self.processed + self.skipped
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} processed, {} skipped", self.processed, self.skipped)
    }
}

/// Results of a batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub records: Vec<MetricRecord>,
    pub failures: Vec<DocumentFailure>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_record(&mut self, record: MetricRecord) {
        self.records.push(record);
    }

    pub fn push_failure(&mut self, failure: DocumentFailure) {
        self.failures.push(failure);
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary { processed: self.records.len(), skipped: self.failures.len() }
    }

    /// Writes the records as CSV, header first.
    ///
    /// An empty report still gets the header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(REPORT_COLUMNS)?;
        for record in &self.records {
            csv_writer.write_record(record.to_row())?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Serializes the records as a JSON array.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty { serde_json::to_string_pretty(&self.records)? } else { serde_json::to_string(&self.records)? };
        Ok(json)
    }

    /// Writes the records in the given format.
    pub fn write<W: Write>(&self, mut writer: W, format: ReportFormat, pretty: bool) -> Result<()> {
        match format {
            ReportFormat::Csv => self.write_csv(writer),
            ReportFormat::Json => {
                writeln!(writer, "{}", self.to_json(pretty)?)?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> TextMetrics {
        TextMetrics {
            positive_score: 3,
            negative_score: 1,
            polarity_score: 0.5,
            subjectivity_score: 0.25,
            avg_sentence_length: 12.0,
            percentage_of_complex_words: 25.0,
            fog_index: 14.8,
            avg_number_of_words_per_sentence: 12.0,
            complex_word_count: 6,
            word_count: 15,
            syllable_per_word: 1.75,
            personal_pronouns: 2,
            avg_word_length: 4.5,
        }
    }

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.push_record(MetricRecord::new("101", "https://example.com/a", sample_metrics()));
        report.push_record(MetricRecord::new("102", "https://example.com/b", TextMetrics::default()));
        report.push_failure(DocumentFailure {
            url_id: "103".to_string(),
            url: "https://example.com/c".to_string(),
            stage: FailureStage::Fetch,
            reason: "HTTP 404".to_string(),
        });
        report
    }

    #[test]
    fn test_row_matches_columns() {
        let record = MetricRecord::new("101", "https://example.com/a", sample_metrics());
        let row = record.to_row();
        assert_eq!(row.len(), REPORT_COLUMNS.len());
        assert_eq!(row[0], "101");
        assert_eq!(row[2], "3");
        assert_eq!(row[6], row[9]);
        assert_eq!(row[11], "15");
    }

    #[test]
    fn test_write_csv() {
        let mut buf = Vec::new();
        sample_report().write_csv(&mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();

        assert_eq!(lines.next().unwrap(), REPORT_COLUMNS.join(","));
        assert!(lines.next().unwrap().starts_with("101,https://example.com/a,3,1,0.5,0.25,12,25,14.8,12,6,15,1.75,2,4.5"));
        assert!(lines.next().unwrap().starts_with("102,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_csv_empty_report_has_header() {
        let mut buf = Vec::new();
        Report::new().write_csv(&mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.trim_end(), REPORT_COLUMNS.join(","));
    }

    #[test]
    fn test_to_json() {
        let json = sample_report().to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["url_id"], "101");
        assert_eq!(records[0]["positive_score"], 3);
        assert_eq!(records[0]["fog_index"], 14.8);
    }

    #[test]
    fn test_summary() {
        let summary = sample_report().summary();
        assert_eq!(summary, ReportSummary { processed: 2, skipped: 1 });
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.to_string(), "2 processed, 1 skipped");
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("CSV".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("xlsx".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_failure_display() {
        let report = sample_report();
        assert_eq!(report.failures[0].to_string(), "103 (https://example.com/c): fetch failed: HTTP 404");
    }
}
