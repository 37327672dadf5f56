//! Batch and single-text analysis built on top of a [`SentimentClassifier`].

use crate::classifier::{LazyClassifier, SentimentClassifier, SharedClassifier};
use crate::core::{AnalyzerConfig, AnalyzerError, Result};
use crate::insights::{summarize, Summary};
use crate::text::{is_classifiable, normalize, segment, split_on_periods};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Column holding the documents in CSV input.
pub const TEXT_COLUMN: &str = "text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub text: String,
    pub sentiment: String,
}

/// Ordered records of one run and the summary over their labels.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub records: Vec<SentenceRecord>,
    pub summary: Summary,
}

impl Analysis {
    pub fn from_records(records: Vec<SentenceRecord>) -> Self {
        let labels: Vec<&str> = records.iter().map(|r| r.sentiment.as_str()).collect();
        let summary = summarize(&labels);
        Self { records, summary }
    }

    /// Write `text,sentiment` rows, header first.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record([TEXT_COLUMN, "sentiment"])?;
        for record in &self.records {
            writer.write_record([record.text.as_str(), record.sentiment.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Render the first `n` records as a right-aligned two-column table.
    pub fn preview(&self, n: usize) -> String {
        let rows = &self.records[..n.min(self.records.len())];
        if rows.is_empty() {
            return "(no segments)".to_string();
        }

        let text_width = column_width(TEXT_COLUMN, rows.iter().map(|r| r.text.as_str()));
        let label_width = column_width("sentiment", rows.iter().map(|r| r.sentiment.as_str()));

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(format!(
            "{:>text_width$} {:>label_width$}",
            TEXT_COLUMN, "sentiment"
        ));
        for r in rows {
            lines.push(format!(
                "{:>text_width$} {:>label_width$}",
                r.text, r.sentiment
            ));
        }
        lines.join("\n")
    }
}

/// Drives normalization, segmentation and classification.
#[derive(Clone)]
pub struct LegalSentimentAnalyzer {
    classifier: SharedClassifier,
}

impl LegalSentimentAnalyzer {
    pub fn new<C: SentimentClassifier + 'static>(classifier: C) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Analyzer whose FLAN-T5 model loads on the first classification.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        Self::new(LazyClassifier::from_config(config))
    }

    pub fn classifier(&self) -> &SharedClassifier {
        &self.classifier
    }

    /// Analyze a plain text file (one document) or a CSV file with a
    /// `text` column (one document per row).
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<Analysis> {
        let path = path.as_ref();
        let documents = read_documents(path)?;
        tracing::info!(path = %path.display(), documents = documents.len(), "processing file");

        let mut records = Vec::new();
        for document in &documents {
            self.classify_into(segment(&normalize(document)), &mut records)?;
        }

        tracing::debug!(segments = records.len(), "file processed");
        Ok(Analysis::from_records(records))
    }

    /// Analyze a single text body, splitting sentences on `.` only.
    pub fn analyze_text(&self, text: &str) -> Result<Analysis> {
        let mut records = Vec::new();
        self.classify_into(split_on_periods(&normalize(text)), &mut records)?;
        Ok(Analysis::from_records(records))
    }

    fn classify_into(
        &self,
        sentences: Vec<String>,
        records: &mut Vec<SentenceRecord>,
    ) -> Result<()> {
        for sentence in sentences {
            if !is_classifiable(&sentence) {
                continue;
            }
            let sentiment = self.classifier.classify(&sentence)?;
            tracing::trace!(%sentence, %sentiment, "classified");
            records.push(SentenceRecord {
                text: sentence,
                sentiment,
            });
        }
        Ok(())
    }
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

fn read_documents(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(AnalyzerError::InputNotFound(path.to_path_buf()));
    }

    let is_csv = path.to_string_lossy().ends_with(".csv");
    if !is_csv {
        return Ok(vec![std::fs::read_to_string(path)?]);
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let column = reader
        .headers()?
        .iter()
        .position(|h| h == TEXT_COLUMN)
        .ok_or_else(|| {
            AnalyzerError::Schema(format!(
                "CSV file must contain a '{TEXT_COLUMN}' column."
            ))
        })?;

    let mut documents = Vec::new();
    for row in reader.records() {
        let row = row?;
        documents.push(row.get(column).unwrap_or_default().to_string());
    }
    Ok(documents)
}
