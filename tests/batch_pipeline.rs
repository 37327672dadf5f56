// Batch pipeline tests against the public API.
// The model-backed test downloads FLAN-T5 and is ignored by default.

use legal_sentiment::pipelines::sentiment_analysis_pipeline::*;
use legal_sentiment::{LegalSentimentAnalyzer, Result, SentimentClassifier, Tone};
use std::io::Write;
use std::sync::Mutex;

/// Replays a fixed label sequence.
struct Scripted {
    labels: Mutex<Vec<&'static str>>,
}

impl Scripted {
    fn new(mut labels: Vec<&'static str>) -> Self {
        labels.reverse();
        Self {
            labels: Mutex::new(labels),
        }
    }
}

impl SentimentClassifier for Scripted {
    fn classify(&self, _sentence: &str) -> Result<String> {
        Ok(self
            .labels
            .lock()
            .unwrap()
            .pop()
            .unwrap_or("Neutral")
            .to_string())
    }
}

fn fixture(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn masked_document_to_csv() -> anyhow::Result<()> {
    let input = fixture(
        ".txt",
        "On 4/15/2020 the tribunal ruled for John Smith.\n\
         The ruling   favors the tenant.\n\
         Costs are denied. Ok.",
    );
    let analyzer = LegalSentimentAnalyzer::new(Scripted::new(vec![
        "Positive", "Positive", "Negative",
    ]));

    let analysis = analyzer.process_file(input.path())?;
    assert_eq!(analysis.records.len(), 3);
    assert_eq!(
        analysis.records[0].text,
        "On [DATE] the tribunal ruled for [NAME]."
    );
    assert_eq!(analysis.records[1].text, "The ruling favors the tenant.");
    assert_eq!(analysis.summary.tone, Tone::Positive);
    assert!(analysis
        .summary
        .to_string()
        .contains("Positive Segments: 2 (66.7%)"));

    let output = tempfile::NamedTempFile::new()?;
    analysis.write_csv(output.path())?;
    let mut reader = csv::Reader::from_path(output.path())?;
    assert_eq!(
        reader.headers()?.iter().collect::<Vec<_>>(),
        vec!["text", "sentiment"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][0], "Costs are denied.");
    assert_eq!(&rows[2][1], "Negative");
    Ok(())
}

#[test]
fn free_form_labels_are_kept_verbatim() -> anyhow::Result<()> {
    let input = fixture(".txt", "The lessee shall pay rent monthly.");
    let analyzer = LegalSentimentAnalyzer::new(Scripted::new(vec!["positive-ish"]));

    let analysis = analyzer.process_file(input.path())?;
    assert_eq!(analysis.records[0].sentiment, "positive-ish");
    assert_eq!(analysis.summary.total, 1);
    assert_eq!(analysis.summary.unrecognized(), 1);
    assert_eq!(analysis.summary.tone, Tone::Balanced);
    Ok(())
}

#[test]
fn empty_csv_yields_degenerate_summary() -> anyhow::Result<()> {
    let input = fixture(".csv", "text\n\"\"\nshort.\n");
    let analyzer = LegalSentimentAnalyzer::new(Scripted::new(vec![]));

    let analysis = analyzer.process_file(input.path())?;
    assert!(analysis.records.is_empty());
    assert!(analysis
        .summary
        .to_string()
        .ends_with("No segments were long enough to analyze."));
    Ok(())
}

#[test]
#[ignore = "downloads google/flan-t5-small"]
fn flan_t5_classifies_a_sentence() -> anyhow::Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::flan_t5(FlanT5Size::Small)
        .cpu()
        .build()?;
    let label = pipeline.predict("The court ruled in favor of the plaintiff.")?;
    assert!(!label.trim().is_empty());
    Ok(())
}
