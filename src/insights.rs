//! Aggregate statistics over the labels of one analysis run.

use std::fmt;

/// The three recognized sentiment classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Case-insensitive exact match. Anything else is unrecognized.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "positive" => Some(SentimentLabel::Positive),
            "negative" => Some(SentimentLabel::Negative),
            "neutral" => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }
}

/// Overall tone, decided by strict majority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    /// No class strictly exceeds both others, or neutral dominates.
    Balanced,
}

impl Tone {
    pub fn observation(&self) -> &'static str {
        match self {
            Tone::Positive => "The overall tone of the document is predominantly positive, suggesting favorable outcomes or opinions.",
            Tone::Negative => "The overall tone is predominantly negative, indicating potential issues or unfavorable sentiments.",
            Tone::Balanced => "The document maintains a balanced or neutral tone, with no strong positive or negative bias.",
        }
    }
}

const NO_SEGMENTS_OBSERVATION: &str = "No segments were long enough to analyze.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub tone: Tone,
}

impl Summary {
    /// Share of `count` in `total`, as a percentage. Zero when nothing was analyzed.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// Labels that matched none of the three classes.
    pub fn unrecognized(&self) -> usize {
        self.total - self.positive - self.negative - self.neutral
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Tally labels and pick the overall tone.
pub fn summarize<S: AsRef<str>>(labels: &[S]) -> Summary {
    let (mut positive, mut negative, mut neutral) = (0, 0, 0);
    for label in labels {
        match SentimentLabel::parse(label.as_ref()) {
            Some(SentimentLabel::Positive) => positive += 1,
            Some(SentimentLabel::Negative) => negative += 1,
            Some(SentimentLabel::Neutral) => neutral += 1,
            None => {}
        }
    }

    let tone = if positive > negative && positive > neutral {
        Tone::Positive
    } else if negative > positive && negative > neutral {
        Tone::Negative
    } else {
        Tone::Balanced
    };

    Summary {
        total: labels.len(),
        positive,
        negative,
        neutral,
        tone,
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentiment Analysis Summary:")?;
        writeln!(f, "Total Segments Analyzed: {}", self.total)?;

        if self.is_empty() {
            writeln!(f)?;
            writeln!(f, "Key Observations:")?;
            return write!(f, "- {NO_SEGMENTS_OBSERVATION}");
        }

        for (name, count) in [
            ("Positive", self.positive),
            ("Negative", self.negative),
            ("Neutral", self.neutral),
        ] {
            writeln!(f, "{name} Segments: {count} ({:.1}%)", self.percent(count))?;
        }
        writeln!(f)?;
        writeln!(f, "Key Observations:")?;
        write!(f, "- {}", self.tone.observation())
    }
}
