use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Resolves a customer name to an already-known credit score.
pub trait ScoreLookup: Send + Sync {
    fn resolve(&self, name: &str) -> Result<f64, LookupError>;
}

/// Lookup failure, surfaced before the engine is invoked.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("name not found: {0}")]
    NotFound(String),
    #[error("score lookup unavailable: {0}")]
    Unavailable(String),
}

/// Read-only name to score table held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticScoreTable {
    scores: HashMap<String, f64>,
}

impl StaticScoreTable {
    pub fn new<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, f64)>,
        N: Into<String>,
    {
        let scores = entries
            .into_iter()
            .map(|(name, score)| (name.into().trim().to_string(), score))
            .collect();
        Self { scores }
    }

    /// Customers bundled with the eligibility form.
    pub fn sample() -> Self {
        Self::new([
            ("Ahmad Zulfikar", 750.0),
            ("Budi Santoso", 680.0),
            ("Chandra Wijaya", 720.0),
            ("Dina Maria", 690.0),
            ("Eka Prasetya", 710.0),
            ("Fajar Arifin", 765.0),
            ("Gita Puspita", 730.0),
        ])
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScoreTableImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses a `name,score` CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScoreTableImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut scores = HashMap::new();

        for record in csv_reader.deserialize::<ScoreRow>() {
            let row = record?;
            if !row.score.is_finite() {
                return Err(ScoreTableImportError::InvalidScore {
                    name: row.name,
                    score: row.score,
                });
            }
            scores.insert(row.name, row.score);
        }

        Ok(Self { scores })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Known names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scores.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ScoreLookup for StaticScoreTable {
    fn resolve(&self, name: &str) -> Result<f64, LookupError> {
        let name = name.trim();
        self.scores
            .get(name)
            .copied()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    name: String,
    score: f64,
}

#[derive(Debug)]
pub enum ScoreTableImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidScore { name: String, score: f64 },
}

impl std::fmt::Display for ScoreTableImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreTableImportError::Io(err) => write!(f, "failed to read score table: {}", err),
            ScoreTableImportError::Csv(err) => write!(f, "invalid score table CSV: {}", err),
            ScoreTableImportError::InvalidScore { name, score } => {
                write!(f, "score for '{}' is not a finite number ({})", name, score)
            }
        }
    }
}

impl std::error::Error for ScoreTableImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScoreTableImportError::Io(err) => Some(err),
            ScoreTableImportError::Csv(err) => Some(err),
            ScoreTableImportError::InvalidScore { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScoreTableImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScoreTableImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
