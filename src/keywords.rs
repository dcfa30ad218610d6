//! Keyword research tables
//!
//! Keyword metric rows are supplied as explicit data, either loaded from a
//! JSON file or taken from the bundled demo dataset. [`KeywordTable`] offers
//! the search, sort and CSV export operations of the keyword panel.

use crate::error::{DatasetError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One keyword with its search metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// Keyword phrase
    pub keyword: String,
    /// Monthly search volume
    pub volume: u64,
    /// Ranking difficulty, 0-100
    pub difficulty: u8,
    /// Cost per click as a currency string, e.g. `$2.45`
    pub cpc: String,
}

impl KeywordRecord {
    /// Numeric cost per click; unparsable values count as zero
    pub fn cpc_value(&self) -> f64 {
        self.cpc
            .trim()
            .trim_start_matches('$')
            .trim()
            .parse()
            .unwrap_or(0.0)
    }
}

/// Twelve-month search trend for a keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTrend {
    /// Keyword phrase
    pub keyword: String,
    /// Monthly search volume
    pub search_volume: u64,
    /// Ranking difficulty, 0-100
    pub difficulty: u8,
    /// Monthly data points, oldest first
    pub trend: Vec<u64>,
}

impl KeywordTrend {
    /// Percentage change from the first to the last data point
    pub fn growth(&self) -> Option<f64> {
        let first = *self.trend.first()?;
        let last = *self.trend.last()?;
        if self.trend.len() < 2 || first == 0 {
            return None;
        }
        Some((last as f64 - first as f64) / first as f64 * 100.0)
    }
}

/// Coarse difficulty label used by the keyword research panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyBand {
    /// Easy to rank for
    Low,
    /// Moderate competition
    Medium,
    /// Heavy competition
    High,
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifficultyBand::Low => "Low",
            DifficultyBand::Medium => "Medium",
            DifficultyBand::High => "High",
        };
        f.write_str(name)
    }
}

/// Keyword suggestion from the research panel, with a banded difficulty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    /// Keyword phrase
    pub keyword: String,
    /// Monthly search volume
    pub volume: u64,
    /// Difficulty label
    pub difficulty: DifficultyBand,
    /// Cost per click as a currency string
    pub cpc: String,
}

/// Demo keyword suggestions shown by the research panel, largest volume first
pub fn research_demo() -> Vec<ResearchResult> {
    use DifficultyBand::{Low, Medium};

    [
        ("productivity tools", 55000, Medium, "$2.45"),
        ("productivity apps", 52000, Medium, "$2.10"),
        ("best productivity tools", 27000, Medium, "$1.95"),
        ("productivity software", 21000, Medium, "$3.20"),
        ("productivity tools for work", 18500, Low, "$1.75"),
        ("free productivity tools", 16000, Low, "$1.50"),
        ("productivity tools for students", 12000, Low, "$1.30"),
        ("productivity tools for teams", 9800, Medium, "$3.45"),
    ]
    .into_iter()
    .map(|(keyword, volume, difficulty, cpc)| ResearchResult {
        keyword: keyword.to_string(),
        volume,
        difficulty,
        cpc: cpc.to_string(),
    })
    .collect()
}

/// A set of keyword rows and trends
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordDataset {
    /// Keyword metric rows
    #[serde(default)]
    pub keywords: Vec<KeywordRecord>,
    /// Keyword trends
    #[serde(default)]
    pub trends: Vec<KeywordTrend>,
}

impl KeywordDataset {
    /// Parse a dataset from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Self =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;
        debug!(
            keywords = dataset.keywords.len(),
            trends = dataset.trends.len(),
            "Loaded keyword dataset"
        );
        Ok(dataset)
    }

    /// Read and parse a dataset file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Demo dataset shown when no data has been imported
    pub fn demo() -> Self {
        let record = |keyword: &str, volume: u64, difficulty: u8, cpc: &str| KeywordRecord {
            keyword: keyword.to_string(),
            volume,
            difficulty,
            cpc: cpc.to_string(),
        };
        let trend = |keyword: &str, search_volume: u64, difficulty: u8, trend: &[u64]| KeywordTrend {
            keyword: keyword.to_string(),
            search_volume,
            difficulty,
            trend: trend.to_vec(),
        };

        Self {
            keywords: vec![
                record("office space software", 2900, 67, "$4.20"),
                record("office management software", 1800, 58, "$5.10"),
                record("workspace management", 3200, 51, "$3.80"),
                record("desk booking app", 5400, 42, "$2.90"),
                record("hybrid workplace solution", 2200, 45, "$6.10"),
                record("return to office software", 4100, 39, "$4.50"),
                record("office utilization analytics", 1500, 37, "$7.20"),
            ],
            trends: vec![
                trend("content creation tools", 35000, 72, &[5200, 5300, 6500, 7200, 8000, 8500, 8200, 9000, 9800, 10500, 11000, 12000]),
                trend("seo automation", 28000, 68, &[3200, 3400, 3800, 4200, 4500, 5000, 5200, 5500, 6000, 6500, 7000, 7400]),
                trend("keyword research tool", 42000, 82, &[8500, 8800, 9200, 9500, 10000, 10200, 10500, 11000, 11500, 12000, 12500, 13000]),
                trend("programmatic content writing", 18000, 57, &[1200, 1500, 1800, 2200, 2500, 3000, 3400, 3800, 4200, 4500, 5000, 5500]),
                trend("wordpress content automation", 22000, 63, &[3000, 3200, 3500, 3800, 4000, 4500, 5000, 5500, 6000, 6500, 7000, 7500]),
                trend("seo content generator", 31000, 70, &[4500, 5000, 5500, 6000, 6500, 7000, 7500, 8000, 8500, 9000, 9500, 10000]),
            ],
        }
    }
}

/// Column a keyword table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Keyword text
    Keyword,
    /// Search volume
    Volume,
    /// Difficulty
    Difficulty,
    /// Cost per click
    Cpc,
}

impl FromStr for SortField {
    type Err = DatasetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(SortField::Keyword),
            "volume" => Ok(SortField::Volume),
            "difficulty" => Ok(SortField::Difficulty),
            "cpc" => Ok(SortField::Cpc),
            other => Err(DatasetError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Keyword => "keyword",
            SortField::Volume => "volume",
            SortField::Difficulty => "difficulty",
            SortField::Cpc => "cpc",
        };
        f.write_str(name)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Searchable, sortable view over keyword rows
#[derive(Debug, Clone)]
pub struct KeywordTable {
    records: Vec<KeywordRecord>,
    search: String,
    field: SortField,
    direction: SortDirection,
}

impl KeywordTable {
    /// Table sorted by volume, largest first
    pub fn new(records: Vec<KeywordRecord>) -> Self {
        Self {
            records,
            search: String::new(),
            field: SortField::Volume,
            direction: SortDirection::Desc,
        }
    }

    /// Set the case-insensitive search term
    pub fn search<S: Into<String>>(&mut self, term: S) -> &mut Self {
        self.search = term.into().to_lowercase();
        self
    }

    /// Sort by `field`: the current field toggles direction, a new field
    /// starts descending
    pub fn sort_by(&mut self, field: SortField) -> &mut Self {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
        self
    }

    /// Set field and direction directly
    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) -> &mut Self {
        self.field = field;
        self.direction = direction;
        self
    }

    /// Current sort
    pub fn sort(&self) -> (SortField, SortDirection) {
        (self.field, self.direction)
    }

    /// Filtered and sorted rows
    pub fn rows(&self) -> Vec<&KeywordRecord> {
        let mut rows: Vec<&KeywordRecord> = self
            .records
            .iter()
            .filter(|r| r.keyword.to_lowercase().contains(&self.search))
            .collect();

        rows.sort_by(|a, b| {
            let ord = compare(a, b, self.field);
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }

    /// Export the visible rows as CSV
    pub fn to_csv(&self) -> String {
        let mut lines = vec!["Keyword,Volume,Difficulty,CPC".to_string()];
        lines.extend(self.rows().into_iter().map(|r| {
            format!(
                "{},{},{},{}",
                csv_quote(&r.keyword),
                r.volume,
                r.difficulty,
                csv_quote(&r.cpc)
            )
        }));
        lines.join("\n")
    }
}

fn compare(a: &KeywordRecord, b: &KeywordRecord, field: SortField) -> Ordering {
    match field {
        SortField::Keyword => a
            .keyword
            .to_lowercase()
            .cmp(&b.keyword.to_lowercase())
            .then_with(|| a.keyword.cmp(&b.keyword)),
        SortField::Volume => a.volume.cmp(&b.volume),
        SortField::Difficulty => a.difficulty.cmp(&b.difficulty),
        SortField::Cpc => a.cpc_value().total_cmp(&b.cpc_value()),
    }
}

fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> KeywordTable {
        KeywordTable::new(KeywordDataset::demo().keywords)
    }

    #[test]
    fn test_default_sort_is_volume_desc() {
        let t = table();
        let rows = t.rows();
        assert_eq!(rows[0].keyword, "desk booking app");
        assert_eq!(rows.last().unwrap().keyword, "office utilization analytics");
    }

    #[test]
    fn test_sort_toggle() {
        let mut t = table();
        t.sort_by(SortField::Volume);
        assert_eq!(t.sort(), (SortField::Volume, SortDirection::Asc));
        t.sort_by(SortField::Cpc);
        assert_eq!(t.sort(), (SortField::Cpc, SortDirection::Desc));
        assert_eq!(t.rows()[0].cpc, "$7.20");
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut t = table();
        t.search("OFFICE");
        assert_eq!(t.rows().len(), 4);
    }

    #[test]
    fn test_cpc_value() {
        let rec = |cpc: &str| KeywordRecord {
            keyword: "k".to_string(),
            volume: 1,
            difficulty: 1,
            cpc: cpc.to_string(),
        };
        assert_eq!(rec("$2.45").cpc_value(), 2.45);
        assert_eq!(rec("3").cpc_value(), 3.0);
        assert_eq!(rec("n/a").cpc_value(), 0.0);
    }

    #[test]
    fn test_csv_export() {
        let mut t = table();
        t.search("desk");
        assert_eq!(
            t.to_csv(),
            "Keyword,Volume,Difficulty,CPC\n\"desk booking app\",5400,42,\"$2.90\""
        );
    }

    #[test]
    fn test_trend_growth() {
        let demo = KeywordDataset::demo();
        let growth = demo.trends[1].growth().unwrap();
        assert!((growth - 131.25).abs() < 1e-9);

        let flat = KeywordTrend {
            keyword: "x".to_string(),
            search_volume: 0,
            difficulty: 0,
            trend: vec![5],
        };
        assert_eq!(flat.growth(), None);
    }

    #[test]
    fn test_keyword_sort_ignores_case() {
        let rec = |keyword: &str| KeywordRecord {
            keyword: keyword.to_string(),
            volume: 1,
            difficulty: 1,
            cpc: "$1.00".to_string(),
        };
        let mut t = KeywordTable::new(vec![rec("Zebra"), rec("apple"), rec("Mango")]);
        t.set_sort(SortField::Keyword, SortDirection::Asc);
        let names: Vec<&str> = t.rows().iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(names, vec!["apple", "Mango", "Zebra"]);
    }

    #[test]
    fn test_research_demo() {
        let results = research_demo();
        assert_eq!(results.len(), 8);
        assert!(results.windows(2).all(|w| w[0].volume >= w[1].volume));
        assert_eq!(results[4].difficulty, DifficultyBand::Low);
        assert_eq!(results[7].difficulty.to_string(), "Medium");
    }

    #[test]
    fn test_unknown_sort_field() {
        assert!(matches!(
            "clicks".parse::<SortField>(),
            Err(DatasetError::UnknownField(_))
        ));
        assert_eq!("CPC".parse::<SortField>().unwrap(), SortField::Cpc);
    }
}
