use std::fmt;

use clap::ValueEnum;

/// Canonical movie entity as mapped from an OMDb payload. Free-text fields
/// keep the raw catalog value ("N/A" marks unknown); numeric fields default
/// to zero when the catalog has nothing usable.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub cast: String,
    pub writer: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub imdb_rating: f64,
    pub imdb_votes: i64,
    pub box_office: String,
}

/// Closed whitelist of sortable columns. Queries are built from the matching
/// entity column, never from user-supplied strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortKey {
    Title,
    Year,
    Runtime,
    Genre,
    Director,
    Cast,
    Writer,
    Language,
    Country,
    Awards,
    ImdbRating,
    ImdbVotes,
    BoxOffice,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Year => "Year",
            SortKey::Runtime => "Runtime",
            SortKey::Genre => "Genre",
            SortKey::Director => "Director",
            SortKey::Cast => "Cast",
            SortKey::Writer => "Writer",
            SortKey::Language => "Language",
            SortKey::Country => "Country",
            SortKey::Awards => "Awards",
            SortKey::ImdbRating => "IMDb Rating",
            SortKey::ImdbVotes => "IMDb Votes",
            SortKey::BoxOffice => "Box Office",
        }
    }
}

/// Metrics two movies can be compared on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompareMetric {
    ImdbRating,
    Runtime,
    BoxOffice,
    Awards,
}

/// Value carried by a highscore entry or a comparison contender: either the
/// raw catalog text for the metric, a derived award count, or a rating.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    Text(String),
    Count(u32),
    Rating(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Text(text) => f.write_str(text),
            MetricValue::Count(count) => write!(f, "{count}"),
            MetricValue::Rating(rating) => write!(f, "{rating}"),
        }
    }
}

/// Best (title, value) pair for one metric. Empty title means no stored row
/// qualified for the metric.
#[derive(Clone, Debug, PartialEq)]
pub struct HighscoreEntry {
    pub title: String,
    pub value: MetricValue,
}

/// One best record per tracked metric across the whole store.
#[derive(Clone, Debug, PartialEq)]
pub struct Highscores {
    pub runtime: HighscoreEntry,
    pub box_office: HighscoreEntry,
    pub total_wins: HighscoreEntry,
    pub nominations: HighscoreEntry,
    pub oscars: HighscoreEntry,
    pub rating: HighscoreEntry,
}
