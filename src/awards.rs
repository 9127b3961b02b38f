use std::sync::LazyLock;

use regex::Regex;

static OSCAR_WINS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Won (\d+) Oscars?").unwrap());
static OSCAR_NOMINATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Nominated for (\d+) Oscars?").unwrap());
static OTHER_COUNTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) wins? & (\d+) nominations?").unwrap());

/// Structured counts pulled out of an OMDb awards blurb such as
/// "Won 1 Oscar. Another 16 wins & 19 nominations.". Derived on every read,
/// never persisted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AwardMetrics {
    pub oscars_won: u32,
    pub oscar_nominations: u32,
    pub other_wins: u32,
    pub other_nominations: u32,
}

/// Parses an awards blurb into counts. Every clause is optional; anything
/// that does not match contributes a zero, so arbitrary text is accepted.
pub fn extract(text: &str) -> AwardMetrics {
    let mut metrics = AwardMetrics::default();

    if let Some(caps) = OSCAR_WINS.captures(text) {
        metrics.oscars_won = parse_count(caps.get(1));
    }
    if let Some(caps) = OSCAR_NOMINATIONS.captures(text) {
        metrics.oscar_nominations = parse_count(caps.get(1));
    }
    if let Some(caps) = OTHER_COUNTS.captures(text) {
        metrics.other_wins = parse_count(caps.get(1));
        metrics.other_nominations = parse_count(caps.get(2));
    }

    metrics
}

fn parse_count(group: Option<regex::Match<'_>>) -> u32 {
    group.and_then(|m| m.as_str().parse().ok()).unwrap_or(0)
}
