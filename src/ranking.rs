use crate::{
    awards,
    coerce::coerce_int,
    error::{AppError, AppResult},
    models::{CompareMetric, HighscoreEntry, Highscores, MetricValue},
};

/// One store row projected down to the fields the ranking scan reads. A None
/// field excludes the row from that metric only.
#[derive(Clone, Debug)]
pub struct HighscoreRow {
    pub title: String,
    pub runtime: Option<String>,
    pub box_office: Option<String>,
    pub awards: Option<String>,
    pub rating: Option<f64>,
}

/// One side of a two-way comparison: a title plus the raw value of the
/// chosen metric.
#[derive(Clone, Debug)]
pub struct Contender {
    pub title: String,
    pub value: MetricValue,
}

/// Single pass over all rows, one running best per metric. Strict `>` keeps
/// the first row encountered on ties, so iteration order decides winners.
pub fn highscores(rows: &[HighscoreRow]) -> Highscores {
    let mut runtime: (String, String, i64) = (String::new(), String::new(), 0);
    let mut box_office: (String, String, i64) = (String::new(), String::new(), 0);
    let mut total_wins: (String, u32) = (String::new(), 0);
    let mut nominations: (String, u32) = (String::new(), 0);
    let mut oscars: (String, u32) = (String::new(), 0);
    let mut rating: (String, f64) = (String::new(), 0.0);

    for row in rows {
        if let Some(text) = &row.runtime {
            let value = coerce_int(text);
            if value > runtime.2 {
                runtime = (row.title.clone(), text.clone(), value);
            }
        }
        if let Some(text) = &row.box_office {
            let value = coerce_int(text);
            if value > box_office.2 {
                box_office = (row.title.clone(), text.clone(), value);
            }
        }
        if let Some(text) = &row.awards {
            let counts = awards::extract(text);
            if counts.other_wins > total_wins.1 {
                total_wins = (row.title.clone(), counts.other_wins);
            }
            if counts.other_nominations > nominations.1 {
                nominations = (row.title.clone(), counts.other_nominations);
            }
            if counts.oscars_won > oscars.1 {
                oscars = (row.title.clone(), counts.oscars_won);
            }
        }
        if let Some(value) = row.rating {
            if value > rating.1 {
                rating = (row.title.clone(), value);
            }
        }
    }

    Highscores {
        runtime: HighscoreEntry { title: runtime.0, value: MetricValue::Text(runtime.1) },
        box_office: HighscoreEntry { title: box_office.0, value: MetricValue::Text(box_office.1) },
        total_wins: HighscoreEntry { title: total_wins.0, value: MetricValue::Count(total_wins.1) },
        nominations: HighscoreEntry {
            title: nominations.0,
            value: MetricValue::Count(nominations.1),
        },
        oscars: HighscoreEntry { title: oscars.0, value: MetricValue::Count(oscars.1) },
        rating: HighscoreEntry { title: rating.0, value: MetricValue::Rating(rating.1) },
    }
}

/// Decides the winner of a two-movie comparison. The first contender must be
/// strictly greater to win; ties go to the second.
pub fn duel(metric: CompareMetric, contenders: &[Contender]) -> AppResult<String> {
    let [first, second] = contenders else {
        return Err(AppError::Arity { expected: 2, got: contenders.len() });
    };

    if score(metric, &first.value) > score(metric, &second.value) {
        Ok(first.title.clone())
    } else {
        Ok(second.title.clone())
    }
}

fn score(metric: CompareMetric, value: &MetricValue) -> f64 {
    match value {
        MetricValue::Text(text) => match metric {
            CompareMetric::Awards => f64::from(awards::extract(text).other_wins),
            _ => coerce_int(text) as f64,
        },
        MetricValue::Count(count) => f64::from(*count),
        MetricValue::Rating(rating) => *rating,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(
        title: &str,
        runtime: &str,
        box_office: &str,
        awards: &str,
        rating: f64,
    ) -> HighscoreRow {
        HighscoreRow {
            title: title.to_string(),
            runtime: Some(runtime.to_string()),
            box_office: Some(box_office.to_string()),
            awards: Some(awards.to_string()),
            rating: Some(rating),
        }
    }

    fn fixture() -> Vec<HighscoreRow> {
        vec![
            row(
                "Alien",
                "117 min",
                "$23,844,220",
                "Won 1 Oscar. Another 16 wins & 19 nominations.",
                8.5,
            ),
            row(
                "Boyhood",
                "165 min",
                "$25,379,975",
                "Won 1 Oscar. Another 171 wins & 209 nominations.",
                7.9,
            ),
            row(
                "Forrest Gump",
                "142 min",
                "$330,000,000",
                "Won 6 Oscars. Another 40 wins & 67 nominations.",
                8.8,
            ),
            row(
                "Memento",
                "113 min",
                "$25,544,867",
                "Nominated for 2 Oscars. Another 57 wins & 59 nominations.",
                8.4,
            ),
            row(
                "The Shawshank Redemption",
                "142 min",
                "$28,767,189",
                "Nominated for 7 Oscars. Another 21 wins & 43 nominations.",
                9.3,
            ),
        ]
    }

    #[test]
    fn highscores_across_fixture() {
        let scores = highscores(&fixture());

        assert_eq!(scores.runtime.title, "Boyhood");
        assert_eq!(scores.runtime.value, MetricValue::Text("165 min".to_string()));

        assert_eq!(scores.box_office.title, "Forrest Gump");
        assert_eq!(scores.box_office.value, MetricValue::Text("$330,000,000".to_string()));

        assert_eq!(scores.total_wins.title, "Boyhood");
        assert_eq!(scores.total_wins.value, MetricValue::Count(171));

        assert_eq!(scores.nominations.title, "Boyhood");
        assert_eq!(scores.nominations.value, MetricValue::Count(209));

        assert_eq!(scores.oscars.title, "Forrest Gump");
        assert_eq!(scores.oscars.value, MetricValue::Count(6));

        assert_eq!(scores.rating.title, "The Shawshank Redemption");
        assert_eq!(scores.rating.value, MetricValue::Rating(9.3));
    }

    #[test]
    fn first_row_wins_ties() {
        let rows = vec![
            row("First", "120 min", "$10", "1 win & 1 nomination.", 7.0),
            row("Second", "120 min", "$10", "1 win & 1 nomination.", 7.0),
        ];
        let scores = highscores(&rows);
        assert_eq!(scores.runtime.title, "First");
        assert_eq!(scores.box_office.title, "First");
        assert_eq!(scores.total_wins.title, "First");
        assert_eq!(scores.nominations.title, "First");
        assert_eq!(scores.rating.title, "First");
    }

    #[test]
    fn empty_input_yields_defaults() {
        let scores = highscores(&[]);
        assert_eq!(scores.runtime.title, "");
        assert_eq!(scores.runtime.value, MetricValue::Text(String::new()));
        assert_eq!(scores.oscars.value, MetricValue::Count(0));
        assert_eq!(scores.rating.value, MetricValue::Rating(0.0));
    }

    #[test]
    fn null_fields_are_skipped_per_metric() {
        let rows = vec![
            HighscoreRow {
                title: "Bare".to_string(),
                runtime: None,
                box_office: None,
                awards: None,
                rating: None,
            },
            row("Full", "90 min", "$5", "2 wins & 3 nominations.", 6.1),
        ];
        let scores = highscores(&rows);
        assert_eq!(scores.runtime.title, "Full");
        assert_eq!(scores.rating.title, "Full");
    }

    #[test]
    fn unrated_rows_never_crown_the_rating_metric() {
        let rows = vec![HighscoreRow {
            title: "Unrated".to_string(),
            runtime: Some("100 min".to_string()),
            box_office: None,
            awards: None,
            rating: None,
        }];
        let scores = highscores(&rows);
        assert_eq!(scores.rating.title, "");
        assert_eq!(scores.runtime.title, "Unrated");
    }

    fn contender(title: &str, value: MetricValue) -> Contender {
        Contender { title: title.to_string(), value }
    }

    #[test]
    fn higher_rating_wins() {
        let winner = duel(
            CompareMetric::ImdbRating,
            &[
                contender("X", MetricValue::Rating(7.0)),
                contender("Y", MetricValue::Rating(9.0)),
            ],
        )
        .unwrap();
        assert_eq!(winner, "Y");
    }

    #[test]
    fn rating_tie_goes_to_second() {
        let winner = duel(
            CompareMetric::ImdbRating,
            &[
                contender("X", MetricValue::Rating(5.0)),
                contender("Y", MetricValue::Rating(5.0)),
            ],
        )
        .unwrap();
        assert_eq!(winner, "Y");
    }

    #[test]
    fn awards_duel_compares_other_wins() {
        let winner = duel(
            CompareMetric::Awards,
            &[
                contender(
                    "Boyhood",
                    MetricValue::Text("Won 1 Oscar. Another 171 wins & 209 nominations.".into()),
                ),
                contender(
                    "Forrest Gump",
                    MetricValue::Text("Won 6 Oscars. Another 40 wins & 67 nominations.".into()),
                ),
            ],
        )
        .unwrap();
        assert_eq!(winner, "Boyhood");
    }

    #[test]
    fn box_office_duel_coerces_currency() {
        let winner = duel(
            CompareMetric::BoxOffice,
            &[
                contender("A", MetricValue::Text("$330,000,000".into())),
                contender("B", MetricValue::Text("$23,844,220".into())),
            ],
        )
        .unwrap();
        assert_eq!(winner, "A");
    }

    #[test]
    fn duel_requires_exactly_two() {
        let one = [contender("X", MetricValue::Rating(1.0))];
        assert!(matches!(
            duel(CompareMetric::ImdbRating, &one),
            Err(AppError::Arity { expected: 2, got: 1 }),
        ));

        let three = [
            contender("X", MetricValue::Rating(1.0)),
            contender("Y", MetricValue::Rating(2.0)),
            contender("Z", MetricValue::Rating(3.0)),
        ];
        assert!(matches!(
            duel(CompareMetric::ImdbRating, &three),
            Err(AppError::Arity { expected: 2, got: 3 }),
        ));
    }
}
