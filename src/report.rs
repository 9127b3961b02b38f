use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::models::Highscores;

pub fn pairs_table(title_header: &str, value_header: &str, rows: &[(String, String)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![title_header, value_header]);
    for (title, value) in rows {
        table.add_row(vec![title.as_str(), value.as_str()]);
    }
    table
}

/// Fixed-order highscore report: runtime, box office, awards, nominations,
/// oscars, rating.
pub fn highscores_table(scores: &Highscores) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Title", "Value"]);

    for (metric, entry) in [
        ("Runtime", &scores.runtime),
        ("Box Office", &scores.box_office),
        ("Awards", &scores.total_wins),
        ("Nominations", &scores.nominations),
        ("Oscars", &scores.oscars),
        ("IMDb Rating", &scores.rating),
    ] {
        table.add_row(vec![metric.to_string(), entry.title.clone(), entry.value.to_string()]);
    }

    table
}
