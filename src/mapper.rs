use crate::{
    coerce::coerce_int,
    error::{AppError, AppResult},
    models::Movie,
    omdb::OmdbRecord,
};

/// Converts a raw catalog record into the canonical entity. Title is the
/// identity key and the only required field; everything else degrades to
/// "N/A" or zero. Fails before constructing anything, so a mapping error
/// never leaves a partial entity behind.
pub fn movie_from_record(record: OmdbRecord) -> AppResult<Movie> {
    let title = record.title.filter(|t| !t.is_empty()).ok_or(AppError::MissingField("Title"))?;

    Ok(Movie {
        title,
        year: record.year.as_deref().map(coerce_int).unwrap_or(0) as i32,
        runtime: or_unknown(record.runtime),
        genre: or_unknown(record.genre),
        director: or_unknown(record.director),
        cast: or_unknown(record.actors),
        writer: or_unknown(record.writer),
        language: or_unknown(record.language),
        country: or_unknown(record.country),
        awards: or_unknown(record.awards),
        imdb_rating: record.imdb_rating.and_then(|r| r.parse().ok()).unwrap_or(0.0),
        imdb_votes: record.imdb_votes.as_deref().map(coerce_int).unwrap_or(0),
        box_office: or_unknown(record.box_office),
    })
}

fn or_unknown(field: Option<String>) -> String {
    field.unwrap_or_else(|| "N/A".to_string())
}
