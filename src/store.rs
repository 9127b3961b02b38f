use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    sea_query::OnConflict,
};

use crate::{
    awards,
    coerce::coerce_int,
    entities::movie,
    error::{AppError, AppResult},
    models::{CompareMetric, MetricValue, Movie, SortKey},
    ranking::{Contender, HighscoreRow},
};

/// Registers a bare title. Re-inserting an existing title is a no-op; the
/// return value reports whether a row was actually added.
pub async fn insert_title(conn: &impl ConnectionTrait, title: &str) -> AppResult<bool> {
    let model = movie::ActiveModel {
        title: Set(title.to_string()),
        updated_at: Set(now_sec()),
        ..Default::default()
    };

    let insert = movie::Entity::insert(model)
        .on_conflict(OnConflict::column(movie::Column::Title).do_nothing().to_owned())
        .exec(conn)
        .await;

    match insert {
        Ok(_) => Ok(true),
        Err(sea_orm::DbErr::RecordNotInserted) => Ok(false),
        Err(err) => Err(err.into()),
    }
}

/// Fills in catalog data for an already-registered title. Never inserts: a
/// title that is not in the store leaves zero rows affected.
pub async fn update_movie(conn: &impl ConnectionTrait, movie: &Movie) -> AppResult<bool> {
    let model = movie::ActiveModel {
        year: Set(Some(movie.year)),
        runtime: Set(Some(movie.runtime.clone())),
        genre: Set(Some(movie.genre.clone())),
        director: Set(Some(movie.director.clone())),
        cast: Set(Some(movie.cast.clone())),
        writer: Set(Some(movie.writer.clone())),
        language: Set(Some(movie.language.clone())),
        country: Set(Some(movie.country.clone())),
        awards: Set(Some(movie.awards.clone())),
        imdb_rating: Set(Some(movie.imdb_rating)),
        imdb_votes: Set(Some(movie.imdb_votes)),
        box_office: Set(Some(movie.box_office.clone())),
        updated_at: Set(now_sec()),
        ..Default::default()
    };

    let result = movie::Entity::update_many()
        .set(model)
        .filter(movie::Column::Title.eq(movie.title.as_str()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}

pub async fn all_titles(conn: &impl ConnectionTrait) -> AppResult<Vec<String>> {
    Ok(movie::Entity::find()
        .select_only()
        .column(movie::Column::Title)
        .into_tuple::<String>()
        .all(conn)
        .await?)
}

pub async fn get_by_title(
    conn: &impl ConnectionTrait,
    title: &str,
) -> AppResult<Option<movie::Model>> {
    Ok(movie::Entity::find_by_id(title.to_string()).one(conn).await?)
}

/// All movies as (title, column value) rows, sorted descending on the chosen
/// column. Runtime and box office order by the coerced number at the
/// application layer; every other key orders in SQL on the whitelisted
/// entity column.
pub async fn all_sorted_by(
    conn: &impl ConnectionTrait,
    key: SortKey,
) -> AppResult<Vec<(String, String)>> {
    let models = match sort_column(key) {
        Some(column) => movie::Entity::find().order_by_desc(column).all(conn).await?,
        None => {
            let mut models = movie::Entity::find().all(conn).await?;
            models.sort_by_key(|m| {
                let raw = match key {
                    SortKey::Runtime => m.runtime.as_deref(),
                    _ => m.box_office.as_deref(),
                };
                std::cmp::Reverse(raw.map(coerce_int).unwrap_or(0))
            });
            models
        },
    };

    Ok(models
        .into_iter()
        .map(|m| {
            let value = display_field(&m, key);
            (m.title, value)
        })
        .collect())
}

fn sort_column(key: SortKey) -> Option<movie::Column> {
    match key {
        SortKey::Title => Some(movie::Column::Title),
        SortKey::Year => Some(movie::Column::Year),
        SortKey::Genre => Some(movie::Column::Genre),
        SortKey::Director => Some(movie::Column::Director),
        SortKey::Cast => Some(movie::Column::Cast),
        SortKey::Writer => Some(movie::Column::Writer),
        SortKey::Language => Some(movie::Column::Language),
        SortKey::Country => Some(movie::Column::Country),
        SortKey::Awards => Some(movie::Column::Awards),
        SortKey::ImdbRating => Some(movie::Column::ImdbRating),
        SortKey::ImdbVotes => Some(movie::Column::ImdbVotes),
        SortKey::Runtime | SortKey::BoxOffice => None,
    }
}

fn display_field(model: &movie::Model, key: SortKey) -> String {
    let text = |field: &Option<String>| field.clone().unwrap_or_else(|| "N/A".to_string());
    match key {
        SortKey::Title => model.title.clone(),
        SortKey::Year => model.year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string()),
        SortKey::Runtime => text(&model.runtime),
        SortKey::Genre => text(&model.genre),
        SortKey::Director => text(&model.director),
        SortKey::Cast => text(&model.cast),
        SortKey::Writer => text(&model.writer),
        SortKey::Language => text(&model.language),
        SortKey::Country => text(&model.country),
        SortKey::Awards => text(&model.awards),
        SortKey::ImdbRating => {
            model.imdb_rating.map(|r| r.to_string()).unwrap_or_else(|| "N/A".to_string())
        },
        SortKey::ImdbVotes => {
            model.imdb_votes.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
        },
        SortKey::BoxOffice => text(&model.box_office),
    }
}

pub async fn directed_by(
    conn: &impl ConnectionTrait,
    name: &str,
) -> AppResult<Vec<(String, String)>> {
    let models = movie::Entity::find()
        .filter(movie::Column::Director.like(format!("%{name}%")))
        .all(conn)
        .await?;
    Ok(models.into_iter().map(|m| (m.title.clone(), display_field(&m, SortKey::Director))).collect())
}

pub async fn featuring_actor(
    conn: &impl ConnectionTrait,
    name: &str,
) -> AppResult<Vec<(String, String)>> {
    let models = movie::Entity::find()
        .filter(movie::Column::Cast.like(format!("%{name}%")))
        .all(conn)
        .await?;
    Ok(models.into_iter().map(|m| (m.title.clone(), display_field(&m, SortKey::Cast))).collect())
}

pub async fn in_language(
    conn: &impl ConnectionTrait,
    language: &str,
) -> AppResult<Vec<(String, String)>> {
    let models = movie::Entity::find()
        .filter(movie::Column::Language.like(format!("%{language}%")))
        .all(conn)
        .await?;
    Ok(models
        .into_iter()
        .map(|m| (m.title.clone(), display_field(&m, SortKey::Language)))
        .collect())
}

pub async fn oscar_nominated(conn: &impl ConnectionTrait) -> AppResult<Vec<(String, String)>> {
    let models = movie::Entity::find()
        .filter(movie::Column::Awards.like("Nominated%"))
        .all(conn)
        .await?;
    Ok(models.into_iter().map(|m| (m.title.clone(), display_field(&m, SortKey::Awards))).collect())
}

/// Movies that converted more than 80% of their nominations into wins.
/// The ratio is derived from the awards text in the application layer; rows
/// without nominations are skipped.
pub async fn heavily_awarded(conn: &impl ConnectionTrait) -> AppResult<Vec<(String, String)>> {
    let rows: Vec<(String, Option<String>)> = movie::Entity::find()
        .select_only()
        .column(movie::Column::Title)
        .column(movie::Column::Awards)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(title, awards_text)| {
            let text = awards_text?;
            let counts = awards::extract(&text);
            if counts.other_nominations == 0 {
                return None;
            }
            let ratio = f64::from(counts.other_wins) / f64::from(counts.other_nominations);
            (ratio > 0.8).then_some((title, text))
        })
        .collect())
}

/// Movies whose coerced box office exceeds the threshold.
pub async fn earned_over(
    conn: &impl ConnectionTrait,
    threshold: i64,
) -> AppResult<Vec<(String, String)>> {
    let rows: Vec<(String, Option<String>)> = movie::Entity::find()
        .select_only()
        .column(movie::Column::Title)
        .column(movie::Column::BoxOffice)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(title, box_office)| {
            let text = box_office?;
            (coerce_int(&text) > threshold).then_some((title, text))
        })
        .collect())
}

pub async fn highscore_rows(conn: &impl ConnectionTrait) -> AppResult<Vec<HighscoreRow>> {
    let models = movie::Entity::find().all(conn).await?;
    Ok(models
        .into_iter()
        .map(|m| HighscoreRow {
            title: m.title,
            runtime: m.runtime,
            box_office: m.box_office,
            awards: m.awards,
            rating: m.imdb_rating,
        })
        .collect())
}

/// Fetches the two named movies in argument order, shaped for a duel on the
/// chosen metric.
pub async fn fetch_pair(
    conn: &impl ConnectionTrait,
    metric: CompareMetric,
    first: &str,
    second: &str,
) -> AppResult<Vec<Contender>> {
    let mut contenders = Vec::with_capacity(2);
    for title in [first, second] {
        let model = get_by_title(conn, title)
            .await?
            .ok_or_else(|| AppError::NotFound(title.to_string()))?;
        contenders.push(contender_for(metric, model));
    }
    Ok(contenders)
}

fn contender_for(metric: CompareMetric, model: movie::Model) -> Contender {
    let value = match metric {
        CompareMetric::ImdbRating => MetricValue::Rating(model.imdb_rating.unwrap_or(0.0)),
        CompareMetric::Runtime => MetricValue::Text(model.runtime.unwrap_or_default()),
        CompareMetric::BoxOffice => MetricValue::Text(model.box_office.unwrap_or_default()),
        CompareMetric::Awards => MetricValue::Text(model.awards.unwrap_or_default()),
    };
    Contender { title: model.title, value }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
