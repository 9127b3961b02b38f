use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, warn};

use crate::{
    error::{AppError, AppResult},
    mapper,
    omdb::OmdbClient,
    store,
};

/// Refreshes every stored title with fresh catalog data. Per-title failures
/// are logged and skipped so one bad title cannot abort the batch.
pub async fn populate(db: &DatabaseConnection, omdb: &OmdbClient) -> AppResult<usize> {
    let titles = store::all_titles(db).await?;
    info!(total = titles.len(), "refreshing stored titles from OMDb");

    let mut refreshed = 0;
    for title in titles {
        match refresh_title(db, omdb, &title).await {
            Ok(()) => {
                debug!(title = %title, "refreshed movie");
                refreshed += 1;
            },
            Err(err) => warn!(title = %title, error = %err, "failed to refresh movie"),
        }
    }

    Ok(refreshed)
}

async fn refresh_title(db: &DatabaseConnection, omdb: &OmdbClient, title: &str) -> AppResult<()> {
    let record = omdb.fetch_title(title).await?;
    let movie = mapper::movie_from_record(record)?;
    if !store::update_movie(db, &movie).await? {
        warn!(title = %title, canonical = %movie.title, "catalog title does not match stored row");
    }
    Ok(())
}

/// Adds a title and enriches it from the catalog as one transactional unit.
/// The speculative insert is rolled back when enrichment fails, so no
/// half-populated row survives.
pub async fn add_movie(db: &DatabaseConnection, omdb: &OmdbClient, title: &str) -> AppResult<()> {
    let txn = db.begin().await?;
    store::insert_title(&txn, title).await?;

    let enriched = async {
        let record = omdb.fetch_title(title).await?;
        let movie = mapper::movie_from_record(record)?;
        store::update_movie(&txn, &movie).await?;
        Ok::<_, AppError>(())
    }
    .await;

    match enriched {
        Ok(()) => {
            txn.commit().await?;
            debug!(title = %title, "added and enriched movie");
            Ok(())
        },
        Err(err) => {
            warn!(title = %title, error = %err, "enrichment failed, rolling back insert");
            txn.rollback().await?;
            Err(err)
        },
    }
}
