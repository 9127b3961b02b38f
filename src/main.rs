mod awards;
mod coerce;
mod config;
mod db;
mod entities;
mod error;
mod mapper;
mod models;
mod omdb;
mod processor;
mod ranking;
mod report;
mod store;

use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    models::{CompareMetric, SortKey},
    omdb::OmdbClient,
};

#[derive(Parser)]
#[command(name = "cinedex", version, about = "Movie catalog backed by OMDb and a local sqlite store")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh every stored title with fresh OMDb data
    Populate,
    /// Add a movie by title and enrich it from OMDb
    Add { title: String },
    /// List stored movies sorted by a column (descending)
    List {
        #[arg(short, long, value_enum, default_value = "title")]
        sort_by: SortKey,
    },
    /// Filter stored movies
    Filter {
        #[command(subcommand)]
        filter: FilterCommand,
    },
    /// Show the best stored movie per metric
    Highscores,
    /// Compare two stored movies on one metric
    Compare {
        #[arg(value_enum)]
        metric: CompareMetric,
        first: String,
        second: String,
    },
}

#[derive(Subcommand)]
enum FilterCommand {
    /// Movies by director (substring match)
    Director { name: String },
    /// Movies featuring an actor
    Actor { name: String },
    /// Movies available in a language
    Language { language: String },
    /// Movies nominated for an Oscar
    Nominated,
    /// Movies that turned over 80% of their nominations into wins
    Awarded,
    /// Movies that earned over $100,000,000
    Earned,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,cinedex=debug,sqlx=warn".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("cinedex/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let omdb = OmdbClient::new(http, config.omdb_api_key.clone(), config.omdb_base_url.clone(), config.omdb_rps);

    match cli.command {
        Command::Populate => {
            let refreshed = processor::populate(&db, &omdb).await?;
            println!("{} refreshed {refreshed} movies from OMDb", "✓".green());
        },
        Command::Add { title } => {
            processor::add_movie(&db, &omdb, &title).await?;
            println!("{} added {title}", "✓".green());
        },
        Command::List { sort_by } => {
            let rows = store::all_sorted_by(&db, sort_by).await?;
            println!("{}", report::pairs_table("Title", sort_by.label(), &rows));
        },
        Command::Filter { filter } => run_filter(&db, filter).await?,
        Command::Highscores => {
            let rows = store::highscore_rows(&db).await?;
            let scores = ranking::highscores(&rows);
            println!("{}", report::highscores_table(&scores));
        },
        Command::Compare { metric, first, second } => {
            let contenders = store::fetch_pair(&db, metric, &first, &second).await?;
            let winner = ranking::duel(metric, &contenders)?;
            println!("{winner}");
        },
    }

    Ok(())
}

async fn run_filter(db: &DatabaseConnection, filter: FilterCommand) -> anyhow::Result<()> {
    match filter {
        FilterCommand::Director { name } => {
            let rows = store::directed_by(db, &name).await?;
            println!("{}", report::pairs_table("Title", "Director", &rows));
        },
        FilterCommand::Actor { name } => {
            let rows = store::featuring_actor(db, &name).await?;
            println!("{}", report::pairs_table("Title", "Cast", &rows));
        },
        FilterCommand::Language { language } => {
            let rows = store::in_language(db, &language).await?;
            println!("{}", report::pairs_table("Title", "Language", &rows));
        },
        FilterCommand::Nominated => {
            let rows = store::oscar_nominated(db).await?;
            println!("{}", report::pairs_table("Title", "Awards", &rows));
        },
        FilterCommand::Awarded => {
            let rows = store::heavily_awarded(db).await?;
            println!("{}", report::pairs_table("Title", "Awards", &rows));
        },
        FilterCommand::Earned => {
            let rows = store::earned_over(db, 100_000_000).await?;
            println!("{}", report::pairs_table("Title", "Box Office", &rows));
        },
    }
    Ok(())
}
