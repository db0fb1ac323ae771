use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use catalog::{Course, CourseStore, Enrollment, InMemoryCatalog, RecommendationItem};
use rankers::PopularityRanker;
use recommender::HybridRecommender;

/// CourseRecs - offline harness for the course recommendation engine
#[derive(Parser)]
#[command(name = "course-recs")]
#[command(about = "Hybrid course recommendations over a JSON catalog", long_about = None)]
struct Cli {
    /// Path to a JSON catalog file with courses and enrollments
    #[arg(short, long, default_value = "data/catalog.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get course recommendations for a user
    Recommend {
        /// User ID to get recommendations for
        #[arg(long)]
        user_id: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Find courses similar to a given course
    Similar {
        /// Course ID to find neighbors for
        #[arg(long)]
        course_id: String,

        /// Number of similar courses to return
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Show the most popular courses in the catalog
    Popular {
        /// Number of courses to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

/// On-disk catalog fixture format.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    courses: Vec<Course>,
    #[serde(default)]
    enrollments: Vec<Enrollment>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog fixture
    println!("Loading catalog from {}...", cli.data_file.display());
    let start = Instant::now();
    let catalog = Arc::new(
        load_catalog(&cli.data_file)
            .with_context(|| format!("Failed to load catalog from {}", cli.data_file.display()))?,
    );
    let (courses, enrollments) = catalog.counts();
    println!(
        "{} Loaded {} courses and {} enrollments in {:?}",
        "✓".green(),
        courses,
        enrollments,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { user_id, limit } => {
            handle_recommend(catalog, &user_id, limit).await?
        }
        Commands::Similar { course_id, limit } => {
            handle_similar(catalog, &course_id, limit).await?
        }
        Commands::Popular { limit } => handle_popular(catalog, limit).await?,
    }

    Ok(())
}

/// Read and index the JSON catalog fixture
fn load_catalog(path: &PathBuf) -> Result<InMemoryCatalog> {
    let raw = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&raw).context("Failed to parse catalog JSON")?;

    let mut catalog = InMemoryCatalog::new();
    for course in file.courses {
        catalog.insert_course(course);
    }
    for enrollment in file.enrollments {
        catalog.insert_enrollment(enrollment);
    }
    Ok(catalog)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<InMemoryCatalog>,
    user_id: &str,
    limit: usize,
) -> Result<()> {
    let recommender = HybridRecommender::new(catalog.clone(), catalog);

    let start = Instant::now();
    let recommendations = recommender.recommend(&user_id.to_string(), limit).await?;
    println!(
        "{} Computed {} recommendations in {:?}",
        "✓".green(),
        recommendations.len(),
        start.elapsed()
    );

    let header = format!("Recommendations for user {}:", user_id);
    println!("{}", header.as_str().bold().blue());
    print_items(&recommendations);
    Ok(())
}

/// Handle the 'similar' command
async fn handle_similar(
    catalog: Arc<InMemoryCatalog>,
    course_id: &str,
    limit: usize,
) -> Result<()> {
    let recommender = HybridRecommender::new(catalog.clone(), catalog);

    let similar = recommender.similar(course_id, limit).await?;
    if similar.is_empty() {
        println!(
            "{} No similar courses found for {} (unknown id or empty catalog)",
            "!".yellow(),
            course_id
        );
        return Ok(());
    }

    let header = format!("Courses similar to {}:", course_id);
    println!("{}", header.as_str().bold().blue());
    print_items(&similar);
    Ok(())
}

/// Handle the 'popular' command
async fn handle_popular(catalog: Arc<InMemoryCatalog>, limit: usize) -> Result<()> {
    let courses = catalog.fetch_published_courses().await?;
    let top: Vec<RecommendationItem> = PopularityRanker::new()
        .top(&courses, limit)
        .into_iter()
        .map(Into::into)
        .collect();

    println!("{}", "Most popular courses:".bold().blue());
    print_items(&top);
    Ok(())
}

/// Helper function to format and print ranked items
fn print_items(items: &[RecommendationItem]) {
    for (rank, item) in items.iter().enumerate() {
        let tag = match item.reason.as_deref() {
            Some(reason) => format!(" [{}]", reason.cyan()),
            None => String::new(),
        };
        println!(
            "{}. {} - Score: {:.3}{}",
            (rank + 1).to_string().green(),
            item.course_id,
            item.similarity_score,
            tag
        );
    }
}
