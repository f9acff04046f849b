use admitmatch::api::{build_router, AppState};
use admitmatch::config::AppConfig;
use admitmatch::engine::catalog::seed_catalog;
use admitmatch::engine::domain::StudentProfile;
use admitmatch::engine::{evaluate_profile, Catalog, MatchEngine, MatchReport, ProfileInsight};
use admitmatch::error::AppError;
use admitmatch::telemetry;
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Admission Match Engine",
    about = "Score student profiles and match them against the institution catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile and print its strengths and growth opportunities
    Insights(InsightsArgs),
    /// Match a profile against the catalog and print the bucketed report
    Match(MatchArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Catalog JSON file (defaults to APP_CATALOG_PATH, then the seed catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InsightsArgs {
    /// Student profile JSON file
    #[arg(long)]
    profile: PathBuf,
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Student profile JSON file
    #[arg(long)]
    profile: PathBuf,
    /// Catalog JSON file (defaults to the seed catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Emit the full report as JSON instead of the rendered summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Insights(args) => run_insights(args),
        Command::Match(args) => run_match(args),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, AppError> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            Ok(Catalog::from_json_reader(file)?)
        }
        None => Ok(seed_catalog()?),
    }
}

fn load_profile(path: &Path) -> Result<StudentProfile, AppError> {
    let file = File::open(path)?;
    serde_json::from_reader(file).map_err(AppError::Profile)
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.catalog.path = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(config.catalog.path.as_deref())?;
    info!(institutions = catalog.len(), "catalog loaded");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        engine: Arc::new(MatchEngine::new(catalog)),
    };

    let app = build_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "admission match engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_insights(args: InsightsArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let insight = evaluate_profile(&profile);
    render_insights(&profile, &insight);
    Ok(())
}

fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let profile = load_profile(&args.profile)?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let engine = MatchEngine::new(catalog);
    let report = engine.match_institutions(&profile);

    if args.json {
        let rendered = serde_json::to_string_pretty(&report).map_err(AppError::Profile)?;
        println!("{rendered}");
    } else {
        render_match_report(&profile, &report);
    }

    Ok(())
}

fn render_insights(profile: &StudentProfile, insight: &ProfileInsight) {
    println!("Profile insights for {}", profile.name);
    println!(
        "Strength score: {} (academic {}, activities {}, character {}, achievements {})",
        insight.strength_score,
        insight.sub_scores.academic,
        insight.sub_scores.activity,
        insight.sub_scores.character,
        insight.sub_scores.achievement
    );

    if insight.strengths.is_empty() {
        println!("\nStrengths: none identified yet");
    } else {
        println!("\nStrengths");
        for strength in &insight.strengths {
            println!("- {}: {}", strength.category, strength.detail);
        }
    }

    if insight.growth_opportunities.is_empty() {
        println!("\nGrowth opportunities: none");
    } else {
        println!("\nGrowth opportunities");
        for opportunity in &insight.growth_opportunities {
            println!("- {}: {}", opportunity.category, opportunity.suggestion);
        }
    }
}

fn render_match_report(profile: &StudentProfile, report: &MatchReport) {
    let summary = &report.summary;

    println!("Institution matches for {}", profile.name);
    println!(
        "{} institutions evaluated: {} reach, {} target, {} safety",
        summary.total_matches, summary.reach_count, summary.target_count, summary.safety_count
    );

    for (label, bucket) in [
        ("Reach", &report.reach),
        ("Target", &report.target),
        ("Safety", &report.safety),
    ] {
        if bucket.is_empty() {
            continue;
        }
        println!("\n{label}");
        for entry in bucket {
            println!(
                "- {} ({}): match {}, admission probability {}%, net cost ₹{}",
                entry.name,
                entry.tier.label(),
                entry.match_score,
                entry.admission_probability,
                entry.cost.net_cost
            );
            for reason in &entry.fit_reasons {
                println!("    {reason}");
            }
        }
    }

    if summary.total_awards == 0 {
        println!("\nScholarships: none matched");
    } else {
        println!(
            "\nScholarships: {} matched (estimated values are annual)",
            summary.total_awards
        );
        for lead in report
            .awards_summary
            .merit
            .iter()
            .chain(report.awards_summary.need.iter())
        {
            println!(
                "- {} at {}: ₹{} ({}% likelihood)",
                lead.award, lead.institution, lead.estimated_value, lead.likelihood
            );
        }
    }

    if !summary.best_value.is_empty() {
        println!("\nBest value");
        for entry in &summary.best_value {
            println!(
                "- {}: match {} at net cost ₹{} (value {})",
                entry.name, entry.match_score, entry.net_cost, entry.value_score
            );
        }
    }

    if !summary.top_recommendations.is_empty() {
        println!("\nRecommendations");
        for recommendation in &summary.top_recommendations {
            println!(
                "- {} [{}]: {}",
                recommendation.name,
                recommendation.category.label(),
                recommendation.reason
            );
        }
    }

    println!("\nAverage net cost across the catalog: ₹{}", summary.average_net_cost);
}
