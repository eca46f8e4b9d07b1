//! leadboard - Sales and leads analytics dashboard

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use leadboard_core::models::{SourceMetric, TimeRange};

#[derive(Parser)]
#[command(
    name = "leadboard",
    version,
    about = "Sales and leads analytics dashboard",
    long_about = "Sales and leads analytics dashboard.\n\
                  \n\
                  Presents funnel, lead-source and leads-tracking figures from the\n\
                  embedded sample datasets, either in the browser (Leptos frontend)\n\
                  or on the terminal.\n\
                  \n\
                  Examples:\n\
                    leadboard                        # Serve the dashboard (default)\n\
                    leadboard web --port 8080        # Custom port\n\
                    leadboard web --open             # Open the browser once serving\n\
                    leadboard stats                  # Print dataset summaries\n\
                    leadboard stats --range 1y       # Yearly tracking dataset\n\
                    leadboard stats --json           # Machine-readable output\n\
                  \n\
                  Environment Variables:\n\
                    RUST_LOG                         # Log filter (default: info)\n\
                    LEADBOARD_NO_COLOR               # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "LEADBOARD_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web dashboard (default)
    Web {
        /// Port for the web server
        #[arg(long, default_value = "4173")]
        port: u16,
        /// Open the dashboard in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Print dataset summaries to the terminal and exit
    Stats {
        /// Tracking range: 6m, 1y, all
        #[arg(long, short = 'r', default_value = "6m")]
        range: String,
        /// Source metric: leadsCame, leadsConverted, totalDeals
        #[arg(long, short = 'm', default_value = "leadsConverted")]
        metric: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Web {
        port: 4173,
        open: false,
    }) {
        Mode::Web { port, open } => run_web(port, open).await,
        Mode::Stats {
            range,
            metric,
            json,
        } => run_stats(&range, &metric, json, no_color),
    }
}

async fn run_web(port: u16, open_browser: bool) -> Result<()> {
    if open_browser {
        let url = format!("http://127.0.0.1:{port}");
        tokio::spawn(async move {
            // give the listener a moment to bind
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        });
    }

    leadboard_web::run(port).await
}

fn run_stats(range: &str, metric: &str, json: bool, no_color: bool) -> Result<()> {
    // strict tag parsing: a typo on the CLI is an error, unlike the
    // widget selectors which fall back to defaults
    let range: TimeRange = range.parse()?;
    let metric: SourceMetric = metric.parse()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cli::stats_json(range, metric))?
        );
        return Ok(());
    }

    println!("leadboard - Dataset Summary");
    println!("===========================");
    println!();
    println!("Funnel");
    println!("{}", cli::funnel_table(no_color));
    println!();
    println!("Sources ({})", metric.label());
    println!("{}", cli::sources_table(metric, no_color));
    println!();
    println!("Leads tracking ({})", range.label());
    println!("{}", cli::tracking_table(range));

    Ok(())
}
