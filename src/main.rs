use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use goodfirst::github::DEFAULT_API_URL;
use goodfirst::interactive_ratatui::constants::QUERY_DEBOUNCE_MS;
use goodfirst::{
    ClientConfig, Filter, GitHubClient, InteractiveOptions, InteractiveSearch, PrintReport,
    collect_pages, format_issue, format_summary, logging,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "goodfirst",
    version,
    about = "Browse beginner-friendly GitHub issues from the terminal",
    long_about = None
)]
struct Cli {
    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GOODFIRST_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Only show issues in this language
    #[arg(short, long)]
    language: Option<String>,

    /// Free-text search
    #[arg(short, long)]
    query: Option<String>,

    /// Delay before a typed query is searched
    #[arg(long, default_value_t = QUERY_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Skip repository star/language lookups
    #[arg(long)]
    no_enrich: bool,

    /// Print results and exit instead of opening the browser view
    #[arg(short, long)]
    print: bool,

    /// Number of pages to fetch in print mode
    #[arg(long, default_value = "1", requires = "print")]
    pages: u32,

    /// Output format for print mode
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log file location
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "goodfirst", &mut io::stdout());
        return Ok(());
    }

    let log_file = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init_tracing(&log_file, cli.verbose)?;

    let client = GitHubClient::new(ClientConfig {
        api_url: cli.api_url.clone(),
        token: cli.token.clone(),
        enrich: !cli.no_enrich,
        ..ClientConfig::default()
    })?;
    let backend = Arc::new(client);
    let filter = Filter::new(cli.language.clone(), cli.query.clone());

    if !cli.print {
        let options = InteractiveOptions {
            filter,
            debounce: Duration::from_millis(cli.debounce_ms),
        };
        let mut interactive = InteractiveSearch::new(backend, options);
        return interactive.run();
    }

    let report = collect_pages(backend, filter, cli.pages, cli.pages > 1)?;
    print_report(&report, cli.format, !cli.no_color, cli.verbose)
}

fn print_report(
    report: &PrintReport,
    format: OutputFormat,
    use_color: bool,
    verbose: bool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if report.items.is_empty() {
                writeln!(handle, "No issues found.")?;
            } else {
                let now = Utc::now();
                for issue in &report.items {
                    writeln!(handle, "{}\n", format_issue(issue, use_color, now))?;
                }
                eprintln!("{}", format_summary(report.items.len(), report.total_count));
            }
            if verbose {
                eprintln!(
                    "Fetched {} page(s) in {}ms",
                    report.pages_loaded,
                    report.duration.as_millis()
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "items": report.items,
                "total_count": report.total_count,
                "returned_count": report.items.len(),
                "pages_loaded": report.pages_loaded,
                "duration_ms": report.duration.as_millis(),
            });
            serde_json::to_writer_pretty(&mut handle, &output)
                .context("Failed to write JSON output")?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            for issue in &report.items {
                serde_json::to_writer(&mut handle, issue)?;
                writeln!(handle)?;
            }
            // Metadata goes last
            let metadata = serde_json::json!({
                "_metadata": {
                    "total_count": report.total_count,
                    "returned_count": report.items.len(),
                    "pages_loaded": report.pages_loaded,
                    "duration_ms": report.duration.as_millis(),
                }
            });
            serde_json::to_writer(&mut handle, &metadata)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
