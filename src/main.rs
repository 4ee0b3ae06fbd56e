use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use trash_console::client::http::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use trash_console::console::constants::DEFAULT_IMPORT_SOURCE;
use trash_console::console::domain::request::DEFAULT_LIMIT;
use trash_console::logging::{self, LogTarget};
use trash_console::output::{
    format_health, format_record, format_record_detail, format_stats,
};
use trash_console::{
    ConsoleConfig, FilterBuilder, FilterForm, HttpBackend, InteractiveConsole, Record,
    SearchBackend, SearchMode, compose_request, dedup_records,
};

#[derive(Parser)]
#[command(
    name = "trash-console",
    version,
    about = "Search, filter and curate indexed social-media posts",
    long_about = None
)]
#[command(group(
    ArgGroup::new("action")
        .args(["similar", "show", "delete", "import", "stats", "health"])
))]
struct Cli {
    /// Search query; runs one search and prints the results
    query: Option<String>,

    /// Base URL of the search service
    #[arg(long, env = "TRASH_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Maximum number of results to request (1-100 suggested)
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    limit: i64,

    /// Let the service pick the result count
    #[arg(long, conflicts_with = "limit")]
    service_limit: bool,

    /// How the query is interpreted
    #[arg(short = 't', long, value_enum, default_value = "text")]
    search_type: SearchTypeArg,

    /// Filter by post type (photo, video, link, status)
    #[arg(long = "type")]
    status_type: Option<String>,

    /// Keep posts with at least this many reactions
    #[arg(long)]
    min_reactions: Option<String>,

    /// Keep posts published on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<String>,

    /// Keep posts published on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<String>,

    /// List posts similar to the one with this id
    #[arg(long, value_name = "ID")]
    similar: Option<String>,

    /// Show one post in full
    #[arg(long, value_name = "ID")]
    show: Option<String>,

    /// Delete one post
    #[arg(long, value_name = "ID")]
    delete: Option<String>,

    /// Import the source file named by --import-file
    #[arg(long)]
    import: bool,

    /// Source file the service imports from
    #[arg(long, default_value = DEFAULT_IMPORT_SOURCE)]
    import_file: String,

    /// Print collection statistics
    #[arg(long)]
    stats: bool,

    /// Check that the service and its index are reachable
    #[arg(long)]
    health: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show full post text without truncation
    #[arg(long)]
    full_text: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log file for the interactive console
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Open the interactive console (default when no query or action is given)
    #[arg(short = 'i', long)]
    interactive: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SearchTypeArg {
    Text,
    Phrase,
    Boolean,
}

impl From<SearchTypeArg> for SearchMode {
    fn from(arg: SearchTypeArg) -> Self {
        match arg {
            SearchTypeArg::Text => SearchMode::Text,
            SearchTypeArg::Phrase => SearchMode::Phrase,
            SearchTypeArg::Boolean => SearchMode::Boolean,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

impl Cli {
    fn limit(&self) -> Option<i64> {
        if self.service_limit {
            None
        } else {
            Some(self.limit)
        }
    }

    fn has_action(&self) -> bool {
        self.query.is_some()
            || self.similar.is_some()
            || self.show.is_some()
            || self.delete.is_some()
            || self.import
            || self.stats
            || self.health
    }

    fn filter_form(&self) -> FilterForm {
        FilterForm {
            status_type: self.status_type.clone().unwrap_or_default(),
            min_reactions: self.min_reactions.clone().unwrap_or_default(),
            date_from: self.from.clone().unwrap_or_default(),
            date_to: self.to.clone().unwrap_or_default(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.interactive || !cli.has_action();

    let log_target = if interactive {
        LogTarget::File(cli.log_file.clone().unwrap_or_else(logging::default_log_path))
    } else {
        LogTarget::Stderr
    };
    logging::init_tracing(log_target, cli.log_json, cli.verbose)?;

    let backend = HttpBackend::new(&cli.api_base, Duration::from_secs(cli.timeout_secs))
        .context("Failed to create service client")?;
    debug!(api_base = %cli.api_base, "service client ready");

    if interactive {
        let config = ConsoleConfig {
            limit: cli.limit(),
            import_source: cli.import_file.clone(),
            full_text: cli.full_text,
        };
        let mut console = InteractiveConsole::new(Arc::new(backend), config);
        return console.run();
    }

    run_one_shot(&cli, &backend)
}

fn run_one_shot(cli: &Cli, backend: &dyn SearchBackend) -> Result<()> {
    let use_color = !cli.no_color;
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Some(id) = &cli.show {
        let record = backend.get_record(id).context("Error loading post")?;
        match cli.format {
            OutputFormat::Text => writeln!(handle, "{}", format_record_detail(&record, use_color))?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &record)?;
                writeln!(handle)?;
            }
            OutputFormat::JsonL => {
                serde_json::to_writer(&mut handle, &record)?;
                writeln!(handle)?;
            }
        }
        return Ok(());
    }

    if let Some(id) = &cli.delete {
        backend.delete_record(id).context("Delete error")?;
        info!(id = %id, "post deleted");
        writeln!(handle, "Post deleted")?;
        return Ok(());
    }

    if cli.import {
        let count = backend
            .import_source(&cli.import_file)
            .context("Import error")?
            .unwrap_or(0);
        writeln!(handle, "Successfully imported {count} posts!")?;
        return Ok(());
    }

    if cli.stats {
        let stats = backend.get_stats().context("Failed to load statistics")?;
        match cli.format {
            OutputFormat::Text => writeln!(handle, "{}", format_stats(&stats, use_color))?,
            OutputFormat::Json | OutputFormat::JsonL => {
                serde_json::to_writer(&mut handle, &stats)?;
                writeln!(handle)?;
            }
        }
        return Ok(());
    }

    if cli.health {
        let health = backend.health().context("Health check failed")?;
        match cli.format {
            OutputFormat::Text => writeln!(handle, "{}", format_health(&health, use_color))?,
            OutputFormat::Json | OutputFormat::JsonL => {
                serde_json::to_writer(&mut handle, &health)?;
                writeln!(handle)?;
            }
        }
        return Ok(());
    }

    let (records, returned) = if let Some(id) = &cli.similar {
        let records = backend
            .similar(id, cli.limit())
            .context("Error finding similar posts")?;
        let returned = records.len();
        (records, returned)
    } else {
        let query = cli.query.clone().unwrap_or_default();
        let filters = FilterBuilder::build(&cli.filter_form());
        let request = compose_request(&query, cli.search_type.into(), cli.limit(), &filters);
        if cli.verbose {
            eprintln!("Request: {}", serde_json::to_string(&request)?);
        }
        let records = backend.search(&request).context("Search error")?;
        let returned = records.len();
        (dedup_records(&records), returned)
    };

    write_records(&mut handle, &records, returned, cli.format, use_color, cli.full_text)
}

fn write_records(
    handle: &mut impl Write,
    records: &[Record],
    returned: usize,
    format: OutputFormat,
    use_color: bool,
    full_text: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if records.is_empty() {
                writeln!(handle, "No results found.")?;
            } else {
                writeln!(handle, "Found {returned} results:\n")?;
                for (index, record) in records.iter().enumerate() {
                    writeln!(handle, "{}\n", format_record(index + 1, record, use_color, full_text))?;
                }
                if returned > records.len() {
                    eprintln!("({} duplicates hidden)", returned - records.len());
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "results": records,
                "total_count": returned,
                "returned_count": records.len()
            });
            serde_json::to_writer_pretty(&mut *handle, &output)?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            for record in records {
                serde_json::to_writer(&mut *handle, record)?;
                writeln!(handle)?;
            }
            let metadata = serde_json::json!({
                "_metadata": {
                    "total_count": returned,
                    "returned_count": records.len()
                }
            });
            serde_json::to_writer(&mut *handle, &metadata)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_limit_is_forwarded() {
        let cli = Cli::try_parse_from(["trash-console", "-n", "-5", "rally"]).unwrap();
        assert_eq!(cli.limit(), Some(-5));
        assert_eq!(cli.query.as_deref(), Some("rally"));

        let cli = Cli::try_parse_from(["trash-console", "--limit", "-20", "rally"]).unwrap();
        assert_eq!(cli.limit(), Some(-20));
    }

    #[test]
    fn test_service_limit_omits_size() {
        let cli = Cli::try_parse_from(["trash-console", "--service-limit", "rally"]).unwrap();
        assert_eq!(cli.limit(), None);
    }

    #[test]
    fn test_no_query_opens_console() {
        let cli = Cli::try_parse_from(["trash-console"]).unwrap();
        assert!(!cli.has_action());
    }
}
