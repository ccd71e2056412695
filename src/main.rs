use cdnipfacts::{Facts, FetcherBuilder};
use clap::Parser;
use log::error;
use std::process::ExitCode;
use std::sync::Arc;

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .expect("The logger is initialized once");

    let definitions = cdnipfacts::cdn_fact_definitions();

    if args.list {
        cli::output::fact_names(&definitions);
        return ExitCode::SUCCESS;
    }

    let fetcher = match FetcherBuilder::new().build() {
        Ok(fetcher) => Arc::new(fetcher),
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };
    let facts = Facts::cdn(fetcher);

    let selected = cli::select_facts(&args, &definitions);
    let fact_results = cli::resolve_facts(&facts, &selected);
    cli::log::fact_results(&fact_results);

    match args.output {
        cli::OutputFormat::Json => {
            if let Err(error) = cli::output::json(&fact_results) {
                error!("Failed to serialize facts: {error}");
                return ExitCode::FAILURE;
            }
        }
        cli::OutputFormat::Table => cli::output::fact_table(&fact_results),
        cli::OutputFormat::Lines => cli::output::addresses(&fact_results),
        cli::OutputFormat::Nginx => cli::output::nginx_real_ip(&fact_results),
    };

    ExitCode::SUCCESS
}
