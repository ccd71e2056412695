use clap::{Parser, ValueEnum};

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Resolve the Cloudflare and Fastly edge IP address facts.", long_about = None)]
pub struct Args {
    /// Include IPv4 facts
    #[arg(short = '4', long)]
    pub ipv4: bool,

    /// Include IPv6 facts
    #[arg(short = '6', long)]
    pub ipv6: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// List the available fact names and exit
    #[arg(long)]
    pub list: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Facts to resolve; defaults to all facts
    pub facts: Option<Vec<String>>,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object mapping fact names to address arrays
    Json,

    /// Table of facts and addresses
    Table,

    /// One address per line
    Lines,

    /// nginx `set_real_ip_from` directives
    Nginx,
}
