//! CLI argument definitions for the component importer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use atl_cli::edit::{ComponentChanges, ResultChanges};
use atl_cli::import::{FieldOverride, parse_override};
use atl_client::API_URL_ENV;
use atl_map::DEFAULT_PREVIEW_LIMIT;
use atl_model::CompetitionStatus;

#[derive(Parser)]
#[command(
    name = "atl",
    version,
    about = "Import component inventories from spreadsheets",
    long_about = "Import component inventories from spreadsheets.\n\n\
                  Detects which columns hold the component name, type, description\n\
                  and quantity, previews the mapped rows, and sends them to the\n\
                  component record API. The same API holds projects, competitions\n\
                  and orders, which can be listed and maintained here too."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow spreadsheet cell values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show which columns would be mapped to each component field.
    Detect(DetectArgs),

    /// Map a spreadsheet and import its rows as components.
    Import(ImportArgs),

    /// List stored components with a stock summary.
    Components(ComponentsArgs),

    /// Set the stock count of one component.
    SetQuantity(SetQuantityArgs),

    /// Add, edit or show a single component.
    #[command(subcommand)]
    Component(ComponentCommand),

    /// List projects and the components they use.
    Projects(ListArgs),

    /// List competitions with status counts.
    Competitions(CompetitionsArgs),

    /// Record the outcome of a competition.
    RecordResult(RecordResultArgs),

    /// List component orders.
    Orders(ListArgs),

    /// Delete a project, competition or order.
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum ComponentCommand {
    /// Add one component.
    Add(ComponentAddArgs),

    /// Change fields of a stored component; unset fields are kept.
    Edit(ComponentEditArgs),

    /// Show one component.
    Show(ComponentShowArgs),
}

#[derive(Args)]
pub struct DetectArgs {
    /// Spreadsheet to inspect (.csv, .xlsx, .xls, .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the headers and mapping as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Spreadsheet to import (.csv, .xlsx, .xls, .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Override a detected column, e.g. `--map quantity=Stock` or `--map type=skip`.
    ///
    /// COLUMN is a header name, a 1-based column number, or `skip`.
    /// Repeatable; applied in order.
    #[arg(long = "map", value_name = "FIELD=COLUMN", value_parser = parse_override)]
    pub overrides: Vec<FieldOverride>,

    /// Number of mapped rows to show before importing.
    #[arg(long = "preview", value_name = "N", default_value_t = DEFAULT_PREVIEW_LIMIT)]
    pub preview: usize,

    /// Map and preview without sending anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Import without asking for confirmation.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct ComponentsArgs {
    /// Only show components whose name, ID, type or description contains TEXT.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct SetQuantityArgs {
    /// Component ID.
    #[arg(value_name = "ID")]
    pub id: String,

    /// New stock count.
    #[arg(value_name = "QUANTITY")]
    pub quantity: u64,

    #[command(flatten)]
    pub api: ApiArgs,
}

/// Component fields accepted by `component add` and `component edit`.
#[derive(Args)]
pub struct ComponentFieldArgs {
    /// Component name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Component type, e.g. Sensor.
    #[arg(long = "type", value_name = "TYPE")]
    pub component_type: Option<String>,

    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Stock count.
    #[arg(long = "quantity", value_name = "N")]
    pub quantity: Option<u64>,
}

impl ComponentFieldArgs {
    pub fn changes(&self) -> ComponentChanges {
        ComponentChanges {
            name: self.name.clone(),
            component_type: self.component_type.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
        }
    }
}

#[derive(Args)]
pub struct ComponentAddArgs {
    #[command(flatten)]
    pub fields: ComponentFieldArgs,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct ComponentEditArgs {
    /// Component ID.
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: ComponentFieldArgs,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct ComponentShowArgs {
    /// Component ID.
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct CompetitionsArgs {
    /// Only show competitions with this status (upcoming, ongoing, completed, cancelled).
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<CompetitionStatus>,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Args)]
pub struct RecordResultArgs {
    /// Event ID.
    #[arg(value_name = "EVENT_ID")]
    pub id: String,

    /// New status; defaults to the stored one.
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<CompetitionStatus>,

    /// Placing, e.g. 1st or Finalist.
    #[arg(long = "position", value_name = "TEXT")]
    pub position: Option<String>,

    /// Result summary.
    #[arg(long = "result", value_name = "TEXT")]
    pub result: Option<String>,

    #[arg(long = "notes", value_name = "TEXT")]
    pub notes: Option<String>,

    #[command(flatten)]
    pub api: ApiArgs,
}

impl RecordResultArgs {
    pub fn changes(&self) -> ResultChanges {
        ResultChanges {
            status: self.status,
            position: self.position.clone(),
            result: self.result.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Kind of record to delete.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: RecordKindArg,

    /// Record ID.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Delete without asking for confirmation.
    #[arg(long = "yes", short = 'y')]
    pub yes: bool,

    #[command(flatten)]
    pub api: ApiArgs,
}

/// Record kinds that can be deleted.
#[derive(Clone, Copy, ValueEnum)]
pub enum RecordKindArg {
    Project,
    Competition,
    Order,
}

impl RecordKindArg {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Competition => "competition",
            Self::Order => "order",
        }
    }
}

/// Connection settings for the record API.
#[derive(Args)]
pub struct ApiArgs {
    /// Base URL of the component record API.
    #[arg(long = "api-url", value_name = "URL", env = API_URL_ENV)]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
