use clap::{Parser, ValueEnum};
use gnomon_calendar::month::YearMonth;
use gnomon_calendar::view::ViewMode;

/// Content calendar planner for scheduled posts and synced events.
#[derive(Debug, Parser)]
#[command(name = "gnomon", version)]
pub struct Args {
    /// Month to display, e.g. 2024-06 (defaults to the current month)
    #[arg(long)]
    pub month: Option<YearMonth>,

    /// Agenda window: today and week anchor to the real present,
    /// month follows --month navigation
    #[arg(long, default_value_t = ViewMode::Month)]
    pub view: ViewMode,

    /// Maximum number of posts to fetch (overrides the configured limit)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
