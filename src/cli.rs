use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "whitted")]
#[command(about = "Recursive Phong ray tracer with reflection, refraction and hard shadows")]
pub struct Args {
    /// JSON render configuration; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the configured image width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the configured image height
    #[arg(long)]
    pub height: Option<u32>,

    /// Output PNG path; a name under renders/ is generated when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}
