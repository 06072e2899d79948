use crate::types::{LogLevel, OutputFormat};
use clap::Parser;
use shist_providers::Shell;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  shist -n 20 --format \"%i %d %es - %c\"
  shist --min-date 2025-04-01 --date-format \"%H:%M\" --format \"%d | %c\"
  shist --grep '^git' -n 5
  shist --no-color --format \"%i:%c\"
  shist --format \"%C(#ff8800)%d%C(reset) %c\"

Template placeholders:
  %d date   %t raw timestamp   %i index   %e elapsed seconds   %c command
  %C(<color>) switches color: black red green yellow blue magenta cyan white,
  #rrggbb, or reset";

#[derive(Parser, Debug)]
#[command(name = "shist")]
#[command(about = "Show shell history with timestamps, filters and templates", long_about = None)]
#[command(version, after_help = EXAMPLES)]
pub struct Cli {
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Show only the last N entries (0 or negative for all)"
    )]
    pub count: Option<i64>,

    #[arg(short, long, value_name = "PATH", help = "History file to read (auto-detected if omitted)")]
    pub file: Option<PathBuf>,

    #[arg(short, long, value_name = "SHELL", help = "History dialect: zsh, bash or fish")]
    pub shell: Option<Shell>,

    #[arg(short, long, value_name = "PATTERN", help = "Keep only commands matching this regular expression")]
    pub grep: Option<String>,

    #[arg(short, long, help = "Match --grep case-insensitively")]
    pub ignore_case: bool,

    #[arg(long, value_name = "DATE", help = "Minimum date (YYYY-MM-DD, YYYY-MM-DD HH:MM, or UNIX seconds)")]
    pub min_date: Option<String>,

    #[arg(long, value_name = "DATE", help = "Maximum date (YYYY-MM-DD, YYYY-MM-DD HH:MM, or UNIX seconds)")]
    pub max_date: Option<String>,

    #[arg(long, value_name = "N", allow_negative_numbers = true, help = "Minimum index (inclusive)")]
    pub min_index: Option<i64>,

    #[arg(long, value_name = "N", allow_negative_numbers = true, help = "Maximum index (inclusive)")]
    pub max_index: Option<i64>,

    #[arg(long, value_name = "TEMPLATE", help = "Output template (%d=date, %t=timestamp, %i=index, %e=elapsed, %c=command)")]
    pub format: Option<String>,

    #[arg(long, value_name = "LAYOUT", help = "strftime layout for %d [default: %Y-%m-%d %H:%M]")]
    pub date_format: Option<String>,

    #[arg(long, help = "Print multiline commands on their original lines")]
    pub multiline: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Use UTC instead of local time for dates")]
    pub utc: bool,

    #[arg(long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    #[arg(long, value_name = "PATH", help = "Config file [default: <config dir>/shist/config.toml]")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}
