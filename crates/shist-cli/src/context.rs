use crate::args::Cli;
use crate::config::Config;
use crate::types::OutputFormat;
use shist_engine::{DEFAULT_DATE_LAYOUT, DEFAULT_TEMPLATE, SelectionArgs, Timezone};
use shist_providers::Shell;
use std::path::{Path, PathBuf};

/// Settings for one invocation: flags layered over the config file over built-in defaults.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub shell: Option<Shell>,
    pub file: Option<PathBuf>,
    pub template: String,
    pub date_layout: String,
    pub timezone: Timezone,
    pub concat_multiline: bool,
    pub color: bool,
    pub output: OutputFormat,
}

impl ExecutionContext {
    /// `color_capable` is the terminal's answer; flags and config can only turn color off.
    pub fn new(cli: &Cli, config: &Config, color_capable: bool) -> Self {
        let timezone = if cli.utc || config.utc {
            Timezone::Utc
        } else {
            Timezone::Local
        };

        Self {
            shell: cli.shell.or(config.shell),
            file: cli.file.clone().or_else(|| config.file_path()),
            template: cli
                .format
                .clone()
                .or_else(|| config.format.clone())
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            date_layout: cli
                .date_format
                .clone()
                .or_else(|| config.date_format.clone())
                .unwrap_or_else(|| DEFAULT_DATE_LAYOUT.to_string()),
            timezone,
            concat_multiline: !(cli.multiline || config.multiline),
            color: color_capable && !(cli.no_color || config.no_color),
            output: cli.output,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

impl Cli {
    pub fn selection_args(&self) -> SelectionArgs<'_> {
        SelectionArgs {
            pattern: self.grep.as_deref(),
            ignore_case: self.ignore_case,
            // Negative counts mean "all", like zero
            count: self.count.map(|n| usize::try_from(n).unwrap_or(0)),
            min_date: self.min_date.as_deref(),
            max_date: self.max_date.as_deref(),
            min_index: self.min_index,
            max_index: self.max_index,
        }
    }
}
