use crate::args::Cli;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::logging;
use crate::output;
use crate::terminal;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use shist_engine::{DateFormat, RenderOptions, Selection, Template};
use std::io::{BufWriter, Write};

/// Exit status for a failed run: bad user input is 2, everything else 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.is::<shist_engine::Error>() || err.is::<toml::de::Error>() {
        2
    } else {
        1
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init_tracing(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let ctx = ExecutionContext::new(&cli, &config, terminal::color_supported());

    // Reject bad bounds and layouts before touching the history file
    let selection = Selection::parse(&cli.selection_args(), ctx.timezone)?;
    let date_format = DateFormat::new(ctx.date_layout.as_str(), ctx.timezone)?;

    let shell = shist_providers::resolve_shell(ctx.shell, ctx.file())?;
    tracing::debug!(%shell, output = %ctx.output, color = ctx.color, "resolved settings");
    let adapter = shist_providers::create_adapter(shell);
    let entries = adapter
        .read(ctx.file())
        .with_context(|| format!("failed to read {shell} history"))?;
    let selected = shist_engine::select(entries, &selection);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match ctx.output {
        OutputFormat::Plain => {
            let template = Template::parse(&ctx.template, ctx.color);
            let options = RenderOptions::new(date_format, ctx.concat_multiline);
            output::write_plain(&mut out, &selected, &template, &options)?;
        }
        OutputFormat::Json => output::write_json(&mut out, &selected)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_code_for_bad_input() {
        let err = anyhow::Error::from(shist_engine::Error::InvalidDate("soon".to_string()))
            .context("while parsing --min-date");
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_for_other_failures() {
        assert_eq!(exit_code(&anyhow!("disk on fire")), 1);
        let io = anyhow::Error::from(shist_providers::Error::UnsupportedPlatform);
        assert_eq!(exit_code(&io), 1);
    }
}
