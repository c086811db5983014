use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[clap(
    name = "uri-template",
    version,
    about = "Expand a URI template, percent-encoding every substituted value.",
    arg_required_else_help(true)
)]
pub struct Args {
    /// The template to expand.
    ///
    /// Placeholders are written `{name}`, where the name is made of ASCII
    /// letters, digits and underscores. Everything else is copied as-is.
    #[clap(value_name = "TEMPLATE")]
    pub template: String,

    /// Set a variable.
    ///
    /// Syntax: NAME=VALUE
    ///
    /// May be given several times. These override values from --vars-file,
    /// and a later value for the same name overrides an earlier one.
    #[clap(
        help_heading = "Variables",
        short = 'v',
        long = "var",
        value_name = "NAME=VALUE",
        value_parser = parse_name_value
    )]
    pub vars: Vec<(String, String)>,

    /// Read variables from a TOML file.
    ///
    /// The file is a flat table of strings, integers, floats and booleans.
    #[clap(help_heading = "Variables", short = 'f', long, value_name = "PATH")]
    pub vars_file: Option<PathBuf>,

    /// Take variables not set by other options from the environment.
    #[clap(help_heading = "Variables", long)]
    pub env: bool,

    /// Print the template's variable names, one per line, instead of
    /// expanding it.
    #[clap(long)]
    pub list: bool,

    /// Utility log level
    ///
    /// Set to `trace` to print very low priority, often extremely
    /// verbose information.
    ///
    /// Set to `debug` when submitting a bug report.
    ///
    /// Set to `off` to disable logging completely.
    #[clap(
        help_heading = "Meta",
        long,
        default_value = "warn",
        value_name = "LEVEL",
        env = "URI_TEMPLATE_LOG_LEVEL"
    )]
    pub log_level: LevelFilter,

    /// Equivalent to setting `log_level` to `off`.
    ///
    /// This would override the `log_level`.
    #[clap(help_heading = "Meta", short, long)]
    pub quiet: bool,

    /// Print logs in json format to be parsable.
    #[clap(help_heading = "Meta", long)]
    pub json_output: bool,
}

/// Parse a single `NAME=VALUE` pair. The value may itself contain `=`.
fn parse_name_value(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid NAME=VALUE: no `=` found in `{s}`"))?;
    Ok((name.to_owned(), value.to_owned()))
}

pub fn parse() -> Args {
    let mut opts = Args::parse();
    if opts.quiet {
        opts.log_level = LevelFilter::Off;
    }
    opts
}
