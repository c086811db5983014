use std::{
    collections::BTreeSet,
    env, fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info};
use uri_template::{Template, Variables};

use crate::{args::Args, errors::CliError};

pub fn run(args: Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    expand_to(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Expand (or list) the template given in `args`, writing to `out`.
pub fn expand_to(args: &Args, out: &mut dyn Write) -> Result<(), CliError> {
    let template = Template::parse(&args.template).map_err(uri_template::Error::from)?;

    if args.list {
        let mut seen = BTreeSet::new();
        for name in template.variables().filter(|name| seen.insert(*name)) {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    }

    let vars = load_variables(args, &template)?;
    debug!("Expanding with {} variables", vars.len());

    let expanded = template.expand(&vars).map_err(uri_template::Error::from)?;
    writeln!(out, "{expanded}")?;

    Ok(())
}

/// Collect variables from, in increasing priority: the environment (only
/// for names the template uses), the variables file, then `--var` flags.
pub fn load_variables(args: &Args, template: &Template<'_>) -> Result<Variables, CliError> {
    let mut vars = match &args.vars_file {
        Some(path) => read_vars_file(path)?,
        None => Variables::new(),
    };

    vars.extend(args.vars.iter().cloned());

    if args.env {
        for name in template.variables() {
            if vars.contains(name) {
                continue;
            }
            if let Some(value) = env::var_os(name).and_then(|value| value.into_string().ok()) {
                debug!("Taking `{name}` from the environment");
                vars.insert(name, value);
            }
        }
    }

    Ok(vars)
}

fn read_vars_file(path: &Path) -> Result<Variables, CliError> {
    info!("Reading variables from {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| CliError::ReadVarsFile {
        path: path.to_owned(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| CliError::ParseVarsFile {
        path: path.to_owned(),
        source,
    })
}
