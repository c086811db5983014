use std::{
    io,
    path::PathBuf,
    process::{ExitCode, Termination},
};

use miette::{Diagnostic, Report};
use thiserror::Error;
use uri_template::ExpandError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum CliError {
    /// The template is invalid, or a variable is missing.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] uri_template::Error),

    /// The variables file could not be read.
    #[error("could not read variables file {}", path.display())]
    #[diagnostic(code(uri_template_cli::vars_file))]
    ReadVarsFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The variables file is not a flat TOML table of scalars.
    #[error("invalid variables file {}", path.display())]
    #[diagnostic(
        code(uri_template_cli::vars_file),
        help("use a flat table of strings, integers, floats and booleans")
    )]
    ParseVarsFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Writing the result failed.
    #[error("failed to write output: {0}")]
    #[diagnostic(code(uri_template_cli::io))]
    Io(#[from] io::Error),

    /// A global logger or subscriber was already installed.
    #[error("failed to initialise logging: {0}")]
    #[diagnostic(code(uri_template_cli::logging))]
    Logging(#[source] BoxError),
}

impl CliError {
    pub(crate) fn logging(err: impl Into<BoxError>) -> Self {
        Self::Logging(err.into())
    }

    /// The process exit status for this error.
    ///
    /// Template and variable errors exit with 2, everything else with 1.
    fn exit_number(&self) -> u8 {
        match self {
            Self::Template(uri_template::Error::Expand(ExpandError::Io(_))) => 1,
            Self::Template(_) => 2,
            Self::ReadVarsFile { .. }
            | Self::ParseVarsFile { .. }
            | Self::Io(_)
            | Self::Logging(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_number().into()
    }
}

impl Termination for CliError {
    fn report(self) -> ExitCode {
        let code = self.exit_code();
        eprintln!("{:?}", Report::new(self));
        code
    }
}
