// Pshe Command Dispatcher
// Runs raw arguments through the layout and hands them to the target program

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::tokenizer::{split_args, TokenizeError};
use crate::{convert_args, Layout};

/// Program launched when nothing else is configured
pub const DEFAULT_PROGRAM: &str = "git";

/// Dispatcher errors
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error("failed to write command echo: {0}")]
    Echo(#[source] io::Error),
}

/// Starts the external program.
///
/// Implementations own the child's lifetime; the dispatcher only passes the
/// final argument list along.
pub trait Launcher {
    /// Run `program` with `args`, returning its exit code if it has one
    fn launch(&mut self, program: &str, args: &[String]) -> io::Result<Option<i32>>;
}

/// Launches a real process found through `PATH`, sharing this process's
/// stdin, stdout and stderr, and waits for it to finish.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, program: &str, args: &[String]) -> io::Result<Option<i32>> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        log::debug!("{} exited with {}", program, status);
        Ok(status.code())
    }
}

/// What a dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Joined and converted command line
    pub converted: String,
    /// Arguments handed to the program
    pub args: Vec<String>,
    /// Exit code of the program; `None` on a dry run or when it was killed
    pub exit_code: Option<i32>,
}

/// Converts a mistyped command line and runs the target program with it
#[derive(Debug, Clone)]
pub struct Dispatcher {
    layout: Layout,
    program: String,
    echo: bool,
    strict_quotes: bool,
    dry_run: bool,
}

impl Dispatcher {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            program: DEFAULT_PROGRAM.to_string(),
            echo: true,
            strict_quotes: false,
            dry_run: false,
        }
    }

    /// Set the program to launch
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Print `> $ <program> <converted>` before launching
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Refuse to launch when a quote is left open
    pub fn with_strict_quotes(mut self, strict: bool) -> Self {
        self.strict_quotes = strict;
        self
    }

    /// Convert and echo but never launch
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Echo line for a converted command line, including the trailing blank line
    pub fn echo_line(&self, converted: &str) -> String {
        format!("> $ {} {}\n", self.program, converted)
    }

    /// Convert and tokenize `raw_args` without side effects
    pub fn prepare<S: AsRef<str>>(
        &self,
        raw_args: &[S],
    ) -> Result<(String, Vec<String>), TokenizeError> {
        let converted = convert_args(&self.layout, raw_args);
        let split = split_args(&converted);

        if let Some((quote, position)) = split.open_quote {
            if !self.strict_quotes {
                log::warn!(
                    "unterminated {} quote at char {}, closing it at end of line",
                    quote,
                    position
                );
            }
        }

        let args = if self.strict_quotes {
            split.strict()?
        } else {
            split.into_tokens()
        };

        log::debug!(
            "converted {:?} into {} argument(s): {:?}",
            converted,
            args.len(),
            args
        );
        Ok((converted, args))
    }

    /// Convert `raw_args`, echo the result to `out`, then launch the program
    pub fn run<S, L, W>(
        &self,
        raw_args: &[S],
        launcher: &mut L,
        out: &mut W,
    ) -> Result<Dispatch, DispatchError>
    where
        S: AsRef<str>,
        L: Launcher + ?Sized,
        W: Write + ?Sized,
    {
        let (converted, args) = self.prepare(raw_args)?;

        if self.echo {
            writeln!(out, "{}", self.echo_line(&converted)).map_err(DispatchError::Echo)?;
            out.flush().map_err(DispatchError::Echo)?;
        }

        if self.dry_run {
            log::info!("dry run, not launching {}", self.program);
            return Ok(Dispatch {
                converted,
                args,
                exit_code: None,
            });
        }

        let exit_code = launcher
            .launch(&self.program, &args)
            .map_err(|source| DispatchError::Launch {
                program: self.program.clone(),
                source,
            })?;

        Ok(Dispatch {
            converted,
            args,
            exit_code,
        })
    }
}
