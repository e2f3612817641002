// Pshe CLI
// Re-runs a git command typed on a Russian keyboard layout

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use pshe_core::{Layout, Platform, Settings, SettingsError, SystemLauncher};

/// Run git commands typed with the Russian layout active
///
/// Options are only recognised before the first git argument; everything
/// from there on is converted and forwarded.
#[derive(Parser, Debug)]
#[command(name = "pshe")]
#[command(author = "pshe contributors")]
#[command(about = "Run git commands typed with the Russian layout active", long_about = None)]
#[command(disable_help_flag = true)]
struct Args {
    /// TOML settings file (default: ~/.config/pshe/settings.toml)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Layout platform: aix, darwin, freebsd, linux, openbsd, sunos, win32
    #[arg(long, value_name = "NAME")]
    platform: Option<Platform>,

    /// Program to run instead of git
    #[arg(long, value_name = "PROGRAM")]
    program: Option<String>,

    /// Show the converted command without running it
    #[arg(long)]
    dry_run: bool,

    /// Do not print the converted command
    #[arg(long)]
    no_echo: bool,

    /// Refuse to run when a quote is never closed
    #[arg(long)]
    strict_quotes: bool,

    /// Print the layout table and exit
    #[arg(long)]
    print_layout: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// The mistyped git arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.target(env_logger::Target::Stderr).try_init();
}

/// Settings file values with CLI overrides applied on top.
///
/// An explicit `--config` must exist; the default location is optional.
fn resolve_settings(args: &Args) -> Result<Settings, SettingsError> {
    let mut settings = match args.config {
        Some(ref path) => Settings::from_file(path)?,
        None => Settings::load_default()?,
    };

    if let Some(platform) = args.platform {
        settings.set_platform(platform);
    }
    if let Some(ref program) = args.program {
        settings.set_program(program.clone());
    }
    if args.no_echo {
        settings.set_echo(false);
    }
    if args.strict_quotes {
        settings.set_strict_quotes(true);
    }

    Ok(settings)
}

fn print_layout<W: Write>(layout: &Layout, out: &mut W) -> io::Result<()> {
    writeln!(out, "Layout for {} ({} entries):", layout.platform(), layout.len())?;
    for (from, to) in layout.iter() {
        writeln!(out, "  {} -> {}", from, to)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = resolve_settings(&args)?;
    log::debug!(
        "platform={} program={} echo={} strict_quotes={}",
        settings.platform(),
        settings.program(),
        settings.echo(),
        settings.strict_quotes()
    );

    let dispatcher = settings.dispatcher().with_dry_run(args.dry_run);

    if args.print_layout {
        print_layout(dispatcher.layout(), &mut io::stdout().lock())?;
        return Ok(());
    }

    let result = dispatcher.run(&args.args, &mut SystemLauncher, &mut io::stdout().lock())?;

    if args.dry_run {
        let mut out = io::stdout().lock();
        for (index, arg) in result.args.iter().enumerate() {
            writeln!(out, "  [{}] {:?}", index, arg)?;
        }
        return Ok(());
    }

    match result.exit_code {
        Some(0) => Ok(()),
        Some(code) => std::process::exit(code),
        // Terminated by a signal
        None => std::process::exit(1),
    }
}
