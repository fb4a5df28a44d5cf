use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use release_that::cli::{BumpRequest, Orchestrator, ReleaseOptions};
use release_that::config::{self, DEFAULT_CONFIG_FILE};
use release_that::git::Git2Repository;
use release_that::github::GitHubClient;
use release_that::hooks::{SkipPolicy, SystemShell};
use release_that::{auth, boundary, telemetry, ui};

#[derive(clap::Parser)]
#[command(
    name = "rt",
    about = "Create a GitHub release from the current git repository"
)]
#[command(group(
    ArgGroup::new("bump")
        .args(["patch", "minor", "major", "custom"])
        .multiple(false)
))]
struct Args {
    #[arg(short, long, help = "Release a patch version (x.y.Z)")]
    patch: bool,

    #[arg(short, long, help = "Release a minor version (x.Y.0)")]
    minor: bool,

    #[arg(short = 'M', long, help = "Release a major version (X.0.0)")]
    major: bool,

    #[arg(long, value_name = "VERSION", help = "Release an explicit version")]
    custom: Option<String>,

    #[arg(
        short = 'D',
        long,
        help = "Run hooks without creating the release or uploading assets"
    )]
    dry_run: bool,

    #[arg(short, long, help = "Print only the released version")]
    quiet: bool,

    #[arg(
        long,
        value_name = "PHASES",
        default_value = "no",
        help = "Hook phases to skip, comma separated (\"\" skips all)"
    )]
    skip_hooks: String,

    #[arg(short, long, help = "Write a default rt.json configuration file")]
    init: bool,

    #[arg(short, long, help = "Overwrite an existing configuration file with --init")]
    force: bool,

    #[arg(long, help = "Store a GitHub personal access token")]
    login: bool,

    #[arg(short = 'Q', long, help = "Disable colored output")]
    no_ansi: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Log debug information to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> ExitCode {
    let started = Instant::now();
    let args = Args::parse();

    if args.no_ansi {
        ui::set_colors(false);
    }
    telemetry::init_tracing(args.verbose);

    match run(args, started) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, started: Instant) -> Result<()> {
    if args.version {
        println!("rt {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.init {
        let path = args
            .config
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        return init_config(&path, args.force);
    }

    if args.login {
        return login();
    }

    let options = ReleaseOptions {
        bump: BumpRequest {
            patch: args.patch,
            minor: args.minor,
            major: args.major,
            custom: args.custom,
        },
        dry_run: args.dry_run,
        skip_hooks: SkipPolicy::parse(&args.skip_hooks),
    };

    // Reject a missing or malformed version before touching the repository
    options.bump.selection()?;

    let config = config::load_config(args.config.as_deref())?;
    let repo = Git2Repository::open(".")?;

    let host = if options.dry_run {
        None
    } else {
        Some(GitHubClient::new(auth::load_token()?)?)
    };
    let shell = SystemShell;

    let report = Orchestrator::new(&config, &repo, host.as_ref(), &shell).execute(&options)?;

    if args.quiet {
        ui::display_quiet_version(&report.version).context("Failed to write version")?;
        return Ok(());
    }

    for warning in boundary::report_warnings(&report, &config.remote) {
        ui::display_boundary_warning(&warning);
    }

    ui::display_release_summary(&report, &config.remote, started.elapsed());
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    config::write_default_config(path, force)?;
    ui::display_success(&format!("Created {}", path.display()));
    Ok(())
}

fn login() -> Result<()> {
    let token = ui::prompt_token(auth::TOKEN_URL)?;
    let path = auth::token_path()?;
    auth::save_token_to(&path, &token)
        .with_context(|| format!("Failed to store token in {}", path.display()))?;

    ui::display_success(&format!("Token saved to {}", path.display()));
    Ok(())
}
