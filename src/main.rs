//! lifebot: terminal dashboard for the LifeBOT autonomous marketing agent
//!
//! Runs the interactive dashboard and a few headless companions (ROI
//! projections, call and feed simulations, fixture dumps).

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use lifebot::cli::{
    self, exit_codes, parse_speed, parse_tab, CallCommand, FeedCommand, FixturesCommand,
    RoiCommand,
};
use lifebot::output::OutputFormat;
use lifebot::providers::DemoData;
use lifebot::tui::TabKind;
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lifebot")]
#[command(version)]
#[command(about = "LifeBOT marketing intelligence dashboard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  ROI inputs rejected
    3  Error occurred

EXAMPLES:
    # Open the dashboard on the Voice AI page
    lifebot dashboard --tab voice

    # Project ROI for a smaller budget as JSON
    lifebot roi --budget 500000 -o json

    # Replay the scripted call without waiting
    lifebot call --instant")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "LIFEBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Named preset layered over the config file (default, fast, presentation)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `dashboard` subcommand
#[derive(Args)]
struct DashboardArgs {
    /// Page to open first
    #[arg(long, value_parser = parse_tab)]
    tab: Option<TabKind>,

    /// Theme: dark, light, high-contrast
    #[arg(long)]
    theme: Option<String>,
}

/// Arguments for the `roi` subcommand
#[derive(Args)]
struct RoiArgs {
    /// Monthly marketing budget in rupees
    #[arg(long)]
    budget: Option<f64>,

    /// Current cost per lead in rupees
    #[arg(long)]
    cpl: Option<f64>,

    /// Current conversion rate in percent
    #[arg(long)]
    conversion: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: OutputFormat,

    /// Write to file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `call` subcommand
#[derive(Args)]
struct CallArgs {
    /// Playback speed multiplier (0.01 to 1000)
    #[arg(long, default_value_t = 1.0, value_parser = parse_speed)]
    speed: f64,

    /// Run without waiting in real time
    #[arg(long)]
    instant: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: OutputFormat,
}

/// Arguments for the `feed` subcommand
#[derive(Args)]
struct FeedArgs {
    /// Passes over the activity lines
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    cycles: u64,

    /// Playback speed multiplier (0.01 to 1000)
    #[arg(long, default_value_t = 1.0, value_parser = parse_speed)]
    speed: f64,

    /// Run without waiting in real time
    #[arg(long)]
    instant: bool,
}

/// Arguments for the `fixtures` subcommand
#[derive(Args)]
struct FixturesArgs {
    /// Only dump this page
    #[arg(long, value_parser = parse_tab)]
    tab: Option<TabKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    output: OutputFormat,

    /// Write to file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Dashboard(DashboardArgs),

    /// Project leads, revenue and ROI
    Roi(RoiArgs),

    /// Play the simulated voice call in the terminal
    Call(CallArgs),

    /// Print the agent activity feed
    Feed(FeedArgs),

    /// Dump the data each page displays
    Fixtures(FixturesArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .lifebot.yaml in the current directory
    Init,
}

fn init_logging(cli: &Cli) {
    // The dashboard owns the terminal, so only warnings reach stderr there.
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else if matches!(cli.command, Commands::Dashboard(_)) {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(lifebot::output::should_use_color(cli.no_color))
                .with_writer(io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let load = || cli::load_config(cli.config.as_deref(), cli.preset.as_deref());

    match cli.command {
        Commands::Dashboard(args) => {
            let mut config = load()?;
            if let Some(tab) = args.tab {
                config.tui.initial_tab = tab.id().to_string();
            }
            if let Some(theme) = &args.theme {
                if !lifebot::config::VALID_THEMES.contains(&theme.as_str()) {
                    anyhow::bail!(
                        "unknown theme '{theme}' (expected one of: {})",
                        lifebot::config::VALID_THEMES.join(", ")
                    );
                }
            }
            config.output.no_color = cli.no_color;
            cli::run_dashboard(config, args.theme.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Roi(args) => {
            let config = load()?;
            cli::run_roi(
                RoiCommand {
                    budget: args.budget,
                    cpl: args.cpl,
                    conversion: args.conversion,
                    format: args.output,
                    output_file: args.output_file,
                    quiet: cli.quiet,
                },
                &config.roi,
            )
        }

        Commands::Call(args) => {
            let config = load()?;
            let cmd = CallCommand {
                speed: args.speed,
                instant: args.instant,
                format: args.output,
            };
            cli::run_call(&cmd, &DemoData::new(), &config.timing, &mut io::stdout().lock())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Feed(args) => {
            let config = load()?;
            let cmd = FeedCommand {
                cycles: args.cycles,
                speed: args.speed,
                instant: args.instant,
            };
            cli::run_feed(&cmd, &DemoData::new(), &config.timing, &mut io::stdout().lock())?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Fixtures(args) => {
            cli::run_fixtures(
                FixturesCommand {
                    tab: args.tab,
                    format: args.output,
                    output_file: args.output_file,
                    quiet: cli.quiet,
                },
                &DemoData::new(),
            )?;
            Ok(exit_codes::SUCCESS)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "lifebot", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = lifebot::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let config = load()?;
                    match lifebot::config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("# Loaded from: {}", path.display()),
                        None => eprintln!("# No config file found; showing defaults"),
                    }
                    let yaml =
                        serde_yaml::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir()
                            .ok()
                            .map(|p| p.display().to_string()),
                        ::dirs::config_dir().map(|p| p.join("lifebot").display().to_string()),
                        ::dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    eprintln!("Config file search paths (in order):");
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in &[".lifebot.yaml", ".lifebot.yml", "lifebot.yaml"] {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match lifebot::config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                    if let Some(prefs) = lifebot::config::TuiPreferences::config_path() {
                        eprintln!("Theme preference file: {}", prefs.display());
                    }
                }
                ConfigAction::Init => {
                    let target = std::env::current_dir()
                        .context("cannot determine current directory")?
                        .join(".lifebot.yaml");
                    if target.exists() {
                        anyhow::bail!(
                            "{} already exists. Remove it first to re-initialize.",
                            target.display()
                        );
                    }
                    let content = lifebot::config::generate_full_example_config();
                    std::fs::write(&target, content)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    eprintln!("Created {}", target.display());
                }
            }
            io::stdout().flush()?;
            Ok(exit_codes::SUCCESS)
        }
    }
}
