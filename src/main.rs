//! # easytui CLI
//!
//! Command-line front end for the easytui menu widget.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use easytui::{
    commands::{self, DemoArgs, PickArgs},
    config::{Config, GlobalConfig, Overrides},
    logging,
    ui::Palette,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/easytui/config    Default renderer, stay-open behaviour, colors, log filter

Menu Input (simple renderer):
  <number>    Select the option with that index
  <empty>     Confirm the current selection
  Ctrl+D      Close the menu

Environment:
  EASYTUI_LOG    Log filter for stderr output (e.g. debug, easytui=trace)

Getting Started:
  easytui demo                       Try the interactive sample menu
  easytui pick red green blue        Choose one value and print it
  easytui setup                      Create the global config file";

#[derive(Parser)]
#[command(name = "easytui")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Minimal terminal menus with pluggable renderers")]
#[command(
    long_about = "easytui renders a list of options in the terminal and lets the user pick one. \
Each option carries click and hover handlers; the menu clicks the chosen option and \
re-renders until a handler closes it.\n\n\
Renderers are looked up by name. The built-in 'simple' renderer prints the options on \
one line and reads an index from standard input."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive sample menu
    #[command(
        long_about = "Run an interactive sample menu.\n\n\
The demo shows a greeting option, a spacer (listed without text), a click counter \
that keeps its state between passes, an option reporting the cursor position, and a \
quit option that closes the menu from its handler.",
        after_help = "Examples:\n  \
easytui demo                        Loop until 'Quit' is chosen\n  \
easytui demo --once                 Render a single pass\n  \
easytui demo --label \"Main menu\"    Custom heading"
    )]
    Demo {
        /// Heading shown before the options
        #[arg(long)]
        label: Option<String>,

        /// Renderer name (overrides config)
        #[arg(long)]
        renderer: Option<String>,

        /// Render a single pass instead of looping
        #[arg(long)]
        once: bool,
    },

    /// Pick one of the given options and print it
    #[command(
        long_about = "Pick one of the given options and print its text to stdout.\n\n\
The menu renders once. An empty argument becomes a spacer: it keeps its index but is \
not listed. Exits with an error if input ends before a selection is made.",
        after_help = "Examples:\n  \
easytui pick apple pear plum                 Print the chosen fruit\n  \
easytui pick --label Size S M L --default 1  Empty input picks 'M'\n  \
choice=$(easytui pick yes no)                Use in scripts"
    )]
    Pick {
        /// Heading shown before the options
        #[arg(long)]
        label: Option<String>,

        /// Renderer name (overrides config)
        #[arg(long)]
        renderer: Option<String>,

        /// Index selected when the input line is empty
        #[arg(long, allow_hyphen_values = true)]
        default: Option<isize>,

        /// Option texts
        #[arg(required = true)]
        options: Vec<String>,
    },

    /// List registered renderers
    Renderers,

    /// Create or repair the global config file
    Setup,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
easytui completions zsh > ~/.zfunc/_easytui\n  \
easytui completions bash > ~/.local/share/bash-completion/completions/easytui")]
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let palette = Palette::detect(!no_color_requested());
    if let Err(err) = run() {
        eprintln!("{} {err:#}", palette.error("error:"));
        std::process::exit(1);
    }
}

/// Checks for `--no-color` before argument parsing so early errors honor it.
fn no_color_requested() -> bool {
    std::env::args().any(|arg| arg == "--no-color")
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let renderer = match &cli.command {
        Commands::Demo { renderer, .. } | Commands::Pick { renderer, .. } => renderer.clone(),
        _ => None,
    };
    let config = Config::load()?.with_overrides(Overrides {
        renderer,
        no_color: cli.no_color,
    });

    logging::init(
        config.log_filter(),
        config.color() && io::stderr().is_terminal(),
    );
    report_config_issues();

    match cli.command {
        Commands::Demo { label, once, .. } => commands::demo(&DemoArgs { label, once }, &config),

        Commands::Pick {
            label,
            default,
            options,
            ..
        } => commands::pick(
            &PickArgs {
                label,
                options,
                default,
            },
            &config,
        ),

        Commands::Renderers => commands::renderers(&config),

        Commands::Setup => commands::setup(Palette::detect(config.color())),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}

/// Logs unknown or missing fields in an existing config file.
fn report_config_issues() {
    let Ok(validation) = GlobalConfig::validate() else {
        return;
    };
    for field in &validation.invalid {
        tracing::warn!(field = %field, "unknown field in global config (run `easytui setup` to clean up)");
    }
    for field in &validation.missing {
        tracing::debug!(field = %field, "global config field not set, using default");
    }
}
