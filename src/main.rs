use std::path::PathBuf;

use bevy::prelude::*;
use clap::{Parser, Subcommand};
use colored::Colorize;

use dicetray::tray::cli::{parse_die_arg, run_roll, RollOptions};
use dicetray::tray::{DiceTrayPlugin, DieKind};

/// Dice Tray - roll polyhedral dice with animated faces and synthesized sound
#[derive(Parser, Debug)]
#[command(name = "dicetray", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with the roll sound turned off
    #[arg(long)]
    muted: bool,

    /// Dice to have selected when the window opens (e.g. "d20,d6")
    #[arg(long, value_delimiter = ',', value_parser = parse_die_arg)]
    select: Vec<DieKind>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Roll dice in the terminal instead of opening the window
    Roll {
        /// Dice to roll (e.g. "d20", "1d100"); each kind is rolled once
        #[arg(required = true, value_parser = parse_die_arg)]
        dice: Vec<DieKind>,

        /// Write the synthesized roll sound to a WAV file
        #[arg(long)]
        wav: Option<PathBuf>,

        /// Print only the result line
        #[arg(short, long)]
        quiet: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Print every animation frame at once instead of pacing them
        #[arg(long)]
        instant: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Roll {
        dice,
        wav,
        quiet,
        json,
        instant,
    }) = cli.command
    {
        let options = RollOptions {
            wav,
            quiet,
            json,
            realtime: !instant,
        };
        if let Err(e) = run_roll(&dice, &options) {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
        return;
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dice Tray".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DiceTrayPlugin {
            sound_enabled: !cli.muted,
            preselected: cli.select,
        })
        .run();
}
