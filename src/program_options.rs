//! Utility for program configuration arguments

use crate::render_settings::{RenderSettings, MANDELBROT_SETTINGS, NEWTON_SETTINGS};
use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::process::exit;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File to write to
    #[clap(short, long, value_parser, default_value = "fractal.png")]
    output: String,

    /// Configuration file
    #[clap(short, long, value_parser)]
    config: Option<String>,

    /// Built-in settings to start from when no configuration file is given
    #[clap(short, long, value_enum, default_value = "newton")]
    preset: Preset,

    /// Number of threads to scan with (defaults to every available core)
    #[clap(short, long, value_parser)]
    threads: Option<u32>,

    /// Do not show progress bars
    #[clap(short, long, value_parser)]
    quiet: bool,

    /// Alternate behaviours for the program
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Preset {
    Newton,
    Mandelbrot,
}

impl Preset {
    fn settings(&self) -> RenderSettings {
        match self {
            Preset::Newton => NEWTON_SETTINGS,
            Preset::Mandelbrot => MANDELBROT_SETTINGS,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display configuration wizard
    Wizard {
        /// Path to write the selected configuration to
        #[clap(short, long, value_parser)]
        save_config: Option<String>,
    },
    /// Write the selected preset's configuration to TOML
    WriteDefault {
        /// Path to write the configuration to (writes to stdout if unset)
        #[clap(short, long, value_parser)]
        save_config: Option<String>,
    },
}

/// How to run the program
pub struct ProgramOptions {
    /// Rendering settings
    pub render_settings: RenderSettings,

    /// Filepath for output (png image format)
    pub output_path: String,

    /// Draw progress bars while rendering?
    pub show_progress: bool,
}

/// Get options from program arguments
pub fn get_options() -> Result<ProgramOptions, Box<dyn Error>> {
    let args: Args = Args::parse();
    let render_settings = match &args.command {
        Some(Commands::WriteDefault {
            save_config: config,
        }) => {
            write_default(&args.preset.settings(), config.as_deref())?;
            exit(0);
        }
        Some(Commands::Wizard {
            save_config: config,
        }) => match RenderSettings::from_wizard()? {
            Some(settings) => {
                if let Some(config) = config {
                    settings.to_file(config)?;
                }
                Ok(settings)
            }
            None => Err("User canceled..."),
        },
        None => {
            if let Some(config_path) = args.config.as_deref() {
                Ok(RenderSettings::from_file(config_path)?)
            } else {
                Ok(args.preset.settings())
            }
        }
    }?;

    let render_settings = RenderSettings {
        threads: args.threads.or(render_settings.threads),
        ..render_settings
    };
    render_settings.validate()?;

    Ok(ProgramOptions {
        render_settings,
        output_path: args.output.clone(),
        show_progress: !args.quiet,
    })
}

/// Write `settings` as TOML to `path`, or to stdout without one
fn write_default(settings: &RenderSettings, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => settings.to_file(path),
        None => {
            println!("{}", settings.serialize()?);
            Ok(())
        }
    }
}
