//! CLI argument parsing.
//!
//! Hand-rolled parser that accepts any iterator of strings, so parsing
//! logic is fully testable without touching `std::env`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Compute orbital parameters for a mass and altitude
    Compute {
        /// Satellite mass (kg).
        mass_kg: f64,
        /// Orbit altitude (km).
        altitude_km: f64,
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Classify an altitude into its orbit band
    Classify {
        /// Orbit altitude (km).
        altitude_km: f64,
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Show the adaptive display-scaling table for a window size
    Scale {
        /// Canvas width (px).
        width_px: f64,
        /// Canvas height (px).
        height_px: f64,
    },
    /// List the reference-satellite presets
    Presets {
        /// Emit JSON instead of text.
        json: bool,
    },
    /// Run the web dashboard
    Serve {
        /// Listen port override.
        port: Option<u16>,
        /// Optional YAML configuration file.
        config_path: Option<PathBuf>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "compute" => Self::parse_compute_command(args),
            "classify" => Self::parse_classify_command(args),
            "scale" => Self::parse_scale_command(args),
            "presets" => Command::Presets {
                json: args.iter().any(|a| a == "--json"),
            },
            "serve" => Self::parse_serve_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_compute_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'compute' requires <mass_kg> <altitude_km>");
            return Command::Help;
        }

        let (Ok(mass_kg), Ok(altitude_km)) = (args[2].parse(), args[3].parse()) else {
            eprintln!("Error: mass and altitude must be numbers");
            return Command::Help;
        };

        Command::Compute {
            mass_kg,
            altitude_km,
            json: args.iter().any(|a| a == "--json"),
        }
    }

    fn parse_classify_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'classify' requires <altitude_km>");
            return Command::Help;
        }

        let Ok(altitude_km) = args[2].parse() else {
            eprintln!("Error: altitude must be a number");
            return Command::Help;
        };

        Command::Classify {
            altitude_km,
            json: args.iter().any(|a| a == "--json"),
        }
    }

    fn parse_scale_command(args: &[String]) -> Command {
        let mut width_px = 1400.0;
        let mut height_px = 900.0;

        let mut i = 2;
        while i < args.len() {
            if args[i] == "--window" && i + 1 < args.len() {
                if let Some((w, h)) = args[i + 1].split_once('x') {
                    if let (Ok(w), Ok(h)) = (w.parse(), h.parse()) {
                        width_px = w;
                        height_px = h;
                    }
                }
                i += 2;
            } else {
                i += 1;
            }
        }

        Command::Scale {
            width_px,
            height_px,
        }
    }

    fn parse_serve_command(args: &[String]) -> Command {
        let mut port = None;
        let mut config_path = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--port" => {
                    if i + 1 < args.len() {
                        if let Ok(p) = args[i + 1].parse() {
                            port = Some(p);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--config" => {
                    if i + 1 < args.len() {
                        config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Serve { port, config_path }
    }
}
