//! CLI command execution.

use std::process::ExitCode;

use crate::cli::args::Command;
use crate::cli::output;
use crate::error::SatResult;
use crate::orbit::analysis::MissionAnalysis;
use crate::orbit::classify::classify_orbit;
use crate::orbit::physics::{OrbitRequest, OrbitalParameters};
use crate::orbit::presets::PRESETS;
use crate::orbit::scale::ScaleConfig;

/// Execute a parsed command.
#[must_use]
pub fn execute(command: &Command) -> ExitCode {
    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> SatResult<()> {
    match command {
        Command::Compute {
            mass_kg,
            altitude_km,
            json,
        } => run_compute(*mass_kg, *altitude_km, *json),
        Command::Classify { altitude_km, json } => {
            run_classify(*altitude_km, *json);
            Ok(())
        }
        Command::Scale {
            width_px,
            height_px,
        } => {
            let scale = ScaleConfig::for_canvas(*width_px, *height_px);
            print!("{}", output::scale_table(&scale));
            Ok(())
        }
        Command::Presets { json } => run_presets(*json),
        Command::Serve { port, config_path } => run_serve(*port, config_path.as_deref()),
        Command::Help => {
            output::print_help();
            Ok(())
        }
        Command::Version => {
            output::print_version();
            Ok(())
        }
    }
}

fn run_compute(mass_kg: f64, altitude_km: f64, json: bool) -> SatResult<()> {
    let request = OrbitRequest::new(mass_kg, altitude_km)?;
    let params = OrbitalParameters::compute(&request);
    let class = classify_orbit(request.altitude().as_km());
    let analysis = MissionAnalysis::assess(&request);

    if json {
        let payload = serde_json::json!({
            "request": { "mass_kg": mass_kg, "altitude_km": request.altitude().as_km() },
            "parameters": params,
            "classification": class,
            "analysis": analysis,
        });
        println!("{payload}");
    } else {
        print!("{}", output::orbit_report(&params, &class, &analysis));
    }
    Ok(())
}

fn run_classify(altitude_km: f64, json: bool) {
    let class = classify_orbit(altitude_km);
    if json {
        println!("{}", serde_json::json!(class));
    } else {
        print!("{}", output::classification_report(altitude_km, &class));
    }
}

fn run_presets(json: bool) -> SatResult<()> {
    if json {
        println!("{}", serde_json::json!(PRESETS));
    } else {
        print!("{}", output::preset_table(PRESETS));
    }
    Ok(())
}

#[cfg(feature = "web")]
fn run_serve(port: Option<u16>, config_path: Option<&std::path::Path>) -> SatResult<()> {
    use crate::config::VizConfig;
    use crate::visualization::web::WebVisualization;

    let mut config = match config_path {
        Some(path) => VizConfig::load(path)?,
        None => VizConfig::default(),
    };
    if let Some(port) = port {
        config.web.port = port;
    }

    let viz = WebVisualization::new(
        config.web.clone(),
        config.input.clone(),
        config.scale_config(),
    );
    println!("satorb dashboard listening on http://0.0.0.0:{}", viz.port());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(viz.serve())
}

#[cfg(not(feature = "web"))]
fn run_serve(_port: Option<u16>, _config_path: Option<&std::path::Path>) -> SatResult<()> {
    Err(crate::error::SatError::config(
        "web dashboard not compiled in; rebuild with --features web",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_succeeds() {
        let command = Command::Compute {
            mass_kg: 1000.0,
            altitude_km: 400.0,
            json: false,
        };
        assert!(run(&command).is_ok());
    }

    #[test]
    fn test_compute_json_succeeds() {
        let command = Command::Compute {
            mass_kg: 2000.0,
            altitude_km: 20_200.0,
            json: true,
        };
        assert!(run(&command).is_ok());
    }

    #[test]
    fn test_compute_rejects_bad_mass() {
        let command = Command::Compute {
            mass_kg: -1.0,
            altitude_km: 400.0,
            json: false,
        };
        let result = run(&command);
        assert!(result.is_err());
        assert!(matches!(
            result,
            Err(crate::error::SatError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_classify_succeeds() {
        let command = Command::Classify {
            altitude_km: 35_786.0,
            json: false,
        };
        assert!(run(&command).is_ok());
    }

    #[test]
    fn test_scale_succeeds() {
        let command = Command::Scale {
            width_px: 800.0,
            height_px: 600.0,
        };
        assert!(run(&command).is_ok());
    }

    #[test]
    fn test_presets_succeed() {
        assert!(run(&Command::Presets { json: false }).is_ok());
        assert!(run(&Command::Presets { json: true }).is_ok());
    }

    #[test]
    fn test_help_and_version_succeed() {
        assert!(run(&Command::Help).is_ok());
        assert!(run(&Command::Version).is_ok());
    }
}
