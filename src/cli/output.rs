//! CLI output formatting.
//!
//! All human-readable printing lives here; `commands` stays free of
//! formatting so both are easy to test.

use crate::orbit::analysis::MissionAnalysis;
use crate::orbit::classify::OrbitClassification;
use crate::orbit::physics::OrbitalParameters;
use crate::orbit::presets::SatellitePreset;
use crate::orbit::scale::{scale_for_display, ScaleConfig};

/// Print version information.
pub fn print_version() {
    println!("satorb {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"satorb - interactive satellite-orbit simulator

USAGE:
    satorb <COMMAND> [OPTIONS]

COMMANDS:
    compute <mass_kg> <altitude_km>   Compute orbital parameters
        --json                        Emit JSON instead of text

    classify <altitude_km>            Name the orbit band for an altitude
        --json                        Emit JSON instead of text

    scale                             Show the display-scaling table
        --window <WxH>                Canvas size in pixels (default 1400x900)

    presets                           List reference-satellite presets
        --json                        Emit JSON instead of text

    serve                             Run the web dashboard (feature 'web')
        --port <N>                    Listen port (default 8080)
        --config <file.yaml>          Load a YAML configuration

    help                              Show this help message
    version                           Show version information

FRONT ENDS:
    orbit_view                        Animated terminal display (feature 'tui')
    control_panel                     Parameter panel with live orbit (feature 'tui')

EXAMPLES:
    satorb compute 1000 400
    satorb classify 35786
    satorb compute 420000 408 --json
    satorb serve --port 9000
"
    );
}

/// Build the text report for one computed orbit.
#[must_use]
pub fn orbit_report(
    params: &OrbitalParameters,
    class: &OrbitClassification,
    analysis: &MissionAnalysis,
) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "Orbit: {} ({})", class.band.label(), class.full_name);
    let _ = writeln!(out, "  {}", class.description);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Orbital velocity:   {:>10.1} m/s  ({:.2} km/s)",
        params.velocity_ms,
        params.velocity_kms()
    );
    let _ = writeln!(
        out,
        "  Orbital period:     {:>10.1} s    ({:.2} h / {:.1} min)",
        params.period_s,
        params.period_hours(),
        params.period_minutes()
    );
    let _ = writeln!(
        out,
        "  Centripetal force:  {:>10.1} N",
        params.centripetal_force_n
    );
    let _ = writeln!(
        out,
        "  Orbital energy:     {:>10.3e} J",
        params.orbital_energy_j
    );
    let _ = writeln!(
        out,
        "  Angular velocity:   {:>10.3e} rad/s",
        params.angular_velocity_rad_s
    );
    let _ = writeln!(
        out,
        "  Escape velocity:    {:>10.1} m/s  ({:.2} km/s)",
        params.escape_velocity_ms,
        params.escape_velocity_kms()
    );
    let _ = writeln!(
        out,
        "  Orbital radius:     {:>10.1} km",
        params.orbital_radius_km
    );
    let _ = writeln!(out, "  Launch delta-v:     {:>10.1} m/s", params.delta_v_ms);
    let _ = writeln!(
        out,
        "  Gravity at orbit:   {:>10.2} m/s²",
        params.g_at_altitude_ms2
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  Launch cost (est):  ${:.0}",
        analysis.launch_cost_usd
    );
    let _ = writeln!(
        out,
        "  Time on orbit:      {}",
        analysis.duration.label()
    );
    let _ = writeln!(
        out,
        "  Ground coverage:    {:.0} km²",
        analysis.ground_coverage_km2
    );

    if !analysis.risk_factors.is_empty() {
        let _ = writeln!(out, "\n  Risks:");
        for risk in &analysis.risk_factors {
            let _ = writeln!(out, "    - {risk}");
        }
    }
    if !analysis.recommendations.is_empty() {
        let _ = writeln!(out, "\n  Recommendations:");
        for rec in &analysis.recommendations {
            let _ = writeln!(out, "    - {rec}");
        }
    }

    out
}

/// Build the text report for a classification.
#[must_use]
pub fn classification_report(altitude_km: f64, class: &OrbitClassification) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} km -> {} ({})",
        altitude_km,
        class.band.label(),
        class.full_name
    );
    let _ = writeln!(out, "  {}", class.description);
    let _ = writeln!(out, "  Stable: {}", if class.band.is_stable() { "yes" } else { "no" });
    let _ = writeln!(out, "  Applications: {}", class.applications.join(", "));
    let _ = writeln!(out, "  Challenges:   {}", class.challenges.join(", "));
    let _ = writeln!(out, "  Advantages:   {}", class.advantages.join(", "));
    let _ = writeln!(out, "  Examples:     {}", class.examples.join(", "));
    out
}

/// Build the display-scaling table the `scale` command prints.
#[must_use]
pub fn scale_table(scale: &ScaleConfig) -> String {
    use std::fmt::Write;

    let altitudes = [200.0, 400.0, 1000.0, 5000.0, 20_200.0, 35_786.0, 50_000.0, 100_000.0];

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Planet radius {:.0} px, budget {:.0} px, linear below {:.0} km",
        scale.base_radius_px, scale.available_px, scale.linear_threshold_km
    );
    let _ = writeln!(out, "{:-<48}", "");
    for altitude_km in altitudes {
        let px = scale_for_display(altitude_km, scale);
        let _ = writeln!(out, "  {altitude_km:>9.0} km  ->  {px:>7.1} px");
    }
    out
}

/// Build the preset table.
#[must_use]
pub fn preset_table(presets: &[SatellitePreset]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<14} {:>12} {:>12}  {}",
        "Name", "Altitude km", "Mass kg", "Purpose"
    );
    let _ = writeln!(out, "{:-<58}", "");
    for preset in presets {
        let _ = writeln!(
            out,
            "  {:<14} {:>12.0} {:>12.0}  {}",
            preset.name, preset.altitude_km, preset.mass_kg, preset.purpose
        );
    }
    out
}
