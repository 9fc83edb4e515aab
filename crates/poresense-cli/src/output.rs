//! Text formatting for estimate and profile results.

use std::fmt::Write;

use poresense_core::{DeviceParams, ProfileSample, ResistanceBreakdown, SensingReport};

const RULE: &str = "******************************";

/// Parameter block printed ahead of an estimate.
pub fn format_parameters(params: &DeviceParams, molecule_diameter: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "length: {} nm", params.length);
    let _ = writeln!(out, "width: {} nm", params.width);
    let _ = writeln!(out, "pore_diameter: {} nm", params.pore_diameter);
    let _ = writeln!(out, "pore_height: {} nm", params.pore_height);
    let _ = writeln!(out, "molecule_diameter: {} nm", molecule_diameter);
    let _ = writeln!(out, "v_macro: {} V", params.v_macro);
    let _ = writeln!(out, "ids: {:e} A", params.ids);
    let _ = writeln!(out, "resistivity: {:.2e} Ohms/square", params.resistivity);
    let _ = writeln!(out, "r_contact: {:.2e} Ohms", params.r_contact);
    let _ = writeln!(out, "gate_slope: {:.2e} A/V", params.gate_slope);
    let _ = writeln!(out, "concentration_ratio: {}", params.concentration_ratio);
    let _ = writeln!(out, "{}", RULE);
    out
}

/// One evaluation of the resistor network, one quantity per line.
pub fn format_breakdown(label: &str, b: &ResistanceBreakdown) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (molecule {} nm):", label, b.molecule_diameter);
    let _ = writeln!(out, "  active radius  = {:.4e} nm", b.active_radius);
    let _ = writeln!(
        out,
        "  active extents = {:.4e} x {:.4e} nm",
        b.x_half_extent, b.y_half_extent
    );
    let _ = writeln!(out, "  r_active       = {:.4e} Ohms", b.r_active);
    if let Some(r_pre) = b.r_pre {
        let _ = writeln!(out, "  r_pre          = {:.4e} Ohms", r_pre);
    }
    if let Some(r_out) = b.r_out {
        let _ = writeln!(out, "  r_out          = {:.4e} Ohms", r_out);
    }
    let _ = writeln!(out, "  r_channel      = {:.4e} Ohms", b.r_channel);
    let _ = writeln!(out, "  r_total        = {:.4e} Ohms", b.total);
    out
}

/// Both evaluations followed by the relative change.
pub fn format_report(report: &SensingReport) -> String {
    let mut out = String::new();
    out.push_str(&format_breakdown("Molecule in pore", &report.on));
    out.push('\n');
    out.push_str(&format_breakdown("Empty pore", &report.off));
    out.push('\n');
    let _ = writeln!(out, "------------");
    let _ = writeln!(
        out,
        "Ratio: {:.2e} ({:.2}%)",
        report.relative_change,
        report.percent()
    );
    out
}

/// Two-column distance / voltage-drop table.
pub fn format_profile(samples: &[ProfileSample]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>14}{:>16}", "r (nm)", "dV (V)");
    let _ = writeln!(out, "{}", "-".repeat(30));
    for sample in samples {
        let _ = writeln!(out, "{:>14.4}{:>16.6e}", sample.distance, sample.voltage_drop_ratio);
    }
    out
}
