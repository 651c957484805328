//! Plain-text rendering of the catalog, the design summary and results

use std::fmt::Write;

use super::score::{cost_meter, progress_fraction, LossBand, ScoreBand};
use crate::analysis::AnalysisResult;
use crate::catalog::{Catalog, MaterialCategory};
use crate::room::{RoomConfiguration, Slot};

const NOT_SELECTED: &str = "Not selected";
const BAR_WIDTH: usize = 28;

/// Shown with any result for a design that uses a known ineffective material
pub const MISCONCEPTION_WARNING: &str = "Warning: experiments show egg cartons are flammable and provide almost no real \
     sound isolation. Please switch to a proper material!";

pub fn render_summary(config: &RoomConfiguration) -> String {
    let mut out = String::from("Current configuration\n");
    for slot in Slot::ALL {
        let _ = writeln!(
            out,
            "  {:<12} {}",
            slot.label(),
            config.name_of(slot).unwrap_or(NOT_SELECTED)
        );
    }
    if config.outer_wall.is_none() {
        out.push_str("\nChoose an outer wall layer to start building your soundproof room.\n");
    }
    out
}

/// Full analysis report
///
/// `config` is the design the result belongs to; it decides whether the
/// misconception warning is shown.
pub fn render_report(result: &AnalysisResult, config: &RoomConfiguration) -> String {
    let band = ScoreBand::from_stc(result.stc);
    let filled = (progress_fraction(result.stc) * BAR_WIDTH as f64).round() as usize;

    let mut out = String::new();
    let _ = writeln!(out, "STC {} ({})", result.stc, band.label());
    let _ = writeln!(
        out,
        "  weak (0) [{}{}] professional studio (60+)",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    );

    let _ = writeln!(out, "\nAnalysis\n  {}", result.analysis.replace('\n', "\n  "));

    out.push_str("\nFrequency response (transmission loss)\n");
    let peak = result
        .frequency_data
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    for point in &result.frequency_data {
        let width = if peak > 0.0 {
            ((point.value.max(0.0) / peak) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:>7} {:>6.1} dB {:<pad$} {:?}",
            point.label,
            point.value,
            "█".repeat(width),
            LossBand::from_db(point.value),
            pad = BAR_WIDTH
        );
    }

    out.push_str("\nSuggestions\n");
    for (i, suggestion) in result.suggestions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, suggestion);
    }

    if config.has_misconception() {
        let _ = writeln!(out, "\n{}", MISCONCEPTION_WARNING);
    }
    out
}

pub fn render_catalog(catalog: &Catalog, category: Option<MaterialCategory>) -> String {
    let categories: Vec<MaterialCategory> = match category {
        Some(c) => vec![c],
        None => MaterialCategory::ALL.to_vec(),
    };

    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{} ({})", category.description(), category);
        for m in catalog.materials_by_category(category) {
            let _ = writeln!(
                out,
                "  {:<16} {:<26} cost {}  STC base +{}",
                m.id,
                m.name,
                cost_meter(m.cost_index),
                m.stc_base
            );
            let _ = writeln!(out, "  {:<16} {}", "", m.description);
        }
        out.push('\n');
    }
    out
}

pub fn render_sources(catalog: &Catalog) -> String {
    let mut out = String::new();
    for s in catalog.sound_sources() {
        let _ = writeln!(out, "{} {:<8} {:<12} {} dB", s.icon, s.id, s.name, s.decibels);
        let _ = writeln!(out, "   Challenge: {}", s.description);
    }
    out
}

pub fn render_concepts(catalog: &Catalog) -> String {
    let mut out = String::new();
    for c in catalog.concepts() {
        let _ = writeln!(out, "{}\n  {}\n", c.title, c.content);
    }
    out.push_str(
        "What is STC?\n  Sound Transmission Class is an integer rating of how well a partition \
         reduces airborne sound. Higher is better. Blocking normal speech takes about STC 30-40; \
         loud instruments such as drums usually need STC 60 or more.\n",
    );
    out
}
