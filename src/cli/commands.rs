//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::{info, warn};

use super::DesignArgs;
use crate::analysis::{build_prompt, AnalysisRequestor, GenerativeClient};
use crate::catalog::{Catalog, MaterialCategory};
use crate::error::{QuietRoomError, Result};
use crate::room::{RoomConfiguration, Selection};
use crate::settings::AnalysisSettings;
use crate::view::{self, Schematic};
use crate::workbench::Workbench;

/// Resolve the catalog ids of a design into slot selections
pub fn design_selections(catalog: &Catalog, design: &DesignArgs) -> Result<Vec<Selection>> {
    let mut selections = vec![Selection::Source(catalog.sound_source(&design.source)?.clone())];

    let material = |category: MaterialCategory, id: &Option<String>| -> Result<Option<_>> {
        id.as_deref()
            .map(|id| catalog.material_in(category, id).cloned())
            .transpose()
    };

    if let Some(m) = material(MaterialCategory::WallLayer, &design.outer)? {
        selections.push(Selection::OuterWall(m));
    }
    if let Some(m) = material(MaterialCategory::Insulation, &design.cavity)? {
        selections.push(Selection::CavityFill(m));
    }
    if let Some(m) = material(MaterialCategory::WallLayer, &design.inner)? {
        selections.push(Selection::InnerWall(m));
    }
    if let Some(m) = material(MaterialCategory::Door, &design.door)? {
        selections.push(Selection::Door(m));
    }
    if let Some(m) = material(MaterialCategory::Window, &design.window)? {
        selections.push(Selection::Window(m));
    }

    Ok(selections)
}

/// Build a standalone configuration from design flags
pub fn design_configuration(catalog: &Catalog, design: &DesignArgs) -> Result<RoomConfiguration> {
    let mut config = RoomConfiguration::default();
    for selection in design_selections(catalog, design)? {
        config.apply(selection);
    }
    Ok(config)
}

/// List materials.
pub fn list_materials(category: Option<&str>) -> Result<()> {
    let category = category
        .map(|name| {
            MaterialCategory::from_name(name).ok_or_else(|| QuietRoomError::UnknownCategory {
                name: name.to_string(),
            })
        })
        .transpose()?;

    print!("{}", view::render_catalog(&Catalog::builtin(), category));
    Ok(())
}

/// List sound sources.
pub fn list_sources() -> Result<()> {
    print!("{}", view::render_sources(&Catalog::builtin()));
    Ok(())
}

/// Show educational concepts.
pub fn show_concepts() -> Result<()> {
    print!("{}", view::render_concepts(&Catalog::builtin()));
    Ok(())
}

/// Print the analysis prompt without contacting the service.
pub fn print_prompt(design: &DesignArgs) -> Result<()> {
    let config = design_configuration(&Catalog::builtin(), design)?;
    println!("{}", build_prompt(&config));
    Ok(())
}

/// Print the configuration summary and schematic.
pub fn preview(design: &DesignArgs) -> Result<()> {
    let config = design_configuration(&Catalog::builtin(), design)?;
    println!("{}", view::render_summary(&config));
    print!("{}", Schematic::of(&config).render());
    Ok(())
}

/// Apply the design to a workbench and run one analysis.
pub fn run_design<C: GenerativeClient>(workbench: &mut Workbench<C>, design: &DesignArgs) -> Result<()> {
    for selection in design_selections(workbench.catalog(), design)? {
        workbench.select(selection);
    }
    workbench.run_analysis()?;
    Ok(())
}

/// Estimate the STC of a design.
pub fn analyze(design: &DesignArgs, json: bool, settings_path: Option<&Path>) -> Result<()> {
    let settings = AnalysisSettings::load(settings_path)?;
    info!("Using model {} at {}", settings.model, settings.endpoint);

    let requestor = AnalysisRequestor::from_settings(&settings);
    if !requestor.has_credential() {
        let err = QuietRoomError::MissingCredential;
        warn!("{}; showing fallback analysis", err);
        for suggestion in err.recovery_suggestions() {
            warn!("  {}", suggestion);
        }
    }

    let mut workbench = Workbench::with_gemini(requestor);
    run_design(&mut workbench, design)?;

    let store = workbench.store();
    let result = store.analysis().ok_or(QuietRoomError::AnalysisNotReady)?;

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", view::render_summary(store.configuration()));
        print!("{}", view::render_report(result, store.configuration()));
    }

    Ok(())
}
