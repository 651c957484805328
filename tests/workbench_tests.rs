//! Workbench Tests
//!
//! Configuration store invariants and the analysis phase machine, driven
//! through the public workbench API.

use std::cell::Cell;

use quietroom::analysis::{AnalysisRequestor, AnalysisResult, ApiKey, GenerationRequest, GenerativeClient};
use quietroom::catalog::Catalog;
use quietroom::error::Result;
use quietroom::room::{Selection, Slot};
use quietroom::view::{render_report, ScoreBand, MISCONCEPTION_WARNING};
use quietroom::workbench::{AnalysisPhase, Completion, Workbench};

const STUDIO_REPLY: &str = r#"{
    "stc": 58,
    "analysis": "Heavy brick and a steel door make a strong shell.",
    "suggestions": ["Seal gaps", "Float the floor", "Add resilient channels"],
    "frequency_data": [
        {"label": "125Hz", "value": 40},
        {"label": "250Hz", "value": 46},
        {"label": "500Hz", "value": 53},
        {"label": "1000Hz", "value": 58},
        {"label": "2000Hz", "value": 61},
        {"label": "4000Hz", "value": 64}
    ]
}"#;

/// Always answers with the same JSON text
struct CannedService {
    text: &'static str,
    calls: Cell<usize>,
}

impl CannedService {
    fn new(text: &'static str) -> Self {
        Self {
            text,
            calls: Cell::new(0),
        }
    }
}

impl GenerativeClient for CannedService {
    fn model(&self) -> &str {
        "canned"
    }

    fn generate(&self, _key: &ApiKey, _request: &GenerationRequest) -> Result<Option<String>> {
        self.calls.set(self.calls.get() + 1);
        Ok(Some(self.text.to_string()))
    }
}

fn workbench(text: &'static str) -> Workbench<CannedService> {
    Workbench::new(
        Catalog::builtin(),
        AnalysisRequestor::new(ApiKey::new("key"), CannedService::new(text)),
    )
}

fn pick(wb: &Workbench<CannedService>, slot: Slot, id: &str) -> Selection {
    let catalog = wb.catalog();
    match slot {
        Slot::Source => Selection::Source(catalog.sound_source(id).unwrap().clone()),
        Slot::OuterWall => Selection::OuterWall(catalog.material(id).unwrap().clone()),
        Slot::CavityFill => Selection::CavityFill(catalog.material(id).unwrap().clone()),
        Slot::InnerWall => Selection::InnerWall(catalog.material(id).unwrap().clone()),
        Slot::Door => Selection::Door(catalog.material(id).unwrap().clone()),
        Slot::Window => Selection::Window(catalog.material(id).unwrap().clone()),
    }
}

fn select(wb: &mut Workbench<CannedService>, slot: Slot, id: &str) {
    let selection = pick(wb, slot, id);
    wb.select(selection);
}

#[test]
fn test_every_mutation_clears_analysis() {
    let mut wb = workbench(STUDIO_REPLY);
    select(&mut wb, Slot::OuterWall, "brick");

    let edits = [
        (Slot::CavityFill, "rockwool"),
        (Slot::Source, "violin"),
        (Slot::InnerWall, "mlv"),
        (Slot::Door, "solid_wood"),
        (Slot::Window, "double_glass"),
        (Slot::OuterWall, "plywood"),
        // Re-selecting the same material still counts as an edit
        (Slot::OuterWall, "plywood"),
    ];

    for (slot, id) in edits {
        wb.run_analysis().unwrap();
        assert!(wb.store().analysis().is_some());

        let revision = wb.store().revision();
        select(&mut wb, slot, id);

        assert!(wb.store().analysis().is_none(), "analysis survived edit of {:?}", slot);
        assert_eq!(wb.phase(), AnalysisPhase::Idle);
        assert_eq!(wb.store().revision(), revision + 1);
    }
}

#[test]
fn test_mutation_touches_only_its_slot() {
    let mut wb = workbench(STUDIO_REPLY);
    select(&mut wb, Slot::OuterWall, "brick");
    select(&mut wb, Slot::Door, "hollow_door");
    let before = wb.configuration().clone();

    select(&mut wb, Slot::Window, "single_glass");

    let after = wb.configuration();
    assert_eq!(after.source, before.source);
    assert_eq!(after.outer_wall, before.outer_wall);
    assert_eq!(after.door, before.door);
    assert_eq!(after.cavity_fill, None);
    assert_eq!(after.window.as_ref().unwrap().id, "single_glass");
}

#[test]
fn test_run_enabled_tracks_outer_wall_only() {
    let optional = [
        (Slot::CavityFill, "air"),
        (Slot::InnerWall, "drywall_sound"),
        (Slot::Door, "steel_acoustic"),
        (Slot::Window, "laminated_glass"),
    ];

    // Every subset of the other four slots, with and without an outer wall
    for mask in 0..(1u32 << optional.len()) {
        for with_outer in [false, true] {
            let mut wb = workbench(STUDIO_REPLY);
            for (bit, (slot, id)) in optional.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    select(&mut wb, *slot, id);
                }
            }
            if with_outer {
                select(&mut wb, Slot::OuterWall, "drywall_std");
            }
            assert_eq!(wb.run_enabled(), with_outer, "mask {:04b}", mask);
        }
    }
}

#[test]
fn test_pending_guard_and_stale_completion() {
    let mut wb = workbench(STUDIO_REPLY);
    select(&mut wb, Slot::OuterWall, "brick");

    let ticket = wb.begin_analysis().unwrap();
    assert!(wb.begin_analysis().is_err());

    let result = wb.requestor().analyze(&ticket.configuration);
    select(&mut wb, Slot::CavityFill, "fiberglass");

    assert_eq!(wb.complete_analysis(&ticket, result).unwrap(), Completion::Discarded);
    assert!(wb.store().analysis().is_none());
    assert!(!wb.is_pending());

    // A fresh run after the edit succeeds
    assert_eq!(wb.run_analysis().unwrap().stc, 58);
}

#[test]
fn test_studio_scenario() {
    let mut wb = workbench(STUDIO_REPLY);
    select(&mut wb, Slot::Source, "drums");
    select(&mut wb, Slot::OuterWall, "brick");
    select(&mut wb, Slot::CavityFill, "rockwool");
    select(&mut wb, Slot::InnerWall, "drywall_std");
    select(&mut wb, Slot::Door, "steel_acoustic");
    select(&mut wb, Slot::Window, "laminated_glass");

    let expected = AnalysisResult::from_json(STUDIO_REPLY).unwrap();
    let result = wb.run_analysis().unwrap().clone();

    assert_eq!(result, expected);
    assert_eq!(wb.store().analysis(), Some(&expected));
    assert_eq!(wb.requestor().client().calls.get(), 1);
    assert_eq!(ScoreBand::from_stc(result.stc), ScoreBand::Strong);
    match wb.phase() {
        AnalysisPhase::Settled { result: settled, .. } => assert_eq!(settled, &expected),
        other => panic!("expected settled phase, got {:?}", other),
    }

    let report = render_report(&result, wb.configuration());
    assert!(report.starts_with("STC 58 (strong)"));
    assert!(!report.contains(MISCONCEPTION_WARNING));

    // Stays until the next mutation
    select(&mut wb, Slot::Door, "hollow_door");
    assert!(wb.store().analysis().is_none());
}

#[test]
fn test_egg_cartons_warning_is_structural() {
    // The narrative never mentions egg cartons; the warning still shows.
    let mut wb = workbench(STUDIO_REPLY);
    select(&mut wb, Slot::OuterWall, "plywood");
    select(&mut wb, Slot::CavityFill, "egg_cartons");

    let result = wb.run_analysis().unwrap().clone();
    assert!(wb.configuration().has_misconception());
    assert!(render_report(&result, wb.configuration()).contains(MISCONCEPTION_WARNING));
}
