//! Presentation helpers
//!
//! Banding, schematic colours and text rendering shared by the CLI and any
//! other front end.

mod report;
mod schematic;
mod score;

pub use report::{
    render_catalog, render_concepts, render_report, render_sources, render_summary,
    MISCONCEPTION_WARNING,
};
pub use schematic::{LayerPaint, Schematic, DEFAULT_SOURCE_ICON};
pub use score::{cost_meter, progress_fraction, LossBand, ScoreBand, STC_SCALE_MAX};
