//! QuietRoom - Acoustic Design Workbench
//!
//! Students assemble a layered wall/door/window design for a music room and
//! get an AI-estimated Sound Transmission Class (STC) rating for it.
//!
//! # Architecture
//!
//! - `catalog`: static materials, sound sources and teaching concepts
//! - `room`: the design being edited and the analysis that belongs to it
//! - `analysis`: prompt synthesis and the call to the generative service,
//!   always answering with a result (real or fallback)
//! - `workbench`: Idle/Pending/Settled analysis phase around the store
//! - `view`: banding, schematic colours and text rendering

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod room;
pub mod settings;
pub mod view;
pub mod workbench;

pub use error::{QuietRoomError, Result};
