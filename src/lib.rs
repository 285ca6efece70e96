//! Orbis content — rooms, entities, and maze generation for the Orbis
//! world engine.
//!
//! Produces entity definitions (rooms with directional exits, carved by a
//! randomized depth-first-search maze generator) and hands the finished set
//! to the host engine's loader at startup. The engine itself is an external
//! collaborator; this crate only defines content.

pub mod content;
pub mod core;
pub mod schema;
