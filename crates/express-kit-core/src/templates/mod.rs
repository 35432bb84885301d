//! Template system for express-kit project scaffolding.
//!
//! The base project trees and the per-ORM module sources are embedded into the
//! binary at compile time via [`include_str!`] in the [`embedded`] module.
//! Files with variables (currently the generated README) are rendered with
//! Handlebars via [`renderer::TemplateRenderer`]; everything else is written
//! verbatim.
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/` at the workspace root
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Run `cargo build` to verify the path resolves
//!
//! **Warning**: files in `templates/` and constants in [`embedded`] must stay
//! in sync. The `include_str!` paths are relative to this file and checked at
//! compile time.

pub mod embedded;
pub mod renderer;
