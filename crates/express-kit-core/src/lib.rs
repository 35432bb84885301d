//! Core library for the express-kit scaffolder.
//!
//! Generates a runnable Express backend service from an embedded base template,
//! customized along two axes: language variant (JavaScript or TypeScript) and
//! data-access library (Mongoose, Prisma, Sequelize, or none).
//!
//! The interesting part is the customization pipeline in [`pipeline`]: after the
//! base template is materialized, the dependency manifest, the generated db
//! module, the entry point, and the env file are each rewritten so that every
//! (variant, ORM) combination yields an internally consistent project. The CLI
//! crate (`express-kit`) owns the prompts and terminal output and delegates here.

pub mod entrypoint;
pub mod envfile;
pub mod error;
pub mod manifest;
pub mod orm;
pub mod pipeline;
pub mod plan;
pub mod prereq;
pub mod project;
pub mod synthesize;
pub mod templates;
