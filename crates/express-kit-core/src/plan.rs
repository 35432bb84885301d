//! Generation requests and the resolved plan derived from them.
//!
//! [`GenerationRequest`] captures the user's choices once, validated at
//! construction; [`GenerationPlan::resolve`] derives every variant-dependent
//! path and syntax decision from it. The plan is the single source of truth
//! for file extensions, source roots, and import flavor; no other module
//! recomputes them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Surface syntax of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageVariant {
    /// CommonJS, sources at the project root, no build step.
    JavaScript,
    /// ES modules, sources under `src/`, compiled with `tsc`.
    TypeScript,
}

impl LanguageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
        }
    }

    /// Resolve a variant by name. Accepts the short extension form too.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "javascript" | "js" => Some(Self::JavaScript),
            "typescript" | "ts" => Some(Self::TypeScript),
            _ => None,
        }
    }
}

/// Which data-access library to wire into the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrmChoice {
    /// No database wiring; the template is left as copied.
    None,
    /// MongoDB via the Mongoose ODM.
    Mongoose,
    /// Prisma's schema-first generated client.
    Prisma,
    /// Sequelize with a PostgreSQL driver.
    Sequelize,
}

impl OrmChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mongoose => "mongoose",
            Self::Prisma => "prisma",
            Self::Sequelize => "sequelize",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mongoose => "Mongoose",
            Self::Prisma => "Prisma",
            Self::Sequelize => "Sequelize",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "mongoose" => Some(Self::Mongoose),
            "prisma" => Some(Self::Prisma),
            "sequelize" => Some(Self::Sequelize),
            _ => None,
        }
    }
}

/// Import/export syntax flavor of generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportStyle {
    /// `require(...)` / `module.exports`.
    CommonJs,
    /// `import ... from` / `export`.
    EsModules,
}

/// The user's choices for one generation run. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    app_name: String,
    pub variant: LanguageVariant,
    pub orm: OrmChoice,
}

impl GenerationRequest {
    /// Validate and construct a request.
    ///
    /// The app name becomes both the target directory and the manifest's
    /// package name, so it must be non-empty after trimming and restricted to
    /// ASCII alphanumerics, `-` and `_`. Rejection happens here, before any
    /// file operation.
    pub fn new(app_name: &str, variant: LanguageVariant, orm: OrmChoice) -> Result<Self> {
        let trimmed = app_name.trim();
        if trimmed.is_empty() {
            return Err(ScaffoldError::InvalidAppName(app_name.to_string()));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ScaffoldError::InvalidAppName(app_name.to_string()));
        }
        Ok(Self {
            app_name: trimmed.to_string(),
            variant,
            orm,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

/// Read-only view of a request with every variant-dependent decision resolved.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub request: GenerationRequest,
    /// Extension of generated source files, without the dot.
    pub file_extension: &'static str,
    /// Directory holding sources, relative to the project root ("" = root).
    pub source_root: &'static str,
    /// Directory the db module is written into, relative to the project root.
    pub lib_dir: &'static str,
    pub import_style: ImportStyle,
}

impl GenerationPlan {
    /// Derive the plan. Total over the closed [`LanguageVariant`] enum.
    pub fn resolve(request: GenerationRequest) -> Self {
        match request.variant {
            LanguageVariant::JavaScript => Self {
                request,
                file_extension: "js",
                source_root: "",
                lib_dir: "lib",
                import_style: ImportStyle::CommonJs,
            },
            LanguageVariant::TypeScript => Self {
                request,
                file_extension: "ts",
                source_root: "src",
                lib_dir: "src/lib",
                import_style: ImportStyle::EsModules,
            },
        }
    }

    pub fn app_name(&self) -> &str {
        self.request.app_name()
    }

    pub fn orm(&self) -> OrmChoice {
        self.request.orm
    }

    /// Entry point path relative to the project root.
    pub fn entry_point_path(&self) -> PathBuf {
        PathBuf::from(self.source_root).join(format!("index.{}", self.file_extension))
    }

    /// Generated db module path relative to the project root.
    pub fn db_module_path(&self) -> PathBuf {
        PathBuf::from(self.lib_dir).join(format!("db.{}", self.file_extension))
    }

    /// Module specifier the entry point uses to import the db module.
    ///
    /// Both variants keep the entry point adjacent to the lib directory, so
    /// the specifier is the same; it is fixed here so the entry-point patcher
    /// never derives paths on its own.
    pub fn db_import_specifier(&self) -> &'static str {
        "./lib/db"
    }
}
