//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a file from the workspace's `templates/` directory via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/express-kit-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!`
//! path here, and do NOT edit the generated-source templates casually: their
//! text is what ends up in users' projects, and tests compare it byte-for-byte.

// -------------------------------------------------------
// Base project tree: JavaScript variant
// -------------------------------------------------------

pub const BASE_JS_INDEX: &str = include_str!("../../../../templates/base/javascript/index.js");
pub const BASE_JS_ROUTES: &str =
    include_str!("../../../../templates/base/javascript/routes/index.js");
pub const BASE_JS_COMMON: &str = include_str!("../../../../templates/base/javascript/lib/common.js");
pub const BASE_JS_CONTROLLER: &str =
    include_str!("../../../../templates/base/javascript/controllers/sampleController.js");
pub const BASE_JS_PACKAGE_JSON: &str =
    include_str!("../../../../templates/base/javascript/package.json");
pub const BASE_JS_ENV: &str = include_str!("../../../../templates/base/javascript/.env");
pub const BASE_JS_GITIGNORE: &str = include_str!("../../../../templates/base/javascript/.gitignore");

// -------------------------------------------------------
// Base project tree: TypeScript variant
// -------------------------------------------------------

pub const BASE_TS_INDEX: &str = include_str!("../../../../templates/base/typescript/src/index.ts");
pub const BASE_TS_ROUTES: &str =
    include_str!("../../../../templates/base/typescript/src/routes/index.ts");
pub const BASE_TS_COMMON: &str =
    include_str!("../../../../templates/base/typescript/src/lib/common.ts");
pub const BASE_TS_CONTROLLER: &str =
    include_str!("../../../../templates/base/typescript/src/controllers/sampleController.ts");
pub const BASE_TS_PACKAGE_JSON: &str =
    include_str!("../../../../templates/base/typescript/package.json");
pub const BASE_TS_TSCONFIG: &str =
    include_str!("../../../../templates/base/typescript/tsconfig.json");
pub const BASE_TS_ENV: &str = include_str!("../../../../templates/base/typescript/.env");
pub const BASE_TS_GITIGNORE: &str = include_str!("../../../../templates/base/typescript/.gitignore");

// -------------------------------------------------------
// Data-access module sources
// -------------------------------------------------------

pub const MONGOOSE_DB_JS: &str = include_str!("../../../../templates/orm/mongoose/db.js");
pub const MONGOOSE_DB_TS: &str = include_str!("../../../../templates/orm/mongoose/db.ts");
pub const PRISMA_DB_JS: &str = include_str!("../../../../templates/orm/prisma/db.js");
pub const PRISMA_DB_TS: &str = include_str!("../../../../templates/orm/prisma/db.ts");
pub const PRISMA_SCHEMA: &str = include_str!("../../../../templates/orm/prisma/schema.prisma");
pub const SEQUELIZE_DB_JS: &str = include_str!("../../../../templates/orm/sequelize/db.js");
pub const SEQUELIZE_DB_TS: &str = include_str!("../../../../templates/orm/sequelize/db.ts");

/// Entry-point bootstrap appended for ORMs with an explicit connect step.
/// Valid in both variants; expects `connectDB` and `app` in scope.
pub const BOOTSTRAP_BLOCK: &str = include_str!("../../../../templates/orm/bootstrap.js");

// -------------------------------------------------------
// Project-level rendered templates
// -------------------------------------------------------

pub const README_TMPL: &str = include_str!("../../../../templates/project/README.md.tmpl");
