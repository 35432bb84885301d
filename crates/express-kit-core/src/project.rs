//! Project directory creation and base-template materialization.
//!
//! `new` scaffolds in two phases: [`create_project`] writes the pristine base
//! template for the chosen variant, then [`crate::pipeline::run_pipeline`]
//! customizes it. The precondition checks live here so nothing touches the
//! filesystem for an invalid target.
//!
//! ## Directory layout (JavaScript variant)
//!
//! ```text
//! <project>/
//! ├── package.json
//! ├── .env
//! ├── .gitignore
//! ├── README.md
//! ├── index.js
//! ├── routes/index.js
//! ├── lib/common.js
//! └── controllers/sampleController.js
//! ```
//!
//! The TypeScript variant nests sources under `src/` and adds `tsconfig.json`.

use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::plan::{GenerationPlan, LanguageVariant, OrmChoice};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// Base template files for a variant, as (relative path, content) pairs.
fn base_files(variant: LanguageVariant) -> &'static [(&'static str, &'static str)] {
    match variant {
        LanguageVariant::JavaScript => &[
            ("index.js", embedded::BASE_JS_INDEX),
            ("routes/index.js", embedded::BASE_JS_ROUTES),
            ("lib/common.js", embedded::BASE_JS_COMMON),
            (
                "controllers/sampleController.js",
                embedded::BASE_JS_CONTROLLER,
            ),
            ("package.json", embedded::BASE_JS_PACKAGE_JSON),
            (".env", embedded::BASE_JS_ENV),
            (".gitignore", embedded::BASE_JS_GITIGNORE),
        ],
        LanguageVariant::TypeScript => &[
            ("src/index.ts", embedded::BASE_TS_INDEX),
            ("src/routes/index.ts", embedded::BASE_TS_ROUTES),
            ("src/lib/common.ts", embedded::BASE_TS_COMMON),
            (
                "src/controllers/sampleController.ts",
                embedded::BASE_TS_CONTROLLER,
            ),
            ("package.json", embedded::BASE_TS_PACKAGE_JSON),
            ("tsconfig.json", embedded::BASE_TS_TSCONFIG),
            (".env", embedded::BASE_TS_ENV),
            (".gitignore", embedded::BASE_TS_GITIGNORE),
        ],
    }
}

/// Materialize the base template for the plan's variant into `project_dir`.
///
/// Fails with [`ScaffoldError::ProjectExists`] before writing anything if the
/// target already exists. Also renders the project README from the plan.
pub fn create_project(project_dir: &Path, plan: &GenerationPlan) -> Result<()> {
    if project_dir.exists() {
        return Err(ScaffoldError::ProjectExists(project_dir.to_path_buf()));
    }

    std::fs::create_dir_all(project_dir)?;

    for (relative_path, content) in base_files(plan.request.variant) {
        let path = project_dir.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
    }

    std::fs::write(project_dir.join("README.md"), render_readme(plan)?)?;

    Ok(())
}

/// Render the project README from the plan.
fn render_readme(plan: &GenerationPlan) -> Result<String> {
    let renderer = TemplateRenderer::new();
    let orm = plan.orm();
    let connection_var = orm.profile().map(|p| p.connection_var);
    let data = serde_json::json!({
        "app_name": plan.app_name(),
        "variant": plan.request.variant.display_name(),
        "orm": orm.display_name(),
        "prisma": orm == OrmChoice::Prisma,
        "connection_var": connection_var,
    });
    renderer.render(embedded::README_TMPL, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::GenerationRequest;

    fn plan(variant: LanguageVariant, orm: OrmChoice) -> GenerationPlan {
        GenerationPlan::resolve(GenerationRequest::new("demo", variant, orm).unwrap())
    }

    #[test]
    fn test_create_rejects_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        let result = create_project(dir.path(), &plan(LanguageVariant::JavaScript, OrmChoice::None));
        assert!(matches!(result, Err(ScaffoldError::ProjectExists(_))));
    }

    #[test]
    fn test_javascript_tree_is_complete() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("demo");
        create_project(&root, &plan(LanguageVariant::JavaScript, OrmChoice::None)).unwrap();

        for file in [
            "index.js",
            "routes/index.js",
            "lib/common.js",
            "controllers/sampleController.js",
            "package.json",
            ".env",
            ".gitignore",
            "README.md",
        ] {
            assert!(root.join(file).exists(), "missing {file}");
        }
    }

    #[test]
    fn test_typescript_tree_nests_sources() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("demo");
        create_project(&root, &plan(LanguageVariant::TypeScript, OrmChoice::None)).unwrap();

        assert!(root.join("src/index.ts").exists());
        assert!(root.join("src/lib/common.ts").exists());
        assert!(root.join("tsconfig.json").exists());
        assert!(!root.join("index.js").exists());
    }

    #[test]
    fn test_readme_names_the_app_and_choices() {
        let readme = render_readme(&plan(LanguageVariant::TypeScript, OrmChoice::Prisma)).unwrap();
        assert!(readme.starts_with("# demo"));
        assert!(readme.contains("TypeScript"));
        assert!(readme.contains("Prisma"));
        assert!(readme.contains("npx prisma migrate dev --name init"));
        assert!(readme.contains("DATABASE_URL"));
    }

    #[test]
    fn test_readme_without_orm_skips_connection_section() {
        let readme = render_readme(&plan(LanguageVariant::JavaScript, OrmChoice::None)).unwrap();
        assert!(!readme.contains("Database connection"));
        assert!(!readme.contains("prisma"));
    }
}
