//! Data-access module synthesis.
//!
//! Produces the literal source of the db connection/client module for the
//! chosen ORM, plus any auxiliary file the library requires (Prisma's schema).
//! Output is a pure function of (plan, choice): the templates are embedded
//! constants with no variables, so identical inputs yield byte-identical
//! artifacts.

use std::path::PathBuf;

use crate::orm::OrmProfile;
use crate::plan::GenerationPlan;

/// A file produced by the pipeline: where it goes and exactly what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Path relative to the project root.
    pub relative_path: PathBuf,
    pub content: String,
}

/// The synthesizer's output for one concrete ORM choice.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// The db connection/client module, at the plan's lib path.
    pub module: GeneratedArtifact,
    /// Auxiliary schema file, if the library requires one.
    pub schema: Option<GeneratedArtifact>,
}

/// Render the db module (and schema, if any) for the plan's ORM choice.
///
/// Returns `None` for [`crate::plan::OrmChoice::None`]: the orchestrator skips
/// this step entirely rather than writing an empty module.
pub fn synthesize(plan: &GenerationPlan) -> Option<Synthesis> {
    let profile: &OrmProfile = plan.orm().profile()?;

    let module = GeneratedArtifact {
        relative_path: plan.db_module_path(),
        content: profile.module_source(plan.import_style).to_string(),
    };

    let schema = profile
        .auxiliary
        .map(|(relative_path, content)| GeneratedArtifact {
            relative_path: PathBuf::from(relative_path),
            content: content.to_string(),
        });

    Some(Synthesis { module, schema })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{GenerationRequest, LanguageVariant, OrmChoice};

    fn plan(variant: LanguageVariant, orm: OrmChoice) -> GenerationPlan {
        GenerationPlan::resolve(GenerationRequest::new("demo", variant, orm).unwrap())
    }

    #[test]
    fn test_none_synthesizes_nothing() {
        assert!(synthesize(&plan(LanguageVariant::JavaScript, OrmChoice::None)).is_none());
        assert!(synthesize(&plan(LanguageVariant::TypeScript, OrmChoice::None)).is_none());
    }

    #[test]
    fn test_mongoose_javascript_module() {
        let synthesis =
            synthesize(&plan(LanguageVariant::JavaScript, OrmChoice::Mongoose)).unwrap();
        assert_eq!(
            synthesis.module.relative_path,
            PathBuf::from("lib/db.js")
        );
        assert!(synthesis.module.content.contains("module.exports = { connectDB }"));
        assert!(synthesis.module.content.contains("MONGO_URI"));
        assert!(synthesis.module.content.contains("process.exit(1)"));
        assert!(synthesis.schema.is_none());
    }

    #[test]
    fn test_mongoose_typescript_module() {
        let synthesis =
            synthesize(&plan(LanguageVariant::TypeScript, OrmChoice::Mongoose)).unwrap();
        assert_eq!(
            synthesis.module.relative_path,
            PathBuf::from("src/lib/db.ts")
        );
        assert!(synthesis
            .module
            .content
            .contains("export async function connectDB(): Promise<void>"));
    }

    #[test]
    fn test_prisma_module_follows_import_style() {
        let js = synthesize(&plan(LanguageVariant::JavaScript, OrmChoice::Prisma)).unwrap();
        assert!(js.module.content.contains("require(\"@prisma/client\")"));
        assert!(js.module.content.contains("module.exports = prisma"));

        let ts = synthesize(&plan(LanguageVariant::TypeScript, OrmChoice::Prisma)).unwrap();
        assert!(ts.module.content.contains("import { PrismaClient }"));
        assert!(ts.module.content.contains("export default prisma"));
    }

    #[test]
    fn test_prisma_schema_has_one_unique_entity() {
        let synthesis = synthesize(&plan(LanguageVariant::TypeScript, OrmChoice::Prisma)).unwrap();
        let schema = synthesis.schema.unwrap();
        assert_eq!(schema.relative_path, PathBuf::from("prisma/schema.prisma"));
        assert_eq!(schema.content.matches("model ").count(), 1);
        assert!(schema.content.contains("@unique"));
        assert!(schema.content.contains("env(\"DATABASE_URL\")"));
    }

    #[test]
    fn test_sequelize_exports_client_and_connect() {
        let synthesis =
            synthesize(&plan(LanguageVariant::JavaScript, OrmChoice::Sequelize)).unwrap();
        assert!(synthesis
            .module
            .content
            .contains("module.exports = { sequelize, connectDB }"));
        assert!(synthesis.module.content.contains("DB_URI"));
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        for variant in [LanguageVariant::JavaScript, LanguageVariant::TypeScript] {
            for orm in crate::orm::CONCRETE_CHOICES {
                let a = synthesize(&plan(variant, orm)).unwrap();
                let b = synthesize(&plan(variant, orm)).unwrap();
                assert_eq!(a.module, b.module);
                assert_eq!(
                    a.schema.map(|s| s.content),
                    b.schema.map(|s| s.content)
                );
            }
        }
    }
}
