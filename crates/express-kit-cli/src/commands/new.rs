use std::path::Path;

use anyhow::Result;
use dialoguer::{Input, Select};

use express_kit_core::plan::{GenerationPlan, GenerationRequest, LanguageVariant, OrmChoice};
use express_kit_core::prereq;
use express_kit_core::{pipeline, project};

use crate::output;
use crate::{OrmArg, VariantChoice};

/// Scaffold a new Express project.
///
/// Collects any axis not given on the command line interactively, validates
/// the request before touching the filesystem, materializes the base template,
/// and runs the customization pipeline. Finishes by checking for Node/npm and
/// printing next steps.
pub async fn run(
    name: Option<String>,
    variant: Option<VariantChoice>,
    orm: Option<OrmArg>,
) -> Result<()> {
    let app_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("App name")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("app name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    let variant = match variant {
        Some(v) => v.to_variant(),
        None => {
            let options = [LanguageVariant::JavaScript, LanguageVariant::TypeScript];
            let descriptions = &[
                "JavaScript — CommonJS, runs directly under Node",
                "TypeScript — typed, compiled with tsc",
            ];

            let selection = Select::new()
                .with_prompt("Choose a language variant")
                .items(descriptions)
                .default(0)
                .interact()?;

            options[selection]
        }
    };

    let orm = match orm {
        Some(o) => o.to_choice(),
        None => {
            let options = [
                OrmChoice::None,
                OrmChoice::Mongoose,
                OrmChoice::Prisma,
                OrmChoice::Sequelize,
            ];
            let descriptions = &[
                "None — no database wiring",
                "Mongoose — MongoDB ODM with a fail-fast connect",
                "Prisma — schema-first generated client",
                "Sequelize — SQL ORM, PostgreSQL driver by default",
            ];

            let selection = Select::new()
                .with_prompt("Choose a data-access library")
                .items(descriptions)
                .default(0)
                .interact()?;

            options[selection]
        }
    };

    // Validation happens before any file operation.
    let request = GenerationRequest::new(&app_name, variant, orm)?;
    let plan = GenerationPlan::resolve(request);
    tracing::debug!(?plan, "resolved generation plan");

    output::print_header(&format!("express-kit new: {}", plan.app_name()));

    let project_dir = Path::new(plan.app_name()).to_path_buf();

    output::print_step(1, 3, &format!("Copying {} base template", variant.display_name()));
    project::create_project(&project_dir, &plan)?;

    match orm {
        OrmChoice::None => output::print_step(2, 3, "Customizing project (no database wiring)"),
        _ => output::print_step(2, 3, &format!("Wiring in {}", orm.display_name())),
    }
    pipeline::run_pipeline(&project_dir, &plan)?;

    output::print_step(3, 3, "Checking prerequisites");
    let missing = prereq::check_prerequisites();
    if missing.is_empty() {
        output::print_success("Node and npm found");
    } else {
        for tool in &missing {
            output::print_warning(&format!(
                "Missing: {} — install: {}",
                tool.name, tool.install
            ));
        }
    }
    if let Some(version) = prereq::detect_node_version() {
        if version.major < prereq::MIN_NODE_MAJOR {
            output::print_warning(&format!(
                "Node {} found; the generated project targets Node {}+",
                version,
                prereq::MIN_NODE_MAJOR
            ));
        }
    }

    output::print_success(&format!(
        "Project '{}' created with {} + {}",
        plan.app_name(),
        variant.display_name(),
        orm.display_name()
    ));
    println!();
    println!("  Next steps:");
    println!("    cd {}", plan.app_name());
    println!("    npm install");
    if orm == OrmChoice::Prisma {
        println!("    npx prisma migrate dev --name init");
    }
    println!("    npm run dev");
    println!();

    Ok(())
}
