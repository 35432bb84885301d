//! Entry-point patching.
//!
//! The template's entry file is augmented textually, never rewritten: one
//! import/require line for the db module goes in front, and for libraries with
//! an explicit connect step a bootstrap block goes at the end. [`SourcePatch`]
//! can only prepend and append whole blocks, so pre-existing content is
//! preserved verbatim and in order.
//!
//! This step runs exactly once per generation; idempotence on re-application
//! is neither provided nor needed.

use crate::orm::ImportBinding;
use crate::plan::{GenerationPlan, ImportStyle};
use crate::templates::embedded;

/// An ordered set of blocks to place around an existing source file.
#[derive(Debug, Default)]
pub struct SourcePatch {
    prepend: Vec<String>,
    append: Vec<String>,
}

impl SourcePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block placed before the original content. Blocks keep insertion
    /// order and are each terminated with a newline.
    pub fn prepend_block(&mut self, block: impl Into<String>) {
        self.prepend.push(block.into());
    }

    /// Add a block placed after the original content, separated from it by a
    /// blank line.
    pub fn append_block(&mut self, block: impl Into<String>) {
        self.append.push(block.into());
    }

    /// Compose the patched file. The original text appears unmodified between
    /// the prepended and appended blocks.
    pub fn apply(&self, original: &str) -> String {
        let mut out = String::new();
        for block in &self.prepend {
            out.push_str(block);
            out.push('\n');
        }
        out.push_str(original);
        for block in &self.append {
            out.push_str("\n\n");
            out.push_str(block);
        }
        out
    }
}

/// Patch the entry point for the plan's ORM choice.
///
/// For [`crate::plan::OrmChoice::None`] the content is returned unchanged.
/// Otherwise one import line referencing the synthesized module is prepended.
/// When the library exports an explicit `connectDB`, a `startServer` bootstrap
/// is appended that connects before listening and exits the process on
/// failure, extending the module's fail-fast policy to the service itself.
pub fn patch_entry_point(entry: &str, plan: &GenerationPlan) -> String {
    let Some(profile) = plan.orm().profile() else {
        return entry.to_string();
    };

    let mut patch = SourcePatch::new();
    patch.prepend_block(import_line(
        profile.import_binding,
        plan.import_style,
        plan.db_import_specifier(),
    ));
    if profile.needs_bootstrap {
        patch.append_block(embedded::BOOTSTRAP_BLOCK);
    }
    patch.apply(entry)
}

fn import_line(binding: ImportBinding, style: ImportStyle, specifier: &str) -> String {
    match (style, binding) {
        (ImportStyle::CommonJs, ImportBinding::Named(name)) => {
            format!("const {{ {name} }} = require(\"{specifier}\");")
        }
        (ImportStyle::CommonJs, ImportBinding::Default(name)) => {
            format!("const {name} = require(\"{specifier}\");")
        }
        (ImportStyle::EsModules, ImportBinding::Named(name)) => {
            format!("import {{ {name} }} from \"{specifier}\";")
        }
        (ImportStyle::EsModules, ImportBinding::Default(name)) => {
            format!("import {name} from \"{specifier}\";")
        }
    }
}
