//! package.json loading, patching, and rewriting.
//!
//! The manifest is kept as a full parsed document rather than a typed struct:
//! templates carry fields the patcher never touches (`scripts`, `main`, …) and
//! those must survive the rewrite untouched, in their original key order
//! (serde_json's `preserve_order` feature).

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, ScaffoldError};
use crate::plan::OrmChoice;

/// A template's package.json, parsed and ready for in-memory patching.
pub struct PackageManifest {
    root: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest text. `path` is only used for diagnostics.
    ///
    /// A manifest without a `dependencies` object means the template itself is
    /// corrupt; that is rejected here rather than tolerated downstream.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let root: Value = serde_json::from_str(text).map_err(|e| ScaffoldError::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let Value::Object(root) = root else {
            return Err(ScaffoldError::ManifestShape {
                path: path.to_path_buf(),
            });
        };
        if !root.get("dependencies").is_some_and(Value::is_object) {
            return Err(ScaffoldError::ManifestShape {
                path: path.to_path_buf(),
            });
        }
        // devDependencies is optional, but if present it must be an object.
        if root
            .get("devDependencies")
            .is_some_and(|deps| !deps.is_object())
        {
            return Err(ScaffoldError::ManifestShape {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { root })
    }

    /// Declared package name.
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Stamp the package name.
    pub fn set_name(&mut self, name: &str) {
        self.root
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    /// Insert into `dependencies`. An existing entry is overwritten:
    /// last-write-wins, no range merging.
    pub fn insert_dependency(&mut self, package: &str, range: &str) {
        Self::partition_mut(&mut self.root, "dependencies")
            .insert(package.to_string(), Value::String(range.to_string()));
    }

    /// Insert into `devDependencies`, creating the partition if the template
    /// has none. Same overwrite semantics as [`Self::insert_dependency`].
    pub fn insert_dev_dependency(&mut self, package: &str, range: &str) {
        Self::partition_mut(&mut self.root, "devDependencies")
            .insert(package.to_string(), Value::String(range.to_string()));
    }

    /// Version range declared for `package` in `dependencies`.
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.root
            .get("dependencies")
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }

    /// Version range declared for `package` in `devDependencies`.
    pub fn dev_dependency(&self, package: &str) -> Option<&str> {
        self.root
            .get("devDependencies")
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }

    /// Add the chosen ORM's packages. Identity for [`OrmChoice::None`].
    pub fn patch(&mut self, orm: OrmChoice) {
        let Some(profile) = orm.profile() else {
            return;
        };
        for (package, range) in profile.dependencies {
            self.insert_dependency(package, range);
        }
        for (package, range) in profile.dev_dependencies {
            self.insert_dev_dependency(package, range);
        }
    }

    /// Serialize back to two-space-indented JSON with a trailing newline.
    pub fn to_string_pretty(&self) -> String {
        let mut out = serde_json::to_string_pretty(&Value::Object(self.root.clone()))
            .expect("manifest is valid JSON by construction");
        out.push('\n');
        out
    }

    fn partition_mut<'a>(
        root: &'a mut Map<String, Value>,
        partition: &str,
    ) -> &'a mut Map<String, Value> {
        root.entry(partition.to_string())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .expect("partitions validated as objects at parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TEMPLATE: &str = r#"{
  "name": "app-name",
  "version": "1.0.0",
  "scripts": {
    "dev": "nodemon index.js"
  },
  "dependencies": {
    "express": "^4.19.2"
  },
  "devDependencies": {
    "nodemon": "^3.1.0"
  }
}
"#;

    fn parse(text: &str) -> PackageManifest {
        PackageManifest::parse(text, &PathBuf::from("package.json")).unwrap()
    }

    #[test]
    fn test_patch_none_is_identity() {
        let mut manifest = parse(TEMPLATE);
        let before = manifest.to_string_pretty();
        manifest.patch(OrmChoice::None);
        assert_eq!(manifest.to_string_pretty(), before);
    }

    #[test]
    fn test_patch_mongoose_adds_dependency() {
        let mut manifest = parse(TEMPLATE);
        manifest.patch(OrmChoice::Mongoose);
        assert_eq!(manifest.dependency("mongoose"), Some("^8.0.0"));
        assert!(manifest.dev_dependency("mongoose").is_none());
    }

    #[test]
    fn test_patch_prisma_splits_partitions() {
        let mut manifest = parse(TEMPLATE);
        manifest.patch(OrmChoice::Prisma);
        assert_eq!(manifest.dependency("@prisma/client"), Some("^5.12.0"));
        assert_eq!(manifest.dev_dependency("prisma"), Some("^5.12.0"));
    }

    #[test]
    fn test_patch_sequelize_adds_driver() {
        let mut manifest = parse(TEMPLATE);
        manifest.patch(OrmChoice::Sequelize);
        assert_eq!(manifest.dependency("sequelize"), Some("^6.35.0"));
        assert_eq!(manifest.dependency("pg"), Some("^8.11.0"));
    }

    #[test]
    fn test_insert_overwrites_existing_range() {
        let mut manifest = parse(TEMPLATE);
        manifest.insert_dependency("express", "^5.0.0");
        assert_eq!(manifest.dependency("express"), Some("^5.0.0"));
        // Still a single key: the serialized form mentions express once.
        let text = manifest.to_string_pretty();
        assert_eq!(text.matches("\"express\"").count(), 1);
    }

    #[test]
    fn test_set_name() {
        let mut manifest = parse(TEMPLATE);
        manifest.set_name("demo");
        assert_eq!(manifest.name(), Some("demo"));
    }

    #[test]
    fn test_rewrite_preserves_untouched_fields_and_order() {
        let mut manifest = parse(TEMPLATE);
        manifest.set_name("demo");
        manifest.patch(OrmChoice::Mongoose);
        let text = manifest.to_string_pretty();
        assert!(text.contains("\"nodemon index.js\""));
        // name was present before scripts in the template and must stay there.
        let name_pos = text.find("\"name\"").unwrap();
        let scripts_pos = text.find("\"scripts\"").unwrap();
        assert!(name_pos < scripts_pos);
    }

    #[test]
    fn test_missing_dependencies_object_is_rejected() {
        let result = PackageManifest::parse(
            r#"{ "name": "x" }"#,
            &PathBuf::from("package.json"),
        );
        assert!(matches!(result, Err(ScaffoldError::ManifestShape { .. })));
    }

    #[test]
    fn test_invalid_json_is_rejected_with_path() {
        let err = PackageManifest::parse("not json", &PathBuf::from("pkg/package.json"))
            .err()
            .expect("parse should fail");
        match err {
            ScaffoldError::ManifestParse { path, .. } => {
                assert_eq!(path, PathBuf::from("pkg/package.json"));
            }
            other => panic!("expected ManifestParse, got {other:?}"),
        }
    }

    #[test]
    fn test_dev_partition_created_when_missing() {
        let mut manifest = parse(r#"{ "dependencies": {} }"#);
        manifest.insert_dev_dependency("prisma", "^5.12.0");
        assert_eq!(manifest.dev_dependency("prisma"), Some("^5.12.0"));
    }
}
