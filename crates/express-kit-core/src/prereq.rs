//! Runtime prerequisite detection for generated projects.
//!
//! The scaffold itself needs nothing installed, but the project it produces
//! needs Node and npm. Missing tools are reported as warnings with install
//! pointers, never as generation failures. Version detection is best-effort:
//! unexpected `node --version` output means no warning, not an error.

use std::fmt;
use std::process::Command;

/// Lowest Node major the generated package.json pins its tooling against.
pub const MIN_NODE_MAJOR: u32 = 18;

/// A tool the generated project needs that was not found on PATH.
#[derive(Debug, Clone)]
pub struct MissingTool {
    pub name: &'static str,
    pub install: &'static str,
}

/// A Node.js version as reported by `node --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl NodeVersion {
    /// Parse `v20.11.1`-style output (leading `v` optional, trailing
    /// non-digits on the patch component tolerated).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().trim_start_matches('v');
        let mut parts = s.splitn(3, '.');
        let major: u32 = parts.next()?.parse().ok()?;
        let minor: u32 = parts.next()?.parse().ok()?;
        let patch_digits: String = parts
            .next()?
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let patch: u32 = patch_digits.parse().ok()?;
        Some(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Check that the tools a generated project needs are on PATH.
pub fn check_prerequisites() -> Vec<MissingTool> {
    let mut missing = Vec::new();

    if which::which("node").is_err() {
        missing.push(MissingTool {
            name: "node",
            install: "https://nodejs.org/",
        });
    }

    if which::which("npm").is_err() {
        missing.push(MissingTool {
            name: "npm",
            install: "ships with Node — https://nodejs.org/",
        });
    }

    missing
}

/// Detect the installed Node version, if any.
pub fn detect_node_version() -> Option<NodeVersion> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    NodeVersion::parse(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_output() {
        let v = NodeVersion::parse("v20.11.1\n").unwrap();
        assert_eq!(
            v,
            NodeVersion {
                major: 20,
                minor: 11,
                patch: 1
            }
        );
    }

    #[test]
    fn test_parse_without_prefix() {
        assert!(NodeVersion::parse("18.19.0").is_some());
    }

    #[test]
    fn test_parse_prerelease_suffix() {
        let v = NodeVersion::parse("v21.0.0-rc.1").unwrap();
        assert_eq!(v.major, 21);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(NodeVersion::parse("").is_none());
        assert!(NodeVersion::parse("v20").is_none());
        assert!(NodeVersion::parse("not a version").is_none());
    }

    #[test]
    fn test_version_ordering() {
        let old = NodeVersion::parse("v16.20.2").unwrap();
        let new = NodeVersion::parse("v20.11.1").unwrap();
        assert!(old < new);
        assert!(old.major < MIN_NODE_MAJOR);
    }
}
