// src/rename/suffix.rs
//! Type-to-suffix naming rules.

use std::collections::HashMap;

/// Maps object-type tags to naming suffixes
///
/// A rule can map a type to a suffix, or to "no suffix" for types that are
/// never renamed (cameras). Types without a rule fall back to the default
/// suffix. The table is immutable during a rename pass.
#[derive(Debug, Clone)]
pub struct SuffixTable {
    rules: HashMap<String, Option<String>>,
    default: String,
}

impl SuffixTable {
    /// Empty table with the given fallback suffix
    pub fn with_default(default: &str) -> Self {
        Self {
            rules: HashMap::new(),
            default: default.to_string(),
        }
    }

    /// Adds a rule mapping `node_type` to `suffix`; `None` marks the type
    /// as never renamed.
    pub fn rule(mut self, node_type: &str, suffix: Option<&str>) -> Self {
        self.rules
            .insert(node_type.to_string(), suffix.map(str::to_string));
        self
    }

    /// Suffix for a type: the mapped suffix, `None` for a "no suffix"
    /// rule, or the default when the type is unknown.
    pub fn suffix_for(&self, node_type: &str) -> Option<&str> {
        match self.rules.get(node_type) {
            Some(rule) => rule.as_deref(),
            None => Some(self.default.as_str()),
        }
    }

    pub fn default_suffix(&self) -> &str {
        &self.default
    }
}

impl Default for SuffixTable {
    /// The stock table: mesh → "geo", joint → "jnt", ambientLight → "lgt",
    /// camera never renamed, everything else → "grp".
    fn default() -> Self {
        Self::with_default("grp")
            .rule("mesh", Some("geo"))
            .rule("joint", Some("jnt"))
            .rule("camera", None)
            .rule("ambientLight", Some("lgt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_rules() {
        let table = SuffixTable::default();
        assert_eq!(table.suffix_for("mesh"), Some("geo"));
        assert_eq!(table.suffix_for("joint"), Some("jnt"));
        assert_eq!(table.suffix_for("ambientLight"), Some("lgt"));
    }

    #[test]
    fn camera_maps_to_no_suffix() {
        assert_eq!(SuffixTable::default().suffix_for("camera"), None);
    }

    #[test]
    fn unknown_type_falls_back_to_default() {
        assert_eq!(SuffixTable::default().suffix_for("nurbsSurface"), Some("grp"));
    }
}
