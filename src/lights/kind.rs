// src/lights/kind.rs
//! Light types the panel recognizes.

use std::fmt;

/// The recognized set of scene light types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    Point,
    Spot,
    Directional,
    Area,
    Volume,
}

impl LightKind {
    pub const ALL: [LightKind; 5] = [
        LightKind::Area,
        LightKind::Directional,
        LightKind::Point,
        LightKind::Spot,
        LightKind::Volume,
    ];

    /// Display label shown in the panel's type selector
    pub fn label(self) -> &'static str {
        match self {
            LightKind::Point => "Point Light",
            LightKind::Spot => "Spot Light",
            LightKind::Directional => "Directional Light",
            LightKind::Area => "Area Light",
            LightKind::Volume => "Volume Light",
        }
    }

    /// Type tag carried by the light's shape node
    pub fn type_tag(self) -> &'static str {
        match self {
            LightKind::Point => "pointLight",
            LightKind::Spot => "spotLight",
            LightKind::Directional => "directionalLight",
            LightKind::Area => "areaLight",
            LightKind::Volume => "volumeLight",
        }
    }

    /// Resolves a stored type tag back to a kind.
    ///
    /// A kind matches when `<first word of its label, lowercased>light`
    /// equals the tag (compared case-insensitively), so `"pointlight"` and
    /// `"pointLight"` both resolve to [`LightKind::Point`].
    pub fn from_type_tag(tag: &str) -> Option<LightKind> {
        let tag = tag.to_lowercase();
        Self::ALL.into_iter().find(|kind| {
            let first_word = kind.label().split_whitespace().next().unwrap_or("");
            format!("{}light", first_word.to_lowercase()) == tag
        })
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
