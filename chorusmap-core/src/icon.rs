//! Species icons naming the marker glyph drawn for a project.
//!
//! The enum is closed: a record is either one of these eight values or
//! it is rejected at load time.
//!
//! # Examples
//! ```
//! use chorusmap_core::SpeciesIcon;
//!
//! assert_eq!(SpeciesIcon::Feather.as_str(), "feather");
//! assert_eq!(SpeciesIcon::Paw.to_string(), "paw");
//! ```

use thiserror::Error;

/// Marker glyph categories recognised by the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SpeciesIcon {
    /// Birds.
    Feather,
    /// Terrestrial mammals.
    Paw,
    /// Amphibians.
    Frog,
    /// Marine and aquatic life.
    Water,
    /// Insects and other invertebrates.
    Bug,
    /// Fish.
    Fish,
    /// Plants and vegetation surveys.
    Leaf,
    /// Equipment and methodology projects.
    Cog,
}

impl SpeciesIcon {
    /// Every icon the renderer knows how to draw.
    pub const ALL: [Self; 8] = [
        Self::Feather,
        Self::Paw,
        Self::Frog,
        Self::Water,
        Self::Bug,
        Self::Fish,
        Self::Leaf,
        Self::Cog,
    ];

    /// Return the icon as its lowercase wire name.
    ///
    /// # Examples
    /// ```
    /// use chorusmap_core::SpeciesIcon;
    ///
    /// assert_eq!(SpeciesIcon::Frog.as_str(), "frog");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Feather => "feather",
            Self::Paw => "paw",
            Self::Frog => "frog",
            Self::Water => "water",
            Self::Bug => "bug",
            Self::Fish => "fish",
            Self::Leaf => "leaf",
            Self::Cog => "cog",
        }
    }
}

impl std::fmt::Display for SpeciesIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an icon name is not one of the eight known values.
///
/// The message lists the accepted names so a data maintainer can fix the
/// record without consulting the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown species icon '{value}' (expected one of: feather, paw, frog, \
     water, bug, fish, leaf, cog)"
)]
pub struct UnknownSpeciesIcon {
    /// The rejected name, verbatim.
    pub value: String,
}

impl std::str::FromStr for SpeciesIcon {
    type Err = UnknownSpeciesIcon;

    /// Parse a wire name into an icon.
    ///
    /// Matching is exact: names are stored lowercase and anything else is
    /// a schema violation, not a value to normalise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feather" => Ok(Self::Feather),
            "paw" => Ok(Self::Paw),
            "frog" => Ok(Self::Frog),
            "water" => Ok(Self::Water),
            "bug" => Ok(Self::Bug),
            "fish" => Ok(Self::Fish),
            "leaf" => Ok(Self::Leaf),
            "cog" => Ok(Self::Cog),
            _ => Err(UnknownSpeciesIcon {
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(SpeciesIcon::Feather, "feather")]
    #[case(SpeciesIcon::Paw, "paw")]
    #[case(SpeciesIcon::Frog, "frog")]
    #[case(SpeciesIcon::Water, "water")]
    #[case(SpeciesIcon::Bug, "bug")]
    #[case(SpeciesIcon::Fish, "fish")]
    #[case(SpeciesIcon::Leaf, "leaf")]
    #[case(SpeciesIcon::Cog, "cog")]
    fn names_round_trip(#[case] icon: SpeciesIcon, #[case] name: &str) {
        assert_eq!(icon.as_str(), name);
        assert_eq!(SpeciesIcon::from_str(name).unwrap(), icon);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(SpeciesIcon::Cog.to_string(), SpeciesIcon::Cog.as_str());
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = SpeciesIcon::from_str("octopus").unwrap_err();
        assert_eq!(err.value, "octopus");
        assert!(err.to_string().contains("octopus"));
        assert!(err.to_string().contains("feather"));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!(SpeciesIcon::from_str("Paw").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SpeciesIcon::Feather).unwrap();
        assert_eq!(json, "\"feather\"");
        let icon: SpeciesIcon = serde_json::from_str("\"cog\"").unwrap();
        assert_eq!(icon, SpeciesIcon::Cog);
    }
}
