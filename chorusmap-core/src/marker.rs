//! Map markers derived from geolocated records.

use crate::{Coordinates, ProjectRecord, SpeciesIcon};

/// A renderable map marker borrowed from a [`ProjectRecord`].
///
/// Exactly the geolocated records produce markers; a record without
/// coordinates simply has none. The marker borrows its record, so popup
/// fields stay available without copying the row.
///
/// # Examples
///
/// ```
/// use chorusmap_core::{Coordinates, Marker, ProjectRecord, SpeciesIcon};
///
/// # fn main() -> Result<(), chorusmap_core::CoordinatesError> {
/// let record = ProjectRecord::new(
///     "Reef soundscapes",
///     "Coral reef fauna",
///     "Australia",
///     "Great Barrier Reef",
///     SpeciesIcon::Water,
/// )
/// .with_coordinates(Coordinates::new(-18.2871, 147.6992)?);
///
/// let marker = Marker::for_record(&record).unwrap();
/// assert_eq!(marker.icon(), SpeciesIcon::Water);
/// assert_eq!(marker.position.latitude(), -18.2871);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<'a> {
    /// The record this marker represents.
    pub record: &'a ProjectRecord,
    /// Where to place the marker on the map.
    pub position: Coordinates,
}

impl<'a> Marker<'a> {
    /// Build the marker for a record, or `None` when it has no position.
    #[must_use]
    pub fn for_record(record: &'a ProjectRecord) -> Option<Self> {
        record
            .coordinates
            .map(|position| Self { record, position })
    }

    /// Project title for the marker popup.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    /// Target species for the marker popup.
    #[must_use]
    pub fn species(&self) -> &'a str {
        &self.record.species
    }

    /// Glyph the renderer should draw.
    #[must_use]
    pub const fn icon(&self) -> SpeciesIcon {
        self.record.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_requires_coordinates() {
        let record = ProjectRecord::new("Quiet site", "Bats", "Wales", "Powys", SpeciesIcon::Paw);
        assert!(Marker::for_record(&record).is_none());
    }

    #[test]
    fn marker_borrows_popup_fields() {
        let record = ProjectRecord::new(
            "Night chorus",
            "Owls",
            "Finland",
            "Lapland",
            SpeciesIcon::Feather,
        )
        .with_coordinates(Coordinates::new(67.9, 26.5).unwrap());

        let marker = Marker::for_record(&record).unwrap();
        assert_eq!(marker.name(), "Night chorus");
        assert_eq!(marker.species(), "Owls");
        assert_eq!(marker.position.longitude(), 26.5);
    }
}
