//! The ordered, immutable table of project records.

use crate::{Marker, ProjectRecord};

/// An ordered collection of project records.
///
/// The table preserves source order, keeps duplicates (two sites of the
/// same programme are two rows), and offers no mutation beyond wholesale
/// replacement. Consumers iterate it or index into it; the map renderer
/// asks it for [`markers`](Self::markers).
///
/// # Examples
///
/// ```
/// use chorusmap_core::{ProjectRecord, ProjectTable, SpeciesIcon};
///
/// let rows = vec![
///     ProjectRecord::new("Dawn chorus", "Songbirds", "UK", "Devon", SpeciesIcon::Feather),
///     ProjectRecord::new("Dawn chorus", "Songbirds", "UK", "Devon", SpeciesIcon::Feather),
/// ];
/// let table = ProjectTable::new(rows);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(1), table.get(0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectTable {
    records: Vec<ProjectRecord>,
}

impl ProjectTable {
    /// Wrap an already-validated list of records, preserving its order.
    #[must_use]
    pub const fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// Number of records, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index` in source order, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    /// All records in source order.
    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Iterate the records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    /// Iterate the map markers for the geolocated records, in record
    /// order.
    ///
    /// Records without coordinates contribute nothing; co-located
    /// records each contribute their own marker.
    ///
    /// # Examples
    /// ```
    /// use chorusmap_core::{Coordinates, ProjectRecord, ProjectTable, SpeciesIcon};
    ///
    /// # fn main() -> Result<(), chorusmap_core::CoordinatesError> {
    /// let located = ProjectRecord::new("A", "Frogs", "Peru", "Loreto", SpeciesIcon::Frog)
    ///     .with_coordinates(Coordinates::new(-3.75, -73.25)?);
    /// let unlocated = ProjectRecord::new("B", "Frogs", "Peru", "Loreto", SpeciesIcon::Frog);
    ///
    /// let table = ProjectTable::new(vec![located, unlocated]);
    /// assert_eq!(table.markers().count(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn markers(&self) -> impl Iterator<Item = Marker<'_>> {
        self.records.iter().filter_map(Marker::for_record)
    }

    /// Consume the table and return the underlying records.
    #[must_use]
    pub fn into_records(self) -> Vec<ProjectRecord> {
        self.records
    }
}

impl From<Vec<ProjectRecord>> for ProjectTable {
    fn from(records: Vec<ProjectRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<ProjectRecord> for ProjectTable {
    fn from_iter<I: IntoIterator<Item = ProjectRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ProjectTable {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ProjectTable {
    type Item = ProjectRecord;
    type IntoIter = std::vec::IntoIter<ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
