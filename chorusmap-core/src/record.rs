//! A single row of the project records table.

use crate::{Coordinates, Marker, SpeciesIcon};

/// One monitoring project as displayed on the map.
///
/// Records are plain data: they are created once by the loader (or by a
/// test) and never mutated afterwards. Optional fields distinguish
/// "unknown" from the empty string, so display code can suppress absent
/// links instead of rendering blanks.
///
/// # Examples
///
/// ```
/// use chorusmap_core::{Coordinates, ProjectRecord, SpeciesIcon};
///
/// # fn main() -> Result<(), chorusmap_core::CoordinatesError> {
/// let record = ProjectRecord::new(
///     "Dhole monitoring",
///     "Dholes",
///     "Nepal, India",
///     "Nepal, India",
///     SpeciesIcon::Paw,
/// )
/// .with_lead("Holger Klinck, Namitha Suresh")
/// .with_coordinates(Coordinates::new(28.394857, 84.124008)?);
///
/// assert_eq!(record.icon, SpeciesIcon::Paw);
/// assert!(record.coordinates.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    /// Project title shown in the marker popup.
    pub name: String,
    /// Organisation or person leading the project, when known.
    pub lead: Option<String>,
    /// Species or sound sources the project targets.
    pub species: String,
    /// Country or countries the project operates in.
    pub country: String,
    /// Finer-grained location description.
    pub region: String,
    /// Site position, when the project is geolocated.
    ///
    /// `None` means the project has no map marker. Partially specified
    /// positions are unrepresentable: the loader rejects them before a
    /// record is built.
    pub coordinates: Option<Coordinates>,
    /// Contact details, when published.
    pub contact: Option<String>,
    /// Project website URL, when published.
    pub website: Option<String>,
    /// Reference publication URL, when published.
    pub paper: Option<String>,
    /// Illustration image URL or asset path.
    pub image: Option<String>,
    /// Attribution line for the illustration image.
    pub image_credit: Option<String>,
    /// Marker glyph drawn for the project.
    pub icon: SpeciesIcon,
}

impl ProjectRecord {
    /// Construct a record from its required fields.
    ///
    /// Optional fields start empty; chain the `with_*` builders to fill
    /// them in.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        country: impl Into<String>,
        region: impl Into<String>,
        icon: SpeciesIcon,
    ) -> Self {
        Self {
            name: name.into(),
            lead: None,
            species: species.into(),
            country: country.into(),
            region: region.into(),
            coordinates: None,
            contact: None,
            website: None,
            paper: None,
            image: None,
            image_credit: None,
            icon,
        }
    }

    /// Set the organisation or project lead.
    #[must_use]
    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }

    /// Set the site position.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Set the contact details.
    #[must_use]
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact = Some(contact.into());
        self
    }

    /// Set the project website URL.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Set the reference publication URL.
    #[must_use]
    pub fn with_paper(mut self, paper: impl Into<String>) -> Self {
        self.paper = Some(paper.into());
        self
    }

    /// Set the illustration image URL or asset path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the attribution line for the illustration image.
    #[must_use]
    pub fn with_image_credit(mut self, credit: impl Into<String>) -> Self {
        self.image_credit = Some(credit.into());
        self
    }

    /// The map marker for this record, if it is geolocated.
    ///
    /// # Examples
    /// ```
    /// use chorusmap_core::{ProjectRecord, SpeciesIcon};
    ///
    /// let record = ProjectRecord::new("Soundscapes", "Frogs", "Brazil", "Manaus", SpeciesIcon::Frog);
    /// assert!(record.marker().is_none());
    /// ```
    #[must_use]
    pub fn marker(&self) -> Option<Marker<'_>> {
        Marker::for_record(self)
    }
}
