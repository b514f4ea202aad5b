//! Wire representation of the persisted projects document.
//!
//! Field names match the JSON verbatim, embedded spaces and slashes
//! included. The raw record is permissive on input, so that validation
//! happens in [`RawProjectRecord::into_record`] with proper field-level
//! errors rather than in serde. On output the link fields serialise as
//! explicit `null` when unset, while the two image fields are omitted
//! entirely, matching how the shipped dataset is written.

use chorusmap_core::{Coordinates, ProjectRecord, SpeciesIcon};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

pub(crate) const FIELD_PROJECT_NAME: &str = "Project name";
pub(crate) const FIELD_TARGET_SPECIES: &str = "Target species";
pub(crate) const FIELD_COUNTRY: &str = "Country";
pub(crate) const FIELD_REGION: &str = "Region/Location";
pub(crate) const FIELD_LATITUDE: &str = "Latitude";
pub(crate) const FIELD_LONGITUDE: &str = "Longitude";
pub(crate) const FIELD_SPECIES_ICON: &str = "Species Icon";

/// One record as it appears in the document, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct RawProjectRecord {
    #[serde(rename = "Project name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "Organization/Project lead", default)]
    pub(crate) lead: Option<String>,
    #[serde(rename = "Target species", default)]
    pub(crate) species: Option<String>,
    #[serde(rename = "Country", default)]
    pub(crate) country: Option<String>,
    #[serde(rename = "Region/Location", default)]
    pub(crate) region: Option<String>,
    #[serde(rename = "Latitude", default)]
    pub(crate) latitude: Option<f64>,
    #[serde(rename = "Longitude", default)]
    pub(crate) longitude: Option<f64>,
    #[serde(rename = "Contact", default)]
    pub(crate) contact: Option<String>,
    #[serde(rename = "Website", default)]
    pub(crate) website: Option<String>,
    #[serde(rename = "Paper", default)]
    pub(crate) paper: Option<String>,
    #[serde(
        rename = "Species Image",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) image: Option<String>,
    #[serde(
        rename = "Species Image Credit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) image_credit: Option<String>,
    #[serde(rename = "Species Icon", default)]
    pub(crate) icon: Option<String>,
}

impl RawProjectRecord {
    /// Validate the raw fields and build the domain record.
    ///
    /// Required text fields must be present and non-blank; the icon must
    /// parse; latitude and longitude must be given together or not at
    /// all, and in range when given. Values are kept verbatim, trailing
    /// whitespace included.
    pub(crate) fn into_record(self) -> Result<ProjectRecord, RecordError> {
        let name = required(self.name, FIELD_PROJECT_NAME)?;
        let species = required(self.species, FIELD_TARGET_SPECIES)?;
        let country = required(self.country, FIELD_COUNTRY)?;
        let region = required(self.region, FIELD_REGION)?;
        let icon_name = required(self.icon, FIELD_SPECIES_ICON)?;
        let icon: SpeciesIcon = icon_name.parse()?;
        let coordinates = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)?),
            (None, None) => None,
            (Some(_), None) => {
                return Err(RecordError::PartialCoordinates {
                    present: FIELD_LATITUDE,
                    missing: FIELD_LONGITUDE,
                });
            }
            (None, Some(_)) => {
                return Err(RecordError::PartialCoordinates {
                    present: FIELD_LONGITUDE,
                    missing: FIELD_LATITUDE,
                });
            }
        };

        Ok(ProjectRecord {
            name,
            lead: self.lead,
            species,
            country,
            region,
            coordinates,
            contact: self.contact,
            website: self.website,
            paper: self.paper,
            image: self.image,
            image_credit: self.image_credit,
            icon,
        })
    }
}

impl From<&ProjectRecord> for RawProjectRecord {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            lead: record.lead.clone(),
            species: Some(record.species.clone()),
            country: Some(record.country.clone()),
            region: Some(record.region.clone()),
            latitude: record.coordinates.map(|c| c.latitude()),
            longitude: record.coordinates.map(|c| c.longitude()),
            contact: record.contact.clone(),
            website: record.website.clone(),
            paper: record.paper.clone(),
            image: record.image.clone(),
            image_credit: record.image_credit.clone(),
            icon: Some(record.icon.as_str().to_owned()),
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    match value {
        None => Err(RecordError::MissingField { field }),
        Some(text) if text.trim().is_empty() => Err(RecordError::BlankField { field }),
        Some(text) => Ok(text),
    }
}
