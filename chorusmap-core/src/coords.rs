//! Validated WGS84 coordinates for project sites.
//!
//! A [`Coordinates`] value always holds a latitude and a longitude
//! together; a site without a position is represented by
//! `Option<Coordinates>` rather than by half-filled fields. Construction
//! checks both axes so downstream map code never sees an off-globe
//! point.

use geo::Coord;
use thiserror::Error;

/// A validated latitude/longitude pair in WGS84 degrees.
///
/// # Examples
///
/// ```
/// use chorusmap_core::Coordinates;
///
/// # fn main() -> Result<(), chorusmap_core::CoordinatesError> {
/// let site = Coordinates::new(28.394857, 84.124008)?;
/// assert_eq!(site.latitude(), 28.394857);
/// assert_eq!(site.longitude(), 84.124008);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

/// Errors returned by [`Coordinates::new`].
///
/// Non-finite inputs (NaN, infinities) fall outside both ranges and are
/// reported through the same variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinatesError {
    /// Latitude was outside `[-90, 90]` or not finite.
    #[error("latitude {value} is outside the WGS84 range [-90, 90]")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        value: f64,
    },
    /// Longitude was outside `[-180, 180]` or not finite.
    #[error("longitude {value} is outside the WGS84 range [-180, 180]")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        value: f64,
    },
}

impl Coordinates {
    /// Validates and constructs a coordinate pair.
    ///
    /// # Errors
    /// Returns [`CoordinatesError`] when either axis is out of range or
    /// not finite.
    ///
    /// # Examples
    /// ```
    /// use chorusmap_core::{Coordinates, CoordinatesError};
    ///
    /// let err = Coordinates::new(95.0, 0.0).unwrap_err();
    /// assert!(matches!(err, CoordinatesError::LatitudeOutOfRange { .. }));
    /// ```
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinatesError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinatesError::LatitudeOutOfRange { value: lat });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinatesError::LongitudeOutOfRange { value: lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.lon
    }

    /// Convert to a [`geo::Coord`] with `x = longitude` and `y = latitude`.
    ///
    /// # Examples
    /// ```
    /// use chorusmap_core::Coordinates;
    ///
    /// # fn main() -> Result<(), chorusmap_core::CoordinatesError> {
    /// let point = Coordinates::new(46.8796822, -110.3625658)?.as_coord();
    /// assert_eq!(point.x, -110.3625658);
    /// assert_eq!(point.y, 46.8796822);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub const fn as_coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        coordinates.as_coord()
    }
}
