//! Study-area geometry: the enrichment target submitted with a generation
//! request.
//!
//! A study area is immutable once constructed and validated locally before
//! any request is issued — generation is billed, so malformed input must
//! never reach the service.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::ValidationError;

/// WKID for WGS84 geographic coordinates, the service default.
pub const WGS84_WKID: u32 = 4326;

/// A well-known spatial reference identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl Default for SpatialReference {
    fn default() -> Self {
        Self { wkid: WGS84_WKID }
    }
}

/// A geographic extent or point descriptor used as the enrichment target.
#[derive(Debug, Clone, PartialEq)]
pub enum StudyArea {
    /// A single coordinate.
    Point {
        x: f64,
        y: f64,
        spatial_reference: SpatialReference,
    },
    /// One or more closed rings of `[x, y]` positions.
    Polygon {
        rings: Vec<Vec<[f64; 2]>>,
        spatial_reference: SpatialReference,
    },
    /// A named place, resolved server-side.
    Address { text: String },
}

impl StudyArea {
    /// A point in WGS84 coordinates.
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point {
            x,
            y,
            spatial_reference: SpatialReference::default(),
        }
    }

    /// A polygon in WGS84 coordinates. Rings must be closed (first position
    /// equal to last).
    #[must_use]
    pub fn polygon(rings: Vec<Vec<[f64; 2]>>) -> Self {
        Self::Polygon {
            rings,
            spatial_reference: SpatialReference::default(),
        }
    }

    /// A named place or street address.
    #[must_use]
    pub fn address(text: impl Into<String>) -> Self {
        Self::Address { text: text.into() }
    }

    /// Validate the study area locally.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidStudyArea`] for non-finite
    /// coordinates, out-of-range WGS84 coordinates, empty or unclosed
    /// polygon rings, or a blank address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Point {
                x,
                y,
                spatial_reference,
            } => validate_point(*x, *y, *spatial_reference),
            Self::Polygon {
                rings,
                spatial_reference,
            } => validate_rings(rings, *spatial_reference),
            Self::Address { text } => {
                if text.trim().is_empty() {
                    return Err(ValidationError::InvalidStudyArea(
                        "address text is empty".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// The study-area object submitted in the `studyAreas` request array.
    ///
    /// Geometries are wrapped as `{"geometry": ...}` and named places as
    /// `{"address": {"text": ...}}`, the shapes the generation endpoint
    /// consumes directly.
    #[must_use]
    pub fn to_request_json(&self) -> Value {
        match self {
            Self::Point {
                x,
                y,
                spatial_reference,
            } => json!({
                "geometry": {
                    "x": x,
                    "y": y,
                    "spatialReference": { "wkid": spatial_reference.wkid },
                }
            }),
            Self::Polygon {
                rings,
                spatial_reference,
            } => json!({
                "geometry": {
                    "rings": rings,
                    "spatialReference": { "wkid": spatial_reference.wkid },
                }
            }),
            Self::Address { text } => json!({
                "address": { "text": text }
            }),
        }
    }
}

fn validate_point(x: f64, y: f64, sr: SpatialReference) -> Result<(), ValidationError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ValidationError::InvalidStudyArea(format!(
            "point coordinates are not finite: ({x}, {y})"
        )));
    }
    if sr.wkid == WGS84_WKID && (!(-180.0..=180.0).contains(&x) || !(-90.0..=90.0).contains(&y)) {
        return Err(ValidationError::InvalidStudyArea(format!(
            "point ({x}, {y}) is outside WGS84 bounds"
        )));
    }
    Ok(())
}

fn validate_rings(rings: &[Vec<[f64; 2]>], sr: SpatialReference) -> Result<(), ValidationError> {
    if rings.is_empty() {
        return Err(ValidationError::InvalidStudyArea(
            "polygon has no rings".to_string(),
        ));
    }
    for (i, ring) in rings.iter().enumerate() {
        if ring.len() < 4 {
            return Err(ValidationError::InvalidStudyArea(format!(
                "ring {i} has {} positions; a closed ring needs at least 4",
                ring.len()
            )));
        }
        if ring.first() != ring.last() {
            return Err(ValidationError::InvalidStudyArea(format!(
                "ring {i} is not closed (first position must equal last)"
            )));
        }
        for &[x, y] in ring {
            validate_point(x, y, sr)?;
        }
    }
    Ok(())
}
