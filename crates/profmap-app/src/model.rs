// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::ids::ProfileId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    NonFiniteLatitude,
    NonFiniteLongitude,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteLatitude => f.write_str("latitude must be a finite number"),
            Self::NonFiniteLongitude => f.write_str("longitude must be a finite number"),
            Self::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(lng) => {
                write!(f, "longitude {lng} is outside [-180, 180]")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// A validated WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude);
        }
        if !lng.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoRef {
    Url(String),
    File(PathBuf),
}

impl PhotoRef {
    pub fn display(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub photo: PhotoRef,
    pub description: String,
    pub address: String,
    pub location: GeoPoint,
}

pub(crate) fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: ProfileId::new(1),
            name: "John Doe".to_owned(),
            photo: PhotoRef::Url(
                "https://images.unsplash.com/photo-1502685104226-ee32379fefbe?auto=format&fit=crop&w=300&q=80"
                    .to_owned(),
            ),
            description: "Software Developer from New York".to_owned(),
            address: "New York, NY, USA".to_owned(),
            location: GeoPoint {
                lat: 40.7128,
                lng: -74.0060,
            },
        },
        Profile {
            id: ProfileId::new(2),
            name: "Jane Smith".to_owned(),
            photo: PhotoRef::Url(
                "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?auto=format&fit=crop&w=300&q=80"
                    .to_owned(),
            ),
            description: "Product Manager from California".to_owned(),
            address: "California, USA".to_owned(),
            location: GeoPoint {
                lat: 36.7783,
                lng: -119.4179,
            },
        },
    ]
}
