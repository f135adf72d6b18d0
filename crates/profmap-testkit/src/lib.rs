// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use profmap_app::{GeoPoint, Geocoder, PhotoRef, Profile, ProfileId};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 18] = [
    "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward", "Young", "Diaz", "Reed",
    "Campbell", "Turner", "Flores", "Bennett", "Price", "Morris", "Foster", "Brooks",
];
const ROLES: [&str; 8] = [
    "Software Developer",
    "Product Manager",
    "Designer",
    "Data Analyst",
    "Support Engineer",
    "Technical Writer",
    "Site Reliability Engineer",
    "Researcher",
];

// (address, lat, lng)
const PLACES: [(&str, f64, f64); 10] = [
    ("Austin, TX, USA", 30.2672, -97.7431),
    ("Seattle, WA, USA", 47.6062, -122.3321),
    ("Denver, CO, USA", 39.7392, -104.9903),
    ("Madison, WI, USA", 43.0731, -89.4012),
    ("Paris, France", 48.8566, 2.3522),
    ("Berlin, Germany", 52.52, 13.405),
    ("Tokyo, Japan", 35.6762, 139.6503),
    ("Lisbon, Portugal", 38.7223, -9.1393),
    ("Nairobi, Kenya", -1.2921, 36.8219),
    ("Sydney, Australia", -33.8688, 151.2093),
];

/// 1x1 transparent PNG.
pub const PIXEL_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }
}

/// Seeded generator for plausible profiles. Ids start at 100 and increase.
#[derive(Debug, Clone)]
pub struct ProfileFaker {
    rng: DeterministicRng,
    next_id: i64,
}

impl ProfileFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_id: 100,
        }
    }

    pub fn profile(&mut self) -> Profile {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let role = self.pick(&ROLES);
        let (address, lat, lng) = PLACES[self.rng.int_n(PLACES.len())];
        let id = ProfileId::new(self.next_id);
        self.next_id += 1;

        Profile {
            id,
            name: format!("{first} {last}"),
            photo: PhotoRef::Url(format!(
                "https://example.com/avatars/{}.jpg",
                first.to_lowercase()
            )),
            description: format!("{role} from {}", city_of(address)),
            address: address.to_owned(),
            location: place_point(lat, lng),
        }
    }

    pub fn profiles(&mut self, count: usize) -> Vec<Profile> {
        (0..count).map(|_| self.profile()).collect()
    }

    fn pick<'a>(&mut self, values: &'a [&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }
}

fn city_of(address: &str) -> &str {
    address.split(',').next().unwrap_or(address).trim()
}

fn place_point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap_or_else(|error| panic!("fixture coordinate invalid: {error}"))
}

/// Known coordinates for a handful of addresses used across tests.
pub fn known_place(address: &str) -> Option<GeoPoint> {
    PLACES
        .iter()
        .find(|(known, _, _)| *known == address)
        .map(|(_, lat, lng)| place_point(*lat, *lng))
}

pub fn sample_profile(id: i64, name: &str, address: &str) -> Profile {
    Profile {
        id: ProfileId::new(id),
        name: name.to_owned(),
        photo: PhotoRef::Url(format!("https://example.com/avatars/{id}.jpg")),
        description: format!("{name} lives in {address}"),
        address: address.to_owned(),
        location: known_place(address).unwrap_or_else(|| place_point(0.0, 0.0)),
    }
}

#[derive(Debug, Clone)]
enum StubResponse {
    Found(Vec<GeoPoint>),
    Failed(String),
}

/// Scripted [`Geocoder`]. Unscripted addresses resolve to no candidates.
#[derive(Debug, Default)]
pub struct StubGeocoder {
    responses: HashMap<String, StubResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.responses.insert(
            address.to_owned(),
            StubResponse::Found(vec![place_point(lat, lng)]),
        );
        self
    }

    pub fn with_candidates(mut self, address: &str, candidates: Vec<GeoPoint>) -> Self {
        self.responses
            .insert(address.to_owned(), StubResponse::Found(candidates));
        self
    }

    pub fn with_failure(mut self, address: &str, message: &str) -> Self {
        self.responses
            .insert(address.to_owned(), StubResponse::Failed(message.to_owned()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl Geocoder for StubGeocoder {
    fn lookup(&self, address: &str) -> Result<Vec<GeoPoint>> {
        self.calls
            .lock()
            .map_err(|_| anyhow!("stub geocoder call log poisoned"))?
            .push(address.to_owned());
        match self.responses.get(address) {
            Some(StubResponse::Found(candidates)) => Ok(candidates.clone()),
            Some(StubResponse::Failed(message)) => Err(anyhow!("{message}")),
            None => Ok(Vec::new()),
        }
    }
}

pub fn write_pixel_png(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, PIXEL_PNG).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

pub fn temp_photo() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = write_pixel_png(dir.path(), "avatar.png")?;
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::{ProfileFaker, StubGeocoder, known_place, temp_photo};
    use anyhow::Result;
    use profmap_app::{GeoPoint, Geocoder, PhotoPreview};

    #[test]
    fn faker_is_deterministic() {
        let mut left = ProfileFaker::new(42);
        let mut right = ProfileFaker::new(42);
        assert_eq!(left.profiles(5), right.profiles(5));
    }

    #[test]
    fn faker_profiles_are_complete() {
        let mut faker = ProfileFaker::new(7);
        let profiles = faker.profiles(20);
        for (index, profile) in profiles.iter().enumerate() {
            assert_eq!(profile.id.get(), 100 + index as i64);
            assert!(!profile.name.is_empty());
            assert!(!profile.description.is_empty());
            assert_eq!(known_place(&profile.address), Some(profile.location));
        }
    }

    #[test]
    fn stub_records_calls_and_defaults_to_no_match() -> Result<()> {
        let stub = StubGeocoder::new()
            .with_point("Paris, France", 48.8566, 2.3522)
            .with_failure("Atlantis", "service unavailable");

        assert_eq!(
            stub.lookup("Paris, France")?,
            vec![GeoPoint::new(48.8566, 2.3522)?]
        );
        assert!(stub.lookup("Nowhere")?.is_empty());
        let error = stub.lookup("Atlantis").expect_err("scripted failure");
        assert_eq!(error.to_string(), "service unavailable");
        assert_eq!(stub.calls(), vec!["Paris, France", "Nowhere", "Atlantis"]);
        Ok(())
    }

    #[test]
    fn temp_photo_is_a_readable_png() -> Result<()> {
        let (_dir, path) = temp_photo()?;
        let preview = PhotoPreview::acquire(&path)?;
        assert_eq!(preview.dimensions(), (1, 1));
        Ok(())
    }
}
