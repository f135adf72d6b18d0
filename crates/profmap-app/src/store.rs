// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;
use time::OffsetDateTime;

use crate::filter::distinct_addresses;
use crate::ids::ProfileId;
use crate::model::{Profile, seed_profiles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    DuplicateId(ProfileId),
    NotFound(ProfileId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "profile {id} already exists"),
            Self::NotFound(id) => write!(f, "profile {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// In-memory profile collection, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    last_issued: i64,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut store = Self::new();
        for profile in seed_profiles() {
            store.profiles.push(profile);
        }
        store
    }

    pub fn add(&mut self, profile: Profile) -> Result<(), StoreError> {
        if self.position(profile.id).is_some() {
            return Err(StoreError::DuplicateId(profile.id));
        }
        self.profiles.push(profile);
        Ok(())
    }

    pub fn update(&mut self, profile: Profile) -> Result<(), StoreError> {
        let index = self
            .position(profile.id)
            .ok_or(StoreError::NotFound(profile.id))?;
        self.profiles[index] = profile;
        Ok(())
    }

    pub fn delete(&mut self, id: ProfileId) -> Option<Profile> {
        let index = self.position(id)?;
        Some(self.profiles.remove(index))
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn distinct_addresses(&self) -> Vec<&str> {
        distinct_addresses(&self.profiles)
    }

    /// Millisecond timestamp, bumped past every id this store has seen.
    pub fn allocate_id(&mut self) -> ProfileId {
        let now_millis = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let floor = self
            .profiles
            .iter()
            .map(|profile| profile.id.get())
            .max()
            .unwrap_or(0)
            .max(self.last_issued);
        let next = now_millis.max(floor.saturating_add(1));
        self.last_issued = next;
        ProfileId::new(next)
    }

    fn position(&self, id: ProfileId) -> Option<usize> {
        self.profiles.iter().position(|profile| profile.id == id)
    }
}
