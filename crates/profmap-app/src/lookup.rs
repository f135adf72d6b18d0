// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::model::GeoPoint;

/// Resolves a free-text address into candidate coordinates, best match first.
/// An empty list means the address was not found.
pub trait Geocoder {
    fn lookup(&self, address: &str) -> Result<Vec<GeoPoint>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    FormSubmit,
    MapSelection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Vec<GeoPoint>),
    Failed(String),
}

impl LookupOutcome {
    pub fn from_result(result: Result<Vec<GeoPoint>>) -> Self {
        match result {
            Ok(candidates) => Self::Found(candidates),
            Err(error) => Self::Failed(format!("{error:#}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub kind: LookupKind,
    pub generation: u64,
    pub address: String,
}

/// Generation counter for one logical lookup slot. Only the most recently
/// issued generation is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupSlot {
    generation: u64,
}

impl LookupSlot {
    pub fn issue(&mut self) -> u64 {
        self.generation = self.generation.saturating_add(1);
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation != 0 && generation == self.generation
    }

    /// Makes every outstanding generation stale.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{LookupOutcome, LookupSlot};
    use crate::GeoPoint;
    use anyhow::{Result, anyhow};

    #[test]
    fn only_latest_generation_is_current() {
        let mut slot = LookupSlot::default();
        assert!(!slot.is_current(0));

        let first = slot.issue();
        assert!(slot.is_current(first));
        let second = slot.issue();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));

        slot.invalidate();
        assert!(!slot.is_current(second));
    }

    #[test]
    fn outcome_keeps_error_chain_text() -> Result<()> {
        let failed = LookupOutcome::from_result(Err(
            anyhow!("connection refused").context("cannot reach geocoder")
        ));
        assert_eq!(
            failed,
            LookupOutcome::Failed("cannot reach geocoder: connection refused".to_owned())
        );

        let found = LookupOutcome::from_result(Ok(vec![GeoPoint::new(1.0, 2.0)?]));
        assert_eq!(found, LookupOutcome::Found(vec![GeoPoint::new(1.0, 2.0)?]));
        Ok(())
    }
}
