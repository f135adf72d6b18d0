// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::Profile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name_query: String,
    pub address_exact: Option<String>,
    pub description_query: String,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        !self.name_query.is_empty()
            || self.address_exact.is_some()
            || !self.description_query.is_empty()
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        contains_ignore_case(&profile.name, &self.name_query)
            && self
                .address_exact
                .as_deref()
                .is_none_or(|address| profile.address == address)
            && contains_ignore_case(&profile.description, &self.description_query)
    }

    /// Steps the location dropdown: all locations, then each address in order.
    pub fn cycle_address(&mut self, addresses: &[&str]) {
        let next = match self.address_exact.as_deref() {
            None => addresses.first().copied(),
            Some(current) => addresses
                .iter()
                .position(|address| *address == current)
                .and_then(|index| addresses.get(index + 1).copied()),
        };
        self.address_exact = next.map(str::to_owned);
    }
}

pub fn filter<'a>(profiles: &'a [Profile], criteria: &FilterCriteria) -> Vec<&'a Profile> {
    profiles
        .iter()
        .filter(|profile| criteria.matches(profile))
        .collect()
}

pub fn distinct_addresses(profiles: &[Profile]) -> Vec<&str> {
    let mut seen = Vec::new();
    for profile in profiles {
        let address = profile.address.as_str();
        if !seen.contains(&address) {
            seen.push(address);
        }
    }
    seen
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
