// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt;

use crate::ids::ProfileId;
use crate::lookup::{Geocoder, LookupKind, LookupOutcome, LookupSlot, LookupTicket};
use crate::model::{PhotoRef, Profile};
use crate::photo::PhotoPreview;
use crate::store::{ProfileStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Address,
    Photo,
}

impl DraftField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Description, Self::Address, Self::Photo];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Address => "address",
            Self::Photo => "photo",
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub address: String,
    pub existing_photo: Option<PhotoRef>,
    pub pending_photo: Option<PhotoPreview>,
    pub editing: Option<ProfileId>,
}

impl Draft {
    fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            address: profile.address.clone(),
            existing_photo: Some(profile.photo.clone()),
            pending_photo: None,
            editing: Some(profile.id),
        }
    }

    pub fn has_photo(&self) -> bool {
        self.pending_photo.is_some() || self.existing_photo.is_some()
    }

    pub fn photo(&self) -> Option<PhotoRef> {
        self.pending_photo
            .as_ref()
            .map(PhotoPreview::photo_ref)
            .or_else(|| self.existing_photo.clone())
    }

    pub fn photo_label(&self) -> Option<String> {
        match (&self.pending_photo, &self.existing_photo) {
            (Some(preview), _) => Some(preview.label()),
            (None, Some(existing)) => Some(existing.display()),
            (None, None) => None,
        }
    }

    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Address => &self.address,
            DraftField::Photo => "",
        }
    }
}

struct FieldRule {
    field: DraftField,
    satisfied: fn(&Draft) -> bool,
}

const DRAFT_SCHEMA: [FieldRule; 3] = [
    FieldRule {
        field: DraftField::Name,
        satisfied: |draft| !draft.name.trim().is_empty(),
    },
    FieldRule {
        field: DraftField::Photo,
        satisfied: Draft::has_photo,
    },
    FieldRule {
        field: DraftField::Address,
        satisfied: |draft| !draft.address.trim().is_empty(),
    },
];

/// Every field the draft violates, in schema order.
pub fn validate_draft(draft: &Draft) -> Vec<DraftField> {
    DRAFT_SCHEMA
        .iter()
        .filter(|rule| !(rule.satisfied)(draft))
        .map(|rule| rule.field)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Validation(Vec<DraftField>),
    Busy,
    GeocodeNotFound { address: String },
    GeocodeTransport { address: String, message: String },
    Store(StoreError),
}

impl SubmitError {
    /// Text for the blocking notice shown to the user.
    pub fn notice(&self) -> String {
        match self {
            Self::Validation(fields) => required_fields_notice(fields),
            Self::Busy => "A submission is already in progress.".to_owned(),
            Self::GeocodeNotFound { .. } => {
                "Could not find location. Please enter a valid address.".to_owned()
            }
            Self::GeocodeTransport { .. } => {
                "Failed to fetch coordinates. Try again later.".to_owned()
            }
            Self::Store(error) => format!("Could not save profile: {error}."),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(fields) => {
                let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
                write!(f, "missing required fields: {}", labels.join(", "))
            }
            Self::Busy => f.write_str("a geocoding request is already in flight"),
            Self::GeocodeNotFound { address } => {
                write!(f, "no location found for {address:?}")
            }
            Self::GeocodeTransport { address, message } => {
                write!(f, "geocoding {address:?} failed: {message}")
            }
            Self::Store(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for SubmitError {}

fn required_fields_notice(fields: &[DraftField]) -> String {
    let mut labels: Vec<String> = fields.iter().map(|field| field.label().to_owned()).collect();
    if let Some(first) = labels.first_mut() {
        *first = capitalize(first);
    }
    match labels.as_slice() {
        [] => "Required fields are missing!".to_owned(),
        [only] => format!("{only} is required!"),
        [first, second] => format!("{first} and {second} are required!"),
        [rest @ .., last] => format!("{}, and {last} are required!", rest.join(", ")),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(initial) => initial.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ProfileId),
    Updated(ProfileId),
    Stale,
}

/// Add/edit form state machine: `Empty` -> `Editing` -> `Submitting`, then back
/// to `Empty` on success or `Editing` on failure.
#[derive(Debug)]
pub struct ProfileFormController {
    state: FormState,
    draft: Draft,
    slot: LookupSlot,
}

impl Default for ProfileFormController {
    fn default() -> Self {
        Self {
            state: FormState::Empty,
            draft: Draft::default(),
            slot: LookupSlot::default(),
        }
    }
}

impl ProfileFormController {
    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<ProfileId> {
        self.draft.editing
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Replaces one text field. Returns false while a submission is in flight.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        let value = value.into();
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Description => self.draft.description = value,
            DraftField::Address => self.draft.address = value,
            DraftField::Photo => return false,
        }
        self.state = FormState::Editing;
        true
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> bool {
        self.set_field(DraftField::Name, value)
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        self.set_field(DraftField::Description, value)
    }

    pub fn set_address(&mut self, value: impl Into<String>) -> bool {
        self.set_field(DraftField::Address, value)
    }

    /// Swaps in a newly chosen photo; the previous pending preview is released.
    pub fn choose_photo(&mut self, preview: PhotoPreview) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft.pending_photo = Some(preview);
        self.state = FormState::Editing;
        true
    }

    pub fn begin_edit(&mut self, profile: &Profile) {
        self.abandon_in_flight();
        self.draft = Draft::from_profile(profile);
        self.state = FormState::Editing;
        log::debug!("editing profile {}", profile.id);
    }

    pub fn cancel_edit(&mut self) {
        self.abandon_in_flight();
        self.reset();
    }

    /// Drops the draft when it edits the deleted profile.
    pub fn on_delete(&mut self, id: ProfileId) -> bool {
        if self.draft.editing == Some(id) {
            self.cancel_edit();
            return true;
        }
        false
    }

    pub fn begin_submit(&mut self) -> Result<LookupTicket, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        let violations = validate_draft(&self.draft);
        if !violations.is_empty() {
            return Err(SubmitError::Validation(violations));
        }

        self.state = FormState::Submitting;
        let generation = self.slot.issue();
        log::debug!(
            "submitting profile draft (generation {generation}, address {:?})",
            self.draft.address
        );
        Ok(LookupTicket {
            kind: LookupKind::FormSubmit,
            generation,
            address: self.draft.address.clone(),
        })
    }

    pub fn complete_submit(
        &mut self,
        generation: u64,
        outcome: LookupOutcome,
        store: &mut ProfileStore,
    ) -> Result<SubmitOutcome, SubmitError> {
        if !self.is_submitting() || !self.slot.is_current(generation) {
            log::debug!("discarding stale submit result (generation {generation})");
            return Ok(SubmitOutcome::Stale);
        }

        let address = self.draft.address.clone();
        let candidates = match outcome {
            LookupOutcome::Found(candidates) => candidates,
            LookupOutcome::Failed(message) => {
                self.state = FormState::Editing;
                return Err(SubmitError::GeocodeTransport { address, message });
            }
        };
        let Some(location) = candidates.first().copied() else {
            self.state = FormState::Editing;
            return Err(SubmitError::GeocodeNotFound { address });
        };
        let Some(photo) = self.draft.photo() else {
            self.state = FormState::Editing;
            return Err(SubmitError::Validation(vec![DraftField::Photo]));
        };

        let editing = self.draft.editing;
        let profile = Profile {
            id: editing.unwrap_or_else(|| store.allocate_id()),
            name: self.draft.name.clone(),
            photo,
            description: self.draft.description.clone(),
            address,
            location,
        };
        let id = profile.id;
        let saved = match editing {
            Some(_) => store.update(profile).map(|()| SubmitOutcome::Updated(id)),
            None => store.add(profile).map(|()| SubmitOutcome::Added(id)),
        };
        match saved {
            Ok(outcome) => {
                log::debug!("saved profile {id} at {location}");
                self.reset();
                Ok(outcome)
            }
            Err(error) => {
                self.state = FormState::Editing;
                Err(SubmitError::Store(error))
            }
        }
    }

    pub fn submit<G: Geocoder + ?Sized>(
        &mut self,
        geocoder: &G,
        store: &mut ProfileStore,
    ) -> Result<SubmitOutcome, SubmitError> {
        let ticket = self.begin_submit()?;
        let outcome = LookupOutcome::from_result(geocoder.lookup(&ticket.address));
        self.complete_submit(ticket.generation, outcome, store)
    }

    fn abandon_in_flight(&mut self) {
        if self.is_submitting() {
            self.slot.invalidate();
        }
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.state = FormState::Empty;
    }
}
