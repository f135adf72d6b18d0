// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::filter::{FilterCriteria, filter};
use crate::forms::{ProfileFormController, SubmitOutcome};
use crate::ids::ProfileId;
use crate::lookup::{LookupKind, LookupOutcome, LookupTicket};
use crate::map::{MapNotice, MapPane};
use crate::model::Profile;
use crate::selection::{Selection, SelectionController};
use crate::store::ProfileStore;

#[derive(Debug)]
pub struct AppState {
    pub profiles: ProfileStore,
    pub filter: FilterCriteria,
    pub selection: SelectionController,
    pub form: ProfileFormController,
    pub map: MapPane,
    pub pending_delete: Option<ProfileId>,
    pub notice: Option<String>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProfileStore::seeded(), MapPane::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    ShowSummary(ProfileId),
    ShowDetails(ProfileId),
    BackToList,
    BeginEdit(ProfileId),
    CancelEdit,
    Submit,
    RequestDelete(ProfileId),
    ConfirmDelete,
    CancelDelete,
    SetNameQuery(String),
    SetDescriptionQuery(String),
    CycleLocationFilter,
    ClearFilters,
    ZoomIn,
    ZoomOut,
    ShowNotice(String),
    DismissNotice,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SelectionChanged(Selection),
    LookupRequested(LookupTicket),
    EditStarted(ProfileId),
    EditCancelled,
    ProfileSaved(SubmitOutcome),
    DeleteRequested(ProfileId),
    DeleteCancelled,
    ProfileDeleted(ProfileId),
    FiltersChanged,
    ZoomChanged(u8),
    NoticeShown(String),
    NoticeDismissed,
    StatusUpdated(String),
    StatusCleared,
}

/// Which panes are drawn. The detail page replaces everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    pub filters: bool,
    pub form: bool,
    pub list: bool,
    pub map: bool,
    pub detail: Option<ProfileId>,
}

impl AppState {
    pub fn new(profiles: ProfileStore, map: MapPane) -> Self {
        Self {
            profiles,
            filter: FilterCriteria::default(),
            selection: SelectionController::default(),
            form: ProfileFormController::default(),
            map,
            pending_delete: None,
            notice: None,
            status_line: None,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::ShowSummary(id) => {
                let Some(profile) = self.profiles.get(id) else {
                    return Vec::new();
                };
                let ticket = self.map.request(profile);
                self.selection.show_summary(id);
                vec![
                    AppEvent::SelectionChanged(self.selection.current()),
                    AppEvent::LookupRequested(ticket),
                ]
            }
            AppCommand::ShowDetails(id) => {
                if self.profiles.get(id).is_none() {
                    return Vec::new();
                }
                self.selection.show_details(id);
                self.map.clear();
                vec![AppEvent::SelectionChanged(self.selection.current())]
            }
            AppCommand::BackToList => {
                if !self.selection.back_to_list() {
                    return Vec::new();
                }
                vec![AppEvent::SelectionChanged(self.selection.current())]
            }
            AppCommand::BeginEdit(id) => {
                let Some(profile) = self.profiles.get(id) else {
                    return Vec::new();
                };
                let status = format!("editing {}", profile.name);
                self.form.begin_edit(profile);
                vec![AppEvent::EditStarted(id), self.set_status(&status)]
            }
            AppCommand::CancelEdit => {
                self.form.cancel_edit();
                vec![AppEvent::EditCancelled]
            }
            AppCommand::Submit => match self.form.begin_submit() {
                Ok(ticket) => {
                    let status = if self.form.editing_id().is_some() {
                        "updating..."
                    } else {
                        "adding..."
                    };
                    vec![AppEvent::LookupRequested(ticket), self.set_status(status)]
                }
                Err(error) => {
                    log::debug!("submit rejected: {error}");
                    vec![self.show_notice(error.notice())]
                }
            },
            AppCommand::RequestDelete(id) => {
                if self.profiles.get(id).is_none() {
                    return Vec::new();
                }
                self.pending_delete = Some(id);
                vec![AppEvent::DeleteRequested(id)]
            }
            AppCommand::ConfirmDelete => {
                let Some(id) = self.pending_delete.take() else {
                    return Vec::new();
                };
                self.delete_profile(id)
            }
            AppCommand::CancelDelete => {
                if self.pending_delete.take().is_none() {
                    return Vec::new();
                }
                vec![AppEvent::DeleteCancelled]
            }
            AppCommand::SetNameQuery(query) => {
                self.filter.name_query = query;
                vec![AppEvent::FiltersChanged]
            }
            AppCommand::SetDescriptionQuery(query) => {
                self.filter.description_query = query;
                vec![AppEvent::FiltersChanged]
            }
            AppCommand::CycleLocationFilter => {
                let addresses = self.profiles.distinct_addresses();
                self.filter.cycle_address(&addresses);
                let label = self
                    .filter
                    .address_exact
                    .clone()
                    .unwrap_or_else(|| "All Locations".to_owned());
                vec![AppEvent::FiltersChanged, self.set_status(&label)]
            }
            AppCommand::ClearFilters => {
                self.filter = FilterCriteria::default();
                vec![AppEvent::FiltersChanged, self.set_status("filters cleared")]
            }
            AppCommand::ZoomIn => vec![AppEvent::ZoomChanged(self.map.zoom_in())],
            AppCommand::ZoomOut => vec![AppEvent::ZoomChanged(self.map.zoom_out())],
            AppCommand::ShowNotice(message) => vec![self.show_notice(message)],
            AppCommand::DismissNotice => {
                if self.notice.take().is_none() {
                    return Vec::new();
                }
                vec![AppEvent::NoticeDismissed]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    /// Routes a finished geocoding call to the slot that issued it.
    pub fn apply_lookup(
        &mut self,
        kind: LookupKind,
        generation: u64,
        outcome: LookupOutcome,
    ) -> Vec<AppEvent> {
        match kind {
            LookupKind::FormSubmit => {
                match self
                    .form
                    .complete_submit(generation, outcome, &mut self.profiles)
                {
                    Ok(SubmitOutcome::Stale) => Vec::new(),
                    Ok(saved) => {
                        let status = match saved {
                            SubmitOutcome::Updated(_) => "profile updated",
                            _ => "profile added",
                        };
                        vec![AppEvent::ProfileSaved(saved), self.set_status(status)]
                    }
                    Err(error) => {
                        log::warn!("submit failed: {error}");
                        vec![self.show_notice(error.notice())]
                    }
                }
            }
            LookupKind::MapSelection => match self.map.resolve(generation, outcome) {
                Some(MapNotice::Located(text)) | Some(MapNotice::Failed(text)) => {
                    vec![self.set_status(&text)]
                }
                None => Vec::new(),
            },
        }
    }

    pub fn visible_profiles(&self) -> Vec<&Profile> {
        filter(self.profiles.list(), &self.filter)
    }

    pub fn location_options(&self) -> Vec<&str> {
        self.profiles.distinct_addresses()
    }

    pub fn layout(&self) -> ViewLayout {
        match self.selection.detailed() {
            Some(id) => ViewLayout {
                filters: false,
                form: false,
                list: false,
                map: false,
                detail: Some(id),
            },
            None => ViewLayout {
                filters: true,
                form: true,
                list: true,
                map: true,
                detail: None,
            },
        }
    }

    fn delete_profile(&mut self, id: ProfileId) -> Vec<AppEvent> {
        let Some(removed) = self.profiles.delete(id) else {
            return Vec::new();
        };
        log::debug!("deleted profile {id}");

        let mut events = vec![AppEvent::ProfileDeleted(id)];
        if self.selection.on_delete(id) {
            self.map.clear();
            events.push(AppEvent::SelectionChanged(self.selection.current()));
        }
        if self.form.on_delete(id) {
            events.push(AppEvent::EditCancelled);
        }
        events.push(self.set_status(&format!("deleted {}", removed.name)));
        events
    }

    fn show_notice(&mut self, message: String) -> AppEvent {
        self.notice = Some(message.clone());
        AppEvent::NoticeShown(message)
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
