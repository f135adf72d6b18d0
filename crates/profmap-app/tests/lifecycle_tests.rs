// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use profmap_app::{
    AppCommand, AppEvent, AppState, DraftField, FilterCriteria, FormState, GeoPoint, LookupKind,
    LookupOutcome, MapPane, MapView, PhotoPreview, PhotoRef, ProfileFormController, ProfileId,
    ProfileStore, Selection, SubmitError, SubmitOutcome, filter,
};
use profmap_testkit::{ProfileFaker, StubGeocoder, sample_profile, temp_photo};

fn john_only_store() -> Result<ProfileStore> {
    let mut store = ProfileStore::new();
    let mut john = sample_profile(1, "John Doe", "New York, NY, USA");
    john.location = GeoPoint::new(40.7128, -74.0060)?;
    store.add(john)?;
    Ok(store)
}

#[test]
fn name_filter_matches_case_insensitively() -> Result<()> {
    let store = john_only_store()?;

    let jane = FilterCriteria {
        name_query: "jane".to_owned(),
        ..FilterCriteria::default()
    };
    assert!(filter(store.list(), &jane).is_empty());

    let john = FilterCriteria {
        name_query: "john".to_owned(),
        ..FilterCriteria::default()
    };
    let matched = filter(store.list(), &john);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, ProfileId::new(1));
    assert_eq!(matched[0].location, GeoPoint::new(40.7128, -74.0060)?);
    Ok(())
}

#[test]
fn filter_keeps_order_and_partitions_profiles() {
    let profiles = ProfileFaker::new(11).profiles(40);
    let criteria = FilterCriteria {
        name_query: "r".to_owned(),
        address_exact: Some(profiles[3].address.clone()),
        description_query: "ENGINEER".to_owned(),
    };

    let matched = filter(&profiles, &criteria);
    let mut cursor = 0;
    for profile in &matched {
        let position = profiles[cursor..]
            .iter()
            .position(|candidate| candidate.id == profile.id)
            .map(|offset| cursor + offset);
        let Some(position) = position else {
            panic!("{} out of order or missing", profile.id);
        };
        cursor = position + 1;
    }
    for profile in &profiles {
        let included = matched.iter().any(|candidate| candidate.id == profile.id);
        assert_eq!(included, criteria.matches(profile), "{}", profile.name);
    }
}

#[test]
fn begin_edit_then_cancel_leaves_store_untouched() -> Result<()> {
    let store = john_only_store()?;
    let before = store.clone();
    let mut form = ProfileFormController::default();
    let john = store
        .get(ProfileId::new(1))
        .expect("seeded profile exists")
        .clone();

    form.begin_edit(&john);
    assert_eq!(form.editing_id(), Some(john.id));
    form.cancel_edit();

    assert_eq!(form.state(), FormState::Empty);
    assert_eq!(form.editing_id(), None);
    assert_eq!(store, before);
    Ok(())
}

#[test]
fn new_profile_is_appended_with_first_candidate() -> Result<()> {
    let (_dir, photo_path) = temp_photo()?;
    let mut store = john_only_store()?;
    let geocoder = StubGeocoder::new().with_point("Paris, France", 48.8566, 2.3522);
    let mut form = ProfileFormController::default();

    form.set_field(DraftField::Name, "Marie Curie");
    form.set_field(DraftField::Address, "Paris, France");
    form.set_field(DraftField::Description, "Physicist");
    form.choose_photo(PhotoPreview::acquire(&photo_path)?);

    let outcome = form.submit(&geocoder, &mut store)?;
    let SubmitOutcome::Added(id) = outcome else {
        panic!("expected added outcome, got {outcome:?}");
    };
    assert!(id > ProfileId::new(1));
    assert_eq!(geocoder.calls(), vec!["Paris, France"]);
    assert_eq!(store.len(), 2);

    let saved = &store.list()[1];
    assert_eq!(saved.id, id);
    assert_eq!(saved.name, "Marie Curie");
    assert_eq!(saved.location, GeoPoint::new(48.8566, 2.3522)?);
    assert_eq!(saved.photo, PhotoRef::File(photo_path));
    assert_eq!(form.state(), FormState::Empty);
    assert!(form.draft().pending_photo.is_none());
    Ok(())
}

#[test]
fn empty_name_never_reaches_geocoder() -> Result<()> {
    let (_dir, photo_path) = temp_photo()?;
    let mut store = john_only_store()?;
    let before = store.clone();
    let geocoder = StubGeocoder::new().with_point("Paris, France", 48.8566, 2.3522);
    let mut form = ProfileFormController::default();
    form.set_field(DraftField::Address, "Paris, France");
    form.choose_photo(PhotoPreview::acquire(&photo_path)?);

    let error = form
        .submit(&geocoder, &mut store)
        .expect_err("blank name should be rejected");
    assert_eq!(error, SubmitError::Validation(vec![DraftField::Name]));
    assert_eq!(error.notice(), "Name is required!");
    assert_eq!(geocoder.call_count(), 0);
    assert_eq!(store, before);
    Ok(())
}

#[test]
fn unknown_address_keeps_draft_for_correction() -> Result<()> {
    let (_dir, photo_path) = temp_photo()?;
    let mut store = john_only_store()?;
    let before = store.clone();
    let geocoder = StubGeocoder::new();
    let mut form = ProfileFormController::default();
    form.set_field(DraftField::Name, "Nobody");
    form.set_field(DraftField::Address, "Nowhere Special");
    form.choose_photo(PhotoPreview::acquire(&photo_path)?);

    let error = form
        .submit(&geocoder, &mut store)
        .expect_err("no candidates should fail");
    assert_eq!(
        error,
        SubmitError::GeocodeNotFound {
            address: "Nowhere Special".to_owned()
        }
    );
    assert_eq!(store, before);
    assert_eq!(form.state(), FormState::Editing);
    assert_eq!(form.draft().name, "Nobody");
    assert_eq!(form.draft().address, "Nowhere Special");
    assert!(form.draft().pending_photo.is_some());
    Ok(())
}

#[test]
fn store_operations_keep_position_and_uniqueness() -> Result<()> {
    let mut store = ProfileStore::new();
    for profile in ProfileFaker::new(3).profiles(5) {
        store.add(profile)?;
    }
    let target = store.list()[2].id;

    let mut changed = store.list()[2].clone();
    changed.name = "Renamed".to_owned();
    store.update(changed)?;
    assert_eq!(store.len(), 5);
    assert_eq!(store.list()[2].name, "Renamed");
    assert_eq!(
        store.list().iter().filter(|profile| profile.id == target).count(),
        1
    );

    assert!(store.delete(target).is_some());
    assert!(store.list().iter().all(|profile| profile.id != target));
    assert!(store.delete(target).is_none());
    Ok(())
}

#[test]
fn deleting_selected_profile_returns_to_idle() {
    let john = ProfileId::new(1);
    for show in [AppCommand::ShowSummary(john), AppCommand::ShowDetails(john)] {
        let mut state = AppState::default();
        state.dispatch(show);
        assert_ne!(state.selection.current(), Selection::Idle);

        state.dispatch(AppCommand::RequestDelete(john));
        state.dispatch(AppCommand::ConfirmDelete);
        assert_eq!(state.selection.current(), Selection::Idle);
        assert_eq!(state.map.view(), &MapView::Blank);
    }
}

#[test]
fn app_state_drives_map_and_submit_through_one_geocoder() -> Result<()> {
    let (_dir, photo_path) = temp_photo()?;
    let geocoder = StubGeocoder::new()
        .with_point("California, USA", 36.7783, -119.4179)
        .with_point("Tokyo, Japan", 35.6762, 139.6503);
    let mut state = AppState::new(ProfileStore::seeded(), MapPane::with_zoom(5));

    let events = state.dispatch(AppCommand::ShowSummary(ProfileId::new(2)));
    for event in events {
        if let AppEvent::LookupRequested(ticket) = event {
            let outcome = LookupOutcome::from_result(
                profmap_app::Geocoder::lookup(&geocoder, &ticket.address),
            );
            state.apply_lookup(ticket.kind, ticket.generation, outcome);
        }
    }
    assert!(matches!(state.map.view(), MapView::Located { label, .. } if label == "Jane Smith"));
    assert_eq!(
        state.status_line.as_deref(),
        Some("Location found for \"California, USA\"")
    );

    state.form.set_field(DraftField::Name, "Kenji");
    state.form.set_field(DraftField::Address, "Tokyo, Japan");
    state.form.choose_photo(PhotoPreview::acquire(&photo_path)?);
    let events = state.dispatch(AppCommand::Submit);
    let Some(AppEvent::LookupRequested(ticket)) = events.first().cloned() else {
        panic!("expected lookup request, got {events:?}");
    };
    assert_eq!(ticket.kind, LookupKind::FormSubmit);
    let outcome =
        LookupOutcome::from_result(profmap_app::Geocoder::lookup(&geocoder, &ticket.address));
    state.apply_lookup(ticket.kind, ticket.generation, outcome);

    assert_eq!(state.profiles.len(), 3);
    assert_eq!(state.status_line.as_deref(), Some("profile added"));
    assert_eq!(
        geocoder.calls(),
        vec!["California, USA", "Tokyo, Japan"]
    );
    Ok(())
}

#[test]
fn ambiguous_address_resolves_to_first_candidate_everywhere() -> Result<()> {
    let (_dir, photo_path) = temp_photo()?;
    let springfield = vec![
        GeoPoint::new(39.7817, -89.6501)?,
        GeoPoint::new(42.1015, -72.5898)?,
        GeoPoint::new(37.2090, -93.2923)?,
    ];
    let geocoder = StubGeocoder::new().with_candidates("Springfield", springfield);
    let mut store = ProfileStore::new();
    store.add(sample_profile(1, "Homer", "Springfield"))?;
    let mut state = AppState::new(store, MapPane::default());

    let mut tickets: Vec<_> = state
        .dispatch(AppCommand::ShowSummary(ProfileId::new(1)))
        .into_iter()
        .filter_map(|event| match event {
            AppEvent::LookupRequested(ticket) => Some(ticket),
            _ => None,
        })
        .collect();
    state.form.set_field(DraftField::Name, "Marge");
    state.form.set_field(DraftField::Address, "Springfield");
    state.form.choose_photo(PhotoPreview::acquire(&photo_path)?);
    tickets.extend(
        state
            .dispatch(AppCommand::Submit)
            .into_iter()
            .filter_map(|event| match event {
                AppEvent::LookupRequested(ticket) => Some(ticket),
                _ => None,
            }),
    );
    assert_eq!(tickets.len(), 2);

    for ticket in tickets {
        let outcome =
            LookupOutcome::from_result(profmap_app::Geocoder::lookup(&geocoder, &ticket.address));
        state.apply_lookup(ticket.kind, ticket.generation, outcome);
    }

    let first = GeoPoint::new(39.7817, -89.6501)?;
    assert!(matches!(state.map.view(), MapView::Located { point, .. } if *point == first));
    assert_eq!(state.profiles.len(), 2);
    assert_eq!(state.profiles.list()[1].name, "Marge");
    assert_eq!(state.profiles.list()[1].location, first);
    Ok(())
}
