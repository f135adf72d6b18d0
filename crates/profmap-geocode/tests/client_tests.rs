// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use profmap_app::{
    GeoPoint, Geocoder, LookupOutcome, ProfileFormController, ProfileStore, SubmitError,
};
use profmap_geocode::Client;
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};

fn json_response(body: &str, status: u16) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body)
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json")
                .expect("valid content type header"),
        )
}

fn mock_server() -> Result<(Server, String)> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());
    Ok((server, addr))
}

#[test]
fn unreachable_host_error_names_config_key() {
    let client = Client::new(
        "http://127.0.0.1:1",
        "profmap-tests/0.1",
        Some(Duration::from_millis(50)),
    )
    .expect("client should initialize");

    let error = client
        .search("Paris")
        .expect_err("search should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("cannot reach http://127.0.0.1:1"));
    assert!(message.contains("[geocoder].base_url"));
}

#[test]
fn search_sends_query_and_user_agent() -> Result<()> {
    let (server, addr) = mock_server()?;

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/search?format=json&q=Paris%2C+France");
        let agent = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("User-Agent"))
            .map(|header| header.value.as_str().to_owned());
        assert_eq!(agent.as_deref(), Some("profmap-tests/0.1"));

        let body = r#"[
            {"place_id": 1, "lat": "48.8566", "lon": "2.3522", "display_name": "Paris"},
            {"place_id": 2, "lat": "33.6609", "lon": "-95.5555", "display_name": "Paris, TX"}
        ]"#;
        request
            .respond(json_response(body, 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, "profmap-tests/0.1", Some(Duration::from_secs(2)))?;
    let candidates = client.search("Paris, France")?;
    assert_eq!(
        candidates,
        vec![GeoPoint::new(48.8566, 2.3522)?, GeoPoint::new(33.6609, -95.5555)?]
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn malformed_later_candidates_are_skipped() -> Result<()> {
    let (server, addr) = mock_server()?;
    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let body = r#"[
            {"lat": "48.8566", "lon": "2.3522"},
            {"lat": "", "lon": "n/a"},
            {"lat": "33.6609", "lon": "-95.5555"}
        ]"#;
        request
            .respond(json_response(body, 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, "profmap-tests/0.1", Some(Duration::from_secs(2)))?;
    let candidates = client.search("Paris, France")?;
    assert_eq!(
        candidates,
        vec![GeoPoint::new(48.8566, 2.3522)?, GeoPoint::new(33.6609, -95.5555)?]
    );

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn empty_array_means_not_found() -> Result<()> {
    let (server, addr) = mock_server()?;
    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response("[]", 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, "profmap-tests/0.1", Some(Duration::from_secs(2)))?;
    assert!(client.lookup("Atlantis")?.is_empty());

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn server_error_and_malformed_body_are_reported() -> Result<()> {
    let (server, addr) = mock_server()?;
    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response("upstream down", 500))
            .expect("response should succeed");
        let request = server.recv().expect("request expected");
        request
            .respond(json_response(r#"{"unexpected": true}"#, 200))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, "profmap-tests/0.1", Some(Duration::from_secs(2)))?;
    let error = client.search("Berlin").expect_err("500 should fail");
    assert_eq!(error.to_string(), "geocoder error (500): upstream down");

    let error = client.search("Berlin").expect_err("object body should fail");
    assert_eq!(error.to_string(), "decode geocoder response");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn form_submit_reports_transport_failure_from_live_client() -> Result<()> {
    let (server, addr) = mock_server()?;
    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        request
            .respond(json_response("rate limited", 429))
            .expect("response should succeed");
    });

    let client = Client::new(&addr, "profmap-tests/0.1", Some(Duration::from_secs(2)))?;
    let mut store = ProfileStore::seeded();
    let mut form = ProfileFormController::default();
    let jane = store
        .list()
        .iter()
        .find(|profile| profile.name == "Jane Smith")
        .cloned()
        .expect("seeded profile exists");
    form.begin_edit(&jane);

    let ticket = form.begin_submit()?;
    let outcome = LookupOutcome::from_result(client.lookup(&ticket.address));
    let error = form
        .complete_submit(ticket.generation, outcome, &mut store)
        .expect_err("429 should surface as transport failure");
    assert!(matches!(
        &error,
        SubmitError::GeocodeTransport { message, .. } if message == "geocoder error (429): rate limited"
    ));
    assert_eq!(store, ProfileStore::seeded());

    handle.join().expect("server thread should join");
    Ok(())
}
