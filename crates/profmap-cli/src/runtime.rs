// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use profmap_app::{GeoPoint, LookupOutcome, LookupTicket};
use profmap_geocode::Client;
use profmap_tui::{AppRuntime, InternalEvent};
use std::sync::mpsc::Sender;
use std::thread;

/// Runs geocoding lookups on worker threads so the event loop never blocks
/// on the network.
pub struct GeocodeRuntime {
    client: Client,
}

impl GeocodeRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl AppRuntime for GeocodeRuntime {
    fn geocode(&mut self, address: &str) -> Result<Vec<GeoPoint>> {
        self.client.search(address)
    }

    fn spawn_lookup(&mut self, ticket: LookupTicket, tx: Sender<InternalEvent>) -> Result<()> {
        let client = self.client.clone();
        thread::Builder::new()
            .name(format!("geocode-{}", ticket.generation))
            .spawn(move || {
                let outcome = LookupOutcome::from_result(client.search(&ticket.address));
                let event = InternalEvent::Lookup {
                    kind: ticket.kind,
                    generation: ticket.generation,
                    outcome,
                };
                if tx.send(event).is_err() {
                    log::debug!(
                        "dropping lookup result for {:?}; event loop has exited",
                        ticket.address
                    );
                }
            })
            .context("spawn geocoding worker")?;
        Ok(())
    }
}
