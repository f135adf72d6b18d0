// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::lookup::{LookupKind, LookupOutcome, LookupSlot, LookupTicket};
use crate::model::{GeoPoint, Profile};

pub const DEFAULT_ZOOM: u8 = 13;
pub const MAX_ZOOM: u8 = 18;

const LOCATE_FAILED: &str = "Unable to locate address.";

#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Blank,
    Loading {
        address: String,
    },
    Located {
        address: String,
        label: String,
        point: GeoPoint,
    },
    Failed {
        address: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapNotice {
    Located(String),
    Failed(String),
}

impl MapNotice {
    pub fn text(&self) -> &str {
        match self {
            Self::Located(text) | Self::Failed(text) => text,
        }
    }
}

/// Map-selection lookup slot plus the view it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPane {
    view: MapView,
    label: String,
    zoom: u8,
    slot: LookupSlot,
}

impl Default for MapPane {
    fn default() -> Self {
        Self::with_zoom(DEFAULT_ZOOM)
    }
}

impl MapPane {
    pub fn with_zoom(zoom: u8) -> Self {
        Self {
            view: MapView::Blank,
            label: String::new(),
            zoom: zoom.min(MAX_ZOOM),
            slot: LookupSlot::default(),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_in(&mut self) -> u8 {
        self.zoom = self.zoom.saturating_add(1).min(MAX_ZOOM);
        self.zoom
    }

    pub fn zoom_out(&mut self) -> u8 {
        self.zoom = self.zoom.saturating_sub(1);
        self.zoom
    }

    pub fn request(&mut self, profile: &Profile) -> LookupTicket {
        let generation = self.slot.issue();
        let address = profile.address.clone();
        self.label = if profile.name.trim().is_empty() {
            address.clone()
        } else {
            profile.name.clone()
        };
        self.view = MapView::Loading {
            address: address.clone(),
        };
        LookupTicket {
            kind: LookupKind::MapSelection,
            generation,
            address,
        }
    }

    /// Applies a lookup result. Stale generations are ignored and return `None`.
    pub fn resolve(&mut self, generation: u64, outcome: LookupOutcome) -> Option<MapNotice> {
        if !self.slot.is_current(generation) {
            log::debug!("discarding stale map lookup (generation {generation})");
            return None;
        }
        let MapView::Loading { address } = &self.view else {
            return None;
        };
        let address = address.clone();

        let (view, notice) = match outcome {
            LookupOutcome::Found(candidates) => match candidates.first().copied() {
                Some(point) => (
                    MapView::Located {
                        address: address.clone(),
                        label: self.label.clone(),
                        point,
                    },
                    MapNotice::Located(format!("Location found for \"{address}\"")),
                ),
                None => (
                    MapView::Failed {
                        address,
                        message: LOCATE_FAILED.to_owned(),
                    },
                    MapNotice::Failed("Error: Location not found".to_owned()),
                ),
            },
            LookupOutcome::Failed(message) => {
                log::warn!("map lookup for {address:?} failed: {message}");
                (
                    MapView::Failed {
                        address,
                        message: LOCATE_FAILED.to_owned(),
                    },
                    MapNotice::Failed(format!("Error: {message}")),
                )
            }
        };
        self.view = view;
        Some(notice)
    }

    pub fn clear(&mut self) {
        self.slot.invalidate();
        self.view = MapView::Blank;
        self.label.clear();
    }
}
