// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use profmap_app::{GeoPoint, Geocoder};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "profmap/0.1";

/// Blocking client for a Nominatim-compatible `/search` endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("geocoder.base_url must not be empty");
        }
        Url::parse(&base_url)
            .with_context(|| format!("geocoder.base_url {base_url:?} is not a valid URL"))?;
        let user_agent = user_agent.trim();
        if user_agent.is_empty() {
            bail!("geocoder.user_agent must not be empty -- Nominatim rejects anonymous clients");
        }

        // reqwest's blocking client defaults to 30s; an explicit None disables it.
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            user_agent: user_agent.to_owned(),
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn search_url(&self, address: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))
            .with_context(|| format!("build search URL from {}", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", address);
        Ok(url)
    }

    /// Candidate coordinates for `address`, best match first. An empty
    /// result is not an error.
    pub fn search(&self, address: &str) -> Result<Vec<GeoPoint>> {
        let url = self.search_url(address)?;
        log::debug!("geocoding request {url}");

        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|error| {
                log::warn!("geocoder unreachable at {}: {error}", self.base_url);
                connection_error(&self.base_url, error)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let error = clean_error_response(status, &body);
            log::warn!("geocoding {address:?} failed: {error}");
            return Err(error);
        }

        let body = response.text().context("read geocoder response")?;
        let places: Vec<Place> =
            serde_json::from_str(&body).context("decode geocoder response")?;
        candidate_points(&places)
    }
}

/// The first place is authoritative and must parse. Later places are
/// alternatives and are skipped when malformed.
fn candidate_points(places: &[Place]) -> Result<Vec<GeoPoint>> {
    let Some((first, rest)) = places.split_first() else {
        return Ok(Vec::new());
    };
    let mut points = vec![first.point()?];
    points.extend(
        rest.iter()
            .enumerate()
            .filter_map(|(index, place)| match place.point() {
                Ok(point) => Some(point),
                Err(error) => {
                    log::debug!("skipping geocoder candidate {}: {error:#}", index + 1);
                    None
                }
            }),
    );
    Ok(points)
}

impl Geocoder for Client {
    fn lookup(&self, address: &str) -> Result<Vec<GeoPoint>> {
        self.search(address)
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl Place {
    fn point(&self) -> Result<GeoPoint> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .with_context(|| format!("invalid coordinate lat={:?}", self.lat))?;
        let lng: f64 = self
            .lon
            .trim()
            .parse()
            .with_context(|| format!("invalid coordinate lon={:?}", self.lon))?;
        GeoPoint::new(lat, lng).map_err(|error| anyhow!("invalid coordinate: {error}"))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Message { message: String },
    Text(String),
}

impl ErrorBody {
    fn text(&self) -> &str {
        match self {
            Self::Message { message } => message,
            Self::Text(text) => text,
        }
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check network access or [geocoder].base_url ({})",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.text().is_empty()
    {
        return anyhow!("geocoder error ({}): {}", status.as_u16(), error.text());
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() < 100 && !trimmed.contains('<') && !trimmed.contains('{')
    {
        return anyhow!("geocoder error ({}): {}", status.as_u16(), trimmed);
    }

    anyhow!("geocoder error ({})", status.as_u16())
}
