// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use profmap_app::{GeoPoint, MAX_ZOOM};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Widget};

/// World outline centered on one point, with a marker and its label.
#[derive(Debug, Clone)]
pub struct MapWidget<'a> {
    point: GeoPoint,
    zoom: u8,
    label: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> MapWidget<'a> {
    pub fn new(point: GeoPoint, zoom: u8, label: &'a str) -> Self {
        Self {
            point,
            zoom: zoom.min(MAX_ZOOM),
            label,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Degrees of longitude across the viewport.
    pub fn span(&self) -> f64 {
        360.0 / 2f64.powi(i32::from(self.zoom))
    }

    /// `(x_bounds, y_bounds)` in degrees. Terminal cells are about twice as
    /// tall as they are wide, so latitude covers half the span.
    pub fn viewport(&self) -> ([f64; 2], [f64; 2]) {
        let half_x = self.span() / 2.0;
        let half_y = half_x / 2.0;
        let (lat, lng) = (self.point.lat(), self.point.lng());
        ([lng - half_x, lng + half_x], [lat - half_y, lat + half_y])
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (x_bounds, y_bounds) = self.viewport();
        let (lat, lng) = (self.point.lat(), self.point.lng());
        let label = format!(" {}", self.label);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(move |ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::DarkGray,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &[(lng, lat)],
                    color: Color::Red,
                });
                ctx.print(
                    lng,
                    lat,
                    Span::styled(
                        label.clone(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            });
        match self.block {
            Some(block) => canvas.block(block).render(area, buf),
            None => canvas.render(area, buf),
        }
    }
}
