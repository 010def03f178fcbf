// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Slippy-map tile math.
//!
//! Converts between fractional tile indices at a zoom level and decimal
//! latitude/longitude using the Web Mercator tiling scheme.

use std::f64::consts::PI;

/// Highest zoom level the tile math accepts.
pub const MAX_TILE_ZOOM: u8 = 30;

/// A decimal-degree point on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A fractional position in tile-index space. The integer part selects the
/// tile, the fractional part the offset inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePosition {
    pub x: f64,
    pub y: f64,
}

impl TilePosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Round a (possibly fractional) map zoom to the tile level its corners are
/// expressed in.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=MAX_TILE_ZOOM first"
)]
pub fn tile_zoom(zoom: f64) -> u8 {
    zoom.round().clamp(0.0, f64::from(MAX_TILE_ZOOM)) as u8
}

/// Web Mercator tile projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileCoordinateConverter;

impl TileCoordinateConverter {
    fn tiles_per_axis(zoom: u8) -> f64 {
        2_f64.powi(i32::from(zoom))
    }

    /// Convert a tile position back to latitude/longitude.
    #[must_use]
    pub fn tile_to_decimal(tile: TilePosition, zoom: u8) -> GeoPoint {
        let n = Self::tiles_per_axis(zoom);
        let lon = tile.x / n * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * tile.y / n)).sinh().atan().to_degrees();
        GeoPoint::new(lat, lon)
    }

    /// Project latitude/longitude onto tile-index space.
    #[must_use]
    pub fn decimal_to_tile(point: GeoPoint, zoom: u8) -> TilePosition {
        let n = Self::tiles_per_axis(zoom);
        let lat_rad = point.lat.to_radians();
        let x = (point.lon + 180.0) / 360.0 * n;
        let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;
        TilePosition::new(x, y)
    }
}
