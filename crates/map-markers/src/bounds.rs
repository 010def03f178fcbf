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

//! Decimal-degree bounding box of the visible map area.

use crate::tiles::{GeoPoint, TileCoordinateConverter, TilePosition};

/// Visible region of the map in decimal degrees.
///
/// Derived fresh from the map's corner tiles on every query; the viewport
/// moves with every pan and zoom so a snapshot is never kept around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub lat_top: f64,
    pub lat_bottom: f64,
    pub lon_left: f64,
    pub lon_right: f64,
}

impl ViewportBounds {
    /// Compute the bounds spanned by the upper-left and lower-right visible
    /// tile positions at the given tile zoom level.
    #[must_use]
    pub fn compute(upper_left: TilePosition, lower_right: TilePosition, zoom: u8) -> Self {
        let top_left = TileCoordinateConverter::tile_to_decimal(upper_left, zoom);
        let bottom_right = TileCoordinateConverter::tile_to_decimal(lower_right, zoom);

        Self {
            lat_top: top_left.lat,
            lat_bottom: bottom_right.lat,
            lon_left: top_left.lon,
            lon_right: bottom_right.lon,
        }
    }

    /// Whether the point lies inside the box. Edges count as inside.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_bottom..=self.lat_top).contains(&lat)
            && (self.lon_left..=self.lon_right).contains(&lon)
    }

    #[must_use]
    pub fn contains_point(&self, point: GeoPoint) -> bool {
        self.contains(point.lat, point.lon)
    }
}
