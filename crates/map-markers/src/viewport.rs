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

//! Interface to the map that renders tiles and markers.

use crate::bounds::ViewportBounds;
use crate::tiles::{tile_zoom, GeoPoint, TilePosition};

/// The map rendering collaborator.
///
/// Implementations own the live viewport (center, zoom, on-screen size) and
/// the rendered markers. The controller only reads the visible corners and
/// mutates the viewport through [`MapViewport::set_position`].
pub trait MapViewport {
    /// Icon image accepted by [`MapViewport::place_marker`].
    type Icon;
    /// Handle to a rendered marker. Released by [`MapViewport::remove_marker`].
    type Marker;

    /// Current zoom level. May be fractional while zooming.
    fn zoom(&self) -> f64;

    /// Upper-left visible corner, in tile positions at [`MapViewport::tile_zoom`].
    fn upper_left_tile(&self) -> TilePosition;

    /// Lower-right visible corner, in tile positions at [`MapViewport::tile_zoom`].
    fn lower_right_tile(&self) -> TilePosition;

    /// Recenter the view on a point.
    fn set_position(&mut self, lat: f64, lon: f64);

    fn set_zoom(&mut self, zoom: f64);

    /// Render a marker and hand back its handle.
    fn place_marker(&mut self, position: GeoPoint, icon: Self::Icon) -> Self::Marker;

    /// Stop rendering a marker. Consumes the handle.
    fn remove_marker(&mut self, marker: Self::Marker);

    /// Tile zoom level the visible corners are expressed in.
    fn tile_zoom(&self) -> u8 {
        tile_zoom(self.zoom())
    }

    /// Bounds of the area currently on screen.
    fn bounds(&self) -> ViewportBounds {
        ViewportBounds::compute(self.upper_left_tile(), self.lower_right_tile(), self.tile_zoom())
    }

    /// Whether a point is currently on screen.
    fn coordinates_inside(&self, lat: f64, lon: f64) -> bool {
        self.bounds().contains(lat, lon)
    }
}
