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

//! Marker toggling for named locations on a slippy map.
//!
//! The library keeps track of a fixed set of locations, each paired with a
//! toggle button. Pressing a button places or removes the location's marker.
//! When a marker is placed for a location that is not currently on screen,
//! the map is recentered on it.
//!
//! - **Tile math**: [`TileCoordinateConverter`] converts between tile-index
//!   positions and decimal degrees
//! - **Bounds**: [`ViewportBounds`] turns the map's visible corner tiles into a
//!   lat/lon box and answers containment queries
//! - **Controller**: [`MarkerController`] owns the [`LocationEntry`] set and
//!   keeps marker handles and button visuals in step
//!
//! The map, icon store and buttons are supplied by the caller through the
//! [`MapViewport`], [`IconLoader`] and [`ToggleButton`] traits.
//!
//! ```
//! use map_markers::{
//!     ButtonState, Category, GeoPoint, IconLoadError, IconLoader, Location, MapViewport,
//!     MarkerController, TilePosition, ToggleButton, Transition,
//! };
//!
//! struct Map { center: GeoPoint, markers: Vec<GeoPoint> }
//!
//! impl MapViewport for Map {
//!     type Icon = ();
//!     type Marker = usize;
//!     fn zoom(&self) -> f64 { 0.0 }
//!     fn upper_left_tile(&self) -> TilePosition { TilePosition::new(0.0, 0.0) }
//!     fn lower_right_tile(&self) -> TilePosition { TilePosition::new(1.0, 1.0) }
//!     fn set_position(&mut self, lat: f64, lon: f64) { self.center = GeoPoint::new(lat, lon); }
//!     fn set_zoom(&mut self, _zoom: f64) {}
//!     fn place_marker(&mut self, position: GeoPoint, _icon: ()) -> usize {
//!         self.markers.push(position);
//!         self.markers.len() - 1
//!     }
//!     fn remove_marker(&mut self, _marker: usize) {}
//! }
//!
//! struct Icons;
//!
//! impl IconLoader for Icons {
//!     type Icon = ();
//!     fn load_icon(&mut self, _category: &Category) -> Result<(), IconLoadError> { Ok(()) }
//! }
//!
//! #[derive(Default)]
//! struct Button(ButtonState);
//!
//! impl ToggleButton for Button {
//!     fn set_visual_state(&mut self, state: ButtonState) { self.0 = state; }
//!     fn visual_state(&self) -> ButtonState { self.0 }
//! }
//!
//! let mut map = Map { center: GeoPoint::new(0.0, 0.0), markers: Vec::new() };
//! let mut controller = MarkerController::new([
//!     (Location::new("Rioja", 42.3, -2.49, "Tinto"), Button::default()),
//! ])?;
//!
//! let transition = controller.toggle("Rioja", &mut map, &mut Icons)?;
//! assert_eq!(transition, Transition::Activated { recentered: false });
//! assert!(controller.is_active("Rioja"));
//! # Ok::<(), map_markers::MarkerError>(())
//! ```

pub mod bounds;
pub mod button;
pub mod controller;
pub mod error;
pub mod icon;
pub mod location;
pub mod tiles;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use bounds::ViewportBounds;
pub use button::{ButtonState, ToggleButton};
pub use controller::{MarkerController, Transition};
pub use error::{IconLoadError, MarkerError};
pub use icon::IconLoader;
pub use location::{Category, Location, LocationEntry, MarkerState};
pub use tiles::{tile_zoom, GeoPoint, TileCoordinateConverter, TilePosition, MAX_TILE_ZOOM};
pub use viewport::MapViewport;
