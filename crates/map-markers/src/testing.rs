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

//! Test doubles for the map, icon and button collaborators.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::button::{ButtonState, ToggleButton};
use crate::error::IconLoadError;
use crate::icon::IconLoader;
use crate::location::Category;
use crate::tiles::{GeoPoint, TileCoordinateConverter, TilePosition};
use crate::viewport::MapViewport;

#[derive(Debug, Default)]
pub struct FakeButton {
    pub state: ButtonState,
    pub updates: usize,
}

impl ToggleButton for FakeButton {
    fn set_visual_state(&mut self, state: ButtonState) {
        self.state = state;
        self.updates += 1;
    }

    fn visual_state(&self) -> ButtonState {
        self.state
    }
}

/// Map that records every viewport mutation and marker call.
#[derive(Debug)]
pub struct FakeMap {
    pub zoom: f64,
    pub upper_left: TilePosition,
    pub lower_right: TilePosition,
    pub set_position_calls: Vec<(f64, f64)>,
    pub set_zoom_calls: Vec<f64>,
    pub placed: Vec<(u32, GeoPoint, String)>,
    pub removed: Vec<u32>,
    next_marker: u32,
}

impl FakeMap {
    /// A map at `zoom` whose visible corners are the given points.
    pub fn showing(top_left: GeoPoint, bottom_right: GeoPoint, zoom: u8) -> Self {
        Self {
            zoom: f64::from(zoom),
            upper_left: TileCoordinateConverter::decimal_to_tile(top_left, zoom),
            lower_right: TileCoordinateConverter::decimal_to_tile(bottom_right, zoom),
            set_position_calls: Vec::new(),
            set_zoom_calls: Vec::new(),
            placed: Vec::new(),
            removed: Vec::new(),
            next_marker: 1,
        }
    }

    /// The Iberian peninsula at zoom 6: lat 36..43, lon -9..3.
    pub fn iberia() -> Self {
        Self::showing(GeoPoint::new(43.0, -9.0), GeoPoint::new(36.0, 3.0), 6)
    }

    /// Markers placed and not yet removed.
    pub fn live_markers(&self) -> Vec<u32> {
        self.placed
            .iter()
            .map(|(id, _, _)| *id)
            .filter(|id| !self.removed.contains(id))
            .collect()
    }
}

impl MapViewport for FakeMap {
    type Icon = String;
    type Marker = u32;

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn upper_left_tile(&self) -> TilePosition {
        self.upper_left
    }

    fn lower_right_tile(&self) -> TilePosition {
        self.lower_right
    }

    fn set_position(&mut self, lat: f64, lon: f64) {
        self.set_position_calls.push((lat, lon));
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.set_zoom_calls.push(zoom);
        self.zoom = zoom;
    }

    fn place_marker(&mut self, position: GeoPoint, icon: String) -> u32 {
        let id = self.next_marker;
        self.next_marker += 1;
        self.placed.push((id, position, icon));
        id
    }

    fn remove_marker(&mut self, marker: u32) {
        self.removed.push(marker);
    }
}

/// Icon loader that only knows a fixed set of categories.
#[derive(Debug)]
pub struct FakeIcons {
    pub known: HashSet<String>,
    pub loads: usize,
}

impl FakeIcons {
    pub fn with(categories: &[&str]) -> Self {
        Self {
            known: categories.iter().map(|c| (*c).to_string()).collect(),
            loads: 0,
        }
    }
}

impl IconLoader for FakeIcons {
    type Icon = String;

    fn load_icon(&mut self, category: &Category) -> Result<String, IconLoadError> {
        self.loads += 1;
        if self.known.contains(category.as_str()) {
            Ok(format!("{category}.webp"))
        } else {
            Err(IconLoadError::NotFound {
                category: category.to_string(),
                path: PathBuf::from(format!("images/{category}.webp")),
            })
        }
    }
}
