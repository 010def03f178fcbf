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

//! Marker toggling for a fixed set of locations.
//!
//! Each location is either inactive (no marker, button deactivated) or active
//! (marker on the map, button activated). A button press flips exactly one
//! location between the two. Activating a location that is off screen
//! recenters the map on it; deactivating never moves the map back.

use std::collections::HashMap;

use log::{debug, error, info};

use crate::button::ToggleButton;
use crate::error::MarkerError;
use crate::icon::IconLoader;
use crate::location::{Location, LocationEntry, MarkerState};
use crate::viewport::MapViewport;

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Marker placed. `recentered` is set when the location was off screen
    /// and the map was moved onto it.
    Activated { recentered: bool },
    /// Marker removed.
    Deactivated,
}

/// Owns every location entry and the marker handles they hold.
///
/// `K` is the map's marker handle type and `B` the button type.
#[derive(Debug)]
pub struct MarkerController<K, B> {
    entries: Vec<LocationEntry<K, B>>,
    index: HashMap<String, usize>,
}

impl<K, B: ToggleButton> MarkerController<K, B> {
    /// Build the controller from locations in display order. Every entry
    /// starts inactive.
    pub fn new<I>(locations: I) -> Result<Self, MarkerError>
    where
        I: IntoIterator<Item = (Location, B)>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (location, button) in locations {
            if index.contains_key(&location.id) {
                return Err(MarkerError::DuplicateLocation(location.id));
            }
            index.insert(location.id.clone(), entries.len());
            entries.push(LocationEntry::new(location, button));
        }

        debug!("Marker controller ready with {} locations", entries.len());
        Ok(Self { entries, index })
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[LocationEntry<K, B>] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LocationEntry<K, B>> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.get(id).is_some_and(LocationEntry::is_active)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_active()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handle a button press for location `id`.
    ///
    /// On activation the icon is loaded first; if that fails nothing has
    /// been touched and the location stays inactive.
    pub fn toggle<M, I>(
        &mut self,
        id: &str,
        map: &mut M,
        icons: &mut I,
    ) -> Result<Transition, MarkerError>
    where
        M: MapViewport<Marker = K>,
        I: IconLoader<Icon = M::Icon>,
    {
        let Some(&i) = self.index.get(id) else {
            return Err(MarkerError::UnknownLocation(id.to_string()));
        };
        let entry = &mut self.entries[i];

        if entry.is_active() {
            Ok(Self::deactivate(entry, map))
        } else {
            Self::activate(entry, map, icons)
        }
    }

    fn activate<M, I>(
        entry: &mut LocationEntry<K, B>,
        map: &mut M,
        icons: &mut I,
    ) -> Result<Transition, MarkerError>
    where
        M: MapViewport<Marker = K>,
        I: IconLoader<Icon = M::Icon>,
    {
        let icon = match icons.load_icon(entry.category()) {
            Ok(icon) => icon,
            Err(e) => {
                error!("Cannot show marker for {}: {}", entry.id(), e);
                return Err(e.into());
            }
        };

        let position = entry.position();
        let recentered = !map.coordinates_inside(position.lat, position.lon);
        if recentered {
            map.set_position(position.lat, position.lon);
        }

        let marker = map.place_marker(position, icon);
        entry.set_state(MarkerState::Active(marker));

        info!(
            "Marker on for {} ({:.4}, {:.4}){}",
            entry.id(),
            position.lat,
            position.lon,
            if recentered { ", map recentered" } else { "" }
        );
        Ok(Transition::Activated { recentered })
    }

    fn deactivate<M>(entry: &mut LocationEntry<K, B>, map: &mut M) -> Transition
    where
        M: MapViewport<Marker = K>,
    {
        if let MarkerState::Active(marker) = entry.set_state(MarkerState::Inactive) {
            map.remove_marker(marker);
        }

        info!("Marker off for {}", entry.id());
        Transition::Deactivated
    }
}
