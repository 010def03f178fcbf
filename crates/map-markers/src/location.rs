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

//! Per-location records and their marker state.

use std::fmt;
use std::mem;

use crate::button::{ButtonState, ToggleButton};
use crate::tiles::GeoPoint;

/// Marker category of a location. Selects the icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Static description of a location, as read from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Unique name, used as the key.
    pub id: String,
    pub position: GeoPoint,
    pub category: Category,
}

impl Location {
    #[must_use]
    pub fn new(id: impl Into<String>, lat: f64, lon: f64, category: impl Into<Category>) -> Self {
        Self {
            id: id.into(),
            position: GeoPoint::new(lat, lon),
            category: category.into(),
        }
    }
}

/// Whether a location's marker is on the map.
#[derive(Debug, Default)]
pub enum MarkerState<K> {
    #[default]
    Inactive,
    /// Marker rendered; holds the map's handle.
    Active(K),
}

impl<K> MarkerState<K> {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    #[must_use]
    pub fn marker(&self) -> Option<&K> {
        match self {
            Self::Active(marker) => Some(marker),
            Self::Inactive => None,
        }
    }

    /// Button visuals that must accompany this state.
    #[must_use]
    pub fn button_state(&self) -> ButtonState {
        match self {
            Self::Active(_) => ButtonState::Activated,
            Self::Inactive => ButtonState::Deactivated,
        }
    }
}

/// A location together with its marker state and button.
///
/// The marker handle and the button visuals only change together, through
/// [`LocationEntry::set_state`], so an entry holds a marker exactly when its
/// button shows as activated.
#[derive(Debug)]
pub struct LocationEntry<K, B> {
    location: Location,
    state: MarkerState<K>,
    button: B,
}

impl<K, B: ToggleButton> LocationEntry<K, B> {
    /// Create an inactive entry. The button is reset to the deactivated look.
    pub fn new(location: Location, mut button: B) -> Self {
        button.set_visual_state(ButtonState::Deactivated);
        Self {
            location,
            state: MarkerState::Inactive,
            button,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.location.id
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn position(&self) -> GeoPoint {
        self.location.position
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.location.position.lat
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.location.position.lon
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.location.category
    }

    #[must_use]
    pub fn state(&self) -> &MarkerState<K> {
        &self.state
    }

    #[must_use]
    pub fn marker(&self) -> Option<&K> {
        self.state.marker()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    #[must_use]
    pub fn button(&self) -> &B {
        &self.button
    }

    /// Replace the marker state and update the button to match. Returns the
    /// previous state so the caller can release its marker.
    pub(crate) fn set_state(&mut self, state: MarkerState<K>) -> MarkerState<K> {
        let visual = state.button_state();
        let previous = mem::replace(&mut self.state, state);
        self.button.set_visual_state(visual);
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeButton;

    fn rioja() -> Location {
        Location::new("Rioja", 42.299_933_734_115_61, -2.486_288_477_690_506, "Tinto")
    }

    #[test]
    fn test_new_entry_is_inactive_and_resets_button() {
        let button = FakeButton {
            state: ButtonState::Activated,
            updates: 0,
        };
        let entry: LocationEntry<u32, _> = LocationEntry::new(rioja(), button);

        assert!(!entry.is_active());
        assert!(entry.marker().is_none());
        assert_eq!(entry.button().visual_state(), ButtonState::Deactivated);
        assert_eq!(entry.id(), "Rioja");
        assert_eq!(entry.category().as_str(), "Tinto");
    }

    #[test]
    fn test_set_state_keeps_marker_and_button_in_step() {
        let mut entry: LocationEntry<u32, _> = LocationEntry::new(rioja(), FakeButton::default());

        let previous = entry.set_state(MarkerState::Active(7));
        assert!(!previous.is_active());
        assert_eq!(entry.marker(), Some(&7));
        assert_eq!(entry.button().visual_state(), ButtonState::Activated);

        let previous = entry.set_state(MarkerState::Inactive);
        assert_eq!(previous.marker(), Some(&7));
        assert!(entry.marker().is_none());
        assert_eq!(entry.button().visual_state(), ButtonState::Deactivated);
    }

    #[test]
    fn test_coordinates_are_fixed() {
        let entry: LocationEntry<u32, _> = LocationEntry::new(rioja(), FakeButton::default());
        assert_eq!(entry.latitude(), 42.299_933_734_115_61);
        assert_eq!(entry.longitude(), -2.486_288_477_690_506);
        assert_eq!(entry.position(), GeoPoint::new(entry.latitude(), entry.longitude()));
    }
}
