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

//! Interface to the per-location toggle button.

/// Visual state of a location button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Deactivated,
    Activated,
}

impl ButtonState {
    #[must_use]
    pub fn is_activated(self) -> bool {
        self == Self::Activated
    }
}

/// A UI control bound to one location.
///
/// Press events are routed by the UI to
/// [`MarkerController::toggle`](crate::MarkerController::toggle) using the
/// location id. The controller drives the visuals back through this trait.
pub trait ToggleButton {
    fn set_visual_state(&mut self, state: ButtonState);

    fn visual_state(&self) -> ButtonState;
}
