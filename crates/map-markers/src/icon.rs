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

//! Interface to the icon resources used for markers.

use crate::error::IconLoadError;
use crate::location::Category;

/// Loads the marker icon for a location category.
pub trait IconLoader {
    type Icon;

    /// Fails with [`IconLoadError::NotFound`] when the category has no image.
    fn load_icon(&mut self, category: &Category) -> Result<Self::Icon, IconLoadError>;
}
