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

//! Error types for marker toggling.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the icon for a location category.
#[derive(Debug, Error)]
pub enum IconLoadError {
    #[error("no icon for category '{category}' at {}", path.display())]
    NotFound { category: String, path: PathBuf },

    #[error("icon for category '{category}' could not be decoded: {reason}")]
    Decode { category: String, reason: String },
}

impl IconLoadError {
    /// Category whose icon failed to load.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::NotFound { category, .. } | Self::Decode { category, .. } => category,
        }
    }
}

/// Errors raised by [`crate::MarkerController`].
#[derive(Debug, Error)]
pub enum MarkerError {
    #[error(transparent)]
    IconLoad(#[from] IconLoadError),

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("location '{0}' is configured more than once")]
    DuplicateLocation(String),
}
