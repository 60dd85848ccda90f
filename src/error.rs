// Copyright (C) 2024 Lily Lyons
//
// This file is part of mapdump.
//
// mapdump is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// mapdump is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with mapdump.  If not, see <http://www.gnu.org/licenses/>.

/// Type alias around a result.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for serialization.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// What went wrong.
    #[source]
    pub kind: Kind,
}

/// Error kind for this crate.
///
/// Failures from the format libraries pass through unchanged; this crate adds
/// no diagnostic context of its own.
#[derive(Debug, thiserror::Error)]
pub enum Kind {
    /// A value with neither a native representation nor a mapping conversion
    /// was encountered.
    #[error("objects of type {0} cannot be serialized")]
    Unsupported(&'static str),
    /// The JSON encoder failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The YAML emitter failed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl From<Kind> for Error {
    fn from(kind: Kind) -> Self {
        Error { kind }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: Kind::Json(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error {
            kind: Kind::Yaml(err),
        }
    }
}
