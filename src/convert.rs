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
use std::any::Any;

use indexmap::IndexMap;

use crate::Value;

/// A mapping representation: string keys to arbitrary values.
///
/// Backed by [`IndexMap`], so iteration follows insertion order and repeated
/// serialization of the same mapping produces identical text.
pub type Mapping = IndexMap<String, Value>;

/// Conversion of a domain object into its mapping representation.
///
/// Implementing this trait is the only integration a type needs: both the
/// JSON and YAML serializers will expand any [`Value::Convertible`] they walk
/// into by calling [`to_mapping`](ToMapping::to_mapping).
///
/// ```
/// use mapdump::{Mapping, ToMapping, Value};
///
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// impl ToMapping for Endpoint {
///     fn to_mapping(&self) -> Mapping {
///         let mut mapping = Mapping::new();
///         mapping.insert("host".to_string(), self.host.as_str().into());
///         mapping.insert("port".to_string(), self.port.into());
///         mapping
///     }
/// }
///
/// let endpoint = Endpoint {
///     host: "localhost".to_string(),
///     port: 8080,
/// };
/// let json = mapdump::to_json(&Value::convertible(endpoint)).unwrap();
/// assert_eq!(json, r#"{"host":"localhost","port":8080}"#);
/// ```
pub trait ToMapping {
    /// Returns the mapping representation of this object.
    ///
    /// Values inside the mapping may themselves be convertible objects,
    /// scalars, sequences, or nested mappings.
    fn to_mapping(&self) -> Mapping;

    /// The name identifying this object's type in formats that keep one.
    ///
    /// The YAML dumper uses this as the node tag. Defaults to the type's
    /// unqualified name with any generic arguments stripped.
    fn class_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// An arbitrary value carried through a [`Value`] tree without any
/// serializable representation.
///
/// Neither serializer can do anything with one of these; encountering an
/// `Opaque` fails with [`Kind::Unsupported`](crate::Kind::Unsupported) (or
/// the JSON encoder's equivalent), naming the wrapped type.
pub struct Opaque {
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl Opaque {
    /// Wraps a value, capturing its type name.
    pub fn new<T>(value: T) -> Self
    where
        T: Any,
    {
        Self {
            type_name: short_type_name(std::any::type_name::<T>()),
            value: Box::new(value),
        }
    }

    /// The unqualified name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the wrapped value if it is a `T`.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Any,
    {
        self.value.downcast_ref()
    }
}

impl std::fmt::Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Opaque").field(&self.type_name).finish()
    }
}

// `std::any::type_name` has no stability guarantees, but "last path segment,
// generics stripped" holds on every rustc in the wild.
pub(crate) fn short_type_name(full: &str) -> &str {
    let base = match full.find('<') {
        Some(index) => &full[..index],
        None => full,
    };
    match base.rfind("::") {
        Some(index) => &base[index + 2..],
        None => base,
    }
}
