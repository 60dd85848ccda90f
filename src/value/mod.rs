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

mod from;
mod impls;
mod ser;

use crate::convert::{Mapping, Opaque, ToMapping};

/// An enum representing any serializable value.
///
/// Similar to `serde_json::Value`, with two extra cases: domain objects that
/// convert to mappings ([`Value::Convertible`]), and arbitrary values that do
/// not serialize at all ([`Value::Opaque`]).
#[derive(Default, enum_as_inner::EnumAsInner)]
pub enum Value {
    /// An empty value.
    #[default]
    Nil,
    /// A boolean value.
    Bool(bool),
    /// A float value.
    Float(f64),
    /// An integer value.
    Integer(i64),
    /// A string value.
    String(String),
    /// A sequence of values.
    Sequence(Vec<Value>),
    /// A mapping from string keys to values, in insertion order.
    Mapping(Mapping),
    /// A domain object exposing its mapping representation through
    /// [`ToMapping`].
    ///
    /// JSON expands these in place; YAML tags the expansion with the object's
    /// class name.
    Convertible(Box<dyn ToMapping>),
    /// An arbitrary value neither serializer has a representation for.
    ///
    /// Serializing one fails, naming the wrapped type.
    Opaque(Opaque),
}

impl Value {
    /// Wraps a convertible object.
    pub fn convertible<T>(object: T) -> Self
    where
        T: ToMapping + 'static,
    {
        Self::Convertible(Box::new(object))
    }

    /// Wraps an arbitrary value with no serializable representation.
    pub fn opaque<T>(value: T) -> Self
    where
        T: std::any::Any,
    {
        Self::Opaque(Opaque::new(value))
    }
}
