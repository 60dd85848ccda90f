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
use serde::ser::{Error as _, Serialize, Serializer};

use super::Value;

/// This impl is what serde_json's tree walk recurses through: a convertible
/// object serializes as the mapping it converts to, so the output is
/// indistinguishable from a literal mapping with the same keys. Class
/// identity is not preserved on this path.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(elements) => serializer.collect_seq(elements),
            Value::Mapping(mapping) => mapping.serialize(serializer),
            Value::Convertible(object) => object.to_mapping().serialize(serializer),
            Value::Opaque(opaque) => Err(S::Error::custom(format_args!(
                "objects of type {} cannot be serialized",
                opaque.type_name()
            ))),
        }
    }
}
