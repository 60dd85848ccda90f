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
use super::Value;
use crate::convert::Mapping;

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Sequence(v) => f.debug_tuple("Sequence").field(v).finish(),
            Value::Mapping(m) => f.debug_tuple("Mapping").field(m).finish(),
            // Trait objects carry no Debug bound; the class name is the most
            // useful thing we can print.
            Value::Convertible(object) => f
                .debug_tuple("Convertible")
                .field(&object.class_name())
                .finish(),
            Value::Opaque(opaque) => std::fmt::Debug::fmt(opaque, f),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match self {
            Value::Nil => other.is_nil(),
            Value::Bool(b) => {
                if let Value::Bool(b2) = other {
                    b == b2
                } else {
                    false
                }
            }
            Value::Float(f) => {
                if let Value::Float(f2) = other {
                    (f.is_nan() && f2.is_nan()) || f == f2
                } else {
                    false
                }
            }
            Value::Integer(i) => {
                if let Value::Integer(i2) = other {
                    i == i2
                } else {
                    false
                }
            }
            Value::String(s) => {
                if let Value::String(s2) = other {
                    s == s2
                } else {
                    false
                }
            }
            Value::Sequence(v) => {
                if let Value::Sequence(v2) = other {
                    v == v2
                } else {
                    false
                }
            }
            Value::Mapping(m) => {
                if let Value::Mapping(m2) = other {
                    m == m2
                } else {
                    false
                }
            }
            // Convertible objects compare by representation.
            Value::Convertible(object) => {
                if let Value::Convertible(object2) = other {
                    object.class_name() == object2.class_name()
                        && object.to_mapping() == object2.to_mapping()
                } else {
                    false
                }
            }
            // Opaque values have no comparable representation.
            Value::Opaque(_) => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(v) => other == v,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Integer(v) => other == v,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(v) => other == v,
            _ => false,
        }
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::String(v) => other == v,
            _ => false,
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::String(v) => other == v,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Value::String(v) => other == v,
            _ => false,
        }
    }
}

impl PartialEq<Mapping> for Value {
    fn eq(&self, other: &Mapping) -> bool {
        match self {
            Value::Mapping(v) => other == v,
            _ => false,
        }
    }
}
