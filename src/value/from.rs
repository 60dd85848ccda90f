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
use crate::convert::{Mapping, Opaque, ToMapping};

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Nil,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

macro_rules! integer_from_impl {
    ($($int:ty),*) => {
        $(impl From<$int> for Value {
            fn from(value: $int) -> Self {
                Self::Integer(value as i64)
            }
        })*
    };
}

integer_from_impl!(u8, u16, u32, i8, i16, i32);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl From<Box<dyn ToMapping>> for Value {
    fn from(value: Box<dyn ToMapping>) -> Self {
        Self::Convertible(value)
    }
}

impl From<Opaque> for Value {
    fn from(value: Opaque) -> Self {
        Self::Opaque(value)
    }
}

impl TryInto<String> for Value {
    type Error = Self;

    fn try_into(self) -> Result<String, Self::Error> {
        self.into_string()
    }
}

impl TryInto<i64> for Value {
    type Error = Self;

    fn try_into(self) -> Result<i64, Self::Error> {
        self.into_integer()
    }
}

impl TryInto<f64> for Value {
    type Error = Self;

    fn try_into(self) -> Result<f64, Self::Error> {
        self.into_float()
    }
}

impl TryInto<Mapping> for Value {
    type Error = Self;

    fn try_into(self) -> Result<Mapping, Self::Error> {
        self.into_mapping()
    }
}
