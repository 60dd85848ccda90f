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
use serde_yaml::value::{Tag, TaggedValue};

use crate::{
    convert::Mapping,
    error::{Kind, Result},
    Error, Value,
};

/// The YAML dumper.
///
/// Unlike serializer libraries that register representers in process-global
/// state, a `Dumper` owns its configuration: construct one, configure it, and
/// pass it around. Any number of dumpers may exist concurrently.
///
/// By default a convertible object dumps as a mapping tagged with its class
/// name:
///
/// ```
/// use mapdump::{yaml::Dumper, Mapping, ToMapping, Value};
///
/// struct Greeting;
///
/// impl ToMapping for Greeting {
///     fn to_mapping(&self) -> Mapping {
///         let mut mapping = Mapping::new();
///         mapping.insert("hello".to_string(), vec![1, 2, 3].into());
///         mapping
///     }
/// }
///
/// let yaml = Dumper::new().dump(&Value::convertible(Greeting)).unwrap();
/// assert!(yaml.starts_with("!Greeting"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dumper {
    class_tags: bool,
}

impl Default for Dumper {
    fn default() -> Self {
        Self { class_tags: true }
    }
}

impl Dumper {
    /// Creates a dumper with class tags enabled.
    ///
    /// Same as [`Default::default`].
    #[must_use]
    pub fn new() -> Self {
        Dumper::default()
    }

    /// Sets whether convertible objects are tagged with their class name.
    ///
    /// With tags disabled the YAML output matches the JSON path's view of the
    /// data: conversions expand to plain mappings.
    #[must_use]
    pub fn class_tags(mut self, enabled: bool) -> Self {
        self.class_tags = enabled;
        self
    }

    /// Dumps a value as YAML text.
    pub fn dump(&self, value: &Value) -> Result<String> {
        let node = self.represent(value, false)?;
        serde_yaml::to_string(&node).map_err(Error::from)
    }

    // `converted` marks values that came out of a mapping conversion.
    // Conversion is eager, so only objects the dumper's own walk reaches get
    // a tag; anything nested inside a representation is emitted plain.
    fn represent(&self, value: &Value, converted: bool) -> Result<serde_yaml::Value> {
        match value {
            Value::Nil => Ok(serde_yaml::Value::Null),
            Value::Bool(b) => Ok(serde_yaml::Value::Bool(*b)),
            Value::Float(f) => Ok(serde_yaml::Value::Number((*f).into())),
            Value::Integer(i) => Ok(serde_yaml::Value::Number((*i).into())),
            Value::String(s) => Ok(serde_yaml::Value::String(s.clone())),
            Value::Sequence(elements) => {
                let nodes = elements
                    .iter()
                    .map(|element| self.represent(element, converted))
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_yaml::Value::Sequence(nodes))
            }
            Value::Mapping(mapping) => self.represent_mapping(mapping, converted),
            Value::Convertible(object) => {
                let node = self.represent_mapping(&object.to_mapping(), true)?;
                if self.class_tags && !converted {
                    Ok(serde_yaml::Value::Tagged(Box::new(TaggedValue {
                        tag: Tag::new(object.class_name()),
                        value: node,
                    })))
                } else {
                    Ok(node)
                }
            }
            Value::Opaque(opaque) => Err(Kind::Unsupported(opaque.type_name()).into()),
        }
    }

    fn represent_mapping(&self, mapping: &Mapping, converted: bool) -> Result<serde_yaml::Value> {
        let mut node = serde_yaml::Mapping::with_capacity(mapping.len());
        for (key, value) in mapping {
            node.insert(
                serde_yaml::Value::String(key.clone()),
                self.represent(value, converted)?,
            );
        }
        Ok(serde_yaml::Value::Mapping(node))
    }
}
