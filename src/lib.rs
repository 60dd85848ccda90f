#![warn(rust_2018_idioms, clippy::all, clippy::pedantic)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::all
)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_lossless
)]

//! mapdump
//!
//! mapdump serializes heterogeneous domain objects to JSON and YAML text
//! through a single adapter. Objects opt in by implementing [`ToMapping`],
//! which returns a mapping representation of the object; no other per-type
//! integration is needed for either format.
//!
//! The two formats treat convertible objects differently:
//! - JSON expands an object in place of its mapping representation. The
//!   output is indistinguishable from a literal mapping with the same keys.
//! - YAML tags the expansion with the object's class name (e.g. `!Endpoint`),
//!   so the originating type survives in the emitted text. Consumers that do
//!   not understand the tag can ignore it or use it to pick a type when
//!   loading.
//!
//! Nested convertible objects are expanded recursively on both paths. In YAML
//! only the outermost object carries a tag: conversion is eager, so by the
//! time the dumper walks a representation, everything inside it is plain
//! data.
//!
//! ```
//! use mapdump::{Mapping, ToMapping, Value};
//!
//! struct Inner;
//!
//! impl ToMapping for Inner {
//!     fn to_mapping(&self) -> Mapping {
//!         let mut mapping = Mapping::new();
//!         mapping.insert("hello".to_string(), vec![1, 2, 3].into());
//!         mapping
//!     }
//! }
//!
//! struct Outer;
//!
//! impl ToMapping for Outer {
//!     fn to_mapping(&self) -> Mapping {
//!         let mut mapping = Mapping::new();
//!         mapping.insert("nested".to_string(), Value::convertible(Inner));
//!         mapping
//!     }
//! }
//!
//! let value = Value::convertible(Outer);
//!
//! let json = mapdump::to_json(&value).unwrap();
//! assert_eq!(json, r#"{"nested":{"hello":[1,2,3]}}"#);
//!
//! let yaml = mapdump::to_yaml(&value).unwrap();
//! assert!(yaml.starts_with("!Outer"));
//! ```
//!
//! Some common terminology:
//! - convertible object: any value implementing [`ToMapping`].
//! - mapping representation: the [`Mapping`] returned by
//!   [`to_mapping`](ToMapping::to_mapping).
//! - class tag: the `!<ClassName>` annotation on a YAML mapping node.
//! - opaque value: a value with no serializable representation; serializing
//!   one is an error, never a silent coercion.

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

mod convert;
mod error;
mod value;

/// YAML dumping and class-tag representation.
pub mod yaml;

pub use convert::{Mapping, Opaque, ToMapping};
pub use error::{Error, Kind, Result};
pub use value::Value;

/// Serialize a value as JSON text.
///
/// Convertible objects are expanded in place of their mapping representation;
/// nothing in the output distinguishes them from literal mappings.
pub fn to_json(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(Error::from)
}

/// Serialize a value as pretty-printed JSON text.
pub fn to_json_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::from)
}

/// Serialize a value as YAML text with a default [`yaml::Dumper`].
///
/// Convertible objects are rendered as mappings tagged with their class name.
pub fn to_yaml(value: &Value) -> Result<String> {
    yaml::Dumper::new().dump(value)
}

#[cfg(test)]
mod json {
    use crate::{Mapping, ToMapping, Value};

    struct Test;

    impl ToMapping for Test {
        fn to_mapping(&self) -> Mapping {
            let mut mapping = Mapping::new();
            mapping.insert("hello".to_string(), vec![1, 2, 3].into());
            mapping
        }
    }

    struct Test2;

    impl ToMapping for Test2 {
        fn to_mapping(&self) -> Mapping {
            let mut mapping = Mapping::new();
            mapping.insert("nested".to_string(), Value::convertible(Test));
            mapping
        }
    }

    #[test]
    fn object_matches_literal_mapping() {
        let object = crate::to_json(&Value::convertible(Test)).unwrap();
        let literal = crate::to_json(&Value::Mapping(Test.to_mapping())).unwrap();

        assert_eq!(object, literal);
        assert_eq!(object, r#"{"hello":[1,2,3]}"#);
    }

    #[test]
    fn nested_objects_expand() {
        let json = crate::to_json(&Value::convertible(Test2)).unwrap();

        assert_eq!(json, r#"{"nested":{"hello":[1,2,3]}}"#);
        assert!(!json.contains('!'));
    }

    #[test]
    fn eager_and_lazy_nesting_match() {
        // Converting the inner object up front reads the same as letting the
        // encoder expand it.
        let mut eager = Mapping::new();
        eager.insert("nested".to_string(), Value::Mapping(Test.to_mapping()));

        assert_eq!(
            crate::to_json(&Value::Mapping(eager)).unwrap(),
            crate::to_json(&Value::convertible(Test2)).unwrap()
        );
    }

    #[test]
    fn scalars() {
        let value = Value::Sequence(vec![
            Value::Nil,
            Value::Bool(true),
            Value::Integer(-5),
            Value::Float(1.5),
            Value::String("hi".to_string()),
        ]);

        let json = crate::to_json(&value).unwrap();

        assert_eq!(json, r#"[null,true,-5,1.5,"hi"]"#);
    }

    #[test]
    fn pretty() {
        let json = crate::to_json_pretty(&Value::convertible(Test)).unwrap();

        assert!(json.starts_with("{\n"));
        assert!(json.contains("\"hello\""));
    }

    #[test]
    fn repeated_calls_identical() {
        let value = Value::convertible(Test2);

        assert_eq!(
            crate::to_json(&value).unwrap(),
            crate::to_json(&value).unwrap()
        );
    }
}


#[cfg(test)]
mod errors {
    use crate::{Kind, Mapping, ToMapping, Value};

    struct Socket;

    #[test]
    fn json_rejects_opaque_values() {
        let err = crate::to_json(&Value::opaque(Socket)).unwrap_err();

        assert!(matches!(err.kind, Kind::Json(_)));
        assert!(err.to_string().contains("Socket"));
    }

    #[test]
    fn yaml_rejects_opaque_values() {
        let err = crate::to_yaml(&Value::opaque(Socket)).unwrap_err();

        assert!(matches!(err.kind, Kind::Unsupported("Socket")));
        assert_eq!(
            err.to_string(),
            "objects of type Socket cannot be serialized"
        );
    }

    #[test]
    fn bad_conversion_output_is_rejected() {
        struct Broken;

        impl ToMapping for Broken {
            fn to_mapping(&self) -> Mapping {
                let mut mapping = Mapping::new();
                mapping.insert("inner".to_string(), Value::opaque(Socket));
                mapping
            }
        }

        assert!(crate::to_json(&Value::convertible(Broken)).is_err());
        assert!(crate::to_yaml(&Value::convertible(Broken)).is_err());
    }
}

#[cfg(test)]
mod values {
    use crate::{Mapping, ToMapping, Value};

    struct Test;

    impl ToMapping for Test {
        fn to_mapping(&self) -> Mapping {
            let mut mapping = Mapping::new();
            mapping.insert("hello".to_string(), vec![1, 2, 3].into());
            mapping
        }
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(5i32), Value::Integer(5));
        assert_eq!(Value::from(2.5f32), Value::Float(2.5));
        assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Nil);
        assert_eq!(Value::from(Some("hi")), Value::String("hi".to_string()));

        let sequence: Value = vec![1u8, 2].into();
        assert_eq!(
            sequence,
            Value::Sequence(vec![Value::Integer(1), Value::Integer(2)])
        );
    }

    #[test]
    fn accessors() {
        assert!(Value::Nil.is_nil());
        assert!(Value::from("hi").is_string());

        let value = Value::from(Test.to_mapping());
        assert!(value.is_mapping());
        assert_eq!(value.into_mapping().ok(), Some(Test.to_mapping()));
    }

    #[test]
    fn try_into() {
        let integer: std::result::Result<i64, Value> = Value::Integer(3).try_into();
        assert_eq!(integer.ok(), Some(3));

        let string: std::result::Result<String, Value> = Value::Bool(true).try_into();
        assert!(string.is_err());
    }

    #[test]
    fn typed_equality() {
        assert_eq!(Value::Bool(true), true);
        assert_eq!(Value::Integer(3), 3i64);
        assert_eq!(Value::from("hi"), "hi");
        assert_ne!(Value::Integer(3), 3.0);
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn convertible_equality() {
        assert_eq!(Value::convertible(Test), Value::convertible(Test));
        assert_ne!(Value::convertible(Test), Value::Mapping(Test.to_mapping()));
        // Opaque values never compare equal, even to themselves.
        assert_ne!(Value::opaque(5u8), Value::opaque(5u8));
    }

    #[test]
    fn debug_output() {
        assert_eq!(
            format!("{:?}", Value::convertible(Test)),
            r#"Convertible("Test")"#
        );
        assert_eq!(format!("{:?}", Value::opaque(5u8)), r#"Opaque("u8")"#);
    }

    #[test]
    fn downcast() {
        let value = Value::opaque(5u8);
        let opaque = value.as_opaque().unwrap();

        assert_eq!(opaque.type_name(), "u8");
        assert_eq!(opaque.downcast_ref::<u8>(), Some(&5));
        assert!(opaque.downcast_ref::<i32>().is_none());
    }
}

#[cfg(test)]
mod class_names {
    use std::marker::PhantomData;

    use crate::{convert::short_type_name, Mapping, ToMapping};

    struct Plain;

    impl ToMapping for Plain {
        fn to_mapping(&self) -> Mapping {
            Mapping::new()
        }
    }

    struct Generic<T>(PhantomData<T>);

    impl<T> ToMapping for Generic<T> {
        fn to_mapping(&self) -> Mapping {
            Mapping::new()
        }
    }

    #[test]
    fn default_is_unqualified() {
        assert_eq!(Plain.class_name(), "Plain");
    }

    #[test]
    fn generics_are_stripped() {
        assert_eq!(Generic::<Vec<u8>>(PhantomData).class_name(), "Generic");
    }

    #[test]
    fn short_names() {
        assert_eq!(short_type_name("a::b::C"), "C");
        assert_eq!(short_type_name("C"), "C");
        assert_eq!(short_type_name("a::B<c::D>"), "B");
    }
}
