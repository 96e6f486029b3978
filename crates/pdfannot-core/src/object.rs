//! Backend-independent PDF object model.
//!
//! [`PdfObject`] is a tagged variant over the PDF object types. Indirect
//! references stay as [`PdfObject::Reference`] until explicitly resolved
//! through a [`DocumentSource`](crate::DocumentSource), so "could not resolve"
//! and "resolved to the wrong type" are both ordinary `Option`/match outcomes.

use std::fmt;

/// An indirect object reference (`12 0 R`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef {
    /// Object number.
    pub number: u32,
    /// Generation number.
    pub generation: u16,
}

impl ObjectRef {
    /// Create a reference from an object and generation number.
    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.number, self.generation)
    }
}

/// A PDF object.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// A name object, without the leading slash.
    Name(String),
    /// A string object as raw bytes. Literal and hex strings are not distinguished.
    String(Vec<u8>),
    Array(Vec<PdfObject>),
    Dictionary(Dictionary),
    /// A stream; only its dictionary is carried.
    Stream(Dictionary),
    Reference(ObjectRef),
}

impl PdfObject {
    /// Build a string object from UTF-8 text.
    pub fn string(text: impl Into<String>) -> Self {
        PdfObject::String(text.into().into_bytes())
    }

    /// Build a name object.
    pub fn name(name: impl Into<String>) -> Self {
        PdfObject::Name(name.into())
    }

    /// Returns the dictionary if this object is one.
    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            PdfObject::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// Returns the array items if this object is an array.
    pub fn as_array(&self) -> Option<&[PdfObject]> {
        match self {
            PdfObject::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the reference if this object is an indirect reference.
    pub fn as_reference(&self) -> Option<ObjectRef> {
        match self {
            PdfObject::Reference(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the name text if this object is a name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PdfObject::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Short type tag used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            PdfObject::Null => "null",
            PdfObject::Boolean(_) => "boolean",
            PdfObject::Integer(_) => "integer",
            PdfObject::Real(_) => "real",
            PdfObject::Name(_) => "name",
            PdfObject::String(_) => "string",
            PdfObject::Array(_) => "array",
            PdfObject::Dictionary(_) => "dictionary",
            PdfObject::Stream(_) => "stream",
            PdfObject::Reference(_) => "reference",
        }
    }
}

impl From<ObjectRef> for PdfObject {
    fn from(r: ObjectRef) -> Self {
        PdfObject::Reference(r)
    }
}

impl From<Dictionary> for PdfObject {
    fn from(dict: Dictionary) -> Self {
        PdfObject::Dictionary(dict)
    }
}

impl From<Vec<PdfObject>> for PdfObject {
    fn from(items: Vec<PdfObject>) -> Self {
        PdfObject::Array(items)
    }
}

/// A PDF dictionary. Keys keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, PdfObject)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key (name without the leading slash).
    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Insert or replace a key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PdfObject>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`set`](Dictionary::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PdfObject>) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PdfObject)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, PdfObject)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, PdfObject)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}
