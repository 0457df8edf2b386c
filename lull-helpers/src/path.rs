// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Object paths such as `a.b[0].c`.
//!
//! Grammar: keys separated by `.`, with bracketed segments anywhere a `.key`
//! could appear. Brackets hold an index (`[0]`), a quoted key (`["a.b"]`,
//! `['x']`) or a bare key (`[name]`).

use core::fmt;
use core::str::FromStr;
use lull_core::{LullError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

/// One step of an [`ObjectPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key. Also indexes arrays when it is a canonical integer.
    Key(String),
    /// An array index. Also names the key `"<n>"` on objects.
    Index(usize),
}

impl PathSegment {
    /// The segment as an object key.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Key(key) => Cow::Borrowed(key),
            Self::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// The segment as an array index, if it is one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(key) => parse_index(key),
            Self::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A parsed path into nested objects and arrays.
///
/// Built from a string (strictly with [`ObjectPath::parse`] / [`FromStr`],
/// leniently with [`ObjectPath::lenient`] or `From<&str>`) or from a list of
/// segments. A path built from a string remembers the string: lookups use it
/// as a plain key when the target object has a top-level key spelled exactly
/// like that.
///
/// ```
/// use lull_helpers::{ObjectPath, PathSegment};
///
/// let path: ObjectPath = "users[0].name".parse().unwrap();
/// assert_eq!(
///     path.segments(),
///     &[
///         PathSegment::Key("users".into()),
///         PathSegment::Index(0),
///         PathSegment::Key("name".into()),
///     ]
/// );
/// assert_eq!(path.to_string(), "users[0].name");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectPath {
    segments: Vec<PathSegment>,
    literal: Option<String>,
}

impl ObjectPath {
    /// Parses `path`, rejecting malformed input.
    pub fn parse(path: &str) -> Result<Self> {
        Ok(Self {
            segments: parse_segments(path)?,
            literal: Some(path.to_owned()),
        })
    }

    /// Parses `path`; input that does not parse becomes a single key.
    pub fn lenient(path: &str) -> Self {
        Self::parse(path).unwrap_or_else(|err| {
            lull_core::debug!("using path as a single key: {}", err);
            Self {
                segments: vec![PathSegment::Key(path.to_owned())],
                literal: Some(path.to_owned()),
            }
        })
    }

    /// A path made of exactly these segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            literal: None,
        }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The string this path was parsed from, if any.
    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// This path extended by one segment.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            segments,
            literal: None,
        }
    }
}

fn parse_segments(path: &str) -> Result<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut rest = path;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('[') {
            let (segment, remaining) = parse_bracket(path, after)?;
            segments.push(segment);
            rest = remaining;
            continue;
        }

        if !segments.is_empty() {
            rest = rest.strip_prefix('.').ok_or_else(|| {
                LullError::invalid_path(path, "expected '.' or '[' after ']'")
            })?;
        }

        let end = rest.find(['.', '[', ']']).unwrap_or(rest.len());
        if rest[end..].starts_with(']') {
            return Err(LullError::invalid_path(path, "unexpected ']'"));
        }
        if end == 0 {
            return Err(LullError::invalid_path(path, "empty segment"));
        }
        segments.push(PathSegment::Key(rest[..end].to_owned()));
        rest = &rest[end..];
    }

    Ok(segments)
}

/// Parses the inside of `[...]`; `after` starts just past the `[`.
fn parse_bracket<'a>(path: &str, after: &'a str) -> Result<(PathSegment, &'a str)> {
    if let Some(quote) = after.chars().next().filter(|c| matches!(c, '"' | '\'')) {
        let body = &after[1..];
        let close = body
            .find(quote)
            .ok_or_else(|| LullError::invalid_path(path, "unclosed quote"))?;
        let tail = body[close + 1..]
            .strip_prefix(']')
            .ok_or_else(|| LullError::invalid_path(path, "expected ']' after quoted key"))?;
        return Ok((PathSegment::Key(body[..close].to_owned()), tail));
    }

    let close = after
        .find(']')
        .ok_or_else(|| LullError::invalid_path(path, "unclosed bracket"))?;
    let inner = after[..close].trim();
    if inner.is_empty() {
        return Err(LullError::invalid_path(path, "empty brackets"));
    }
    if inner.contains('[') {
        return Err(LullError::invalid_path(path, "nested '['"));
    }

    let segment = match parse_index(inner) {
        Some(index) => PathSegment::Index(index),
        None => PathSegment::Key(inner.to_owned()),
    };
    Ok((segment, &after[close + 1..]))
}

/// `0` or a digit string without leading zeros.
fn parse_index(text: &str) -> Option<usize> {
    let canonical = text == "0"
        || (!text.starts_with('0') && !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['.', '[', ']', '"', '\''])
}

impl PartialEq for ObjectPath {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for ObjectPath {}

impl FromStr for ObjectPath {
    type Err = LullError;

    fn from_str(path: &str) -> Result<Self> {
        Self::parse(path)
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if is_plain_key(key) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Key(key) if key.contains('"') => write!(f, "['{key}']")?,
                PathSegment::Key(key) => write!(f, "[\"{key}\"]")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for ObjectPath {
    fn from(path: &str) -> Self {
        Self::lenient(path)
    }
}

impl From<String> for ObjectPath {
    fn from(path: String) -> Self {
        Self::lenient(&path)
    }
}

impl From<&String> for ObjectPath {
    fn from(path: &String) -> Self {
        Self::lenient(path)
    }
}

impl From<&ObjectPath> for ObjectPath {
    fn from(path: &ObjectPath) -> Self {
        path.clone()
    }
}

impl From<PathSegment> for ObjectPath {
    fn from(segment: PathSegment) -> Self {
        Self::from_segments([segment])
    }
}

impl From<usize> for ObjectPath {
    fn from(index: usize) -> Self {
        Self::from_segments([index])
    }
}

impl<S: Into<PathSegment>, const N: usize> From<[S; N]> for ObjectPath {
    fn from(segments: [S; N]) -> Self {
        Self::from_segments(segments)
    }
}

impl<S: Into<PathSegment>> From<Vec<S>> for ObjectPath {
    fn from(segments: Vec<S>) -> Self {
        Self::from_segments(segments)
    }
}

impl<S: Into<PathSegment> + Clone> From<&[S]> for ObjectPath {
    fn from(segments: &[S]) -> Self {
        Self::from_segments(segments.iter().cloned())
    }
}

impl Serialize for ObjectPath {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Self::parse(&path).map_err(serde::de::Error::custom)
    }
}
