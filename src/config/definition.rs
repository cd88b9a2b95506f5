//! Dependency definition types

use crate::options::CanonicalExample;
use crate::types::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to an installable package: a plain attribute name, or a
/// nested attribute path such as `unixtools.xxd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageIdentifier {
    Name(String),
    Path(Vec<String>),
}

impl PackageIdentifier {
    pub fn name(name: impl Into<String>) -> Self {
        PackageIdentifier::Name(name.into())
    }

    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PackageIdentifier::Path(segments.into_iter().map(Into::into).collect())
    }

    /// Segments of this identifier; a plain name is a one-element path.
    pub fn segments(&self) -> Vec<String> {
        match self {
            PackageIdentifier::Name(name) => vec![name.clone()],
            PackageIdentifier::Path(segments) => segments.clone(),
        }
    }

    /// Check the identifier shape, reporting the first problem found.
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        match self {
            PackageIdentifier::Name(name) => check_segment(name),
            PackageIdentifier::Path(segments) => {
                if segments.is_empty() {
                    return Err(ShapeError::EmptyPath);
                }
                segments.iter().try_for_each(|s| check_segment(s))
            }
        }
    }
}

fn check_segment(segment: &str) -> Result<(), ShapeError> {
    if segment.is_empty() {
        Err(ShapeError::EmptyName)
    } else if segment.chars().any(char::is_whitespace) {
        Err(ShapeError::Whitespace(segment.to_string()))
    } else {
        Ok(())
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageIdentifier::Name(name) => f.write_str(name),
            PackageIdentifier::Path(segments) => f.write_str(&segments.join(".")),
        }
    }
}

impl From<&str> for PackageIdentifier {
    fn from(name: &str) -> Self {
        PackageIdentifier::Name(name.to_string())
    }
}

/// Alternate package shown in option documentation.
///
/// `Raw` identifiers are rendered by the adapter; `Expression` values carry
/// their own display text and pass through untouched. Only a table with a
/// `_type` key reads as an `Expression`; strings and arrays are always `Raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleSource {
    Expression(CanonicalExample),
    Raw(PackageIdentifier),
}

impl From<PackageIdentifier> for ExampleSource {
    fn from(id: PackageIdentifier) -> Self {
        ExampleSource::Raw(id)
    }
}

impl From<CanonicalExample> for ExampleSource {
    fn from(example: CanonicalExample) -> Self {
        ExampleSource::Expression(example)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDefinition {
    pub name: String,
    pub default: PackageIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<ExampleSource>,
}

impl DependencyDefinition {
    pub fn new(name: impl Into<String>, default: PackageIdentifier) -> Self {
        Self {
            name: name.into(),
            default,
            example: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<ExampleSource>) -> Self {
        self.example = Some(example.into());
        self
    }
}
