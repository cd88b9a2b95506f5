//! Literal expression adapter
//!
//! Normalizes a dependency's example into the `pkgs.<path>` form used in
//! option documentation.

use crate::config::{ExampleSource, PackageIdentifier};
use crate::types::Result;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace every derived display string starts with.
pub const PACKAGE_NAMESPACE: &str = "pkgs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionKind {
    #[serde(rename = "literalExpression")]
    LiteralExpression,
}

/// Documentation-facing rendering of an alternate package choice.
///
/// Deserializes only from a table carrying `_type`, never from a sequence,
/// so an array example is always read as a raw attribute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalExample {
    #[serde(rename = "_type")]
    kind: ExpressionKind,
    #[serde(rename = "text")]
    pub display_text: String,
    #[serde(rename = "path")]
    pub path_segments: Vec<String>,
}

impl CanonicalExample {
    /// Derive the display text from a package path.
    pub fn from_segments(path_segments: Vec<String>) -> Self {
        let display_text = std::iter::once(PACKAGE_NAMESPACE)
            .chain(path_segments.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(".");

        Self {
            kind: ExpressionKind::LiteralExpression,
            display_text,
            path_segments,
        }
    }

    /// Custom display text written by a catalog author. Not tied to any path.
    pub fn expression(text: impl Into<String>) -> Self {
        Self {
            kind: ExpressionKind::LiteralExpression,
            display_text: text.into(),
            path_segments: Vec::new(),
        }
    }
}

const EXPRESSION_FIELDS: &[&str] = &["_type", "text", "path"];

impl<'de> Deserialize<'de> for CanonicalExample {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ExpressionVisitor)
    }
}

struct ExpressionVisitor;

impl<'de> Visitor<'de> for ExpressionVisitor {
    type Value = CanonicalExample;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a table with `_type = \"literalExpression\"` and `text`")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<CanonicalExample, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kind = None;
        let mut display_text = None;
        let mut path_segments = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "_type" => kind = Some(map.next_value::<ExpressionKind>()?),
                "text" => display_text = Some(map.next_value::<String>()?),
                "path" => path_segments = Some(map.next_value::<Vec<String>>()?),
                other => return Err(de::Error::unknown_field(other, EXPRESSION_FIELDS)),
            }
        }

        Ok(CanonicalExample {
            kind: kind.ok_or_else(|| de::Error::missing_field("_type"))?,
            display_text: display_text.ok_or_else(|| de::Error::missing_field("text"))?,
            path_segments: path_segments.unwrap_or_default(),
        })
    }
}

/// Normalize an example into its canonical form.
///
/// Pre-built expressions are returned unchanged. Raw identifiers become a
/// path (a plain name is a one-element path) rendered as `pkgs.a.b`.
/// A malformed identifier yields [`DepError::Shape`](crate::DepError::Shape);
/// the synthesizer attaches the option name.
pub fn normalize(example: &ExampleSource) -> Result<CanonicalExample> {
    match example {
        ExampleSource::Expression(canonical) => Ok(canonical.clone()),
        ExampleSource::Raw(id) => {
            id.check_shape()?;
            Ok(CanonicalExample::from_segments(id.segments()))
        }
    }
}

/// Convenience for raw identifiers.
pub fn normalize_identifier(id: &PackageIdentifier) -> Result<CanonicalExample> {
    normalize(&ExampleSource::Raw(id.clone()))
}
