//! Conversion between resource names and the opaque tags used on the wire.
//!
//! A tag is `<kind prefix><name>` where every `/` of the name becomes `-`.
//! Names that already contain `-` cannot be represented and are not produced
//! by the controller for the kinds listed here.
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Separator used inside resource names, e.g. `myapp/0`.
const NAME_SEPARATOR: char = '/';

/// Separator substituted on the wire, e.g. `unit-myapp-0`.
const WIRE_SEPARATOR: char = '-';

/// Kind of resource a tag refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// Workload unit, named `<service>/<n>`.
    Unit,
    /// Machine, named `<n>` or `<n>/<container>/<m>`.
    Machine,
}

impl TagKind {
    /// Literal prefix carried by every tag of this kind.
    pub const fn prefix(&self) -> &'static str {
        match self {
            TagKind::Unit => "unit-",
            TagKind::Machine => "machine-",
        }
    }

    /// Classifies a tag by its prefix.
    pub fn of(tag: &str) -> Option<TagKind> {
        [TagKind::Unit, TagKind::Machine]
            .into_iter()
            .find(|kind| tag.starts_with(kind.prefix()))
    }

    fn as_str(&self) -> &'static str {
        match self {
            TagKind::Unit => "unit",
            TagKind::Machine => "machine",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(TagKind::Unit),
            "machine" => Ok(TagKind::Machine),
            other => Err(ModelError::UnknownTagKind(other.to_string())),
        }
    }
}

/// Builds the wire tag for a resource name.
pub fn encode_tag(kind: TagKind, name: &str) -> String {
    let mut tag = String::with_capacity(kind.prefix().len() + name.len());
    tag.push_str(kind.prefix());
    tag.extend(name.chars().map(|c| {
        if c == NAME_SEPARATOR {
            WIRE_SEPARATOR
        } else {
            c
        }
    }));
    tag
}

/// Recovers the resource name from a tag.
///
/// Returns `None` when the tag belongs to another kind.
pub fn decode_tag(kind: TagKind, tag: &str) -> Option<String> {
    let name = tag.strip_prefix(kind.prefix())?;
    Some(name.replace(WIRE_SEPARATOR, "/"))
}

/// Tag of the unit called `name`.
#[inline]
pub fn unit_tag(name: &str) -> String {
    encode_tag(TagKind::Unit, name)
}

/// Unit name stored in `tag`, or `None` if `tag` is not a unit tag.
#[inline]
pub fn unit_name_from_tag(tag: &str) -> Option<String> {
    decode_tag(TagKind::Unit, tag)
}
