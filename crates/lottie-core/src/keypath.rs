//! Key paths address content inside a composition by name.
//!
//! A key path such as `["Layer 1", "**", "Fill 1"]` is matched against the
//! names of the nodes visited while walking the content tree. Two segments
//! are special:
//!
//! * `*` matches exactly one level with any name.
//! * `**` matches zero or more levels with any names.
//!
//! The walk itself belongs to the content tree. Each node asks the pattern
//! whether it [matches](KeyPath::matches) at the current depth, whether it is
//! a [full match](KeyPath::fully_resolves_to), and whether to
//! [descend](KeyPath::propagate_to_children). Leaf content records full
//! matches with [`resolve_key_path`].

use crate::error::KeyPathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WILDCARD: &str = "*";
pub const GLOBSTAR: &str = "**";
/// Name of the implicit root group of a layer. It never consumes a segment.
pub const CONTAINER: &str = "__container";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeySegment {
    Literal(String),
    Wildcard,
    Globstar,
}

impl KeySegment {
    pub fn as_str(&self) -> &str {
        match self {
            KeySegment::Literal(name) => name,
            KeySegment::Wildcard => WILDCARD,
            KeySegment::Globstar => GLOBSTAR,
        }
    }

    pub fn is_globstar(&self) -> bool {
        matches!(self, KeySegment::Globstar)
    }

    /// Whether this segment accepts `name` at a single level.
    pub fn accepts(&self, name: &str) -> bool {
        match self {
            KeySegment::Literal(literal) => literal == name,
            KeySegment::Wildcard | KeySegment::Globstar => true,
        }
    }
}

impl From<&str> for KeySegment {
    fn from(s: &str) -> Self {
        match s {
            WILDCARD => KeySegment::Wildcard,
            GLOBSTAR => KeySegment::Globstar,
            _ => KeySegment::Literal(s.to_string()),
        }
    }
}

impl From<String> for KeySegment {
    fn from(s: String) -> Self {
        match s.as_str() {
            WILDCARD => KeySegment::Wildcard,
            GLOBSTAR => KeySegment::Globstar,
            _ => KeySegment::Literal(s),
        }
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content that can be the target of a key path.
pub trait KeyPathElementContent {
    fn name(&self) -> &str;
}

/// A node of the content tree that takes part in key path resolution.
///
/// Groups check the pattern against their own name and forward to their
/// children; leaf content usually just calls [`resolve_key_path`].
pub trait KeyPathElement {
    fn resolve_key_path<'a>(
        &'a self,
        key_path: &KeyPath,
        depth: usize,
        accumulator: &mut Vec<ResolvedKeyPath<'a>>,
        current_partial: &KeyPath,
    );
}

/// Immutable sequence of key segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<String>", from = "Vec<String>")]
pub struct KeyPath {
    segments: Vec<KeySegment>,
}

impl KeyPath {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<KeySegment>,
    {
        Self {
            segments: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[KeySegment] {
        &self.segments
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(KeySegment::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a copy with `name` appended as a literal segment.
    ///
    /// The segment stays literal even for a name spelled `*` or `**`, but the
    /// string forms ([`Display`](fmt::Display) and serde) cannot tell it apart
    /// from a wildcard, and a name containing `.` splits when parsed back.
    pub fn add_key(&self, name: impl Into<String>) -> KeyPath {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(KeySegment::Literal(name.into()));
        KeyPath { segments }
    }

    /// Binds this (concrete) path to the content it was resolved against.
    pub fn resolve<'a>(&self, element: &'a dyn KeyPathElementContent) -> ResolvedKeyPath<'a> {
        ResolvedKeyPath {
            key_path: self.clone(),
            element,
        }
    }

    /// Whether a node called `key` may be visited at `depth`.
    pub fn matches(&self, key: &str, depth: usize) -> bool {
        if key == CONTAINER {
            return true;
        }
        self.segments
            .get(depth)
            .is_some_and(|segment| segment.accepts(key))
    }

    /// How far a walker advances into the pattern after visiting `key` at `depth`.
    ///
    /// A `**` holds its position until a name equal to the segment after it
    /// shows up, at which point both are consumed.
    pub fn increment_depth_by(&self, key: &str, depth: usize) -> usize {
        if key == CONTAINER {
            return 0;
        }
        match self.segments.get(depth) {
            Some(KeySegment::Globstar) => match self.segments.get(depth + 1) {
                Some(next) if next.as_str() == key => 2,
                _ => 0,
            },
            _ => 1,
        }
    }

    /// Whether `key` at `depth` completes the pattern.
    ///
    /// The remaining segments `depth..` must match the single name exactly,
    /// which lets any `**` among them expand to zero levels.
    pub fn fully_resolves_to(&self, key: &str, depth: usize) -> bool {
        match self.segments.get(depth..) {
            Some(rest) if !rest.is_empty() => match_segments(rest, &[key]),
            _ => false,
        }
    }

    /// Whether the children of `key` at `depth` may still match.
    pub fn propagate_to_children(&self, key: &str, depth: usize) -> bool {
        if key == CONTAINER {
            return true;
        }
        depth + 1 < self.segments.len()
            || self.segments.get(depth).is_some_and(KeySegment::is_globstar)
    }

    /// Matches the whole pattern against a concrete sequence of names.
    pub fn matches_path<S: AsRef<str>>(&self, names: &[S]) -> bool {
        match_segments(&self.segments, names)
    }
}

/// Backtracking match; a `**` tries the shortest expansion first.
fn match_segments<S: AsRef<str>>(pattern: &[KeySegment], names: &[S]) -> bool {
    match pattern.split_first() {
        None => names.is_empty(),
        Some((KeySegment::Globstar, rest)) => {
            (0..=names.len()).any(|skip| match_segments(rest, &names[skip..]))
        }
        Some((segment, rest)) => match names.split_first() {
            Some((name, tail)) => segment.accepts(name.as_ref()) && match_segments(rest, tail),
            None => false,
        },
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(keys: Vec<String>) -> Self {
        KeyPath::new(keys)
    }
}

impl From<KeyPath> for Vec<String> {
    fn from(path: KeyPath) -> Self {
        path.keys().map(str::to_string).collect()
    }
}

/// Joins segments with `.`. Not an exact round trip through [`FromStr`]:
/// literal `*`/`**` come back as wildcards and dotted names split.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Parses a dot separated path such as `"Layer 1.**.Fill 1"`.
impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyPathError::Empty);
        }
        let keys: Vec<&str> = s.split('.').collect();
        if let Some(index) = keys.iter().position(|key| key.is_empty()) {
            return Err(KeyPathError::EmptySegment { index });
        }
        Ok(KeyPath::new(keys))
    }
}

/// A concrete key path bound to the content it addressed.
#[derive(Clone)]
pub struct ResolvedKeyPath<'a> {
    key_path: KeyPath,
    element: &'a dyn KeyPathElementContent,
}

impl<'a> ResolvedKeyPath<'a> {
    pub fn key_path(&self) -> &KeyPath {
        &self.key_path
    }

    pub fn element(&self) -> &'a dyn KeyPathElementContent {
        self.element
    }
}

impl fmt::Debug for ResolvedKeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedKeyPath")
            .field("key_path", &self.key_path)
            .field("element", &self.element.name())
            .finish()
    }
}

/// Records `content` in `accumulator` if it completes `key_path` at `depth`.
///
/// Leaf content calls this from [`KeyPathElement::resolve_key_path`]. A node
/// that does not fully match is skipped without any other effect; descending
/// further is up to the caller.
pub fn resolve_key_path<'a>(
    key_path: &KeyPath,
    depth: usize,
    accumulator: &mut Vec<ResolvedKeyPath<'a>>,
    current_partial: &KeyPath,
    content: &'a dyn KeyPathElementContent,
) {
    let name = content.name();
    if key_path.fully_resolves_to(name, depth) {
        let resolved = current_partial.add_key(name);
        tracing::trace!(key_path = %key_path, resolved = %resolved, "resolved key path");
        accumulator.push(resolved.resolve(content));
    }
}
