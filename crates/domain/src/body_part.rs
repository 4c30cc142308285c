use std::{fmt, slice::Iter};

use derive_more::{Deref, Display};

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyPart(String);

impl BodyPart {
    pub const ALL: &'static str = "all";

    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0.trim().eq_ignore_ascii_case(Self::ALL)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BodyPart {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BodyPart {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BodyPart {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Ordered list of body parts, starting with the `all` sentinel.
///
/// The sentinel occurs exactly once. Any sentinel supplied by the provider is dropped, all other
/// entries keep the provider's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPartCatalog(Vec<BodyPart>);

impl BodyPartCatalog {
    pub fn new(body_parts: impl IntoIterator<Item = BodyPart>) -> Self {
        Self(
            std::iter::once(BodyPart::all())
                .chain(body_parts.into_iter().filter(|b| !b.is_all()))
                .collect(),
        )
    }

    pub fn iter(&self) -> Iter<'_, BodyPart> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BodyPart] {
        &self.0
    }

    /// Number of entries including the sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, the sentinel is part of every catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, body_part: &BodyPart) -> bool {
        self.0.contains(body_part)
    }
}

impl Default for BodyPartCatalog {
    fn default() -> Self {
        Self::new([])
    }
}

impl<'a> IntoIterator for &'a BodyPartCatalog {
    type Item = &'a BodyPart;
    type IntoIter = Iter<'a, BodyPart>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum BodyPartSelection {
    #[default]
    All,
    Only(BodyPart),
}

impl BodyPartSelection {
    #[must_use]
    pub fn is_selected(&self, body_part: &BodyPart) -> bool {
        match self {
            BodyPartSelection::All => body_part.is_all(),
            BodyPartSelection::Only(selected) => selected == body_part,
        }
    }
}

impl From<BodyPart> for BodyPartSelection {
    fn from(value: BodyPart) -> Self {
        if value.is_all() {
            BodyPartSelection::All
        } else {
            BodyPartSelection::Only(value)
        }
    }
}

impl fmt::Display for BodyPartSelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BodyPartSelection::All => write!(f, "{}", BodyPart::ALL),
            BodyPartSelection::Only(body_part) => write!(f, "{body_part}"),
        }
    }
}
