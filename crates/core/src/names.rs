//! Reader, card and group name lists
//!
//! The resource manager exchanges name lists as packed multi-strings: every
//! name is NUL terminated and the list is closed by an empty name
//! (`"a\0b\0\0"`). That format stays at the boundary; the rest of the crate
//! works with [`NameList`].

use derive_more::Deref;

/// An ordered list of names returned by the resource manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deref)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Create an empty list
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Decode a packed multi-string
    ///
    /// Decoding stops at the first empty name. A buffer missing its final
    /// terminator is read up to its end. Names that are not valid UTF-8 are
    /// decoded lossily.
    pub fn from_multi_string(buffer: &[u8]) -> Self {
        buffer
            .split(|&byte| byte == 0)
            .take_while(|name| !name.is_empty())
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect()
    }

    /// Encode as a packed multi-string
    ///
    /// Empty names cannot be represented and are skipped; a name containing
    /// NUL is cut at the first NUL.
    pub fn to_multi_string(&self) -> Vec<u8> {
        let mut packed = Vec::with_capacity(self.0.iter().map(|n| n.len() + 1).sum::<usize>() + 1);
        for name in &self.0 {
            let name = name.as_bytes();
            let name = name
                .iter()
                .position(|&byte| byte == 0)
                .map_or(name, |end| &name[..end]);
            if name.is_empty() {
                continue;
            }
            packed.extend_from_slice(name);
            packed.push(0);
        }
        packed.push(0);
        packed
    }

    /// Append a name
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Whether the list contains `name`
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Consume the list and return the names
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for NameList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl IntoIterator for NameList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NameList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
