use super::error::Result;
use serde_json::Value;

pub type DecodeFn<T> = fn(&Value) -> Result<T>;
pub type EncodeFn<T> = fn(&T) -> Result<Value>;

/// One discriminator of a polymorphic family.
pub struct Entry<K, T> {
    pub tag: &'static str,
    pub kind: K,
    pub decode: DecodeFn<T>,
    pub encode: EncodeFn<T>,
}

/// A static discriminator table, read-only after compilation.
pub struct Registry<K: 'static, T: 'static> {
    entries: &'static [Entry<K, T>],
}

impl<K: 'static, T: 'static> Registry<K, T> {
    pub const fn new(entries: &'static [Entry<K, T>]) -> Self {
        Registry { entries }
    }
}

impl<K: Copy + PartialEq + 'static, T: 'static> Registry<K, T> {
    /// Case-insensitive lookup of a wire tag.
    pub fn lookup(&self, tag: &str) -> Option<&'static Entry<K, T>> {
        self.entries
            .iter()
            .find(|entry| entry.tag.eq_ignore_ascii_case(tag))
    }

    pub fn get(&self, kind: K) -> Option<&'static Entry<K, T>> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [Entry<K, T>] = self.entries;
        entries.iter().map(|entry| entry.tag)
    }
}
