//! Object key representations.
//!
//! Keys are either plain owned text or an interned [`Symbol`]. Which one a
//! parse produces is chosen per call with [`KeyMode`]; the parser itself is
//! unaware of the difference.

use std::{
    borrow::{Borrow, Cow},
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// An interned key.
///
/// Symbols compare by content, so `Symbol::new("foo")` is equal to every
/// symbol produced for the key `"foo"`. Clones share one allocation.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol for `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The symbol's text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if both symbols share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// An object key.
///
/// Equality is variant-sensitive: a text key never equals a symbol key,
/// even with the same text. Hashing only looks at the text, which lets a
/// [`Map`](crate::Map) be queried with a plain `&str` regardless of the key
/// mode it was built with.
#[derive(Clone, PartialEq, Eq)]
pub enum Key {
    /// Plain owned text.
    Text(String),
    /// Interned symbol.
    Symbol(Symbol),
}

impl Key {
    /// The key's text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Key::Text(s) => s,
            Key::Symbol(sym) => sym.as_str(),
        }
    }

    /// Returns `true` if the key is a [`Symbol`](Key::Symbol).
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Symbol(_))
    }

    /// Returns the symbol if this is a [`Symbol`](Key::Symbol) key.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Key::Symbol(sym) => Some(sym),
            Key::Text(_) => None,
        }
    }
}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl indexmap::Equivalent<Key> for str {
    fn equivalent(&self, key: &Key) -> bool {
        self == key.as_str()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => fmt::Debug::fmt(s, f),
            Key::Symbol(sym) => fmt::Debug::fmt(sym, f),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Key::Symbol(sym)
    }
}

/// How object keys are materialized by a parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyMode {
    /// Keys are [`Key::Text`].
    #[default]
    Text,
    /// Keys are [`Key::Symbol`], interned per parse call.
    Symbol,
}

/// Turns decoded key text into [`Key`]s according to a [`KeyMode`].
///
/// Lives for exactly one parse call.
#[derive(Debug)]
pub(crate) enum KeyBuilder {
    Text,
    Symbol(Interner),
}

impl KeyBuilder {
    pub(crate) fn new(mode: KeyMode) -> Self {
        match mode {
            KeyMode::Text => KeyBuilder::Text,
            KeyMode::Symbol => KeyBuilder::Symbol(Interner::default()),
        }
    }

    pub(crate) fn build(&mut self, text: Cow<'_, str>) -> Key {
        match self {
            KeyBuilder::Text => Key::Text(text.into_owned()),
            KeyBuilder::Symbol(interner) => Key::Symbol(interner.intern(&text)),
        }
    }
}

/// Deduplicates symbols so repeated keys share one allocation.
#[derive(Debug, Default)]
pub(crate) struct Interner {
    symbols: HashSet<Symbol>,
}

impl Interner {
    pub(crate) fn intern(&mut self, name: &str) -> Symbol {
        if let Some(sym) = self.symbols.get(name) {
            return sym.clone();
        }
        let sym = Symbol::new(name);
        self.symbols.insert(sym.clone());
        sym
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }
}
