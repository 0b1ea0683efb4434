use crate::key::KeyMode;

/// Per-call options for [`Parser::parse`](crate::Parser::parse).
///
/// # Examples
///
/// ```rust
/// use jsonsl::{KeyMode, ParseOptions};
///
/// let options = ParseOptions {
///     key_mode: KeyMode::Symbol,
/// };
/// assert_eq!(options, ParseOptions::symbol_keys());
/// ```
///
/// # Default
///
/// Keys are produced as plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// How object keys are materialized.
    ///
    /// Only the representation of keys changes; parsing, duplicate handling
    /// and member order are identical in both modes.
    ///
    /// # Default
    ///
    /// [`KeyMode::Text`]
    pub key_mode: KeyMode,
}

impl ParseOptions {
    /// Options that produce interned symbol keys.
    #[must_use]
    pub const fn symbol_keys() -> Self {
        Self {
            key_mode: KeyMode::Symbol,
        }
    }
}
