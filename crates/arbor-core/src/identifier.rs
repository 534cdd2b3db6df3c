//! String-interned identifiers.
//!
//! Node identifiers are supplied by callers as strings and used heavily as
//! table keys. Interning turns them into a small `Copy` handle ([`Id`]) that
//! hashes and compares cheaply, while the backing strings live in a
//! process-wide interner for the lifetime of the process.

use std::fmt;
use std::sync::{Mutex, OnceLock};

use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

fn interner() -> &'static Mutex<StringInterner<DefaultBackend>> {
    static INTERNER: OnceLock<Mutex<StringInterner<DefaultBackend>>> = OnceLock::new();
    INTERNER.get_or_init(|| Mutex::new(StringInterner::new()))
}

/// An interned identifier.
///
/// Two `Id`s are equal exactly when they were created from equal strings.
///
/// # Examples
///
/// ```
/// # use arbor_core::identifier::Id;
/// let a = Id::new("root");
/// let b = Id::new("root");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "root");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(
            interner()
                .lock()
                .expect("identifier interner lock poisoned")
                .get_or_intern(name),
        )
    }

    /// Returns the string this identifier was interned from.
    pub fn resolve(self) -> String {
        interner()
            .lock()
            .expect("identifier interner lock poisoned")
            .resolve(self.0)
            .expect("symbol was created by this interner")
            .to_string()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
