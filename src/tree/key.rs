use std::fmt;

/// One or more interchangeable names addressing a single group entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    names: Vec<String>,
}

impl Key {
    /// A key with a single name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    /// A key reachable under any of the given names.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty.
    pub fn aliases<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(!names.is_empty(), "a key needs at least one name");
        Self { names }
    }

    /// Whether `name` is one of this key's names.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// All names joined with `/`, as shown in help output.
    #[must_use]
    pub fn joined(&self) -> String {
        self.names.join("/")
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_contains_its_name() {
        let key = Key::name("build");
        assert!(key.contains("build"));
        assert!(!key.contains("buil"));
    }

    #[test]
    fn aliases_contain_every_name() {
        let key = Key::aliases(["-h", "--help"]);
        assert!(key.contains("-h"));
        assert!(key.contains("--help"));
        assert_eq!(key.joined(), "-h/--help");
    }

    #[test]
    #[should_panic(expected = "at least one name")]
    fn empty_alias_set_is_rejected() {
        let _ = Key::aliases(Vec::<String>::new());
    }
}
