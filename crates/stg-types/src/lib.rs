/// Errors that can occur when creating validated code types.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The input did not have the dotted numeric section code shape
    #[error("invalid section code: {0:?}")]
    Invalid(String),
}

/// A dotted numeric section code such as "5.2" or "13.5.2".
///
/// This type wraps a `String` and guarantees the shape used by guideline
/// documents: two or three groups of one or two ASCII digits, separated by
/// single dots. The input is trimmed of surrounding whitespace during
/// construction.
///
/// Codes are opaque ordered keys. The dots suggest a section hierarchy in the
/// source document, but no parent/child semantics are modelled here: "5.2" and
/// "5.2.1" are unrelated sibling keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionCode(String);

impl SectionCode {
    /// Creates a new `SectionCode` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result does not match the dotted numeric shape, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(SectionCode)` if the trimmed input is well formed,
    /// or `Err(CodeError::Invalid)` otherwise.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, CodeError> {
        let trimmed = input.as_ref().trim();

        let groups: Vec<&str> = trimmed.split('.').collect();
        if !(2..=3).contains(&groups.len()) {
            return Err(CodeError::Invalid(trimmed.to_owned()));
        }

        let well_formed = groups
            .iter()
            .all(|group| (1..=2).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(CodeError::Invalid(trimmed.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SectionCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for SectionCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SectionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SectionCode::parse(&s).map_err(serde::de::Error::custom)
    }
}
