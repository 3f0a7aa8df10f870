/// A required schema value is missing or malformed.
///
/// Generation for the affected interface stops; nothing is defaulted, since a
/// guessed value could make the declaration and implementation disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed field `{field}`: {reason}")]
    Malformed { field: String, reason: String },

    #[error("alias lists differ in length: {primary} has {primary_len}, {companion} has {companion_len}")]
    AliasMismatch {
        primary: &'static str,
        primary_len: usize,
        companion: &'static str,
        companion_len: usize,
    },
}

impl SchemaError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
