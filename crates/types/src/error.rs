//! Configuration error kinds raised before any markup is produced.

use thiserror::Error;

/// Errors raised by [`crate::SwitchConfig::validate`].
///
/// Both kinds are non-recoverable at the point of rendering: the caller
/// must fix the configuration. Anything else that is malformed (bad item
/// records inside an otherwise valid list) degrades by omission instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The `type` is not exactly checkbox (`1`) or radio (`2`).
    #[error("You must define a valid 'type' which must be either 1 (for checkbox) or 2 (for radio).")]
    InvalidType,
    /// The radio type was selected without a non-empty `items` array.
    #[error("You must setup the 'items' array for the 'radio' type.")]
    MissingItems,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidType.to_string(),
            "You must define a valid 'type' which must be either 1 (for checkbox) or 2 (for radio)."
        );
        assert_eq!(
            ConfigError::MissingItems.to_string(),
            "You must setup the 'items' array for the 'radio' type."
        );
    }
}
