//! Macro for implementing Display and FromStr for state enums
//!
//! Generates matching `Display` and case-insensitive `FromStr`
//! implementations from one variant → string table.
//!
//! # Example
//!
//! ```rust
//! use playdl_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Phase {
//!     Idle,
//!     Running,
//! }
//!
//! impl_domain_status_conversions!(Phase {
//!     Idle => "idle",
//!     Running => "running",
//! });
//!
//! assert_eq!(Phase::Running.to_string(), "running");
//! assert_eq!("IDLE".parse::<Phase>().unwrap(), Phase::Idle);
//! ```

/// Implements Display and FromStr traits for state enums
///
/// Strings in the table must be lowercase; parsing lowercases its input.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::SessionState;

    #[test]
    fn session_state_displays_lowercase() {
        assert_eq!(SessionState::Unauthenticated.to_string(), "unauthenticated");
        assert_eq!(SessionState::Authenticated.to_string(), "authenticated");
    }

    #[test]
    fn session_state_parses_any_case() {
        assert_eq!(
            SessionState::from_str("Authenticated").unwrap(),
            SessionState::Authenticated
        );
        assert_eq!(
            SessionState::from_str("UNAUTHENTICATED").unwrap(),
            SessionState::Unauthenticated
        );
    }

    #[test]
    fn unknown_state_is_rejected() {
        let result = SessionState::from_str("expired");
        assert!(result.unwrap_err().contains("Invalid SessionState: expired"));
    }
}
