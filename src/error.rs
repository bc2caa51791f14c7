use crate::Qop;
use std::result;

/// Invalid digest parameters.
///
/// Every variant means the authentication attempt cannot be validated and
/// should be answered with a fresh challenge.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("Missing \"cnonce\" with {0}")]
    MissingCnonce(String),
    #[error("Missing \"nc\" with qop=\"{0}\"")]
    MissingNc(Qop),
    #[error("Missing \"body\" with qop=\"auth-int\"")]
    MissingBody,
    #[error("Unsupported algorithm=\"{0}\"")]
    UnknownAlgorithm(String),
    #[error("Unsupported qop=\"{0}\"")]
    BadQop(String),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// All digest parameter errors map to an unauthorized attempt.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::MissingCnonce(_)
            | Error::MissingNc(_)
            | Error::MissingBody
            | Error::UnknownAlgorithm(_)
            | Error::BadQop(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::Qop;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::MissingCnonce("algorithm=\"MD5-sess\"".into()).to_string(),
            "Missing \"cnonce\" with algorithm=\"MD5-sess\""
        );
        assert_eq!(
            Error::MissingNc(Qop::AUTH_INT).to_string(),
            "Missing \"nc\" with qop=\"auth-int\""
        );
        assert_eq!(
            Error::UnknownAlgorithm("ROT13".into()).to_string(),
            "Unsupported algorithm=\"ROT13\""
        );
        assert!(Error::MissingBody.is_unauthorized());
    }
}
