use crate::{Error, Error::*, Result};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use md5::Md5;

use crate::utils::hex_digest;

/// Digest algorithm. Both variants hash with MD5; the `-sess` variant binds
/// HA1 to the server and client nonces.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(non_camel_case_types)]
pub enum Algorithm {
    MD5,
    MD5_SESS,
}

impl Algorithm {
    /// Calculate the hex encoded MD5 hash of bytes (both variants hash with MD5)
    pub fn hash(self, bytes: &[u8]) -> String {
        hex_digest::<Md5>(bytes)
    }

    /// Calculate the hex encoded MD5 hash of string's bytes
    pub fn hash_str(self, bytes: &str) -> String {
        self.hash(bytes.as_bytes())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Parse from the format used in the Authorization header
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MD5" => Ok(Algorithm::MD5),
            "MD5-sess" => Ok(Algorithm::MD5_SESS),
            _ => Err(UnknownAlgorithm(s.into())),
        }
    }
}

impl Default for Algorithm {
    /// Get a MD5-sess instance
    fn default() -> Self {
        Algorithm::MD5_SESS
    }
}

impl Display for Algorithm {
    /// Format to the form used in HTTP headers
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Algorithm::MD5 => "MD5",
            Algorithm::MD5_SESS => "MD5-sess",
        })
    }
}

/// QOP field values
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(non_camel_case_types)]
pub enum Qop {
    AUTH,
    AUTH_INT,
}

impl FromStr for Qop {
    type Err = Error;

    /// Parse from "auth" or "auth-int" as used in HTTP headers
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auth" => Ok(Qop::AUTH),
            "auth-int" => Ok(Qop::AUTH_INT),
            _ => Err(BadQop(s.into())),
        }
    }
}

impl Display for Qop {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Qop::AUTH => "auth",
            Qop::AUTH_INT => "auth-int",
        })
    }
}

/// HTTP method (part of the HA2 input)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpMethod<'a> {
    GET,
    POST,
    HEAD,
    CONNECT,
    OTHER(&'a str),
}

impl<'a> Default for HttpMethod<'a> {
    fn default() -> Self {
        HttpMethod::GET
    }
}

impl<'a> Display for HttpMethod<'a> {
    /// Convert to uppercase string
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::CONNECT => "CONNECT",
            HttpMethod::OTHER(s) => s,
        })
    }
}

impl<'a> From<&'a str> for HttpMethod<'a> {
    /// Known verbs are matched exactly; anything else is carried verbatim,
    /// since the method is hashed as sent.
    fn from(s: &'a str) -> Self {
        match s {
            "GET" => HttpMethod::GET,
            "POST" => HttpMethod::POST,
            "HEAD" => HttpMethod::HEAD,
            "CONNECT" => HttpMethod::CONNECT,
            other => HttpMethod::OTHER(other),
        }
    }
}

#[cfg(feature = "http")]
impl<'a> From<&'a http::Method> for HttpMethod<'a> {
    fn from(m: &'a http::Method) -> Self {
        HttpMethod::from(m.as_str())
    }
}
