//! This crate computes the response digest of HTTP Digest Auth as specified by
//! IETF RFCs 2069, 2617 and 7616 (the MD5 family: `MD5` and `MD5-sess`).
//!
//! It is intended for the server side: the credential store keeps only the hash
//! produced by [`make_password_hash()`](fn.make_password_hash.html), and for each
//! request the expected `response` is recomputed from the directives the client sent
//! and compared against the client's value by the caller.
//!
//! Header parsing, nonce issuance and replay tracking are left to the caller.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use digest_response::{ChallengeContext, DigestRequest, Algorithm, Qop, RequestContext};
//!
//! // Done once, when the password is set. Only this hash is stored.
//! let stored = digest_response::make_password_hash("testrealm@host.com", "Mufasa", "Circle Of Life");
//!
//! // Directives from the client's Authorization header
//! let challenge = ChallengeContext::new("dcd98b7102dd2f0e8b11d0f600bfb0c093")
//!     .with_cnonce("0a4f113b")
//!     .with_nc("00000001");
//! let request = RequestContext::new("/dir/index.html");
//!
//! let expected = DigestRequest::new(&stored, challenge, request)
//!     .with_algorithm(Algorithm::MD5)
//!     .with_qop(Some(Qop::AUTH))
//!     .response()
//!     .unwrap();
//!
//! assert_eq!(expected, "6629fae49393a05397450978507c4ef1");
//! ```
//!
//! The same through the string boundary, where `qop` and `algorithm` are parsed:
//!
//! ```
//! let stored = digest_response::make_password_hash("testrealm@host.com", "Mufasa", "Circle Of Life");
//!
//! let expected = digest_response::calc_response(
//!     "GET",
//!     "/dir/index.html",
//!     &stored,
//!     "dcd98b7102dd2f0e8b11d0f600bfb0c093",
//!     Some("auth"),
//!     Some("MD5"),
//!     Some("0a4f113b"),
//!     Some("00000001"),
//!     None,
//! );
//! assert_eq!(expected.unwrap(), "6629fae49393a05397450978507c4ef1");
//!
//! // an error means the attempt is unauthorized; send a fresh challenge
//! let err = digest_response::calc_response(
//!     "GET", "/dir/index.html", &stored, "dcd98b7102dd2f0e8b11d0f600bfb0c093",
//!     Some("auth"), Some("ROT13"), None, None, None,
//! ).unwrap_err();
//! assert!(err.is_unauthorized());
//! ```

mod digest;
mod enums;
mod error;
mod utils;

pub use error::{Error, Result};

pub use crate::digest::{
    calc_ha1, calc_ha2, calc_response, make_password_hash, ChallengeContext, DigestRequest,
    RequestContext,
};

pub use crate::enums::*;

#[test]
fn test_server_flow() {
    // credential created once, then two requests reuse the nonce with increasing nc
    let stored = make_password_hash("http-auth@example.org", "Mufasa", "Circle of Life");
    let nonce = "7ypf/xlj9XXwfDPEoM4URrv/xwf94BcCAzFZH4GiTo0v";
    let cnonce = "f2/wE4q74E6zIJEtWaHKaf5wv/H5QzzpXusqGemxURZJ";

    let first = DigestRequest::new(
        &stored,
        ChallengeContext::new(nonce).with_cnonce(cnonce).with_nc("00000001"),
        RequestContext::new("/dir/index.html"),
    )
    .with_algorithm(Algorithm::MD5)
    .with_qop(Some(Qop::AUTH));

    assert_eq!(first.response().unwrap(), "8ca523f5e9506fed4657c9700eebdbec");

    let mut second = first;
    second.challenge.nc = Some("00000002");
    assert_eq!(second.response().unwrap(), "4b5d595ecf2db9df612ea5b45cd97101");
}
