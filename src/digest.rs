use std::str::FromStr;

use log::{debug, trace};

use crate::{Algorithm, Error::*, HttpMethod, Qop, Result};

//region CredentialHash

/// Compute the credential hash stored for a user, `MD5("username:realm:password")`.
///
/// This is the protocol-mandated value (the RFC 2617 HA1 of plain MD5), computed for
/// compliance only. It has no salt and no work factor, so it is not a general purpose
/// password storage primitive; anyone holding it can answer challenges for its realm.
pub fn make_password_hash(realm: &str, username: &str, password: &str) -> String {
    Algorithm::MD5.hash_str(&format!(
        "{name}:{realm}:{pw}",
        name = username,
        realm = realm,
        pw = password
    ))
}

//endregion

//region HA1 / HA2

/// Calculate HA1 from the stored credential hash.
///
/// With `MD5` (or no algorithm) this is the credential hash itself. `MD5-sess` binds it
/// to the nonce pair and therefore needs the client nonce.
pub fn calc_ha1(
    password_hash: &str,
    nonce: &str,
    algorithm: Option<Algorithm>,
    cnonce: Option<&str>,
) -> Result<String> {
    match algorithm {
        None | Some(Algorithm::MD5) => Ok(password_hash.to_owned()),
        Some(h @ Algorithm::MD5_SESS) => {
            let cnonce = cnonce.ok_or_else(|| MissingCnonce(format!("algorithm=\"{}\"", h)))?;
            Ok(h.hash_str(&format!(
                "{hash}:{nonce}:{cnonce}",
                hash = password_hash,
                nonce = nonce,
                cnonce = cnonce
            )))
        }
    }
}

/// Calculate HA2 from the request line, and the body for `auth-int`.
pub fn calc_ha2(
    method: &HttpMethod,
    uri: &str,
    qop: Option<Qop>,
    body: Option<&[u8]>,
) -> Result<String> {
    let h = Algorithm::MD5;
    let a2 = match qop {
        None | Some(Qop::AUTH) => format!("{method}:{uri}", method = method, uri = uri),
        Some(Qop::AUTH_INT) => {
            let body = body.ok_or(MissingBody)?;
            format!(
                "{method}:{uri}:{bodyhash}",
                method = method,
                uri = uri,
                bodyhash = h.hash(body)
            )
        }
    };
    Ok(h.hash_str(&a2))
}

//endregion

//region Contexts

/// Challenge side of an attempt: the server nonce and what the client echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeContext<'a> {
    /// Server nonce
    pub nonce: &'a str,
    /// Client nonce; required for `MD5-sess` and whenever a qop is used
    pub cnonce: Option<&'a str>,
    /// Nonce count, kept as sent (e.g. "00000001"); required whenever a qop is used
    pub nc: Option<&'a str>,
}

impl<'a> ChallengeContext<'a> {
    pub fn new(nonce: &'a str) -> Self {
        Self {
            nonce,
            cnonce: None,
            nc: None,
        }
    }

    pub fn with_cnonce(mut self, cnonce: &'a str) -> Self {
        self.cnonce = Some(cnonce);
        self
    }

    pub fn with_nc(mut self, nc: &'a str) -> Self {
        self.nc = Some(nc);
        self
    }
}

/// Request side of an attempt.
///
/// All fields are borrowed; the struct is meaningful only for the one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    /// HTTP method used (defaults to GET)
    pub method: HttpMethod<'a>,
    /// Requested URI, exactly as it appears in the `uri` directive
    pub uri: &'a str,
    /// Request payload body - used for auth-int (auth with integrity check)
    pub body: Option<&'a [u8]>,
}

impl<'a> RequestContext<'a> {
    /// Construct a new context with the GET verb and no payload body.
    pub fn new(uri: &'a str) -> Self {
        Self::new_with_method(uri, None, HttpMethod::GET)
    }

    /// Construct a new context with the POST verb and a payload body (may be None).
    pub fn new_post(uri: &'a str, body: Option<&'a [u8]>) -> Self {
        Self::new_with_method(uri, body, HttpMethod::POST)
    }

    /// Construct a new context with arbitrary verb and, optionally, a payload body
    pub fn new_with_method(uri: &'a str, body: Option<&'a [u8]>, method: HttpMethod<'a>) -> Self {
        Self { method, uri, body }
    }
}

//endregion

//region DigestRequest

/// Everything needed to compute the expected `response` of one authentication attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestRequest<'a> {
    /// Stored credential hash, see [`make_password_hash()`](fn.make_password_hash.html)
    pub password_hash: &'a str,
    /// Hashing algo (defaults to MD5-sess)
    pub algorithm: Algorithm,
    /// Quality of protection; None for the RFC 2069 compatible digest
    pub qop: Option<Qop>,
    pub challenge: ChallengeContext<'a>,
    pub request: RequestContext<'a>,
}

impl<'a> DigestRequest<'a> {
    pub fn new(
        password_hash: &'a str,
        challenge: ChallengeContext<'a>,
        request: RequestContext<'a>,
    ) -> Self {
        Self {
            password_hash,
            algorithm: Algorithm::default(),
            qop: None,
            challenge,
            request,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_qop(mut self, qop: Option<Qop>) -> Self {
        self.qop = qop;
        self
    }

    /// Compute the response digest the client is expected to have sent.
    ///
    /// # Errors
    /// If a parameter required by the algorithm or qop is missing. The caller should
    /// treat the attempt as unauthorized.
    pub fn response(&self) -> Result<String> {
        self.compute().map_err(|e| {
            debug!("Digest response rejected for uri {}: {}", self.request.uri, e);
            e
        })
    }

    fn compute(&self) -> Result<String> {
        let h = self.algorithm;
        let challenge = &self.challenge;
        let request = &self.request;

        let ha1 = calc_ha1(self.password_hash, challenge.nonce, Some(h), challenge.cnonce)?;
        let ha2 = calc_ha2(&request.method, request.uri, self.qop, request.body)?;

        let response = match self.qop {
            None => h.hash_str(&format!(
                "{ha1}:{nonce}:{ha2}",
                ha1 = ha1,
                nonce = challenge.nonce,
                ha2 = ha2
            )),
            Some(qop) => {
                let cnonce = challenge
                    .cnonce
                    .ok_or_else(|| MissingCnonce(format!("qop=\"{}\"", qop)))?;
                let nc = challenge.nc.ok_or(MissingNc(qop))?;
                h.hash_str(&format!(
                    "{ha1}:{nonce}:{nc}:{cnonce}:{qop}:{ha2}",
                    ha1 = ha1,
                    nonce = challenge.nonce,
                    nc = nc,
                    cnonce = cnonce,
                    qop = qop,
                    ha2 = ha2
                ))
            }
        };

        trace!(
            "Computed digest response: algorithm={}, qop={:?}, uri={}",
            h,
            self.qop,
            request.uri
        );

        Ok(response)
    }
}

//endregion

//region String boundary

/// Compute the response digest from raw directive values.
///
/// `qop` and `algorithm` are parsed here; an omitted algorithm means `MD5-sess`.
///
/// # Errors
/// Unsupported `algorithm` or `qop` values, or a parameter missing for the chosen
/// algorithm / qop.
#[allow(clippy::too_many_arguments)]
pub fn calc_response(
    method: &str,
    uri: &str,
    password_hash: &str,
    nonce: &str,
    qop: Option<&str>,
    algorithm: Option<&str>,
    cnonce: Option<&str>,
    nc: Option<&str>,
    body: Option<&[u8]>,
) -> Result<String> {
    response_from_directives(method, uri, password_hash, nonce, qop, algorithm, cnonce, nc, body)
        .map_err(|e| {
            debug!("Digest response rejected for uri {}: {}", uri, e);
            e
        })
}

#[allow(clippy::too_many_arguments)]
fn response_from_directives(
    method: &str,
    uri: &str,
    password_hash: &str,
    nonce: &str,
    qop: Option<&str>,
    algorithm: Option<&str>,
    cnonce: Option<&str>,
    nc: Option<&str>,
    body: Option<&[u8]>,
) -> Result<String> {
    let algorithm = algorithm
        .map(Algorithm::from_str)
        .transpose()?
        .unwrap_or_default();

    let qop = match qop.map(Qop::from_str).transpose() {
        Ok(q) => q,
        Err(e) => {
            // HA1 comes first, so its errors win over an unsupported qop
            calc_ha1(password_hash, nonce, Some(algorithm), cnonce)?;
            return Err(e);
        }
    };

    let challenge = ChallengeContext { nonce, cnonce, nc };
    let request = RequestContext::new_with_method(uri, body, HttpMethod::from(method));

    DigestRequest::new(password_hash, challenge, request)
        .with_algorithm(algorithm)
        .with_qop(qop)
        .compute()
}

//endregion

//region TESTS


//endregion
