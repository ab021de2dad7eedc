// Copyright (c) 2022 by Rivos Inc.
// Licensed under the Apache License, Version 2.0, see LICENSE for details.
// SPDX-License-Identifier: Apache-2.0

//! Pure Rust X.509 subjectAltName codec.
//!
//! Embeds typed `OtherName` identity values in the subjectAltName extension
//! of a certificate, next to ordinary DNS names, and extracts them back
//! without decoding the unrelated entries.
#![no_std]

extern crate alloc;

/// Errors raised while encoding SAN data.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// The GeneralName choice has no encoder in this crate.
    #[error("unsupported GeneralName choice: {0}")]
    UnsupportedGeneralName(&'static str),

    /// Malformed object identifier arcs.
    #[error("invalid object identifier: {0}")]
    InvalidOid(const_oid::Error),

    /// DER serialization failure.
    #[error("DER encoding failed: {0}")]
    Der(der::Error),
}

/// Rice SAN errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input to a marshaling operation.
    #[error("encoding error: {0}")]
    Encoding(EncodingError),

    /// Malformed or unexpected DER.
    #[error("decoding error: {0}")]
    Decoding(der::Error),

    /// The certificate carries no subjectAltName extension.
    #[error("subjectAltName extension not found")]
    ExtensionNotFound,
}

impl Error {
    /// Whether this error only means that no SAN extension is present.
    ///
    /// Callers should read this as "no identity attributes", not as a
    /// malformed certificate.
    pub fn is_extension_not_found(&self) -> bool {
        matches!(self, Error::ExtensionNotFound)
    }
}

impl From<EncodingError> for Error {
    fn from(err: EncodingError) -> Self {
        Error::Encoding(err)
    }
}

impl From<const_oid::Error> for Error {
    fn from(err: const_oid::Error) -> Self {
        Error::Encoding(EncodingError::InvalidOid(err))
    }
}

/// Custom SAN result.
pub type Result<T> = core::result::Result<T, Error>;

/// X.509 certificate and extension types.
pub mod x509;

pub use x509::certificate::Certificate;
pub use x509::extensions::pkix::name::{GeneralName, GeneralNames, OtherName, Utf8OtherName};
pub use x509::extensions::pkix::san::{
    marshal_general_names, parse_general_names, parse_other_names, parse_san_other_names,
    parse_san_utf8_other_names, SubjectAltName,
};
pub use x509::extensions::{Extension, ExtensionSource};
pub use x509::{COMMON_NAME, ID_CE_SUBJECT_ALT_NAME};
