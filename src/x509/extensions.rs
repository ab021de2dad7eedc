// Copyright (c) 2021 The RustCrypto Project Developers
// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Standardized X.509 Certificate Extensions

use alloc::vec::Vec;

use const_oid::ObjectIdentifier;
use der::{asn1::OctetStringRef, Sequence};

/// PKIX extensions (RFC 5280).
pub mod pkix;

/// Extension as defined in [RFC 5280 Section 4.1.2.9].
///
/// The extnValue type may be further parsed using a decoder corresponding to
/// the extnID value.
///
/// ```text
/// Extension  ::=  SEQUENCE  {
///     extnID      OBJECT IDENTIFIER,
///     critical    BOOLEAN DEFAULT FALSE,
///     extnValue   OCTET STRING
///                 -- contains the DER encoding of an ASN.1 value
///                 -- corresponding to the extension type identified
///                 -- by extnID
/// }
/// ```
///
/// [RFC 5280 Section 4.1.2.9]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.9
#[derive(Copy, Clone, Debug, Eq, PartialEq, Sequence)]
#[allow(missing_docs)]
pub struct Extension<'a> {
    pub extn_id: ObjectIdentifier,

    #[asn1(default = "Default::default")]
    pub critical: bool,

    pub extn_value: OctetStringRef<'a>,
}

/// Extensions as defined in [RFC 5280 Section 4.1.2.9].
///
/// ```text
/// Extensions  ::=  SEQUENCE SIZE (1..MAX) OF Extension
/// ```
///
/// [RFC 5280 Section 4.1.2.9]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.9
pub type Extensions<'a> = Vec<Extension<'a>>;

/// Anything carrying a list of X.509 extensions.
pub trait ExtensionSource<'a> {
    /// The extensions, in certificate order.
    fn extensions(&self) -> &[Extension<'a>];

    /// Returns the first extension identified by `oid`, if any.
    fn extension(&self, oid: ObjectIdentifier) -> Option<&Extension<'a>> {
        self.extensions().iter().find(|extn| extn.extn_id == oid)
    }
}

impl<'a> ExtensionSource<'a> for [Extension<'a>] {
    fn extensions(&self) -> &[Extension<'a>] {
        self
    }
}

impl<'a> ExtensionSource<'a> for Vec<Extension<'a>> {
    fn extensions(&self) -> &[Extension<'a>] {
        self.as_slice()
    }
}
