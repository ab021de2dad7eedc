// Copyright (c) 2021 The RustCrypto Project Developers
// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! GeneralNames as defined in [RFC 5280 Section 4.2.1.6].

use alloc::string::String;
use alloc::vec::Vec;

use der::asn1::{ContextSpecificRef, ObjectIdentifier, OctetString};
use der::{Any, DecodeValue, Encode, EncodeValue, Header, Reader, Tag, TagMode, TagNumber, Tagged};

use super::OtherName;
use crate::{EncodingError, Result};

/// GeneralNames as defined in [RFC 5280 Section 4.2.1.6].
///
/// ```text
/// GeneralNames ::= SEQUENCE SIZE (1..MAX) OF GeneralName
/// ```
///
/// [RFC 5280 Section 4.2.1.6]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.6
pub type GeneralNames = Vec<GeneralName>;

/// GeneralName as defined in [RFC 5280 Section 4.2.1.6].
///
/// ```text
/// GeneralName ::= CHOICE {
///     otherName                       [0]     OtherName,
///     rfc822Name                      [1]     IA5String,
///     dNSName                         [2]     IA5String,
///     x400Address                     [3]     ORAddress,
///     directoryName                   [4]     Name,
///     ediPartyName                    [5]     EDIPartyName,
///     uniformResourceIdentifier       [6]     IA5String,
///     iPAddress                       [7]     OCTET STRING,
///     registeredID                    [8]     OBJECT IDENTIFIER
/// }
/// ```
///
/// The module uses `IMPLICIT` tags. String choices carry the raw bytes of
/// the string as their contents. `x400Address`, `directoryName` and
/// `ediPartyName` are kept as opaque elements: they are decoded but cannot
/// be marshaled.
///
/// [RFC 5280 Section 4.2.1.6]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.6
#[derive(Clone, Debug, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum GeneralName {
    OtherName(OtherName),
    Rfc822Name(String),
    DnsName(String),
    X400Address(Any),
    DirectoryName(Any),
    EdiPartyName(Any),
    UniformResourceIdentifier(String),
    IpAddress(OctetString),
    RegisteredId(ObjectIdentifier),
}

/// The `[0]` tag of an `otherName` choice.
pub(crate) const OTHER_NAME_TAG: Tag = Tag::ContextSpecific {
    constructed: true,
    number: TagNumber::N0,
};

impl GeneralName {
    /// The GeneralName choice name, as spelled in RFC 5280.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneralName::OtherName(_) => "otherName",
            GeneralName::Rfc822Name(_) => "rfc822Name",
            GeneralName::DnsName(_) => "dNSName",
            GeneralName::X400Address(_) => "x400Address",
            GeneralName::DirectoryName(_) => "directoryName",
            GeneralName::EdiPartyName(_) => "ediPartyName",
            GeneralName::UniformResourceIdentifier(_) => "uniformResourceIdentifier",
            GeneralName::IpAddress(_) => "iPAddress",
            GeneralName::RegisteredId(_) => "registeredID",
        }
    }

    /// The CHOICE tag number for this variant.
    pub fn tag_number(&self) -> TagNumber {
        match self {
            GeneralName::OtherName(_) => TagNumber::N0,
            GeneralName::Rfc822Name(_) => TagNumber::N1,
            GeneralName::DnsName(_) => TagNumber::N2,
            GeneralName::X400Address(_) => TagNumber::N3,
            GeneralName::DirectoryName(_) => TagNumber::N4,
            GeneralName::EdiPartyName(_) => TagNumber::N5,
            GeneralName::UniformResourceIdentifier(_) => TagNumber::N6,
            GeneralName::IpAddress(_) => TagNumber::N7,
            GeneralName::RegisteredId(_) => TagNumber::N8,
        }
    }

    /// Appends the DER encoding of this choice to `out`.
    pub(crate) fn encode_choice(&self, out: &mut Vec<u8>) -> Result<()> {
        let number = self.tag_number();
        match self {
            GeneralName::OtherName(name) => implicit(number, name, out),
            GeneralName::Rfc822Name(s)
            | GeneralName::DnsName(s)
            | GeneralName::UniformResourceIdentifier(s) => implicit(number, s, out),
            GeneralName::IpAddress(ip) => implicit(number, ip, out),
            GeneralName::RegisteredId(oid) => implicit(number, oid, out),
            GeneralName::X400Address(_)
            | GeneralName::DirectoryName(_)
            | GeneralName::EdiPartyName(_) => {
                Err(EncodingError::UnsupportedGeneralName(self.kind()).into())
            }
        }
    }

    /// Decodes one choice given its already-read header.
    ///
    /// The reader must be positioned at the start of the element contents.
    pub(crate) fn decode_choice<'a, R: Reader<'a>>(
        reader: &mut R,
        header: Header,
    ) -> der::Result<Self> {
        let (constructed, number) = match header.tag {
            Tag::ContextSpecific {
                constructed,
                number,
            } => (constructed, number.value()),
            tag => return Err(tag.unexpected_error(None)),
        };

        let name = match (number, constructed) {
            (0, true) => GeneralName::OtherName(DecodeValue::decode_value(reader, header)?),
            (1, false) => GeneralName::Rfc822Name(DecodeValue::decode_value(reader, header)?),
            (2, false) => GeneralName::DnsName(DecodeValue::decode_value(reader, header)?),
            (3..=5, true) => {
                let any = Any::new(header.tag, reader.read_slice(header.length)?)?;
                match number {
                    3 => GeneralName::X400Address(any),
                    4 => GeneralName::DirectoryName(any),
                    _ => GeneralName::EdiPartyName(any),
                }
            }
            (6, false) => {
                GeneralName::UniformResourceIdentifier(DecodeValue::decode_value(reader, header)?)
            }
            (7, false) => GeneralName::IpAddress(DecodeValue::decode_value(reader, header)?),
            (8, false) => GeneralName::RegisteredId(DecodeValue::decode_value(reader, header)?),
            _ => return Err(header.tag.unexpected_error(None)),
        };

        Ok(name)
    }
}

impl From<OtherName> for GeneralName {
    fn from(name: OtherName) -> Self {
        GeneralName::OtherName(name)
    }
}

fn implicit<T: EncodeValue + Tagged>(
    tag_number: TagNumber,
    value: &T,
    out: &mut Vec<u8>,
) -> Result<()> {
    ContextSpecificRef {
        tag_number,
        tag_mode: TagMode::Implicit,
        value,
    }
    .encode_to_vec(out)
    .map_err(EncodingError::Der)?;

    Ok(())
}
