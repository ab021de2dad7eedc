// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! subjectAltName extension codec.
//!
//! The extension value is a `GeneralNames` SEQUENCE. Marshaling encodes every
//! supported choice in order. Parsing comes in two flavours: a full decode of
//! every choice, and an `otherName`-only path that steps over every other
//! element using its header alone.

use alloc::vec::Vec;

use const_oid::{AssociatedOid, ObjectIdentifier};
use der::asn1::OctetStringRef;
use der::{Decode, DecodeValue, Encode, Header, Length, Reader, SliceReader, Tag, TagNumber};
use tracing::{debug, trace};

use super::name::{GeneralName, GeneralNames, OtherName, Utf8OtherName, OTHER_NAME_TAG};
use crate::x509::extensions::{Extension, ExtensionSource};
use crate::x509::ID_CE_SUBJECT_ALT_NAME;
use crate::{EncodingError, Error, Result};

/// Encodes `names` as the DER value of a subjectAltName extension.
///
/// ```text
/// SubjectAltName ::= GeneralNames
/// ```
///
/// Names are emitted in input order. `x400Address`, `directoryName` and
/// `ediPartyName` choices are rejected with
/// [`EncodingError::UnsupportedGeneralName`].
pub fn marshal_general_names(names: &[GeneralName]) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    for name in names {
        name.encode_choice(&mut body)?;
    }

    let length = Length::try_from(body.len()).map_err(EncodingError::Der)?;
    let header = Header::new(Tag::Sequence, length).map_err(EncodingError::Der)?;

    let mut der = Vec::with_capacity(body.len() + 4);
    header.encode_to_vec(&mut der).map_err(EncodingError::Der)?;
    der.extend_from_slice(&body);

    trace!(names = names.len(), len = der.len(), "marshaled subjectAltName");
    Ok(der)
}

/// Decodes every choice of a subjectAltName extension value.
pub fn parse_general_names(extn_value: &[u8]) -> Result<GeneralNames> {
    let mut reader = SliceReader::new(extn_value).map_err(Error::Decoding)?;

    let names = reader
        .sequence(|reader| {
            let mut names = Vec::new();
            while !reader.is_finished() {
                let header = Header::decode(reader)?;
                names.push(GeneralName::decode_choice(reader, header)?);
            }
            Ok(names)
        })
        .map_err(Error::Decoding)?;

    reader.finish(names).map_err(Error::Decoding)
}

/// Decodes only the `otherName` choices of a subjectAltName extension value.
///
/// Every element header is read, but only `[0]` elements have their contents
/// decoded. All other choices, known or not, are skipped by their declared
/// length without being copied or interpreted, so the cost is driven by the
/// number of `otherName` entries. Malformed headers or lengths anywhere in
/// the sequence still fail the whole parse.
pub fn parse_other_names(extn_value: &[u8]) -> Result<Vec<OtherName>> {
    let mut reader = SliceReader::new(extn_value).map_err(Error::Decoding)?;

    let (names, skipped) = reader
        .sequence(|reader| {
            let mut names = Vec::new();
            let mut skipped = 0usize;

            while !reader.is_finished() {
                let header = Header::decode(reader)?;
                match header.tag {
                    Tag::ContextSpecific {
                        constructed,
                        number,
                    } if number == TagNumber::N0 => {
                        if !constructed {
                            return Err(header.tag.unexpected_error(Some(OTHER_NAME_TAG)));
                        }
                        names.push(OtherName::decode_value(reader, header)?);
                    }
                    _ => {
                        reader.read_slice(header.length)?;
                        skipped += 1;
                    }
                }
            }

            Ok((names, skipped))
        })
        .map_err(Error::Decoding)?;

    trace!(other_names = names.len(), skipped, "parsed subjectAltName");
    reader.finish(names).map_err(Error::Decoding)
}

/// Extracts the `otherName` entries of the subjectAltName extension found in
/// `source`, which may be a [`crate::Certificate`] or a list of extensions.
///
/// Fails with [`Error::ExtensionNotFound`] when there is no subjectAltName
/// extension, and with [`Error::Decoding`] when it is malformed.
pub fn parse_san_other_names<'a, S>(source: &S) -> Result<Vec<OtherName>>
where
    S: ExtensionSource<'a> + ?Sized,
{
    let extn = source.extension(ID_CE_SUBJECT_ALT_NAME).ok_or_else(|| {
        debug!("no subjectAltName extension");
        Error::ExtensionNotFound
    })?;

    parse_other_names(extn.extn_value.as_bytes())
}

/// Same as [`parse_san_other_names`], converting every entry to a
/// [`Utf8OtherName`].
///
/// Fails if any entry does not carry a UTF8String.
pub fn parse_san_utf8_other_names<'a, S>(source: &S) -> Result<Vec<Utf8OtherName>>
where
    S: ExtensionSource<'a> + ?Sized,
{
    parse_san_other_names(source)?
        .iter()
        .map(Utf8OtherName::try_from)
        .collect()
}

/// SubjectAltName as defined in [RFC 5280 Section 4.2.1.6].
///
/// ```text
/// SubjectAltName ::= GeneralNames
/// ```
///
/// The extension is not critical unless requested.
///
/// [RFC 5280 Section 4.2.1.6]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.6
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectAltName {
    /// The alternative names, in certificate order.
    pub names: GeneralNames,

    /// The extension `critical` flag.
    pub critical: bool,
}

impl AssociatedOid for SubjectAltName {
    const OID: ObjectIdentifier = ID_CE_SUBJECT_ALT_NAME;
}

impl SubjectAltName {
    /// Non-critical subjectAltName constructor.
    pub fn new(names: GeneralNames) -> Self {
        SubjectAltName {
            names,
            critical: false,
        }
    }

    /// Sets the extension `critical` flag.
    pub fn critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    /// Fully decodes a subjectAltName extension.
    pub fn from_extension(extn: &Extension<'_>) -> Result<Self> {
        if extn.extn_id != Self::OID {
            let kind = der::ErrorKind::OidUnknown { oid: extn.extn_id };
            return Err(Error::Decoding(kind.into()));
        }

        Ok(SubjectAltName {
            names: parse_general_names(extn.extn_value.as_bytes())?,
            critical: extn.critical,
        })
    }

    /// The DER extension value, i.e. the encoded `GeneralNames`.
    pub fn to_value_der(&self) -> Result<Vec<u8>> {
        marshal_general_names(&self.names)
    }

    /// The DER encoded `Extension`, ready to be added to a certificate.
    pub fn to_extension_der(&self) -> Result<Vec<u8>> {
        let value = self.to_value_der()?;
        let extension = Extension {
            extn_id: Self::OID,
            critical: self.critical,
            extn_value: OctetStringRef::new(&value).map_err(EncodingError::Der)?,
        };

        extension
            .to_der()
            .map_err(|err| EncodingError::Der(err).into())
    }
}
