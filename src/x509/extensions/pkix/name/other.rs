// Copyright (c) 2021 The RustCrypto Project Developers
// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloc::string::{String, ToString};

use der::{
    asn1::{ObjectIdentifier, Utf8StringRef},
    Any, Sequence, Tag,
};

use crate::{EncodingError, Error, Result};

/// OtherName as defined in [RFC 5280 Section 4.2.1.6].
///
/// ```text
/// OtherName ::= SEQUENCE {
///     type-id    OBJECT IDENTIFIER,
///     value      [0] EXPLICIT ANY DEFINED BY type-id
/// }
/// ```
///
/// `value` holds the single element found inside the explicit `[0]` tag.
/// Its concrete type is only known from `type_id`.
///
/// [RFC 5280 Section 4.2.1.6]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.6
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
#[allow(missing_docs)]
pub struct OtherName {
    pub type_id: ObjectIdentifier,

    #[asn1(context_specific = "0", tag_mode = "EXPLICIT")]
    pub value: Any,
}

impl OtherName {
    /// Decodes the value as a UTF8String.
    ///
    /// Fails with [`Error::Decoding`] when the value is not a well-formed
    /// UTF8String.
    pub fn to_utf8(&self) -> Result<Utf8OtherName> {
        Utf8OtherName::try_from(self)
    }
}

/// An [`OtherName`] whose value is a UTF8String.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Utf8OtherName {
    /// The value type identifier.
    pub type_id: ObjectIdentifier,

    /// The decoded string value.
    pub value: String,
}

impl Utf8OtherName {
    /// Utf8OtherName constructor.
    pub fn new(type_id: ObjectIdentifier, value: impl Into<String>) -> Self {
        Utf8OtherName {
            type_id,
            value: value.into(),
        }
    }

    /// Builds a `Utf8OtherName` from raw OID arcs.
    ///
    /// # Parameters
    ///
    /// @arcs: The object identifier arcs, e.g. `[2, 5, 4, 3]`.
    /// @value: The string value.
    pub fn from_arcs(arcs: &[u32], value: impl Into<String>) -> Result<Self> {
        let type_id = ObjectIdentifier::from_arcs(arcs.iter().copied())?;
        Ok(Self::new(type_id, value))
    }

    /// Encodes the string as a UTF8String `OtherName` value.
    pub fn to_other_name(&self) -> Result<OtherName> {
        OtherName::try_from(self)
    }
}

impl TryFrom<&Utf8OtherName> for OtherName {
    type Error = Error;

    fn try_from(name: &Utf8OtherName) -> Result<Self> {
        let value =
            Any::new(Tag::Utf8String, name.value.as_bytes()).map_err(EncodingError::Der)?;

        Ok(OtherName {
            type_id: name.type_id,
            value,
        })
    }
}

impl TryFrom<&OtherName> for Utf8OtherName {
    type Error = Error;

    fn try_from(name: &OtherName) -> Result<Self> {
        let value = Utf8StringRef::try_from(&name.value).map_err(Error::Decoding)?;

        Ok(Utf8OtherName {
            type_id: name.type_id,
            value: value.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::{Decode, Encode};
    use hex_literal::hex;

    // 1.3.6.1.4.1.311.20.2.3 (Microsoft UPN)
    const UPN: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.20.2.3");

    #[test]
    fn upn_other_name() {
        let input = hex!("3021060A2B060104018237140203A0130C1155706E5F323134393530313330406D696C");
        let decoded = OtherName::from_der(&input).unwrap();
        assert_eq!(decoded.type_id, UPN);

        let upn = decoded.to_utf8().unwrap();
        assert_eq!(upn.value, "Upn_214950130@mil");

        let encoded = upn.to_other_name().unwrap().to_der().unwrap();
        assert_eq!(&input[..], &encoded);
    }

    #[test]
    fn common_name_encoding() {
        let cn = Utf8OtherName::new(crate::COMMON_NAME, "foo");
        let encoded = cn.to_other_name().unwrap().to_der().unwrap();

        assert_eq!(encoded, hex!("300C 0603550403 A005 0C03666F6F"));
    }

    #[test]
    fn utf8_round_trip() {
        for value in ["", "hello.world", "ünïcødé ✓", "a/b=c,d"] {
            let name = Utf8OtherName::new(UPN, value);
            let other = name.to_other_name().unwrap();
            assert_eq!(other.to_utf8().unwrap(), name);
        }
    }

    #[test]
    fn from_arcs() {
        let cn = Utf8OtherName::from_arcs(&[2, 5, 4, 3], "foo").unwrap();
        assert_eq!(cn.type_id, crate::COMMON_NAME);

        let err = Utf8OtherName::from_arcs(&[3, 1], "foo").unwrap_err();
        assert!(matches!(err, Error::Encoding(EncodingError::InvalidOid(_))));
    }

    #[test]
    fn rejects_non_utf8_string_value() {
        let other = OtherName {
            type_id: UPN,
            value: Any::new(Tag::Ia5String, b"foo".as_slice()).unwrap(),
        };

        assert!(matches!(other.to_utf8(), Err(Error::Decoding(_))));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let other = OtherName {
            type_id: UPN,
            value: Any::new(Tag::Utf8String, [0xC3, 0x28].as_slice()).unwrap(),
        };

        assert!(matches!(other.to_utf8(), Err(Error::Decoding(_))));
    }
}
