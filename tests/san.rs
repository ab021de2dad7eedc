// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

use const_oid::ObjectIdentifier;
use der::asn1::{BitStringRef, OctetStringRef, UintRef};
use der::{AnyRef, Decode, Encode, Tag};
use hex_literal::hex;
use spki::{AlgorithmIdentifierRef, SubjectPublicKeyInfoRef};

use rice_san::x509::certificate::{TbsCertificate, Version};
use rice_san::{
    marshal_general_names, parse_san_other_names, parse_san_utf8_other_names, Certificate,
    Error, Extension, GeneralName, OtherName, SubjectAltName, Utf8OtherName, COMMON_NAME,
    ID_CE_SUBJECT_ALT_NAME,
};

const ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");
const UPN: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.6.1.4.1.311.20.2.3");

/// Encodes a dummy, unsigned certificate carrying `extensions`.
fn certificate_der(extensions: &[&[u8]]) -> Vec<u8> {
    let algorithm = AlgorithmIdentifierRef {
        oid: ED25519,
        parameters: None,
    };
    let validity = hex!("170D3235303130313030303030305A 170D3335303130313030303030305A");

    let extensions = (!extensions.is_empty()).then(|| {
        extensions
            .iter()
            .map(|extn| Extension::from_der(extn).unwrap())
            .collect::<Vec<_>>()
    });

    Certificate {
        tbs_certificate: TbsCertificate {
            version: Version::V3,
            serial_number: UintRef::new(&[0x2A]).unwrap(),
            signature: algorithm,
            issuer: AnyRef::new(Tag::Sequence, &[]).unwrap(),
            validity: AnyRef::new(Tag::Sequence, &validity).unwrap(),
            subject: AnyRef::new(Tag::Sequence, &[]).unwrap(),
            subject_public_key_info: SubjectPublicKeyInfoRef {
                algorithm,
                subject_public_key: BitStringRef::from_bytes(&[0x42; 32]).unwrap(),
            },
            issuer_unique_id: None,
            subject_unique_id: None,
            extensions,
        },
        signature_algorithm: algorithm,
        signature: BitStringRef::from_bytes(&[0x24; 64]).unwrap(),
    }
    .to_der()
    .unwrap()
}

fn san_certificate_der(names: &[GeneralName]) -> Vec<u8> {
    let extension = SubjectAltName::new(names.to_vec())
        .to_extension_der()
        .unwrap();
    certificate_der(&[extension.as_slice()])
}

fn other_name(type_id: ObjectIdentifier, value: &str) -> OtherName {
    Utf8OtherName::new(type_id, value).to_other_name().unwrap()
}

#[test]
fn common_name_wire_format() {
    let on = other_name(COMMON_NAME, "foo");
    let data = marshal_general_names(&[GeneralName::OtherName(on)]).unwrap();

    assert_eq!(data, hex!("30 0E A0 0C 06 03 55 04 03 A0 05 0C 03 66 6F 6F"));

    let extension = Extension {
        extn_id: ID_CE_SUBJECT_ALT_NAME,
        critical: false,
        extn_value: OctetStringRef::new(&data).unwrap(),
    };
    assert_eq!(extension.extn_id.to_string(), "2.5.29.17");
    assert!(!extension.critical);
}

#[test]
fn other_names_round_trip() {
    let names = vec![
        GeneralName::OtherName(other_name(COMMON_NAME, "hello.world")),
        GeneralName::OtherName(other_name(UPN, "user@example.com")),
        GeneralName::OtherName(other_name(COMMON_NAME, "hello.world")),
    ];
    let der = san_certificate_der(&names);
    let cert = Certificate::parse(&der).unwrap();

    let parsed: Vec<GeneralName> = parse_san_other_names(&cert)
        .unwrap()
        .into_iter()
        .map(GeneralName::OtherName)
        .collect();

    assert_eq!(parsed, names);
}

#[test]
fn mixed_names_keep_only_other_names() {
    let names = vec![
        GeneralName::DnsName("a.example.com".into()),
        GeneralName::OtherName(other_name(UPN, "first")),
        GeneralName::DnsName("b.example.com".into()),
        GeneralName::UniformResourceIdentifier("https://example.com".into()),
        GeneralName::OtherName(other_name(COMMON_NAME, "second")),
        GeneralName::DnsName("c.example.com".into()),
    ];
    let der = san_certificate_der(&names);
    let cert = Certificate::parse(&der).unwrap();

    assert_eq!(
        parse_san_utf8_other_names(&cert).unwrap(),
        [
            Utf8OtherName::new(UPN, "first"),
            Utf8OtherName::new(COMMON_NAME, "second"),
        ]
    );
}

#[test]
fn dns_names_only() {
    let names: Vec<_> = (0..8)
        .map(|i| GeneralName::DnsName(format!("node-{i}.example.com")))
        .collect();
    let der = san_certificate_der(&names);
    let cert = Certificate::parse(&der).unwrap();

    assert!(parse_san_other_names(&cert).unwrap().is_empty());
}

#[test]
fn missing_extension_is_not_a_decoding_error() {
    // basicConstraints only
    let basic_constraints = hex!("300C 0603551D13 0101FF 04023000");
    let der = certificate_der(&[basic_constraints.as_slice()]);
    let cert = Certificate::parse(&der).unwrap();

    let err = parse_san_other_names(&cert).unwrap_err();
    assert!(matches!(err, Error::ExtensionNotFound));
    assert!(err.is_extension_not_found());

    let der = certificate_der(&[]);
    let cert = Certificate::parse(&der).unwrap();
    assert!(parse_san_other_names(&cert)
        .unwrap_err()
        .is_extension_not_found());
}

#[test]
fn malformed_extension_is_a_decoding_error() {
    // The SEQUENCE announces 5 bytes but holds 3.
    let broken = hex!("300C 0603551D11 0405 3005 820161");
    let der = certificate_der(&[broken.as_slice()]);
    let cert = Certificate::parse(&der).unwrap();

    let err = parse_san_other_names(&cert).unwrap_err();
    assert!(matches!(err, Error::Decoding(_)));
    assert!(!err.is_extension_not_found());
}

#[test]
fn extension_list_source() {
    let extension = SubjectAltName::new(vec![
        GeneralName::DnsName("hello.world".into()),
        GeneralName::OtherName(other_name(COMMON_NAME, "hello.world")),
    ])
    .to_extension_der()
    .unwrap();
    let extensions = vec![Extension::from_der(&extension).unwrap()];

    let parsed = parse_san_other_names(&extensions).unwrap();
    assert_eq!(parsed, [other_name(COMMON_NAME, "hello.world")]);
}

#[test]
fn non_utf8_other_name_value() {
    let on = OtherName {
        type_id: UPN,
        value: der::Any::new(Tag::OctetString, vec![0xDE, 0xAD]).unwrap(),
    };
    let der = san_certificate_der(&[GeneralName::OtherName(on.clone())]);
    let cert = Certificate::parse(&der).unwrap();

    assert_eq!(parse_san_other_names(&cert).unwrap(), [on.clone()]);
    assert!(matches!(on.to_utf8(), Err(Error::Decoding(_))));
    assert!(matches!(
        parse_san_utf8_other_names(&cert),
        Err(Error::Decoding(_))
    ));
}
