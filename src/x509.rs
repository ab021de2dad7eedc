// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

use const_oid::ObjectIdentifier;

/// X.509 certificate structures.
pub mod certificate;

/// X.509 v3 extensions.
pub mod extensions;

/// subjectAltName extension identifier (2.5.29.17).
pub const ID_CE_SUBJECT_ALT_NAME: ObjectIdentifier = const_oid::db::rfc5280::ID_CE_SUBJECT_ALT_NAME;

/// commonName attribute type (2.5.4.3).
pub const COMMON_NAME: ObjectIdentifier = const_oid::db::rfc4519::CN;
