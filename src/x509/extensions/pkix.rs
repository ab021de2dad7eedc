// Copyright (c) 2021 The RustCrypto Project Developers
// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! PKIX X.509 Certificate Extensions (RFC 5280)

/// GeneralName and OtherName types.
pub mod name;

/// subjectAltName extension codec.
pub mod san;
