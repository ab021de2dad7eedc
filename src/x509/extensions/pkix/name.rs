// Copyright (c) 2021 The RustCrypto Project Developers
// SPDX-FileCopyrightText: 2023 Rivos Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! PKIX Name types

mod general;
mod other;

pub use general::{GeneralName, GeneralNames};
pub(crate) use general::OTHER_NAME_TAG;
pub use other::{OtherName, Utf8OtherName};
