// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

// Generated by rdfvocab-gen from tests/data/; do not edit by hand.

pub mod odrl;
pub mod self_;
pub mod time;
