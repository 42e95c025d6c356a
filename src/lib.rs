// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! discotheque - Music catalog with aggregate queries.
//!
//! Re-exports the domain model and the query engine.

pub use discotheque_core::*;
