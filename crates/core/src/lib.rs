// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Music catalog of albums and songs with aggregate queries.

use thiserror::Error;

mod album;
pub use self::album::{Album, AlbumSummary, Year};

mod song;
pub use self::song::{DurationValue, Song, SongDuration};

mod catalog;
pub use self::catalog::Catalog;

mod shared;
pub use self::shared::SharedCatalog;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A song refers to an album that is not registered.
    #[error("invalid album reference: {album_name}")]
    InvalidReference { album_name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
