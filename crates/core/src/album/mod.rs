// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Release year of an album.
pub type Year = i32;

/// An album, uniquely identified by its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Album {
    pub name: String,

    pub year: Year,
}

impl Album {
    #[must_use]
    pub fn new(name: impl Into<String>, year: Year) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }
}

/// Read-only album summary aggregated from the songs of an album.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumSummary {
    pub name: String,

    pub year: Year,

    pub song_count: usize,

    /// Absent if the album has no songs.
    pub average_duration: Option<f64>,
}
