// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

///////////////////////////////////////////////////////////////////////
// Duration
///////////////////////////////////////////////////////////////////////

pub type DurationValue = f64;

/// Opaque duration of a song in an arbitrary unit.
///
/// Neither the sign nor the magnitude are validated. Both zeros are
/// considered equal and so are all NaNs. Ordering is total: NaN is
/// greater than any other value.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct SongDuration(DurationValue);

impl SongDuration {
    #[must_use]
    pub const fn from_inner(inner: DurationValue) -> Self {
        Self(inner)
    }

    #[must_use]
    pub const fn to_inner(self) -> DurationValue {
        let Self(inner) = self;
        inner
    }

    /// Fold all zeros into +0.0 and all NaNs into the positive quiet NaN.
    #[must_use]
    #[allow(clippy::float_cmp)]
    fn canonical(self) -> DurationValue {
        if self.0.is_nan() {
            DurationValue::NAN
        } else if self.0 == 0.0 {
            0.0
        } else {
            self.0
        }
    }
}

impl From<DurationValue> for SongDuration {
    fn from(inner: DurationValue) -> Self {
        Self::from_inner(inner)
    }
}

impl PartialEq for SongDuration {
    fn eq(&self, other: &Self) -> bool {
        self.canonical().to_bits() == other.canonical().to_bits()
    }
}

impl Eq for SongDuration {}

impl Hash for SongDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl PartialOrd for SongDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SongDuration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

///////////////////////////////////////////////////////////////////////
// Song
///////////////////////////////////////////////////////////////////////

/// A song, identified by the combination of all its fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    pub name: String,

    /// The name of the album or `None` if the song is not part of any album.
    #[cfg_attr(feature = "serde", serde(default))]
    pub album_name: Option<String>,

    pub duration: SongDuration,
}

impl Song {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        album_name: Option<String>,
        duration: impl Into<SongDuration>,
    ) -> Self {
        Self {
            name: name.into(),
            album_name,
            duration: duration.into(),
        }
    }

    #[must_use]
    pub fn is_in_album(&self, album_name: &str) -> bool {
        self.album_name.as_deref() == Some(album_name)
    }

    #[must_use]
    pub fn is_in_no_album(&self) -> bool {
        self.album_name.is_none()
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
