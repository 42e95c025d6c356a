// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{Catalog, Result, Song, SongDuration, Year};

/// A [`Catalog`] shared between threads.
///
/// A single lock guards both albums and songs. Mutations acquire
/// exclusive access while queries only need shared access.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog(Arc<RwLock<Catalog>>);

impl SharedCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self(Arc::new(RwLock::new(catalog)))
    }

    /// Lock the catalog for running one or more queries against
    /// a consistent state.
    ///
    /// Mutations are blocked until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.0.read()
    }

    /// Apply multiple mutations atomically.
    pub fn modify<T>(&self, modify: impl FnOnce(&mut Catalog) -> T) -> T {
        let mut catalog = self.0.write();
        modify(&mut catalog)
    }

    pub fn add_album(&self, name: impl Into<String>, year: Year) -> Option<Year> {
        self.0.write().add_album(name, year)
    }

    pub fn add_song(
        &self,
        name: impl Into<String>,
        album_name: Option<&str>,
        duration: impl Into<SongDuration>,
    ) -> Result<bool> {
        self.0.write().add_song(name, album_name, duration)
    }

    pub fn insert_song(&self, song: Song) -> Result<bool> {
        self.0.write().insert_song(song)
    }

    /// Clone the current state.
    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.0.read().clone()
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(from: Catalog) -> Self {
        Self::new(from)
    }
}
