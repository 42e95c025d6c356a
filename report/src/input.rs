// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, path::Path};

use anyhow::Context as _;
use serde::Deserialize;

use discotheque::{Album, Catalog, Song};

/// Contents of a catalog file.
///
/// ```ron
/// (
///     albums: [(name: "Blue", year: 1971)],
///     songs: [(name: "Carey", album_name: Some("Blue"), duration: 183.0)],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    pub(crate) albums: Vec<Album>,

    #[serde(default)]
    pub(crate) songs: Vec<Song>,
}

impl CatalogFile {
    pub(crate) fn parse(input: &str) -> anyhow::Result<Self> {
        ron::from_str(input).map_err(Into::into)
    }

    pub(crate) fn into_catalog(self) -> anyhow::Result<Catalog> {
        let Self { albums, songs } = self;
        Catalog::try_from_records(albums, songs).map_err(Into::into)
    }
}

pub(crate) fn load_catalog(file_path: &Path) -> anyhow::Result<Catalog> {
    log::info!("Loading catalog from file: {}", file_path.display());
    let input = fs::read_to_string(file_path)
        .with_context(|| format!("reading {}", file_path.display()))?;
    let file =
        CatalogFile::parse(&input).with_context(|| format!("parsing {}", file_path.display()))?;
    file.into_catalog()
        .with_context(|| format!("importing {}", file_path.display()))
}
