// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::{HashMap, HashSet, hash_map::Entry};

use crate::{Album, AlbumSummary, Error, Result, Song, SongDuration, Year};

mod aggregate;
use self::aggregate::DurationAggregate;

/// Registry of albums and songs.
///
/// Albums are unique by name. Songs are unique by value, i.e. adding
/// a song that equals an existing song has no effect. Every song that
/// refers to an album must refer to a registered album.
///
/// The catalog only grows. All queries are evaluated on demand against
/// the current contents.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: HashMap<String, Year>,
    songs: HashSet<Song>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Import all albums before all songs.
    ///
    /// Fails on the first song that refers to an unknown album.
    pub fn try_from_records(
        albums: impl IntoIterator<Item = Album>,
        songs: impl IntoIterator<Item = Song>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for Album { name, year } in albums {
            catalog.add_album(name, year);
        }
        for song in songs {
            catalog.insert_song(song)?;
        }
        log::debug!(
            "Imported {album_count} album(s) and {song_count} song(s)",
            album_count = catalog.album_count(),
            song_count = catalog.song_count(),
        );
        Ok(catalog)
    }

    /// Add an album or replace the year of an existing album.
    ///
    /// Returns the replaced year.
    pub fn add_album(&mut self, name: impl Into<String>, year: Year) -> Option<Year> {
        match self.albums.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                let replaced_year = entry.insert(year);
                if replaced_year != year {
                    log::debug!(
                        "Replaced year of album \"{name}\": {replaced_year} -> {year}",
                        name = entry.key(),
                    );
                }
                Some(replaced_year)
            }
            Entry::Vacant(entry) => {
                entry.insert(year);
                None
            }
        }
    }

    /// Add a song.
    ///
    /// Returns `false` if the very same song already exists.
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album_name: Option<&str>,
        duration: impl Into<SongDuration>,
    ) -> Result<bool> {
        if let Some(album_name) = album_name {
            self.check_album_reference(album_name)?;
        }
        let song = Song::new(name, album_name.map(ToOwned::to_owned), duration);
        Ok(self.insert_song_unchecked(song))
    }

    /// Add a prebuilt song.
    ///
    /// Same as [`Self::add_song()`].
    pub fn insert_song(&mut self, song: Song) -> Result<bool> {
        if let Some(album_name) = &song.album_name {
            self.check_album_reference(album_name)?;
        }
        Ok(self.insert_song_unchecked(song))
    }

    fn check_album_reference(&self, album_name: &str) -> Result<()> {
        if self.albums.contains_key(album_name) {
            return Ok(());
        }
        log::warn!("Rejecting song of unknown album \"{album_name}\"");
        Err(Error::InvalidReference {
            album_name: album_name.to_owned(),
        })
    }

    fn insert_song_unchecked(&mut self, song: Song) -> bool {
        debug_assert!(
            song.album_name
                .as_ref()
                .is_none_or(|album_name| self.albums.contains_key(album_name))
        );
        if self.songs.contains(&song) {
            log::debug!("Ignoring duplicate song: {song:?}");
            return false;
        }
        self.songs.insert(song)
    }

    #[must_use]
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    #[must_use]
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.songs.is_empty()
    }

    #[must_use]
    pub fn album_year(&self, album_name: &str) -> Option<Year> {
        self.albums.get(album_name).copied()
    }

    /// All albums in no particular order.
    pub fn albums(&self) -> impl Iterator<Item = Album> {
        self.albums
            .iter()
            .map(|(name, year)| Album::new(name.clone(), *year))
    }

    /// All songs in no particular order.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// Names of all songs in ascending order.
    ///
    /// Songs that share the same name are listed once per song.
    pub fn ordered_song_names(&self) -> impl Iterator<Item = &str> {
        let mut names = self
            .songs
            .iter()
            .map(|song| song.name.as_str())
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.into_iter()
    }

    /// Names of all albums in no particular order.
    pub fn album_names(&self) -> impl Iterator<Item = &str> {
        self.albums.keys().map(String::as_str)
    }

    /// Names of all albums released in `year` in no particular order.
    pub fn album_in_year(&self, year: Year) -> impl Iterator<Item = &str> {
        self.albums
            .iter()
            .filter(move |(_, album_year)| **album_year == year)
            .map(|(name, _)| name.as_str())
    }

    fn album_songs<'a>(&'a self, album_name: &'a str) -> impl Iterator<Item = &'a Song> {
        self.songs
            .iter()
            .filter(move |song| song.is_in_album(album_name))
    }

    /// Number of songs in an album.
    ///
    /// Unknown albums have no songs.
    #[must_use]
    pub fn count_songs(&self, album_name: &str) -> usize {
        self.album_songs(album_name).count()
    }

    #[must_use]
    pub fn count_songs_in_no_album(&self) -> usize {
        self.songs
            .iter()
            .filter(|song| song.is_in_no_album())
            .count()
    }

    /// Mean duration of the songs in an album.
    ///
    /// Absent if the album has no songs.
    #[must_use]
    pub fn average_duration_of_songs(&self, album_name: &str) -> Option<f64> {
        self.album_songs(album_name)
            .map(|song| song.duration.to_inner())
            .collect::<DurationAggregate>()
            .mean()
    }

    /// Name of a song with maximal duration.
    ///
    /// Ties are resolved arbitrarily.
    #[must_use]
    pub fn longest_song(&self) -> Option<&str> {
        self.songs
            .iter()
            .max_by_key(|song| song.duration)
            .map(|song| song.name.as_str())
    }

    /// Name of an album with maximal average song duration.
    ///
    /// Albums without songs are not considered. Ties are resolved
    /// arbitrarily.
    #[must_use]
    pub fn longest_album(&self) -> Option<&str> {
        self.aggregate_album_durations()
            .into_iter()
            .filter_map(|(album_name, aggregate)| {
                aggregate
                    .mean()
                    .map(|mean| (album_name, SongDuration::from_inner(mean)))
            })
            .max_by_key(|(_, mean)| *mean)
            .map(|(album_name, _)| album_name)
    }

    /// Summaries of all albums ordered by name.
    #[must_use]
    pub fn album_summaries(&self) -> Vec<AlbumSummary> {
        let aggregates = self.aggregate_album_durations();
        let mut summaries = self
            .albums
            .iter()
            .map(|(name, year)| {
                let aggregate = aggregates.get(name.as_str()).copied().unwrap_or_default();
                AlbumSummary {
                    name: name.clone(),
                    year: *year,
                    song_count: aggregate.count(),
                    average_duration: aggregate.mean(),
                }
            })
            .collect::<Vec<_>>();
        summaries.sort_unstable_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
        summaries
    }

    /// Durations of all songs grouped by album in a single pass.
    ///
    /// Only contains albums with at least one song.
    fn aggregate_album_durations(&self) -> HashMap<&str, DurationAggregate> {
        let mut aggregates = HashMap::<&str, DurationAggregate>::new();
        for song in &self.songs {
            let Some(album_name) = song.album_name.as_deref() else {
                continue;
            };
            aggregates
                .entry(album_name)
                .or_default()
                .add(song.duration.to_inner());
        }
        aggregates
    }
}
