// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::{self, Write};

use serde::Serialize;

use discotheque::{AlbumSummary, Catalog, Year};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AlbumsInYear {
    pub(crate) year: Year,

    /// Ordered by name.
    pub(crate) album_names: Vec<String>,
}

/// Query results collected from a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Report {
    pub(crate) song_names: Vec<String>,

    pub(crate) albums: Vec<AlbumSummary>,

    pub(crate) songs_in_no_album: usize,

    pub(crate) longest_song: Option<String>,

    pub(crate) longest_album: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) albums_in_year: Option<AlbumsInYear>,
}

impl Report {
    #[must_use]
    pub(crate) fn new(catalog: &Catalog, year: Option<Year>) -> Self {
        let albums_in_year = year.map(|year| {
            let mut album_names = catalog
                .album_in_year(year)
                .map(ToOwned::to_owned)
                .collect::<Vec<_>>();
            album_names.sort_unstable();
            AlbumsInYear { year, album_names }
        });
        Self {
            song_names: catalog.ordered_song_names().map(ToOwned::to_owned).collect(),
            albums: catalog.album_summaries(),
            songs_in_no_album: catalog.count_songs_in_no_album(),
            longest_song: catalog.longest_song().map(ToOwned::to_owned),
            longest_album: catalog.longest_album().map(ToOwned::to_owned),
            albums_in_year,
        }
    }

    pub(crate) fn write_text(&self, writer: &mut impl Write) -> io::Result<()> {
        let Self {
            song_names,
            albums,
            songs_in_no_album,
            longest_song,
            longest_album,
            albums_in_year,
        } = self;
        writeln!(writer, "Songs ({count}):", count = song_names.len())?;
        for song_name in song_names {
            writeln!(writer, "  {song_name}")?;
        }
        writeln!(writer, "Albums ({count}):", count = albums.len())?;
        for AlbumSummary {
            name,
            year,
            song_count,
            average_duration,
        } in albums
        {
            write!(writer, "  {name} ({year}): {song_count} song(s)")?;
            if let Some(average_duration) = average_duration {
                write!(writer, ", average duration {average_duration}")?;
            }
            writeln!(writer)?;
        }
        writeln!(writer, "Songs in no album: {songs_in_no_album}")?;
        writeln!(
            writer,
            "Longest song: {}",
            longest_song.as_deref().unwrap_or("-")
        )?;
        writeln!(
            writer,
            "Longest album: {}",
            longest_album.as_deref().unwrap_or("-")
        )?;
        if let Some(AlbumsInYear { year, album_names }) = albums_in_year {
            writeln!(writer, "Albums in {year}: {}", album_names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_album("A", 2000);
        catalog.add_album("B", 2001);
        catalog.add_album("C", 2000);
        catalog.add_song("S1", Some("A"), 180.0).unwrap();
        catalog.add_song("S2", Some("A"), 220.0).unwrap();
        catalog.add_song("S3", None, 90.0).unwrap();
        catalog
    }

    #[test]
    fn collect_query_results() {
        let report = Report::new(&new_catalog(), Some(2000));
        assert_eq!(vec!["S1", "S2", "S3"], report.song_names);
        assert_eq!(3, report.albums.len());
        assert_eq!(1, report.songs_in_no_album);
        assert_eq!(Some("S2"), report.longest_song.as_deref());
        assert_eq!(Some("A"), report.longest_album.as_deref());
        assert_eq!(
            Some(AlbumsInYear {
                year: 2000,
                album_names: vec!["A".to_owned(), "C".to_owned()],
            }),
            report.albums_in_year
        );
    }

    #[test]
    fn write_text() {
        let report = Report::new(&new_catalog(), Some(2001));
        let mut output = Vec::new();
        report.write_text(&mut output).unwrap();
        let expected = "\
Songs (3):
  S1
  S2
  S3
Albums (3):
  A (2000): 2 song(s), average duration 200
  B (2001): 0 song(s)
  C (2000): 0 song(s)
Songs in no album: 1
Longest song: S2
Longest album: A
Albums in 2001: B
";
        assert_eq!(expected, String::from_utf8(output).unwrap());
    }

    #[test]
    fn write_text_for_empty_catalog() {
        let report = Report::new(&Catalog::new(), None);
        let mut output = Vec::new();
        report.write_text(&mut output).unwrap();
        assert!(
            String::from_utf8(output)
                .unwrap()
                .ends_with("Longest song: -\nLongest album: -\n")
        );
    }

    #[test]
    fn serialize_json() {
        let report = Report::new(&new_catalog(), None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!("S2", json["longest_song"]);
        assert_eq!(200.0, json["albums"][0]["average_duration"]);
        assert!(json["albums"][1]["average_duration"].is_null());
        assert!(json.get("albums_in_year").is_none());
    }
}
