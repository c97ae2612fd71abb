//! # Library
//!
//! Read-only snapshots of the items the browser lists. Loading them from the
//! daemon is somebody else's job; until then `Library::demo` seeds a
//! predictable set so the layout can be exercised.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub path: PathBuf,
    /// Length in seconds.
    pub duration: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// What the status line reports as playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NowPlaying {
    Song(Song),
    Station(Station),
}

impl NowPlaying {
    pub fn title(&self) -> &str {
        match self {
            NowPlaying::Song(song) => &song.name,
            NowPlaying::Station(station) => &station.name,
        }
    }

    /// Artist for songs, description for stations.
    pub fn subtitle(&self) -> &str {
        match self {
            NowPlaying::Song(song) => &song.artist,
            NowPlaying::Station(station) => &station.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    pub songs: Vec<Song>,
    pub stations: Vec<Station>,
}

impl Library {
    pub fn new(songs: Vec<Song>, stations: Vec<Station>) -> Self {
        Self { songs, stations }
    }

    /// Numbered placeholder songs and stations.
    pub fn demo(songs: usize, stations: usize) -> Self {
        let songs = (0..songs)
            .map(|i| Song {
                name: format!("Song {i}"),
                artist: "John Music".to_string(),
                album: "Music - The Sequel".to_string(),
                ..Default::default()
            })
            .collect();
        let stations = (0..stations)
            .map(|i| Station {
                name: format!("Station {i}"),
                description: format!("Placeholder test station n {i}"),
                ..Default::default()
            })
            .collect();
        Self::new(songs, stations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_library_counts() {
        let library = Library::demo(50, 75);
        assert_eq!(library.songs.len(), 50);
        assert_eq!(library.stations.len(), 75);
        assert_eq!(library.songs[3].name, "Song 3");
        assert_eq!(library.stations[74].description, "Placeholder test station n 74");
    }

    #[test]
    fn test_now_playing_text() {
        let playing = NowPlaying::Station(Station {
            name: "Radio".to_string(),
            description: "All day".to_string(),
            url: String::new(),
        });
        assert_eq!(playing.title(), "Radio");
        assert_eq!(playing.subtitle(), "All day");
    }
}
