use serde::Serialize;
use sortable_rust::SortableList;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub plays: u32,
    pub rating: Option<f64>,
    pub tags: Vec<String>,
}

impl Track {
    pub fn new(title: &str, artist: &str, plays: u32) -> Self {
        Track {
            title: title.to_string(),
            artist: artist.to_string(),
            plays,
            rating: None,
            tags: Vec::new(),
        }
    }

    pub fn rated(title: &str, artist: &str, plays: u32, rating: f64) -> Self {
        Track {
            rating: Some(rating),
            ..Track::new(title, artist, plays)
        }
    }
}

pub fn library() -> Vec<Track> {
    vec![
        Track::rated("Bellbird", "Aviary", 120, 4.5),
        Track::new("Anthem", "Aviary", 340),
        Track::rated("Cascade", "Brookside", 340, 3.0),
        Track::new("Drift", "Brookside", 15),
    ]
}

pub fn titles(list: &SortableList<Track>) -> Vec<String> {
    list.iter().map(|track| track.title.clone()).collect()
}
