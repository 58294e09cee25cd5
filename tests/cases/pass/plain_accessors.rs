// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use accessor_derive::Accessors;

#[derive(Accessors, Default)]
pub struct Track {
    #[id]
    #[generate]
    id: u64,

    #[generate]
    title: String,

    #[generate]
    #[column(default = "Unknown")]
    artist: Option<String>,

    #[generate]
    #[column(nullable = false)]
    label: Option<String>,

    #[generate]
    #[column(type = i64)]
    rating: u8,

    #[generate]
    plays: usize,

    notes: String,
}

fn main() {
    let mut track = Track::default();

    let _: &u64 = track.id();
    let _: &String = track.title();
    let _: String = track.artist();
    let _: Option<&String> = track.label();

    track.set_title("Starman".to_string());
    track.set_artist(None);
    track.set_label("RCA".to_string());
    let _ = track.set_rating(4).map(|track| track.title().len());
    let _ = track.set_plays(10_u64);

    let _ = &track.notes;
}
