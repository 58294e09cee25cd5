// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use accessor_derive::{Accessors, Collection, Shared};

#[derive(Accessors)]
#[accessors(module = "playlist_api", suffix = "Links", default, generated_by = "ci")]
pub struct Playlist {
    #[generate]
    #[column(default = "Untitled")]
    name: Option<String>,

    #[generate]
    #[column(default = 5)]
    limit: u32,

    #[relation(many_to_many, inversed_by = "playlists")]
    entries: Collection<Entry>,
}

#[derive(Accessors, Default)]
pub struct Entry {
    #[relation(many_to_many, mapped_by = "entries")]
    playlists: Collection<Playlist>,
}

fn main() {
    let playlist = Shared::new(Playlist::default());
    let entry = Shared::new(Entry::default());

    assert_eq!(playlist.borrow().name(), "Untitled");
    assert_eq!(*playlist.borrow().limit(), 5);

    PlaylistLinks::add_entry(&playlist, entry.clone());
    let _ = playlist_api::PlaylistLinks::entries(&playlist);
}
