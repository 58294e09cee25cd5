// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use accessor_derive::{Accessors, Collection, Shared};

#[derive(Accessors, Default)]
pub struct Song {
    #[generate]
    title: String,

    #[relation(many_to_one, inversed_by = "songs")]
    album: Option<Shared<Album>>,

    #[relation(many_to_many, inversed_by = "songs")]
    genres: Collection<Genre>,
}

#[derive(Accessors, Default)]
pub struct Album {
    #[relation(one_to_many, mapped_by = "album")]
    songs: Vec<Shared<Song>>,
}

#[derive(Accessors, Default)]
pub struct Genre {
    #[relation(many_to_many, mapped_by = "genres")]
    songs: Collection<Song>,
}

fn main() {
    let song = Shared::new(Song::default());
    let album = Shared::new(Album::default());
    let rock = Shared::new(Genre::default());

    song.borrow_mut().set_title("Heroes".to_string());
    song.set_album(Some(album.clone())).add_genre(rock.clone());

    let _: Option<Shared<Album>> = song.album();
    let _: Collection<Genre> = song.genres();
    let _: std::cell::Ref<'_, Vec<Shared<Song>>> = album.songs();
    let _: Collection<Song> = rock.songs();

    song.remove_genre(&rock).set_album(None);
}
