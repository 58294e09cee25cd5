// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::{BTreeSet, HashSet, VecDeque};

use accessor_derive::{Accessors, Container};

#[derive(Default)]
pub struct Queue(Vec<u32>);

impl Container for Queue {
    type Item = u32;

    fn contains_item(&self, item: &u32) -> bool {
        self.0.contains(item)
    }

    fn insert_item(&mut self, item: u32) -> bool {
        self.0.push(item);
        true
    }

    fn remove_item(&mut self, item: &u32) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != item);
        before != self.0.len()
    }

    fn item_count(&self) -> usize {
        self.0.len()
    }
}

#[derive(Accessors, Default)]
pub struct Library {
    #[generate]
    rooms: VecDeque<String>,

    #[generate]
    tags: HashSet<String>,

    #[generate(singular = "isbn")]
    isbn_list: BTreeSet<u64>,

    #[generate(collection)]
    queue: Queue,
}

fn main() {
    let mut library = Library::default();
    library
        .add_room("A".to_string())
        .add_tag("poetry".to_string())
        .add_isbn(9_780_140_449_136)
        .add_queue(7);

    let _: &VecDeque<String> = library.rooms();
    let _: &HashSet<String> = library.tags();
    let _: &BTreeSet<u64> = library.isbn_list();
    let _: &Queue = library.queue();

    library
        .remove_room(&"A".to_string())
        .remove_tag(&"poetry".to_string())
        .remove_isbn(&9_780_140_449_136)
        .remove_queue(&7);
}
