// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use accessor_derive::Accessors;

#[derive(Accessors)]
pub enum Format {
    Vinyl,
    Digital,
}

#[derive(Accessors)]
pub struct Pair(u8, u8);

#[derive(Accessors)]
pub struct Plain {
    #[id]
    pub id: u64,
    #[column(nullable)]
    pub note: Option<String>,
}

// Nothing was generated, so these names are free.
mod plain_accessors {}

impl Plain {
    pub fn id(&self) -> u64 {
        self.id
    }
}

fn main() {
    let plain = Plain { id: 1, note: None };
    assert_eq!(plain.id(), 1);
    let _ = (Format::Vinyl, Format::Digital, Pair(1, 2), plain.note);
}
