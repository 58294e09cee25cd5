// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod model {
    use accessor_derive::Accessors;

    #[derive(Accessors, Default)]
    pub struct Account {
        #[generate(set = "private")]
        pub(crate) email: String,

        #[generate(get = "protected", set = "none")]
        pub(crate) balance: i64,

        #[generate(skip)]
        pub(crate) secret: String,

        #[auto]
        #[generate]
        pub(crate) created_at: u64,
    }

    pub fn rename(account: &mut Account) {
        account.set_email("new@example.com".to_string());
    }
}

use model::Account;

fn main() {
    let mut account = Account::default();
    model::rename(&mut account);

    let _: &String = account.email();
    let _: &i64 = account.balance();
    let _: &u64 = account.created_at();
    let _ = &account.secret;
}
