// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

use rowforge::RowFactory;

pub struct Row;

impl Row {
    pub fn get_column_index(&self, name: &str) -> i32 {
        if name == "userName" { 0 } else { -1 }
    }

    pub fn get_string(&self, _name: &str) -> String {
        "ada".to_string()
    }
}

#[derive(Default, RowFactory)]
#[row_factory(source = "Row")]
pub struct User {
    #[row_factory(column = "userName")]
    pub user_name: String,

    #[row_factory(skip)]
    pub password_hash: String,
}

fn main() {
    let user = User::convert_from_row(&Row);
    assert_eq!(user.user_name, "ada");
    assert_eq!(user.password_hash, "");
}
