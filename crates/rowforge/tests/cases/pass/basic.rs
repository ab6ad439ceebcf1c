// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

use rowforge::RowFactory;

pub struct Row;

impl Row {
    pub fn get_column_index(&self, _name: &str) -> i32 {
        -1
    }

    pub fn get_i64(&self, _name: &str) -> i64 {
        0
    }

    pub fn get_string(&self, _name: &str) -> String {
        String::new()
    }
}

#[derive(Default, RowFactory)]
#[row_factory(source = "Row")]
pub struct User {
    pub id: i64,
    pub name: String,
}

fn main() {
    let user = User::convert_from_row(&Row);
    assert_eq!(user.id, 0);
    assert_eq!(user.name, "");
}
