// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

use rowforge::RowFactory;

pub struct Row;

impl Row {
    pub fn get_column_index(&self, name: &str) -> i32 {
        if name == "note" { 0 } else { -1 }
    }

    pub fn get_string(&self, _name: &str) -> String {
        "hello".to_string()
    }

    pub fn get_i64(&self, _name: &str) -> i64 {
        0
    }
}

#[derive(Default, RowFactory)]
#[row_factory(source = "Row")]
pub struct Memo {
    pub note: Option<String>,
    pub author_id: Option<i64>,
}

fn main() {
    let memo = Memo::convert_from_row(&Row);
    assert_eq!(memo.note, Some("hello".to_string()));
    assert_eq!(memo.author_id, None);
}
