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
}

#[derive(Default, RowFactory)]
#[row_factory(source = "Row", unique)]
pub struct Counter {
    pub value: i64,
}

fn main() {
    let counter = Counter::convert_from_row(&Row);
    assert_eq!(counter.value, 0);
}
