// SPDX-FileCopyrightText: 2026 rowforge contributors
// SPDX-License-Identifier: MIT

use rowforge::RowFactory;

pub struct Row;

#[derive(Default, RowFactory)]
#[row_factory(source = "Row")]
pub struct Heartbeat {}

fn main() {
    let _beat = Heartbeat::convert_from_row(&Row);
}
