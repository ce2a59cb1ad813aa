// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;

/// An item, identified by its column in the encoded matrix. Ids are
/// assigned in sorted name order, so ordering items by id orders them
/// by name too.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
}

// If all item names convert to an integer, order by that integer,
// otherwise order lexicographically.
pub fn sort_item_names(names: &mut Vec<String>) {
    let all_items_convert_to_ints = names.iter().all(|x| x.parse::<u64>().is_ok());
    if all_items_convert_to_ints {
        names.sort_by(|x, y| {
            let _x = x.parse::<u64>().unwrap_or(0);
            let _y = y.parse::<u64>().unwrap_or(0);
            // "07" and "7" parse equal; fall back to the text to keep a total order.
            match _x.cmp(&_y) {
                Ordering::Equal => x.cmp(y),
                other => other,
            }
        });
    } else {
        names.sort();
    }
}
