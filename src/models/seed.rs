// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Records loaded into the stores at startup when `seedData` is enabled.

use uuid::Uuid;

use super::{Doodad, Widget};

pub const FIRST_SEED_ID: Uuid = Uuid::from_u128(0x8e7dd84a_066d_48f8_9ea8_cab94e50556d);
pub const SECOND_SEED_ID: Uuid = Uuid::from_u128(0xd97db27a_71cc_4022_abf1_01ebf9033caa);

const SEED_IMAGE: &str = "https://an.image.url";

pub fn seed_widgets() -> Vec<Widget> {
    vec![
        Widget {
            id: FIRST_SEED_ID,
            name: "widget".to_string(),
            description: "A widget".to_string(),
            image: SEED_IMAGE.to_string(),
        },
        Widget {
            id: SECOND_SEED_ID,
            name: "widget2".to_string(),
            description: "A widget2".to_string(),
            image: SEED_IMAGE.to_string(),
        },
    ]
}

pub fn seed_doodads() -> Vec<Doodad> {
    vec![
        Doodad {
            id: FIRST_SEED_ID,
            name: "doodad".to_string(),
            description: "A doodad".to_string(),
            image: SEED_IMAGE.to_string(),
            price: 10.0,
        },
        Doodad {
            id: SECOND_SEED_ID,
            name: "doodad2".to_string(),
            description: "A doodad2".to_string(),
            image: SEED_IMAGE.to_string(),
            price: 20.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::parse_uuid_v4;

    #[test]
    fn test_seed_ids_are_uuid_v4() {
        for id in [FIRST_SEED_ID, SECOND_SEED_ID] {
            assert_eq!(parse_uuid_v4("id", &id.to_string()).unwrap(), id);
        }
        assert_eq!(
            FIRST_SEED_ID.to_string(),
            "8e7dd84a-066d-48f8-9ea8-cab94e50556d"
        );
    }
}
