#![no_main]

// Harness: policy_from_json
// Focus: arbitrary bytes through the JSON policy loader. Accepted policies must
// define every role with a non-empty grant set and survive a save/reload cycle.

use libfuzzer_sys::fuzz_target;
use rolegate_core::{Role, RoleCapabilityMap};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(map) = RoleCapabilityMap::from_json(json) {
        for role in Role::ALL {
            assert!(!map.get(role).is_empty());
        }
        let saved = serde_json::to_string(&map).expect("serialise accepted policy");
        let reloaded = RoleCapabilityMap::from_json(&saved).expect("reload saved policy");
        assert_eq!(reloaded, map);
    }
});
