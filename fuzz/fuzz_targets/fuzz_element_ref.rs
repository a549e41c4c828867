//! Element-Referenzen kommen als freie Strings von außen (Skripte,
//! persistierte Dokumente) — Parsen und Aufstieg dürfen nie panicken.

#![no_main]

use cad_scene_select::core::element_ref;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (stored, clicked) = data;

    element_ref::is_whole_object(stored);
    element_ref::is_object_reference(stored);
    element_ref::matches_hierarchy(stored, clicked);
    element_ref::matches_hierarchy(clicked, stored);
    element_ref::split_leaf(stored);

    // Aufstieg terminiert und wird nie länger als die Eingabe.
    let mut current = stored.to_string();
    for _ in 0..64 {
        match element_ref::ascend(&current) {
            Some(parent) => {
                assert!(parent.len() <= current.len());
                if parent == current {
                    break;
                }
                current = parent;
            }
            None => break,
        }
    }
});
