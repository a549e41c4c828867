//! Aufbereitung roher Strahl-Treffer zu Pick-Kandidaten.
//!
//! Die Treffer kommen vorsortiert nach Distanz zur Kamera herein. Hier wird
//! pro Treffer die besitzende Entität aufgelöst und innerhalb einer Entität
//! das spezifischere Subelement bevorzugt: ein Punkt auf einer Kante liegt
//! immer auch auf der angrenzenden Fläche, gemeint ist aber die Kante.

use log::trace;

use crate::core::{PickCandidate, PickIntersection, SceneModel, PICK_COINCIDENCE_TOLERANCE};

/// Löst die Trefferliste eines Picks zu Kandidaten mit Entitäts-Bezug auf.
///
/// Bei `single_pick` wird nur der vorderste treffbare Kandidat gesucht;
/// liegt dort eine nicht selektierbare Entität, bleibt ein Platzhalter ohne
/// Objektbezug stehen, damit der Aufrufer "Klick ins Leere auf Geometrie"
/// von "Klick in den Hintergrund" unterscheiden kann.
pub fn resolve_picked_list(
    scene: &dyn SceneModel,
    raw: &[PickIntersection],
    single_pick: bool,
) -> Vec<PickCandidate> {
    let mut picked: Vec<PickCandidate> = Vec::new();

    for hit in raw {
        let Some(entity_id) = scene.entity_by_path(&hit.path) else {
            continue;
        };
        let Some(entity) = scene.entity(entity_id) else {
            continue;
        };

        // Reine Darstellungs-Nodes ohne Dokumentbezug zählen wie nicht
        // selektierbare Geometrie.
        if entity.object().is_none() || !entity.is_selectable() {
            if single_pick {
                if picked.is_empty() {
                    picked.push(PickCandidate::placeholder(hit));
                }
                break;
            }
            continue;
        }

        // Entitäten ohne elementbasiertes Selektionsmodell sind nur als
        // Ganzes selektierbar.
        let element = if entity.supports_selection_model() {
            match entity.element_picked(hit) {
                Some(element) => element,
                None => continue,
            }
        } else {
            String::new()
        };

        if single_pick && !picked.is_empty() {
            let same_owner = picked
                .last()
                .and_then(|c| c.object.as_ref())
                .zip(entity.object())
                .is_some_and(|(a, b)| a == b);
            if !same_owner {
                break;
            }
        }

        picked.push(PickCandidate {
            point: hit.point,
            detail: hit.detail,
            element,
            object: entity.object().cloned(),
            path: hit.path.clone(),
        });
    }

    if picked.len() > 1 {
        prefer_specific_front(&mut picked, single_pick);
    }

    trace!(
        "resolve_picked_list: {} Treffer -> {} Kandidaten",
        raw.len(),
        picked.len()
    );
    picked
}

/// Sucht unter den vordersten, zur selben Entität gehörenden Kandidaten den
/// mit der höchsten Element-Priorität innerhalb der Koinzidenz-Toleranz und
/// zieht ihn nach vorn. Bei `single_pick` bleibt nur dieser eine übrig.
fn prefer_specific_front(picked: &mut Vec<PickCandidate>, single_pick: bool) {
    let first_point = picked[0].point;
    let first_object = picked[0].object.clone();
    let mut preferred = 0;
    let mut best = picked[0].priority();

    for (idx, candidate) in picked.iter().enumerate().skip(1) {
        if candidate.object != first_object {
            break;
        }
        if candidate.point.distance(first_point) > PICK_COINCIDENCE_TOLERANCE {
            continue;
        }
        let priority = candidate.priority();
        if priority > best {
            best = priority;
            preferred = idx;
        }
    }

    if single_pick {
        let keep = picked.swap_remove(preferred);
        picked.clear();
        picked.push(keep);
    } else if preferred != 0 {
        picked.swap(0, preferred);
    }
}
