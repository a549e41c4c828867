//! Element-Referenzen: gepunktete Pfad-Strings in verschachtelte Objektgraphen.
//!
//! Konvention (aus dem Dokumentmodell übernommen): jedes Objektnamens-Segment
//! endet mit einem Punkt, das terminale Geometrie-Subelement nie. Beispiele:
//!
//! - `"link1.link2.box.Face1"` — Face1 des Box-Objekts unter zwei Links
//! - `"link1.link2.box."`      — das Box-Objekt als Ganzes (Sub-Objekt)
//! - `"Face1"`                 — Subelement direkt am Top-Level-Objekt
//! - `""`                      — das ganze Objekt
//!
//! Fehlerhafte Strings (unbalancierte Punkte) werden über Bounds-geprüfte
//! Scans toleriert und degradieren zu "kein Aufstieg möglich".

/// Trennzeichen zwischen Objektnamens-Segmenten.
pub const ELEMENT_SEPARATOR: char = '.';

/// Gibt zurück, ob eine Referenz das ganze Objekt meint.
pub fn is_whole_object(element: &str) -> bool {
    element.is_empty()
}

/// Gibt zurück, ob eine Referenz ein ganzes Sub-Objekt meint
/// (endet mit Separator, benennt also kein Geometrie-Subelement).
pub fn is_object_reference(element: &str) -> bool {
    element.ends_with(ELEMENT_SEPARATOR)
}

/// Prüft, ob die gespeicherte Selektion den geklickten Pfad abdeckt.
///
/// Treffer bei exakter Übereinstimmung, bei Ganz-Objekt-Selektion (leerer
/// String deckt alles ab) oder wenn die Selektion ein Punkt-terminiertes
/// Präfix des geklickten Pfades ist (ein selektiertes Sub-Objekt deckt
/// alle seine Subelemente ab).
pub fn matches_hierarchy(stored: &str, clicked: &str) -> bool {
    if stored == clicked || is_whole_object(stored) {
        return true;
    }
    is_object_reference(stored) && clicked.starts_with(stored)
}

/// Berechnet die nächsthöhere Hierarchie-Ebene einer Element-Referenz.
///
/// Beispiel: aus `"link1.link2.box."` (Box als Ganzes selektiert) wird
/// `"link1.link2."`; aus `"link1.link2.box.Face1"` wird
/// `"link1.link2.box."`; aus `"Face1"` wird `""` (ganzes Objekt).
///
/// `None` heißt: kein Aufstieg möglich. Ganz-Objekt-Referenzen (`""`)
/// bleiben auf der obersten Ebene stehen und liefern `Some("")` — ein
/// wiederholter Klick über der Dokumentwurzel ist ein No-op.
pub fn ascend(stored: &str) -> Option<String> {
    if is_whole_object(stored) {
        // Oberste Ebene erreicht: dort bleiben.
        return Some(String::new());
    }

    let bytes = stored.as_bytes();
    let mut next = match stored.rfind(ELEMENT_SEPARATOR) {
        Some(0) | None => {
            // Kein (nutzbarer) Punkt: terminales Element am Top-Level-Objekt,
            // Aufstieg geht zum ganzen Objekt.
            return Some(String::new());
        }
        Some(idx) => idx,
    };

    if next + 1 == bytes.len() {
        // Referenz endet mit Punkt, meint also ein ganzes Sub-Objekt.
        // Für den Aufstieg den vorletzten Punkt suchen: das Ende des
        // Elternnamens in der Objektkette.
        next = match stored[..next].rfind(ELEMENT_SEPARATOR) {
            Some(idx) => idx,
            None => return Some(String::new()),
        };
    }

    // Elternkette inklusive des abschließenden Punkts übernehmen.
    Some(stored[..=next].to_string())
}

/// Zerlegt eine Referenz in (Objektketten-Präfix, terminales Subelement).
///
/// Das Präfix behält seinen abschließenden Punkt; bei reinen
/// Objekt-Referenzen ist das Subelement leer.
pub fn split_leaf(element: &str) -> (&str, &str) {
    match element.rfind(ELEMENT_SEPARATOR) {
        Some(idx) => (&element[..=idx], &element[idx + 1..]),
        None => ("", element),
    }
}
