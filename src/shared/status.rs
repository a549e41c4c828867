//! Statuszeilen-Texte für Hover und Selektion.

use glam::Vec3;

/// Koordinaten unterhalb dieses Betrags werden als exakt 0 angezeigt
/// (Rundungsrauschen aus der Strahl-Schnittberechnung).
const COORD_EPSILON: f32 = 1e-7;

fn fmt_coord(v: f32) -> String {
    if v.abs() <= COORD_EPSILON {
        "0".to_string()
    } else {
        format!("{}", v)
    }
}

fn object_element(document: &str, object: &str, element: &str) -> String {
    // Immer dreiteilig: ganze Objekte erscheinen als "Doc.box1." mit
    // leerem Element-Teil hinter dem Trenner.
    format!("{}.{}.{}", document, object, element)
}

/// Statuszeile beim Hover über einem Element.
pub fn preselect_message(document: &str, object: &str, element: &str, point: Vec3) -> String {
    format!(
        "Preselected: {} ({}, {}, {})",
        object_element(document, object, element),
        fmt_coord(point.x),
        fmt_coord(point.y),
        fmt_coord(point.z)
    )
}

/// Statuszeile nach einer Klick-Selektion.
pub fn select_message(document: &str, object: &str, element: &str, point: Vec3) -> String {
    format!(
        "Selected: {} ({}, {}, {})",
        object_element(document, object, element),
        fmt_coord(point.x),
        fmt_coord(point.y),
        fmt_coord(point.z)
    )
}
