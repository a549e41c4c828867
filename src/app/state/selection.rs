//! Selektions-Zustand: die eine Wahrheit über selektierte Einträge.
//!
//! Entspricht dem Selektions-Bus aus Sicht der Kollaborateure: Controller
//! und externe Aufrufer mutieren ausschließlich hier; der Render-Feedback-
//! Dispatcher leitet daraus nur transienten visuellen Zustand ab.

use glam::Vec3;
use indexmap::IndexMap;

use crate::app::events::SelectionChange;
use crate::core::element_ref;
use crate::core::ObjectRef;

/// Schlüssel eines Selektionseintrags: (Dokument, Objekt, Element-Referenz).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    /// Dokumentname
    pub document: String,
    /// Objektname
    pub object: String,
    /// Element-Referenz (leer = ganzes Objekt)
    pub element: String,
}

impl EntryKey {
    /// Erstellt einen Schlüssel aus Objekt-Referenz und Element.
    pub fn new(object: &ObjectRef, element: &str) -> Self {
        Self {
            document: object.document.clone(),
            object: object.name.clone(),
            element: element.to_string(),
        }
    }
}

/// Ein Selektionseintrag mit Klick-Koordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEntry {
    /// Besitzendes Dokumentobjekt
    pub object: ObjectRef,
    /// Element-Referenz (leer = ganzes Objekt)
    pub element: String,
    /// Klick-Koordinate in Weltkoordinaten
    pub point: Vec3,
}

/// Aktive Preselektion auf Bus-Ebene.
#[derive(Debug, Clone, PartialEq)]
pub struct PreselectEntry {
    /// Besitzendes Dokumentobjekt
    pub object: ObjectRef,
    /// Element-Referenz
    pub element: String,
    /// Hover-Koordinate
    pub point: Vec3,
}

/// Ergebnis einer Preselect-Anfrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreselectResult {
    /// Preselektion übernommen
    Accepted,
    /// Identische Preselektion bereits aktiv (kein Übergang)
    AlreadySet,
    /// Von einem Gate abgelehnt — normales negatives Ergebnis, kein Fehler
    Rejected,
}

/// Gate/Filter, das Preselektion und Selektion ablehnen kann
/// (z.B. ein Dialog, der nur Kanten eines bestimmten Objekts annimmt).
pub trait SelectionGate {
    /// Gibt zurück, ob der Eintrag zulässig ist.
    fn allow(&self, document: &str, object: &str, element: &str) -> bool;
}

/// Menge der aktuell selektierten Einträge plus aktive Preselektion.
///
/// Einfügereihenfolge wird bewahrt (IndexMap): für die Korrektheit
/// unerheblich, aber Anzeige-Reihenfolge in Listen hängt daran.
#[derive(Default)]
pub struct SelectionState {
    entries: IndexMap<EntryKey, SelectionEntry>,
    preselect: Option<PreselectEntry>,
    gate: Option<Box<dyn SelectionGate>>,
    changes: Vec<SelectionChange>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand ohne Gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt (oder entfernt) das aktive Selektions-Gate.
    pub fn set_gate(&mut self, gate: Option<Box<dyn SelectionGate>>) {
        self.gate = gate;
    }

    /// Alle Einträge in Einfügereihenfolge.
    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.values()
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt zurück, ob nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aktive Preselektion (Bus-Wahrheit, nicht der visuelle Zustand).
    pub fn preselect(&self) -> Option<&PreselectEntry> {
        self.preselect.as_ref()
    }

    /// Entnimmt alle seit dem letzten Abruf angefallenen Notifikationen.
    pub fn drain_changes(&mut self) -> Vec<SelectionChange> {
        std::mem::take(&mut self.changes)
    }

    /// Stellt eine externe Notifikation in die Queue ein
    /// (z.B. `SetPreselectSignal` aus einem Objekt-Dialog).
    pub fn push_change(&mut self, change: SelectionChange) {
        self.changes.push(change);
    }

    fn gate_allows(&self, key: &EntryKey) -> bool {
        self.gate
            .as_ref()
            .is_none_or(|g| g.allow(&key.document, &key.object, &key.element))
    }

    /// Prüft, ob ein Eintrag exakt selektiert ist.
    pub fn is_selected(&self, document: &str, object: &str, element: &str) -> bool {
        self.entries.contains_key(&EntryKey {
            document: document.to_string(),
            object: object.to_string(),
            element: element.to_string(),
        })
    }

    /// Liefert die gespeicherte Element-Referenz, die den geklickten Pfad
    /// abdeckt (exakt, Ganz-Objekt oder Punkt-terminiertes Präfix).
    ///
    /// Treiber der Hierarchie-Aufstiegslogik: ein Treffer heißt "auf dieser
    /// Ebene bereits selektiert".
    pub fn selected_element(&self, object: &ObjectRef, clicked: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| {
                key.document == object.document
                    && key.object == object.name
                    && element_ref::matches_hierarchy(&key.element, clicked)
            })
            .map(|(key, _)| key.element.as_str())
    }

    /// Fügt einen Eintrag (plus Batch koinzidenter Treffer) hinzu.
    ///
    /// Gibt `false` zurück, wenn das Gate den Primäreintrag ablehnt;
    /// dann ändert sich nichts.
    pub fn add_selection(
        &mut self,
        object: &ObjectRef,
        element: &str,
        point: Vec3,
        batch: &[SelectionEntry],
    ) -> bool {
        let key = EntryKey::new(object, element);
        if !self.gate_allows(&key) {
            log::debug!(
                "Gate lehnt Selektion ab: {}.{}.{}",
                key.document,
                key.object,
                key.element
            );
            return false;
        }

        self.insert_entry(
            key,
            SelectionEntry {
                object: object.clone(),
                element: element.to_string(),
                point,
            },
        );
        for entry in batch {
            let key = EntryKey::new(&entry.object, &entry.element);
            if self.gate_allows(&key) {
                self.insert_entry(key, entry.clone());
            }
        }
        true
    }

    fn insert_entry(&mut self, key: EntryKey, entry: SelectionEntry) {
        if self.entries.insert(key.clone(), entry.clone()).is_none() {
            self.changes.push(SelectionChange::AddSelection {
                document: key.document,
                object: key.object,
                element: key.element,
                point: entry.point,
            });
        }
    }

    /// Entfernt einen Eintrag (plus Batch) aus der Selektion.
    pub fn rmv_selection(&mut self, object: &ObjectRef, element: &str, batch: &[SelectionEntry]) {
        self.remove_entry(&EntryKey::new(object, element));
        for entry in batch {
            self.remove_entry(&EntryKey::new(&entry.object, &entry.element));
        }
    }

    fn remove_entry(&mut self, key: &EntryKey) {
        if self.entries.shift_remove(key).is_some() {
            self.changes.push(SelectionChange::RmvSelection {
                document: key.document.clone(),
                object: key.object.clone(),
                element: key.element.clone(),
            });
        }
    }

    /// Leert die Selektion eines Dokuments (oder aller Dokumente).
    pub fn clear_selection(&mut self, document: Option<&str>) {
        let before = self.entries.len();
        match document {
            Some(doc) => self.entries.retain(|key, _| key.document != doc),
            None => self.entries.clear(),
        }
        if before != self.entries.len() || document.is_none() {
            self.changes.push(SelectionChange::ClrSelection {
                document: document.map(str::to_string),
            });
        }
    }

    /// Setzt die Preselektion. Identische Wiederholungen sind kein
    /// Übergang; ein Gate kann ablehnen.
    pub fn set_preselect(
        &mut self,
        object: &ObjectRef,
        element: &str,
        point: Vec3,
    ) -> PreselectResult {
        if let Some(current) = &self.preselect {
            if current.object == *object && current.element == element {
                return PreselectResult::AlreadySet;
            }
        }
        let key = EntryKey::new(object, element);
        if !self.gate_allows(&key) {
            return PreselectResult::Rejected;
        }

        self.preselect = Some(PreselectEntry {
            object: object.clone(),
            element: element.to_string(),
            point,
        });
        self.changes.push(SelectionChange::SetPreselect {
            document: object.document.clone(),
            object: object.name.clone(),
            element: element.to_string(),
            point,
        });
        PreselectResult::Accepted
    }

    /// Hebt die Preselektion auf (Hover-Exit).
    pub fn rmv_preselect(&mut self) {
        if self.preselect.take().is_some() {
            self.changes.push(SelectionChange::RmvPreselect);
        }
    }
}
