//! UI-seitiger Zustand: Statuszeile und Redraw-Anforderung.
//!
//! Die Shell liest hier nur; welcher Widget-Layer die Statuszeile
//! darstellt, ist nicht Sache des Selektionskerns.

/// Zustand für die UI-Shell.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktuelle Statuszeilen-Meldung ("Preselected: …" / "Selected: …")
    pub status_message: Option<String>,
    /// Ob ein Redraw des Viewports angefordert wurde
    pub redraw_requested: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fordert einen Redraw an (entspricht `touch()` am Szenenwurzel-Node).
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Konsumiert die Redraw-Anforderung (von der Shell pro Frame gerufen).
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
