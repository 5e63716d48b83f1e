// src/noyau/options.rs

/// Profondeur d’imbrication des parenthèses acceptée par défaut.
pub const PROFONDEUR_DEFAUT: usize = 256;

/// Réglages du parseur.
///
/// La pile de cadres est explicite (pas de récursion), mais on borne quand même
/// l’imbrication : une entrée hostile ne doit pas faire grossir la mémoire sans limite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    pub profondeur_max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_DEFAUT,
        }
    }
}

impl Options {
    pub fn avec_profondeur_max(mut self, profondeur_max: usize) -> Self {
        self.profondeur_max = profondeur_max;
        self
    }
}
