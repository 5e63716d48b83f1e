//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, valeur, erreur, démarche, options)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la profondeur d’imbrication réglable.

use calculatrice_rpn::noyau::operateurs::noms_fonctions;
use calculatrice_rpn::noyau::options::PROFONDEUR_DEFAUT;
use calculatrice_rpn::Options;

/// Garde-fou : borne haute réglable depuis l’UI.
pub const PROFONDEUR_MAX_UI: usize = 4096;

/// Façon d’insérer un fragment dans l’entrée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// Collé tel quel (chiffres, `.`, `(`, `sin(`).
    Collee,
    /// `)` : espaces de fin retirés avant.
    Fermante,
    /// Opérateur entouré d’un espace.
    Operateur,
}

/// Démarche affichée : jetons lus + suite postfixée.
#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: String,     // résultat f64 formaté
    pub erreur: String,     // message d’erreur (si parsing/éval échoue)
    pub valeur_dispo: bool, // false si erreur / rien évalué

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub options: Options,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: String::new(),
            erreur: String::new(),
            valeur_dispo: false,
            demarche: Demarche::default(),
            options: Options::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + options par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.options = Options::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer valeur + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur.clear();
        self.erreur.clear();
        self.valeur_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// La démarche déjà calculée (ex: jetons) est conservée : elle aide à voir où ça casse.
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.valeur.clear();
        self.valeur_dispo = false;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (valeur + démarche).
    pub fn set_resultats(&mut self, valeur: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = valeur.into();
        self.valeur_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite la profondeur d’imbrication acceptée.
    pub fn set_profondeur_max(&mut self, profondeur: usize) {
        self.options.profondeur_max = profondeur.clamp(1, PROFONDEUR_MAX_UI);
        self.focus_entree = true;
    }

    pub fn profondeur_est_defaut(&self) -> bool {
        self.options.profondeur_max == PROFONDEUR_DEFAUT
    }

    /* ------------------------ Édition de l’entrée ------------------------ */

    pub fn inserer(&mut self, fragment: &str, mode: Insertion) {
        match mode {
            Insertion::Collee => self.entree.push_str(fragment),
            Insertion::Fermante => {
                self.retirer_espaces_fin();
                self.entree.push_str(fragment);
            }
            Insertion::Operateur => {
                self.retirer_espaces_fin();
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(fragment);
                self.entree.push(' ');
            }
        }
        self.focus_entree = true;
    }

    /// Efface le dernier symbole ; un `nom(` de fonction part d’un bloc.
    pub fn effacer_symbole(&mut self) {
        self.retirer_espaces_fin();

        // les noms longs d’abord ("arcsin(" avant "sin(")
        let bloc = noms_fonctions()
            .map(|f| format!("{f}("))
            .filter(|m| self.entree.ends_with(m.as_str()))
            .map(|m| m.chars().count())
            .max()
            .unwrap_or(1);

        for _ in 0..bloc {
            self.entree.pop();
        }
        self.retirer_espaces_fin();
        self.focus_entree = true;
    }

    fn retirer_espaces_fin(&mut self) {
        let n = self.entree.trim_end_matches(' ').len();
        self.entree.truncate(n);
    }
}
