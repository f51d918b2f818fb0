// src/noyau/format.rs
//
// Affichage d’un résultat flottant sur l’écran de la calculatrice :
// - entier => sans ".0"          (4.0 -> "4")
// - -0 => "0"
// - très grand / très petit => notation exponentielle ("1e+21", "1e-7")
// - non finis => "Infinity", "-Infinity", "NaN" (mode IEEE seulement)

/// Seuils de bascule vers la notation exponentielle.
const EXPO_HAUT: f64 = 1e21;
const EXPO_BAS: f64 = 1e-6;

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if !(EXPO_BAS..EXPO_HAUT).contains(&a) {
        return format_expo(v);
    }

    format!("{v}")
}

/// `{:e}` donne "1e21" ; on ajoute le signe explicite de l’exposant positif.
fn format_expo(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, expo)) if !expo.starts_with('-') => format!("{mantisse}e+{expo}"),
        _ => s,
    }
}
