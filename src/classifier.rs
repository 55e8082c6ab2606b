//! Keyword-driven expense classification.
//!
//! The table is data, not logic: an ordered list of categories with their
//! lowercase trigger substrings. Matching is first-match-wins over the table
//! order, so a label containing keywords from two categories resolves to the
//! earlier entry. [`Category::Otros`] never appears in the table; it is the
//! fallback when nothing matches.

use crate::domain::Category;

/// Static trigger table. Order is significant.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Comida,
        &[
            "restaurante",
            "tacos",
            "comida",
            "snack",
            "bebida",
            "cafetería",
            "almuerzo",
            "cena",
            "desayuno",
        ],
    ),
    (
        Category::Entretenimiento,
        &[
            "cine", "netflix", "spotify", "juego", "bar", "concierto", "fiesta",
        ],
    ),
    (
        Category::Transporte,
        &[
            "gasolina",
            "uber",
            "camión",
            "metro",
            "estacionamiento",
            "taxi",
            "pasaje",
        ],
    ),
    (
        Category::Compras,
        &[
            "ropa",
            "super",
            "amazon",
            "mercado",
            "zapatos",
            "maquillaje",
            "tienda",
        ],
    ),
    (
        Category::Salud,
        &[
            "farmacia",
            "doctor",
            "gimnasio",
            "dentista",
            "medicina",
            "hospital",
        ],
    ),
    (
        Category::Educacion,
        &["curso", "libro", "universidad", "escuela", "clase"],
    ),
];

/// Maps a free-text label to its general category.
///
/// Pure and deterministic: lower-cases the label, then returns the category of
/// the first table entry with a keyword contained in it.
pub fn classify(label: &str) -> Category {
    let needle = label.to_lowercase();
    for (category, keywords) in KEYWORD_TABLE {
        if keywords.iter().any(|keyword| needle.contains(keyword)) {
            return *category;
        }
    }
    Category::Otros
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_by_lowercased_substring() {
        assert_eq!(classify("Restaurante"), Category::Comida);
        assert_eq!(classify("pago NETFLIX mensual"), Category::Entretenimiento);
        assert_eq!(classify("Cafetería del centro"), Category::Comida);
        assert_eq!(classify("libros de texto"), Category::Educacion);
    }

    #[test]
    fn first_table_entry_wins_on_multi_category_labels() {
        // "cine" (Entretenimiento) sits earlier in the table than "uber"
        // (Transporte).
        assert_eq!(classify("Cine Uber"), Category::Entretenimiento);
        // "comida" beats "super" for the same reason.
        assert_eq!(classify("comida del super"), Category::Comida);
    }

    #[test]
    fn unmatched_labels_fall_back_to_otros() {
        assert_eq!(classify("xyz-unmatched"), Category::Otros);
        assert_eq!(classify(""), Category::Otros);
    }

    #[test]
    fn classification_is_deterministic() {
        for label in ["tacos al pastor", "gasolina", "reembolso"] {
            assert_eq!(classify(label), classify(label));
        }
    }
}
