//! Built-in furniture catalog

use shared::FurnitureItem;

use crate::i18n::t;

/// The built-in catalog. Dimensions are (width, height, depth) in meters;
/// names follow the active UI language.
pub fn default_catalog() -> Vec<FurnitureItem> {
    vec![
        item("bed", t("furn.bed"), [1.6, 0.45, 2.0], "#8d6e63"),
        item("sofa", t("furn.sofa"), [2.0, 0.8, 0.9], "#5c6bc0"),
        item("table", t("furn.table"), [1.4, 0.75, 0.8], "#a1887f"),
        item("chair", t("furn.chair"), [0.45, 0.9, 0.45], "#90a4ae"),
        item("wardrobe", t("furn.wardrobe"), [1.2, 2.0, 0.6], "#795548"),
        item("shelf", t("furn.shelf"), [0.8, 1.8, 0.3], "#bcaaa4"),
    ]
}

/// Catalog entries whose name matches the search term (case-insensitive).
pub fn filtered_catalog(search: &str) -> Vec<FurnitureItem> {
    let term = search.to_lowercase();
    default_catalog()
        .into_iter()
        .filter(|item| item.name.to_lowercase().contains(&term))
        .collect()
}

fn item(id: &str, name: &str, dimensions: [f64; 3], color: &str) -> FurnitureItem {
    FurnitureItem {
        id: id.to_string(),
        name: name.to_string(),
        dimensions,
        color: color.to_string(),
    }
}
