use serde::{Deserialize, Serialize};

// ============================================================================
// CATÁLOGO - Doctores, análisis, procedimientos, medicamentos
// ============================================================================

/// Categoría que coincide con todo
pub const ALL_CATEGORIES: &str = "all";

/// Elemento filtrable por texto y categoría
pub trait Searchable {
    /// Campos sobre los que se busca el texto
    fn search_fields(&self) -> Vec<&str>;

    /// Categoría del elemento (None = sin categoría)
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Filtra por subcadena (sin distinguir mayúsculas) y categoría opcional.
/// Query vacía y categoría `all` devuelven todo.
pub fn filter_catalog<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    let category = category
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && c != ALL_CATEGORIES);

    items
        .iter()
        .filter(|item| match &category {
            Some(wanted) => item
                .category()
                .map_or(false, |c| c.to_lowercase() == *wanted),
            None => true,
        })
        .filter(|item| {
            query.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

/// Doctor de `GET /doctor/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub fee: Option<u64>,
}

impl Searchable for Doctor {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.specialty]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.specialty)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: u64,
}

impl Searchable for LabTest {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: u64,
}

impl Searchable for Procedure {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: u64,
    /// Precio antes del descuento
    #[serde(default)]
    pub original_price: Option<u64>,
}

impl Medicine {
    /// Porcentaje de descuento redondeado, si hay precio original mayor
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price.filter(|p| *p > self.price)?;
        let off = (original - self.price) as f64 / original as f64 * 100.0;
        Some(off.round() as u32)
    }
}

// Los medicamentos sólo se buscan por nombre
impl Searchable for Medicine {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tests() -> Vec<LabTest> {
        vec![
            LabTest {
                id: "1".into(),
                name: "Complete Blood Count".into(),
                description: "Measures red and white cells".into(),
                category: "Blood".into(),
                price: 1200,
            },
            LabTest {
                id: "2".into(),
                name: "Lipid Profile".into(),
                description: "Cholesterol and triglycerides".into(),
                category: "Heart".into(),
                price: 2500,
            },
        ]
    }

    #[test]
    fn query_matches_name_or_description_case_insensitive() {
        let items = tests();
        let by_name = filter_catalog(&items, "blood", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "1");

        let by_description = filter_catalog(&items, "CHOLESTEROL", None);
        assert_eq!(by_description[0].id, "2");
    }

    #[test]
    fn all_category_and_empty_query_return_everything() {
        let items = tests();
        assert_eq!(filter_catalog(&items, "  ", Some("all")).len(), 2);
        assert_eq!(filter_catalog(&items, "", Some("heart")).len(), 1);
    }

    #[test]
    fn medicine_search_ignores_category_text() {
        let meds = vec![Medicine {
            id: "m1".into(),
            name: "Panadol Extra".into(),
            category: "Pain Relief".into(),
            price: 120,
            original_price: Some(150),
        }];
        assert!(filter_catalog(&meds, "relief", None).is_empty());
        assert_eq!(meds[0].discount_percent(), Some(20));
    }
}
