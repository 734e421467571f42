use serde::{Deserialize, Serialize};
use crate::models::catalog::{LabTest, Medicine, Procedure};

// ============================================================================
// CARRITO - Items, cantidades y totales
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Test,
    Procedure,
    Medicine,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Test => "Lab Test",
            ItemKind::Procedure => "Medical Procedure",
            ItemKind::Medicine => "Medicine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub price: u64,
    pub quantity: u32,
}

impl CartItem {
    /// Precio x cantidad; satura en vez de desbordar
    pub fn line_total(&self) -> u64 {
        self.checked_line_total().unwrap_or(u64::MAX)
    }

    pub fn checked_line_total(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }
}

impl From<&LabTest> for CartItem {
    fn from(test: &LabTest) -> Self {
        Self {
            id: test.id.clone(),
            name: test.name.clone(),
            kind: ItemKind::Test,
            price: test.price,
            quantity: 1,
        }
    }
}

impl From<&Procedure> for CartItem {
    fn from(procedure: &Procedure) -> Self {
        Self {
            id: procedure.id.clone(),
            name: procedure.name.clone(),
            kind: ItemKind::Procedure,
            price: procedure.price,
            quantity: 1,
        }
    }
}

impl From<&Medicine> for CartItem {
    fn from(medicine: &Medicine) -> Self {
        Self {
            id: medicine.id.clone(),
            name: medicine.name.clone(),
            kind: ItemKind::Medicine,
            price: medicine.price,
            quantity: 1,
        }
    }
}

/// Tarifa de envío fija + impuesto porcentual sobre el subtotal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub delivery_fee: u64,
    pub tax_rate_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub subtotal: u64,
    pub delivery_fee: u64,
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Agrega un item; si el id ya existe suma la cantidad.
    /// Devuelve false si el cambio se rechaza (cantidad 0 o totales fuera de rango).
    pub fn add(&mut self, item: CartItem) -> bool {
        if item.quantity == 0 {
            return false;
        }
        let position = self.items.iter().position(|i| i.id == item.id);
        let (price, quantity) = match position {
            Some(index) => {
                let existing = &self.items[index];
                let Some(quantity) = existing.quantity.checked_add(item.quantity) else {
                    return reject(&item.id);
                };
                (existing.price, quantity)
            }
            None => (item.price, item.quantity),
        };
        if self.subtotal_with(&item.id, price, quantity).is_none() {
            return reject(&item.id);
        }

        match position {
            Some(index) => self.items[index].quantity = quantity,
            None => self.items.push(item),
        }
        true
    }

    /// Devuelve true si el item existía
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Cantidades menores a 1 se ignoran (el botón "-" no baja de 1)
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        let Some(index) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        if self.subtotal_with(id, self.items[index].price, quantity).is_none() {
            return reject(id);
        }
        self.items[index].quantity = quantity;
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn subtotal(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Subtotal si la línea `id` pasara a `price x quantity`; None si no cabe en u64
    fn subtotal_with(&self, id: &str, price: u64, quantity: u32) -> Option<u64> {
        let changed = price.checked_mul(u64::from(quantity))?;
        self.items
            .iter()
            .filter(|item| item.id != id)
            .try_fold(changed, |acc, item| acc.checked_add(item.checked_line_total()?))
    }

    /// Resumen de totales; None con el carrito vacío
    pub fn summary(&self, pricing: &Pricing) -> Option<CartSummary> {
        if self.is_empty() {
            return None;
        }
        let subtotal = self.subtotal();
        let tax = subtotal as f64 * pricing.tax_rate_percent / 100.0;
        Some(CartSummary {
            subtotal,
            delivery_fee: pricing.delivery_fee,
            tax,
            total: subtotal as f64 + pricing.delivery_fee as f64 + tax,
        })
    }
}

fn reject(id: &str) -> bool {
    log::warn!("⚠️ Carrito: cambio en {} rechazado, total fuera de rango", id);
    false
}
