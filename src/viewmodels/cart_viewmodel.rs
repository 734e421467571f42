// ============================================================================
// CART VIEWMODEL - Carrito local (sin backend)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Cart, CartItem, Pricing};
use crate::utils::money::format_price;

/// Línea del carrito lista para mostrar
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub kind_label: &'static str,
    pub quantity: u32,
    pub line_total: String,
}

/// Totales formateados (`PKR 1,234`)
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummaryView {
    pub subtotal: String,
    pub delivery_fee: String,
    pub tax: String,
    pub total: String,
}

#[derive(Clone)]
pub struct CartViewModel {
    cart: Rc<RefCell<Cart>>,
    pricing: Pricing,
}

impl CartViewModel {
    pub fn new(pricing: Pricing) -> Self {
        Self::with_cart(Cart::new(), pricing)
    }

    pub fn with_cart(cart: Cart, pricing: Pricing) -> Self {
        Self {
            cart: Rc::new(RefCell::new(cart)),
            pricing,
        }
    }

    pub fn cart(&self) -> Cart {
        self.cart.borrow().clone()
    }

    /// Número de líneas (badge del icono de carrito)
    pub fn count(&self) -> usize {
        self.cart.borrow().len()
    }

    /// false si el carrito rechazó el item
    pub fn add(&self, item: CartItem) -> bool {
        let label = format!("{} x{}", item.name, item.quantity);
        let added = self.cart.borrow_mut().add(item);
        if added {
            log::info!("🛒 + {}", label);
        }
        added
    }

    pub fn remove(&self, id: &str) {
        if self.cart.borrow_mut().remove(id) {
            log::info!("🗑️ Item {} eliminado del carrito", id);
        }
    }

    pub fn increment(&self, id: &str) {
        let current = self.quantity_of(id);
        if let Some(quantity) = current.and_then(|q| q.checked_add(1)) {
            self.cart.borrow_mut().update_quantity(id, quantity);
        }
    }

    /// No baja de 1; para quitar el item se usa `remove`
    pub fn decrement(&self, id: &str) {
        let current = self.quantity_of(id);
        if let Some(quantity) = current {
            self.cart.borrow_mut().update_quantity(id, quantity.saturating_sub(1));
        }
    }

    pub fn clear(&self) {
        self.cart.borrow_mut().clear();
    }

    pub fn title(&self) -> String {
        match self.count() {
            0 => "Your cart is empty".to_string(),
            n => format!("Cart Items ({})", n),
        }
    }

    /// El botón de checkout sólo aparece con items
    pub fn can_checkout(&self) -> bool {
        !self.cart.borrow().is_empty()
    }

    pub fn lines(&self) -> Vec<CartLineView> {
        self.cart
            .borrow()
            .items()
            .iter()
            .map(|item| CartLineView {
                id: item.id.clone(),
                name: item.name.clone(),
                kind_label: item.kind.label(),
                quantity: item.quantity,
                line_total: format_price(item.line_total() as f64),
            })
            .collect()
    }

    /// None con el carrito vacío (no se muestra el resumen)
    pub fn summary(&self) -> Option<CartSummaryView> {
        let summary = self.cart.borrow().summary(&self.pricing)?;
        Some(CartSummaryView {
            subtotal: format_price(summary.subtotal as f64),
            delivery_fee: format_price(summary.delivery_fee as f64),
            tax: format_price(summary.tax),
            total: format_price(summary.total),
        })
    }

    fn quantity_of(&self, id: &str) -> Option<u32> {
        self.cart
            .borrow()
            .items()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity)
    }
}
