use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{filter_catalog, CartItem, Searchable};
use crate::models::catalog::ALL_CATEGORIES;
use crate::viewmodels::cart_viewmodel::CartViewModel;

/// Pantallas de catálogo (análisis, procedimientos, medicamentos):
/// búsqueda + categoría + agregar al carrito
pub struct CatalogViewModel<I> {
    items: Vec<I>,
    query: Rc<RefCell<String>>,
    category: Rc<RefCell<String>>,
    cart: CartViewModel,
}

impl<I> CatalogViewModel<I>
where
    I: Searchable + Clone,
    for<'a> &'a I: Into<CartItem>,
{
    pub fn new(items: Vec<I>, cart: CartViewModel) -> Self {
        Self {
            items,
            query: Rc::new(RefCell::new(String::new())),
            category: Rc::new(RefCell::new(ALL_CATEGORIES.to_string())),
            cart,
        }
    }

    pub fn set_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
    }

    pub fn set_category(&self, category: &str) {
        *self.category.borrow_mut() = category.to_string();
    }

    /// Categorías distintas en orden de aparición, precedidas de `all`
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in &self.items {
            if let Some(category) = item.category() {
                let category = category.to_lowercase();
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        categories
    }

    pub fn visible(&self) -> Vec<I> {
        let query = self.query.borrow();
        let category = self.category.borrow();
        filter_catalog(&self.items, &query, Some(category.as_str()))
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    /// Agrega al carrito el primer item que cumple `matches`;
    /// false si no hay ninguno o el carrito lo rechaza
    pub fn add_to_cart<F>(&self, matches: F) -> bool
    where
        F: Fn(&I) -> bool,
    {
        match self.items.iter().find(|&item| matches(item)) {
            Some(item) => self.cart.add(item.into()),
            None => false,
        }
    }
}
