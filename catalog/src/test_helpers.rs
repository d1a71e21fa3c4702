//! Fixtures and an in-memory backend shared by unit tests.

use std::sync::Mutex;

use crate::backend::{BackendError, ProductBackend};
use crate::product::{Product, ProductInput};

pub fn product(id: &str, name: &str, category_id: &str, price: f64, stock: u32) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        description: "Produto de teste".to_owned(),
        price,
        category_id: category_id.to_owned(),
        stock_quantity: stock,
        created_at: None,
    }
}

pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("1", "Teclado Mecânico RGB", "perifericos", 350.0, 15),
        product("2", "Mouse Gamer", "perifericos", 120.0, 5),
        product("3", "Monitor 27", "monitores", 1299.9, 12),
        product("4", "Cabo HDMI", "cabos", 25.0, 0),
    ]
}

/// A recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List,
    Create(ProductInput),
    Update(String, ProductInput),
    Delete(String),
}

/// In-memory product store that behaves like the REST backend.
pub struct MockBackend {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<Call>>,
    fail_next: Mutex<Option<BackendError>>,
    next_id: Mutex<u32>,
}

impl MockBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            next_id: Mutex::new(100),
        }
    }

    /// Make the next call fail with `err`.
    pub fn fail_next(&self, err: BackendError) {
        *self.fail_next.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    /// Replace the stored list, as another client would.
    pub fn replace(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = products;
    }

    fn record(&self, call: Call) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_next.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ProductBackend for MockBackend {
    async fn list(&self) -> Result<Vec<Product>, BackendError> {
        self.record(Call::List)?;
        Ok(self.stored())
    }

    async fn create(&self, input: &ProductInput) -> Result<Option<Product>, BackendError> {
        self.record(Call::Create(input.clone()))?;
        let mut next_id = self.next_id.lock().unwrap();
        let created = Product {
            id: next_id.to_string(),
            name: input.name().to_owned(),
            description: input.description().to_owned(),
            price: input.price(),
            category_id: input.category_id().to_owned(),
            stock_quantity: input.stock_quantity(),
            created_at: None,
        };
        *next_id += 1;
        self.products.lock().unwrap().push(created.clone());
        Ok(Some(created))
    }

    async fn update(&self, id: &str, input: &ProductInput) -> Result<(), BackendError> {
        self.record(Call::Update(id.to_owned(), input.clone()))?;
        let mut products = self.products.lock().unwrap();
        let Some(existing) = products.iter_mut().find(|p| p.id == id) else {
            return Err(BackendError::Rejected { status: 404, body: format!("product {id} not found") });
        };
        existing.name = input.name().to_owned();
        existing.description = input.description().to_owned();
        existing.price = input.price();
        existing.category_id = input.category_id().to_owned();
        existing.stock_quantity = input.stock_quantity();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.record(Call::Delete(id.to_owned()))?;
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(BackendError::Rejected { status: 404, body: format!("product {id} not found") });
        }
        Ok(())
    }
}
