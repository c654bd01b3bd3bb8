//! In-memory collaborators for tests, demos, and offline development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use teekit_core::{CheckoutError, UploadError};

use crate::payload::CartItem;
use crate::traits::{Cart, ImageUploader, ProductCatalog, UploadFolder};
use crate::types::Product;

/// Uploader that keeps payloads in a map and hands out `mem://` URLs.
#[derive(Debug, Default)]
pub struct MemoryUploader {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MemoryUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Fetches a stored payload by the URL returned from `upload`.
    pub fn get(&self, url: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(url).cloned()
    }
}

#[async_trait]
impl ImageUploader for MemoryUploader {
    async fn upload(
        &self,
        data: Bytes,
        folder: UploadFolder,
        filename_hint: Option<&str>,
    ) -> Result<String, UploadError> {
        if data.is_empty() {
            return Err(UploadError::InvalidPayload {
                reason: "empty payload".to_string(),
            });
        }
        let url = format!(
            "mem://{}/{}-{}",
            folder.as_str(),
            filename_hint.unwrap_or("asset"),
            Uuid::new_v4().simple()
        );
        self.objects.lock().unwrap().insert(url.clone(), data);
        Ok(url)
    }
}

/// Cart that records added items.
#[derive(Debug, Default)]
pub struct MemoryCart {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.items.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl Cart for MemoryCart {
    async fn add(&self, item: CartItem) -> Result<(), CheckoutError> {
        self.items.lock().unwrap().push(item);
        Ok(())
    }
}

/// Catalog backed by a fixed product map.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: HashMap<String, Product>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id.clone(), product);
        self
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn product(&self, product_id: &str) -> Result<Product, CheckoutError> {
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CheckoutError::ProductNotFound {
                id: product_id.to_string(),
            })
    }
}
