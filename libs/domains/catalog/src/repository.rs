use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{EntityId, NewProduct, NewVendor, Product, Vendor};
use crate::query::{ProductFilter, VendorFilter};

/// Data access for the `vendor` and `product` collections.
///
/// Listings return records in a stable order (insertion order) so identical
/// requests page identically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Count vendors matching a filter
    async fn count_vendors(&self, filter: &VendorFilter) -> CatalogResult<u64>;

    /// Vendors matching a filter, skipping `skip` and returning at most `limit`
    async fn find_vendors(
        &self,
        filter: &VendorFilter,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Vendor>>;

    async fn get_vendor(&self, id: &EntityId) -> CatalogResult<Option<Vendor>>;

    /// Insert vendors, returning their new ids in input order
    async fn insert_vendors(&self, vendors: Vec<NewVendor>) -> CatalogResult<Vec<EntityId>>;

    async fn count_products(&self, filter: &ProductFilter) -> CatalogResult<u64>;

    async fn find_products(
        &self,
        filter: &ProductFilter,
        skip: u64,
        limit: u64,
    ) -> CatalogResult<Vec<Product>>;

    async fn get_product(&self, id: &EntityId) -> CatalogResult<Option<Product>>;

    /// Insert products, returning their new ids in input order
    async fn insert_products(&self, products: Vec<NewProduct>) -> CatalogResult<Vec<EntityId>>;

    /// Distinct string `category` values across all products, sorted
    async fn distinct_categories(&self) -> CatalogResult<Vec<String>>;

    /// Names of the collections in the backing database
    async fn collection_names(&self) -> CatalogResult<Vec<String>>;

    /// Round trip to the store
    async fn ping(&self) -> CatalogResult<()>;
}
