//! Listing parameters and the filters built from them.
//!
//! Every filter criterion is optional; supplied criteria are combined with
//! AND. A filter renders both to a MongoDB filter document and to an
//! in-process predicate over decoded records, and the two agree. Flags that
//! decode to `true` when missing or null (`in_stock`, `verified`) are matched
//! with `$ne: false` so stored documents lacking them select the same way.

use mongodb::bson::{Bson, Document, doc};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

use crate::models::{Product, Vendor};
use crate::pagination::{DEFAULT_PAGE, Pagination};

pub const DEFAULT_PRODUCT_LIMIT: u64 = 12;
pub const DEFAULT_VENDOR_LIMIT: u64 = 20;

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_product_limit() -> u64 {
    DEFAULT_PRODUCT_LIMIT
}

fn default_vendor_limit() -> u64 {
    DEFAULT_VENDOR_LIMIT
}

fn default_verified() -> bool {
    true
}

/// `NaN` slips through range checks since every comparison with it is false.
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("not_finite"));
    }
    Ok(())
}

/// Store filter on a flag whose missing value reads back as `true`.
fn flag_condition(value: bool) -> Bson {
    if value {
        doc! { "$ne": false }.into()
    } else {
        false.into()
    }
}

/// Query parameters of `GET /api/products`
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page: u64,

    #[serde(default = "default_product_limit")]
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, default = 12)]
    pub limit: u64,

    /// Exact category match
    pub category: Option<String>,

    /// Case-insensitive text matched against title or description
    pub q: Option<String>,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[param(minimum = 0)]
    pub min_price: Option<f64>,

    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[param(minimum = 0)]
    pub max_price: Option<f64>,

    pub in_stock: Option<bool>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PRODUCT_LIMIT,
            category: None,
            q: None,
            min_price: None,
            max_price: None,
            in_stock: None,
        }
    }
}

impl ProductQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: non_blank(&self.category),
            search: non_blank(&self.q),
            min_price: self.min_price,
            max_price: self.max_price,
            in_stock: self.in_stock,
        }
    }
}

/// Query parameters of `GET /api/vendors`
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VendorQuery {
    /// Only vendors with this verification flag; defaults to verified vendors
    #[serde(default = "default_verified")]
    #[param(default = true)]
    pub verified: bool,

    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page: u64,

    #[serde(default = "default_vendor_limit")]
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, default = 20)]
    pub limit: u64,
}

impl Default for VendorQuery {
    fn default() -> Self {
        Self {
            verified: true,
            page: DEFAULT_PAGE,
            limit: DEFAULT_VENDOR_LIMIT,
        }
    }
}

impl VendorQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn filter(&self) -> VendorFilter {
        VendorFilter {
            verified: Some(self.verified),
        }
    }
}

/// Empty strings are treated as "not supplied".
fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Product selection criteria. The default matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    /// Literal substring, matched case-insensitively
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub in_stock: Option<bool>,
}

impl ProductFilter {
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {};

        if let Some(ref category) = self.category {
            filter.insert("category", category.as_str());
        }

        if let Some(in_stock) = self.in_stock {
            filter.insert("in_stock", flag_condition(in_stock));
        }

        if let Some(ref search) = self.search {
            let pattern = regex::escape(search);
            filter.insert(
                "$or",
                vec![
                    doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                    doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
                ],
            );
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let mut price = doc! {};
            if let Some(min) = self.min_price {
                price.insert("$gte", min);
            }
            if let Some(max) = self.max_price {
                price.insert("$lte", max);
            }
            filter.insert("price", price);
        }

        filter
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            let needle = search.to_lowercase();
            let in_title = product.title.to_lowercase().contains(&needle);
            let in_description = product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }

        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }

        true
    }
}

/// Vendor selection criteria. The default matches every vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFilter {
    pub verified: Option<bool>,
}

impl VendorFilter {
    pub fn to_document(&self) -> Document {
        match self.verified {
            Some(verified) => doc! { "verified": flag_condition(verified) },
            None => doc! {},
        }
    }

    pub fn matches(&self, vendor: &Vendor) -> bool {
        self.verified.is_none_or(|verified| vendor.verified == verified)
    }
}
