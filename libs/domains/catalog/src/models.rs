use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Opaque identifier of a stored vendor or product.
///
/// Always a string outside the store adapter; the MongoDB repository maps
/// ObjectId-shaped values to and from native ObjectIds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "65f1c0ffee0000000000000a")]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

pub const DEFAULT_RATING: f64 = 4.5;

fn default_rating() -> f64 {
    DEFAULT_RATING
}

fn default_true() -> bool {
    true
}

/// Stored `null` reads the same as a missing rating.
fn rating_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_RATING))
}

fn true_unless_set<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

/// Vendor entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vendor {
    pub id: EntityId,
    #[schema(example = "TechNest")]
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// 0 to 5
    #[serde(default = "default_rating", deserialize_with = "rating_or_default")]
    #[schema(example = 4.7)]
    pub rating: f64,
    #[serde(default = "default_true", deserialize_with = "true_unless_set")]
    pub verified: bool,
    /// Logo URL
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: EntityId,
    #[schema(example = "Wireless Noise-Canceling Headphones")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(example = 199.99)]
    pub price: f64,
    #[schema(example = "Electronics")]
    pub category: String,
    #[serde(default = "default_true", deserialize_with = "true_unless_set")]
    pub in_stock: bool,
    /// Image URLs
    #[serde(default)]
    pub images: Option<Vec<String>>,
    /// Vendor reference; may point at a vendor that no longer exists
    #[serde(default)]
    pub vendor_id: Option<EntityId>,
}

/// DTO for creating a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewVendor {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub bio: Option<String>,
    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(default = "default_true")]
    pub verified: bool,
    #[validate(url)]
    pub logo: Option<String>,
    pub categories: Option<Vec<String>>,
    pub location: Option<String>,
}

impl NewVendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: None,
            rating: DEFAULT_RATING,
            verified: true,
            logo: None,
            categories: None,
            location: None,
        }
    }

    /// Record as it reads back from a store that assigned `id`.
    pub fn into_vendor(self, id: EntityId) -> Vendor {
        Vendor {
            id,
            name: self.name,
            bio: self.bio,
            rating: self.rating,
            verified: self.verified,
            logo: self.logo,
            categories: self.categories,
            location: self.location,
        }
    }
}

fn validate_price(price: f64) -> Result<(), validator::ValidationError> {
    if !price.is_finite() {
        return Err(validator::ValidationError::new("not_finite"));
    }
    Ok(())
}

/// DTO for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0), custom(function = "validate_price"))]
    pub price: f64,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    pub images: Option<Vec<String>>,
    pub vendor_id: Option<EntityId>,
}

impl NewProduct {
    pub fn new(title: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            price,
            category: category.into(),
            in_stock: true,
            images: None,
            vendor_id: None,
        }
    }

    pub fn into_product(self, id: EntityId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            in_stock: self.in_stock,
            images: self.images,
            vendor_id: self.vendor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_serializes_as_plain_string() {
        let id = EntityId::new("65f1c0ffee0000000000000a");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("65f1c0ffee0000000000000a"));
    }

    #[test]
    fn test_vendor_defaults_when_fields_missing() {
        let vendor: Vendor = serde_json::from_value(json!({
            "id": "v1",
            "name": "Crafted Co."
        }))
        .unwrap();

        assert_eq!(vendor.rating, DEFAULT_RATING);
        assert!(vendor.verified);
        assert_eq!(vendor.categories, None);
    }

    #[test]
    fn test_null_flags_and_rating_read_as_defaults() {
        let vendor: Vendor = serde_json::from_value(json!({
            "id": "v1",
            "name": "Crafted Co.",
            "rating": null,
            "verified": null
        }))
        .unwrap();
        assert_eq!(vendor.rating, DEFAULT_RATING);
        assert!(vendor.verified);

        let unverified: Vendor = serde_json::from_value(json!({
            "id": "v2",
            "name": "Crafted Co.",
            "verified": false
        }))
        .unwrap();
        assert!(!unverified.verified);
    }

    #[test]
    fn test_product_requires_price_and_category() {
        let missing_price = serde_json::from_value::<Product>(json!({
            "id": "p1",
            "title": "Silk Scarf",
            "category": "Accessories"
        }));
        assert!(missing_price.is_err());
    }

    #[test]
    fn test_product_serializes_absent_optionals_as_null() {
        let product = NewProduct::new("Silk Scarf", 34.0, "Accessories").into_product("p1".into());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["vendor_id"], json!(null));
        assert_eq!(value["in_stock"], json!(true));
    }

    #[test]
    fn test_new_vendor_validation() {
        assert!(NewVendor::new("TechNest").validate().is_ok());

        let mut blank = NewVendor::new("");
        blank.rating = 5.5;
        let errors = blank.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("rating"));

        let mut bad_logo = NewVendor::new("TechNest");
        bad_logo.logo = Some("not a url".into());
        assert!(bad_logo.validate().is_err());
    }

    #[test]
    fn test_new_product_validation() {
        assert!(NewProduct::new("Mug", 0.0, "Home").validate().is_ok());
        assert!(NewProduct::new("Mug", -0.01, "Home").validate().is_err());
        assert!(NewProduct::new("", 1.0, "Home").validate().is_err());
        assert!(NewProduct::new("Mug", 1.0, "").validate().is_err());
        assert!(NewProduct::new("Mug", f64::NAN, "Home").validate().is_err());
    }
}
