//! Demo catalog inserted by `POST /api/seed`.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{EntityId, NewProduct, NewVendor};

const AVATAR_BASE: &str = "https://i.pravatar.cc/100";
const IMAGE_BASE: &str = "https://images.unsplash.com";

fn vendor(
    name: &str,
    bio: &str,
    rating: f64,
    avatar: u32,
    categories: &[&str],
    location: &str,
) -> NewVendor {
    NewVendor {
        bio: Some(bio.to_string()),
        rating,
        verified: true,
        logo: Some(format!("{AVATAR_BASE}?img={avatar}")),
        categories: Some(categories.iter().map(|c| c.to_string()).collect()),
        location: Some(location.to_string()),
        ..NewVendor::new(name)
    }
}

pub fn demo_vendors() -> Vec<NewVendor> {
    vec![
        vendor(
            "Urban Outfitters",
            "Trendy apparel and accessories.",
            4.6,
            12,
            &["Fashion", "Accessories"],
            "NY, USA",
        ),
        vendor(
            "GreenLeaf Organics",
            "Organic groceries and produce.",
            4.8,
            32,
            &["Groceries"],
            "CA, USA",
        ),
        vendor(
            "TechNest",
            "Latest gadgets and electronics.",
            4.7,
            5,
            &["Electronics"],
            "Remote",
        ),
        vendor(
            "Crafted Co.",
            "Handmade goods from local artisans.",
            4.9,
            20,
            &["Home", "Gifts"],
            "TX, USA",
        ),
    ]
}

/// Demo products. Each references the vendor at a fixed position in
/// `vendor_ids`; a missing position leaves the product without a vendor.
pub fn demo_products(vendor_ids: &[EntityId]) -> Vec<NewProduct> {
    let product = |title: &str,
                   description: &str,
                   price: f64,
                   category: &str,
                   photo: &str,
                   vendor: usize| NewProduct {
        description: Some(description.to_string()),
        images: Some(vec![format!("{IMAGE_BASE}/{photo}?w=800")]),
        vendor_id: vendor_ids.get(vendor).cloned(),
        ..NewProduct::new(title, price, category)
    };

    vec![
        product(
            "Vintage Denim Jacket",
            "Classic fit, durable fabric.",
            79.99,
            "Fashion",
            "photo-1516826957135-700dedea698c",
            0,
        ),
        product(
            "Organic Avocado Pack",
            "Fresh and creamy.",
            9.99,
            "Groceries",
            "photo-1550258987-190a2d41a8ba",
            1,
        ),
        product(
            "Wireless Noise-Canceling Headphones",
            "Immersive sound.",
            199.99,
            "Electronics",
            "photo-1518443871564-5acaed0c972e",
            2,
        ),
        product(
            "Handmade Ceramic Mug",
            "Perfect for your morning coffee.",
            24.5,
            "Home",
            "photo-1516826957135-700dedea698c",
            3,
        ),
        product(
            "Silk Scarf",
            "Soft and elegant.",
            34.0,
            "Accessories",
            "photo-1520975916090-3105956dac38",
            0,
        ),
    ]
}

/// Result of `POST /api/seed`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "status")]
pub enum SeedOutcome {
    /// Collection counts after seeding
    #[serde(rename = "ok")]
    Seeded { vendors: u64, products: u64 },
    /// No store is configured
    #[serde(rename = "error")]
    Unavailable { message: String },
}

impl SeedOutcome {
    pub fn unavailable() -> Self {
        Self::Unavailable {
            message: "Database not configured".to_string(),
        }
    }
}
