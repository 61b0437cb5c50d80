//! Builders for test products.

use rust_decimal::Decimal;

use kickcraft::products::{NewProduct, Product, ProductUpdate};

pub(crate) fn new_product(
    name: &str,
    brand: &str,
    price: u64,
    stock: u64,
    sales: u64,
) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        brand: brand.to_string(),
        category: "Casual".to_string(),
        price,
        discount: Decimal::ZERO,
        stock,
        sales,
    }
}

/// A full-record update resubmitting the product's current field values.
pub(crate) fn update_from(product: &Product) -> ProductUpdate {
    ProductUpdate {
        name: product.name.clone(),
        brand: product.brand.clone(),
        category: product.category.clone(),
        price: product.price,
        discount: product.discount,
        stock: product.stock,
        sales: product.sales,
    }
}
