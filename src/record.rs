use serde::Serialize;

/// One CSV row per purchasable variant. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantRecord {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "SKU")]
    pub sku: String,
    #[serde(rename = "Variant Title")]
    pub variant_title: String,
    #[serde(rename = "Flavor")]
    pub flavor: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Sale Price")]
    pub sale_price: String,
    #[serde(rename = "Original Price")]
    pub original_price: String,
    #[serde(rename = "In Stock")]
    pub in_stock: String,
    #[serde(rename = "Product URL")]
    pub product_url: String,
}
