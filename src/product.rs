use std::sync::LazyLock;

use anyhow::{Context, Result};
use scraper::{Html, Selector};
use serde::Deserialize;

use crate::normalize;
use crate::record::VariantRecord;

const DATA_MARKER: &str = "const masterData = ";

static PRODUCT_SCRIPT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"script[data-track="productVisit"]"#).unwrap());

// ── Embedded masterData shapes ──

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MasterData {
    #[serde(default)]
    page_title: String,
    #[serde(default)]
    variants: Vec<Variant>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Variant {
    #[serde(default)]
    sku: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    in_stock: bool,
    #[serde(default)]
    price: PriceInfo,
}

#[derive(Debug, Default, Deserialize)]
struct PriceInfo {
    #[serde(default)]
    price: Option<Money>,
    #[serde(default)]
    rrp: Option<Money>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Money {
    #[serde(default)]
    amount: Option<Amount>,
    #[serde(default)]
    display_value: String,
}

/// Price amounts arrive as either JSON strings ("20.00") or bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Number(f64),
    Text(String),
}

impl Money {
    /// Numeric amount, or `None` when absent/blank. Non-numeric text is an
    /// error that fails the whole page's extraction.
    fn amount_f64(&self) -> Result<Option<f64>> {
        match &self.amount {
            None => Ok(None),
            Some(Amount::Number(n)) => Ok(Some(*n)),
            Some(Amount::Text(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                let n = trimmed
                    .parse::<f64>()
                    .with_context(|| format!("non-numeric price amount {s:?}"))?;
                Ok(Some(n))
            }
        }
    }
}

// ── Extraction ──

/// Parse one product page into variant records.
///
/// All-or-nothing per page: a missing script tag, missing marker, or
/// malformed blob is an error and the page yields no records. An empty
/// variant list is not an error.
pub fn parse_product_page(url: &str, html: &str) -> Result<Vec<VariantRecord>> {
    let doc = Html::parse_document(html);
    let script = doc
        .select(&PRODUCT_SCRIPT_SEL)
        .next()
        .context("product data script tag not found")?;
    let content: String = script.text().collect();

    let json = object_after_marker(&content, DATA_MARKER)
        .context("masterData object not found in script")?;
    let master: MasterData =
        serde_json::from_str(json).context("failed to parse masterData JSON")?;

    master
        .variants
        .iter()
        .map(|v| variant_record(&master.page_title, url, v))
        .collect()
}

/// Extract the object literal assigned after `marker` with a brace-depth
/// scan: `{` opens, `}` closes, stop when depth returns to zero. Unlike a
/// "first `};`" search this survives nested objects.
fn object_after_marker<'a>(script: &'a str, marker: &str) -> Option<&'a str> {
    let start = script.find(marker)? + marker.len();
    let rest = &script[start..];
    let open = rest.find('{')?;

    let mut depth = 0usize;
    for (i, b) in rest.bytes().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[open..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

fn variant_record(product_name: &str, url: &str, v: &Variant) -> Result<VariantRecord> {
    let price = v.price.price.as_ref();
    let rrp = v.price.rrp.as_ref();

    let display_price = price.map(|m| m.display_value.clone()).unwrap_or_default();
    let display_rrp = rrp.map(|m| m.display_value.clone()).unwrap_or_default();
    let price_amount = price.map(Money::amount_f64).transpose()?.flatten();
    let rrp_amount = rrp.map(Money::amount_f64).transpose()?.flatten();

    let sale_price = normalize::sale_price(price_amount, rrp_amount, &display_price);
    let (size, flavor) = normalize::split_title(&v.title);

    Ok(VariantRecord {
        product_name: product_name.to_string(),
        sku: v.sku.clone(),
        variant_title: v.title.clone(),
        flavor,
        size,
        price: display_price,
        sale_price,
        original_price: display_rrp,
        in_stock: normalize::stock_label(v.in_stock).to_string(),
        product_url: url.to_string(),
    })
}

// ── Tests ──
