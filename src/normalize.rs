/// Variant titles follow "Name - Size - Flavor - ..."; split out (size, flavor).
///
/// Fewer than 2 segments leaves both empty; exactly 2 fills only size;
/// segments past the third are ignored. Best-effort, not a guaranteed parse.
pub fn split_title(title: &str) -> (String, String) {
    let parts: Vec<&str> = title.split(" - ").collect();
    match parts.len() {
        0 | 1 => (String::new(), String::new()),
        2 => (parts[1].trim().to_string(), String::new()),
        _ => (parts[1].trim().to_string(), parts[2].trim().to_string()),
    }
}

/// A variant is on sale only when both amounts are known and the current
/// price undercuts the list price; the sale price is then the current
/// display string verbatim.
pub fn sale_price(price: Option<f64>, rrp: Option<f64>, display_price: &str) -> String {
    match (price, rrp) {
        (Some(p), Some(r)) if p < r => display_price.to_string(),
        _ => String::new(),
    }
}

pub fn stock_label(in_stock: bool) -> &'static str {
    if in_stock {
        "Yes"
    } else {
        "No"
    }
}

// ── Tests ──
