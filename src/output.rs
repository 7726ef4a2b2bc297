use std::fs::File;
use std::io;

use anyhow::Result;

use crate::record::VariantRecord;

pub const CSV_FILENAME: &str = "myprotein_variants.csv";

/// Serialize records as CSV: header row from the record's field names,
/// minimal quoting. Callers skip this entirely when there are no records.
pub fn write_csv<W: io::Write>(writer: W, records: &[VariantRecord]) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    for record in records {
        w.serialize(record)?;
    }
    w.flush()?;
    Ok(())
}

/// Write records to `path`, overwriting any previous run's file.
pub fn save_csv(path: &str, records: &[VariantRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VariantRecord {
        VariantRecord {
            product_name: "Whey".into(),
            sku: "X1".into(),
            variant_title: "Whey - 1kg - Chocolate".into(),
            flavor: "Chocolate".into(),
            size: "1kg".into(),
            price: "$20.00".into(),
            sale_price: "$20.00".into(),
            original_price: "$25.00".into(),
            in_stock: "Yes".into(),
            product_url: "https://ca.myprotein.com/p/sports-nutrition/whey".into(),
        }
    }

    fn render(records: &[VariantRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_order_is_fixed() {
        let out = render(&[sample()]);
        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "Product Name,SKU,Variant Title,Flavor,Size,Price,Sale Price,Original Price,In Stock,Product URL"
        );
    }

    #[test]
    fn row_values_in_column_order() {
        let out = render(&[sample()]);
        let row = out.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "Whey,X1,Whey - 1kg - Chocolate,Chocolate,1kg,$20.00,$20.00,$25.00,Yes,https://ca.myprotein.com/p/sports-nutrition/whey"
        );
    }

    #[test]
    fn quoting_is_minimal() {
        let mut r = sample();
        r.flavor = "Cookies, Cream".into();
        r.sale_price = String::new();
        let out = render(&[r]);
        let row = out.lines().nth(1).unwrap();
        // Only the comma-bearing field gets quoted
        assert!(row.contains("\"Cookies, Cream\""));
        assert!(row.contains(",1kg,$20.00,,$25.00,"));
        assert!(!row.contains("\"Whey\""));
    }

    #[test]
    fn one_row_per_record() {
        let out = render(&[sample(), sample()]);
        assert_eq!(out.lines().count(), 3);
    }
}
