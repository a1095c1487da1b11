use anyhow::{Context, Result};
use catalog_model::IngestRecord;
use serde::Deserialize;

/// A CSV row as read from the file, before normalization. All columns come
/// in as text; `description` and `count` may be absent or empty.
#[derive(Debug, Deserialize)]
struct RawRow {
    title: String,
    #[serde(default)]
    description: String,
    price: String,
    #[serde(default)]
    count: String,
}

impl RawRow {
    fn normalize(self) -> Result<IngestRecord> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .context(format!("unparsable price {:?}", self.price))?;

        let count = if self.count.trim().is_empty() {
            0
        } else {
            self.count
                .trim()
                .parse::<u32>()
                .context(format!("unparsable count {:?}", self.count))?
        };

        Ok(IngestRecord {
            title: self.title,
            description: self.description,
            price,
            count,
        })
    }
}

/// Parses an uploaded catalog file as CSV with header-derived field names.
///
/// Any malformed row aborts the whole file; already-normalized rows are
/// discarded and the caller propagates the failure so the triggering event
/// becomes eligible for its source's retry policy.
pub fn parse_catalog_rows(bytes: &[u8]) -> Result<Vec<IngestRecord>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();

    for row in reader.deserialize::<RawRow>() {
        let raw = row.context("malformed csv row")?;
        rows.push(raw.normalize()?);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_rows() {
        let csv = "title,description,price,count\n\
                   Laptop,portable,1200,5\n\
                   Mouse,,25.5,\n";

        let rows = parse_catalog_rows(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            IngestRecord {
                title: "Laptop".to_string(),
                description: "portable".to_string(),
                price: 1200.0,
                count: 5,
            }
        );
        assert_eq!(rows[1].price, 25.5);
        assert_eq!(rows[1].count, 0);
        assert_eq!(rows[1].description, "");
    }

    #[test]
    fn count_column_may_be_absent_entirely() {
        let csv = "title,price\nKeyboard,49.9\n";
        let rows = parse_catalog_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].count, 0);
        assert_eq!(rows[0].description, "");
    }

    #[test]
    fn unparsable_price_aborts_the_file() {
        let csv = "title,price,count\nLaptop,notanumber,5\n";
        assert!(parse_catalog_rows(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_required_column_aborts_the_file() {
        let csv = "title,count\nLaptop,5\n";
        assert!(parse_catalog_rows(csv.as_bytes()).is_err());
    }

    #[test]
    fn empty_file_yields_no_rows() {
        let csv = "title,description,price,count\n";
        assert!(parse_catalog_rows(csv.as_bytes()).unwrap().is_empty());
    }
}
