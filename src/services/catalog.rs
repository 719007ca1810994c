use crate::domain::constants::{DEFAULT_CATALOG, DEFAULT_IGNORED_ITEMS};
use crate::sheet::SheetError;
use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;

/// Ordered product -> list-price mapping plus the ignorable item denylist.
/// Immutable process-wide configuration; order defines report display order.
pub struct Catalog {
    prices: IndexMap<String, i64>,
    ignored: Vec<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<CatalogProduct>,
    #[serde(default)]
    ignored: Vec<String>,
}

#[derive(Deserialize)]
struct CatalogProduct {
    name: String,
    price: String,
}

impl Catalog {
    /// Loads the catalog: the compiled-in default, or a TOML override file.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            None => Self::from_pairs(
                DEFAULT_CATALOG.iter().map(|(n, p)| (n.to_string(), *p)),
                DEFAULT_IGNORED_ITEMS.iter().map(|s| s.to_string()).collect(),
            ),
            Some(p) => {
                let raw = std::fs::read_to_string(p)
                    .with_context(|| format!("read catalog file {}", p))?;
                let file: CatalogFile =
                    toml::from_str(&raw).with_context(|| format!("parse catalog file {}", p))?;
                Self::from_pairs(
                    file.products.into_iter().map(|e| (e.name, e.price)),
                    file.ignored,
                )
            }
        }
    }

    fn from_pairs<P: AsRef<str>>(
        pairs: impl Iterator<Item = (String, P)>,
        ignored: Vec<String>,
    ) -> anyhow::Result<Self> {
        let mut prices = IndexMap::new();
        for (name, price) in pairs {
            let cents = parse_price(price.as_ref())
                .with_context(|| format!("price for product '{}'", name))?;
            if prices.insert(name.clone(), cents).is_some() {
                return Err(SheetError::DuplicateProduct(name).into());
            }
        }
        if prices.is_empty() {
            return Err(SheetError::EmptyCatalog.into());
        }
        Ok(Self { prices, ignored })
    }

    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn price_cents(&self, product: &str) -> Option<i64> {
        self.prices.get(product).copied()
    }

    /// Denylist entries are compared in trimmed form: some source exports
    /// carry stray whitespace around wall-bucket labels, and ingestion trims
    /// cells before rows reach the reconstructor.
    pub fn is_ignored(&self, item_name: &str) -> bool {
        let item = item_name.trim();
        self.ignored.iter().any(|i| i.trim() == item)
    }

    /// Fresh all-zero quantity map over exactly the catalog product set.
    pub fn empty_quantities(&self) -> IndexMap<String, f64> {
        self.prices.keys().map(|k| (k.clone(), 0.0)).collect()
    }
}

/// Parses a currency-formatted string like "$21.00" into integer cents.
pub fn parse_price(raw: &str) -> anyhow::Result<i64> {
    let s = raw.trim().trim_start_matches('$').replace(',', "");
    let amount: f64 = s
        .parse()
        .with_context(|| format!("invalid price '{}'", raw))?;
    if amount < 0.0 {
        anyhow::bail!("negative price '{}'", raw);
    }
    Ok((amount * 100.0).round() as i64)
}

/// Renders cents as "$NN.NN", with an explicit leading sign when negative.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_round_trips_through_cents() {
        assert_eq!(parse_price("$21.00").expect("parses"), 2100);
        assert_eq!(parse_price("$4.50").expect("parses"), 450);
        assert_eq!(parse_price("$1.50").expect("parses"), 150);
        assert_eq!(format_cents(2100), "$21.00");
        assert_eq!(format_cents(450), "$4.50");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(-5), "-$0.05");
        assert_eq!(format_cents(-2100), "-$21.00");
    }

    #[test]
    fn rejects_garbage_prices() {
        assert!(parse_price("free").is_err());
        assert!(parse_price("$-3.00").is_err());
    }

    #[test]
    fn default_catalog_is_well_formed() {
        let c = Catalog::load(None).expect("default catalog loads");
        assert_eq!(c.len(), 45);
        assert_eq!(c.price_cents("Standard 84\""), Some(2700));
        assert_eq!(c.price_cents("Top Track 57\" - Silver"), Some(2100));
        assert!(c.is_ignored("SPACE COUNT"));
        assert!(c.is_ignored("Wall A 0-5ft"));
        // the denylist carries "Wall A 5-10ft " with a trailing space; both
        // the verbatim and the trimmed spelling must match
        assert!(c.is_ignored("Wall A 5-10ft "));
        assert!(c.is_ignored("Wall A 5-10ft"));
        assert!(!c.is_ignored("Wall A"));
        // first product defines display order
        assert_eq!(c.products().next(), Some("Top Track 57\" - Silver"));
    }

    #[test]
    fn empty_quantities_covers_exactly_the_product_set() {
        let c = Catalog::load(None).expect("default catalog loads");
        let q = c.empty_quantities();
        assert_eq!(q.len(), c.len());
        assert!(q.values().all(|v| *v == 0.0));
        for (got, want) in q.keys().zip(c.products()) {
            assert_eq!(got, want);
        }
    }

    #[test]
    fn toml_override_replaces_default() {
        let raw = r#"
            ignored = ["SPACE COUNT"]

            [[products]]
            name = "Widget"
            price = "$2.50"

            [[products]]
            name = "Gadget"
            price = "$10.00"
        "#;
        let file: CatalogFile = toml::from_str(raw).expect("toml parses");
        let c = Catalog::from_pairs(
            file.products.into_iter().map(|e| (e.name, e.price)),
            file.ignored,
        )
        .expect("catalog builds");
        assert_eq!(c.len(), 2);
        assert_eq!(c.price_cents("Widget"), Some(250));
        assert!(c.is_ignored("SPACE COUNT"));
    }

    #[test]
    fn duplicate_product_names_are_rejected() {
        let pairs = vec![
            ("Widget".to_string(), "$1.00"),
            ("Widget".to_string(), "$2.00"),
        ];
        assert!(Catalog::from_pairs(pairs.into_iter(), vec![]).is_err());
    }
}
