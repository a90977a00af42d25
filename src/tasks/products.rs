//! Product catalog filtering.

use std::fmt;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// Optional constraints applied together.
///
/// A `None` field does not constrain anything, and neither does an empty category.
/// Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether `product` satisfies every present constraint.
    pub fn matches(&self, product: &Product) -> bool {
        self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
            && self
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .is_none_or(|c| product.category == c)
    }
}

/// Return the products matching `filter`, in their original order.
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Demo catalog used when no catalog file is given.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Laptop", 50000.0, "electronics"),
        Product::new("Mouse", 1500.0, "electronics"),
        Product::new("Book", 500.0, "books"),
        Product::new("Coffee", 300.0, "food"),
        Product::new("Phone", 30000.0, "electronics"),
        Product::new("Pen", 50.0, "office"),
    ]
}

#[derive(Debug, PartialEq)]
pub struct CatalogError {
    pub line: usize,
    pub reason: String,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog line {}: {}", self.line, self.reason)
    }
}

impl std::error::Error for CatalogError {}

/// Parse `name,price,category` lines. Blank lines and `#` comments are skipped.
pub fn parse_catalog(text: &str) -> Result<Vec<Product>, CatalogError> {
    let mut products = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let error = |reason: String| CatalogError {
            line: idx + 1,
            reason,
        };

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, price, category] = fields[..] else {
            return Err(error(format!(
                "expected 3 fields (name,price,category), found {}",
                fields.len()
            )));
        };
        if name.is_empty() {
            return Err(error("empty product name".to_string()));
        }
        let price: f64 = price
            .parse()
            .map_err(|_| error(format!("invalid price '{}'", price)))?;
        products.push(Product::new(name, price, category));
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn three() -> Vec<Product> {
        vec![
            Product::new("Laptop", 50000.0, "electronics"),
            Product::new("Mouse", 1500.0, "electronics"),
            Product::new("Book", 500.0, "books"),
        ]
    }

    #[test]
    fn test_category_keeps_order() {
        let filtered = filter_products(&three(), &ProductFilter::new().category("electronics"));
        assert_eq!(names(&filtered), vec!["Laptop", "Mouse"]);
    }

    #[test]
    fn test_price_range() {
        let filter = ProductFilter::new().min_price(1000.0).max_price(40000.0);
        assert_eq!(names(&filter_products(&three(), &filter)), vec!["Mouse"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let products = three();
        let exact = ProductFilter::new().min_price(1500.0).max_price(1500.0);
        assert_eq!(names(&filter_products(&products, &exact)), vec!["Mouse"]);

        let top = ProductFilter::new().min_price(50000.0);
        assert_eq!(names(&filter_products(&products, &top)), vec!["Laptop"]);

        let bottom = ProductFilter::new().max_price(500.0);
        assert_eq!(names(&filter_products(&products, &bottom)), vec!["Book"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let products = sample_catalog();
        assert_eq!(filter_products(&products, &ProductFilter::new()), products);
        let blank = ProductFilter::new().category("");
        assert_eq!(filter_products(&products, &blank), products);
    }

    #[test]
    fn test_adding_constraints_only_shrinks() {
        let products = sample_catalog();
        let filters = [
            ProductFilter::new(),
            ProductFilter::new().min_price(300.0),
            ProductFilter::new().min_price(300.0).max_price(40000.0),
            ProductFilter::new()
                .min_price(300.0)
                .max_price(40000.0)
                .category("electronics"),
        ];
        for pair in filters.windows(2) {
            let wide = filter_products(&products, &pair[0]);
            let narrow = filter_products(&products, &pair[1]);
            // narrow must be a subsequence of wide
            let mut rest = wide.iter();
            for p in &narrow {
                assert!(rest.any(|w| w == p), "{:?} not in {:?}", p, wide);
            }
        }
        let last = filter_products(&products, &filters[3]);
        assert_eq!(names(&last), vec!["Mouse", "Phone"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let products = sample_catalog();
        let before = products.clone();
        let _ = filter_products(&products, &ProductFilter::new().category("books"));
        assert_eq!(products, before);
    }

    #[test]
    fn test_expensive_electronics() {
        let filter = ProductFilter::new().min_price(20000.0).category("electronics");
        assert_eq!(
            names(&filter_products(&sample_catalog(), &filter)),
            vec!["Laptop", "Phone"]
        );
    }

    #[test]
    fn test_parse_catalog() {
        let text = "# name,price,category\nTea, 120.5 ,food\n\nLamp,900,home\n";
        let products = parse_catalog(text).unwrap();
        assert_eq!(
            products,
            vec![
                Product::new("Tea", 120.5, "food"),
                Product::new("Lamp", 900.0, "home"),
            ]
        );
    }

    #[test]
    fn test_parse_catalog_errors_name_the_line() {
        let err = parse_catalog("Tea,1,food\nLamp,cheap,home").unwrap_err();
        assert_eq!(err.to_string(), "catalog line 2: invalid price 'cheap'");

        let err = parse_catalog("\nonly,two").unwrap_err();
        assert_eq!(err.line, 2);
    }
}
