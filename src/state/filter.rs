//! Brand filter for the premium catalogue.

pub const ALL: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BrandFilter {
    #[default]
    All,
    Brand(String),
}

impl BrandFilter {
    /// Parses a `data-filter` value. `"all"` shows every card.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            BrandFilter::All
        } else {
            BrandFilter::Brand(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            BrandFilter::All => ALL,
            BrandFilter::Brand(brand) => brand,
        }
    }

    pub fn matches(&self, brand: &str) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Brand(wanted) => wanted == brand,
        }
    }
}

/// Filter buttons in display order: `all` first, then each brand once, as first seen.
pub fn filter_options<'a, I>(brands: I) -> Vec<BrandFilter>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut options = vec![BrandFilter::All];
    for brand in brands {
        let option = BrandFilter::from_value(brand);
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let filter = BrandFilter::from_value("all");
        assert_eq!(filter, BrandFilter::All);
        assert!(filter.matches("bmw"));
        assert!(filter.matches(""));
    }

    #[test]
    fn brand_match_is_exact() {
        let filter = BrandFilter::from_value("bmw");
        assert!(filter.matches("bmw"));
        assert!(!filter.matches("BMW"));
        assert!(!filter.matches("ducati"));
        assert_eq!(filter.value(), "bmw");
    }

    #[test]
    fn options_are_unique_and_ordered() {
        let options = filter_options(["bmw", "ducati", "bmw", "porsche"]);
        let values: Vec<&str> = options.iter().map(BrandFilter::value).collect();
        assert_eq!(values, vec!["all", "bmw", "ducati", "porsche"]);
    }
}
