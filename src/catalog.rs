//! Listing catalogs and the data-provider abstraction
//!
//! The storefront data is static today, but pages only ever see it through
//! [`ListingProvider`], so a real data source can replace [`StaticCatalog`]
//! without touching layout code.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::types::{CardDefaults, CarListing};

/// Named, ordered listing collections on the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Catalog {
    Popular,
    Recommended,
}

impl Catalog {
    pub fn title(&self) -> &'static str {
        match self {
            Catalog::Popular => "Popular Cars",
            Catalog::Recommended => "Recommended Cars",
        }
    }

    pub fn variants() -> &'static [Catalog] {
        &[Catalog::Popular, Catalog::Recommended]
    }
}

/// Source of listing data: an ordered sequence of listings per catalog.
/// Display order is the returned order; duplicates are allowed.
pub trait ListingProvider: Send + Sync {
    fn listings(&self, catalog: Catalog) -> Vec<CarListing>;
}

/// In-memory provider backed by the hardcoded storefront data.
pub struct StaticCatalog;

impl ListingProvider for StaticCatalog {
    fn listings(&self, catalog: Catalog) -> Vec<CarListing> {
        match catalog {
            Catalog::Popular => popular_cars(),
            Catalog::Recommended => recommended_cars(),
        }
    }
}

fn popular_cars() -> Vec<CarListing> {
    vec![
        CarListing::new("Koenigsegg", "Sport", "/car.png").favorite(),
        CarListing::new("Nissan GT-R", "Sport", "/car (1).png"),
        CarListing::new("Rolls-Royce", "Sedan", "/car.png").favorite(),
        CarListing::new("Porsche 911", "Sport", "/car (1).png"),
    ]
}

fn recommended_cars() -> Vec<CarListing> {
    vec![
        CarListing::new("All New Rush", "SUV", "/suv.png").favorite(),
        CarListing::new("CR-V", "SUV", "/suv (4).png"),
        CarListing::new("All New Terios", "SUV", "/suv (4).png").favorite(),
        CarListing::new("MG ZX Exclusive", "SUV", "/suv.png"),
        CarListing::new("NEW MG ZS", "SUV", "/suv.png").favorite(),
        CarListing::new("MG ZX Excite", "SUV", "/suv (4).png"),
    ]
}

/// Catalog context shared with every page: the listing provider plus the
/// storefront-wide card defaults.
#[derive(Clone)]
pub struct CatalogContext {
    provider: Arc<dyn ListingProvider>,
    pub defaults: CardDefaults,
}

impl CatalogContext {
    pub fn new(provider: Arc<dyn ListingProvider>, defaults: CardDefaults) -> Self {
        Self { provider, defaults }
    }

    /// Listings for one catalog, in display order. Authoring mistakes in the
    /// backing data are logged, never surfaced as render failures.
    pub fn listings(&self, catalog: Catalog) -> Vec<CarListing> {
        let listings = self.provider.listings(catalog);
        for listing in &listings {
            if let Err(err) = listing.validate() {
                tracing::warn!(catalog = catalog.title(), %err, "invalid listing in catalog");
            }
        }
        listings
    }
}

/// Catalog provider component that wraps the app
#[component]
pub fn CatalogProvider(children: Element) -> Element {
    use_context_provider(|| {
        CatalogContext::new(Arc::new(StaticCatalog), CardDefaults::default())
    });

    children
}

/// Hook to access the catalog context
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_catalog_keeps_authoring_order() {
        let popular = StaticCatalog.listings(Catalog::Popular);

        let names: Vec<&str> = popular.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Koenigsegg", "Nissan GT-R", "Rolls-Royce", "Porsche 911"]
        );
    }

    #[test]
    fn recommended_catalog_has_six_suvs() {
        let recommended = StaticCatalog.listings(Catalog::Recommended);

        assert_eq!(recommended.len(), 6);
        assert!(recommended.iter().all(|c| c.category == "SUV"));
    }

    #[test]
    fn static_data_passes_authoring_checks() {
        for catalog in Catalog::variants() {
            for listing in StaticCatalog.listings(*catalog) {
                assert_eq!(listing.validate(), Ok(()), "{}", listing.name);
            }
        }
    }

    #[test]
    fn catalog_titles_match_section_headers() {
        assert_eq!(Catalog::Popular.title(), "Popular Cars");
        assert_eq!(Catalog::Recommended.title(), "Recommended Cars");
    }

    #[test]
    fn context_passes_provider_data_through_unchanged() {
        let context = CatalogContext::new(Arc::new(StaticCatalog), CardDefaults::default());

        assert_eq!(
            context.listings(Catalog::Popular),
            StaticCatalog.listings(Catalog::Popular)
        );
    }
}
