//! Shop listing: category filter, paging and search over an in-memory catalogue
//!
//! The home page shows one page of shops at a time. Changing the category
//! always returns to the first page. While category rotation is on, the host
//! sends [`ListingInput::RotateCategory`] on a fixed interval; any manual
//! listing input turns rotation off.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shops shown per page
pub const DEFAULT_SHOPS_PER_PAGE: usize = 9;
/// Delay between automatic category changes
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(3000);

const CATALOGUE_SIZE: usize = 27;

/// Business category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Retail,
    Restaurants,
    Automotive,
    Fashion,
    HomeGoods,
    Services,
}

impl Category {
    /// Every category, in display and rotation order
    pub const ALL: [Category; 6] = [
        Category::Retail,
        Category::Restaurants,
        Category::Automotive,
        Category::Fashion,
        Category::HomeGoods,
        Category::Services,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

/// One business in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub description: String,
    #[serde(alias = "image")]
    pub image_ref: String,
    /// 4.0 to 5.0
    pub rating: f32,
}

struct ShopTemplate {
    name: &'static str,
    description: &'static str,
    image: &'static str,
}

const fn tpl(name: &'static str, description: &'static str, image: &'static str) -> ShopTemplate {
    ShopTemplate {
        name,
        description,
        image,
    }
}

const RETAIL: &[ShopTemplate] = &[
    tpl(
        "Corner Market",
        "Your one-stop shop for daily essentials",
        "https://images.unsplash.com/photo-1604719312566-8912e9227c6a?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "The Local Pantry",
        "Curated collection of unique products",
        "https://images.unsplash.com/photo-1567958451986-2de427a4a0be?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Main Street Goods",
        "Fresh local produce and groceries",
        "https://images.unsplash.com/photo-1583922606661-0822ed0bd916?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Neighborhood Essentials",
        "Quality goods at neighborhood prices",
        "https://images.unsplash.com/photo-1528698827591-e19ccd7bc23d?auto=format&fit=crop&q=80&w=400",
    ),
];

const RESTAURANTS: &[ShopTemplate] = &[
    tpl(
        "The Local Table",
        "Authentic local flavors and atmosphere",
        "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Cafe Corner",
        "Fine dining experience in your neighborhood",
        "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Family Kitchen",
        "Cozy cafe with fresh-baked goods",
        "https://images.unsplash.com/photo-1552566626-52f8b828add9?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Taste of Home",
        "Family-friendly dining destination",
        "https://images.unsplash.com/photo-1559339352-11d035aa65de?auto=format&fit=crop&q=80&w=400",
    ),
];

const AUTOMOTIVE: &[ShopTemplate] = &[
    tpl(
        "City Auto Care",
        "Professional auto repair and maintenance",
        "https://images.unsplash.com/photo-1607860108855-64acf2078ed9?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Premium Car Wash",
        "Premium car care services",
        "https://images.unsplash.com/photo-1632823471565-1ecdf5c6d7f7?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Tire Experts",
        "Expert tire sales and service",
        "https://images.unsplash.com/photo-1597766353939-aee87a63e114?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Auto Parts Plus",
        "Quality auto parts and accessories",
        "https://images.unsplash.com/photo-1562426509-5044a121aa49?auto=format&fit=crop&q=80&w=400",
    ),
];

const FASHION: &[ShopTemplate] = &[
    tpl(
        "Style Studio",
        "Trendy fashion for every style",
        "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Fashion Forward",
        "Designer boutique experience",
        "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Trendy Threads",
        "Affordable fashion finds",
        "https://images.unsplash.com/photo-1558769132-cb1aea458c5e?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Chic Boutique",
        "Unique accessories and clothing",
        "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5?auto=format&fit=crop&q=80&w=400",
    ),
];

const HOME_GOODS: &[ShopTemplate] = &[
    tpl(
        "Home & Living",
        "Quality furniture and home decor",
        "https://images.unsplash.com/photo-1513161455079-7dc1de15ef3e?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Decor Dreams",
        "Modern home design solutions",
        "https://images.unsplash.com/photo-1558997519-83ea9252edf8?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Furniture Plus",
        "Affordable home improvements",
        "https://images.unsplash.com/photo-1556228453-efd6c1ff04f6?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Interior Accents",
        "Unique home accessories",
        "https://images.unsplash.com/photo-1524758631624-e2822e304c36?auto=format&fit=crop&q=80&w=400",
    ),
];

const SERVICES: &[ShopTemplate] = &[
    tpl(
        "Beauty Bar",
        "Professional beauty and wellness",
        "https://images.unsplash.com/photo-1562322140-8baeececf3df?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Clean & Shine",
        "Expert cleaning solutions",
        "https://images.unsplash.com/photo-1595475207225-428b62bda831?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Fix-It Pro",
        "Reliable repair services",
        "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&q=80&w=400",
    ),
    tpl(
        "Service Solutions",
        "Quality professional services",
        "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=400",
    ),
];

fn templates(category: Category) -> &'static [ShopTemplate] {
    match category {
        Category::Retail => RETAIL,
        Category::Restaurants => RESTAURANTS,
        Category::Automotive => AUTOMOTIVE,
        Category::Fashion => FASHION,
        Category::HomeGoods => HOME_GOODS,
        Category::Services => SERVICES,
    }
}

/// The built-in catalogue
///
/// Categories cycle in [`Category::ALL`] order. Names and ratings are
/// deterministic so page contents are stable between runs.
pub fn catalogue() -> Vec<Shop> {
    (0..CATALOGUE_SIZE)
        .map(|i| {
            let category = Category::ALL[i % Category::ALL.len()];
            let variants = templates(category);
            let template = &variants[(i / Category::ALL.len()) % variants.len()];
            Shop {
                id: i as u64 + 1,
                name: template.name.to_string(),
                category,
                description: template.description.to_string(),
                image_ref: template.image.to_string(),
                rating: 4.0 + ((i * 7) % 10) as f32 / 10.0,
            }
        })
        .collect()
}

/// User and timer events for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingInput {
    /// `None` shows every category
    SelectCategory(Option<Category>),
    /// Rotation timer fired
    RotateCategory,
    /// Zero-based page index
    GoToPage(usize),
    NextPage,
    PreviousPage,
}

/// Filter, paging and search state over a fixed catalogue
#[derive(Debug, Clone)]
pub struct Listing {
    shops: Vec<Shop>,
    per_page: usize,
    category: Option<Category>,
    /// Zero-based
    page: usize,
    rotating: bool,
    query: String,
}

impl Listing {
    /// A page size of zero is treated as one
    pub fn new(shops: Vec<Shop>, per_page: usize, rotating: bool) -> Self {
        Self {
            shops,
            per_page: per_page.max(1),
            category: None,
            page: 0,
            rotating,
            query: String::new(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Zero-based index of the shown page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Shops in the selected category, catalogue order
    pub fn filtered(&self) -> impl Iterator<Item = &Shop> {
        self.shops
            .iter()
            .filter(move |shop| self.category.is_none_or(|c| shop.category == c))
    }

    /// Number of pages for the current filter; zero when nothing matches
    pub fn page_count(&self) -> usize {
        self.filtered().count().div_ceil(self.per_page)
    }

    /// Shops on the shown page
    pub fn current_page(&self) -> Vec<&Shop> {
        self.filtered()
            .skip(self.page * self.per_page)
            .take(self.per_page)
            .collect()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Apply an input; returns whether anything changed
    pub fn dispatch(&mut self, input: ListingInput) -> bool {
        match input {
            ListingInput::SelectCategory(category) => {
                self.rotating = false;
                self.select(category)
            }
            ListingInput::RotateCategory => self.rotate(),
            ListingInput::GoToPage(page) => {
                self.rotating = false;
                self.go_to_page(page)
            }
            ListingInput::NextPage => {
                self.rotating = false;
                self.has_next_page() && self.go_to_page(self.page + 1)
            }
            ListingInput::PreviousPage => {
                self.rotating = false;
                self.has_previous_page() && self.go_to_page(self.page - 1)
            }
        }
    }

    fn select(&mut self, category: Option<Category>) -> bool {
        let changed = self.category != category || self.page != 0;
        self.category = category;
        self.page = 0;
        debug!(?category, "listing category selected");
        changed
    }

    /// Move to the next category in order; starts from the first after "All"
    fn rotate(&mut self) -> bool {
        if !self.rotating {
            return false;
        }
        let next = match self.category {
            Some(current) => Category::ALL[(current.position() + 1) % Category::ALL.len()],
            None => Category::ALL[0],
        };
        self.select(Some(next))
    }

    fn go_to_page(&mut self, page: usize) -> bool {
        if page >= self.page_count() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Shops whose name or description contains the query, ignoring case
    ///
    /// Searches the whole catalogue regardless of the category filter. A
    /// blank query matches nothing.
    pub fn search_results(&self) -> Vec<&Shop> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.shops
            .iter()
            .filter(|shop| {
                shop.name.to_lowercase().contains(&needle)
                    || shop.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing::new(catalogue(), DEFAULT_SHOPS_PER_PAGE, false)
    }

    mod built_in_catalogue {
        use super::*;

        #[test]
        fn ids_are_unique_and_ordered() {
            let shops = catalogue();
            assert_eq!(shops.len(), 27);
            for (i, shop) in shops.iter().enumerate() {
                assert_eq!(shop.id, i as u64 + 1);
            }
        }

        #[test]
        fn categories_cycle() {
            let shops = catalogue();
            assert_eq!(shops[0].category, Category::Retail);
            assert_eq!(shops[5].category, Category::Services);
            assert_eq!(shops[6].category, Category::Retail);
        }

        #[test]
        fn ratings_in_range() {
            assert!(catalogue().iter().all(|s| (4.0..5.0).contains(&s.rating)));
        }

        #[test]
        fn category_uses_camel_case_names() {
            let json = serde_json::to_string(&Category::HomeGoods).unwrap();
            assert_eq!(json, "\"homeGoods\"");
        }
    }

    mod property_paging {
        use super::*;

        #[test]
        fn page_count_rounds_up() {
            let listing = listing();
            // 27 shops, 9 per page
            assert_eq!(listing.page_count(), 3);

            let odd = Listing::new(catalogue(), 10, false);
            assert_eq!(odd.page_count(), 3);
        }

        #[test]
        fn last_page_holds_the_remainder() {
            let mut listing = Listing::new(catalogue(), 10, false);
            assert!(listing.dispatch(ListingInput::GoToPage(2)));
            let page = listing.current_page();
            assert_eq!(page.len(), 7);
            assert_eq!(page[0].id, 21);
            assert!(!listing.has_next_page());
        }

        #[test]
        fn next_and_previous_stop_at_bounds() {
            let mut listing = listing();
            assert!(!listing.dispatch(ListingInput::PreviousPage));
            assert!(listing.dispatch(ListingInput::NextPage));
            assert!(listing.dispatch(ListingInput::NextPage));
            assert_eq!(listing.page(), 2);
            assert!(!listing.dispatch(ListingInput::NextPage));
            assert_eq!(listing.page(), 2);
            assert!(listing.dispatch(ListingInput::PreviousPage));
            assert_eq!(listing.page(), 1);
        }

        #[test]
        fn out_of_range_page_rejected() {
            let mut listing = listing();
            assert!(!listing.dispatch(ListingInput::GoToPage(3)));
            assert_eq!(listing.page(), 0);
        }

        #[test]
        fn zero_page_size_treated_as_one() {
            let listing = Listing::new(catalogue(), 0, false);
            assert_eq!(listing.page_count(), 27);
            assert_eq!(listing.current_page().len(), 1);
        }

        #[test]
        fn empty_catalogue_has_no_pages() {
            let mut listing = Listing::new(Vec::new(), 9, false);
            assert_eq!(listing.page_count(), 0);
            assert!(listing.current_page().is_empty());
            assert!(!listing.has_next_page());
            assert!(!listing.dispatch(ListingInput::NextPage));
            assert!(!listing.dispatch(ListingInput::GoToPage(0)));
        }
    }

    mod property_filter {
        use super::*;

        #[test]
        fn filter_keeps_only_that_category() {
            let mut listing = listing();
            listing.dispatch(ListingInput::SelectCategory(Some(Category::Fashion)));
            let page = listing.current_page();
            assert_eq!(page.len(), 4);
            assert!(page.iter().all(|s| s.category == Category::Fashion));
            assert_eq!(listing.page_count(), 1);
        }

        #[test]
        fn changing_the_filter_resets_the_page() {
            let mut listing = listing();
            listing.dispatch(ListingInput::GoToPage(2));
            assert_eq!(listing.page(), 2);

            listing.dispatch(ListingInput::SelectCategory(Some(Category::Retail)));
            assert_eq!(listing.page(), 0);
            assert_eq!(listing.current_page().len(), 5);

            listing.dispatch(ListingInput::SelectCategory(None));
            assert_eq!(listing.page(), 0);
            assert_eq!(listing.current_page().len(), 9);
        }

        #[test]
        fn reselecting_from_later_page_counts_as_change() {
            let mut listing = listing();
            listing.dispatch(ListingInput::GoToPage(1));
            assert!(listing.dispatch(ListingInput::SelectCategory(None)));
            assert!(!listing.dispatch(ListingInput::SelectCategory(None)));
        }
    }

    mod property_rotation {
        use super::*;

        #[test]
        fn rotation_walks_categories_and_wraps() {
            let mut listing = Listing::new(catalogue(), DEFAULT_SHOPS_PER_PAGE, true);
            assert_eq!(listing.category(), None);

            for expected in Category::ALL {
                assert!(listing.dispatch(ListingInput::RotateCategory));
                assert_eq!(listing.category(), Some(expected));
            }
            listing.dispatch(ListingInput::RotateCategory);
            assert_eq!(listing.category(), Some(Category::Retail));
        }

        #[test]
        fn manual_selection_stops_rotation() {
            let mut listing = Listing::new(catalogue(), DEFAULT_SHOPS_PER_PAGE, true);
            listing.dispatch(ListingInput::SelectCategory(None));
            assert!(!listing.is_rotating());
            assert!(!listing.dispatch(ListingInput::RotateCategory));
            assert_eq!(listing.category(), None);
        }

        #[test]
        fn manual_paging_stops_rotation() {
            let mut listing = Listing::new(catalogue(), DEFAULT_SHOPS_PER_PAGE, true);
            listing.dispatch(ListingInput::NextPage);
            assert!(!listing.is_rotating());
        }

        #[test]
        fn rotation_resets_the_page() {
            let mut listing = Listing::new(catalogue(), 2, true);
            listing.page = 1;
            listing.dispatch(ListingInput::RotateCategory);
            assert_eq!(listing.page(), 0);
        }
    }

    mod property_search {
        use super::*;

        #[test]
        fn matches_name_ignoring_case() {
            let mut listing = listing();
            listing.set_query("corner");
            let results = listing.search_results();
            let names: Vec<&str> = results.iter().map(|s| s.name.as_str()).collect();
            assert!(names.contains(&"Corner Market"));
            assert!(names.contains(&"Cafe Corner"));
        }

        #[test]
        fn matches_description() {
            let mut listing = listing();
            listing.set_query("TIRE SALES");
            let results = listing.search_results();
            assert!(!results.is_empty());
            assert!(results.iter().all(|s| s.name == "Tire Experts"));
        }

        #[test]
        fn ignores_the_category_filter() {
            let mut listing = listing();
            listing.dispatch(ListingInput::SelectCategory(Some(Category::Services)));
            listing.set_query("market");
            assert!(
                listing
                    .search_results()
                    .iter()
                    .any(|s| s.category == Category::Retail)
            );
        }

        #[test]
        fn no_match_is_empty() {
            let mut listing = listing();
            listing.set_query("submarine dealership");
            assert!(listing.search_results().is_empty());
        }

        #[test]
        fn blank_query_matches_nothing() {
            let mut listing = listing();
            listing.set_query("   ");
            assert!(listing.search_results().is_empty());
        }
    }
}
