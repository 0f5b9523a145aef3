//! Static portfolio catalogue and the category filter behind the
//! portfolio page's filter chips.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Aerial,
    Macro,
    Food,
    FineArt,
    Legal,
    Mapping,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Aerial,
        Category::Macro,
        Category::Food,
        Category::FineArt,
        Category::Legal,
        Category::Mapping,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Aerial => "Aerial",
            Category::Macro => "Macro",
            Category::Food => "Food",
            Category::FineArt => "Fine-Art",
            Category::Legal => "Legal",
            Category::Mapping => "Mapping",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub services: &'static [&'static str],
    pub equipment: &'static [&'static str],
    pub outcome: &'static str,
    pub media: &'static str,
    pub media_kind: MediaKind,
}

pub static PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        id: 1,
        title: "Luxury Estate Aerial",
        category: Category::Aerial,
        services: &["Aerial Marketing"],
        equipment: &["DJI Mavic 3 Pro", "4K Video"],
        outcome: "Sold 40% above asking price",
        media: "/img/portfolio/aerial-1.jpg",
        media_kind: MediaKind::Image,
    },
    PortfolioItem {
        id: 2,
        title: "Construction Progress",
        category: Category::Aerial,
        services: &["Inspections"],
        equipment: &["DJI Phantom 4 Pro", "Progress Mapping"],
        outcome: "Saved 3 weeks site visits",
        media: "/img/portfolio/construction-1.jpg",
        media_kind: MediaKind::Video,
    },
    PortfolioItem {
        id: 3,
        title: "Fine Dining Presentation",
        category: Category::Food,
        services: &["Studio Photography"],
        equipment: &["Canon R5", "Macro Lens"],
        outcome: "300% increase in orders",
        media: "/img/portfolio/food-1.jpg",
        media_kind: MediaKind::Image,
    },
    PortfolioItem {
        id: 4,
        title: "Product Macro Detail",
        category: Category::Macro,
        services: &["Studio Photography"],
        equipment: &["Focus Stacking", "High-Res"],
        outcome: "Featured in campaign",
        media: "/img/portfolio/macro-1.jpg",
        media_kind: MediaKind::Image,
    },
];

/// Selected filter chip. `All` is the sentinel that disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == "All" {
            return Some(CategoryFilter::All);
        }
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .map(CategoryFilter::Only)
    }

    /// Chips in display order, `All` first.
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }
}

pub fn filter_items(items: &[PortfolioItem], filter: CategoryFilter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Filters by a chip label. Labels outside the category set match nothing.
pub fn filter_by_label<'a>(items: &'a [PortfolioItem], label: &str) -> Vec<&'a PortfolioItem> {
    match CategoryFilter::from_label(label) {
        Some(filter) => filter_items(items, filter),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&PortfolioItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn all_returns_every_item_in_order() {
        let shown = filter_items(PORTFOLIO_ITEMS, CategoryFilter::All);
        assert_eq!(ids(&shown), vec![1, 2, 3, 4]);
    }

    #[test]
    fn aerial_keeps_first_two_in_order() {
        let shown = filter_by_label(PORTFOLIO_ITEMS, "Aerial");
        assert_eq!(ids(&shown), vec![1, 2]);
    }

    #[test]
    fn category_without_items_is_empty() {
        assert!(filter_by_label(PORTFOLIO_ITEMS, "Legal").is_empty());
        assert!(filter_items(PORTFOLIO_ITEMS, CategoryFilter::Only(Category::Mapping)).is_empty());
    }

    #[test]
    fn unknown_label_is_empty() {
        assert!(filter_by_label(PORTFOLIO_ITEMS, "Weddings").is_empty());
        assert!(filter_by_label(PORTFOLIO_ITEMS, "aerial").is_empty());
    }

    #[test]
    fn every_category_yields_exactly_its_subsequence() {
        for category in Category::ALL {
            let shown = filter_items(PORTFOLIO_ITEMS, CategoryFilter::Only(category));
            let expected: Vec<&PortfolioItem> = PORTFOLIO_ITEMS
                .iter()
                .filter(|item| item.category == category)
                .collect();
            assert_eq!(shown, expected, "category {}", category.label());
        }
    }

    #[test]
    fn interleaved_categories_preserve_relative_order() {
        let mut items = PORTFOLIO_ITEMS.to_vec();
        items.swap(0, 2);
        // now: Food(3), Aerial(2), Aerial(1), Macro(4)
        let shown = filter_items(&items, CategoryFilter::Only(Category::Aerial));
        assert_eq!(ids(&shown), vec![2, 1]);
    }

    #[test]
    fn chips_are_in_display_order() {
        let labels: Vec<&str> = CategoryFilter::chips().map(CategoryFilter::label).collect();
        assert_eq!(labels, ["All", "Aerial", "Macro", "Food", "Fine-Art", "Legal", "Mapping"]);
    }
}
