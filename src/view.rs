//! List Projection
//!
//! Derives the visible page of rows from an inventory snapshot, the search
//! text and the requested page number.

use crate::models::Item;
use crate::store::Inventory;

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    /// Position of the item in the full inventory
    pub position: usize,
    pub item: Item,
}

/// The rows of one page plus pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<PageRow>,
    /// 1-based page being shown
    pub page: usize,
    /// ceil(matches / page_size); 0 when nothing matches
    pub total_pages: usize,
}

impl PageView {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Pagination label, e.g. `Trang 1 / 2`
    pub fn label(&self, prefix: &str) -> String {
        format!("{} {} / {}", prefix, self.page, self.total_pages)
    }
}

/// Items whose name contains `search`, ignoring case, paired with their position
pub fn filter_items<'a>(items: &'a [Item], search: &str) -> Vec<(usize, &'a Item)> {
    let needle = search.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Clamp a requested page to `[1, max(total, 1)]`
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1).max(1)
}

pub fn next_page(page: usize, total: usize) -> usize {
    (page + 1).min(total).max(1)
}

/// Build the visible page for the current inventory and view parameters
pub fn project(inventory: &Inventory, search: &str, page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let matches = filter_items(inventory.items(), search);
    let total = total_pages(matches.len(), page_size);
    let page = clamp_page(page, total);

    let rows = matches
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|(position, item)| PageRow {
            position,
            item: item.clone(),
        })
        .collect();

    PageView {
        rows,
        page,
        total_pages: total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Command;
    use proptest::prelude::*;

    fn inventory_of(names: &[&str]) -> Inventory {
        names.iter().enumerate().fold(Inventory::new(), |inv, (i, name)| {
            inv.apply(Command::Add(Item::new(*name, (i * 10).to_string())))
        })
    }

    fn names(view: &PageView) -> Vec<&str> {
        view.rows.iter().map(|row| row.item.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let inventory = inventory_of(&["Apple", "Banana", "Avocado"]);
        let view = project(&inventory, "av", 1, 3);
        assert_eq!(names(&view), ["Avocado"]);
        assert_eq!(view.rows[0].position, 2);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);

        let view = project(&inventory, "AN", 1, 3);
        assert_eq!(names(&view), ["Banana"]);
    }

    #[test]
    fn test_empty_search_matches_all() {
        let inventory = inventory_of(&["Apple", "Banana", "Avocado"]);
        let filtered: Vec<_> = filter_items(inventory.items(), "")
            .into_iter()
            .map(|(_, item)| item.clone())
            .collect();
        assert_eq!(filtered, inventory.items());
    }

    #[test]
    fn test_four_items_make_two_pages() {
        let inventory = inventory_of(&["A", "B", "C", "D"]);

        let first = project(&inventory, "", 1, 3);
        assert_eq!(names(&first), ["A", "B", "C"]);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let second = project(&inventory, "", 2, 3);
        assert_eq!(names(&second), ["D"]);
        assert_eq!(second.rows[0].position, 3);
        assert!(second.has_previous());
        assert!(!second.has_next());
    }

    #[test]
    fn test_no_matches_shows_page_one_of_zero() {
        let inventory = inventory_of(&["Apple"]);
        let view = project(&inventory, "kiwi", 1, 3);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.label("Trang"), "Trang 1 / 0");
        assert!(!view.has_next());
        assert!(!view.has_previous());
    }

    #[test]
    fn test_requested_page_is_clamped() {
        let inventory = inventory_of(&["Apple", "Banana", "Avocado", "Apricot"]);
        let view = project(&inventory, "", 5, 3);
        assert_eq!(view.page, 2);
        assert_eq!(project(&inventory, "", 0, 3).page, 1);
    }

    #[test]
    fn test_page_steps() {
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(3), 2);
        assert_eq!(next_page(1, 2), 2);
        assert_eq!(next_page(2, 2), 2);
        assert_eq!(next_page(1, 0), 1);
    }

    proptest! {
        #[test]
        fn prop_pages_cover_matches_once(
            names in prop::collection::vec("[a-cA-C]{1,4}", 0..20),
            search in "[abc]{0,2}",
            page_size in 1usize..5,
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let inventory = inventory_of(&refs);
            let expected = filter_items(inventory.items(), &search);
            let total = project(&inventory, &search, 1, page_size).total_pages;
            prop_assert_eq!(total, (expected.len() + page_size - 1) / page_size);

            let mut seen = Vec::new();
            for page in 1..=total {
                let view = project(&inventory, &search, page, page_size);
                prop_assert!(view.rows.len() <= page_size);
                seen.extend(view.rows.into_iter().map(|row| row.position));
            }
            let expected: Vec<usize> = expected.into_iter().map(|(position, _)| position).collect();
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn prop_filter_keeps_only_matches(
            names in prop::collection::vec("[a-zA-Z]{1,6}", 0..15),
            search in "[a-zA-Z]{0,2}",
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let inventory = inventory_of(&refs);
            let needle = search.to_lowercase();
            let kept: Vec<usize> = filter_items(inventory.items(), &search)
                .into_iter()
                .map(|(position, _)| position)
                .collect();
            for (position, item) in inventory.items().iter().enumerate() {
                let matches = item.name.to_lowercase().contains(&needle);
                prop_assert_eq!(kept.contains(&position), matches);
            }
            prop_assert!(kept.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
