use api::portfolio::PortfolioItem;

// shipped with the app so the landing page and the portfolio still have
// something to show when the portfolio_items table is empty or unreachable
pub fn sample_catalog() -> Vec<PortfolioItem> {
    vec![
        sample(
            "logo-aurora",
            "Aurora Wordmark",
            "Sarah Chen",
            "Logo Design",
            "https://images.unsplash.com/photo-1626785774573-4b799315345d",
            299.0,
            "A flowing wordmark for a boutique skincare label.",
            &["minimal", "wordmark"],
        ),
        sample(
            "logo-summit",
            "Summit Monogram",
            "Marcus Johnson",
            "Logo Design",
            "https://images.unsplash.com/photo-1634942537034-2531766767d1",
            349.0,
            "Geometric monogram for an outdoor gear co-op.",
            &["geometric", "monogram"],
        ),
        sample(
            "logo-harbor",
            "Harbor Badge",
            "Elena Rodriguez",
            "Logo Design",
            "https://images.unsplash.com/photo-1599305445671-ac291c95aaa9",
            279.0,
            "Vintage badge logo for a seaside coffee roaster.",
            &["vintage", "badge"],
        ),
        sample(
            "logo-pulse",
            "Pulse Mark",
            "David Kim",
            "Logo Design",
            "https://images.unsplash.com/photo-1611162617474-5b21e879e113",
            319.0,
            "Bold abstract symbol for a fitness startup.",
            &["abstract", "bold"],
        ),
        sample(
            "web-lumen",
            "Lumen Studio Site",
            "Aisha Patel",
            "Web Design",
            "https://images.unsplash.com/photo-1547658719-da2b51169166",
            1499.0,
            "Portfolio site for an architecture practice.",
            &["portfolio", "responsive"],
        ),
        sample(
            "web-fern",
            "Fern & Co Storefront",
            "James Wilson",
            "Web Design",
            "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d",
            1899.0,
            "Online shop for a plant nursery, built for mobile first.",
            &["e-commerce"],
        ),
        sample(
            "brand-oak",
            "Oak Street Identity",
            "Sarah Chen",
            "Brand Identity",
            "https://images.unsplash.com/photo-1634942536790-dad8f3c0d71b",
            2499.0,
            "Full identity system for a neighbourhood bakery.",
            &["identity", "guidelines"],
        ),
        sample(
            "ux-tempo",
            "Tempo Banking App",
            "David Kim",
            "UI/UX Design",
            "https://images.unsplash.com/photo-1581291518857-4e27b48ff24e",
            2999.0,
            "Onboarding and dashboard flows for a budgeting app.",
            &["mobile", "fintech"],
        ),
        sample(
            "illustration-tide",
            "Tide Pool Series",
            "Elena Rodriguez",
            "Illustration",
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe",
            599.0,
            "Editorial illustrations for a marine conservation report.",
            &["editorial"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    designer: &str,
    category: &str,
    image_url: &str,
    price: f64,
    description: &str,
    tags: &[&str],
) -> PortfolioItem {
    PortfolioItem {
        id: id.to_owned(),
        title: title.to_owned(),
        designer: designer.to_owned(),
        category: category.to_owned(),
        image_url: image_url.to_owned(),
        is_liked: Some(false),
        description: Some(description.to_owned()),
        price: Some(price),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        features: Some(vec![
            "Two rounds of revisions".to_owned(),
            "Source files included".to_owned(),
        ]),
    }
}

// distinct categories, in the order they first appear
pub fn categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

pub fn filter_by_category(items: &[PortfolioItem], category: Option<&str>) -> Vec<PortfolioItem> {
    items
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::style_modal::candidates;

    #[test]
    fn ids_are_unique() {
        let items = sample_catalog();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn logo_samples_have_alternatives() {
        let items = sample_catalog();
        assert_eq!(candidates(&items, &items[0]).len(), 3);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let items = sample_catalog();
        assert_eq!(
            categories(&items),
            [
                "Logo Design",
                "Web Design",
                "Brand Identity",
                "UI/UX Design",
                "Illustration"
            ]
        );
    }

    #[test]
    fn filtering() {
        let items = sample_catalog();

        assert_eq!(filter_by_category(&items, None).len(), items.len());
        assert_eq!(filter_by_category(&items, Some("Web Design")).len(), 2);
        assert!(filter_by_category(&items, Some("Pottery")).is_empty());
    }
}
