use std::hash::Hash;

/// A fixed set of coarse tags an item belongs to.
pub trait Category: Copy + PartialEq + Eq + Hash + 'static {
    const ALL: &'static [Self];

    fn slug(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

/// Anything that can be shown in a filtered listing.
pub trait Listable {
    type Category: Category;

    fn category(&self) -> Self::Category;
    fn title(&self) -> &str;
    /// Tags matched by the query besides the title: tech stack or skills.
    fn tags(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C: Category> CategoryFilter<C> {
    pub const ALL_SLUG: &'static str = "all";

    pub fn parse(slug: &str) -> Option<Self> {
        if slug == Self::ALL_SLUG {
            Some(Self::All)
        } else {
            C::from_slug(slug).map(Self::Only)
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_SLUG,
            Self::Only(c) => c.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(c) => c.label(),
        }
    }

    /// "All" followed by every category, in declaration order.
    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(C::ALL.iter().copied().map(Self::Only))
    }

    pub fn accepts(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

/// Visible subset of a collection, in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> Listing<'a, T> {
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// No item matched; callers render the "no results" state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn matches_query<T: Listable>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title().to_lowercase().contains(needle)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Items in `category` whose title or any tag contains `query`,
/// case-insensitively. A blank query matches everything.
pub fn filter_items<'a, T, I>(
    items: I,
    category: CategoryFilter<T::Category>,
    query: &str,
) -> Listing<'a, T>
where
    T: Listable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.trim().to_lowercase();
    let items = items
        .into_iter()
        .filter(|item| category.accepts(item.category()))
        .filter(|item| matches_query(*item, &needle))
        .collect();
    Listing { items }
}

/// Number of items per category, in `Category::ALL` order.
pub fn category_counts<'a, T, I>(items: I) -> Vec<(T::Category, usize)>
where
    T: Listable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts = T::Category::ALL
        .iter()
        .map(|c| (*c, 0usize))
        .collect::<Vec<_>>();
    for item in items {
        if let Some(entry) = counts.iter_mut().find(|(c, _)| *c == item.category()) {
            entry.1 += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Certificate, CertificateCategory, Project, ProjectCategory, TechStack};
    use chrono::NaiveDate;

    fn project(id: &str, title: &str, category: ProjectCategory, tags: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category,
            tech_stack: TechStack::Flat(tags.iter().map(|s| s.to_string()).collect()),
            images: Vec::new(),
            github: None,
            live: None,
            features: Vec::new(),
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("1", "KostHunt", ProjectCategory::Web, &["React", "Redux"]),
            project("2", "Kelompro", ProjectCategory::Android, &["Kotlin"]),
        ]
    }

    fn titles<T: Listable>(listing: &Listing<'_, T>) -> Vec<String> {
        listing
            .items()
            .iter()
            .map(|i| i.title().to_string())
            .collect()
    }

    #[test]
    fn test_example_queries() {
        let items = sample();

        let web = filter_items(&items, CategoryFilter::Only(ProjectCategory::Web), "");
        assert_eq!(titles(&web), vec!["KostHunt"]);

        let kotlin = filter_items(&items, CategoryFilter::All, "kotlin");
        assert_eq!(titles(&kotlin), vec!["Kelompro"]);

        let desktop = filter_items(&items, CategoryFilter::Only(ProjectCategory::Desktop), "");
        assert!(desktop.is_empty());
        assert_eq!(desktop.count(), 0);
    }

    #[test]
    fn test_all_and_empty_query_returns_everything_in_order() {
        let items = sample();
        let listing = filter_items(&items, CategoryFilter::All, "");
        assert_eq!(listing.count(), items.len());
        for (got, want) in listing.items().iter().zip(items.iter()) {
            assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn test_case_insensitive() {
        let items = sample();
        let listing = filter_items(&items, CategoryFilter::All, "REACT");
        assert_eq!(titles(&listing), vec!["KostHunt"]);

        let listing = filter_items(&items, CategoryFilter::All, "kOsThUnT");
        assert_eq!(titles(&listing), vec!["KostHunt"]);
    }

    #[test]
    fn test_substring_on_title_and_tags() {
        let items = sample();
        assert_eq!(
            titles(&filter_items(&items, CategoryFilter::All, "kel")),
            vec!["Kelompro"]
        );
        assert_eq!(
            titles(&filter_items(&items, CategoryFilter::All, "dux")),
            vec!["KostHunt"]
        );
        // both titles start with K
        assert_eq!(filter_items(&items, CategoryFilter::All, "k").count(), 2);
    }

    #[test]
    fn test_blank_query_is_empty() {
        let items = sample();
        assert_eq!(filter_items(&items, CategoryFilter::All, "   ").count(), 2);
        assert_eq!(
            titles(&filter_items(&items, CategoryFilter::All, "  kotlin ")),
            vec!["Kelompro"]
        );
    }

    #[test]
    fn test_category_and_query_combine() {
        let items = sample();
        let listing = filter_items(&items, CategoryFilter::Only(ProjectCategory::Web), "kotlin");
        assert!(listing.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let items = sample();
        let cases = [
            (CategoryFilter::All, ""),
            (CategoryFilter::All, "k"),
            (CategoryFilter::Only(ProjectCategory::Web), "react"),
            (CategoryFilter::Only(ProjectCategory::Android), ""),
            (CategoryFilter::Only(ProjectCategory::Desain), "x"),
        ];
        for (category, query) in cases {
            let once = filter_items(&items, category, query);
            let twice = filter_items(once.items().iter().copied(), category, query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_source_untouched() {
        let items = sample();
        let before = items.clone();
        let _ = filter_items(&items, CategoryFilter::Only(ProjectCategory::Web), "react");
        assert_eq!(items, before);
    }

    #[test]
    fn test_certificates_match_skills() {
        let certs = vec![Certificate {
            id: "c1".to_string(),
            title: "Responsive Web Design".to_string(),
            issuer: "freeCodeCamp".to_string(),
            category: CertificateCategory::Frontend,
            skills: vec!["HTML".to_string(), "Flexbox".to_string()],
            issue_date: NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
            description: String::new(),
            featured: false,
            credential_url: None,
        }];
        assert_eq!(filter_items(&certs, CategoryFilter::All, "flex").count(), 1);
        assert!(filter_items(&certs, CategoryFilter::Only(CertificateCategory::Cloud), "").is_empty());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(
            CategoryFilter::<ProjectCategory>::parse("all"),
            Some(CategoryFilter::All)
        );
        assert_eq!(
            CategoryFilter::parse("desain"),
            Some(CategoryFilter::Only(ProjectCategory::Desain))
        );
        assert_eq!(CategoryFilter::<ProjectCategory>::parse("Web"), None);
        assert_eq!(CategoryFilter::<ProjectCategory>::parse("games"), None);

        let slugs = CategoryFilter::<ProjectCategory>::options()
            .map(|c| c.slug())
            .collect::<Vec<_>>();
        assert_eq!(slugs, vec!["all", "web", "mobile", "desktop", "android", "desain"]);
    }

    #[test]
    fn test_category_counts() {
        let items = sample();
        let counts = category_counts(&items);
        assert_eq!(counts.len(), ProjectCategory::ALL.len());
        assert!(counts.contains(&(ProjectCategory::Web, 1)));
        assert!(counts.contains(&(ProjectCategory::Android, 1)));
        assert!(counts.contains(&(ProjectCategory::Desktop, 0)));
    }
}
