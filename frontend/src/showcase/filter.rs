use super::project::{Category, Project};

/// Order-preserving subsequence of `catalog` matching `selected`.
pub fn apply(catalog: &[Project], selected: Category) -> Vec<Project> {
    catalog
        .iter()
        .filter(|project| matches(project, selected))
        .cloned()
        .collect()
}

/// Number of projects a filter button would show.
pub fn count(catalog: &[Project], selected: Category) -> usize {
    catalog.iter().filter(|project| matches(project, selected)).count()
}

fn matches(project: &Project, selected: Category) -> bool {
    selected == Category::All || project.category == selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::showcase::project::sample;

    fn catalog() -> Vec<Project> {
        vec![
            sample("a", Category::Webdev),
            sample("b", Category::Mobile),
            sample("c", Category::Shopify),
            sample("d", Category::Mobile),
            sample("e", Category::Github),
        ]
    }

    #[test]
    fn all_returns_catalog_unchanged() {
        let catalog = catalog();
        assert_eq!(apply(&catalog, Category::All), catalog);
    }

    #[test]
    fn every_filter_yields_ordered_matching_subsequence() {
        let catalog = catalog();
        for category in Category::FILTERS {
            let filtered = apply(&catalog, category);
            assert!(filtered
                .iter()
                .all(|p| category == Category::All || p.category == category));

            // subsequence check: walk the catalog once
            let mut cursor = catalog.iter();
            for project in &filtered {
                assert!(cursor.any(|c| c == project), "{} out of order", project.name);
            }
            assert_eq!(filtered.len(), count(&catalog, category));
        }
    }

    #[test]
    fn mobile_keeps_original_order() {
        let names: Vec<_> = apply(&catalog(), Category::Mobile)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["b", "d"]);
    }

    #[test]
    fn empty_result_is_valid() {
        assert!(apply(&catalog(), Category::Dotnet).is_empty());
        assert_eq!(count(&catalog(), Category::Dotnet), 0);
        assert_eq!(count(&catalog(), Category::All), 5);
    }
}
