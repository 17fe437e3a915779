//! Category, search, and sort selection over the project catalog.
//!
//! Selection is pure and synchronous; views hold a [`FilterMemo`] so that
//! calling it every frame only recomputes when the criteria change.

use shared::domain::Project;

use crate::ALL_CATEGORY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Source order of the catalog, most recent work first.
    #[default]
    Recency,
    Title,
    Category,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Recency, SortMode::Title, SortMode::Category];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Recency => "Most recent",
            SortMode::Title => "Title",
            SortMode::Category => "Category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: String,
    pub query: String,
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            query: String::new(),
            sort: SortMode::default(),
        }
    }
}

/// Indices into `projects` selected by `criteria`, in presentation order.
///
/// Category filtering keeps everything under the "All" sentinel and matches
/// by exact equality otherwise; an unknown selection yields an empty result.
/// The search query is matched case-insensitively against title, description
/// and tool tags. Sorting is stable, so ties keep catalog order.
pub fn select_indices(projects: &[Project], criteria: &FilterCriteria) -> Vec<usize> {
    let query = criteria.query.to_lowercase();
    let mut selected: Vec<usize> = projects
        .iter()
        .enumerate()
        .filter(|(_, project)| matches_category(project, &criteria.category))
        .filter(|(_, project)| query.is_empty() || matches_query(project, &query))
        .map(|(index, _)| index)
        .collect();

    match criteria.sort {
        SortMode::Recency => {}
        SortMode::Title => {
            selected.sort_by(|a, b| projects[*a].title.cmp(&projects[*b].title));
        }
        SortMode::Category => {
            selected.sort_by(|a, b| projects[*a].category.cmp(&projects[*b].category));
        }
    }
    selected
}

/// Borrowing convenience over [`select_indices`].
pub fn select<'a>(projects: &'a [Project], criteria: &FilterCriteria) -> Vec<&'a Project> {
    select_indices(projects, criteria)
        .into_iter()
        .map(|index| &projects[index])
        .collect()
}

fn matches_category(project: &Project, category: &str) -> bool {
    category == ALL_CATEGORY || project.category == category
}

// `query` must already be lowercased and non-empty.
fn matches_query(project: &Project, query: &str) -> bool {
    project.title.to_lowercase().contains(query)
        || project.description.to_lowercase().contains(query)
        || project
            .tools
            .iter()
            .any(|tool| tool.to_lowercase().contains(query))
}

/// Cache of the last selection, keyed on the whole criteria value.
#[derive(Debug, Default)]
pub struct FilterMemo {
    key: Option<FilterCriteria>,
    indices: Vec<usize>,
    recomputes: u64,
}

impl FilterMemo {
    pub fn resolve<'a>(
        &mut self,
        projects: &'a [Project],
        criteria: &FilterCriteria,
    ) -> Vec<&'a Project> {
        if self.key.as_ref() != Some(criteria) {
            self.indices = select_indices(projects, criteria);
            self.key = Some(criteria.clone());
            self.recomputes += 1;
            tracing::debug!(
                category = %criteria.category,
                query = %criteria.query,
                sort = ?criteria.sort,
                matched = self.indices.len(),
                "project selection recomputed"
            );
        }
        self.indices.iter().map(|&index| &projects[index]).collect()
    }

    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod filter_tests;
