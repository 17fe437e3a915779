use std::{collections::HashSet, fs, path::Path};

use anyhow::{anyhow, Context, Result};

use shared::domain::{Project, ProjectId};

pub mod filter;

/// Category sentinel meaning "no category filter".
pub const ALL_CATEGORY: &str = "All";

const BUNDLED_PROJECTS_JSON: &str = include_str!("../data/projects.json");

/// Immutable project catalog. Loaded once at startup, ordered most recent
/// first, and shared read-only after that.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_PROJECTS_JSON).context("bundled project catalog is invalid")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading project catalog from {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("parsing project catalog from {}", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let projects: Vec<Project> =
            serde_json::from_str(raw).context("project catalog is not valid JSON")?;
        Self::from_projects(projects)
    }

    pub fn from_projects(projects: Vec<Project>) -> Result<Self> {
        validate_projects(&projects)?;
        tracing::debug!(count = projects.len(), "project catalog loaded");
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Resolve one project by id. Absence is an expected outcome and drives
    /// the not-found page, so it is not an error.
    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    /// Selectable categories: the "All" sentinel followed by the distinct
    /// project categories in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for project in &self.projects {
            if !categories.iter().any(|known| known == &project.category) {
                categories.push(project.category.clone());
            }
        }
        categories
    }
}

fn validate_projects(projects: &[Project]) -> Result<()> {
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(projects.len());
    for project in projects {
        if project.id.as_str().trim().is_empty() {
            return Err(anyhow!("project {:?} has an empty id", project.title));
        }
        if !seen_ids.insert(project.id.as_str()) {
            return Err(anyhow!("duplicate project id {:?}", project.id.as_str()));
        }
        if project.title.trim().is_empty() {
            return Err(anyhow!("project {} has an empty title", project.id));
        }
        if project.category.trim().is_empty() {
            return Err(anyhow!("project {} has an empty category", project.id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod lib_tests;
