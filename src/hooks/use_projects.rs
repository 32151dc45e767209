//! Reactive project-fetch hook.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SupabaseClient;
use crate::hooks::request::RequestSequence;
use crate::types::{Project, ProjectCategory};

/// Fixed message shown when the gateway read fails outright.
pub const PROJECTS_LOAD_ERROR: &str = "Erro ao carregar projetos. Tente novamente.";

/// Query options for [`use_projects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectQuery {
    /// Fetch only projects flagged for the landing page.
    pub featured_only: bool,
    /// Client-side category filter applied after the read.
    pub category: Option<ProjectCategory>,
}

impl ProjectQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn featured() -> Self {
        Self {
            featured_only: true,
            category: None,
        }
    }

    pub fn in_category(category: Option<ProjectCategory>) -> Self {
        Self {
            featured_only: false,
            category,
        }
    }
}

/// Signals returned by [`use_projects`].
#[derive(Clone, Copy)]
pub struct UseProjects {
    /// `None` until the first read completes.
    pub data: Signal<Option<Vec<Project>>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Fetches project records and keeps `{data, loading, error}` in step
/// with the *latest* options produced by `query`.
///
/// The query closure runs inside a tracking effect, so any signal it
/// reads re-runs the fetch. Overlapping fetches are resolved
/// latest-wins through a sequence token; teardown invalidates the
/// sequence so an in-flight response cannot mutate disposed state.
pub fn use_projects(
    query: impl Fn() -> ProjectQuery + Send + Sync + 'static,
) -> UseProjects {
    let client = expect_context::<SupabaseClient>();

    let data = RwSignal::new(Option::<Vec<Project>>::None);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let sequence = RequestSequence::new();
    on_cleanup({
        let sequence = sequence.clone();
        move || sequence.invalidate()
    });

    Effect::new(move |_| {
        let options = query();
        let token = sequence.begin();
        let client = client.clone();

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let result = if options.featured_only {
                client.featured_projects().await
            } else {
                client.projects().await
            };

            // A newer invocation (or teardown) superseded this one:
            // drop the response on the floor.
            if !token.is_current() {
                return;
            }

            match result {
                Ok(projects) => {
                    data.set(Some(filter_by_category(projects, options.category)));
                }
                Err(err) => {
                    tracing::error!("failed to load projects: {err}");
                    error.set(Some(PROJECTS_LOAD_ERROR.to_string()));
                }
            }
            loading.set(false);
        });
    });

    UseProjects {
        data: data.into(),
        loading: loading.into(),
        error: error.into(),
    }
}

/// Keeps only projects in `category`, preserving order. `None` passes
/// the list through untouched.
fn filter_by_category(
    projects: Vec<Project>,
    category: Option<ProjectCategory>,
) -> Vec<Project> {
    match category {
        Some(category) => projects
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
        None => projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn project(id: &str, category: ProjectCategory) -> Project {
        Project {
            id: id.to_string(),
            title: format!("project {id}"),
            description: "desc".into(),
            long_description: None,
            stack: vec!["Docker".into()],
            category,
            github_url: None,
            demo_url: None,
            image_url: None,
            featured: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn no_category_returns_all_unchanged() {
        let list = vec![
            project("1", ProjectCategory::Devops),
            project("2", ProjectCategory::Backend),
            project("3", ProjectCategory::Devops),
        ];
        let out = filter_by_category(list.clone(), None);
        assert_eq!(out, list);
    }

    #[rstest]
    #[case(ProjectCategory::Devops, &["1", "3"])]
    #[case(ProjectCategory::Backend, &["2"])]
    #[case(ProjectCategory::Fullstack, &[])]
    fn category_filter_keeps_matches_in_order(
        #[case] category: ProjectCategory,
        #[case] expected_ids: &[&str],
    ) {
        let list = vec![
            project("1", ProjectCategory::Devops),
            project("2", ProjectCategory::Backend),
            project("3", ProjectCategory::Devops),
        ];
        let out = filter_by_category(list, Some(category));
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected_ids);
    }

    #[test]
    fn query_constructors_cover_the_three_shapes() {
        assert_eq!(
            ProjectQuery::all(),
            ProjectQuery {
                featured_only: false,
                category: None
            }
        );
        assert!(ProjectQuery::featured().featured_only);
        assert_eq!(
            ProjectQuery::in_category(Some(ProjectCategory::Frontend)).category,
            Some(ProjectCategory::Frontend)
        );
    }
}
