//! Keyword search over task descriptions.

use ontrack_core::{Error, Result, Task};
use tracing::debug;

/// Task search service.
pub struct TaskSearch;

impl TaskSearch {
    /// Create a new task search service.
    pub fn new() -> Self {
        Self
    }

    /// Find the tasks whose description contains `keyword`.
    ///
    /// Matching is case-insensitive substring containment, so an empty
    /// keyword matches every task. Results keep input order. Every task
    /// in `tasks` must carry a description; the scan fails on the first
    /// task without one, matched or not.
    pub fn search_tasks(&self, tasks: &[Task], keyword: &str) -> Result<Vec<Task>> {
        let keyword = keyword.to_lowercase();
        let mut matches = Vec::new();

        for task in tasks {
            let description = task.description.as_deref().ok_or_else(|| {
                Error::MissingDescription {
                    id: task.id.clone(),
                }
            })?;

            if description.to_lowercase().contains(&keyword) {
                matches.push(task.clone());
            }
        }

        debug!(
            "Search for {:?} matched {} of {} tasks",
            keyword,
            matches.len(),
            tasks.len()
        );

        Ok(matches)
    }
}

impl Default for TaskSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_task(id: &str, description: &str) -> Task {
        Task::with_description(id, format!("Task {id}"), description)
    }

    #[test]
    fn test_search_tasks_with_keyword() {
        let tasks = vec![
            create_task("1", "This is a task about Java"),
            create_task("2", "This is another task"),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Java").unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description.as_deref(), Some("This is a task about Java"));
    }

    #[test]
    fn test_search_tasks_case_insensitive() {
        let tasks = vec![
            create_task("1", "This is a task about Java"),
            create_task("2", "This is another task"),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "java").unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "1");
    }

    #[test]
    fn test_search_empty_task_list() {
        let search = TaskSearch::new();

        let result = search.search_tasks(&[], "Java").unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_search_matches_inside_words() {
        let tasks = vec![create_task("1", "JavaPython")];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Java").unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description.as_deref(), Some("JavaPython"));
    }

    #[test]
    fn test_search_no_match() {
        let tasks = vec![
            create_task("1", "This is a task about Java"),
            create_task("2", "This is another task"),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Ruby").unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_search_distinct_keywords() {
        let tasks = vec![
            create_task("1", "This is a task about Java"),
            create_task("2", "This is a task about Python"),
            create_task("3", "This is another task"),
        ];
        let search = TaskSearch::new();

        let java = search.search_tasks(&tasks, "Java").unwrap();
        let python = search.search_tasks(&tasks, "Python").unwrap();

        assert_eq!(java.len(), 1);
        assert_eq!(java[0].id.as_str(), "1");
        assert_eq!(python.len(), 1);
        assert_eq!(python[0].id.as_str(), "2");
    }

    #[test]
    fn test_search_keyword_with_punctuation() {
        let tasks = vec![
            create_task("1", "This is a task about Java!"),
            create_task("2", "This is another task"),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Java!").unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "1");
    }

    #[test]
    fn test_search_empty_keyword_matches_all() {
        let tasks = vec![
            create_task("1", "This is a task about Java"),
            create_task("2", "This is another task"),
            create_task("3", ""),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "").unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].id.as_str(), "1");
        assert_eq!(result[1].id.as_str(), "2");
        assert_eq!(result[2].id.as_str(), "3");
    }

    #[test]
    fn test_search_preserves_input_order() {
        let tasks = vec![
            create_task("3", "Java basics"),
            create_task("1", "Advanced Java"),
            create_task("2", "No match here"),
            create_task("4", "More Java"),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Java").unwrap();

        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "4"]);
    }

    #[test]
    fn test_search_missing_description_fails() {
        let tasks = vec![
            create_task("1", "This is a task about Java"),
            Task::new("2", "Task 2"),
        ];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Java");

        assert_eq!(
            result.unwrap_err(),
            Error::MissingDescription { id: "2".into() }
        );
    }

    #[test]
    fn test_search_missing_description_fails_without_match() {
        // The scan checks every description, so a bare task poisons
        // searches whose keyword it could never match.
        let tasks = vec![Task::new("1", "Task 1")];
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Ruby");

        assert!(matches!(
            result,
            Err(Error::MissingDescription { .. })
        ));
    }

    #[test]
    fn test_search_large_number_of_tasks() {
        let tasks: Vec<Task> = (1..=1000)
            .map(|i| create_task(&i.to_string(), &format!("Task {i} about Java")))
            .collect();
        let search = TaskSearch::new();

        let result = search.search_tasks(&tasks, "Java").unwrap();

        assert_eq!(result.len(), 1000);
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let tasks = vec![create_task("1", "This is a task about Java")];
        let search = TaskSearch::new();

        let mut result = search.search_tasks(&tasks, "Java").unwrap();
        result[0].content = "changed".to_string();

        assert_eq!(tasks[0].content, "Task 1");
    }
}
