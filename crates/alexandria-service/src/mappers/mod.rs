//! Entity-DTO mappers.

use crate::dto::{AuthorSummary, WorkSummary};
use alexandria_core::{Author, Work};

impl From<&Author> for AuthorSummary {
    fn from(author: &Author) -> Self {
        Self {
            author_id: author.key.as_str().to_string(),
            author_name: author.name.clone(),
        }
    }
}

impl From<Author> for AuthorSummary {
    fn from(author: Author) -> Self {
        Self::from(&author)
    }
}

impl From<&Work> for WorkSummary {
    fn from(work: &Work) -> Self {
        Self {
            work_id: work.key.as_str().to_string(),
            title: work.title.clone(),
            description: work.description.clone(),
            subjects: work.subjects.clone(),
            covers: work.covers.clone(),
            authors: work.authors.iter().map(AuthorSummary::from).collect(),
        }
    }
}

impl From<Work> for WorkSummary {
    fn from(work: Work) -> Self {
        Self::from(&work)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alexandria_core::{AuthorKey, WorkKey};

    #[test]
    fn test_author_summary_carries_canonical_id() {
        let author = Author::new(AuthorKey::new("OL1A").unwrap(), Some("A".to_string()));
        let summary = AuthorSummary::from(&author);
        assert_eq!(summary.author_id, "/authors/OL1A");
        assert_eq!(summary.author_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_author_summary_without_name() {
        let author = Author::new(AuthorKey::new("OL1A").unwrap(), None);
        let summary = AuthorSummary::from(&author);
        assert!(summary.author_name.is_none());
    }

    #[test]
    fn test_work_summary_maps_all_fields() {
        let work = Work::builder(WorkKey::new("/works/OL1W").unwrap())
            .title("Use of Weapons")
            .description(Some("A Culture novel.".to_string()))
            .subjects(vec!["Science fiction".to_string()])
            .covers(vec![7, 8])
            .author(Author::new(
                AuthorKey::new("OL1A").unwrap(),
                Some("Iain M. Banks".to_string()),
            ))
            .build();

        let summary = WorkSummary::from(&work);
        assert_eq!(summary.work_id, "/works/OL1W");
        assert_eq!(summary.title, "Use of Weapons");
        assert_eq!(summary.description.as_deref(), Some("A Culture novel."));
        assert_eq!(summary.subjects, vec!["Science fiction"]);
        assert_eq!(summary.covers, vec![7, 8]);
        assert_eq!(summary.authors.len(), 1);
        assert_eq!(summary.authors[0].author_id, "/authors/OL1A");
    }

    #[test]
    fn test_work_summary_preserves_author_link_order() {
        let mut work = Work::new(WorkKey::new("/works/OL1W").unwrap(), "T");
        work.link_author(Author::new(AuthorKey::new("OL2A").unwrap(), None));
        work.link_author(Author::new(AuthorKey::new("OL1A").unwrap(), None));

        let summary = WorkSummary::from(&work);
        let ids: Vec<&str> = summary.authors.iter().map(|a| a.author_id.as_str()).collect();
        assert_eq!(ids, vec!["/authors/OL2A", "/authors/OL1A"]);
    }
}
