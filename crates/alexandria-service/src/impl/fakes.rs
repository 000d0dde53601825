//! In-memory fakes and mocks shared by the service test modules.

use alexandria_client::{AuthorSearchPage, CatalogClient};
use alexandria_core::{AlexandriaError, AlexandriaResult, Author, AuthorKey, Work, WorkKey};
use alexandria_repository::{AuthorRepository, WorkRepository};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

mockall::mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogClient for Catalog {
        async fn search_authors(&self, name: &str) -> AlexandriaResult<Option<AuthorSearchPage>>;
        async fn author_works(&self, key: &AuthorKey) -> AlexandriaResult<Option<Value>>;
        async fn author_details(&self, key: &AuthorKey) -> AlexandriaResult<Option<Value>>;
    }
}

/// In-memory author repository that records every call.
pub struct FakeAuthorRepository {
    pub authors: Mutex<HashMap<AuthorKey, Author>>,
    pub saves: Mutex<Vec<Author>>,
    pub key_queries: Mutex<Vec<String>>,
    pub name_queries: Mutex<Vec<String>>,
    pub fail_saves: bool,
}

impl FakeAuthorRepository {
    pub fn new() -> Self {
        Self {
            authors: Mutex::new(HashMap::new()),
            saves: Mutex::new(Vec::new()),
            key_queries: Mutex::new(Vec::new()),
            name_queries: Mutex::new(Vec::new()),
            fail_saves: false,
        }
    }

    pub fn with_author(author: Author) -> Self {
        let repo = Self::new();
        repo.authors
            .lock()
            .unwrap()
            .insert(author.key.clone(), author);
        repo
    }

    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    pub fn saved_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn was_untouched(&self) -> bool {
        self.key_queries.lock().unwrap().is_empty()
            && self.name_queries.lock().unwrap().is_empty()
            && self.saves.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl AuthorRepository for FakeAuthorRepository {
    async fn find_by_key(&self, key: &AuthorKey) -> AlexandriaResult<Option<Author>> {
        self.key_queries
            .lock()
            .unwrap()
            .push(key.as_str().to_string());
        Ok(self.authors.lock().unwrap().get(key).cloned())
    }

    async fn find_by_name_contains(&self, fragment: &str) -> AlexandriaResult<Vec<Author>> {
        self.name_queries
            .lock()
            .unwrap()
            .push(fragment.to_string());
        let fragment = fragment.to_lowercase();
        let mut matched: Vec<Author> = self
            .authors
            .lock()
            .unwrap()
            .values()
            .filter(|a| {
                a.name
                    .as_ref()
                    .is_some_and(|n| n.to_lowercase().contains(&fragment))
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.key.as_str().cmp(b.key.as_str()))
        });
        Ok(matched)
    }

    async fn save(&self, author: &Author) -> AlexandriaResult<Author> {
        if self.fail_saves {
            return Err(AlexandriaError::Database("save failed".to_string()));
        }
        self.saves.lock().unwrap().push(author.clone());
        self.authors
            .lock()
            .unwrap()
            .insert(author.key.clone(), author.clone());
        Ok(author.clone())
    }
}

/// In-memory work repository that records every call.
pub struct FakeWorkRepository {
    pub works: Mutex<HashMap<WorkKey, Work>>,
    pub saves: Mutex<Vec<Work>>,
    pub author_queries: Mutex<Vec<String>>,
    pub fail_save_for: Option<WorkKey>,
}

impl FakeWorkRepository {
    pub fn new() -> Self {
        Self {
            works: Mutex::new(HashMap::new()),
            saves: Mutex::new(Vec::new()),
            author_queries: Mutex::new(Vec::new()),
            fail_save_for: None,
        }
    }

    pub fn with_work(work: Work) -> Self {
        let repo = Self::new();
        repo.works.lock().unwrap().insert(work.key.clone(), work);
        repo
    }

    pub fn failing_save_for(key: WorkKey) -> Self {
        Self {
            fail_save_for: Some(key),
            ..Self::new()
        }
    }

    pub fn saved_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn stored_count(&self) -> usize {
        self.works.lock().unwrap().len()
    }

    pub fn was_untouched(&self) -> bool {
        self.author_queries.lock().unwrap().is_empty()
            && self.saves.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl WorkRepository for FakeWorkRepository {
    async fn find_by_key(&self, key: &WorkKey) -> AlexandriaResult<Option<Work>> {
        Ok(self.works.lock().unwrap().get(key).cloned())
    }

    async fn find_by_author_key(&self, key: &AuthorKey) -> AlexandriaResult<Vec<Work>> {
        self.author_queries
            .lock()
            .unwrap()
            .push(key.as_str().to_string());
        let mut linked: Vec<Work> = self
            .works
            .lock()
            .unwrap()
            .values()
            .filter(|w| w.has_author(key))
            .cloned()
            .collect();
        linked.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.key.as_str().cmp(b.key.as_str()))
        });
        Ok(linked)
    }

    async fn save(&self, work: &Work) -> AlexandriaResult<Work> {
        if self.fail_save_for.as_ref() == Some(&work.key) {
            return Err(AlexandriaError::Database("save failed".to_string()));
        }
        self.saves.lock().unwrap().push(work.clone());
        self.works
            .lock()
            .unwrap()
            .insert(work.key.clone(), work.clone());
        Ok(work.clone())
    }
}
