#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared mocks for the pipeline tests: a scripted AI provider that records
//! its calls, and in-memory stand-ins for the persistence collaborators.

use anyhow::anyhow;
use async_trait::async_trait;
use dotenvy::dotenv;
use linkstash::catalog::{BookmarkStore, CatalogError, CategoryCatalog, TagCatalog};
use linkstash::providers::ai::AiProvider;
use linkstash::types::Category;
use linkstash::PromptError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        tracing_subscriber::fmt::init();
    });
}

// --- Mock AI Provider for Logic Testing ---

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_history.read().unwrap().len()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

// --- In-memory persistence collaborators ---

#[derive(Debug, Default)]
pub struct MemoryCategoryCatalog {
    pub categories: Vec<Category>,
}

impl MemoryCategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryCatalog for MemoryCategoryCatalog {
    async fn list_all(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}

/// Tag upsert backed by a map; names listed in `poisoned` fail every call,
/// simulating a backend conflict.
#[derive(Debug, Default)]
pub struct MemoryTagCatalog {
    state: Mutex<TagState>,
    pub poisoned: HashSet<String>,
}

#[derive(Debug, Default)]
struct TagState {
    by_name: HashMap<String, i64>,
    next_id: i64,
}

impl MemoryTagCatalog {
    pub fn poisoned(names: &[&str]) -> Self {
        Self {
            state: Mutex::default(),
            poisoned: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[async_trait]
impl TagCatalog for MemoryTagCatalog {
    async fn find_or_create(&self, name: &str) -> Result<i64, CatalogError> {
        if self.poisoned.contains(name) {
            return Err(CatalogError::Internal(anyhow!(
                "simulated conflict for tag {name:?}"
            )));
        }
        let mut state = self.state.lock().unwrap();
        if let Some(id) = state.by_name.get(name) {
            return Ok(*id);
        }
        state.next_id += 1;
        let id = state.next_id;
        state.by_name.insert(name.to_string(), id);
        Ok(id)
    }
}

/// Bookmark-tag links in a set; a second attach of the same pair fails with
/// `Duplicate` the way a unique constraint would.
#[derive(Debug, Default)]
pub struct MemoryBookmarkStore {
    pub links: Mutex<HashSet<(i64, i64)>>,
}

impl MemoryBookmarkStore {
    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn attach_tag(&self, bookmark_id: i64, tag_id: i64) -> Result<(), CatalogError> {
        let mut links = self.links.lock().unwrap();
        if !links.insert((bookmark_id, tag_id)) {
            return Err(CatalogError::Duplicate(format!(
                "tag {tag_id} is already attached to bookmark {bookmark_id}"
            )));
        }
        Ok(())
    }
}
