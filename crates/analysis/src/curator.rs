//! # Bookmark Curation
//!
//! The update-with-reanalysis entry point. When an edit asks for AI
//! re-analysis, the analysis result is merged with the caller's explicit
//! values: user input always wins, AI suggestions fill the gaps, and
//! suggested tags are appended best-effort.

use crate::analyzer::{AnalysisError, Analyzer};
use linkstash::catalog::{BookmarkStore, CatalogError, TagCatalog};
use linkstash::types::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// A bookmark edit as supplied by the caller. `None` means "leave the field
/// alone"; `reanalyze` asks for a fresh AI pass over `url` first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkUpdate {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub reanalyze: bool,
}

/// The field values to persist after the merge. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookmarkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category_id: Option<i64>,
}

/// What happened to one AI-suggested tag during the merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TagOutcome {
    Attached(i64),
    Skipped(String),
}

/// The per-tag record of the merge's tag work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagAttachment {
    pub tag_name: String,
    pub outcome: TagOutcome,
}

/// The result of one update call: the merged patch, the analysis that drove
/// it (when one ran), and the per-tag attachment outcomes.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub patch: BookmarkPatch,
    pub analysis: Option<AnalysisResult>,
    pub tag_results: Vec<TagAttachment>,
}

/// Applies bookmark edits, optionally re-analyzing the URL first and merging
/// the proposal with the caller's values.
///
/// The merge precedence: a non-empty caller value wins over the AI
/// suggestion for `title` and `description`; suggested tags are appended,
/// never replacing existing ones; the category changes only through the
/// caller's explicit `category_id`. The AI's `suggested_category_id` is
/// informational and is never applied here.
pub struct BookmarkCurator {
    analyzer: Arc<dyn Analyzer>,
    tags: Arc<dyn TagCatalog>,
    bookmarks: Arc<dyn BookmarkStore>,
}

impl BookmarkCurator {
    pub fn new(
        analyzer: Arc<dyn Analyzer>,
        tags: Arc<dyn TagCatalog>,
        bookmarks: Arc<dyn BookmarkStore>,
    ) -> Self {
        Self {
            analyzer,
            tags,
            bookmarks,
        }
    }

    /// Applies one edit to the given bookmark.
    ///
    /// A failed analysis aborts the whole update; a failed tag attach does
    /// not. Tag suggestions are best-effort enrichment, so each one is
    /// attempted independently and failures are recorded in the outcome list
    /// instead of raised.
    pub async fn apply_update(
        &self,
        bookmark_id: i64,
        update: BookmarkUpdate,
    ) -> Result<UpdateOutcome, AnalysisError> {
        let reanalyze_url = update
            .url
            .as_deref()
            .filter(|u| !u.is_empty() && update.reanalyze);

        let Some(url) = reanalyze_url else {
            return Ok(UpdateOutcome {
                patch: passthrough_patch(&update),
                analysis: None,
                tag_results: Vec::new(),
            });
        };

        info!("Re-analyzing bookmark {bookmark_id} from {url}");
        let analysis = self.analyzer.analyze(url).await?;

        let patch = BookmarkPatch {
            url: update.url.clone(),
            title: merge_field(update.title.as_deref(), analysis.title.as_deref()),
            description: merge_field(update.description.as_deref(), analysis.description.as_deref()),
            thumbnail_url: update.thumbnail_url.clone(),
            category_id: update.category_id,
        };

        let tag_results = self.attach_suggested_tags(bookmark_id, &analysis.tags).await;

        Ok(UpdateOutcome {
            patch,
            analysis: Some(analysis),
            tag_results,
        })
    }

    async fn attach_suggested_tags(
        &self,
        bookmark_id: i64,
        tag_names: &[String],
    ) -> Vec<TagAttachment> {
        let mut results = Vec::with_capacity(tag_names.len());
        for name in tag_names {
            let outcome = match self.upsert_and_attach(bookmark_id, name).await {
                Ok(tag_id) => TagOutcome::Attached(tag_id),
                Err(e) => {
                    warn!("Skipping suggested tag {name:?} for bookmark {bookmark_id}: {e}");
                    TagOutcome::Skipped(e.to_string())
                }
            };
            results.push(TagAttachment {
                tag_name: name.clone(),
                outcome,
            });
        }
        results
    }

    async fn upsert_and_attach(&self, bookmark_id: i64, name: &str) -> Result<i64, CatalogError> {
        let tag_id = self.tags.find_or_create(name).await?;
        self.bookmarks.attach_tag(bookmark_id, tag_id).await?;
        Ok(tag_id)
    }
}

/// Without re-analysis the caller's fields pass through unchanged, empty
/// strings included; only the merge treats empty as absent.
fn passthrough_patch(update: &BookmarkUpdate) -> BookmarkPatch {
    BookmarkPatch {
        url: update.url.clone(),
        title: update.title.clone(),
        description: update.description.clone(),
        thumbnail_url: update.thumbnail_url.clone(),
        category_id: update.category_id,
    }
}

/// A non-empty caller value wins; otherwise the AI suggestion; otherwise the
/// field stays unchanged. Empty caller strings count as absent.
fn merge_field(caller: Option<&str>, suggested: Option<&str>) -> Option<String> {
    caller
        .filter(|v| !v.is_empty())
        .or(suggested)
        .map(str::to_string)
}
