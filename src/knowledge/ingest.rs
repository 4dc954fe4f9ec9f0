//! Batch Ingestor - 배치 단위 지식 항목 수집
//!
//! 외부에서 들어오는 비정형 항목 레코드를 검증하고 저장소에 추가합니다.
//! 항목 하나가 실패해도 배치 전체를 중단하지 않고 에러만 기록합니다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chunker::Chunk;
use super::store::{KnowledgeStore, NewKnowledgeItem};

// ============================================================================
// Boundary Types
// ============================================================================

/// 경계에서 받는 비정형 항목 레코드
///
/// 필수 필드가 빠져 있어도 역직렬화는 성공하며, 검증 단계에서
/// 거부됩니다. `tags`는 문자열 배열, 단일 문자열, 그 외 어떤
/// 형태든 받아들인 뒤 정규화합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: TagsInput,
}

/// 태그 필드의 동적 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    /// 문자열 배열 (그대로 사용)
    Many(Vec<String>),
    /// 단일 문자열 (한 개짜리 배열로 래핑)
    One(String),
    /// 그 외 (빈 배열로 정규화)
    Other(serde_json::Value),
}

impl Default for TagsInput {
    fn default() -> Self {
        TagsInput::Many(Vec::new())
    }
}

impl TagsInput {
    /// 태그 목록으로 정규화
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagsInput::Many(tags) => tags,
            TagsInput::One(tag) => vec![tag],
            TagsInput::Other(_) => Vec::new(),
        }
    }
}

impl From<Chunk> for RawItem {
    fn from(chunk: Chunk) -> Self {
        Self {
            category: chunk.category,
            title: chunk.title,
            content: chunk.content,
            tags: TagsInput::Many(chunk.tags),
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// 항목 단위 검증 에러
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required fields (category, title, or content)")]
    MissingRequiredField,
}

/// 필수 필드 검증
///
/// category, title, content가 모두 비어 있지 않아야 합니다.
fn validate(item: &RawItem) -> Result<(), ValidationError> {
    if item.category.is_empty() || item.title.is_empty() || item.content.is_empty() {
        return Err(ValidationError::MissingRequiredField);
    }
    Ok(())
}

// ============================================================================
// Result Types
// ============================================================================

/// 거부된 항목과 사유
#[derive(Debug, Clone, Serialize)]
pub struct IngestFailure {
    pub item: RawItem,
    pub error: String,
}

/// 배치 수집 결과
///
/// `success`는 예외 발생 여부가 아니라 추가 성공 여부를 뜻합니다.
/// 비어 있지 않은 배치에서 모든 항목이 실패하면 `success = false`.
#[derive(Debug, Serialize)]
pub struct IngestResult {
    pub success: bool,
    pub added: usize,
    pub errors: Vec<IngestFailure>,
}

/// 텍스트 문서 수집 결과
#[derive(Debug, Serialize)]
pub struct TextIngestResult {
    pub success: bool,
    pub items_added: usize,
}

// ============================================================================
// BatchIngestor
// ============================================================================

/// Batch Ingestor
///
/// 검증을 통과한 항목만 저장소에 추가하고,
/// 실패한 항목은 에러 목록에 수집합니다.
pub struct BatchIngestor {
    store: KnowledgeStore,
}

impl BatchIngestor {
    /// 저장소를 공유하는 수집기 생성
    pub fn new(store: KnowledgeStore) -> Self {
        Self { store }
    }

    /// 배치 수집
    ///
    /// 항목별로 검증 → 태그 정규화 → 저장. 실패는 기록 후 계속 진행.
    pub fn ingest(&self, items: Vec<RawItem>) -> IngestResult {
        let total = items.len();
        let mut result = IngestResult {
            success: true,
            added: 0,
            errors: Vec::new(),
        };

        for item in items {
            if let Err(e) = validate(&item) {
                result.errors.push(IngestFailure {
                    item,
                    error: e.to_string(),
                });
                continue;
            }

            let new_item = NewKnowledgeItem {
                category: item.category.clone(),
                title: item.title.clone(),
                content: item.content.clone(),
                tags: item.tags.clone().normalize(),
            };

            match self.store.append(new_item) {
                Ok(_) => result.added += 1,
                Err(e) => {
                    // 저장 실패도 항목 단위로 기록하고 배치는 계속
                    result.errors.push(IngestFailure {
                        item,
                        error: e.to_string(),
                    });
                }
            }
        }

        if result.added == 0 && total > 0 {
            result.success = false;
        }

        tracing::info!(
            "Batch ingest: {} added, {} rejected (of {})",
            result.added,
            result.errors.len(),
            total
        );

        result
    }
}

// ============================================================================
// Tests
// ============================================================================
