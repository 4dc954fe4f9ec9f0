//! Knowledge Store - 인메모리 지식 저장소
//!
//! 챗봇이 참조하는 지식 항목을 프로세스 메모리에 저장하고 조회합니다.
//! 저장은 append 전용이며, id는 삽입 시점에 순차 부여됩니다.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use serde::{Deserialize, Serialize};

// ============================================================================
// Types
// ============================================================================

/// 저장된 지식 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// 새 항목 입력용 구조체
#[derive(Debug, Clone)]
pub struct NewKnowledgeItem {
    pub category: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// 저장소 통계
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub item_count: usize,
    pub total_content_bytes: usize,
}

// ============================================================================
// KnowledgeStore
// ============================================================================

/// Knowledge Store - 인메모리 지식 저장소
///
/// 항목 목록과 id 카운터를 하나의 Mutex로 보호합니다.
/// 동시 append가 같은 id를 관측할 수 없습니다.
#[derive(Clone)]
pub struct KnowledgeStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    items: Vec<KnowledgeItem>,
    next_id: i64,
}

impl KnowledgeStore {
    /// 빈 저장소 생성
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                items: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))
    }

    /// 항목 저장
    ///
    /// 다음 순차 id를 부여하고 저장된 항목을 반환합니다.
    pub fn append(&self, item: NewKnowledgeItem) -> Result<KnowledgeItem> {
        let mut inner = self.lock()?;

        let stored = KnowledgeItem {
            id: inner.next_id,
            category: item.category,
            title: item.title,
            content: item.content,
            tags: item.tags,
        };
        inner.next_id += 1;
        inner.items.push(stored.clone());

        tracing::debug!("Added knowledge item: {} (id={})", stored.title, stored.id);

        Ok(stored)
    }

    /// 전체 항목 조회 (삽입 순서 유지)
    ///
    /// 반환값은 스냅샷 복사본이므로 호출자가 수정해도 저장소에 영향이 없습니다.
    pub fn all_items(&self) -> Result<Vec<KnowledgeItem>> {
        let inner = self.lock()?;
        Ok(inner.items.clone())
    }

    /// 카테고리로 항목 조회 (대소문자 무시 정확 일치)
    ///
    /// 일치하는 항목이 없으면 빈 목록을 반환합니다 (에러 아님).
    pub fn items_by_category(&self, category: &str) -> Result<Vec<KnowledgeItem>> {
        let inner = self.lock()?;
        let lower = category.to_lowercase();

        Ok(inner
            .items
            .iter()
            .filter(|item| item.category.to_lowercase() == lower)
            .cloned()
            .collect())
    }

    /// 저장된 항목 수
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.items.len())
    }

    /// 저장소가 비어 있는지 확인
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.items.is_empty())
    }

    /// 저장소 통계
    pub fn stats(&self) -> Result<StoreStats> {
        let inner = self.lock()?;

        Ok(StoreStats {
            item_count: inner.items.len(),
            total_content_bytes: inner.items.iter().map(|i| i.content.len()).sum(),
        })
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
