//! Knowledge Base 서비스 - 검색/수집 외부 인터페이스
//!
//! 저장소 하나를 소유하고 세 가지 연산을 제공합니다:
//! - retrieve: 카테고리 + 키워드 조회
//! - ingest_batch: 배치 수집
//! - ingest_text: 텍스트 문서 청킹 후 수집

use anyhow::Result;

use super::chunker::{ChunkConfig, Chunker, TextChunker};
use super::filter::KeywordFilter;
use super::ingest::{BatchIngestor, IngestResult, RawItem, TextIngestResult};
use super::seed::default_items;
use super::store::{KnowledgeItem, KnowledgeStore, StoreStats};

// ============================================================================
// KnowledgeBase
// ============================================================================

/// Knowledge Base
///
/// 프로세스 시작 시 한 번 생성되어 종료까지 유지됩니다.
/// 숨겨진 전역 저장소 없이 명시적으로 주입/소유합니다.
pub struct KnowledgeBase {
    store: KnowledgeStore,
    ingestor: BatchIngestor,
}

impl KnowledgeBase {
    /// 빈 지식베이스 생성
    pub fn new() -> Self {
        Self::with_store(KnowledgeStore::new())
    }

    /// 기존 저장소로 생성
    pub fn with_store(store: KnowledgeStore) -> Self {
        let ingestor = BatchIngestor::new(store.clone());
        Self { store, ingestor }
    }

    /// 내부 저장소 핸들
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// 저장소가 비어 있으면 기본 지식 데이터 주입
    ///
    /// 주입된 항목 수를 반환합니다 (이미 데이터가 있으면 0).
    pub fn seed_defaults(&self) -> Result<usize> {
        if !self.store.is_empty()? {
            return Ok(0);
        }

        let items = default_items();
        let count = items.len();
        for item in items {
            self.store.append(item)?;
        }

        tracing::info!("Knowledge base initialized with {} default items", count);
        Ok(count)
    }

    /// 지식 항목 조회
    ///
    /// 카테고리가 주어지면 먼저 카테고리로 거르고, 카테고리가 없거나
    /// 일치 항목이 없으면 전체 항목으로 폴백한 뒤 키워드 필터를
    /// 적용합니다. 내부 실패는 로그만 남기고 빈 목록을 반환합니다.
    pub fn retrieve(
        &self,
        category: Option<&str>,
        keywords: Option<&[String]>,
    ) -> Vec<KnowledgeItem> {
        match self.retrieve_inner(category, keywords) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Error retrieving knowledge base items: {}", e);
                Vec::new()
            }
        }
    }

    fn retrieve_inner(
        &self,
        category: Option<&str>,
        keywords: Option<&[String]>,
    ) -> Result<Vec<KnowledgeItem>> {
        let mut items = Vec::new();

        if let Some(category) = category {
            items = self.store.items_by_category(category)?;
        }

        // 카테고리 미지정 또는 일치 항목 없음 -> 전체 항목
        if category.is_none() || items.is_empty() {
            items = self.store.all_items()?;
        }

        if let Some(keywords) = keywords {
            let filter = KeywordFilter::new(keywords);
            items = filter.filter(items);
        }

        Ok(items)
    }

    /// 배치 수집
    pub fn ingest_batch(&self, items: Vec<RawItem>) -> IngestResult {
        self.ingestor.ingest(items)
    }

    /// 텍스트 문서 수집
    ///
    /// 청킹 후 배치 수집으로 위임합니다. 어떤 실패도 예외가 아닌
    /// `{success: false, items_added: 0}` 형태로 반환됩니다.
    pub fn ingest_text(&self, text: &str, category: &str, config: ChunkConfig) -> TextIngestResult {
        let chunker = TextChunker::new(config);
        let chunks = chunker.chunk(text, category);

        if chunks.is_empty() {
            tracing::warn!("No chunks generated for category '{}'", category);
        }

        // 빈 배치는 성공으로 보고됨 (0건 추가)
        let raw_items: Vec<RawItem> = chunks.into_iter().map(RawItem::from).collect();
        let result = self.ingestor.ingest(raw_items);

        TextIngestResult {
            success: result.success,
            items_added: result.added,
        }
    }

    /// 저장소 통계
    pub fn stats(&self) -> Result<StoreStats> {
        self.store.stats()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
