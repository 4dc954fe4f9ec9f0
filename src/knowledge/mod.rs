//! Knowledge 모듈 - 인메모리 지식베이스 코어
//!
//! - Store: append 전용 인메모리 항목 저장소
//! - Filter: 키워드 부분 문자열 필터링
//! - Chunker: 문장 경계 인식 텍스트 분할 + 태그 파생
//! - Ingest: 검증 + 에러 수집 배치 수집
//! - Service: 검색/수집 외부 인터페이스

mod chunker;
mod filter;
mod ingest;
mod seed;
mod service;
mod store;

// Re-exports
pub use chunker::{
    Chunk, ChunkConfig, Chunker, TextChunker,
    default_chunker, text_chunker,
};
pub use filter::{KeywordFilter, extract_keywords};
pub use ingest::{
    BatchIngestor, IngestFailure, IngestResult, RawItem, TagsInput, TextIngestResult,
    ValidationError,
};
pub use seed::default_items;
pub use service::KnowledgeBase;
pub use store::{KnowledgeItem, KnowledgeStore, NewKnowledgeItem, StoreStats};
