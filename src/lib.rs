//! campus-kb - 대학 지원 챗봇 지식베이스 코어
//!
//! 키워드 필터링 + 텍스트 청킹 기반의 인메모리 지식베이스입니다.
//! 챗봇 핸들러가 질의 키워드로 항목을 조회하고, 수집 엔드포인트가
//! 배치/텍스트 문서를 저장하는 용도로 설계되었습니다.

pub mod cli;
pub mod knowledge;

// Re-exports
pub use knowledge::{
    BatchIngestor, Chunk, ChunkConfig, Chunker, IngestFailure, IngestResult, KeywordFilter,
    KnowledgeBase, KnowledgeItem, KnowledgeStore, NewKnowledgeItem, RawItem, StoreStats,
    TagsInput, TextChunker, TextIngestResult, ValidationError, default_chunker, default_items,
    extract_keywords, text_chunker,
};
