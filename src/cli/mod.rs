//! CLI 모듈
//!
//! campus-kb CLI 명령어 정의 및 구현
//!
//! 저장소가 프로세스 메모리에만 존재하므로, 수집과 조회를
//! 한 번의 실행 안에서 조합할 수 있게 구성되어 있습니다
//! (예: `ingest --query`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use crate::knowledge::{
    ChunkConfig, Chunker, KnowledgeBase, KnowledgeItem, RawItem, TextChunker, extract_keywords,
};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "campus-kb")]
#[command(version, about = "대학 지원 챗봇 지식베이스", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 텍스트 문서를 청킹하여 지식베이스에 수집
    Ingest {
        /// 수집할 파일 경로
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 수집할 폴더 경로 (재귀, .txt/.md)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// 직접 입력할 텍스트
        #[arg(short, long)]
        text: Option<String>,

        /// 항목 카테고리
        #[arg(short, long)]
        category: String,

        /// 청크 크기 (바이트)
        #[arg(long, default_value = "1000")]
        chunk_size: usize,

        /// 오버랩 크기 (바이트)
        #[arg(long, default_value = "200")]
        overlap_size: usize,

        /// 수집 직후 실행할 검색 질의
        #[arg(short, long)]
        query: Option<String>,
    },

    /// JSON 배치 파일을 지식베이스에 수집
    Batch {
        /// 항목 배열이 담긴 JSON 파일
        file: PathBuf,

        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 지식베이스 검색
    Query {
        /// 검색 질의
        query: String,

        /// 카테고리 필터
        #[arg(short, long)]
        category: Option<String>,

        /// 먼저 수집할 JSON 배치 파일 (반복 지정 가능)
        #[arg(short, long)]
        items: Vec<PathBuf>,

        /// 기본 지식 데이터를 주입하지 않음
        #[arg(long)]
        no_defaults: bool,

        /// 결과 개수 제한
        #[arg(short, long, default_value = "5")]
        limit: usize,

        /// 결과를 JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 청킹 결과 미리보기 (저장하지 않음)
    Chunk {
        /// 분할할 파일 경로
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// 직접 입력할 텍스트
        #[arg(short, long)]
        text: Option<String>,

        /// 항목 카테고리
        #[arg(short, long, default_value = "preview")]
        category: String,

        /// 청크 크기 (바이트)
        #[arg(long, default_value = "1000")]
        chunk_size: usize,

        /// 오버랩 크기 (바이트)
        #[arg(long, default_value = "200")]
        overlap_size: usize,
    },
}

// ============================================================================
// CLI Runner
// ============================================================================

/// CLI 명령어 실행
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ingest {
            file,
            dir,
            text,
            category,
            chunk_size,
            overlap_size,
            query,
        } => cmd_ingest(file, dir, text, &category, chunk_size, overlap_size, query),
        Commands::Batch { file, json } => cmd_batch(&file, json),
        Commands::Query {
            query,
            category,
            items,
            no_defaults,
            limit,
            json,
        } => cmd_query(&query, category.as_deref(), &items, no_defaults, limit, json),
        Commands::Chunk {
            file,
            text,
            category,
            chunk_size,
            overlap_size,
        } => cmd_chunk(file, text, &category, chunk_size, overlap_size),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// 수집 명령어 (ingest)
///
/// 파일/폴더/텍스트를 청킹하여 지식베이스에 저장하고,
/// 질의가 주어지면 같은 프로세스에서 바로 검색합니다.
fn cmd_ingest(
    file: Option<PathBuf>,
    dir: Option<PathBuf>,
    text: Option<String>,
    category: &str,
    chunk_size: usize,
    overlap_size: usize,
    query: Option<String>,
) -> Result<()> {
    let documents = collect_documents(file, dir, text)?;
    if documents.is_empty() {
        println!("[!] 수집할 문서가 없습니다.");
        return Ok(());
    }

    let config = ChunkConfig {
        chunk_size,
        overlap_size,
    };

    let kb = KnowledgeBase::new();
    let mut total_added = 0;
    let mut failed_docs = 0;

    println!("[*] 수집 대상: {} 문서 (카테고리: {})", documents.len(), category);

    for (name, content) in &documents {
        let result = kb.ingest_text(content, category, config.clone());
        if result.success {
            println!("    {} -> {} 청크", name, result.items_added);
            total_added += result.items_added;
        } else {
            println!("    {} -> 실패", name);
            failed_docs += 1;
        }
    }

    let stats = kb.stats()?;
    println!();
    println!(
        "[OK] 완료: {} 항목 추가, 실패 문서 {} ({} bytes)",
        total_added, failed_docs, stats.total_content_bytes
    );

    // 수집 직후 검색
    if let Some(ref query) = query {
        println!();
        run_query(&kb, query, None, 5, false);
    }

    Ok(())
}

/// 배치 수집 명령어 (batch)
fn cmd_batch(file: &Path, json: bool) -> Result<()> {
    let items = load_batch_file(file)?;
    println!("[*] 배치 파일: {} ({} 항목)", file.display(), items.len());

    let kb = KnowledgeBase::new();
    let result = kb.ingest_batch(items);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.success {
        println!("[OK] {} 항목 추가됨", result.added);
    } else {
        println!("[!] 추가된 항목 없음");
    }

    for failure in &result.errors {
        println!(
            "    거부: \"{}\" - {}",
            truncate_text(&failure.item.title, 40),
            failure.error
        );
    }

    Ok(())
}

/// 검색 명령어 (query)
///
/// 기본 지식 데이터(및 지정된 배치 파일)를 적재한 뒤 검색합니다.
fn cmd_query(
    query: &str,
    category: Option<&str>,
    item_files: &[PathBuf],
    no_defaults: bool,
    limit: usize,
    json: bool,
) -> Result<()> {
    let kb = KnowledgeBase::new();

    if !no_defaults {
        kb.seed_defaults()
            .context("기본 지식 데이터 주입 실패")?;
    }

    for path in item_files {
        let items = load_batch_file(path)?;
        let result = kb.ingest_batch(items);
        if !result.errors.is_empty() {
            println!(
                "[!] {}: {} 항목 거부됨",
                path.display(),
                result.errors.len()
            );
        }
    }

    run_query(&kb, query, category, limit, json);
    Ok(())
}

/// 청킹 미리보기 명령어 (chunk)
fn cmd_chunk(
    file: Option<PathBuf>,
    text: Option<String>,
    category: &str,
    chunk_size: usize,
    overlap_size: usize,
) -> Result<()> {
    let text = if let Some(ref path) = file {
        fs::read_to_string(path)
            .with_context(|| format!("파일 읽기 실패: {}", path.display()))?
    } else if let Some(text) = text {
        text
    } else {
        bail!("--file 또는 --text 중 하나를 지정해야 합니다");
    };

    let chunker = TextChunker::new(ChunkConfig {
        chunk_size,
        overlap_size,
    });
    let chunks = chunker.chunk(&text, category);

    if chunks.is_empty() {
        println!("[!] 생성된 청크가 없습니다.");
        return Ok(());
    }

    println!("[OK] {} 청크:\n", chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        println!("{}. {} ({} bytes)", i + 1, chunk.title, chunk.content.len());
        println!("   태그: {}", chunk.tags.join(", "));
        println!("   내용: {}", truncate_text(&chunk.content, 120));
        println!();
    }

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 질의 실행 및 결과 출력
fn run_query(kb: &KnowledgeBase, query: &str, category: Option<&str>, limit: usize, json: bool) {
    println!("[*] 검색 중: \"{}\"", query);

    let keywords = extract_keywords(query);
    let items = kb.retrieve(category, Some(&keywords));
    let items: Vec<KnowledgeItem> = items.into_iter().take(limit).collect();

    if json {
        match serde_json::to_string_pretty(&items) {
            Ok(out) => println!("{}", out),
            Err(e) => println!("[!] 직렬화 실패: {}", e),
        }
        return;
    }

    if items.is_empty() {
        println!("\n[!] 검색 결과가 없습니다.");
        return;
    }

    println!("\n[OK] 검색 결과 ({} 건):\n", items.len());

    for (i, item) in items.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, item.category, item.title);
        println!("   태그: {}", item.tags.join(", "));
        println!("   내용: {}", truncate_text(&item.content, 200));
        println!();
    }
}

/// 수집 대상 문서 수집 (이름, 내용)
fn collect_documents(
    file: Option<PathBuf>,
    dir: Option<PathBuf>,
    text: Option<String>,
) -> Result<Vec<(String, String)>> {
    if let Some(ref path) = file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("파일 읽기 실패: {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        return Ok(vec![(name, content)]);
    }

    if let Some(ref dir_path) = dir {
        return collect_text_files(dir_path);
    }

    if let Some(text) = text {
        return Ok(vec![("direct-input".to_string(), text)]);
    }

    bail!("--file, --dir, --text 중 하나를 지정해야 합니다");
}

/// 폴더에서 텍스트 파일 재귀 수집 (.txt, .md)
fn collect_text_files(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("폴더 탐색 실패: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "txt" && ext != "md" {
            continue;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("파일 읽기 실패: {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        documents.push((name, content));
    }

    Ok(documents)
}

/// JSON 배치 파일 적재
fn load_batch_file(path: &Path) -> Result<Vec<RawItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("배치 파일 읽기 실패: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("배치 파일 파싱 실패 (JSON 배열 필요): {}", path.display()))
}

/// 텍스트 자르기 (UTF-8 안전)
fn truncate_text(text: &str, max_chars: usize) -> String {
    let cleaned = text.replace('\n', " ").replace('\r', "");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() <= max_chars {
        cleaned.to_string()
    } else {
        let truncated: String = cleaned.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("hello\nworld", 20), "hello world");
    }

    #[test]
    fn test_truncate_unicode() {
        let korean = "안녕하세요 세계";
        let truncated = truncate_text(korean, 5);
        assert_eq!(truncated, "안녕하세요...");
    }

    #[test]
    fn test_collect_text_files_filters_extensions() {
        let dir = TempDir::new().unwrap();

        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("b.md"), "beta").unwrap();
        fs::write(dir.path().join("c.pdf"), "skip").unwrap();

        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("d.txt"), "delta").unwrap();

        let docs = collect_text_files(dir.path()).unwrap();
        let names: Vec<&str> = docs.iter().map(|(n, _)| n.as_str()).collect();

        assert_eq!(docs.len(), 3);
        assert!(names.contains(&"a.txt"));
        assert!(names.contains(&"b.md"));
        assert!(names.contains(&"d.txt"));
    }

    #[test]
    fn test_load_batch_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch.json");

        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"[{{"category":"it","title":"WiFi","content":"campus wifi","tags":["wifi"]}},
               {{"title":"incomplete"}}]"#
        )
        .unwrap();

        let items = load_batch_file(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "WiFi");
        assert!(items[1].category.is_empty());
    }

    #[test]
    fn test_load_batch_file_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        assert!(load_batch_file(&path).is_err());
    }

    #[test]
    fn test_collect_documents_requires_a_source() {
        assert!(collect_documents(None, None, None).is_err());
    }

    #[test]
    fn test_collect_documents_inline_text() {
        let docs = collect_documents(None, None, Some("inline text".to_string())).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].0, "direct-input");
        assert_eq!(docs[0].1, "inline text");
    }
}
