//! Text Chunking Module
//!
//! 문서를 고정 크기 + 오버랩 청크로 분할합니다.
//! 가능하면 문장 경계(`.` `?` `!`)에서 끊고, 각 청크에
//! 제목(첫 문장)과 태그(단어 빈도 상위 5개)를 파생합니다.

use regex::Regex;

// ============================================================================
// Chunk Configuration
// ============================================================================

/// 청킹 설정
///
/// 호출자 계약: `chunk_size > overlap_size >= 0`.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// 청크 크기 (바이트 수, 문자 경계로 내림)
    pub chunk_size: usize,
    /// 오버랩 크기 (바이트 수)
    pub overlap_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap_size: 200,
        }
    }
}

// ============================================================================
// Chunk
// ============================================================================

/// 청크 - 문서의 부분 문자열과 파생 메타데이터
///
/// BatchIngestor가 즉시 소비하는 일시적 값입니다.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub category: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

// ============================================================================
// Chunker Trait
// ============================================================================

/// 텍스트 청킹 전략 트레이트
pub trait Chunker: Send + Sync {
    /// 텍스트를 청크로 분할
    fn chunk(&self, text: &str, category: &str) -> Vec<Chunk>;

    /// 청커 이름
    fn name(&self) -> &'static str;
}

// ============================================================================
// TextChunker
// ============================================================================

/// 문장 경계 인식 청커
///
/// 커서를 `chunk_size`씩 전진시키되, 윈도우가 텍스트 끝에
/// 닿지 않았고 윈도우 중간점 이후에 문장 부호가 있으면
/// 그 지점까지 잘라 작은 청크가 생기는 것을 피합니다.
pub struct TextChunker {
    config: ChunkConfig,
    word_re: Regex,
    title_re: Regex,
}

/// 태그 파생에서 제외할 고빈도 불용어
const STOP_WORDS: [&str; 7] = ["and", "the", "for", "with", "this", "that", "from"];

/// 제목 최대 길이 (문자 수)
const TITLE_MAX_CHARS: usize = 50;

/// 청크당 파생 태그 수
const MAX_TAGS: usize = 5;

impl TextChunker {
    /// 설정으로 생성
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            config,
            word_re: Regex::new(r"\b[a-z]{3,}\b").unwrap(),
            title_re: Regex::new(r"[.!?]\s+").unwrap(),
        }
    }

    /// 기본 설정으로 생성 (1000 / 200)
    pub fn with_defaults() -> Self {
        Self::new(ChunkConfig::default())
    }

    /// 청크의 첫 문장을 제목으로 파생
    ///
    /// 50자를 넘으면 47자 + "..." 으로 자릅니다.
    fn derive_title(&self, content: &str) -> String {
        let first = self
            .title_re
            .split(content)
            .next()
            .unwrap_or("")
            .trim();

        if first.chars().count() > TITLE_MAX_CHARS {
            let truncated: String = first.chars().take(TITLE_MAX_CHARS - 3).collect();
            format!("{}...", truncated)
        } else {
            first.to_string()
        }
    }

    /// 단어 빈도 기반 태그 파생
    ///
    /// 소문자화한 청크에서 길이 3 이상의 알파벳 토큰을 추출하고,
    /// 불용어를 제외한 뒤 빈도 상위 5개를 태그로 반환합니다.
    /// 동률은 먼저 등장한 순서를 유지합니다.
    fn derive_tags(&self, content: &str) -> Vec<String> {
        let lower = content.to_lowercase();

        // 등장 순서를 유지하는 빈도 집계
        let mut frequency: Vec<(String, usize)> = Vec::new();

        for m in self.word_re.find_iter(&lower) {
            let word = m.as_str();
            if STOP_WORDS.contains(&word) {
                continue;
            }

            match frequency.iter_mut().find(|(w, _)| w == word) {
                Some((_, count)) => *count += 1,
                None => frequency.push((word.to_string(), 1)),
            }
        }

        // 안정 정렬이므로 동률은 등장 순서 유지
        frequency.sort_by(|a, b| b.1.cmp(&a.1));

        frequency
            .into_iter()
            .take(MAX_TAGS)
            .map(|(word, _)| word)
            .collect()
    }
}

impl Chunker for TextChunker {
    fn chunk(&self, text: &str, category: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        if text.is_empty() {
            return chunks;
        }

        let mut start = 0;

        while start < text.len() {
            // 윈도우 끝 (UTF-8 경계로 내림)
            let mut window_end =
                floor_char_boundary(text, (start + self.config.chunk_size).min(text.len()));
            if window_end <= start {
                // chunk_size가 다음 문자보다 작아도 최소 한 문자는 전진
                window_end = text[start..]
                    .chars()
                    .next()
                    .map(|c| start + c.len_utf8())
                    .unwrap_or(text.len());
            }

            // 텍스트 끝에 닿지 않았으면 문장 경계로 잘라내기 시도.
            // 경계가 윈도우 중간점 이전이면 청크가 너무 작아지므로 자르지 않음.
            let mut end = window_end;
            if window_end < text.len() {
                if let Some(pos) = text[start..window_end].rfind(['.', '?', '!']) {
                    if pos > self.config.chunk_size / 2 {
                        end = start + pos + 1;
                    }
                }
            }

            let content = &text[start..end];
            chunks.push(Chunk {
                category: category.to_string(),
                title: self.derive_title(content),
                content: content.to_string(),
                tags: self.derive_tags(content),
            });

            // 윈도우가 텍스트 끝에 닿았으면 종료
            if window_end >= text.len() {
                break;
            }

            // 잘라낸 끝 기준으로 오버랩만큼 되돌아간 지점에서 다음 청크 시작.
            // 전진하지 못하는 설정이면 잘라낸 끝으로 폴백.
            let mut next = floor_char_boundary(text, end.saturating_sub(self.config.overlap_size));
            if next <= start {
                next = end;
            }
            start = next;
        }

        chunks
    }

    fn name(&self) -> &'static str {
        "TextChunker"
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// UTF-8 경계 조정 (인덱스 이하로)
#[inline]
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// 기본 청커 생성
pub fn default_chunker() -> Box<dyn Chunker> {
    Box::new(TextChunker::with_defaults())
}

/// 청커 생성 (설정 지정)
pub fn text_chunker(config: ChunkConfig) -> Box<dyn Chunker> {
    Box::new(TextChunker::new(config))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(chunk_size: usize, overlap_size: usize) -> TextChunker {
        TextChunker::new(ChunkConfig {
            chunk_size,
            overlap_size,
        })
    }

    #[test]
    fn test_chunk_empty() {
        let chunks = TextChunker::with_defaults().chunk("", "test");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_chunk_short_text_single_chunk() {
        let chunks = TextChunker::with_defaults().chunk("Short paragraph.", "campus");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Short paragraph.");
        assert_eq!(chunks[0].category, "campus");
    }

    #[test]
    fn test_chunk_sentence_boundaries() {
        let text = "Sentence one. Sentence two. Sentence three.";
        let chunks = chunker(20, 5).chunk(text, "test");

        // 첫 윈도우(20바이트)에는 중간점 이후 문장 경계가 있으므로 거기서 끊김
        assert_eq!(chunks[0].content, "Sentence one.");

        // 모든 청크는 원문의 부분 문자열
        for chunk in &chunks {
            assert!(text.contains(&chunk.content));
        }

        // 마지막 청크가 텍스트 끝을 포함
        assert!(chunks.last().unwrap().content.ends_with("three."));
    }

    #[test]
    fn test_chunk_no_punctuation_keeps_full_window() {
        // 문장 부호가 전혀 없으면 윈도우 전체를 유지 (휴리스틱 유지)
        let text = "aaaa bbbb cccc dddd eeee ffff gggg hhhh";
        let chunks = chunker(16, 4).chunk(text, "test");

        assert!(chunks.len() > 1);
        assert_eq!(chunks[0].content.len(), 16);
    }

    #[test]
    fn test_chunk_coverage() {
        // 고유한 번호가 붙은 문장으로 모든 문자가 최소 한 청크에 포함됨을 검증
        let mut text = String::new();
        for i in 0..40 {
            text.push_str(&format!("Sentence number {} ends right here. ", i));
        }
        let text = text.trim_end().to_string();

        let chunks = chunker(100, 20).chunk(&text, "test");
        assert!(chunks.len() > 1);

        let mut covered = vec![false; text.len()];
        for chunk in &chunks {
            let offset = text
                .find(&chunk.content)
                .expect("chunk must be a substring of the source text");
            for flag in covered.iter_mut().skip(offset).take(chunk.content.len()) {
                *flag = true;
            }
        }

        assert!(covered.iter().all(|&c| c), "uncovered character positions");
    }

    #[test]
    fn test_chunk_overlap() {
        let mut text = String::new();
        for i in 0..30 {
            text.push_str(&format!("Fact {} is recorded in this spot. ", i));
        }

        let chunks = chunker(120, 30).chunk(&text, "test");
        assert!(chunks.len() > 2);

        // 이웃 청크는 내용을 공유 (오버랩)
        for pair in chunks.windows(2) {
            let prev_tail: String = pair[0]
                .content
                .chars()
                .rev()
                .take(10)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            assert!(
                pair[1].content.contains(prev_tail.trim()) || pair[0].content.len() < 30,
                "expected overlap between consecutive chunks"
            );
        }
    }

    #[test]
    fn test_derive_title_first_sentence() {
        let chunker = TextChunker::with_defaults();
        let title = chunker.derive_title("Payment plans are available. Late fees apply.");
        assert_eq!(title, "Payment plans are available");
    }

    #[test]
    fn test_derive_title_truncation() {
        let chunker = TextChunker::with_defaults();
        let long = "This opening sentence keeps going well past the fifty character limit";
        let title = chunker.derive_title(long);

        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), 50);
        assert!(long.starts_with(title.trim_end_matches("...")));
    }

    #[test]
    fn test_derive_title_keeps_trailing_period_without_space() {
        // 뒤에 공백이 없는 마지막 마침표는 분리자가 아님
        let chunker = TextChunker::with_defaults();
        assert_eq!(chunker.derive_title("Sentence one."), "Sentence one.");
    }

    #[test]
    fn test_derive_tags_frequency() {
        let chunker = TextChunker::with_defaults();
        let tags = chunker.derive_tags(
            "apple apple apple banana banana cherry the the the date elderberry fig grape",
        );

        assert_eq!(tags.len(), 5);
        assert_eq!(tags[0], "apple");
        assert_eq!(tags[1], "banana");
        // 불용어 "the"는 빈도가 높아도 제외
        assert!(!tags.contains(&"the".to_string()));
    }

    #[test]
    fn test_derive_tags_tie_order() {
        let chunker = TextChunker::with_defaults();
        let tags = chunker.derive_tags("alpha beta alpha beta gamma");
        assert_eq!(tags, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_derive_tags_skips_short_and_nonalpha() {
        let chunker = TextChunker::with_defaults();
        let tags = chunker.derive_tags("go go go 123 456 ab tuition tuition");
        assert_eq!(tags, vec!["tuition"]);
    }

    #[test]
    fn test_floor_char_boundary() {
        let s = "Hello, 세계!";

        assert_eq!(floor_char_boundary(s, 5), 5);
        assert_eq!(floor_char_boundary(s, 100), s.len());
        assert_eq!(floor_char_boundary("", 0), 0);
    }

    #[test]
    fn test_chunk_multibyte_safe() {
        // 멀티바이트 문자 경계에서 패닉 없이 분할
        let text = "등록금 납부 기한 안내. 장학금 신청 절차 안내. 기숙사 입주 일정 안내.";
        let chunks = chunker(30, 6).chunk(text, "공지");

        assert!(!chunks.is_empty());
        for chunk in &chunks {
            assert!(text.contains(&chunk.content));
        }
    }
}
