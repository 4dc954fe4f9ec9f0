//! Keyword Filter - 키워드 기반 항목 필터링
//!
//! 제목/본문/태그에 대한 부분 문자열 매칭으로 지식 항목을 거릅니다.
//! 점수화나 재정렬 없이 입력 순서를 유지하는 단순 필터입니다.
//! 작은 큐레이션 지식베이스를 위한 휴리스틱이며 검색 엔진이 아닙니다.

use super::store::KnowledgeItem;

// ============================================================================
// KeywordFilter
// ============================================================================

/// 키워드 필터
///
/// 키워드 중 하나라도 소문자화된 제목, 본문, 또는 태그에
/// 부분 문자열로 포함되면 항목을 유지합니다 (OR 매칭).
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// 키워드 목록으로 생성
    ///
    /// 키워드는 소문자로 정규화되어 저장됩니다. 길이 3 이하의
    /// 노이즈 토큰 제거는 호출자(키워드 추출 단계)의 책임입니다.
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// 필터가 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// 항목이 키워드 중 하나와 일치하는지 확인
    pub fn matches(&self, item: &KnowledgeItem) -> bool {
        let lower_title = item.title.to_lowercase();
        let lower_content = item.content.to_lowercase();

        self.keywords.iter().any(|keyword| {
            lower_title.contains(keyword)
                || lower_content.contains(keyword)
                || item
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(keyword))
        })
    }

    /// 항목 목록 필터링 (입력 순서 유지)
    ///
    /// 키워드가 없으면 입력을 그대로 반환합니다.
    pub fn filter(&self, items: Vec<KnowledgeItem>) -> Vec<KnowledgeItem> {
        if self.keywords.is_empty() {
            return items;
        }

        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

// ============================================================================
// Keyword Extraction
// ============================================================================

/// 사용자 질의에서 검색 키워드 추출
///
/// 소문자화 후 구두점을 제거하고, 공백으로 분리하여
/// 길이 4 이상의 토큰만 남깁니다. 짧은 토큰은 노이즈로 간주합니다.
pub fn extract_keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .filter(|word| word.chars().count() > 3)
        .map(|word| word.to_string())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, content: &str, tags: &[&str]) -> KnowledgeItem {
        KnowledgeItem {
            id: 1,
            category: "test".to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_matches_title() {
        let filter = KeywordFilter::new(&["registration".to_string()]);
        let items = vec![
            item("Course Registration Process", "content", &[]),
            item("Campus Facilities", "content", &[]),
        ];

        let result = filter.filter(items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Course Registration Process");
    }

    #[test]
    fn test_filter_matches_content() {
        let filter = KeywordFilter::new(&["scholarship".to_string()]);
        let items = vec![item(
            "Financial Aid",
            "The university offers scholarships and grants.",
            &[],
        )];

        assert_eq!(filter.filter(items).len(), 1);
    }

    #[test]
    fn test_filter_matches_tags() {
        let filter = KeywordFilter::new(&["fafsa".to_string()]);
        let items = vec![item("Financial Aid", "content", &["FAFSA", "loans"])];

        assert_eq!(filter.filter(items).len(), 1);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let filter = KeywordFilter::new(&["TUITION".to_string()]);
        let items = vec![item("Tuition Payment Deadlines", "fees are due", &[])];

        assert_eq!(filter.filter(items).len(), 1);
    }

    #[test]
    fn test_filter_empty_keywords_is_noop() {
        let filter = KeywordFilter::new(&[]);
        let items = vec![
            item("A", "alpha", &[]),
            item("B", "beta", &[]),
            item("C", "gamma", &[]),
        ];

        let result = filter.filter(items.clone());
        assert_eq!(result, items);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let filter = KeywordFilter::new(&["campus".to_string()]);
        let items = vec![
            item("Z campus item", "x", &[]),
            item("No match", "x", &[]),
            item("A campus item", "x", &[]),
        ];

        let result = filter.filter(items);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Z campus item");
        assert_eq!(result[1].title, "A campus item");
    }

    #[test]
    fn test_filter_soundness() {
        // 살아남은 항목은 반드시 키워드 중 하나와 일치해야 함
        let keywords = vec!["library".to_string(), "wifi".to_string()];
        let filter = KeywordFilter::new(&keywords);

        let items = vec![
            item("Library Resources", "books and journals", &[]),
            item("IT Services", "campus WiFi access", &[]),
            item("Career Services", "resume writing", &["jobs"]),
        ];

        for survivor in filter.filter(items) {
            assert!(filter.matches(&survivor));
        }
    }

    #[test]
    fn test_extract_keywords() {
        let keywords = extract_keywords("How do I register for courses?");
        assert_eq!(keywords, vec!["register", "courses"]);
    }

    #[test]
    fn test_extract_keywords_drops_short_tokens() {
        let keywords = extract_keywords("what is the gpa for aid");
        // "what"(4자)만 길이 3을 초과
        assert_eq!(keywords, vec!["what"]);
    }

    #[test]
    fn test_extract_keywords_strips_punctuation() {
        let keywords = extract_keywords("Tuition?! Payment... (deadlines)");
        assert_eq!(keywords, vec!["tuition", "payment", "deadlines"]);
    }

    #[test]
    fn test_extract_keywords_empty() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("a an the").is_empty());
    }
}
