//! Search request and page types / 搜索请求与分页类型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};

/// Default page size / 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Field a keyword is matched against / 搜索字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchType {
    #[serde(rename = "TITLE")]
    Title,
    #[serde(rename = "CONTENT")]
    Content,
    #[serde(rename = "ID")]
    AuthorId,
    #[serde(rename = "NICKNAME")]
    AuthorNickname,
    #[serde(rename = "HASHTAG")]
    Hashtag,
}

impl SearchType {
    /// All search types in display order / 全部搜索类型
    pub const ALL: [SearchType; 5] = [
        SearchType::Title,
        SearchType::Content,
        SearchType::AuthorId,
        SearchType::AuthorNickname,
        SearchType::Hashtag,
    ];

    /// Wire name used in query strings
    pub fn name(&self) -> &'static str {
        match self {
            SearchType::Title => "TITLE",
            SearchType::Content => "CONTENT",
            SearchType::AuthorId => "ID",
            SearchType::AuthorNickname => "NICKNAME",
            SearchType::Hashtag => "HASHTAG",
        }
    }

    /// Human-readable label / 显示名称
    pub fn description(&self) -> &'static str {
        match self {
            SearchType::Title => "Title",
            SearchType::Content => "Content",
            SearchType::AuthorId => "User ID",
            SearchType::AuthorNickname => "Nickname",
            SearchType::Hashtag => "Hashtag",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchType {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        SearchType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoardError::invalid(format!("unknown search type: {}", s)))
    }
}

/// Sortable article fields / 可排序字段
///
/// Closed set so a sort spec never reaches SQL as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    ModifiedAt,
    Title,
    CreatedBy,
    Id,
}

impl SortField {
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim() {
            "createdAt" => Ok(SortField::CreatedAt),
            "modifiedAt" => Ok(SortField::ModifiedAt),
            "title" => Ok(SortField::Title),
            "createdBy" => Ok(SortField::CreatedBy),
            "id" => Ok(SortField::Id),
            other => Err(BoardError::invalid(format!("unknown sort field: {}", other))),
        }
    }

    /// Backing column in the articles table
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "a.created_at",
            SortField::ModifiedAt => "a.modified_at",
            SortField::Title => "a.title",
            SortField::CreatedBy => "a.created_by",
            SortField::Id => "a.id",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One (field, direction) pair of a sort spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: Direction,
}

impl SortOrder {
    pub fn asc(field: SortField) -> Self {
        Self { field, direction: Direction::Asc }
    }

    pub fn desc(field: SortField) -> Self {
        Self { field, direction: Direction::Desc }
    }

    /// Parse `field` or `field,direction` (e.g. `createdAt,desc`) / 解析排序参数
    ///
    /// Direction defaults to ascending when omitted.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut parts = spec.splitn(2, ',');
        let field = SortField::from_name(parts.next().unwrap_or(""))?;
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => Direction::Asc,
            Some(d) if d == "asc" => Direction::Asc,
            Some(d) if d == "desc" => Direction::Desc,
            Some(d) => return Err(BoardError::invalid(format!("unknown sort direction: {}", d))),
        };
        Ok(Self { field, direction })
    }
}

/// Page index, size and sort spec / 分页请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    index: i64,
    size: i64,
    sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Build a page request; rejects a negative index, a size below 1, or a
    /// page whose row offset does not fit in an `i64`
    pub fn new(index: i64, size: i64, sort: Vec<SortOrder>) -> Result<Self> {
        if index < 0 {
            return Err(BoardError::invalid(format!("page index must be >= 0, got {}", index)));
        }
        if size < 1 {
            return Err(BoardError::invalid(format!("page size must be >= 1, got {}", size)));
        }
        if index.checked_mul(size).is_none() {
            return Err(BoardError::invalid(format!(
                "page index {} is out of range for page size {}",
                index, size
            )));
        }
        let sort = if sort.is_empty() { Self::default_sort() } else { sort };
        Ok(Self { index, size, sort })
    }

    /// Page with the default sort (`createdAt` descending)
    pub fn of(index: i64, size: i64) -> Result<Self> {
        Self::new(index, size, Self::default_sort())
    }

    fn default_sort() -> Vec<SortOrder> {
        vec![SortOrder::desc(SortField::CreatedAt)]
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    /// Rows to skip / 偏移量
    pub fn offset(&self) -> i64 {
        self.index * self.size
    }

    /// ORDER BY clause; the record id is appended as final tie-breaker
    pub fn order_by_clause(&self) -> String {
        let mut parts: Vec<String> = self
            .sort
            .iter()
            .map(|o| format!("{} {}", o.field.column(), o.direction.sql()))
            .collect();
        if !self.sort.iter().any(|o| o.field == SortField::Id) {
            parts.push("a.id DESC".to_string());
        }
        parts.join(", ")
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Self::default_sort(),
        }
    }
}

/// A bounded, ordered slice of a larger result set / 分页结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub page_request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_elements: i64, page_request: PageRequest) -> Self {
        debug_assert!(items.len() as i64 <= page_request.size());
        let total_elements = total_elements.max(0);
        let size = page_request.size();
        let total_pages = total_elements / size + i64::from(total_elements % size != 0);
        Self {
            items,
            total_elements,
            total_pages,
            page_request,
        }
    }

    /// Zero items, zero total / 空页
    pub fn empty(page_request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, page_request)
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page_request: self.page_request,
        }
    }

    pub fn number(&self) -> i64 {
        self.page_request.index()
    }

    pub fn is_first(&self) -> bool {
        self.number() == 0
    }

    pub fn is_last(&self) -> bool {
        self.number() + 1 >= self.total_pages
    }
}

/// Search input built per call / 搜索请求
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub search_type: Option<SearchType>,
    pub keyword: Option<String>,
    pub page: PageRequest,
}

impl SearchRequest {
    pub fn new(search_type: Option<SearchType>, keyword: Option<String>, page: PageRequest) -> Self {
        Self { search_type, keyword, page }
    }

    /// The keyword when it is present and not blank
    pub fn effective_keyword(&self) -> Option<&str> {
        non_blank(self.keyword.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_invariant() {
        let req = PageRequest::of(0, 10).unwrap();
        assert_eq!(Page::<u8>::new(vec![], 0, req.clone()).total_pages, 0);
        assert_eq!(Page::new(vec![1u8], 1, req.clone()).total_pages, 1);
        assert_eq!(Page::new(vec![1u8; 10], 10, req.clone()).total_pages, 1);
        assert_eq!(Page::new(vec![1u8; 10], 11, req.clone()).total_pages, 2);
        assert_eq!(Page::new(vec![1u8; 10], 95, req).total_pages, 10);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::<String>::empty(PageRequest::of(3, 20).unwrap());
        assert!(page.items.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.number(), 3);
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], 13, PageRequest::of(1, 3).unwrap());
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.total_elements, 13);
        assert_eq!(mapped.total_pages, 5);
        assert!(!mapped.is_first());
        assert!(!mapped.is_last());
    }

    #[test]
    fn test_page_request_rejects_bad_input() {
        assert!(matches!(PageRequest::of(-1, 10), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(PageRequest::of(0, 0), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(PageRequest::of(i64::MAX, 10), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(PageRequest::of(i64::MAX / 10 + 1, 10), Err(BoardError::InvalidArgument(_))));
    }

    #[test]
    fn test_offset_at_the_limit() {
        let req = PageRequest::of(i64::MAX / 10, 10).unwrap();
        assert_eq!(req.offset(), i64::MAX / 10 * 10);
        assert_eq!(PageRequest::of(i64::MAX, 1).unwrap().offset(), i64::MAX);

        let page = Page::<u8>::new(vec![], i64::MAX, PageRequest::of(0, i64::MAX).unwrap());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_default_page_request() {
        let req = PageRequest::default();
        assert_eq!(req.index(), 0);
        assert_eq!(req.size(), 10);
        assert_eq!(req.sort(), &[SortOrder::desc(SortField::CreatedAt)]);
        assert_eq!(req.order_by_clause(), "a.created_at DESC, a.id DESC");
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(
            SortOrder::parse("title,desc").unwrap(),
            SortOrder::desc(SortField::Title)
        );
        assert_eq!(SortOrder::parse("createdBy").unwrap(), SortOrder::asc(SortField::CreatedBy));
        assert!(SortOrder::parse("password,asc").is_err());
        assert!(SortOrder::parse("title,sideways").is_err());

        let req = PageRequest::new(0, 5, vec![SortOrder::asc(SortField::Id)]).unwrap();
        assert_eq!(req.order_by_clause(), "a.id ASC");
    }

    #[test]
    fn test_search_type_names() {
        assert_eq!("nickname".parse::<SearchType>().unwrap(), SearchType::AuthorNickname);
        assert_eq!("ID".parse::<SearchType>().unwrap(), SearchType::AuthorId);
        assert!("author".parse::<SearchType>().is_err());
        assert_eq!(
            serde_json::to_string(&SearchType::Hashtag).unwrap(),
            "\"HASHTAG\""
        );
    }

    #[test]
    fn test_effective_keyword() {
        let mut req = SearchRequest::default();
        assert_eq!(req.effective_keyword(), None);
        req.keyword = Some("   ".to_string());
        assert_eq!(req.effective_keyword(), None);
        req.keyword = Some(" rust ".to_string());
        assert_eq!(req.effective_keyword(), Some(" rust "));
    }
}
