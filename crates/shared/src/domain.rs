use thiserror::Error;

/// A PDF file selected for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("start page must be at least 1")]
    StartTooSmall,
    #[error("end page must be greater than or equal to start page")]
    EndBeforeStart,
}

/// An inclusive, 1-based page range.
///
/// Construction enforces `1 <= start <= end`, so a value of this type is
/// always a range the split service will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Result<Self, PageRangeError> {
        if start < 1 {
            return Err(PageRangeError::StartTooSmall);
        }
        if end < start {
            return Err(PageRangeError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn page_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_page_range() {
        let range = PageRange::new(3, 3).expect("valid range");
        assert_eq!(range.start(), 3);
        assert_eq!(range.end(), 3);
        assert_eq!(range.page_count(), 1);
    }

    #[test]
    fn rejects_zero_start_page() {
        assert_eq!(PageRange::new(0, 5), Err(PageRangeError::StartTooSmall));
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(PageRange::new(5, 3), Err(PageRangeError::EndBeforeStart));
    }
}
