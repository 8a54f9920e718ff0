//! Story page parser - rebuilds per-page text from generated story lines.
//!
//! Generated stories mark page boundaries twice: with a label line such as
//! `1ページ目:` and with a blank line after the page body. Either signal
//! alone closes the current page.

/// Lines starting with this prefix carry the book title and belong to no page.
pub const TITLE_PREFIX: &str = "Title:";

/// Literal suffix of a page label line (`<N>ページ目:`).
pub const PAGE_LABEL_SUFFIX: &str = "ページ目:";

/// Returns `true` if `line` is a page label: one or more ASCII digits
/// followed by [`PAGE_LABEL_SUFFIX`] and nothing else.
///
/// The number is never interpreted; labels only delimit pages.
pub fn is_page_label(line: &str) -> bool {
    line.strip_suffix(PAGE_LABEL_SUFFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Rebuilds exactly `page_count` page bodies from generated story lines.
///
/// Pages are emitted in input order. The label line stays at the top of
/// its page body. Missing pages are padded with empty strings and surplus
/// pages are dropped, so the result always has `page_count` entries.
///
/// Never fails: malformed model output degrades to empty pages.
pub fn parse_pages<S: AsRef<str>>(lines: &[S], page_count: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref().trim();

        if line.starts_with(TITLE_PREFIX) {
            continue;
        }

        if is_page_label(line) {
            flush(&mut buffer, &mut pages);
            buffer.push(line);
        } else if line.is_empty() {
            flush(&mut buffer, &mut pages);
        } else {
            buffer.push(line);
        }
    }
    flush(&mut buffer, &mut pages);

    #[cfg(feature = "tracing")]
    {
        if pages.len() > page_count {
            tracing::warn!(
                "Dropping {} surplus pages (found {}, expected {})",
                pages.len() - page_count,
                pages.len(),
                page_count
            );
        } else if pages.len() < page_count {
            tracing::debug!(
                "Padding {} empty pages (found {}, expected {})",
                page_count - pages.len(),
                pages.len(),
                page_count
            );
        }
    }

    pages.resize(page_count, String::new());
    pages
}

/// Splits a whole generated story into lines and parses its pages.
///
/// Accepts both `\n` and `\r\n` line endings.
pub fn parse_generated_text(text: &str, page_count: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    parse_pages(&lines, page_count)
}

fn flush(buffer: &mut Vec<&str>, pages: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    pages.push(buffer.join("\n").trim().to_string());
    buffer.clear();
}
