use rand::Rng;

/// Extracts the last page number from a `Link` header value.
///
/// GitHub's pagination header lists the `rel="last"` entry at the end, so
/// the final run of digits followed by a non-numeric tail is the page
/// count. `None` means the header carries no pagination (single-page
/// results); callers treat that as "one page", not as an error.
pub fn last_page(link: &str) -> Option<u32> {
    let bytes = link.as_bytes();
    let tail = bytes
        .iter()
        .rev()
        .take_while(|b| !b.is_ascii_digit())
        .count();
    if tail == 0 || tail == bytes.len() {
        return None;
    }
    let digits_end = bytes.len() - tail;
    let digits_start = bytes[..digits_end]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map(|i| i + 1)
        .unwrap_or(0);
    link[digits_start..digits_end].parse().ok()
}

/// Uniform random page number in `[1, last_page]`.
pub fn random_page(last_page: u32) -> u32 {
    rand::thread_rng().gen_range(1..=last_page.max(1))
}
