// src/extract/resolve.rs
// =============================================================================
// Turns the href of a link into an absolute URL.
//
// Resolution follows the URL standard, the same rules a browser uses when
// you click a link:
// - "https://other.com/x"  -> kept as is (already absolute)
// - "//cdn.example.com/a"  -> scheme taken from the base
// - "/docs"                -> scheme and host taken from the base
// - "../up"                -> path segments merged, "." and ".." removed
// - "#top"                 -> base with the fragment replaced
// - ""                     -> the base itself
//
// Unlike a link checker we do NOT filter out mailto:, tel: or javascript:
// here. Every href is a link for crawl purposes; the fetcher is the one that
// refuses to download non-HTTP URLs.
// =============================================================================

use url::Url;

use crate::error::ResolveError;

// Resolves `reference` against `base` and returns the canonical string form.
//
// Example:
//   base = "https://example.com/a/b"
//   reference = "../c?x=1" -> "https://example.com/c?x=1"
pub fn resolve(base: &Url, reference: &str) -> Result<String, ResolveError> {
    // Url::join handles absolute, protocol-relative, path-relative and
    // fragment-only references in one go
    base.join(reference)
        .map(String::from)
        .map_err(|source| ResolveError {
            base: base.to_string(),
            reference: reference.to_string(),
            source,
        })
}

// Parses and canonicalises a URL typed by a human (the seed).
//
// "https://Example.com" becomes "https://example.com/", which is the form
// resolve() produces for links pointing back at the same page.
pub fn canonicalize(raw: &str) -> Result<Url, url::ParseError> {
    Url::parse(raw.trim())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does resolve() return a String and not a Url?
//    - The visited set compares URLs by their string form
//    - Url's Display output is already normalized (lowercase host,
//      default port removed, empty path becomes "/")
//
// 2. What does .map(String::from) do?
//    - Url implements From<Url> for String
//    - Passing the function by name is shorter than |u| u.to_string()
//
// 3. When can join() fail?
//    - Only when the result is not a valid URL, e.g. "http://[::1"
//      (unclosed IPv6 bracket) or a port above 65535
// -----------------------------------------------------------------------------
