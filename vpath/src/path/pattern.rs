//! Shell pattern matching for file names.
//!
//! The pattern syntax is:
//!
//! ```text
//! pattern:
//!     { term }
//! term:
//!     '*'         matches any sequence of non-separator characters
//!     '?'         matches any single non-separator character
//!     '[' [ '^' ] { character-range } ']'
//!                 character class (must be non-empty)
//!     c           matches character c (c != '*', '?', '\\', '[')
//!     '\\' c      matches character c (POSIX semantics only)
//!
//! character-range:
//!     c           matches character c (c != '\\', '-', ']')
//!     '\\' c      matches character c (POSIX semantics only)
//!     lo '-' hi   matches character c for lo <= c <= hi
//! ```
//!
//! Under Windows semantics `\` is a path separator, so escaping is disabled.

use crate::error::{Error, Result};
use crate::os::PathContext;

/// Internal marker for a syntax error; the caller attaches the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BadPattern;

type ChunkResult<T> = std::result::Result<T, BadPattern>;

impl PathContext {
    /// Reports whether `name` matches the shell pattern `pattern`.
    ///
    /// The whole name must match, not just a substring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPattern`] when the pattern is syntactically
    /// invalid. The check covers the whole pattern even when the name has
    /// already failed to match, so `Ok(false)` always means a well-formed
    /// pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{OsKind, PathContext};
    ///
    /// let linux = PathContext::new(OsKind::Linux);
    /// assert!(linux.match_pattern("*.txt", "a.txt").unwrap());
    /// assert!(!linux.match_pattern("*.txt", "dir/a.txt").unwrap());
    /// assert!(linux.match_pattern("a[", "x").is_err());
    /// ```
    pub fn match_pattern(&self, pattern: &str, name: &str) -> Result<bool> {
        self.match_inner(pattern, name)
            .map_err(|BadPattern| Error::malformed(pattern))
    }

    fn match_inner(&self, mut pattern: &str, mut name: &str) -> ChunkResult<bool> {
        let sep = self.separator();
        'pattern: while !pattern.is_empty() {
            let (star, chunk, rest) = self.scan_chunk(pattern);
            pattern = rest;
            if star && chunk.is_empty() {
                // Trailing * matches the rest of the name unless it has a separator.
                return Ok(!name.contains(sep));
            }

            // Match at the current position first. A final chunk must
            // consume the whole name, or the star may still do better.
            if let Some(t) = self.match_chunk(chunk, name)? {
                if t.is_empty() || !pattern.is_empty() {
                    name = t;
                    continue;
                }
            }

            if star {
                // Retry after skipping 1, 2, ... characters, never a separator.
                let candidate = name;
                for (i, c) in candidate.char_indices() {
                    if c == sep {
                        break;
                    }
                    if let Some(t) = self.match_chunk(chunk, &candidate[i + c.len_utf8()..])? {
                        if pattern.is_empty() && !t.is_empty() {
                            continue;
                        }
                        name = t;
                        continue 'pattern;
                    }
                }
            }

            // No match; still reject a malformed remainder.
            while !pattern.is_empty() {
                let (_, chunk, rest) = self.scan_chunk(pattern);
                pattern = rest;
                self.match_chunk(chunk, "")?;
            }
            return Ok(false);
        }
        Ok(name.is_empty())
    }

    /// Splits off the leading stars and the following non-star chunk.
    ///
    /// Returns `(star, chunk, rest)`.
    pub(crate) fn scan_chunk<'p>(&self, pattern: &'p str) -> (bool, &'p str, &'p str) {
        let trimmed = pattern.trim_start_matches('*');
        let star = trimmed.len() != pattern.len();

        let b = trimmed.as_bytes();
        let mut in_range = false;
        let mut i = 0;
        while i < b.len() {
            match b[i] {
                // the escaped byte is skipped; a trailing `\` is reported by match_chunk
                b'\\' if self.escapes() && i + 1 < b.len() => i += 1,
                b'[' => in_range = true,
                b']' => in_range = false,
                b'*' if !in_range => break,
                _ => {}
            }
            i += 1;
        }
        (star, &trimmed[..i], &trimmed[i..])
    }

    /// Matches `chunk` against the start of `s`.
    ///
    /// Returns the unmatched remainder of `s`, or `None` on mismatch. After
    /// a mismatch the rest of the chunk is still scanned, without reading
    /// `s`, so a malformed chunk is always reported.
    fn match_chunk<'s>(&self, mut chunk: &str, mut s: &'s str) -> ChunkResult<Option<&'s str>> {
        let sep = self.separator();
        let mut failed = false;
        while let Some(&head) = chunk.as_bytes().first() {
            if !failed && s.is_empty() {
                failed = true;
            }
            match head {
                b'[' => {
                    let mut r = None;
                    if !failed {
                        let mut chars = s.chars();
                        r = chars.next();
                        s = chars.as_str();
                    }
                    chunk = &chunk[1..];
                    let negated = chunk.starts_with('^');
                    if negated {
                        chunk = &chunk[1..];
                    }
                    let mut matched = false;
                    let mut ranges = 0;
                    loop {
                        if ranges > 0 && chunk.starts_with(']') {
                            chunk = &chunk[1..];
                            break;
                        }
                        let (lo, rest) = self.get_esc(chunk)?;
                        chunk = rest;
                        let mut hi = lo;
                        if chunk.starts_with('-') {
                            let (h, rest) = self.get_esc(&chunk[1..])?;
                            hi = h;
                            chunk = rest;
                        }
                        if r.is_some_and(|r| lo <= r && r <= hi) {
                            matched = true;
                        }
                        ranges += 1;
                    }
                    if matched == negated {
                        failed = true;
                    }
                }
                b'?' => {
                    if !failed {
                        let mut chars = s.chars();
                        if chars.next() == Some(sep) {
                            failed = true;
                        }
                        s = chars.as_str();
                    }
                    chunk = &chunk[1..];
                }
                _ => {
                    if head == b'\\' && self.escapes() {
                        chunk = &chunk[1..];
                        if chunk.is_empty() {
                            return Err(BadPattern);
                        }
                    }
                    let mut pattern_chars = chunk.chars();
                    let want = pattern_chars.next();
                    if !failed {
                        let mut chars = s.chars();
                        if chars.next() != want {
                            failed = true;
                        }
                        s = chars.as_str();
                    }
                    chunk = pattern_chars.as_str();
                }
            }
        }
        Ok(if failed { None } else { Some(s) })
    }

    /// Reads one possibly escaped character of a class range.
    fn get_esc<'c>(&self, chunk: &'c str) -> ChunkResult<(char, &'c str)> {
        let mut rest = match chunk.as_bytes().first() {
            None | Some(b'-' | b']') => return Err(BadPattern),
            Some(_) => chunk,
        };
        if self.escapes() && rest.starts_with('\\') {
            rest = &rest[1..];
        }
        let mut chars = rest.chars();
        let c = chars.next().ok_or(BadPattern)?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(BadPattern);
        }
        Ok((c, rest))
    }

    /// Reports whether `path` contains any glob meta-characters.
    ///
    /// `\` counts as one only where it escapes, i.e. under POSIX semantics.
    #[must_use]
    pub fn has_meta(&self, path: &str) -> bool {
        let magic: &[char] = if self.escapes() {
            &['*', '?', '[', '\\']
        } else {
            &['*', '?', '[']
        };
        path.contains(magic)
    }
}

#[cfg(test)]
mod tests {
    use crate::{OsKind, PathContext};

    const WINDOWS: PathContext = PathContext::new(OsKind::Windows);
    const LINUX: PathContext = PathContext::new(OsKind::Linux);

    // (pattern, name, matched, malformed)
    const MATCH_CASES: &[(&str, &str, bool, bool)] = &[
        ("abc", "abc", true, false),
        ("*", "abc", true, false),
        ("*c", "abc", true, false),
        ("a*", "a", true, false),
        ("a*", "abc", true, false),
        ("a*", "ab/c", false, false),
        ("a*/b", "abc/b", true, false),
        ("a*/b", "a/c/b", false, false),
        ("a*b*c*d*e*/f", "axbxcxdxe/f", true, false),
        ("a*b*c*d*e*/f", "axbxcxdxexxx/f", true, false),
        ("a*b*c*d*e*/f", "axbxcxdxe/xxx/f", false, false),
        ("a*b*c*d*e*/f", "axbxcxdxexxx/fff", false, false),
        ("a*b?c*x", "abxbbxdbxebxczzx", true, false),
        ("a*b?c*x", "abxbbxdbxebxczzy", false, false),
        ("ab[c]", "abc", true, false),
        ("ab[b-d]", "abc", true, false),
        ("ab[e-g]", "abc", false, false),
        ("ab[^c]", "abc", false, false),
        ("ab[^b-d]", "abc", false, false),
        ("ab[^e-g]", "abc", true, false),
        ("a\\*b", "a*b", true, false),
        ("a\\*b", "ab", false, false),
        ("a?b", "a☺b", true, false),
        ("a[^a]b", "a☺b", true, false),
        ("a???b", "a☺b", false, false),
        ("a[^a][^a][^a]b", "a☺b", false, false),
        ("[a-ζ]*", "α", true, false),
        ("*[a-ζ]", "A", false, false),
        ("a?b", "a/b", false, false),
        ("a*b", "a/b", false, false),
        ("[\\]a]", "]", true, false),
        ("[\\-]", "-", true, false),
        ("[x\\-]", "x", true, false),
        ("[x\\-]", "-", true, false),
        ("[x\\-]", "z", false, false),
        ("[\\-x]", "x", true, false),
        ("[\\-x]", "-", true, false),
        ("[\\-x]", "a", false, false),
        ("[]a]", "]", false, true),
        ("[-]", "-", false, true),
        ("[x-]", "x", false, true),
        ("[x-]", "-", false, true),
        ("[x-]", "z", false, true),
        ("[-x]", "x", false, true),
        ("[-x]", "-", false, true),
        ("[-x]", "a", false, true),
        ("\\", "a", false, true),
        ("[a-b-c]", "a", false, true),
        ("[", "a", false, true),
        ("[^", "a", false, true),
        ("[^bc", "a", false, true),
        ("a[", "a", false, true),
        ("a[", "ab", false, true),
        ("a[", "x", false, true),
        ("a/b[", "x", false, true),
        ("*x", "xxx", true, false),
    ];

    #[test]
    fn test_match_posix() {
        for &(pattern, name, matched, malformed) in MATCH_CASES {
            match LINUX.match_pattern(pattern, name) {
                Ok(got) => {
                    assert!(!malformed, "match({pattern:?}, {name:?}) should be malformed");
                    assert_eq!(got, matched, "match({pattern:?}, {name:?})");
                }
                Err(err) => {
                    assert!(malformed, "match({pattern:?}, {name:?}) failed: {err}");
                    assert!(err.is_malformed_pattern());
                }
            }
        }
    }

    #[test]
    fn test_match_windows_disables_escapes() {
        // "\" is a separator: "*" and "?" stop at it and it cannot escape.
        assert!(!WINDOWS.match_pattern("a*", "a\\b").unwrap());
        assert!(!WINDOWS.match_pattern("a?b", "a\\b").unwrap());
        assert!(WINDOWS.match_pattern("a\\b", "a\\b").unwrap());
        assert!(!WINDOWS.match_pattern("a\\*b", "a*b").unwrap());
        assert!(WINDOWS.match_pattern("[\\]", "\\").unwrap());
        // "/" is not the native separator, so wildcards cross it
        assert!(WINDOWS.match_pattern("a*", "a/b").unwrap());
        assert!(WINDOWS.match_pattern("\\", "\\").unwrap());
    }

    #[test]
    fn test_failed_match_still_validates_pattern() {
        // Would fail on the first byte, but the class is unterminated.
        let err = LINUX.match_pattern("x[a-", "y").unwrap_err();
        assert!(err.is_malformed_pattern());
        // Well-formed and not matching.
        assert!(!LINUX.match_pattern("x[a-c]", "y").unwrap());
        // Validation continues into later chunks.
        assert!(LINUX.match_pattern("a*b[", "zzz").is_err());
        assert!(LINUX.match_pattern("[", "").is_err());
        assert!(!LINUX.match_pattern("*.txt", "").unwrap());
    }

    #[test]
    fn test_scan_chunk() {
        assert_eq!(LINUX.scan_chunk("**a?b*c"), (true, "a?b", "*c"));
        assert_eq!(LINUX.scan_chunk("a[*]b*"), (false, "a[*]b", "*"));
        assert_eq!(LINUX.scan_chunk("a\\*b*c"), (false, "a\\*b", "*c"));
        assert_eq!(WINDOWS.scan_chunk("a\\*b*c"), (false, "a\\", "*b*c"));
        assert_eq!(LINUX.scan_chunk("*"), (true, "", ""));
    }

    #[test]
    fn test_has_meta() {
        assert!(LINUX.has_meta("a*"));
        assert!(LINUX.has_meta("a\\b"));
        assert!(!LINUX.has_meta("a/b"));
        assert!(!WINDOWS.has_meta("a\\b"));
        assert!(WINDOWS.has_meta("c:\\a[b]"));
    }
}
