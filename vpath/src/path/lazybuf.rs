//! Copy-on-write output buffer for the lexical cleaner.
//!
//! While the cleaned output is a prefix of the input, nothing is allocated:
//! the buffer only advances a write cursor. The first write that differs
//! from the input allocates one buffer sized to the input and copies the
//! bytes written so far.

/// Overlay buffer over the non-volume part of a path.
#[derive(Debug)]
pub(crate) struct LazyBuf<'a> {
    path: &'a [u8],
    overlay: Option<Vec<u8>>,
    w: usize,
    vol_and_path: &'a str,
    vol_len: usize,
}

impl<'a> LazyBuf<'a> {
    /// Creates a buffer over `vol_and_path[vol_len..]`.
    pub(crate) fn new(vol_and_path: &'a str, vol_len: usize) -> Self {
        Self {
            path: &vol_and_path.as_bytes()[vol_len..],
            overlay: None,
            w: 0,
            vol_and_path,
            vol_len,
        }
    }

    /// Number of bytes written.
    pub(crate) fn len(&self) -> usize {
        self.w
    }

    /// Byte at output position `i`, which must be below [`Self::len`].
    pub(crate) fn index(&self, i: usize) -> u8 {
        match &self.overlay {
            Some(buf) => buf[i],
            None => self.path[i],
        }
    }

    /// Moves the write cursor back to `w`.
    pub(crate) fn truncate(&mut self, w: usize) {
        self.w = self.w.min(w);
    }

    pub(crate) fn append(&mut self, c: u8) {
        if self.overlay.is_none() {
            if self.path.get(self.w) == Some(&c) {
                self.w += 1;
                return;
            }
            let mut buf = vec![0; self.path.len()];
            buf[..self.w].copy_from_slice(&self.path[..self.w]);
            self.overlay = Some(buf);
        }
        if let Some(buf) = &mut self.overlay {
            if let Some(slot) = buf.get_mut(self.w) {
                *slot = c;
            } else {
                buf.push(c);
            }
        }
        self.w += 1;
    }

    /// Whether the output has diverged from the input.
    #[cfg(test)]
    pub(crate) fn is_allocated(&self) -> bool {
        self.overlay.is_some()
    }

    /// The volume prefix followed by the bytes written.
    pub(crate) fn into_string(self) -> String {
        match self.overlay {
            None => String::from_utf8_lossy(&self.vol_and_path.as_bytes()[..self.vol_len + self.w])
                .into_owned(),
            Some(buf) => {
                let mut out = Vec::with_capacity(self.vol_len + self.w);
                out.extend_from_slice(&self.vol_and_path.as_bytes()[..self.vol_len]);
                out.extend_from_slice(&buf[..self.w]);
                String::from_utf8(out)
                    .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}
