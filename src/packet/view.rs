/// Borrowed window into a captured frame.
///
/// `offset` is the absolute position of `data[0]` inside the original frame,
/// so nodes added by a sub-handler still point at the right bytes.
#[derive(Debug, Clone, Copy)]
pub struct PacketView<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PacketView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn get_u8(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// True when `pattern` sits at `start`. Too few bytes is a non-match.
    pub fn matches_at(&self, start: usize, pattern: &[u8]) -> bool {
        self.slice(start, pattern.len()) == Some(pattern)
    }

    pub fn slice(&self, start: usize, len: usize) -> Option<&'a [u8]> {
        let end = start.checked_add(len)?;
        self.data.get(start..end)
    }

    pub fn subset_remaining(&self, start: usize) -> Option<PacketView<'a>> {
        let data = self.data.get(start..)?;
        Some(Self {
            data,
            offset: self.offset + start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::PacketView;

    #[test]
    fn matches_at_is_bounds_checked() {
        let view = PacketView::new(&[0x00, 0xff]);
        assert!(view.matches_at(1, &[0xff]));
        assert!(!view.matches_at(1, &[0xff, 0x03]));
        assert!(!view.matches_at(usize::MAX, &[0xff]));
    }

    #[test]
    fn subset_tracks_absolute_offset() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let view = PacketView::new(&bytes);
        let inner = view.subset_remaining(6).expect("subset in range");
        assert_eq!(inner.data(), &[7, 8]);
        assert_eq!(inner.offset(), 6);

        let nested = inner.subset_remaining(1).expect("nested subset");
        assert_eq!(nested.offset(), 7);

        let empty = view.subset_remaining(8).expect("subset at end");
        assert!(empty.is_empty());
        assert!(view.subset_remaining(9).is_none());
    }
}
