pub const PREFERRED_ICON_WIDTH: u32 = 32;
pub const PREFERRED_ICON_HEIGHT: u32 = 32;

/// One ARGB bitmap decoded from a window's advertised icon data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Icon {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Decode `_NET_WM_ICON` property data: a sequence of
    /// `[width, height, width * height ARGB pixels]` blocks. Among the
    /// advertised candidates, the largest one fitting within the preferred
    /// bounds wins; if none fits, the smallest one overall. Returns `None`
    /// when no intact candidate can be extracted.
    pub fn from_cardinals(data: &[u32]) -> Option<Self> {
        let candidates = candidates(data);

        candidates
            .iter()
            .filter(|&&(width, height, _)| {
                width <= PREFERRED_ICON_WIDTH && height <= PREFERRED_ICON_HEIGHT
            })
            .max_by_key(|&&(width, height, _)| area(width, height))
            .or_else(|| {
                candidates
                    .iter()
                    .min_by_key(|&&(width, height, _)| area(width, height))
            })
            .map(|&(width, height, pixels)| Self {
                width,
                height,
                pixels: pixels.to_vec(),
            })
    }
}

#[inline]
fn area(
    width: u32,
    height: u32,
) -> u64 {
    u64::from(width) * u64::from(height)
}

fn candidates(mut data: &[u32]) -> Vec<(u32, u32, &[u32])> {
    let mut out = Vec::new();

    while data.len() >= 2 {
        let (width, height) = (data[0], data[1]);

        if width == 0 || height == 0 {
            data = &data[2..];
            continue;
        }

        let len = match (width as usize).checked_mul(height as usize) {
            Some(len) if len <= data.len() - 2 => len,
            // Truncated or absurd trailing block; keep what parsed so far.
            _ => break,
        };

        out.push((width, height, &data[2..2 + len]));
        data = &data[2 + len..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(
        width: u32,
        height: u32,
        fill: u32,
    ) -> Vec<u32> {
        let mut data = vec![width, height];
        data.extend(std::iter::repeat(fill).take((width * height) as usize));
        data
    }

    #[test]
    fn decodes_a_single_candidate() {
        let data = block(2, 2, 0xffff0000);
        let icon = Icon::from_cardinals(&data).unwrap();

        assert_eq!(icon.width(), 2);
        assert_eq!(icon.height(), 2);
        assert_eq!(icon.pixels(), &[0xffff0000; 4]);
    }

    #[test]
    fn prefers_the_largest_icon_fitting_the_preferred_size() {
        let mut data = block(16, 16, 1);
        data.extend(block(32, 32, 2));
        data.extend(block(64, 64, 3));

        let icon = Icon::from_cardinals(&data).unwrap();

        assert_eq!((icon.width(), icon.height()), (32, 32));
        assert_eq!(icon.pixels()[0], 2);
    }

    #[test]
    fn falls_back_to_the_smallest_icon_when_none_fits() {
        let mut data = block(64, 64, 1);
        data.extend(block(48, 48, 2));

        let icon = Icon::from_cardinals(&data).unwrap();

        assert_eq!((icon.width(), icon.height()), (48, 48));
        assert_eq!(icon.pixels()[0], 2);
    }

    #[test]
    fn tolerates_a_truncated_trailing_block() {
        let mut data = block(2, 2, 7);
        data.extend(&[8, 8, 0, 0]); // claims 64 pixels, provides 2

        let icon = Icon::from_cardinals(&data).unwrap();

        assert_eq!((icon.width(), icon.height()), (2, 2));
    }

    #[test]
    fn skips_zero_dimension_candidates() {
        let mut data = vec![0, 16];
        data.extend(block(4, 4, 9));

        let icon = Icon::from_cardinals(&data).unwrap();

        assert_eq!((icon.width(), icon.height()), (4, 4));
    }

    #[test]
    fn rejects_data_without_any_intact_candidate() {
        assert_eq!(Icon::from_cardinals(&[]), None);
        assert_eq!(Icon::from_cardinals(&[4]), None);
        assert_eq!(Icon::from_cardinals(&[4, 4, 1, 2]), None);
        assert_eq!(Icon::from_cardinals(&[u32::MAX, u32::MAX, 0]), None);
    }
}
