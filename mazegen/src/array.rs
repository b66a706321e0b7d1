use crate::dims::Dims;

/// Row-major 2D buffer addressed by [`Dims`].
///
/// The buffer is allocated once in the constructor and never grows, so indices
/// stay valid for the lifetime of the array.
#[derive(Debug, Clone)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position in row-major order.
    ///
    /// A negative component of `size` counts as zero, giving an empty array.
    pub fn from_fn(size: Dims, mut f: impl FnMut(Dims) -> T) -> Self {
        let (width, height) = (size.0.max(0) as usize, size.1.max(0) as usize);
        let buf = (0..width * height)
            .map(|i| f(Dims((i % width) as i32, (i / width) as i32)))
            .collect();
        Self { buf, width, height }
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }
}
