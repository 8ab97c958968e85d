use crate::{Error, Point2i};

/// Region identifier stored in a label image.
pub type Label = u32;

/// Label value reserved for pixels that belong to no region.
pub const BACKGROUND: Label = 0;

pub type LabelImage = Image<Label>;
pub type LabelView<'a> = ImageView<'a, Label>;

#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image by evaluating `f(x, y)` in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }

    /// Fills the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the image.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, value: T) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.data[y * self.width + x] = value.clone();
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn contains(&self, p: Point2i) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }
}

impl<T: Copy> ImageView<'_, T> {
    /// Pixel at a signed grid position, `None` outside the image.
    pub fn at(&self, p: Point2i) -> Option<T> {
        if !self.contains(p) {
            return None;
        }
        self.get(p.x as usize, p.y as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, LabelImage};
    use crate::{Error, Point2i};

    #[test]
    fn from_vec_checks_size() {
        let err = Image::from_vec(3, 2, vec![0u32; 5]).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert!(Image::from_vec(3, 2, vec![0u32; 6]).is_ok());
    }

    #[test]
    fn view_rows_and_access() {
        let img = Image::from_vec(3, 2, vec![1u32, 2, 3, 4, 5, 6]).expect("3x2 image");
        let view = img.as_view();

        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(2, 0), Some(&3));
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.at(Point2i::new(1, 1)), Some(5));
        assert_eq!(view.at(Point2i::new(-1, 0)), None);
        assert_eq!(view.at(Point2i::new(0, 2)), None);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut img = LabelImage::new_fill(4, 3, 0);
        img.fill_rect(2, 1, 10, 10, 7);

        let expected = [
            0, 0, 0, 0, // row 0
            0, 0, 7, 7, // row 1
            0, 0, 7, 7, // row 2
        ];
        assert_eq!(img.data(), &expected);

        *img.get_mut(0, 0).expect("in bounds") = 3;
        assert_eq!(img.as_view().at(Point2i::new(0, 0)), Some(3));
        assert!(img.get_mut(4, 0).is_none());
    }

    #[test]
    fn from_fn_is_row_major() {
        let img = Image::from_fn(3, 2, |x, y| (y * 10 + x) as u32);
        assert_eq!(img.data(), &[0, 1, 2, 10, 11, 12]);
    }
}
