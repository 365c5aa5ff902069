//! Image wall for the gallery route: three contiguous columns that drift at
//! their own rate as the page scrolls.

pub const COLUMN_COUNT: usize = 3;

pub const GALLERY_IMAGES: [&str; 12] = [
    "https://images.unsplash.com/photo-1558655146-d09347e92766?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1542831371-29b0f74f9713?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550684847-75bdda21cc95?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550684848-86a5d8727436?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1515630278258-407f66498911?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=2000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550684847-75bdda21cc95?q=80&w=2000&auto=format&fit=crop",
];
pub const COLUMN_RATES: [f64; COLUMN_COUNT] = [-0.25, 0.2, -0.25];

/// Splits images into contiguous runs, one per column, keeping each image's
/// position in the source list.
pub fn columns(images: &[&'static str]) -> [Vec<(usize, &'static str)>; COLUMN_COUNT] {
    let per_column = images.len().div_ceil(COLUMN_COUNT).max(1);
    let mut columns: [Vec<(usize, &'static str)>; COLUMN_COUNT] = Default::default();

    for (position, image) in images.iter().copied().enumerate() {
        columns[(position / per_column).min(COLUMN_COUNT - 1)].push((position, image));
    }

    columns
}

/// Vertical shift for a column at the given scroll offset.
pub fn column_offset(scroll_top: f64, column: usize) -> f64 {
    COLUMN_RATES.get(column).map_or(0.0, |rate| scroll_top * rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_images_split_into_three_runs_of_four() {
        let [left, middle, right] = columns(&GALLERY_IMAGES);

        assert_eq!(left.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(middle.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![4, 5, 6, 7]);
        assert_eq!(right.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![8, 9, 10, 11]);
        assert_eq!(middle[0].1, GALLERY_IMAGES[4]);
    }

    #[test]
    fn uneven_lists_fill_leading_columns_first() {
        let images = ["/a.jpg", "/b.jpg", "/c.jpg", "/d.jpg", "/e.jpg"];
        let [left, middle, right] = columns(&images);

        assert_eq!(left.len(), 2);
        assert_eq!(middle.len(), 2);
        assert_eq!(right, vec![(4, "/e.jpg")]);
        assert!(columns(&[]).iter().all(Vec::is_empty));
    }

    #[test]
    fn outer_columns_drift_against_the_middle_one() {
        assert_eq!(column_offset(0.0, 1), 0.0);
        assert!(column_offset(400.0, 0) < 0.0);
        assert!(column_offset(400.0, 1) > 0.0);
        assert_eq!(column_offset(400.0, 0), column_offset(400.0, 2));
        assert_eq!(column_offset(400.0, COLUMN_COUNT), 0.0);
    }
}
