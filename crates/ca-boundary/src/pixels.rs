use std::collections::HashSet;

use ca_core::{BACKGROUND, Label, LabelView, Point2i};

const DX: [i32; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [i32; 8] = [0, -1, -1, -1, 0, 1, 1, 1];
const DIRS_C4: [u8; 4] = [0, 2, 4, 6];
const DIRS_C8: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    C4,
    C8,
}

/// Grid neighbors of `p`, counter-clockwise from `+x` on screen. Not clipped.
pub fn neighbors(p: Point2i, connectivity: Connectivity) -> impl Iterator<Item = Point2i> {
    dirs_for(connectivity)
        .iter()
        .map(move |&dir| Point2i::new(p.x + DX[dir as usize], p.y + DY[dir as usize]))
}

/// Background pixels with both `label1` and `label2` among their in-image
/// 4-connected neighbors, in row-major order.
///
/// The relation is symmetric in the two labels. Background is never a
/// region, so a pair involving label `0` has no wall.
pub fn find_boundary_pixels(img: &LabelView<'_>, label1: Label, label2: Label) -> Vec<Point2i> {
    let mut out = Vec::new();
    if label1 == BACKGROUND || label2 == BACKGROUND {
        return out;
    }

    for y in 0..img.height() {
        let row = img.row(y);
        for (x, &label) in row.iter().enumerate() {
            if label != BACKGROUND {
                continue;
            }

            let p = Point2i::new(x as i32, y as i32);
            let mut has1 = false;
            let mut has2 = false;
            for nb in neighbors(p, Connectivity::C4) {
                let Some(l) = img.at(nb) else {
                    continue;
                };
                has1 |= l == label1;
                has2 |= l == label2;
            }

            if has1 && has2 {
                out.push(p);
            }
        }
    }

    out
}

/// Pixels of the set with exactly one 8-connected neighbor in the set.
///
/// `pixels` is treated as a set; output keeps input order. A simple open arc
/// yields its two ends, other shapes may yield any count.
pub fn find_extremities(pixels: &[Point2i]) -> Vec<Point2i> {
    let members: HashSet<Point2i> = pixels.iter().copied().collect();

    let mut seen = HashSet::with_capacity(members.len());
    let mut out = Vec::with_capacity(2);
    for &p in pixels {
        if !seen.insert(p) {
            continue;
        }

        let degree = neighbors(p, Connectivity::C8)
            .filter(|nb| members.contains(nb))
            .count();
        if degree == 1 {
            out.push(p);
        }
    }

    out
}

#[inline]
fn dirs_for(connectivity: Connectivity) -> &'static [u8] {
    match connectivity {
        Connectivity::C4 => &DIRS_C4,
        Connectivity::C8 => &DIRS_C8,
    }
}
