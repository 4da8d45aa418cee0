use crate::types::Corner;

/// Grow or shrink the X/Z footprint of the region spanned by two corners.
///
/// Each of the X and Z axes is handled independently: the corner with the
/// larger value moves by `+amount` and the other by `-amount`, so a positive
/// `amount` pushes the corners apart (expand) and a negative one pulls them
/// together (contract). Axes where the corners agree are left alone, and Y
/// is never touched here.
pub fn adjust_footprint(first: Corner, second: Corner, amount: i32) -> (Corner, Corner) {
    let (fx, sx) = adjust_axis(first.x, second.x, amount);
    let (fz, sz) = adjust_axis(first.z, second.z, amount);
    (
        Corner::new(fx, first.y, fz),
        Corner::new(sx, second.y, sz),
    )
}

fn adjust_axis(a: i32, b: i32, amount: i32) -> (i32, i32) {
    if a > b {
        (a + amount, b - amount)
    } else if a < b {
        (a - amount, b + amount)
    } else {
        (a, b)
    }
}
