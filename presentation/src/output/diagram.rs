//! ASCII sketch of the reconstructed box.

use brick_domain::BrickDimensions;

/// Render a fixed-perspective box sketch with the edge labels beneath.
///
/// The sketch itself never changes; only the labels carry the numbers.
/// `a` is the width (non-shared leg of the first face), `b` the height
/// (the shared edge), `c` the depth (non-shared leg of the second face).
pub fn brick_sketch(brick: &BrickDimensions) -> String {
    let mut out = String::new();
    out.push_str("        +--------------+\n");
    out.push_str("       /|             /|\n");
    out.push_str("      / |            / |\n");
    out.push_str("     +--------------+  |\n");
    out.push_str("     |  |           |  |\n");
    out.push_str("     |  +-----------|--+\n");
    out.push_str("     | /            | /\n");
    out.push_str("     |/             |/\n");
    out.push_str("     +--------------+\n");
    out.push('\n');
    out.push_str(&format!(
        "     a = {} (width)   b = {} (height, shared edge)   c = {} (depth)\n",
        brick.a, brick.b, brick.c
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sketch_carries_all_three_labels() {
        let sketch = brick_sketch(&BrickDimensions::new(44, 117, 240));
        assert!(sketch.contains("a = 44"));
        assert!(sketch.contains("b = 117"));
        assert!(sketch.contains("c = 240"));
    }
}
