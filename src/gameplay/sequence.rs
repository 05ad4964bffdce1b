use rand::Rng;

/// Draw the tier of an upcoming preview ball: uniform over the first
/// `easy_tiers` entries of the size table, independent of prior draws.
pub fn draw_tier<R: Rng + ?Sized>(rng: &mut R, easy_tiers: usize) -> usize {
    rng.gen_range(0..easy_tiers.max(1))
}
