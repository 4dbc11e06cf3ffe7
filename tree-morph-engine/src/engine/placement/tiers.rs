use constants::scene::{ORNAMENT_TIER_RED, ORNAMENT_TIER_ROSE, PARTICLE_GOLD_RATIO};
use rand::Rng;

/// Ornament appearance tiers, drawn 70% gold, 20% rose, 10% red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentTier {
    Gold,
    Rose,
    Red,
}

pub fn ornament_tier(rng: &mut impl Rng) -> OrnamentTier {
    let draw = rng.random::<f32>();
    if draw < ORNAMENT_TIER_RED {
        OrnamentTier::Red
    } else if draw < ORNAMENT_TIER_ROSE {
        OrnamentTier::Rose
    } else {
        OrnamentTier::Gold
    }
}

/// Particles are mostly emerald with a gold minority for sparkle.
pub fn particle_is_gold(rng: &mut impl Rng) -> bool {
    rng.random::<f32>() < PARTICLE_GOLD_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn ornament_tier_frequencies_match_the_split() {
        let mut rng = StdRng::seed_from_u64(23);
        let samples = 20_000;
        let mut gold = 0usize;
        let mut rose = 0usize;
        let mut red = 0usize;
        for _ in 0..samples {
            match ornament_tier(&mut rng) {
                OrnamentTier::Gold => gold += 1,
                OrnamentTier::Rose => rose += 1,
                OrnamentTier::Red => red += 1,
            }
        }
        let frac = |n: usize| n as f32 / samples as f32;
        assert!((frac(gold) - 0.7).abs() < 0.02);
        assert!((frac(rose) - 0.2).abs() < 0.02);
        assert!((frac(red) - 0.1).abs() < 0.02);
    }

    #[test]
    fn gold_particles_are_a_minority() {
        let mut rng = StdRng::seed_from_u64(29);
        let samples = 20_000;
        let gold = (0..samples).filter(|_| particle_is_gold(&mut rng)).count();
        let frac = gold as f32 / samples as f32;
        assert!((frac - PARTICLE_GOLD_RATIO).abs() < 0.02);
    }
}
