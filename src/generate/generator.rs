//! Matrix sampling.

use super::config::MatrixConfig;
use crate::error::{Result, TspError};
use crate::matrix::CostMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random cost matrix.
///
/// The diagonal is zero. Off-diagonal costs are uniform in
/// `[min_cost, max_cost]`, whole numbers when `integral` is set, and
/// mirrored across the diagonal when `symmetric` is set.
///
/// # Examples
///
/// ```
/// use u_tsp::generate::{random_matrix, MatrixConfig};
///
/// let m = random_matrix(&MatrixConfig::new(4).with_seed(42)).unwrap();
/// assert_eq!(m.size(), 4);
/// assert_eq!(m.get(2, 2), 0.0);
/// assert!(m.is_symmetric(0.0));
/// ```
pub fn random_matrix(config: &MatrixConfig) -> Result<CostMatrix> {
    config.validate().map_err(TspError::InvalidConfig)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let n = config.size;
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i == j || (config.symmetric && j < i) {
                continue;
            }
            let cost = sample_cost(config, &mut rng);
            data[i * n + j] = cost;
            if config.symmetric {
                data[j * n + i] = cost;
            }
        }
    }

    log::debug!(
        "generated {n}x{n} matrix (symmetric: {}, seed: {:?})",
        config.symmetric,
        config.seed
    );
    CostMatrix::new(n, data)
}

fn sample_cost<R: Rng>(config: &MatrixConfig, rng: &mut R) -> f64 {
    if config.integral {
        let lo = config.min_cost.ceil() as u64;
        let hi = config.max_cost.floor() as u64;
        rng.random_range(lo..=hi) as f64
    } else {
        rng.random_range(config.min_cost..=config.max_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_diagonal() {
        let m = random_matrix(&MatrixConfig::new(6).with_seed(1)).expect("valid");
        for i in 0..6 {
            assert_eq!(m.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_cost_range_and_integral() {
        let config = MatrixConfig::new(8).with_cost_range(3.0, 9.0).with_seed(2);
        let m = random_matrix(&config).expect("valid");
        for i in 0..8 {
            for j in 0..8 {
                if i == j {
                    continue;
                }
                let c = m.get(i, j);
                assert!((3.0..=9.0).contains(&c), "cost {c} out of range");
                assert_eq!(c, c.round());
            }
        }
    }

    #[test]
    fn test_fractional_costs() {
        let config = MatrixConfig::new(5)
            .with_cost_range(0.5, 0.75)
            .with_integral(false)
            .with_seed(3);
        let m = random_matrix(&config).expect("valid");
        for i in 0..5 {
            for j in 0..5 {
                if i != j {
                    assert!((0.5..=0.75).contains(&m.get(i, j)));
                }
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let m = random_matrix(&MatrixConfig::new(7).with_seed(4)).expect("valid");
        assert!(m.is_symmetric(0.0));
    }

    #[test]
    fn test_asymmetric_allowed() {
        let config = MatrixConfig::new(7)
            .with_symmetric(false)
            .with_cost_range(1.0, 1000.0)
            .with_seed(5);
        let m = random_matrix(&config).expect("valid");
        assert!(!m.is_symmetric(0.0));
    }

    #[test]
    fn test_seed_reproducible() {
        let config = MatrixConfig::new(5).with_seed(99);
        let a = random_matrix(&config).expect("valid");
        let b = random_matrix(&config).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config() {
        let err = random_matrix(&MatrixConfig::new(1)).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)));
    }
}
