use bc_lagrange::{
    Point, constants::{MAX_BASE, MIN_BASE}, decode_value, encode_value, reconstruct,
};
use num_bigint::{BigInt, RandBigInt};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

fn evaluate(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, coefficient| acc * x + coefficient)
}

fn subsets(len: usize, size: usize) -> Vec<Vec<usize>> {
    if size == 0 {
        return vec![vec![]];
    }
    if len < size {
        return vec![];
    }
    let mut with_last = subsets(len - 1, size - 1);
    with_last.iter_mut().for_each(|s| s.push(len - 1));
    let mut result = subsets(len - 1, size);
    result.extend(with_last);
    result
}

#[test]
fn test_every_subset_recovers_constant() {
    let mut rng = StdRng::seed_from_u64(0x5ec2e7);
    for threshold in 1..=5 {
        for _ in 0..8 {
            let coefficients: Vec<BigInt> = (0..threshold).map(|_| rng.gen_bigint(256)).collect();
            let mut xs: Vec<i64> = (-20..=20).filter(|x| *x != 0).collect();
            xs.shuffle(&mut rng);
            let points: Vec<Point> = xs[..threshold + 2]
                .iter()
                .map(|&x| {
                    let x = BigInt::from(x);
                    let y = evaluate(&coefficients, &x);
                    Point { x, y }
                })
                .collect();

            for subset in subsets(points.len(), threshold) {
                let selected: Vec<Point> = subset.iter().map(|&i| points[i].clone()).collect();
                assert_eq!(reconstruct(&selected, threshold).unwrap(), coefficients[0]);
            }
        }
    }
}

#[test]
fn test_reconstruct_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let coefficients: Vec<BigInt> = (0..4).map(|_| rng.gen_bigint(512)).collect();
    let points: Vec<Point> = (1..=6)
        .map(|x| Point { x: BigInt::from(x), y: evaluate(&coefficients, &BigInt::from(x)) })
        .collect();
    let first = reconstruct(&points, 4).unwrap();
    let second = reconstruct(&points, 4).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, coefficients[0]);
}

#[test]
fn test_threshold_one_returns_sample() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..16 {
        let y = rng.gen_bigint(300);
        let x = BigInt::from(rng.gen_range(1..1000i64));
        assert_eq!(reconstruct(&[Point { x, y: y.clone() }], 1).unwrap(), y);
    }
}

#[test]
fn test_decode_round_trip() {
    let mut rng = StdRng::seed_from_u64(36);
    for base in MIN_BASE..=MAX_BASE {
        for _ in 0..8 {
            let bits = rng.gen_range(1..400);
            let value = rng.gen_bigint(bits);
            let encoded = encode_value(&value, base).unwrap();
            assert_eq!(decode_value(&encoded, base).unwrap(), value);
            assert_eq!(decode_value(&encoded.to_uppercase(), base).unwrap(), value);

            let padded = match encoded.strip_prefix('-') {
                Some(digits) => format!("-000{digits}"),
                None => format!("000{encoded}"),
            };
            assert_eq!(decode_value(&padded, base).unwrap(), value);
        }
    }
}
