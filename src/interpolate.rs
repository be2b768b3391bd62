use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{Error, Point, Result};

/// Calculate the numerator and denominator of the lagrange basis polynomial
/// for point `i`, evaluated at `x`:
///
/// ```text
///                ---     (x-xc[j])
///   l_i(x)   =   | |   -------------
///              j != i  (xc[i]-xc[j])
/// ```
///
/// Both products are multiplied out in full. Nothing is divided here, since a
/// partial product need not be divisible even when the whole term is.
fn lagrange_basis(points: &[Point], i: usize, x: &BigInt) -> Result<(BigInt, BigInt)> {
    let xi = &points[i].x;
    points
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .try_fold((BigInt::one(), BigInt::one()), |(numerator, denominator), (_, point)| {
            let difference = xi - &point.x;
            if difference.is_zero() {
                return Err(Error::DuplicateShareX(point.x.clone()));
            }
            Ok((numerator * (x - &point.x), denominator * difference))
        })
}

/// Sum of lagrange terms held as a reduced fraction with a positive
/// denominator.
struct TermSum {
    numerator: BigInt,
    denominator: BigInt,
}

impl TermSum {
    fn new() -> Self {
        Self { numerator: BigInt::zero(), denominator: BigInt::one() }
    }

    fn add_integer(mut self, term: BigInt) -> Self {
        self.numerator += term * &self.denominator;
        self
    }

    fn add_fraction(self, numerator: BigInt, denominator: BigInt) -> Self {
        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let sum = self.numerator * &denominator + numerator * &self.denominator;
        let denominator = self.denominator * denominator;
        let divisor = sum.gcd(&denominator);
        Self { numerator: sum / &divisor, denominator: denominator / divisor }
    }

    fn into_integer(self) -> Result<BigInt> {
        if self.denominator.is_one() {
            Ok(self.numerator)
        } else {
            Err(Error::NonIntegralSecret)
        }
    }
}

/// Evaluate the polynomial interpolating every point in `points` at `x`.
///
/// Each term `y_i * l_i(x)` is divided exactly once, after its numerator and
/// denominator have been fully formed. A term that does not divide evenly is
/// carried as a fraction rather than truncated, and the total must come out
/// integral or `Error::NonIntegralSecret` is returned.
///
/// Fails with `Error::DuplicateShareX` if two points share an x-coordinate.
pub fn interpolate(points: &[Point], x: &BigInt) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::InsufficientShares { threshold: 1, available: 0 });
    }

    let sum = (0..points.len()).try_fold(TermSum::new(), |sum, i| {
        let (numerator, denominator) = lagrange_basis(points, i, x)?;
        let numerator = &points[i].y * numerator;
        let (quotient, remainder) = numerator.div_rem(&denominator);
        if remainder.is_zero() {
            trace!("term {i}: {quotient}");
            Ok::<_, Error>(sum.add_integer(quotient))
        } else {
            trace!("term {i}: {numerator}/{denominator}");
            Ok(sum.add_fraction(numerator, denominator))
        }
    })?;

    sum.into_integer()
}

/// Recover the constant term of the polynomial from the first `threshold`
/// points.
///
/// Points beyond the threshold are ignored; callers wanting a different
/// subset must order `points` accordingly. With a threshold of 1 the result is
/// the sole point's y-value.
///
/// ```
/// use bc_lagrange::{Point, reconstruct};
/// use num_bigint::BigInt;
///
/// // y = x^2 + 3
/// let points = [Point::new(1, 4), Point::new(2, 7), Point::new(3, 12)];
/// assert_eq!(reconstruct(&points, 3).unwrap(), BigInt::from(3));
/// ```
pub fn reconstruct(points: &[Point], threshold: usize) -> Result<BigInt> {
    if threshold < 1 || points.len() < threshold {
        return Err(Error::InsufficientShares { threshold, available: points.len() });
    }
    debug!("Reconstructing from the first {} of {} points", threshold, points.len());
    interpolate(&points[..threshold], &BigInt::zero())
}
