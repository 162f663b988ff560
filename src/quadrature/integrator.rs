use crate::error::SpoonfulErr;
use crate::quadrature::error::QuadratureErr;
use std::time::Instant;

/// Fixed-node quadrature over `[a, b]` with `n` equal subdivisions.
///
/// The node grid is the canonical one: `n + 1` points `x_i = a + i*dx`
/// spanning the interval endpoints, `dx = (b - a) / n`. Both rules are
/// pure functions of the stored interval, so one instance can be reused
/// across integrands and calls.
#[derive(Debug, Clone)]
pub struct Integrator {
    a: f64,
    b: f64,
    n: usize,
    dx: f64,
}

impl Integrator {
    pub fn new(a: f64, b: f64, n: usize) -> Result<Integrator, SpoonfulErr> {
        if n == 0 {
            return Err(QuadratureErr::BadSubdivisionCount(n).into());
        }
        if a == b {
            return Err(QuadratureErr::EmptyInterval(a).into());
        }
        Ok(Integrator {
            a,
            b,
            n,
            dx: (b - a) / n as f64,
        })
    }

    /// Composite Simpson's 1/3 rule.
    ///
    /// Interior nodes alternate weights 4 and 2 (odd/even index), endpoints
    /// get weight 1, all scaled by `dx/3`. The alternation only closes out
    /// correctly when `n` is even, so odd `n` is rejected instead of
    /// silently mis-weighting the last panel.
    pub fn simpson<F>(&self, f: F) -> Result<f64, SpoonfulErr>
    where
        F: Fn(f64) -> f64,
    {
        if self.n % 2 != 0 {
            return Err(QuadratureErr::OddSubdivisionCount(self.n).into());
        }

        let start = Instant::now();
        let mut s = (self.dx / 3.0) * (f(self.a) + f(self.b));
        for i in 1..self.n {
            let x = self.a + i as f64 * self.dx;
            let w = if i % 2 == 1 { 4.0 } else { 2.0 };
            s += (w * self.dx / 3.0) * f(x);
        }
        println!("Finished in {:?}", start.elapsed());

        Ok(s)
    }

    /// Composite trapezoidal rule: `(dx/2)*(f(a) + f(b)) + dx * sum of
    /// interior evaluations`. Never fails once the interval is validated.
    pub fn trapezoid<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let start = Instant::now();
        let mut s = (self.dx / 2.0) * (f(self.a) + f(self.b));
        for i in 1..self.n {
            s += self.dx * f(self.a + i as f64 * self.dx);
        }
        println!("Finished in {:?}", start.elapsed());

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_constant_is_interval_width() {
        // Exact for any n >= 1
        for n in [1, 2, 3, 10, 101] {
            let quad = Integrator::new(-2.5, 4.0, n).unwrap();
            assert!((quad.trapezoid(|_| 1.0) - 6.5).abs() < 1e-12);
        }
    }

    #[test]
    fn simpson_constant_is_interval_width() {
        for n in [2, 4, 10, 100] {
            let quad = Integrator::new(-2.5, 4.0, n).unwrap();
            assert!((quad.simpson(|_| 1.0).unwrap() - 6.5).abs() < 1e-12);
        }
    }

    #[test]
    fn linear_integrand_converges_to_half() {
        let quad = Integrator::new(0.0, 1.0, 100).unwrap();
        assert!((quad.trapezoid(|x| x) - 0.5).abs() < 1e-10);
        assert!((quad.simpson(|x| x).unwrap() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn trapezoid_x_squared() {
        let quad = Integrator::new(0.0, 1.0, 100).unwrap();
        assert!((quad.trapezoid(|x| x * x) - 1.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn doubling_n_shrinks_error_trapezoid() {
        // Integral of sin over [0, pi] is exactly 2
        let mut prev_err = f64::INFINITY;
        for n in [8, 16, 32, 64, 128] {
            let quad = Integrator::new(0.0, std::f64::consts::PI, n).unwrap();
            let err = (quad.trapezoid(|x| x.sin()) - 2.0).abs();
            assert!(err < prev_err);
            prev_err = err;
        }
    }

    #[test]
    fn doubling_n_shrinks_error_simpson() {
        let mut prev_err = f64::INFINITY;
        for n in [8, 16, 32, 64, 128] {
            let quad = Integrator::new(0.0, std::f64::consts::PI, n).unwrap();
            let err = (quad.simpson(|x| x.sin()).unwrap() - 2.0).abs();
            assert!(err < prev_err);
            prev_err = err;
        }
    }

    #[test]
    fn simpson_beats_trapezoid_on_smooth_integrand() {
        let quad = Integrator::new(0.0, std::f64::consts::PI, 32).unwrap();
        let simpson_err = (quad.simpson(|x| x.sin()).unwrap() - 2.0).abs();
        let trapezoid_err = (quad.trapezoid(|x| x.sin()) - 2.0).abs();
        assert!(simpson_err < trapezoid_err);
    }

    #[test]
    fn repeated_calls_are_identical() {
        // a, b, n, dx must not drift between calls
        let quad = Integrator::new(0.0, 2.0, 64).unwrap();
        let first = quad.trapezoid(|x| x.exp());
        let second = quad.trapezoid(|x| x.exp());
        assert_eq!(first, second);

        let first = quad.simpson(|x| x.exp()).unwrap();
        let second = quad.simpson(|x| x.exp()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_subdivisions_err() {
        if let Err(e) = Integrator::new(0.0, 1.0, 0) {
            assert_eq!(
                String::from(
                    "while setting up quadrature: number of \
                    subdivisions must be positive; got 0"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn empty_interval_err() {
        if let Err(e) = Integrator::new(3.0, 3.0, 10) {
            assert_eq!(
                String::from(
                    "while setting up quadrature: integration interval \
                    has zero width (a = b = 3)"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn odd_subdivisions_simpson_err() {
        let quad = Integrator::new(0.0, 1.0, 7).unwrap();
        if let Err(e) = quad.simpson(|x| x) {
            assert_eq!(
                String::from(
                    "while setting up quadrature: Simpson's 1/3 rule \
                    needs an even number of subdivisions; got 7"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
