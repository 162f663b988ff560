use crate::error::SpoonfulErr;
use crate::ode::error::OdeErr;
use crate::ode::plot::LinePlot;
use crate::util::linspace::linspace;

/// Initial-value problem `dy/dt = f(t, y)`, `y(t0) = ic`, sampled at `n`
/// evenly spaced times from `t0` to `tf`.
///
/// The time grid and step size are fixed at construction; the solution
/// buffer is allocated the first time [`Ode::rk4`] runs and overwritten in
/// place on every subsequent run.
#[derive(Debug, Clone)]
pub struct Ode {
    ic: f64,
    t: Vec<f64>,
    h: f64,
    y: Vec<f64>,
}

impl Ode {
    pub fn new(t0: f64, tf: f64, n: usize, ic: f64) -> Result<Ode, SpoonfulErr> {
        if n < 2 {
            return Err(OdeErr::TooFewSamples(n).into());
        }
        if t0 == tf {
            return Err(OdeErr::EmptyInterval(t0).into());
        }
        let t = linspace(t0, tf, n);
        let h = t[1] - t[0];
        Ok(Ode {
            ic,
            t,
            h,
            y: vec![],
        })
    }

    /// The fixed sample grid, for pairing with the solution returned by
    /// [`Ode::rk4`].
    pub fn times(&self) -> &[f64] {
        &self.t
    }

    /// Classical fourth-order Runge-Kutta.
    ///
    /// Four derivative estimates per step, weighted 1-2-2-1. The first
    /// solution slot is seeded with the initial condition before stepping;
    /// a zeroed buffer alone is only right when the initial condition
    /// happens to be zero.
    pub fn rk4<F>(&mut self, f: F) -> &[f64]
    where
        F: Fn(f64, f64) -> f64,
    {
        self.y.clear();
        self.y.resize(self.t.len(), 0.0);
        self.y[0] = self.ic;

        for i in 0..self.t.len() - 1 {
            let t_i = self.t[i];
            let y_i = self.y[i];
            let k_1 = f(t_i, y_i);
            let k_2 = f(t_i + self.h / 2.0, y_i + self.h * k_1 / 2.0);
            let k_3 = f(t_i + self.h / 2.0, y_i + self.h * k_2 / 2.0);
            let k_4 = f(t_i + self.h, y_i + self.h * k_3);

            self.y[i + 1] = y_i + (self.h / 6.0) * (k_1 + 2.0 * k_2 + 2.0 * k_3 + k_4);
        }

        &self.y
    }

    /// Same as [`Ode::rk4`], then hands the sample grid and solution to the
    /// supplied renderer with `label` as the plot title.
    pub fn rk4_with_plot<F, P>(&mut self, f: F, plotter: &mut P, label: &str) -> &[f64]
    where
        F: Fn(f64, f64) -> f64,
        P: LinePlot,
    {
        self.rk4(f);
        plotter.render(&self.t, &self.y, Some(label));
        &self.y
    }
}
