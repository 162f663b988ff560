//----------------------------------------
// ode errors
//----------------------------------------
use crate::error::SpoonfulErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OdeErr {
    #[error("need at least 2 time samples to define a step size; got {0}")]
    TooFewSamples(usize),
    #[error("time interval has zero width (t0 = tf = {0})")]
    EmptyInterval(f64),
}

impl Into<SpoonfulErr> for OdeErr {
    fn into(self) -> SpoonfulErr {
        SpoonfulErr::Ode(self)
    }
}
