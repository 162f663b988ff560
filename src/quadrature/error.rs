//----------------------------------------
// quadrature errors
//----------------------------------------
use crate::error::SpoonfulErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadratureErr {
    #[error("number of subdivisions must be positive; got {0}")]
    BadSubdivisionCount(usize),
    #[error("integration interval has zero width (a = b = {0})")]
    EmptyInterval(f64),
    #[error("Simpson's 1/3 rule needs an even number of subdivisions; got {0}")]
    OddSubdivisionCount(usize),
}

impl Into<SpoonfulErr> for QuadratureErr {
    fn into(self) -> SpoonfulErr {
        SpoonfulErr::Quadrature(self)
    }
}
