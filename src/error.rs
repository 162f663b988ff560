//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::ode::error::OdeErr;
pub use crate::quadrature::error::QuadratureErr;

#[derive(Error, Debug)]
pub enum SpoonfulErr {
    #[error("while setting up quadrature: {0}")]
    Quadrature(QuadratureErr),
    #[error("while solving ODE: {0}")]
    Ode(OdeErr),
}
