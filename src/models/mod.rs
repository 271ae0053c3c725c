//! Worked problems for the numerical-methods course
//!
//! Each model is a small struct carrying its physical parameters and
//! implementing the matching [`function`](crate::function) trait, plus
//! inherent methods for the closed-form reference solution where one
//! exists. The engines never special-case any of them — a model is
//! just a function model with a story.
//!
//! # Differential Equations ([`OdeSystem`](crate::function::OdeSystem))
//!
//! - [`NewtonCooling`]: a coffee cup cooling towards room temperature
//! - [`SirEpidemic`]: susceptible/infected/recovered outbreak dynamics
//!   (three coupled equations)
//! - [`CompoundInvestment`]: continuously compounded balance with
//!   periodic deposits
//!
//! # Definite Integrals ([`Integrand`](crate::function::Integrand))
//!
//! - [`DrugConcentration`]: plasma concentration curve; its integral
//!   is the AUC exposure metric
//! - [`RadioSignal`]: received signal; its integral is the delivered
//!   energy over a period
//! - [`PopulationGrowth`]: population curve; its integral is
//!   person-years over a horizon
//!
//! # Root Finding ([`Differentiable`](crate::function::Differentiable))
//!
//! - [`BeamVolume`]: side length of a cubic beam with a target volume
//! - [`ProjectileRange`]: distance at which a projectile crosses a
//!   target height
//! - [`GeostationaryOrbit`]: orbital radius matching a given period

// =================================================================================================
// Module Declarations
// =================================================================================================

mod beam;
mod cooling;
mod epidemic;
mod finance;
mod orbit;
mod pharmacokinetics;
mod population;
mod projectile;
mod signal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use beam::BeamVolume;
pub use cooling::NewtonCooling;
pub use epidemic::SirEpidemic;
pub use finance::CompoundInvestment;
pub use orbit::GeostationaryOrbit;
pub use pharmacokinetics::DrugConcentration;
pub use population::PopulationGrowth;
pub use projectile::ProjectileRange;
pub use signal::RadioSignal;
