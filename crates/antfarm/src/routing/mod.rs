pub mod dispatch;
pub(crate) mod network;
pub mod search;
pub mod serialize;
pub mod simulate;
pub mod types;

#[cfg(test)]
mod tests;

use crate::farm::Farm;
use types::{Plan, RouteError};

/// Route a farm end to end.
///
/// Finds the maximum set of vertex-disjoint source-to-sink paths, spreads the
/// ants over them, and simulates the resulting schedule.
///
/// # Arguments
/// * `farm` - The parsed, immutable farm.
///
/// # Returns
/// A [`Plan`] holding the chosen paths, the per-ant assignment, and the
/// turn-by-turn schedule. Fails with [`RouteError::NoPath`] when the sink is
/// unreachable; any other failure is an internal invariant violation.
pub fn plan(farm: &Farm) -> Result<Plan, RouteError> {
    let paths = search::find_disjoint_paths(farm)?;
    let assignment = dispatch::assign(&paths, farm.ant_count());
    let schedule = simulate::run(farm, &paths, &assignment)?;
    Ok(Plan {
        paths,
        assignment,
        schedule,
    })
}
