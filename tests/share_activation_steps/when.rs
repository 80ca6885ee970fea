//! When steps for share activation BDD scenarios.

use super::world::{ShareWorld, run_async};
use eyre::eyre;
use rstest_bdd_macros::when;

#[when("the share activation runs")]
fn activation_runs(world: &mut ShareWorld) -> Result<(), eyre::Report> {
    let activation = world.build_activation();
    let delivered = run_async(activation.run(&world.items))
        .ok_or_else(|| eyre!("a fresh activation should run"))?;
    world.first_run = Some(delivered);
    world.activation = Some(activation);
    Ok(())
}

#[when("the share activation runs again")]
fn activation_runs_again(world: &mut ShareWorld) -> Result<(), eyre::Report> {
    let activation = world
        .activation
        .as_ref()
        .ok_or_else(|| eyre!("activation has not run yet"))?;
    let second = run_async(activation.run(&world.items));
    world.second_run_ignored = Some(second.is_none());
    Ok(())
}
