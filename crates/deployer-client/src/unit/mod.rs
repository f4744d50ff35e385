//! A workload unit as seen by the deploying machine agent.
use deployer_model::{
    BoolResults, Entities, ErrorResults, Life, PasswordChanges, unit_name_from_tag,
};
use tracing::debug;

use crate::{
    error::DeployerResult,
    state::{METHOD_CAN_DEPLOY, METHOD_REMOVE, METHOD_SET_PASSWORDS, State},
};

/// Handle onto one unit, holding the last life fetched from the controller.
///
/// Handles are obtained from [`State::unit`]. The cached life only changes on
/// [`Unit::refresh`].
#[derive(Debug)]
pub struct Unit {
    tag: String,
    life: Life,
    st: State,
}

impl Unit {
    pub(crate) fn new(tag: String, life: Life, st: State) -> Self {
        Self { tag, life, st }
    }

    /// Returns the unit's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the unit's name, e.g. `myapp/0`.
    ///
    /// `None` if the stored tag is not a unit tag.
    pub fn name(&self) -> Option<String> {
        unit_name_from_tag(&self.tag)
    }

    /// Returns the cached life without contacting the controller.
    pub fn life(&self) -> Life {
        self.life
    }

    /// Fetch the unit's life and replace the cached value.
    ///
    /// On error the cached value is left as it was.
    pub fn refresh(&mut self) -> DeployerResult<()> {
        let life = self.st.unit_life(&self.tag)?;
        if life != self.life {
            debug!(tag = %self.tag, from = %self.life, to = %life, "unit life changed");
        }
        self.life = life;
        Ok(())
    }

    /// Remove the unit from the controller.
    ///
    /// The controller makes the unit dead before purging it. Fails if the unit
    /// is not present.
    pub fn remove(&self) -> DeployerResult<()> {
        self.st
            .call_single::<_, ErrorResults>(METHOD_REMOVE, &self.tag, &Entities::single(&self.tag))
    }

    /// Set the unit's password.
    pub fn set_password(&self, password: &str) -> DeployerResult<()> {
        let args = PasswordChanges::single(&self.tag, password);
        self.st
            .call_single::<_, ErrorResults>(METHOD_SET_PASSWORDS, &self.tag, &args)
    }

    /// Reports whether the authenticated agent may deploy this unit.
    pub fn can_deploy(&self) -> DeployerResult<bool> {
        self.st
            .call_single::<_, BoolResults>(METHOD_CAN_DEPLOY, &self.tag, &Entities::single(&self.tag))
    }
}
