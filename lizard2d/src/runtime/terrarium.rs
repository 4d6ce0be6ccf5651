use crate::{Bounds, Error, Lizard, LizardConfig, Target};
use glam::Vec2;

/// Hosts independent lizards inside a shared viewport.
#[derive(Clone, Debug, Default)]
pub struct Terrarium {
    lizards: Vec<Lizard>,
    bounds: Option<Bounds>,
}

impl Terrarium {
    pub fn new(bounds: Option<Bounds>) -> Self {
        Self {
            lizards: Vec::new(),
            bounds,
        }
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Viewport resize. Lizards outside the new bounds steer back on their next tick.
    pub fn set_bounds(&mut self, bounds: Option<Bounds>) {
        self.bounds = bounds;
    }

    fn spawn_point(&self) -> Vec2 {
        self.bounds.map_or(Vec2::ZERO, |bounds| bounds.center())
    }

    /// Replaces every lizard with a new one at the center of the bounds.
    ///
    /// On error the current lizards are kept.
    pub fn spawn(&mut self, config: LizardConfig) -> Result<&Lizard, Error> {
        let lizard = Lizard::spawn(config, self.spawn_point())?;
        self.despawn_all();
        self.lizards.push(lizard);
        Ok(&self.lizards[0])
    }

    /// Adds a lizard next to the existing ones and returns its index.
    pub fn add(&mut self, config: LizardConfig, origin: Vec2) -> Result<usize, Error> {
        let lizard = Lizard::spawn(config, origin)?;
        self.lizards.push(lizard);
        Ok(self.lizards.len() - 1)
    }

    pub fn despawn_all(&mut self) {
        if !self.lizards.is_empty() {
            log::debug!("despawning {} lizard(s)", self.lizards.len());
        }
        self.lizards.clear();
    }

    pub fn lizards(&self) -> &[Lizard] {
        &self.lizards
    }

    /// Advances every lizard one frame toward the same target.
    pub fn tick(&mut self, target: &Target) {
        let bounds = self.bounds;
        for lizard in &mut self.lizards {
            lizard.tick(target, bounds.as_ref());
        }
    }
}
