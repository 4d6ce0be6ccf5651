use crate::runtime::chain::Spine;
use crate::runtime::contour::{BodyProfile, Contours};
use crate::runtime::gait::{Foot, GaitController, checked_pair_anchors};
use crate::runtime::limbs::{Leg, LimbPlacer};
use crate::runtime::solver::{SolveReport, advance_spine};
use crate::{Bounds, Error, LizardConfig, Target};
use glam::Vec2;

/// Everything a render sink needs for one frame, borrowed from the lizard.
#[derive(Copy, Clone, Debug)]
pub struct Pose<'a> {
    pub joints: &'a [Vec2],
    pub body: &'a [Vec2],
    pub markings: &'a [Vec2],
    pub feet: &'a [Foot],
    pub legs: &'a [Leg],
}

/// One creature: its spine, outlines, feet and legs, driven once per tick.
#[derive(Clone, Debug)]
pub struct Lizard {
    config: LizardConfig,
    spine: Spine,
    tangents: Vec<f32>,
    contours: Contours,
    gait: GaitController,
    limbs: LimbPlacer,
}

impl Lizard {
    /// Builds a lizard lying straight along +x with its head at `origin`.
    ///
    /// The whole configuration is checked first; on error nothing is built.
    pub fn spawn(config: LizardConfig, origin: Vec2) -> Result<Self, Error> {
        config.validate()?;
        checked_pair_anchors(&config, config.segment_count())?;

        let spine = Spine::new(config.joint_count(), config.spacing(), origin)?;
        let gait = GaitController::new(&spine, &config)?;
        let mut lizard = Self {
            tangents: Vec::with_capacity(spine.segment_count()),
            contours: Contours::new(&BodyProfile::new(&config)),
            limbs: LimbPlacer::new(config.gait.knee_offset),
            config,
            spine,
            gait,
        };
        lizard.rebuild_geometry();

        log::debug!(
            "spawned lizard: {} joints, {} feet, spacing {}",
            lizard.spine.joint_count(),
            lizard.gait.feet().len(),
            lizard.spine.spacing()
        );
        Ok(lizard)
    }

    /// Advances one frame: spine, outlines, feet, then legs.
    pub fn tick(&mut self, target: &Target, bounds: Option<&Bounds>) -> SolveReport {
        let report = advance_spine(
            &mut self.spine,
            target,
            bounds,
            &self.config.solver,
            self.config.speed,
        );
        self.spine.resolve_tangents_into(&mut self.tangents);
        self.contours.rebuild(&self.spine, &self.tangents);
        self.gait.advance(&self.spine);
        self.limbs
            .rebuild(&self.spine, self.gait.feet(), &self.tangents);
        report
    }

    fn rebuild_geometry(&mut self) {
        self.spine.resolve_tangents_into(&mut self.tangents);
        self.contours.rebuild(&self.spine, &self.tangents);
        self.limbs
            .rebuild(&self.spine, self.gait.feet(), &self.tangents);
    }

    pub fn config(&self) -> &LizardConfig {
        &self.config
    }

    pub fn spine(&self) -> &Spine {
        &self.spine
    }

    /// Resolved tangent per spine segment, as of the last tick.
    pub fn tangents(&self) -> &[f32] {
        &self.tangents
    }

    pub fn contours(&self) -> &Contours {
        &self.contours
    }

    pub fn gait(&self) -> &GaitController {
        &self.gait
    }

    pub fn feet(&self) -> &[Foot] {
        self.gait.feet()
    }

    pub fn legs(&self) -> &[Leg] {
        self.limbs.legs()
    }

    pub fn pose(&self) -> Pose<'_> {
        Pose {
            joints: self.spine.joints(),
            body: self.contours.body(),
            markings: self.contours.markings(),
            feet: self.gait.feet(),
            legs: self.limbs.legs(),
        }
    }
}
