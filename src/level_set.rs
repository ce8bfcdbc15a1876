//! Nodal signed-distance field consumed by the boundary kernel.
//!
//! `LevelSet` only stores what discretisation reads: the live signed-distance
//! values, an optional fixed "target" field, the narrow-band node list and the
//! per-iteration movement limit. Transport and reinitialisation of the field
//! are the caller's business.

use crate::config::LevelSetOptions;
use crate::geometry::Coord;
use crate::lsm_error::LsmError;
use crate::mesh::Mesh;

/// Which nodal field a discretisation pass reads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldSource {
    /// The live signed-distance field; edges are gated on narrow-band activity.
    #[default]
    SignedDistance,
    /// The fixed target field; narrow-band activity is ignored.
    Target,
}

/// Signed-distance field on the nodes of a [`Mesh`].
#[derive(Clone, Debug)]
pub struct LevelSet {
    /// Signed distance per node (positive in material).
    pub signed_distance: Vec<f64>,
    /// Optional fixed field used to discretise a reference boundary.
    pub target: Option<Vec<f64>>,
    /// Nodes in the active narrow band.
    pub narrow_band: Vec<usize>,
    /// CFL-style bound on boundary movement per iteration.
    pub move_limit: f64,
    options: LevelSetOptions,
}

impl LevelSet {
    /// Wrap an explicit nodal field and mark the narrow band on `mesh`.
    pub fn new(
        mesh: &mut Mesh,
        signed_distance: Vec<f64>,
        options: LevelSetOptions,
    ) -> Result<Self, LsmError> {
        options.validate()?;
        mesh.check_field(&signed_distance)?;
        let mut level_set = Self {
            signed_distance,
            target: None,
            narrow_band: Vec::new(),
            move_limit: options.move_limit,
            options,
        };
        level_set.update_narrow_band(mesh);
        Ok(level_set)
    }

    /// Sample `f` at every node of `mesh`.
    pub fn from_fn<F>(mesh: &mut Mesh, f: F, options: LevelSetOptions) -> Result<Self, LsmError>
    where
        F: Fn(Coord) -> f64,
    {
        let values = mesh.sample(f);
        Self::new(mesh, values, options)
    }

    /// Attach a fixed target field.
    pub fn with_target(mut self, mesh: &Mesh, target: Vec<f64>) -> Result<Self, LsmError> {
        mesh.check_field(&target)?;
        self.target = Some(target);
        Ok(self)
    }

    /// The nodal field selected by `source`.
    pub fn field(&self, source: FieldSource) -> Result<&[f64], LsmError> {
        match source {
            FieldSource::SignedDistance => Ok(&self.signed_distance),
            FieldSource::Target => self.target.as_deref().ok_or(LsmError::MissingTargetField),
        }
    }

    /// Rebuild the narrow band from the current field and flag active nodes.
    ///
    /// A node is active when `|φ| < band_width`.
    pub fn update_narrow_band(&mut self, mesh: &mut Mesh) {
        let band = self.options.band_width;
        self.narrow_band.clear();
        for (i, (node, &phi)) in mesh
            .nodes
            .iter_mut()
            .zip(self.signed_distance.iter())
            .enumerate()
        {
            node.is_active = phi.abs() < band;
            if node.is_active {
                self.narrow_band.push(i);
            }
        }
        log::debug!(
            "narrow band: {} of {} nodes active (band width {band})",
            self.narrow_band.len(),
            mesh.nodes.len()
        );
    }
}
