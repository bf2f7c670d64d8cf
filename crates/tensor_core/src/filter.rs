//! Tensor rotation filter
//!
//! [`RotateTensorsFilter`] is the pipeline object the host drives. It holds
//! the rotation property, tracks what changed since the last run, and on
//! [`update`](RotateTensorsFilter::update) produces a shallow copy of its
//! input with a `<name>(rotated)` array added next to every 3x3 tensor
//! array, for both cell data and point data.

use std::sync::Arc;

use bitflags::bitflags;
use log::{debug, info, warn};
use serde::{Serialize, Deserialize};
use tensor_math::{RotationAngles, TensorRotator};

use crate::attributes::AttributeSet;
use crate::data_array::DataArray;
use crate::filter_error::FilterError;
use crate::mesh::{DataObjectKind, Mesh};

/// Suffix appended to the name of every rotated array
pub const ROTATED_SUFFIX: &str = "(rotated)";

/// Name under which the rotation of `name` is stored
pub fn rotated_name(name: &str) -> String {
    format!("{}{}", name, ROTATED_SUFFIX)
}

bitflags! {
    /// Flags indicating which filter inputs changed since the last update
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct FilterDirty: u8 {
        /// No changes
        const NONE = 0;
        /// Rotation angles were set
        const ROTATION = 1 << 0;
        /// A new input mesh was connected
        const INPUT = 1 << 1;
        /// Name collision policy changed
        const POLICY = 1 << 2;
        /// All flags set - output must be recomputed
        const ALL = Self::ROTATION.bits() | Self::INPUT.bits() | Self::POLICY.bits();
    }
}

/// What to do when `<name>(rotated)` already exists in the attribute set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCollisionPolicy {
    /// Replace the existing array, keeping its position
    #[default]
    Overwrite,
    /// Fail the invocation with [`FilterError::NameCollision`]
    Reject,
}

/// Summary of one filter invocation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Rotated arrays added to cell data
    pub rotated_cell_arrays: usize,
    /// Rotated arrays added to point data
    pub rotated_point_arrays: usize,
    /// Rotated arrays that replaced an existing array of the same name
    pub overwritten_arrays: usize,
}

impl FilterReport {
    /// Total number of rotated arrays
    pub fn total(&self) -> usize {
        self.rotated_cell_arrays + self.rotated_point_arrays
    }
}

/// Pipeline filter rotating every tensor array of an unstructured grid
#[derive(Debug, Clone)]
pub struct RotateTensorsFilter {
    rotation: RotationAngles,
    name_collision: NameCollisionPolicy,
    input: Option<Arc<Mesh>>,
    output: Option<Arc<Mesh>>,
    dirty: FilterDirty,
}

impl Default for RotateTensorsFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl RotateTensorsFilter {
    /// Create a filter with no rotation and no input
    pub fn new() -> Self {
        Self {
            rotation: RotationAngles::IDENTITY,
            name_collision: NameCollisionPolicy::default(),
            input: None,
            output: None,
            dirty: FilterDirty::ALL,
        }
    }

    /// Set the rotation angles (builder pattern)
    pub fn with_rotation(mut self, rotation: RotationAngles) -> Self {
        self.set_rotation_angles(rotation);
        self
    }

    /// Set the name collision policy (builder pattern)
    pub fn with_name_collision(mut self, policy: NameCollisionPolicy) -> Self {
        self.set_name_collision(policy);
        self
    }

    /// Current rotation angles (degrees)
    #[inline]
    pub fn rotation(&self) -> RotationAngles {
        self.rotation
    }

    /// Set the rotation about x, y and z in degrees.
    ///
    /// Always marks the filter modified, even if the angles are unchanged.
    pub fn set_rotation(&mut self, rx: f64, ry: f64, rz: f64) {
        self.set_rotation_angles(RotationAngles::new(rx, ry, rz));
    }

    /// Set the rotation from a [`RotationAngles`] triple
    pub fn set_rotation_angles(&mut self, rotation: RotationAngles) {
        self.rotation = rotation;
        self.mark_dirty(FilterDirty::ROTATION);
    }

    /// Current name collision policy
    #[inline]
    pub fn name_collision(&self) -> NameCollisionPolicy {
        self.name_collision
    }

    /// Set the name collision policy
    pub fn set_name_collision(&mut self, policy: NameCollisionPolicy) {
        self.name_collision = policy;
        self.mark_dirty(FilterDirty::POLICY);
    }

    /// Connect an input mesh
    pub fn set_input(&mut self, input: Arc<Mesh>) {
        self.input = Some(input);
        self.mark_dirty(FilterDirty::INPUT);
    }

    /// Connected input mesh, if any
    pub fn input(&self) -> Option<&Arc<Mesh>> {
        self.input.as_ref()
    }

    /// Output of the last successful update, unless invalidated since
    pub fn output(&self) -> Option<&Arc<Mesh>> {
        self.output.as_ref()
    }

    /// Pending change flags
    #[inline]
    pub fn dirty_flags(&self) -> FilterDirty {
        self.dirty
    }

    /// Whether the next update will recompute
    #[inline]
    pub fn is_modified(&self) -> bool {
        !self.dirty.is_empty()
    }

    fn mark_dirty(&mut self, flags: FilterDirty) {
        self.dirty |= flags;
        self.output = None;
    }

    /// Produce the output for the connected input.
    ///
    /// Returns the cached output when nothing changed since the last
    /// successful update. On failure no output is kept and the next call
    /// recomputes.
    pub fn update(&mut self) -> Result<Arc<Mesh>, FilterError> {
        if !self.is_modified() {
            if let Some(output) = &self.output {
                return Ok(Arc::clone(output));
            }
        }

        let input = self.input.clone().ok_or(FilterError::MissingInput)?;
        self.output = None;

        let (mesh, report) = self.request_data_with_report(&input)?;
        info!(
            "Rotated {} cell and {} point tensor arrays by ({}, {}, {}) degrees",
            report.rotated_cell_arrays,
            report.rotated_point_arrays,
            self.rotation.rx,
            self.rotation.ry,
            self.rotation.rz
        );

        let output = Arc::new(mesh);
        self.output = Some(Arc::clone(&output));
        self.dirty = FilterDirty::NONE;
        Ok(output)
    }

    /// Rotate the tensor arrays of `input` into a new mesh
    pub fn request_data(&self, input: &Mesh) -> Result<Mesh, FilterError> {
        self.request_data_with_report(input).map(|(mesh, _)| mesh)
    }

    /// Like [`request_data`](Self::request_data), also reporting what was added
    pub fn request_data_with_report(&self, input: &Mesh) -> Result<(Mesh, FilterReport), FilterError> {
        if input.kind() != DataObjectKind::UnstructuredGrid {
            return Err(FilterError::UnsupportedInput(input.kind()));
        }

        let rotator = TensorRotator::new(self.rotation);
        let mut output = input.shallow_copy();
        let mut report = FilterReport::default();

        let (cells, overwritten) = rotate_attributes(
            &rotator,
            &input.cell_data,
            &mut output.cell_data,
            self.name_collision,
        )?;
        report.rotated_cell_arrays = cells;
        report.overwritten_arrays += overwritten;

        let (points, overwritten) = rotate_attributes(
            &rotator,
            &input.point_data,
            &mut output.point_data,
            self.name_collision,
        )?;
        report.rotated_point_arrays = points;
        report.overwritten_arrays += overwritten;

        Ok((output, report))
    }
}

/// Rotate every tensor array of `source` into `target`.
///
/// Names are taken from `source` up front, so arrays added to `target` are
/// never rotated again in the same pass. Returns the number of arrays added
/// and how many of them replaced an existing name.
pub fn rotate_attributes<S: AttributeSet>(
    rotator: &TensorRotator,
    source: &S,
    target: &mut S,
    policy: NameCollisionPolicy,
) -> Result<(usize, usize), FilterError> {
    let mut rotated_count = 0;
    let mut overwritten = 0;

    for name in source.keys() {
        let Some(array) = source.get(&name) else {
            continue;
        };
        if !array.is_tensor_field() {
            continue;
        }

        let out_name = rotated_name(&name);
        let collides = target.contains(&out_name);
        if collides && policy == NameCollisionPolicy::Reject {
            return Err(FilterError::NameCollision(out_name));
        }

        let tensors = array.as_tensors(&name)?;
        let rotated = DataArray::tensors(&rotator.rotate_all(tensors));

        if collides {
            warn!("Overwriting existing array '{}'", out_name);
            overwritten += 1;
        }

        debug!("Rotated '{}' ({} tensors) into '{}'", name, tensors.len(), out_name);
        target.set(&out_name, Arc::new(rotated));
        rotated_count += 1;
    }

    Ok((rotated_count, overwritten))
}
