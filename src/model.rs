//! 3D model representation containing multiple meshes.
//!
//! A [`Model`] owns everything one render reads: its meshes, its world
//! transform and an optional texture. Nothing is shared; dropping the model
//! releases all of it.

use std::path::Path;

use crate::error::Result;
use crate::mesh::Mesh;
use crate::texture::Texture;
use crate::transform::Transform;

pub struct Model {
    name: String,
    meshes: Vec<Mesh>,
    transform: Transform,
    texture: Option<Texture>,
}

impl Model {
    /// Create a new empty model with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
            transform: Transform::default(),
            texture: None,
        }
    }

    /// Load a model from an OBJ file.
    ///
    /// All objects/groups in the OBJ file become separate meshes within this model.
    pub fn from_obj<P: AsRef<Path>>(name: impl Into<String>, path: P) -> Result<Self> {
        let mut model = Self::new(name);
        model.meshes = Mesh::load_all_from_obj(path)?;
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Get a mesh by name.
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.meshes.iter().find(|m| m.name() == name)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    /// Total number of faces over all meshes.
    pub fn face_count(&self) -> usize {
        self.meshes.iter().map(|m| m.faces().len()).sum()
    }

    pub fn set_texture(&mut self, texture: Texture) {
        self.texture = Some(texture);
    }

    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }
}
