//! Triangle meshes and the OBJ adapter.

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::math::{Vec2, Vec3};

/// A triangle referencing three entries of the mesh's vertex list and,
/// optionally, three entries of its texture-coordinate list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub vertices: [usize; 3],
    pub uvs: Option<[usize; 3]>,
}

impl Face {
    pub fn new(vertices: [usize; 3]) -> Self {
        Self {
            vertices,
            uvs: None,
        }
    }

    pub fn with_uvs(vertices: [usize; 3], uvs: [usize; 3]) -> Self {
        Self {
            vertices,
            uvs: Some(uvs),
        }
    }
}

/// Object-space geometry: shared vertex and UV lists plus faces indexing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    uvs: Vec<Vec2>,
    faces: Vec<Face>,
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: false,
        ..Default::default()
    }
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, uvs: Vec<Vec2>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            vertices,
            uvs,
            faces,
        }
    }

    /// Loads every object/group of an OBJ file as a separate mesh.
    /// Polygons are triangulated; materials are ignored.
    pub fn load_all_from_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>> {
        let (models, _materials) = tobj::load_obj(path.as_ref(), &load_options())?;
        let meshes: Vec<Mesh> = models.into_iter().map(Self::from_tobj).collect();
        log::debug!(
            "loaded {} mesh(es) from {}",
            meshes.len(),
            path.as_ref().display()
        );
        Ok(meshes)
    }

    /// Like [`Mesh::load_all_from_obj`], reading OBJ text from memory.
    pub fn load_all_from_reader<R: BufRead>(reader: &mut R) -> Result<Vec<Mesh>> {
        let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })?;
        Ok(models.into_iter().map(Self::from_tobj).collect())
    }

    fn from_tobj(model: tobj::Model) -> Self {
        let mesh = model.mesh;
        let vertices = mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();
        let uvs = mesh
            .texcoords
            .chunks_exact(2)
            .map(|t| Vec2::new(t[0], t[1]))
            .collect();

        let has_uvs = mesh.texcoord_indices.len() == mesh.indices.len();
        let faces = mesh
            .indices
            .chunks_exact(3)
            .enumerate()
            .map(|(i, idx)| {
                let vertices = [idx[0] as usize, idx[1] as usize, idx[2] as usize];
                if has_uvs {
                    let t = &mesh.texcoord_indices[i * 3..i * 3 + 3];
                    Face::with_uvs(vertices, [t[0] as usize, t[1] as usize, t[2] as usize])
                } else {
                    Face::new(vertices)
                }
            })
            .collect();

        Self::new(model.name, vertices, uvs, faces)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Object-space corners of a face, or `None` if an index is out of range.
    pub fn face_vertices(&self, face: &Face) -> Option<[Vec3; 3]> {
        let [a, b, c] = face.vertices;
        Some([
            *self.vertices.get(a)?,
            *self.vertices.get(b)?,
            *self.vertices.get(c)?,
        ])
    }

    /// Texture coordinates of a face, or `None` if it has none or an index
    /// is out of range.
    pub fn face_uvs(&self, face: &Face) -> Option<[Vec2; 3]> {
        let [a, b, c] = face.uvs?;
        Some([*self.uvs.get(a)?, *self.uvs.get(b)?, *self.uvs.get(c)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD_OBJ: &str = "\
o quad
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
f 1/1 2/2 3/3 4/4
";

    #[test]
    fn test_obj_quad_is_triangulated_with_uvs() {
        let meshes = Mesh::load_all_from_reader(&mut QUAD_OBJ.as_bytes()).unwrap();
        assert_eq!(meshes.len(), 1);
        let mesh = &meshes[0];
        assert_eq!(mesh.name(), "quad");
        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.uvs().len(), 4);
        assert_eq!(mesh.faces().len(), 2);
        for face in mesh.faces() {
            assert!(mesh.face_vertices(face).is_some());
            assert!(mesh.face_uvs(face).is_some());
        }
    }

    #[test]
    fn test_obj_without_uvs() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let meshes = Mesh::load_all_from_reader(&mut obj.as_bytes()).unwrap();
        let face = meshes[0].faces()[0];
        assert_eq!(face.vertices, [0, 1, 2]);
        assert_eq!(face.uvs, None);
        assert_eq!(meshes[0].face_uvs(&face), None);
    }

    #[test]
    fn test_out_of_range_face_is_reported() {
        let mesh = Mesh::new("bad", vec![Vec3::ZERO; 2], vec![], vec![Face::new([0, 1, 2])]);
        assert_eq!(mesh.face_vertices(&mesh.faces()[0]), None);
    }
}
