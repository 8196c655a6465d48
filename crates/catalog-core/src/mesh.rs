use fnv::FnvHashMap;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list (or line list for outlines).
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Axis-aligned bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn union(mut self, other: Aabb) -> Aabb {
        if !other.is_empty() {
            self.include(other.min);
            self.include(other.max);
        }
        self
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounds of this box after an affine transform.
    pub fn transformed(&self, m: &Mat4) -> Aabb {
        let mut out = Aabb::EMPTY;
        if self.is_empty() {
            return out;
        }
        for c in self.corners() {
            out.include(m.transform_point3(c));
        }
        out
    }
}

impl Mesh {
    pub fn bounds(&self) -> Aabb {
        let mut b = Aabb::EMPTY;
        for v in &self.vertices {
            b.include(Vec3::from(v.position));
        }
        b
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a planar quad given counter-clockwise corners (seen from `normal`).
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        for c in corners {
            self.vertices.push(Vertex::new(c, normal));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Unit cube centred on the origin with per-face normals. Panels scale it to
/// width × height × thickness.
pub fn unit_box() -> Mesh {
    let mut m = Mesh::default();
    let h = 0.5;
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    for (n, up, right) in faces {
        // right × up must equal n for counter-clockwise winding
        let (right, up) = if right.cross(up).dot(n) > 0.0 {
            (right, up)
        } else {
            (-right, up)
        };
        let c = n * h;
        m.push_quad(
            [
                c - right * h - up * h,
                c + right * h - up * h,
                c + right * h + up * h,
                c - right * h + up * h,
            ],
            n,
        );
    }
    m
}

/// Unit quad in the XY plane spanning x ∈ \[0, 1\], y ∈ \[-1, 0\], facing +Z.
/// Anchored at its top-left corner like a text block.
pub fn top_left_quad() -> Mesh {
    let mut m = Mesh::default();
    m.push_quad(
        [
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ],
        Vec3::Z,
    );
    m
}

/// Unit quad in the XZ plane centred on the origin, facing +Y.
pub fn ground_quad() -> Mesh {
    let mut m = Mesh::default();
    let h = 0.5;
    m.push_quad(
        [
            Vec3::new(-h, 0.0, h),
            Vec3::new(h, 0.0, h),
            Vec3::new(h, 0.0, -h),
            Vec3::new(-h, 0.0, -h),
        ],
        Vec3::Y,
    );
    m
}

/// Feature edges of a triangle mesh as a line list.
///
/// An edge is kept when it borders a single triangle or when the normals of
/// its two triangles differ by at least `threshold_deg`. Vertices are welded
/// by position first so split-normal meshes outline correctly.
pub fn outline_edges(mesh: &Mesh, threshold_deg: f32) -> Mesh {
    let cos_threshold = threshold_deg.to_radians().cos();
    let mut welder = Welder::default();

    // edge (lo, hi) -> normals of adjacent faces
    let mut edges: FnvHashMap<(u32, u32), Vec<Vec3>> = FnvHashMap::default();
    let mut order: Vec<(u32, u32)> = Vec::new();
    for tri in mesh.indices.chunks_exact(3) {
        let ids = [
            welder.weld(mesh.vertices[tri[0] as usize].position),
            welder.weld(mesh.vertices[tri[1] as usize].position),
            welder.weld(mesh.vertices[tri[2] as usize].position),
        ];
        if ids[0] == ids[1] || ids[1] == ids[2] || ids[0] == ids[2] {
            continue;
        }
        let positions = &welder.positions;
        let (a, b, c) = (
            positions[ids[0] as usize],
            positions[ids[1] as usize],
            positions[ids[2] as usize],
        );
        let n = (b - a).cross(c - a).normalize_or_zero();
        for (i, j) in [(0, 1), (1, 2), (2, 0)] {
            let e = (ids[i].min(ids[j]), ids[i].max(ids[j]));
            let list = edges.entry(e).or_insert_with(|| {
                order.push(e);
                Vec::new()
            });
            list.push(n);
        }
    }

    let mut out = Mesh::default();
    for e in order {
        let normals = &edges[&e];
        let keep = match normals.as_slice() {
            [_] => true,
            [n0, n1] => n0.dot(*n1) <= cos_threshold,
            _ => true,
        };
        if keep {
            let base = out.vertices.len() as u32;
            out.vertices
                .push(Vertex::new(welder.positions[e.0 as usize], Vec3::ZERO));
            out.vertices
                .push(Vertex::new(welder.positions[e.1 as usize], Vec3::ZERO));
            out.indices.extend_from_slice(&[base, base + 1]);
        }
    }
    out
}

#[derive(Default)]
struct Welder {
    index: FnvHashMap<[i64; 3], u32>,
    positions: Vec<Vec3>,
}

impl Welder {
    fn weld(&mut self, p: [f32; 3]) -> u32 {
        let key = p.map(|c| (c * 1e4).round() as i64);
        let positions = &mut self.positions;
        *self.index.entry(key).or_insert_with(|| {
            positions.push(Vec3::from(p));
            (positions.len() - 1) as u32
        })
    }
}
