use crate::math::{Real, DEFAULT_EPSILON};
use na::{Point3, Vector3};

/// Distance under which a point is considered to lie on a facet plane.
pub const VISIBILITY_EPSILON: Real = DEFAULT_EPSILON * 100.0;

#[derive(Debug)]
pub struct TriangleFacet {
    pub valid: bool,
    pub affinely_dependent: bool,
    pub normal: Vector3<Real>,
    pub adj: [usize; 3],
    pub indirect_adj_id: [usize; 3],
    pub pts: [usize; 3],
    pub visible_points: Vec<usize>,
    pub furthest_point: usize,
    pub furthest_distance: Real,
}

impl TriangleFacet {
    /// Creates a facet whose normal points toward the side where `p1, p2, p3`
    /// appear counter-clockwise.
    pub fn new(p1: usize, p2: usize, p3: usize, points: &[Point3<Real>]) -> TriangleFacet {
        let p1p2 = points[p2] - points[p1];
        let p1p3 = points[p3] - points[p1];
        let cross = p1p2.cross(&p1p3);
        let affinely_dependent = relative_eq!(
            cross.norm_squared(),
            0.0,
            epsilon = VISIBILITY_EPSILON * VISIBILITY_EPSILON
        );
        let normal = if affinely_dependent {
            Vector3::zeros()
        } else {
            cross.normalize()
        };

        TriangleFacet {
            valid: true,
            affinely_dependent,
            normal,
            adj: [0, 0, 0],
            indirect_adj_id: [0, 0, 0],
            pts: [p1, p2, p3],
            visible_points: Vec::new(),
            furthest_point: usize::MAX,
            furthest_distance: 0.0,
        }
    }

    pub fn add_visible_point(&mut self, pid: usize, points: &[Point3<Real>]) {
        let distance = self.distance_to_point(pid, points);
        debug_assert!(distance > DEFAULT_EPSILON);

        if distance > self.furthest_distance {
            self.furthest_distance = distance;
            self.furthest_point = pid;
        }

        self.visible_points.push(pid);
    }

    pub fn distance_to_point(&self, point: usize, points: &[Point3<Real>]) -> Real {
        self.normal.dot(&(points[point] - points[self.pts[0]]))
    }

    pub fn set_facets_adjacency(&mut self, adj: [usize; 3], indirect_adj_id: [usize; 3]) {
        self.adj = adj;
        self.indirect_adj_id = indirect_adj_id;
    }

    pub fn first_point_from_edge(&self, id: usize) -> usize {
        self.pts[id]
    }

    pub fn second_point_from_edge(&self, id: usize) -> usize {
        self.pts[(id + 1) % 3]
    }

    pub fn can_see_point(&self, point: usize, points: &[Point3<Real>]) -> bool {
        // An affinely-dependent triangle cannot see any point.
        if self.affinely_dependent {
            return false;
        }

        self.distance_to_point(point, points) >= VISIBILITY_EPSILON
    }

    // Check that a given point can see this triangle,
    // making sure that the order of the three indices of
    // this triangle don't affect the test result.
    pub fn order_independent_can_be_seen_by_point(
        &self,
        point: usize,
        points: &[Point3<Real>],
    ) -> bool {
        // An affinely-dependent triangle can be seen by any point.
        if self.affinely_dependent {
            return true;
        }

        let pt = points[point];
        self.pts
            .iter()
            .any(|i| (pt - points[*i]).dot(&self.normal) >= 0.0)
    }
}
