use crate::core::geometry::{Bounds3f, Point3f, Ray, Vector3f};
use crate::core::interaction::Intersection;
use crate::core::primitive::Primitive;
use crate::core::utils::slice_extension::SliceExtension;
use smallvec::SmallVec;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitMethod {
    Middle,
    EqualCounts
}

/// Bounding volume hierarchy over the scene primitives, flattened into a
/// linear node array for traversal.
pub struct BVHAccel {
    primitives: Vec<Arc<dyn Primitive>>,
    nodes: Vec<LinearBVHNode>
}

struct BVHPrimitiveInfo {
    primitive_number: usize,
    bounds: Bounds3f,
    centroid: Point3f
}

impl BVHPrimitiveInfo {
    fn new(primitive_number: usize, bounds: Bounds3f) -> BVHPrimitiveInfo {
        BVHPrimitiveInfo {
            primitive_number,
            bounds,
            centroid: bounds.min + bounds.diagonal() * 0.5
        }
    }
}

struct BVHBuildNode {
    bounds: Bounds3f,
    children: Option<[Box<BVHBuildNode>; 2]>,
    split_axis: usize,
    first_prim_offset: usize,
    n_primitives: usize
}

impl BVHBuildNode {
    fn leaf(first_prim_offset: usize, n_primitives: usize, bounds: Bounds3f) -> BVHBuildNode {
        BVHBuildNode {
            bounds,
            children: None,
            split_axis: 0,
            first_prim_offset,
            n_primitives
        }
    }

    fn interior(split_axis: usize, c0: BVHBuildNode, c1: BVHBuildNode) -> BVHBuildNode {
        let bounds = c0.bounds.union(&c1.bounds);
        BVHBuildNode {
            bounds,
            children: Some([Box::new(c0), Box::new(c1)]),
            split_axis,
            first_prim_offset: 0,
            n_primitives: 0
        }
    }
}

#[derive(Debug)]
struct LinearBVHNode {
    bounds: Bounds3f,
    /// Primitive offset for leaves, second child offset for interiors.
    offset: usize,
    n_primitives: u16,
    axis: u8
}

impl BVHAccel {
    pub fn new(p: Vec<Arc<dyn Primitive>>, max_prims_in_node: usize, split_method: SplitMethod) -> BVHAccel {
        let num_primitives = p.len();
        if num_primitives == 0 {
            return BVHAccel { primitives: p, nodes: Vec::new() };
        }

        let mut primitive_info: Vec<BVHPrimitiveInfo> = (0..num_primitives)
            .map(|i| BVHPrimitiveInfo::new(i, p[i].world_bound()))
            .collect();

        let mut total_nodes = 0;
        let mut ordered_prims: Vec<Arc<dyn Primitive>> = Vec::with_capacity(num_primitives);
        let root = BVHAccel::recursive_build(
            max_prims_in_node.max(1),
            split_method,
            &p,
            &mut primitive_info,
            0,
            num_primitives,
            &mut total_nodes,
            &mut ordered_prims
        );

        info!("BVH created with {} nodes for {} primitives", total_nodes, num_primitives);

        let mut nodes: Vec<LinearBVHNode> = Vec::with_capacity(total_nodes);
        BVHAccel::flatten_tree(&root, &mut nodes);
        debug_assert_eq!(nodes.len(), total_nodes);

        BVHAccel { primitives: ordered_prims, nodes }
    }

    fn recursive_build(
        max_prims_in_node: usize,
        split_method: SplitMethod,
        primitives: &[Arc<dyn Primitive>],
        primitive_info: &mut Vec<BVHPrimitiveInfo>,
        start: usize,
        end: usize,
        total_nodes: &mut usize,
        ordered_prims: &mut Vec<Arc<dyn Primitive>>
    ) -> BVHBuildNode {
        debug_assert!(start < end);
        *total_nodes += 1;
        let mut bounds = Bounds3f::default();
        for info in &primitive_info[start..end] {
            bounds = bounds.union(&info.bounds);
        }

        let n_primitives = end - start;
        if n_primitives <= max_prims_in_node {
            return BVHAccel::build_leaf(primitives, primitive_info, start, end, ordered_prims, bounds);
        }

        // Bound of primitive centroids, used to choose the split dimension.
        let mut centroid_bounds = Bounds3f::default();
        for info in &primitive_info[start..end] {
            centroid_bounds = centroid_bounds.union_point(&info.centroid);
        }
        let dim = centroid_bounds.maximum_extent();
        if centroid_bounds.max[dim] == centroid_bounds.min[dim] {
            return BVHAccel::build_leaf(primitives, primitive_info, start, end, ordered_prims, bounds);
        }

        let mut mid = (start + end) / 2;
        match split_method {
            SplitMethod::Middle => {
                let pmid = (centroid_bounds.min[dim] + centroid_bounds.max[dim]) * 0.5;
                let split = primitive_info[start..end].partition(|info| info.centroid[dim] < pmid);
                mid = start + split;
                if mid == start || mid == end {
                    // The spatial split put everything on one side.
                    mid = (start + end) / 2;
                    primitive_info[start..end]
                        .partial_sort(mid - start, |a, b| a.centroid[dim] < b.centroid[dim]);
                }
            }
            SplitMethod::EqualCounts => {
                primitive_info[start..end]
                    .partial_sort(mid - start, |a, b| a.centroid[dim] < b.centroid[dim]);
            }
        }

        let c0 = BVHAccel::recursive_build(
            max_prims_in_node,
            split_method,
            primitives,
            primitive_info,
            start,
            mid,
            total_nodes,
            ordered_prims
        );
        let c1 = BVHAccel::recursive_build(
            max_prims_in_node,
            split_method,
            primitives,
            primitive_info,
            mid,
            end,
            total_nodes,
            ordered_prims
        );
        BVHBuildNode::interior(dim, c0, c1)
    }

    fn build_leaf(
        primitives: &[Arc<dyn Primitive>],
        primitive_info: &[BVHPrimitiveInfo],
        start: usize,
        end: usize,
        ordered_prims: &mut Vec<Arc<dyn Primitive>>,
        bounds: Bounds3f
    ) -> BVHBuildNode {
        let first_prim_offset = ordered_prims.len();
        for info in &primitive_info[start..end] {
            ordered_prims.push(primitives[info.primitive_number].clone());
        }
        BVHBuildNode::leaf(first_prim_offset, end - start, bounds)
    }

    fn flatten_tree(node: &BVHBuildNode, nodes: &mut Vec<LinearBVHNode>) -> usize {
        let my_offset = nodes.len();
        nodes.push(LinearBVHNode {
            bounds: node.bounds,
            offset: node.first_prim_offset,
            n_primitives: node.n_primitives as u16,
            axis: node.split_axis as u8
        });
        if let Some(children) = &node.children {
            BVHAccel::flatten_tree(&children[0], nodes);
            let second = BVHAccel::flatten_tree(&children[1], nodes);
            nodes[my_offset].offset = second;
        }
        my_offset
    }

    /// Nearest intersection of the ray with any primitive in the tree.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut ray = ray.clone();
        let inv_dir = Vector3f::new(1.0 / ray.d.x, 1.0 / ray.d.y, 1.0 / ray.d.z);
        let dir_is_neg = [
            (inv_dir.x < 0.0) as usize,
            (inv_dir.y < 0.0) as usize,
            (inv_dir.z < 0.0) as usize
        ];

        let mut result = None;
        let mut current = 0;
        let mut to_visit: SmallVec<[usize; 64]> = SmallVec::new();
        loop {
            let node = &self.nodes[current];
            if node.bounds.intersect_p(&ray, &inv_dir, &dir_is_neg) {
                if node.n_primitives > 0 {
                    for i in 0..node.n_primitives as usize {
                        if let Some(isect) = self.primitives[node.offset + i].intersect(&ray) {
                            ray.t_max = isect.t;
                            result = Some(isect);
                        }
                    }
                    match to_visit.pop() {
                        Some(next) => current = next,
                        None => break
                    }
                } else if dir_is_neg[node.axis as usize] == 1 {
                    to_visit.push(current + 1);
                    current = node.offset;
                } else {
                    to_visit.push(node.offset);
                    current += 1;
                }
            } else {
                match to_visit.pop() {
                    Some(next) => current = next,
                    None => break
                }
            }
        }
        result
    }

    /// Predicate test: does the ray hit anything at all.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let inv_dir = Vector3f::new(1.0 / ray.d.x, 1.0 / ray.d.y, 1.0 / ray.d.z);
        let dir_is_neg = [
            (inv_dir.x < 0.0) as usize,
            (inv_dir.y < 0.0) as usize,
            (inv_dir.z < 0.0) as usize
        ];

        let mut current = 0;
        let mut to_visit: SmallVec<[usize; 64]> = SmallVec::new();
        loop {
            let node = &self.nodes[current];
            if node.bounds.intersect_p(ray, &inv_dir, &dir_is_neg) {
                if node.n_primitives > 0 {
                    for i in 0..node.n_primitives as usize {
                        if self.primitives[node.offset + i].intersect_p(ray) {
                            return true;
                        }
                    }
                    match to_visit.pop() {
                        Some(next) => current = next,
                        None => break
                    }
                } else if dir_is_neg[node.axis as usize] == 1 {
                    to_visit.push(current + 1);
                    current = node.offset;
                } else {
                    to_visit.push(node.offset);
                    current += 1;
                }
            } else {
                match to_visit.pop() {
                    Some(next) => current = next,
                    None => break
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lucent::{Float, Spectrum};
    use crate::core::primitive::GeometricPrimitive;
    use crate::core::rng::Rng;
    use crate::shapes::Sphere;

    fn sphere_grid() -> Vec<Arc<dyn Primitive>> {
        let mut prims: Vec<Arc<dyn Primitive>> = Vec::new();
        for x in 0..4 {
            for y in 0..4 {
                for z in 0..4 {
                    let center = Point3f::new(x as Float * 3.0, y as Float * 3.0, z as Float * 3.0);
                    let sphere = Arc::new(Sphere::new(center, 0.6));
                    prims.push(Arc::new(GeometricPrimitive::new(sphere, None, Spectrum::default())));
                }
            }
        }
        prims
    }

    fn linear_intersect(prims: &[Arc<dyn Primitive>], ray: &Ray) -> Option<Intersection> {
        let mut ray = ray.clone();
        let mut nearest = None;
        for prim in prims {
            if let Some(isect) = prim.intersect(&ray) {
                ray.t_max = isect.t;
                nearest = Some(isect);
            }
        }
        nearest
    }

    fn random_ray(rng: &mut Rng) -> Ray {
        let o = Point3f::new(
            rng.uniform_float() * 12.0 - 1.5,
            rng.uniform_float() * 12.0 - 1.5,
            rng.uniform_float() * 12.0 - 1.5
        );
        let d = Vector3f::new(
            rng.uniform_float() * 2.0 - 1.0,
            rng.uniform_float() * 2.0 - 1.0,
            rng.uniform_float() * 2.0 - 1.0
        );
        if d.length_squared() < 1e-6 {
            Ray::new(o, Vector3f::new(1.0, 0.0, 0.0))
        } else {
            Ray::new(o, d.normalize())
        }
    }

    #[test]
    fn agrees_with_linear_scan() {
        let prims = sphere_grid();
        for &split in &[SplitMethod::Middle, SplitMethod::EqualCounts] {
            let bvh = BVHAccel::new(prims.clone(), 1, split);
            let mut rng = Rng::new(21);
            for _ in 0..500 {
                let ray = random_ray(&mut rng);
                let expected = linear_intersect(&prims, &ray);
                let got = bvh.intersect(&ray);
                match (expected, got) {
                    (None, None) => {}
                    (Some(a), Some(b)) => {
                        assert!((a.t - b.t).abs() < 1e-4);
                        assert!(a.p.distance(&b.p) < 1e-3);
                    }
                    (a, b) => panic!(
                        "mismatch: linear hit = {}, bvh hit = {}",
                        a.is_some(),
                        b.is_some()
                    )
                }
            }
        }
    }

    #[test]
    fn predicate_matches_nearest_hit_query() {
        let prims = sphere_grid();
        let bvh = BVHAccel::new(prims, 2, SplitMethod::Middle);
        let mut rng = Rng::new(22);
        for _ in 0..500 {
            let ray = random_ray(&mut rng);
            assert_eq!(bvh.intersect_p(&ray), bvh.intersect(&ray).is_some());
        }
    }

    #[test]
    fn empty_tree_reports_no_hits() {
        let bvh = BVHAccel::new(Vec::new(), 1, SplitMethod::Middle);
        let ray = Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0));
        assert!(bvh.intersect(&ray).is_none());
        assert!(!bvh.intersect_p(&ray));
    }
}
