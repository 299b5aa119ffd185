//! Ordering of the parent hierarchy.
//!
//! Every function here reads the [`SceneField::Parent`] field of a scene and
//! produces an order in which each object comes after its parent, so a single
//! forward pass can propagate anything from parents to children.
//!
//! Objects whose ancestor chain ends in an object that has no parent entry of
//! its own form a *loose subtree*. They are left out of the result, as there
//! is no root to resolve them against. Duplicate parent entries and cycles are
//! errors.
//!
//! All functions run in `O(m + n)` time and memory, `m` being the parent
//! field size and `n` the scene mapping bound, independently of tree depth.
//!
//! [`SceneField::Parent`]: sceneflat_core::scene::SceneField::Parent

use fixedbitset::FixedBitSet;
use sceneflat_core::scene::SceneData;

use crate::error::{HierarchyError, HierarchyResult};

/// Child lists of the parent field in compressed form.
struct Forest {
    /// Objects with a `None` parent, in parent field order.
    roots: Vec<u32>,
    /// Children of `o` are `children[offsets[o]..offsets[o + 1]]`.
    offsets: Vec<usize>,
    /// Children grouped by parent, each group in parent field order.
    children: Vec<u32>,
    /// Parent of each listed object.
    parents: Vec<Option<u32>>,
    /// Objects that have a parent entry.
    listed: FixedBitSet,
}

impl Forest {
    fn build(pairs: &[(u32, Option<u32>)], mapping_bound: usize) -> HierarchyResult<Self> {
        let mut listed = FixedBitSet::with_capacity(mapping_bound);
        let mut parents = vec![None; mapping_bound];
        let mut offsets = vec![0usize; mapping_bound + 1];
        let mut roots = Vec::new();

        for &(object, parent) in pairs {
            if listed.put(object as usize) {
                return Err(HierarchyError::DuplicateParent { object });
            }
            parents[object as usize] = parent;
            match parent {
                Some(parent) => offsets[parent as usize + 1] += 1,
                None => roots.push(object),
            }
        }

        for i in 0..mapping_bound {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut children = vec![0; offsets[mapping_bound]];
        for &(object, parent) in pairs {
            if let Some(parent) = parent {
                let slot = &mut cursor[parent as usize];
                children[*slot] = object;
                *slot += 1;
            }
        }

        Ok(Self {
            roots,
            offsets,
            children,
            parents,
            listed,
        })
    }

    fn children(&self, object: u32) -> &[u32] {
        let object = object as usize;
        &self.children[self.offsets[object]..self.offsets[object + 1]]
    }

    /// Checks the objects missing from an ordering. Returns how many of them
    /// are in loose subtrees, or the first cycle found.
    ///
    /// Each object is walked at most once, so this stays linear.
    fn classify_unreached(
        &self,
        pairs: &[(u32, Option<u32>)],
        reached: impl IntoIterator<Item = u32>,
    ) -> HierarchyResult<usize> {
        let mut done = FixedBitSet::with_capacity(self.parents.len());
        let mut count = 0;
        for object in reached {
            done.insert(object as usize);
            count += 1;
        }
        if count == pairs.len() {
            return Ok(0);
        }

        let mut on_path = FixedBitSet::with_capacity(self.parents.len());
        let mut path = Vec::new();
        let mut loose = 0;
        for &(object, _) in pairs {
            let mut current = object;
            loop {
                let index = current as usize;
                if !self.listed.contains(index) || done.contains(index) {
                    break;
                }
                if on_path.put(index) {
                    return Err(HierarchyError::Cycle { object: current });
                }
                path.push(current);
                match self.parents[index] {
                    Some(parent) => current = parent,
                    None => break,
                }
            }
            loose += path.len();
            for object in path.drain(..) {
                done.insert(object as usize);
                on_path.set(object as usize, false);
            }
        }
        Ok(loose)
    }
}

fn build_forest(scene: &SceneData) -> HierarchyResult<(Vec<(u32, Option<u32>)>, Forest)> {
    let pairs = scene
        .parents_as_array()
        .ok_or(HierarchyError::MissingParentField)?;
    let forest = Forest::build(&pairs, scene.mapping_bound())?;
    Ok((pairs, forest))
}

fn finish(
    pairs: &[(u32, Option<u32>)],
    forest: &Forest,
    order: Vec<(u32, Option<u32>)>,
) -> HierarchyResult<Vec<(u32, Option<u32>)>> {
    let loose = forest.classify_unreached(pairs, order.iter().map(|&(object, _)| object))?;
    log::debug!(
        "Ordered {} of {} objects in the hierarchy ({} in loose subtrees)",
        order.len(),
        pairs.len(),
        loose
    );
    Ok(order)
}

/// Orders the hierarchy so that every parent comes before its children and
/// all children of one parent are next to each other.
///
/// Returns `(object, parent)` pairs. Roots come first, in parent field order,
/// followed by one contiguous cluster of children per parent. Clusters are
/// emitted depth-first, so a deep subtree stays close together in memory
/// instead of being interleaved with its cousins.
///
/// Fails with [`HierarchyError::MissingParentField`] if the scene has no
/// hierarchy, [`HierarchyError::DuplicateParent`] if an object is listed
/// twice and [`HierarchyError::Cycle`] if an ancestor chain loops.
pub fn order_cluster_parents(scene: &SceneData) -> HierarchyResult<Vec<(u32, Option<u32>)>> {
    sceneflat_core::profile_function!();

    let (pairs, forest) = build_forest(scene)?;

    let mut order: Vec<(u32, Option<u32>)> = Vec::with_capacity(pairs.len());
    order.extend(forest.roots.iter().map(|&root| (root, None)));
    let mut pending: Vec<u32> = forest.roots.iter().rev().copied().collect();
    while let Some(parent) = pending.pop() {
        let children = forest.children(parent);
        order.extend(children.iter().map(|&child| (child, Some(parent))));
        pending.extend(children.iter().rev());
    }

    finish(&pairs, &forest, order)
}

/// Like [`order_cluster_parents`], but writes into existing memory.
///
/// Both slices are expected to be as large as the parent field. The ordered
/// pairs are written to the front and their count is returned; entries past
/// it are left untouched.
pub fn order_cluster_parents_into(
    scene: &SceneData,
    objects: &mut [u32],
    parents: &mut [Option<u32>],
) -> HierarchyResult<usize> {
    let expected = scene
        .parents_as_array()
        .ok_or(HierarchyError::MissingParentField)?
        .len();
    for actual in [objects.len(), parents.len()] {
        if actual != expected {
            return Err(HierarchyError::OutputSizeMismatch { expected, actual });
        }
    }

    let order = order_cluster_parents(scene)?;
    for ((object, parent), (out_object, out_parent)) in order
        .iter()
        .zip(objects.iter_mut().zip(parents.iter_mut()))
    {
        *out_object = *object;
        *out_parent = *parent;
    }
    Ok(order.len())
}

/// Orders the hierarchy level by level: all roots, then all their children,
/// then all grandchildren and so on.
///
/// Returns `(object, parent)` pairs with the same guarantees and failure
/// modes as [`order_cluster_parents`].
pub fn parents_breadth_first(scene: &SceneData) -> HierarchyResult<Vec<(u32, Option<u32>)>> {
    sceneflat_core::profile_function!();

    let (pairs, forest) = build_forest(scene)?;

    let mut order: Vec<(u32, Option<u32>)> = Vec::with_capacity(pairs.len());
    order.extend(forest.roots.iter().map(|&root| (root, None)));
    // The output doubles as the queue.
    let mut head = 0;
    while head < order.len() {
        let parent = order[head].0;
        head += 1;
        order.extend(
            forest
                .children(parent)
                .iter()
                .map(|&child| (child, Some(parent))),
        );
    }

    finish(&pairs, &forest, order)
}

/// Lists the hierarchy in depth-first pre-order as `(object, descendant
/// count)` pairs.
///
/// The subtree of the object at index `i` occupies indices
/// `i..=i + descendants`, which makes it cheap to slice out a whole branch.
pub fn children_depth_first(scene: &SceneData) -> HierarchyResult<Vec<(u32, u32)>> {
    sceneflat_core::profile_function!();

    let (pairs, forest) = build_forest(scene)?;

    let mut order: Vec<u32> = Vec::with_capacity(pairs.len());
    let mut pending: Vec<u32> = forest.roots.iter().rev().copied().collect();
    while let Some(object) = pending.pop() {
        order.push(object);
        pending.extend(forest.children(object).iter().rev());
    }

    let loose = forest.classify_unreached(&pairs, order.iter().copied())?;
    log::debug!(
        "Listed {} of {} objects depth-first ({} in loose subtrees)",
        order.len(),
        pairs.len(),
        loose
    );

    // Children come after their parent, so a reverse walk sees every subtree
    // complete before adding it to the parent.
    let mut descendants = vec![0u32; scene.mapping_bound()];
    for &object in order.iter().rev() {
        if let Some(parent) = forest.parents[object as usize] {
            descendants[parent as usize] += descendants[object as usize] + 1;
        }
    }

    Ok(order
        .into_iter()
        .map(|object| (object, descendants[object as usize]))
        .collect())
}
