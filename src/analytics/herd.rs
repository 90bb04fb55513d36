use crate::models::{Cattle, CattleStatus};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HerdNode {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub status: CattleStatus,
    pub children: Vec<HerdNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HerdTree {
    pub roots: Vec<HerdNode>,
}

impl HerdTree {
    /// Number of animals in the tree.
    pub fn len(&self) -> usize {
        let mut pending: Vec<&HerdNode> = self.roots.iter().collect();
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Groups the herd under mothers.
///
/// An animal is a root when it has no `motherId`, names an unknown animal or
/// itself. Every animal appears exactly once; members of a `motherId` cycle,
/// which no root reaches, are promoted to roots in input order.
pub fn build_herd_tree(cattle: &[Cattle]) -> HerdTree {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(cattle.len());
    for (i, animal) in cattle.iter().enumerate() {
        index.entry(animal.meta.id.as_str()).or_insert(i);
    }

    let mother_of = |i: usize| -> Option<usize> {
        let mother_id = cattle[i].mother_id.as_deref()?.trim();
        match index.get(mother_id) {
            Some(&m) if m != i && mother_id != cattle[i].meta.id => Some(m),
            _ => None,
        }
    };

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); cattle.len()];
    for i in 0..cattle.len() {
        if let Some(m) = mother_of(i) {
            children[m].push(i);
        }
    }

    let mut visited = vec![false; cattle.len()];
    let mut roots = Vec::new();
    for i in 0..cattle.len() {
        if mother_of(i).is_none() {
            roots.push(build_node(i, cattle, &children, &mut visited));
        }
    }
    for i in 0..cattle.len() {
        if !visited[i] {
            tracing::debug!(cattle_id = %cattle[i].meta.id, "motherId cycle; promoting to root");
            roots.push(build_node(i, cattle, &children, &mut visited));
        }
    }

    HerdTree { roots }
}

/// Builds the subtree under `root` depth first with an explicit stack, so
/// lineage depth is bounded by memory rather than the call stack.
fn build_node(
    root: usize,
    cattle: &[Cattle],
    children: &[Vec<usize>],
    visited: &mut [bool],
) -> HerdNode {
    // (animal, next child to visit, finished children)
    let mut stack: Vec<(usize, usize, Vec<HerdNode>)> = vec![(root, 0, Vec::new())];
    visited[root] = true;

    while let Some(mut frame) = stack.pop() {
        if let Some(&child) = children[frame.0].get(frame.1) {
            frame.1 += 1;
            stack.push(frame);
            if !visited[child] {
                visited[child] = true;
                stack.push((child, 0, Vec::new()));
            }
            continue;
        }

        let node = node_for(&cattle[frame.0], frame.2);
        match stack.last_mut() {
            Some(parent) => parent.2.push(node),
            None => return node,
        }
    }
    node_for(&cattle[root], Vec::new())
}

fn node_for(animal: &Cattle, children: Vec<HerdNode>) -> HerdNode {
    HerdNode {
        id: animal.meta.id.clone(),
        name: animal.name.clone(),
        breed: animal.breed.clone(),
        status: animal.status,
        children,
    }
}
