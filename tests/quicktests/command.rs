use command_tree::{CommandTree, NodeRef, RankStrategy};

use crate::Op;

/// Applies a set of operations to a tree and a list of every accepted assignment.
/// Listing operations are checked against the assignments made so far.
fn do_ops<K>(ops: &[Op<K>], tree: &mut CommandTree<K>, assigned: &mut Vec<(K, String)>) -> bool
where
    K: Ord + Clone,
{
    for op in ops {
        let holds = match op {
            Op::Insert(k, name) => {
                let accepted = tree.insert(k.clone(), name.clone()).is_ok();
                if accepted {
                    assigned.push((k.clone(), name.clone()));
                }
                accepted != name.is_empty()
            }
            Op::Leaves => leaves_hold(tree),
            Op::Experience => experience_holds(tree, assigned),
            Op::Rank => ranks_hold(tree, assigned),
        };
        if !holds {
            return false;
        }
    }

    true
}

/// Every id left of a node is smaller and every id right of it is at least as large, and each
/// report's parent link points back at the node.
fn is_ordered<K: Ord>(tree: &CommandTree<K>) -> bool {
    tree.iter().all(|node| {
        let left_ok = node.left().map_or(true, |left| {
            left.parent() == Some(node) && left.iter().all(|below| below.id() < node.id())
        });
        let right_ok = node.right().map_or(true, |right| {
            right.parent() == Some(node) && right.iter().all(|below| below.id() >= node.id())
        });
        left_ok && right_ok
    })
}

fn leaves_hold<K>(tree: &CommandTree<K>) -> bool {
    let expected: Vec<_> = tree
        .iter()
        .filter(|node| node.reports().count() == 0)
        .map(|node| node.name())
        .collect();

    tree.leaves_with_no_reports() == expected
}

/// Equal ids are walked in assignment order, so an ascending walk is the assignments stably
/// sorted by id and the experience listing is that reversed.
fn experience_holds<K: Ord + Clone>(tree: &CommandTree<K>, assigned: &[(K, String)]) -> bool {
    let mut sorted = assigned.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    let expected: Vec<_> = sorted.iter().rev().map(|(_, name)| name.as_str()).collect();

    tree.list_by_experience() == expected
}

fn ranks_hold<K>(tree: &CommandTree<K>, assigned: &[(K, String)]) -> bool {
    let mut everyone: Vec<_> = assigned.iter().map(|(_, name)| name.as_str()).collect();
    everyone.sort_unstable();

    [RankStrategy::ParentName, RankStrategy::Depth]
        .into_iter()
        .all(|strategy| {
            let ranks = tree.list_by_rank_with(strategy);
            let consecutive = ranks.keys().copied().eq(1..=ranks.len());
            let non_empty = ranks.values().all(|names| !names.is_empty());

            let mut ranked: Vec<_> = ranks.into_values().flatten().collect();
            ranked.sort_unstable();
            consecutive && non_empty && ranked == everyone
        })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = CommandTree::new();
    let mut assigned = Vec::new();

    do_ops(&ops, &mut tree, &mut assigned) && tree.len() == assigned.len() && is_ordered(&tree)
}

#[quickcheck]
fn ordered_after_any_insertions(xs: Vec<i8>) -> bool {
    let mut tree = CommandTree::new();
    for x in &xs {
        tree.insert(*x, format!("Ensign {x}")).unwrap();
    }

    is_ordered(&tree) && tree.len() == xs.len()
}

#[quickcheck]
fn first_insert_is_the_captain(xs: Vec<i8>) -> bool {
    let mut tree = CommandTree::new();
    for x in &xs {
        tree.insert(*x, format!("Ensign {x}")).unwrap();
    }

    match xs.first() {
        Some(first) => tree
            .root()
            .is_some_and(|root| root.id() == first && root.is_root()),
        None => tree.root().is_none(),
    }
}

#[quickcheck]
fn experience_is_non_increasing(xs: Vec<i8>) -> bool {
    let mut tree = CommandTree::new();
    for x in &xs {
        tree.insert(*x, x.to_string()).unwrap();
    }

    let ids: Vec<i8> = tree
        .list_by_experience()
        .into_iter()
        .map(|name| name.parse().unwrap())
        .collect();

    ids.len() == xs.len() && ids.windows(2).all(|pair| pair[0] >= pair[1])
}

#[quickcheck]
fn depth_ranks_match_height(xs: Vec<i8>) -> bool {
    let mut tree = CommandTree::new();
    for (i, x) in xs.iter().enumerate() {
        // Unique names so the parent-name strategy tracks depth exactly.
        tree.insert(*x, format!("Officer {i}")).unwrap();
    }

    let by_depth = tree.list_by_rank_with(RankStrategy::Depth);
    let depth_of = |node: NodeRef<'_, i8>| std::iter::successors(Some(node), NodeRef::parent).count();
    let depths_agree = by_depth.iter().all(|(rank, names)| {
        names.iter().all(|name| {
            tree.iter()
                .find(|node| node.name() == *name)
                .is_some_and(|node| depth_of(node) == *rank)
        })
    });

    by_depth.len() == tree.height() && depths_agree && tree.list_by_rank() == by_depth
}
