//! Árvore de locais de armazenamento montada a partir da lista plana

use std::collections::{HashMap, HashSet};

use contracts::domain::a002_storage_location::{StorageLocation, StorageLocationId};

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub item: StorageLocation,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Quantidade de nós na subárvore, incluindo este
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

fn sort_key(item: &StorageLocation) -> String {
    item.name.to_lowercase()
}

/// Monta a árvore; itens cujo pai não está na lista viram raízes
///
/// Um ciclo (A -> B -> A) é cortado em um dos seus membros, que vira raiz
/// com o restante do ciclo e os descendentes abaixo dele.
pub fn build_tree(items: Vec<StorageLocation>) -> Vec<TreeNode> {
    if items.is_empty() {
        return vec![];
    }

    let existing_ids: HashSet<StorageLocationId> = items.iter().map(|item| item.id).collect();

    let mut parent_of: HashMap<StorageLocationId, StorageLocationId> = HashMap::new();
    let mut children_map: HashMap<Option<StorageLocationId>, Vec<StorageLocation>> =
        HashMap::new();
    for item in items {
        let parent = item
            .parent_id
            .filter(|pid| *pid != item.id && existing_ids.contains(pid));
        if let Some(pid) = parent {
            parent_of.insert(item.id, pid);
        }
        children_map.entry(parent).or_default().push(item);
    }

    fn build_level(
        parent: Option<StorageLocationId>,
        children_map: &mut HashMap<Option<StorageLocationId>, Vec<StorageLocation>>,
    ) -> Vec<TreeNode> {
        let mut items = children_map.remove(&parent).unwrap_or_default();
        items.sort_by_key(sort_key);
        items
            .into_iter()
            .map(|item| {
                let children = build_level(Some(item.id), children_map);
                TreeNode { item, children }
            })
            .collect()
    }

    let mut roots = build_level(None, &mut children_map);
    if children_map.is_empty() {
        return roots;
    }

    // Restam ciclos e seus descendentes: subindo pelos pais, todo item chega a um ciclo
    while let Some(start) = children_map
        .values()
        .flatten()
        .min_by_key(|item| sort_key(item))
        .map(|item| item.id)
    {
        let mut path = vec![start];
        let mut current = start;
        let cut = loop {
            let Some(parent) = parent_of.get(&current).copied() else {
                break current;
            };
            if path.contains(&parent) {
                break parent;
            }
            path.push(parent);
            current = parent;
        };

        let parent = parent_of.get(&cut).copied();
        let Some(siblings) = children_map.get_mut(&parent) else {
            break;
        };
        let Some(position) = siblings.iter().position(|item| item.id == cut) else {
            break;
        };
        let item = siblings.remove(position);
        if siblings.is_empty() {
            children_map.remove(&parent);
        }
        log::warn!(
            "Local de armazenamento '{}' está em uma hierarquia circular; exibido na raiz",
            item.name
        );
        let children = build_level(Some(cut), &mut children_map);
        roots.push(TreeNode { item, children });
    }

    roots.sort_by_key(|node| sort_key(&node.item));
    roots
}

/// Mantém os nós que casam com o texto e os ancestrais deles
pub fn filter_tree(nodes: Vec<TreeNode>, filter: &str) -> Vec<TreeNode> {
    if filter.trim().is_empty() {
        return nodes;
    }

    let filter_lower = filter.trim().to_lowercase();
    let mut result = Vec::new();

    for node in nodes {
        let matches = node.item.name.to_lowercase().contains(&filter_lower)
            || node.item.code.to_lowercase().contains(&filter_lower);

        let filtered_children = filter_tree(node.children, filter);

        if matches || !filtered_children.is_empty() {
            result.push(TreeNode {
                item: node.item,
                children: filtered_children,
            });
        }
    }

    result
}

/// Locais que podem ser pai de `location_id`: nem ele mesmo, nem descendentes
///
/// Sem `location_id` (cadastro novo), todos os locais ativos são elegíveis.
pub fn eligible_parents(
    items: &[StorageLocation],
    location_id: Option<StorageLocationId>,
) -> Vec<StorageLocation> {
    let mut excluded: HashSet<StorageLocationId> = HashSet::new();

    if let Some(id) = location_id {
        excluded.insert(id);
        // fecho transitivo dos filhos
        let mut changed = true;
        while changed {
            changed = false;
            for item in items {
                if let Some(parent) = item.parent_id {
                    if excluded.contains(&parent) && excluded.insert(item.id) {
                        changed = true;
                    }
                }
            }
        }
    }

    let mut result: Vec<StorageLocation> = items
        .iter()
        .filter(|item| item.active && !excluded.contains(&item.id))
        .cloned()
        .collect();
    result.sort_by_key(|item| {
        item.full_path
            .clone()
            .unwrap_or_else(|| item.name.clone())
            .to_lowercase()
    });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_storage_location::StorageLocationType;
    use contracts::domain::common::EntityMetadata;

    fn location(name: &str, parent: Option<StorageLocationId>) -> StorageLocation {
        StorageLocation {
            id: StorageLocationId::new_v4(),
            code: name.to_uppercase(),
            name: name.to_string(),
            kind: StorageLocationType::Prateleira,
            description: None,
            parent_id: parent,
            full_path: None,
            level: 0,
            active: true,
            metadata: EntityMetadata::default(),
        }
    }

    /// deposito > (prateleira b > gaveta 1, prateleira a)
    fn sample() -> Vec<StorageLocation> {
        let deposito = location("Depósito", None);
        let prat_b = location("prateleira B", Some(deposito.id));
        let prat_a = location("Prateleira A", Some(deposito.id));
        let gaveta = location("Gaveta 1", Some(prat_b.id));
        vec![gaveta, prat_b, deposito, prat_a]
    }

    #[test]
    fn test_build_tree_sorted() {
        let tree = build_tree(sample());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].item.name, "Depósito");
        let names: Vec<_> = tree[0].children.iter().map(|n| n.item.name.as_str()).collect();
        assert_eq!(names, vec!["Prateleira A", "prateleira B"]);
        assert_eq!(tree[0].children[1].children[0].item.name, "Gaveta 1");
        assert_eq!(tree[0].size(), 4);
    }

    #[test]
    fn test_orphans_become_roots() {
        let orphan = location("Caixa avulsa", Some(StorageLocationId::new_v4()));
        let mut items = sample();
        items.push(orphan);
        let tree = build_tree(items);
        let roots: Vec<_> = tree.iter().map(|n| n.item.name.as_str()).collect();
        assert_eq!(roots, vec!["Caixa avulsa", "Depósito"]);
    }

    #[test]
    fn test_cycle_does_not_lose_items() {
        let mut a = location("A", None);
        let mut b = location("B", None);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let tree = build_tree(vec![a, b]);
        assert_eq!(tree.iter().map(TreeNode::size).sum::<usize>(), 2);
    }

    #[test]
    fn test_cycle_keeps_descendants_nested() {
        let mut a = location("A", None);
        let mut b = location("B", None);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let c = location("C", Some(a.id));
        let d = location("D", Some(c.id));
        let deposito = location("Depósito", None);

        let tree = build_tree(vec![d, c, b, a, deposito]);
        let roots: Vec<_> = tree.iter().map(|n| n.item.name.as_str()).collect();
        assert_eq!(roots, vec!["A", "Depósito"]);

        let a_node = &tree[0];
        assert_eq!(a_node.size(), 4);
        let children: Vec<_> = a_node.children.iter().map(|n| n.item.name.as_str()).collect();
        assert_eq!(children, vec!["B", "C"]);
        assert_eq!(a_node.children[1].children[0].item.name, "D");
    }

    #[test]
    fn test_filter_keeps_ancestors() {
        let tree = filter_tree(build_tree(sample()), "gaveta");
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].item.name, "prateleira B");
        assert_eq!(tree[0].size(), 3);

        assert!(filter_tree(build_tree(sample()), "vitrine").is_empty());
        assert_eq!(filter_tree(build_tree(sample()), "  ")[0].size(), 4);
    }

    #[test]
    fn test_eligible_parents_excludes_descendants() {
        let items = sample();
        let prat_b = items.iter().find(|i| i.name == "prateleira B").unwrap().id;

        let names: Vec<_> = eligible_parents(&items, Some(prat_b))
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Depósito", "Prateleira A"]);

        assert_eq!(eligible_parents(&items, None).len(), 4);
    }
}
