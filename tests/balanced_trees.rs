use balanced_collections::avl_tree::AvlTree;
use balanced_collections::red_black_tree::{RedBlackFull, RedBlackInsertOnly};
use balanced_collections::{BalancedTree, Error, RemovableTree};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 10_000;
const CHECK_INTERVAL: usize = 250;
const KEY_RANGE: u32 = 4_000;

// Upper bound on the height of any of the trees: 2 * log2(n + 1).
fn height_bound(len: usize) -> usize {
    let mut bound = 0;
    while (1 << bound) < len + 1 {
        bound += 1;
    }
    2 * bound
}

macro_rules! balanced_tree_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use super::*;
                use rand::Rng;

                #[test]
                fn int_test_add() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for i in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE);
                        assert_eq!(tree.add(key), Ok(expected.insert(key)));
                        assert_eq!(tree.len(), expected.len());

                        if i % CHECK_INTERVAL == 0 {
                            assert!(tree.is_bst());
                            assert!(tree.is_balanced());
                            assert!(tree.height() <= height_bound(tree.len()));
                        }
                    }

                    assert!(tree.is_bst());
                    assert!(tree.is_balanced());
                    assert_eq!(
                        tree.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert_eq!(tree.min(), expected.iter().next());
                    assert_eq!(tree.max(), expected.iter().next_back());

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE + 10);
                        assert_eq!(tree.contains(&key), expected.contains(&key));
                        assert_eq!(tree.floor(&key), expected.range(..=key).next_back());
                        assert_eq!(tree.ceil(&key), expected.range(key..).next());
                    }
                }

                #[test]
                fn int_test_ascending() {
                    let mut tree = $type_name::new();
                    for key in 0..NUM_OF_OPERATIONS as u32 {
                        tree.add(key).unwrap();
                    }
                    assert!(tree.is_balanced());
                    assert!(tree.height() <= height_bound(tree.len()));
                    assert_eq!(
                        tree.into_iter().collect::<Vec<u32>>(),
                        (0..NUM_OF_OPERATIONS as u32).collect::<Vec<u32>>(),
                    );
                }

                #[test]
                fn int_test_absent_key() {
                    let mut tree = $type_name::new();
                    tree.add(1u32).unwrap();
                    tree.add(2u32).unwrap();
                    let before = tree.dump_lines();

                    assert_eq!(tree.add(None), Err(Error::InvalidArgument("key is absent")));
                    assert_eq!(tree.len(), 2);
                    assert_eq!(tree.dump_lines(), before);
                }

                #[test]
                fn int_test_through_trait() {
                    fn fill<B: BalancedTree<u32>>(tree: &mut B) {
                        for key in (0..100u32).rev() {
                            assert_eq!(tree.add(key), Ok(true));
                            assert_eq!(tree.add(key), Ok(false));
                        }
                    }

                    let mut tree: $type_name<u32> = $type_name::new();
                    assert!(BalancedTree::is_empty(&tree));
                    fill(&mut tree);
                    assert_eq!(BalancedTree::len(&tree), 100);
                    assert!(BalancedTree::is_bst(&tree));
                    assert!(BalancedTree::is_balanced(&tree));
                }
            }
        )*
    }
}

macro_rules! removable_tree_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use super::*;
                use rand::Rng;

                #[test]
                fn int_test_add_remove() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for i in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, KEY_RANGE / 4);
                        if rng.gen::<bool>() {
                            assert_eq!(tree.add(key), Ok(expected.insert(key)));
                        } else {
                            assert_eq!(tree.remove(&key), expected.take(&key));
                        }
                        assert_eq!(tree.len(), expected.len());

                        if i % CHECK_INTERVAL == 0 {
                            assert!(tree.is_bst());
                            assert!(tree.is_balanced());
                        }
                    }

                    assert_eq!(
                        tree.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                }

                #[test]
                fn int_test_remove_shuffled() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut keys: Vec<u32> = (0..1_000).collect();
                    rng.shuffle(&mut keys);

                    let mut tree = $type_name::new();
                    for key in &keys {
                        tree.add(*key).unwrap();
                    }

                    rng.shuffle(&mut keys);
                    let mut expected_len = keys.len();
                    for key in &keys {
                        assert_eq!(tree.remove(key), Some(*key));
                        assert_eq!(tree.remove(key), None);
                        expected_len -= 1;
                        assert_eq!(tree.len(), expected_len);
                        assert!(tree.is_balanced());
                    }
                    assert!(tree.is_empty());
                    assert_eq!(tree.height(), 0);
                }

                #[test]
                fn int_test_round_trip() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    for _ in 0..500 {
                        tree.add(rng.gen_range(0, KEY_RANGE) * 2).unwrap();
                    }
                    let before = tree.iter().cloned().collect::<Vec<u32>>();

                    for _ in 0..100 {
                        let key = rng.gen_range(0, KEY_RANGE) * 2 + 1;
                        assert_eq!(tree.add(key), Ok(true));
                        assert_eq!(tree.remove(&key), Some(key));
                        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), before);
                        assert!(tree.is_balanced());
                    }
                }

                #[test]
                fn int_test_remove_through_trait() {
                    fn drain<B: RemovableTree<u32>>(tree: &mut B, keys: &[u32]) {
                        for key in keys {
                            assert_eq!(tree.remove(key), Some(*key));
                            assert!(tree.is_balanced());
                        }
                    }

                    let mut tree = $type_name::new();
                    for key in 0..50u32 {
                        tree.add(key).unwrap();
                    }
                    drain(&mut tree, &(0..50u32).collect::<Vec<u32>>());
                    assert!(tree.is_empty());
                }
            }
        )*
    }
}

balanced_tree_tests!(
    avl_tree: AvlTree,
    red_black_insert_only: RedBlackInsertOnly,
    red_black_full: RedBlackFull,
);

removable_tree_tests!(
    avl_tree_removal: AvlTree,
    red_black_full_removal: RedBlackFull,
);
