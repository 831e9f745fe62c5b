use node_collections::BinarySearchTree;

quickcheck::quickcheck! {
    fn in_order_matches_sorted_input(values: Vec<i16>) -> bool {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();
        let mut sorted = values;
        sorted.sort();

        tree.len() == sorted.len() && tree.iter().eq(sorted.iter())
    }
}

quickcheck::quickcheck! {
    fn reverse_order_mirrors_in_order(values: Vec<i16>) -> bool {
        let tree: BinarySearchTree<i16> = values.into_iter().collect();
        let forward: Vec<_> = tree.in_order().collect();

        tree.reverse_order().eq(forward.into_iter().rev())
    }
}

quickcheck::quickcheck! {
    fn pre_order_visits_everything(values: Vec<i16>) -> bool {
        let tree: BinarySearchTree<i16> = values.iter().copied().collect();
        let mut visited: Vec<i16> = tree.pre_order().copied().collect();
        let mut expected = values;
        visited.sort();
        expected.sort();

        tree.pre_order().len() == expected.len() && visited == expected
    }
}

quickcheck::quickcheck! {
    fn clone_is_independent(values: Vec<i8>, removals: Vec<i8>) -> bool {
        let tree: BinarySearchTree<i8> = values.into_iter().collect();
        let mut copy = tree.clone();
        for value in &removals {
            copy.remove(value);
        }

        copy.iter().all(|value| tree.contains(value)) && copy.len() <= tree.len()
    }
}
