use node_collections::SinglyLinkedList;

quickcheck::quickcheck! {
    fn sort_matches_vec_sort(values: Vec<i16>) -> bool {
        let mut list: SinglyLinkedList<i16> = values.iter().copied().collect();
        let mut sorted = values;
        list.sort();
        sorted.sort();

        list.iter().eq(sorted.iter())
    }
}

quickcheck::quickcheck! {
    fn add_first_reverses(values: Vec<i16>) -> bool {
        let mut list = SinglyLinkedList::new();
        for value in &values {
            list.add_first(*value);
        }

        list.into_iter().eq(values.into_iter().rev())
    }
}

quickcheck::quickcheck! {
    fn index_of_finds_first(values: Vec<u8>, target: u8) -> bool {
        let list: SinglyLinkedList<u8> = values.iter().copied().collect();
        let expected = values.iter().position(|value| *value == target);

        list.index_of(&target) == expected
            && list.contains(&target) == expected.is_some()
            && expected.map_or(true, |index| list[index] == target)
    }
}
