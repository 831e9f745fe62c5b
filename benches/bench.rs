use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use node_collections::{BinarySearchTree, SinglyLinkedList};

/// Adds `0..2^num_levels - 1` so that every level of the tree is full.
fn balanced(num_levels: u32) -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    let mut spans = vec![(0, 2i32.pow(num_levels) - 1)];
    while let Some((low, high)) = spans.pop() {
        if low < high {
            let mid = low + (high - low) / 2;
            tree.add(mid);
            spans.push((mid + 1, high));
            spans.push((low, mid));
        }
    }

    tree
}

/// Adds `0..num_nodes` in order, which leaves a tree with one node per level.
fn degenerate(num_nodes: i32) -> BinarySearchTree<i32> {
    (0..num_nodes).collect()
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs it for various sizes and shapes of
/// tree before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut BinarySearchTree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let num_nodes = 2i32.pow(num_levels) - 1;
        let largest_element_in_tree = num_nodes - 1;

        let tree_tests = [
            ("balanced", balanced(num_levels)),
            ("degenerate", degenerate(num_nodes)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let tree = balanced(11);

    group.bench_function("in_order", |b| b.iter(|| tree.in_order().sum::<i32>()));
    group.bench_function("pre_order", |b| b.iter(|| tree.pre_order().sum::<i32>()));
    group.bench_function("reverse_order", |b| {
        b.iter(|| tree.reverse_order().sum::<i32>())
    });

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for num_nodes in [100u32, 1_000, 10_000] {
        // A fixed scramble so every run sorts the same input.
        let list: SinglyLinkedList<u32> = (0..num_nodes)
            .map(|x| x.wrapping_mul(2_654_435_761) % num_nodes)
            .collect();

        group.bench_function(BenchmarkId::new("merge_sort", num_nodes), |b| {
            b.iter_batched(
                || list.clone(),
                |mut list| {
                    list.sort();
                    list
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "contains", |tree, i| {
        let _value = black_box(tree.contains(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "contains-miss", |tree, i| {
        let _value = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_traversals(c);
    bench_sort(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
