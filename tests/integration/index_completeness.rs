use std::collections::BTreeSet;

use modelmap::{AssetEngine, ForestKind, Forest, RemoteNode};
use proptest::prelude::*;

use crate::integration::support::{engine_with, sample_catalog, MockGateway};

#[derive(Debug, Clone)]
enum Op {
    LoadCatalog(bool),
    LoadSelection,
    Add(usize),
    Remove(usize),
}

const CANDIDATES: [&str; 5] = [
    "/assets/props/box",
    "/assets/props/crate",
    "/assets/plants/fern",
    "/assets/rocks/granite",
    "/assets/props",
];

const MEMBERS: [&str; 4] = ["arena/box", "arena/crate", "arena/fern", "arena/granite"];

fn alternate_catalog() -> Vec<RemoteNode> {
    vec![RemoteNode::directory(
        "/assets/rocks",
        "rocks",
        vec![
            RemoteNode::model("/assets/rocks/granite", "granite"),
            RemoteNode::directory("/assets/rocks/small", "small", vec![]),
        ],
    )]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::LoadCatalog),
        Just(Op::LoadSelection),
        (0..CANDIDATES.len()).prop_map(Op::Add),
        (0..MEMBERS.len()).prop_map(Op::Remove),
    ]
}

fn forest_paths(forest: &Forest) -> Vec<String> {
    forest
        .walk()
        .into_iter()
        .filter_map(|id| forest.get(id).map(|node| node.path().to_string()))
        .collect()
}

fn assert_index_complete(engine: &AssetEngine) {
    let catalog = forest_paths(&engine.catalog());
    let selection = forest_paths(&engine.selection());

    for path in &catalog {
        assert_eq!(engine.locate(path), Some(ForestKind::Catalog), "{}", path);
    }
    for path in &selection {
        assert_eq!(engine.locate(path), Some(ForestKind::Selection), "{}", path);
    }

    let reachable: BTreeSet<String> = catalog.into_iter().chain(selection).collect();
    let indexed: BTreeSet<String> = engine.indexed_paths().into_iter().collect();
    assert_eq!(indexed, reachable);
    assert_eq!(engine.index_len(), reachable.len());
}

proptest! {
    #[test]
    fn index_matches_forests_after_any_operation_sequence(
        ops in prop::collection::vec(op_strategy(), 1..24)
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime.block_on(async {
            let gateway = MockGateway::new(sample_catalog());
            let engine = engine_with(&gateway, Some("arena"));

            for op in ops {
                // Errors (missing nodes, wrong types) are expected along the way
                let _ = match op {
                    Op::LoadCatalog(primary) => {
                        gateway.set_catalog(if primary { sample_catalog() } else { alternate_catalog() });
                        engine.load_catalog(Some("/assets")).await.map(|_| ())
                    }
                    Op::LoadSelection => engine.load_selection().await.map(|_| ()),
                    Op::Add(i) => engine.add_to_selection(CANDIDATES[i]).await.map(|_| ()),
                    Op::Remove(i) => engine.remove_from_selection(MEMBERS[i]).await,
                };
                assert_index_complete(&engine);
            }
        });
    }
}
