use modelmap::{AddOutcome, AddedMember, FileNode, ForestKind, IndexError, RemoteNode};

use crate::integration::support::{engine_with, sample_catalog, MockGateway};

#[tokio::test]
async fn add_then_remove_round_trip() {
    let gateway = MockGateway::new(vec![RemoteNode::directory(
        "/assets/props",
        "props",
        vec![RemoteNode::model("/assets/props/box", "box")],
    )]);
    gateway.set_add_response(AddedMember {
        result_path: "arena/box".to_string(),
        result_texture_path: Some("arena/box.png".to_string()),
    });
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();

    let outcome = engine.add_to_selection("/assets/props/box").await.unwrap();
    assert_eq!(outcome, AddOutcome::Added("arena/box".to_string()));

    let selection = engine.selection();
    assert_eq!(selection.len(), 1);
    match selection.get(selection.roots()[0]) {
        Some(FileNode::Model(model)) => {
            assert_eq!(model.path, "arena/box");
            assert_eq!(model.texture_path.as_deref(), Some("arena/box.png"));
            assert_eq!(model.parent, None);
        }
        other => panic!("expected a root model, got {:?}", other),
    }
    assert_eq!(engine.locate("arena/box"), Some(ForestKind::Selection));

    engine.remove_from_selection("arena/box").await.unwrap();
    assert!(engine.selection().is_empty());
    assert_eq!(engine.locate("arena/box"), None);
    assert_eq!(engine.index_len(), 2);
}

#[tokio::test]
async fn repeated_add_merges_into_existing_member() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();

    let first = engine.add_to_selection("/assets/props/box").await.unwrap();
    gateway.set_add_response(AddedMember {
        result_path: "arena/box".to_string(),
        result_texture_path: Some("arena/box-v2.png".to_string()),
    });
    let second = engine.add_to_selection("/assets/props/box").await.unwrap();

    assert_eq!(first, AddOutcome::Added("arena/box".to_string()));
    assert_eq!(second, AddOutcome::Merged("arena/box".to_string()));
    assert_eq!(engine.selection().len(), 1);
    let paths = engine.indexed_paths();
    assert_eq!(paths.iter().filter(|p| p.as_str() == "arena/box").count(), 1);
    assert_eq!(
        engine.lookup_model("arena/box").unwrap().texture_path.as_deref(),
        Some("arena/box-v2.png")
    );
}

#[tokio::test]
async fn add_sends_inherited_texture() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();

    engine.add_to_selection("/assets/props/box").await.unwrap();
    engine.add_to_selection("/assets/props/crate").await.unwrap();
    engine.add_to_selection("/assets/plants/fern").await.unwrap();

    assert_eq!(
        *gateway.inherited.lock(),
        vec![
            Some("/assets/props/wood.png".to_string()),
            Some("/assets/props/crate.png".to_string()),
            None,
        ]
    );
    assert_eq!(
        engine.effective_texture("arena/box").unwrap().as_deref(),
        Some("/assets/props/wood.png")
    );
}

#[tokio::test]
async fn add_requires_a_model_and_a_map() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/assets")).await.unwrap();

    assert!(matches!(
        engine.add_to_selection("/assets/props/box").await,
        Err(IndexError::NoMapSelected)
    ));
    assert!(matches!(
        engine.add_to_selection("/assets/props").await,
        Err(IndexError::WrongNodeType { .. })
    ));
    assert!(matches!(
        engine.add_to_selection("/assets/nothing").await,
        Err(IndexError::NotFound(_))
    ));
    assert_eq!(gateway.calls("add_to_selection"), 0);
    assert!(engine.selection().is_empty());
}

#[tokio::test]
async fn add_rejects_member_path_owned_by_catalog() {
    let gateway = MockGateway::new(sample_catalog());
    gateway.set_add_response(AddedMember {
        result_path: "/assets/props/box".to_string(),
        result_texture_path: None,
    });
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();

    let err = engine.add_to_selection("/assets/props/box").await.unwrap_err();

    match err {
        IndexError::PathConflict(path) => assert_eq!(path, "/assets/props/box"),
        other => panic!("expected PathConflict, got {:?}", other),
    }
    assert!(engine.selection().is_empty());
    assert_eq!(engine.index_len(), 5);
    assert_eq!(engine.locate("/assets/props/box"), Some(ForestKind::Catalog));
}

#[tokio::test]
async fn failed_add_changes_nothing() {
    let gateway = MockGateway::new(sample_catalog());
    gateway.fail("add_to_selection");
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();

    let err = engine.add_to_selection("/assets/props/box").await.unwrap_err();

    assert!(matches!(err, IndexError::GatewayFailure(_)));
    assert!(engine.selection().is_empty());
    assert_eq!(engine.index_len(), 5);
}

#[tokio::test]
async fn failed_remove_keeps_member() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();
    engine.add_to_selection("/assets/props/box").await.unwrap();

    gateway.fail("remove_from_selection");
    let err = engine.remove_from_selection("arena/box").await.unwrap_err();

    assert!(matches!(err, IndexError::GatewayFailure(_)));
    assert_eq!(engine.selection().len(), 1);
    assert_eq!(engine.locate("arena/box"), Some(ForestKind::Selection));
}

#[tokio::test]
async fn remove_only_accepts_map_members() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();

    assert!(matches!(
        engine.remove_from_selection("/assets/props/box").await,
        Err(IndexError::NotFound(_))
    ));
    assert!(matches!(
        engine.remove_from_selection("arena/ghost").await,
        Err(IndexError::NotFound(_))
    ));
    assert_eq!(gateway.calls("remove_from_selection"), 0);
    assert!(engine.lookup_model("/assets/props/box").is_ok());
}

#[tokio::test]
async fn selection_reload_reflects_backend_members() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, Some("arena"));
    engine.load_catalog(Some("/assets")).await.unwrap();
    engine.add_to_selection("/assets/props/box").await.unwrap();
    engine.add_to_selection("/assets/plants/fern").await.unwrap();

    let other = engine_with(&gateway, Some("arena"));
    other.load_selection().await.unwrap();

    assert_eq!(gateway.members("arena"), 2);
    assert_eq!(other.selection().len(), 2);
    assert_eq!(other.indexed_paths(), vec!["arena/box", "arena/fern"]);
}
