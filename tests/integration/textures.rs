use modelmap::{FileNode, IndexError, RemoteNode};

use crate::integration::support::{engine_with, sample_catalog, MockGateway};

#[tokio::test]
async fn explicit_texture_beats_ancestor_override() {
    let gateway = MockGateway::new(vec![RemoteNode::directory(
        "/assets/props",
        "props",
        vec![RemoteNode::model("/assets/props/box", "box").with_texture("T1")],
    )
    .with_custom_texture("T2")]);
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/assets")).await.unwrap();

    assert_eq!(
        engine.effective_texture("/assets/props/box").unwrap().as_deref(),
        Some("T1")
    );
}

#[tokio::test]
async fn nearest_ancestor_override_wins() {
    let gateway = MockGateway::new(vec![RemoteNode::directory(
        "/assets",
        "assets",
        vec![RemoteNode::directory(
            "/assets/props",
            "props",
            vec![RemoteNode::model("/assets/props/box", "box")],
        )
        .with_custom_texture("T2")],
    )
    .with_custom_texture("T3")]);
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/")).await.unwrap();

    assert_eq!(
        engine.effective_texture("/assets/props/box").unwrap().as_deref(),
        Some("T2")
    );
}

#[tokio::test]
async fn folder_override_flows_to_descendants() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/assets")).await.unwrap();
    assert_eq!(engine.effective_texture("/assets/plants/fern").unwrap(), None);

    engine
        .set_texture_override("/assets/plants", "/assets/plants/leaf.png")
        .await
        .unwrap();

    assert_eq!(
        engine.effective_texture("/assets/plants/fern").unwrap().as_deref(),
        Some("/assets/plants/leaf.png")
    );
    match engine.lookup_node("/assets/plants").unwrap() {
        FileNode::Directory(dir) => {
            assert_eq!(dir.custom_texture_path.as_deref(), Some("/assets/plants/leaf.png"))
        }
        other => panic!("expected directory, got {:?}", other),
    }

    engine.clear_texture_override("/assets/plants").await.unwrap();
    assert_eq!(engine.effective_texture("/assets/plants/fern").unwrap(), None);
    assert_eq!(
        *gateway.texture_writes.lock(),
        vec![
            (
                "/assets/plants".to_string(),
                Some("/assets/plants/leaf.png".to_string())
            ),
            ("/assets/plants".to_string(), None),
        ]
    );
}

#[tokio::test]
async fn model_override_shadows_folder_override() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/assets")).await.unwrap();

    engine
        .set_texture_override("/assets/props/box", "/assets/props/metal.png")
        .await
        .unwrap();

    assert_eq!(
        engine.effective_texture("/assets/props/box").unwrap().as_deref(),
        Some("/assets/props/metal.png")
    );
    assert_eq!(
        engine
            .lookup_model("/assets/props/box")
            .unwrap()
            .custom_texture_path
            .as_deref(),
        Some("/assets/props/metal.png")
    );
}

#[tokio::test]
async fn failed_override_leaves_node_untouched() {
    let gateway = MockGateway::new(sample_catalog());
    gateway.fail("set_texture_override");
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/assets")).await.unwrap();

    let err = engine
        .set_texture_override("/assets/props", "/assets/props/stone.png")
        .await
        .unwrap_err();

    assert!(matches!(err, IndexError::GatewayFailure(_)));
    assert_eq!(
        engine.effective_texture("/assets/props/box").unwrap().as_deref(),
        Some("/assets/props/wood.png")
    );
}

#[tokio::test]
async fn override_on_unknown_path_is_not_found() {
    let gateway = MockGateway::new(sample_catalog());
    let engine = engine_with(&gateway, None);
    engine.load_catalog(Some("/assets")).await.unwrap();

    assert!(matches!(
        engine.clear_texture_override("/assets/nowhere").await,
        Err(IndexError::NotFound(_))
    ));
    assert_eq!(gateway.calls("clear_texture_override"), 0);
}
