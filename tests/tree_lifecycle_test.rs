mod common;

use grove_ledger::services::tree_service::PLANTING_EVENT;
use grove_ledger::{LedgerError, TreeService, TreeSpecies};

const ALICE: i32 = 1;
const BOB: i32 = 2;

#[tokio::test]
async fn planting_writes_tree_and_initial_observation() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    let tree = trees
        .create_tree(
            ALICE,
            TreeSpecies::Oak,
            52.52,
            13.405,
            Some("Old Fritz".to_string()),
            Some("Tiergarten".to_string()),
            Some("Planted on a rainy day".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(tree.owner_id, ALICE);
    assert_eq!(tree.species, "oak");
    assert_eq!(tree.health_score, 100.0);
    assert_eq!(tree.current_value, 100.0);
    assert_eq!(tree.nickname.as_deref(), Some("Old Fritz"));

    let history = trees.get_health_history(tree.id, 50).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].health_score, 100.0);
    assert_eq!(history[0].token_value, 100.0);
    assert_eq!(history[0].event_type.as_deref(), Some(PLANTING_EVENT));
}

#[tokio::test]
async fn duplicate_nickname_is_rejected_within_owner_namespace() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    trees
        .create_tree(
            ALICE,
            TreeSpecies::Pine,
            1.0,
            2.0,
            Some("Spiky".to_string()),
            None,
            None,
        )
        .await
        .unwrap();

    let err = trees
        .create_tree(
            ALICE,
            TreeSpecies::Spruce,
            3.0,
            4.0,
            Some("Spiky".to_string()),
            None,
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::DuplicateNickname(_)));

    // The same nickname is fine under a different owner
    trees
        .create_tree(
            BOB,
            TreeSpecies::Spruce,
            3.0,
            4.0,
            Some("Spiky".to_string()),
            None,
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn nickname_match_is_case_sensitive() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    trees
        .create_tree(
            ALICE,
            TreeSpecies::Birch,
            0.0,
            0.0,
            Some("Willow".to_string()),
            None,
            None,
        )
        .await
        .unwrap();

    trees
        .create_tree(
            ALICE,
            TreeSpecies::Birch,
            0.0,
            0.0,
            Some("willow".to_string()),
            None,
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_nickname_is_treated_as_absent() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    let first = trees
        .create_tree(
            ALICE,
            TreeSpecies::Elm,
            0.0,
            0.0,
            Some(String::new()),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(first.nickname, None);

    // A second empty nickname never collides
    trees
        .create_tree(
            ALICE,
            TreeSpecies::Elm,
            0.0,
            0.0,
            Some(String::new()),
            None,
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn health_update_drives_value_and_history() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    let tree = trees
        .create_tree(ALICE, TreeSpecies::Maple, 0.0, 0.0, None, None, None)
        .await
        .unwrap();

    let updated = trees
        .update_health(
            tree.id,
            80.0,
            Some("drought".to_string()),
            Some("Dry summer".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(updated.health_score, 80.0);
    assert!((updated.current_value - 80.0).abs() < 1e-9);

    let history = trees.get_health_history(tree.id, 50).await.unwrap();
    assert_eq!(history.len(), 2);
    // Reverse-chronological: the drought entry first, planting last
    assert_eq!(history[0].health_score, 80.0);
    assert_eq!(history[0].event_type.as_deref(), Some("drought"));
    assert_eq!(history[1].health_score, 100.0);

    let latest_only = trees.get_health_history(tree.id, 1).await.unwrap();
    assert_eq!(latest_only.len(), 1);
    assert_eq!(latest_only[0].health_score, 80.0);
}

#[tokio::test]
async fn out_of_range_scores_persist_verbatim() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    let tree = trees
        .create_tree(ALICE, TreeSpecies::Oak, 0.0, 0.0, None, None, None)
        .await
        .unwrap();

    let boosted = trees.update_health(tree.id, 120.0, None, None).await.unwrap();
    assert_eq!(boosted.health_score, 120.0);
    assert!((boosted.current_value - 120.0).abs() < 1e-9);

    let negative = trees.update_health(tree.id, -5.0, None, None).await.unwrap();
    assert_eq!(negative.health_score, -5.0);
    assert!((negative.current_value - -5.0).abs() < 1e-9);
}

#[tokio::test]
async fn update_health_on_unknown_tree_fails() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    let err = trees.update_health(9999, 50.0, None, None).await.unwrap_err();
    assert!(matches!(err, LedgerError::NotFound(_)));
}

#[tokio::test]
async fn get_tree_and_history_on_unknown_tree_fail() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    assert!(matches!(
        trees.get_tree(9999).await.unwrap_err(),
        LedgerError::NotFound(_)
    ));
    assert!(matches!(
        trees.get_health_history(9999, 10).await.unwrap_err(),
        LedgerError::NotFound(_)
    ));
}

#[tokio::test]
async fn listing_is_owner_scoped_and_paginates_in_order() {
    let db = common::setup_db().await;
    let trees = TreeService::new(db);

    let mut planted = Vec::new();
    for i in 0..5 {
        let tree = trees
            .create_tree(
                ALICE,
                TreeSpecies::Pine,
                f64::from(i),
                0.0,
                None,
                None,
                None,
            )
            .await
            .unwrap();
        planted.push(tree.id);
    }
    trees
        .create_tree(BOB, TreeSpecies::Oak, 0.0, 0.0, None, None, None)
        .await
        .unwrap();

    let all = trees.list_trees(ALICE).await.unwrap();
    assert_eq!(all.len(), 5);
    let ids: Vec<i32> = all.iter().map(|t| t.id).collect();
    assert_eq!(ids, planted);

    let page = trees.list_trees_paginated(ALICE, 2, 1).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, planted[1]);
    assert_eq!(page[1].id, planted[2]);

    let past_the_end = trees.list_trees_paginated(ALICE, 10, 5).await.unwrap();
    assert!(past_the_end.is_empty());
}
