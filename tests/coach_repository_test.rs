mod common;

use studio_repo::{ CoachRepository, DbContext, PgCoachRepository, RepositoryError };

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_writes_generated_id_back() {
    let pool = common::test_pool().await;
    let ctx = common::test_context(&pool).await;
    let repo = PgCoachRepository::new(pool.clone());

    let mut coach = common::test_coach("Coach Create");
    repo.create(&ctx, &mut coach).await.unwrap();
    assert!(coach.id > 0);

    let stored = repo.get_by_id(&ctx, coach.id).await.unwrap();
    assert_eq!(stored, coach);

    ctx.rollback().await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_by_name() {
    let pool = common::test_pool().await;
    let ctx = common::test_context(&pool).await;
    let repo = PgCoachRepository::new(pool.clone());

    let mut coach = common::test_coach("Coach By Name 7f3a");
    repo.create(&ctx, &mut coach).await.unwrap();

    let stored = repo.get_by_name(&ctx, "Coach By Name 7f3a").await.unwrap();
    assert_eq!(stored.id, coach.id);

    let missing = repo.get_by_name(&ctx, "Nobody 7f3a").await;
    assert!(matches!(missing, Err(RepositoryError::EntityDoesNotExist)));

    ctx.rollback().await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_by_id_missing() {
    let pool = common::test_pool().await;
    let repo = PgCoachRepository::new(pool.clone());

    let result = repo.get_by_id(&DbContext::background(), -1).await;
    assert!(matches!(result, Err(RepositoryError::EntityDoesNotExist)));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_all_includes_created_coaches() {
    let pool = common::test_pool().await;
    let ctx = common::test_context(&pool).await;
    let repo = PgCoachRepository::new(pool.clone());

    let mut first = common::test_coach("Coach All 1");
    let mut second = common::test_coach("Coach All 2");
    repo.create(&ctx, &mut first).await.unwrap();
    repo.create(&ctx, &mut second).await.unwrap();

    let coaches = repo.get_all(&ctx).await.unwrap();
    assert!(coaches.contains(&first));
    assert!(coaches.contains(&second));

    ctx.rollback().await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_get_all_on_empty_table_is_entity_does_not_exist() {
    let pool = common::test_pool().await;
    let ctx = common::test_context(&pool).await;
    let repo = PgCoachRepository::new(pool.clone());

    // Empty the table inside the test transaction only
    let _: Vec<(i64,)> = ctx
        .tr_or_db(&pool).await
        .fetch_all(sqlx::query_as("delete from coaches returning coach_id;")).await
        .unwrap();

    let result = repo.get_all(&ctx).await;
    assert!(matches!(result, Err(RepositoryError::EntityDoesNotExist)));

    ctx.rollback().await.unwrap();
}
