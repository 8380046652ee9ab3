use super::*;

/// Tests the first page holds the first ten administrators by id.
///
/// Expected: Ok with 10 administrators, ids ascending
#[tokio::test]
async fn returns_first_ten_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::administrator::create_administrator(db).await?.id);
    }

    let page = AdministratorRepository::new(db)
        .list_page(Page::new(Some(1)))
        .await?;

    let page_ids: Vec<i32> = page.iter().map(|a| a.id).collect();
    assert_eq!(page_ids, ids[..10]);

    Ok(())
}

/// Tests page 2 skips the first ten.
///
/// Expected: Ok with the remaining 2 administrators
#[tokio::test]
async fn skips_previous_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::administrator::create_administrator(db).await?.id);
    }

    let page = AdministratorRepository::new(db)
        .list_page(Page::new(Some(2)))
        .await?;

    let page_ids: Vec<i32> = page.iter().map(|a| a.id).collect();
    assert_eq!(page_ids, ids[10..]);

    Ok(())
}

/// Tests a missing or non-positive page falls back to the first page.
///
/// Expected: Ok with the same administrators as page 1
#[tokio::test]
async fn treats_missing_and_non_positive_pages_as_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..11 {
        factory::administrator::create_administrator(db).await?;
    }

    let repo = AdministratorRepository::new(db);
    let first = repo.list_page(Page::new(Some(1))).await?;

    assert_eq!(repo.list_page(Page::new(None)).await?, first);
    assert_eq!(repo.list_page(Page::new(Some(0))).await?, first);
    assert_eq!(repo.list_page(Page::new(Some(-3))).await?, first);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Administrator)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = AdministratorRepository::new(db).list_page(Page::default()).await?;

    assert!(page.is_empty());

    Ok(())
}
