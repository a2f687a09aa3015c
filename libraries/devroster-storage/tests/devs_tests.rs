use devroster_core::{types::Gender, DevService};
use devroster_storage::{devs, SqliteDevService};

mod test_helpers;
use test_helpers::{sample_dev, TestDb};

#[tokio::test]
async fn test_insert_and_get_dev() {
    let db = TestDb::new().await;

    let created = devs::create(db.pool(), &sample_dev("Hong")).await.unwrap();
    assert!(created.id > 0);

    let fetched = devs::get_by_id(db.pool(), created.id)
        .await
        .unwrap()
        .expect("dev should exist");

    assert_eq!(fetched.name, "Hong");
    assert_eq!(fetched.career, 5);
    assert_eq!(fetched.email, "hong@example.com");
    assert_eq!(fetched.gender, Some(Gender::Male));
    assert_eq!(fetched.languages, vec!["Java", "Rust"]);
    assert_eq!(
        fetched.created_at.timestamp_millis(),
        created.created_at.timestamp_millis()
    );
}

#[tokio::test]
async fn test_insert_ignores_incoming_id() {
    let db = TestDb::new().await;

    let mut dev = sample_dev("Lee");
    dev.id = 999;
    let affected = devs::insert(db.pool(), &dev).await.unwrap();
    assert_eq!(affected, 1);

    assert!(devs::get_by_id(db.pool(), 999).await.unwrap().is_none());
    assert_eq!(devs::get_all(db.pool()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_all_newest_first() {
    let db = TestDb::new().await;

    devs::insert(db.pool(), &sample_dev("First")).await.unwrap();
    devs::insert(db.pool(), &sample_dev("Second")).await.unwrap();
    devs::insert(db.pool(), &sample_dev("Third")).await.unwrap();

    let names: Vec<String> = devs::get_all(db.pool())
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();

    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_gender_and_languages_may_be_empty() {
    let db = TestDb::new().await;

    let mut dev = sample_dev("Kim");
    dev.gender = None;
    dev.languages.clear();
    let created = devs::create(db.pool(), &dev).await.unwrap();

    let fetched = devs::get_by_id(db.pool(), created.id).await.unwrap().unwrap();
    assert_eq!(fetched.gender, None);
    assert!(fetched.languages.is_empty());
}

#[tokio::test]
async fn test_update_dev() {
    let db = TestDb::new().await;

    let mut dev = devs::create(db.pool(), &sample_dev("Park")).await.unwrap();
    let original_created_at = dev.created_at;

    dev.name = "Park Updated".to_string();
    dev.career = 10;
    dev.gender = Some(Gender::Female);
    dev.languages = vec!["Go".to_string()];
    dev.created_at = chrono::Utc::now() + chrono::Duration::days(1);

    let affected = devs::update(db.pool(), &dev).await.unwrap();
    assert_eq!(affected, 1);

    let fetched = devs::get_by_id(db.pool(), dev.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Park Updated");
    assert_eq!(fetched.career, 10);
    assert_eq!(fetched.gender, Some(Gender::Female));
    assert_eq!(fetched.languages, vec!["Go"]);
    assert_eq!(
        fetched.created_at.timestamp_millis(),
        original_created_at.timestamp_millis()
    );
}

#[tokio::test]
async fn test_update_unknown_key_affects_nothing() {
    let db = TestDb::new().await;

    let mut dev = sample_dev("Ghost");
    dev.id = 42;
    assert_eq!(devs::update(db.pool(), &dev).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_dev() {
    let db = TestDb::new().await;

    let dev = devs::create(db.pool(), &sample_dev("Choi")).await.unwrap();

    assert_eq!(devs::delete(db.pool(), dev.id).await.unwrap(), 1);
    assert!(devs::get_by_id(db.pool(), dev.id).await.unwrap().is_none());
    assert_eq!(devs::delete(db.pool(), dev.id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_service_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("svc.db").display());
    let service = SqliteDevService::connect(&db_url).await.unwrap();

    assert_eq!(service.insert(&sample_dev("Jung")).await.unwrap(), 1);

    let all = service.select_all().await.unwrap();
    assert_eq!(all.len(), 1);
    let key = all[0].id;

    let mut dev = service.select_by_key(key).await.unwrap().unwrap();
    dev.email = "jung@corp.example".to_string();
    assert_eq!(service.update(&dev).await.unwrap(), 1);
    assert_eq!(
        service.select_by_key(key).await.unwrap().unwrap().email,
        "jung@corp.example"
    );

    assert_eq!(service.delete(key).await.unwrap(), 1);
    assert!(service.select_all().await.unwrap().is_empty());
}
