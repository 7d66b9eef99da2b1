use nutriplan_shared::Error;
use nutriplan_shopping::{Command, Query};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_set_checked_only_touches_flag() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command.add(helpers::item("Milk", 2.0, "l")).await?;
    command.set_checked(&id, true).await?;

    let item = query.find(&id).await?.unwrap();
    assert!(item.checked);
    assert_eq!(item.name, "Milk");
    assert_eq!(item.amount(), "2 l");

    command.set_checked(&id, false).await?;
    assert!(!query.find(&id).await?.unwrap().checked);

    Ok(())
}

#[tokio::test]
async fn test_toggle_twice_restores_state() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command.add(helpers::item("Eggs", 12.0, "")).await?;

    command.toggle(&id).await?;
    assert!(query.find(&id).await?.unwrap().checked);

    command.toggle(&id).await?;
    assert!(!query.find(&id).await?.unwrap().checked);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_toggles_are_not_lost() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command.add(helpers::item("Rice", 1.0, "kg")).await?;

    let fut = (0..3).map(|_| command.toggle(&id));
    for result in futures::future::join_all(fut).await {
        result?;
    }

    assert!(query.find(&id).await?.unwrap().checked);

    Ok(())
}

#[tokio::test]
async fn test_clear_checked_keeps_unchecked() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let milk = command.add(helpers::item("Milk", 2.0, "l")).await?;
    let eggs = command.add(helpers::item("Eggs", 12.0, "")).await?;
    let rice = command.add(helpers::item("Rice", 1.0, "kg")).await?;
    command.set_checked(&milk, true).await?;
    command.set_checked(&rice, true).await?;

    assert_eq!(command.clear_checked().await?, 2);

    let items = query.list().await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, eggs);
    assert_eq!(command.clear_checked().await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_toggle_unknown_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    let err = command.toggle("missing").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}
