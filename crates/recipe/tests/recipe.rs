use nutriplan_recipe::{Command, Query, RecipeInput};
use nutriplan_shared::{Change, Error};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_and_find() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command.create(helpers::recipe_input("Oats")).await?;
    let recipe = query.find(&id).await?.unwrap();

    assert_eq!(recipe.title, "Oats");
    assert_eq!(recipe.total_time(), 35);
    assert_eq!(recipe.servings, 4);
    assert_eq!(
        recipe.ingredient_lines().collect::<Vec<_>>(),
        vec!["200 g oats", "500 ml milk"]
    );

    Ok(())
}

#[tokio::test]
async fn test_total_time_saturates() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command
        .create(RecipeInput {
            title: "Slow stock".to_owned(),
            prep_time: u32::MAX,
            cook_time: 1,
            ..Default::default()
        })
        .await?;
    let recipe = query.find(&id).await?.unwrap();

    assert_eq!(recipe.prep_time, u32::MAX);
    assert_eq!(recipe.total_time(), u32::MAX);

    Ok(())
}

#[tokio::test]
async fn test_list_is_sorted_by_title() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    for title in ["Pancakes", "Curry", "Oats"] {
        command.create(helpers::recipe_input(title)).await?;
    }

    let titles = query
        .list()
        .await?
        .into_iter()
        .map(|r| r.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Curry", "Oats", "Pancakes"]);

    Ok(())
}

#[tokio::test]
async fn test_update_replaces_every_field() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let id = command.create(helpers::recipe_input("Oats")).await?;
    command
        .update(
            &id,
            RecipeInput {
                title: "Overnight oats".to_owned(),
                ..Default::default()
            },
        )
        .await?;

    let recipe = query.find(&id).await?.unwrap();
    assert_eq!(recipe.title, "Overnight oats");
    assert_eq!(recipe.prep_time, 0);
    assert_eq!(recipe.cook_time, 0);
    assert_eq!(recipe.servings, 0);
    assert_eq!(recipe.ingredients, "");

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_unknown_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    let err = command
        .update("missing", helpers::recipe_input("Oats"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = command.delete("missing").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    Ok(())
}

#[tokio::test]
async fn test_validation_rejects_empty_title() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());

    let err = command
        .create(helpers::recipe_input(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validate(_)));
    assert!(Query(state).list().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_find_many_skips_missing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state.clone());
    let query = Query(state);

    let oats = command.create(helpers::recipe_input("Oats")).await?;
    let curry = command.create(helpers::recipe_input("Curry")).await?;
    command.delete(&curry).await?;

    let found = query.find_many([oats.to_owned(), curry]).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, oats);
    assert!(query.find_many(Vec::<String>::new()).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_mutations_are_published() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let mut changes = state.notifier.subscribe();
    let command = Command::new(state);

    let id = command.create(helpers::recipe_input("Oats")).await?;
    command.delete(&id).await?;

    assert_eq!(changes.recv().await?, Change::Recipe(id.to_owned()));
    assert_eq!(changes.recv().await?, Change::Recipe(id));

    Ok(())
}
