use crate::{
    db::{
        ResultStore,
        seed::{seed_fixtures, seed_teams},
    },
    errors::AppError,
};

pub async fn initialize_league(store: &ResultStore) -> Result<(), AppError> {
    tracing::info!("Initializing league database...");

    store.create_schema().await?;

    let team_count = store.count_teams().await?;
    if team_count == 0 {
        tracing::info!("No teams found in database, adding default teams");
        store.insert_teams(&seed_teams()).await?;
    } else {
        tracing::info!("Found {} existing teams in database", team_count);
    }

    let fixture_count = store.count_fixtures().await?;
    if fixture_count == 0 {
        tracing::info!("No fixtures found in database, adding the season draw");
        store.insert_fixtures(&seed_fixtures()?).await?;
    } else {
        tracing::info!("Found {} existing fixtures in database", fixture_count);
    }

    Ok(())
}
