//! Then steps for roadmap grouping BDD scenarios.

use super::world::{RoadmapWorld, run_async};
use roadmap::task::{
    domain::{TaskId, TaskStatus},
    ports::TaskRepository,
    services::RoadmapServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the months are "{titles}""#)]
fn months_are(world: &RoadmapWorld, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<&str> = world
        .grouping()?
        .buckets
        .iter()
        .map(|month| month.title.as_str())
        .collect();
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();

    eyre::ensure!(
        actual == expected,
        "expected months {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"month "{title}" lists "{ids}""#)]
fn month_lists(world: &RoadmapWorld, title: String, ids: String) -> Result<(), eyre::Report> {
    let month = world
        .grouping()?
        .buckets
        .iter()
        .find(|month| month.title == title)
        .ok_or_else(|| eyre::eyre!("month {title} is not shown"))?;
    let actual: Vec<&str> = month.tasks.iter().map(|task| task.id().as_str()).collect();
    let expected: Vec<&str> = ids.split(',').map(str::trim).collect();

    eyre::ensure!(
        actual == expected,
        "expected {title} to list {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"task "{id}" is shown as due "{date}""#)]
fn task_is_due(world: &RoadmapWorld, id: String, date: String) -> Result<(), eyre::Report> {
    let task = world
        .grouping()?
        .buckets
        .iter()
        .flat_map(|month| month.tasks.iter())
        .find(|task| task.id().as_str() == id)
        .ok_or_else(|| eyre::eyre!("task {id} is not shown"))?;

    eyre::ensure!(
        task.estimated_date().as_str() == date,
        "expected {id} due {date}, found {}",
        task.estimated_date()
    );
    Ok(())
}

#[then("{count:usize} task is left out of the roadmap")]
fn tasks_left_out(world: &RoadmapWorld, count: usize) -> Result<(), eyre::Report> {
    let skipped = world.grouping()?.unmapped.len();

    eyre::ensure!(
        skipped == count,
        "expected {count} skipped tasks, found {skipped}"
    );
    Ok(())
}

#[then(r#"task "{id}" has status "{status}""#)]
fn task_has_status(world: &RoadmapWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = run_async(world.repository.find_by_id(&TaskId::new(id.as_str())?))?
        .ok_or_else(|| eyre::eyre!("task {id} is not stored"))?;

    eyre::ensure!(
        task.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then("the edit fails because the task is missing")]
fn edit_fails_missing(world: &RoadmapWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_edit
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing edit result"))?;

    if !matches!(result, Err(RoadmapServiceError::TaskNotFound(_))) {
        return Err(eyre::eyre!("expected TaskNotFound error, got {result:?}"));
    }
    Ok(())
}
