//! Given steps for roadmap grouping BDD scenarios.

use super::world::{RoadmapWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use roadmap::task::{
    domain::{EstimatedDate, Priority, Task, TaskDetails, TaskId, TaskStatus},
    ports::TaskRepository,
};
use rstest_bdd_macros::given;

#[given(r#"a roadmap task "{id}" due "{date}""#)]
fn roadmap_task(world: &mut RoadmapWorld, id: String, date: String) -> Result<(), eyre::Report> {
    let task = Task::new(
        TaskId::new(id.as_str())?,
        TaskDetails::new(format!("Roadmap item {id}"))?,
        Priority::Medium,
        TaskStatus::NotStarted,
        EstimatedDate::parse(date),
        &DefaultClock,
    );
    run_async(world.repository.store(&task)).wrap_err("store scenario task")?;
    Ok(())
}
