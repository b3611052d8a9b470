mod auto;
mod error;
mod plan;
mod week;

pub use auto::auto_assign_week;
pub use error::{PlanError, PlanResult};
pub use plan::{Assignment, WeekAssignments, WeekPlan};
pub use week::{parse_date, week_key, week_key_today};
