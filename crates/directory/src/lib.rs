pub mod api;
pub mod enrich;

pub use api::{parse_users, EmployeeFetchService, HttpUserSource, UserSource};
pub use enrich::{enrich, ChoiceSource, RandomChoices, ScriptedChoices};
